use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Board, Color, Params, Side};

/// Reasons a configuration is rejected before a game starts
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be finite and > 0, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("paddle height {paddle} does not fit the board height {board}")]
    PaddleTooTall { paddle: f32, board: f32 },
    #[error("paddle width {paddle} leaves no room on a board {board} wide")]
    PaddleTooWide { paddle: f32, board: f32 },
    #[error("tick rate must be at least 1 Hz")]
    ZeroTickRate,
    #[error("invalid config json")]
    Json(#[from] serde_json::Error),
}

/// Display colours
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Palette {
    pub background: Color,
    pub score: Color,
    pub separator: Color,
    pub paddle: Color,
    pub ball: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            score: Color::WHITE,
            separator: Color::ORANGE,
            paddle: Color::RED,
            ball: Color::GREEN,
        }
    }
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub board_width: f32,
    pub board_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub cpu_step: f32,
    pub ball_radius: f32,
    pub ball_speed_base: f32,
    pub ball_speed_step: f32,
    pub ball_vel_x: f32,
    pub ball_vel_y: f32,
    pub max_bounce_angle: f32,
    pub separator_width: f32,
    pub separator_height: f32,
    pub separator_gap: f32,
    pub score_font: String,
    pub tick_rate_hz: u32,
    pub palette: Palette,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board_width: Params::BOARD_WIDTH,
            board_height: Params::BOARD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            cpu_step: Params::CPU_STEP,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_base: Params::BALL_SPEED_BASE,
            ball_speed_step: Params::BALL_SPEED_STEP,
            ball_vel_x: Params::BALL_VEL_INITIAL.0,
            ball_vel_y: Params::BALL_VEL_INITIAL.1,
            max_bounce_angle: Params::MAX_BOUNCE_ANGLE,
            separator_width: Params::SEPARATOR_WIDTH,
            separator_height: Params::SEPARATOR_HEIGHT,
            separator_gap: Params::SEPARATOR_GAP,
            score_font: Params::SCORE_FONT.to_string(),
            tick_rate_hz: Params::TICK_RATE_HZ,
            palette: Palette::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) JSON config; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("boardWidth", self.board_width),
            ("boardHeight", self.board_height),
            ("paddleWidth", self.paddle_width),
            ("paddleHeight", self.paddle_height),
            ("ballRadius", self.ball_radius),
            ("ballSpeedBase", self.ball_speed_base),
            ("separatorHeight", self.separator_height),
            ("separatorGap", self.separator_gap),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if self.paddle_height > self.board_height {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_height,
                board: self.board_height,
            });
        }
        if self.paddle_width * 2.0 >= self.board_width {
            return Err(ConfigError::PaddleTooWide {
                paddle: self.paddle_width,
                board: self.board_width,
            });
        }
        if self.tick_rate_hz == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        Ok(())
    }

    pub fn board(&self) -> Board {
        Board::new(self.board_width, self.board_height)
    }

    /// Get X position (left edge) for a paddle based on its side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::User => 0.0,
            Side::Cpu => self.board_width - self.paddle_width,
        }
    }

    /// Y position (top edge) that centres a paddle vertically
    pub fn paddle_start_y(&self) -> f32 {
        (self.board_height - self.paddle_height) / 2.0
    }

    /// Clamp paddle top edge into `[0, board_height - paddle_height]`
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        let y = if y < 0.0 { 0.0 } else { y };
        if y + self.paddle_height > self.board_height {
            self.board_height - self.paddle_height
        } else {
            y
        }
    }

    /// Wall-clock period of one simulation tick
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_rate_hz.max(1) as f64)
    }
}
