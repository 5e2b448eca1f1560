use glam::Vec2;
use hecs::World;
use tracing::{info, trace};

use crate::systems::*;
use crate::{
    create_ball, create_paddle, Ball, Config, DrawCommand, Events, Paddle, Score, Separator, Side,
};

/// One game of Pong: the ECS world plus the resources the systems share.
///
/// Owned by whoever drives it; nothing here is global, so any number of games
/// can run side by side.
pub struct GameState {
    pub world: World,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub separator: Separator,
    pub tick: u64,
}

impl GameState {
    pub fn new(config: Config) -> Self {
        let separator = Separator::new(
            config.board_width,
            config.separator_width,
            config.separator_height,
            config.separator_gap,
        );
        let mut state = Self {
            world: World::new(),
            config,
            score: Score::new(),
            events: Events::new(),
            separator,
            tick: 0,
        };
        state.spawn_entities();
        state
    }

    fn spawn_entities(&mut self) {
        let start_y = self.config.paddle_start_y();
        create_paddle(&mut self.world, &self.config, Side::User, start_y);
        create_paddle(&mut self.world, &self.config, Side::Cpu, start_y);
        create_ball(
            &mut self.world,
            self.config.board().center(),
            Vec2::new(self.config.ball_vel_x, self.config.ball_vel_y),
            self.config.ball_radius,
            self.config.ball_speed_base,
        );
    }

    /// Back to the fresh-start layout: centred entities and zero scores
    pub fn reset(&mut self) {
        self.world.clear();
        self.spawn_entities();
        self.score = Score::new();
        self.events.clear();
        self.tick = 0;
        info!("game reset");
    }

    /// Centre the user paddle on `y` (board space), clamped to the board
    pub fn set_user_paddle_target(&mut self, y: f32) {
        let config = &self.config;
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            if paddle.side == Side::User {
                paddle.pos.y = config.clamp_paddle_y(y - paddle.size.y / 2.0);
            }
        }
    }

    /// Advance the simulation by one fixed tick
    pub fn update(&mut self) {
        // Clear events at start of tick
        self.events.clear();

        // 1. Move ball
        move_ball(&mut self.world);

        // 2. Top/bottom walls
        bounce_walls(&mut self.world, &self.config.board(), &mut self.events);

        // 3. Ball left the board
        check_scoring(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.events,
        );

        // 4. Ball vs the paddle it is heading for
        check_paddle_collision(&mut self.world, &self.config, &mut self.events);

        // 5. CPU follows the ball
        move_cpu_paddle(&mut self.world, &self.config);

        self.tick += 1;
        trace!(tick = self.tick, "tick");
    }

    /// Draw commands for the current state, in paint order
    pub fn render(&self) -> Vec<DrawCommand> {
        let config = &self.config;
        let palette = &config.palette;
        let board = config.board();
        let mut commands = Vec::new();

        commands.push(DrawCommand::FillRect {
            x: 0.0,
            y: 0.0,
            w: board.width,
            h: board.height,
            color: palette.background,
        });

        let score_y = board.height / 5.0;
        for (side, x) in [
            (Side::User, board.width / 4.0),
            (Side::Cpu, 3.0 * board.width / 4.0),
        ] {
            commands.push(DrawCommand::Text {
                text: self.score.get(side).to_string(),
                x,
                y: score_y,
                font: config.score_font.clone(),
                color: palette.score,
            });
        }

        for y in self.separator.dash_tops(board.height) {
            commands.push(DrawCommand::FillRect {
                x: self.separator.x,
                y,
                w: self.separator.width,
                h: self.separator.height,
                color: palette.separator,
            });
        }

        for side in [Side::User, Side::Cpu] {
            if let Some(paddle) = self.paddle(side) {
                commands.push(DrawCommand::FillRect {
                    x: paddle.pos.x,
                    y: paddle.pos.y,
                    w: paddle.size.x,
                    h: paddle.size.y,
                    color: palette.paddle,
                });
            }
        }

        if let Some(ball) = self.ball() {
            commands.push(DrawCommand::FillCircle {
                x: ball.pos.x,
                y: ball.pos.y,
                r: ball.radius,
                color: palette.ball,
            });
        }

        commands
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
