//! Scripted pointer movement standing in for a mouse

use game_core::InputSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PointerPattern {
    /// Never move the pointer
    Idle,
    /// Sweep top to bottom and back
    Sweep,
    /// Hold the pointer at mid-board
    Center,
}

/// One pointer sample per tick following a fixed pattern
#[derive(Debug, Clone)]
pub struct ScriptedPointer {
    pattern: PointerPattern,
    board_height: f32,
    period: u64, // Ticks per full sweep
    tick: u64,
}

impl ScriptedPointer {
    pub fn new(pattern: PointerPattern, board_height: f32, period: u64) -> Self {
        Self {
            pattern,
            board_height,
            period: period.max(2),
            tick: 0,
        }
    }

    fn sweep_y(&self) -> f32 {
        let phase = (self.tick % self.period) as f32 / self.period as f32;
        let wave = if phase < 0.5 {
            phase * 2.0
        } else {
            2.0 - phase * 2.0
        };
        wave * self.board_height
    }
}

impl InputSource for ScriptedPointer {
    fn drain(&mut self) -> Vec<f32> {
        let samples = match self.pattern {
            PointerPattern::Idle => Vec::new(),
            PointerPattern::Center => vec![self.board_height / 2.0],
            PointerPattern::Sweep => vec![self.sweep_y()],
        };
        self.tick += 1;
        samples
    }
}
