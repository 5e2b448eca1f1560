//! Pointer input feeding the user paddle

use std::collections::VecDeque;

/// Source of user paddle targets (vertical pointer positions in board space)
pub trait InputSource {
    /// Every target received since the previous call, oldest first
    fn drain(&mut self) -> Vec<f32>;
}

/// Queue of pre-recorded targets, for tests and replays
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    queue: VecDeque<Vec<f32>>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the samples delivered on the next drain
    pub fn push_tick(&mut self, samples: impl IntoIterator<Item = f32>) {
        self.queue.push_back(samples.into_iter().collect());
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn drain(&mut self) -> Vec<f32> {
        self.queue.pop_front().unwrap_or_default()
    }
}

/// No pointer at all
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl InputSource for NoInput {
    fn drain(&mut self) -> Vec<f32> {
        Vec::new()
    }
}
