//! Fixed-tick loop tying a game to its input and drawing surface

use crate::{DrawTarget, FrameInfo, GameState, InputSource};

/// Runs one `GameState` against an injected draw target and input source.
///
/// A tick applies pending pointer targets, updates once, then paints the
/// resulting frame. Wall-clock pacing is up to the caller.
pub struct Driver<D, I> {
    pub state: GameState,
    pub target: D,
    pub input: I,
}

impl<D: DrawTarget, I: InputSource> Driver<D, I> {
    pub fn new(state: GameState, target: D, input: I) -> Self {
        Self {
            state,
            target,
            input,
        }
    }

    pub fn tick(&mut self) -> Result<(), D::Error> {
        let targets = self.input.drain();
        self.step(&targets)
    }

    /// One tick with explicit pointer targets instead of the input source
    pub fn step(&mut self, targets: &[f32]) -> Result<(), D::Error> {
        for &y in targets {
            self.state.set_user_paddle_target(y);
        }

        self.state.update();
        self.present()
    }

    /// Paint the current state without advancing it
    pub fn present(&mut self) -> Result<(), D::Error> {
        self.target.begin_frame(FrameInfo {
            tick: self.state.tick(),
            score: self.state.score(),
        })?;
        for command in &self.state.render() {
            self.target.draw(command)?;
        }
        self.target.end_frame()
    }

    pub fn run(&mut self, ticks: u64) -> Result<(), D::Error> {
        for _ in 0..ticks {
            self.tick()?;
        }
        Ok(())
    }

    pub fn into_parts(self) -> (GameState, D, I) {
        (self.state, self.target, self.input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CommandBuffer, DrawCommand, ScriptedInput, Side};

    #[test]
    fn test_tick_updates_then_renders() {
        let mut driver = Driver::new(
            GameState::default(),
            CommandBuffer::new(),
            ScriptedInput::new(),
        );

        driver.tick().unwrap();

        assert_eq!(driver.state.tick(), 1);
        assert_eq!(driver.target.frames(), 1);
        let frame = driver.target.last_frame();
        assert_eq!(
            frame.last(),
            Some(&DrawCommand::FillCircle {
                x: 405.0,
                y: 205.0,
                r: 10.0,
                color: driver.state.config.palette.ball
            }),
            "Frame shows the post-update ball"
        );
    }

    #[test]
    fn test_pointer_applied_before_update() {
        let mut input = ScriptedInput::new();
        input.push_tick([50.0, 260.0]);
        let mut driver = Driver::new(GameState::default(), CommandBuffer::new(), input);

        driver.tick().unwrap();

        let user = driver.state.paddle(Side::User).unwrap();
        assert_eq!(user.pos.y, 210.0, "Last sample of the tick wins");
    }

    #[test]
    fn test_run_counts_ticks() {
        let mut driver = Driver::new(
            GameState::default(),
            CommandBuffer::new(),
            ScriptedInput::new(),
        );
        driver.run(25).unwrap();
        let (state, target, _input) = driver.into_parts();
        assert_eq!(state.tick(), 25);
        assert_eq!(target.frames(), 25);
    }

    #[test]
    fn test_present_does_not_advance() {
        let mut driver = Driver::new(
            GameState::default(),
            CommandBuffer::new(),
            ScriptedInput::new(),
        );
        driver.present().unwrap();
        assert_eq!(driver.state.tick(), 0);
        assert_eq!(driver.target.last_frame(), driver.state.render().as_slice());
    }
}
