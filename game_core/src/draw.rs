//! Draw commands emitted by the game and the surfaces that consume them

use std::convert::Infallible;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Score;

/// Opaque RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS colour string, e.g. `#ffa500`
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A single primitive to paint, in board coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    FillRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    },
    FillCircle {
        x: f32,
        y: f32,
        r: f32,
        color: Color,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        font: String,
        color: Color,
    },
}

/// What the game looked like when a frame was painted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInfo {
    pub tick: u64,
    pub score: Score,
}

/// Anything that can paint a frame of draw commands.
///
/// Commands arrive in paint order between `begin_frame` and `end_frame`.
pub trait DrawTarget {
    type Error;

    fn begin_frame(&mut self, _info: FrameInfo) -> Result<(), Self::Error> {
        Ok(())
    }

    fn draw(&mut self, command: &DrawCommand) -> Result<(), Self::Error>;

    fn end_frame(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Keeps the most recent frame in memory
#[derive(Debug, Clone, Default)]
pub struct CommandBuffer {
    pending: Vec<DrawCommand>,
    frame: Vec<DrawCommand>,
    frames: u64,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands of the last completed frame
    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.frame
    }

    /// Number of completed frames
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl DrawTarget for CommandBuffer {
    type Error = Infallible;

    fn begin_frame(&mut self, _info: FrameInfo) -> Result<(), Self::Error> {
        self.pending.clear();
        Ok(())
    }

    fn draw(&mut self, command: &DrawCommand) -> Result<(), Self::Error> {
        self.pending.push(command.clone());
        Ok(())
    }

    fn end_frame(&mut self) -> Result<(), Self::Error> {
        std::mem::swap(&mut self.frame, &mut self.pending);
        self.pending.clear();
        self.frames += 1;
        Ok(())
    }
}
