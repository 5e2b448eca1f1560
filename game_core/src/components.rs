use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::board::Aabb;

/// Which end of the board a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    User, // left, pointer controlled
    Cpu,  // right, AI controlled
}

/// Paddle component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,  // Top-left corner; x is fixed per side
    pub size: Vec2, // width, height
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, size: Vec2) -> Self {
        Self { side, pos, size }
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Magnitude used when the ball is deflected off a paddle
    pub speed: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            speed,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_circle(self.pos, self.radius)
    }

    /// Put the ball back on the centre spot after a point.
    ///
    /// Horizontal direction flips so the serve goes toward the player who just
    /// scored; vertical velocity is left as is.
    pub fn reset(&mut self, center: Vec2, base_speed: f32) {
        self.pos = center;
        self.vel.x = -self.vel.x;
        self.speed = base_speed;
    }
}

/// Dashed half-way line; display only
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Separator {
    pub x: f32,
    pub width: f32,
    pub height: f32, // Height of one dash
    pub gap: f32,    // Distance between dash tops
}

impl Separator {
    pub fn new(board_width: f32, width: f32, height: f32, gap: f32) -> Self {
        Self {
            x: (board_width - width) / 2.0,
            width,
            height,
            gap,
        }
    }

    /// Top y of every dash from 0 through `board_height` inclusive
    pub fn dash_tops(&self, board_height: f32) -> impl Iterator<Item = f32> {
        let gap = self.gap;
        let last = (board_height / gap).floor() as u64;
        (0..=last)
            .map(move |i| i as f32 * gap)
            .take_while(move |y| *y <= board_height)
    }
}
