use serde::{Deserialize, Serialize};

use crate::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub user: u32,
    pub cpu: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::User => self.user += 1,
            Side::Cpu => self.cpu += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::User => self.user,
            Side::Cpu => self.cpu,
        }
    }
}

/// Events that occurred during the last tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Events {
    pub user_scored: bool,
    pub cpu_scored: bool,
    pub ball_hit_paddle: Option<Side>,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.user_scored = false;
        self.cpu_scored = false;
        self.ball_hit_paddle = None;
        self.ball_hit_wall = false;
    }

    pub fn scored(&self) -> Option<Side> {
        if self.user_scored {
            Some(Side::User)
        } else if self.cpu_scored {
            Some(Side::Cpu)
        } else {
            None
        }
    }
}
