//! Pointer input handling

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use game_core::InputSource;

/// Translate a pointer event's client Y into board space
pub fn to_board_y(client_y: f64, canvas_top: f64) -> f32 {
    (client_y - canvas_top) as f32
}

/// Pointer samples shared between the `mousemove` listener and the game loop
#[derive(Debug, Clone, Default)]
pub struct PointerQueue {
    samples: Rc<RefCell<VecDeque<f32>>>,
}

impl PointerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, y: f32) {
        self.samples.borrow_mut().push_back(y);
    }

    pub fn len(&self) -> usize {
        self.samples.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.borrow().is_empty()
    }
}

impl InputSource for PointerQueue {
    fn drain(&mut self) -> Vec<f32> {
        self.samples.borrow_mut().drain(..).collect()
    }
}
