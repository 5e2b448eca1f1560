pub mod board;
pub mod components;
pub mod config;
pub mod draw;
pub mod driver;
pub mod input;
pub mod params;
pub mod resources;
pub mod state;
pub mod systems;

pub use board::*;
pub use components::*;
pub use config::*;
pub use draw::*;
pub use driver::*;
pub use input::*;
pub use params::*;
pub use resources::*;
pub use state::*;

use glam::Vec2;
use hecs::World;

/// Helper to create a paddle entity; `y` is the top edge and gets clamped
pub fn create_paddle(world: &mut World, config: &Config, side: Side, y: f32) -> hecs::Entity {
    let pos = Vec2::new(config.paddle_x(side), config.clamp_paddle_y(y));
    let size = Vec2::new(config.paddle_width, config.paddle_height);
    world.spawn((Paddle::new(side, pos, size),))
}

/// Helper to create the ball entity
pub fn create_ball(
    world: &mut World,
    pos: Vec2,
    vel: Vec2,
    radius: f32,
    speed: f32,
) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, radius, speed),))
}
