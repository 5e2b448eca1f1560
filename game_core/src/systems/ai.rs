use crate::{Ball, Config, Paddle, Side};
use hecs::World;

/// Step the CPU paddle a fixed distance toward the ball.
///
/// Down when the paddle centre is above the ball, up otherwise, so the paddle
/// jitters by one step when it is level with the ball.
pub fn move_cpu_paddle(world: &mut World, config: &Config) {
    let ball_y = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.pos.y);

    let Some(ball_y) = ball_y else {
        return;
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Cpu {
            continue;
        }
        if paddle.center_y() < ball_y {
            paddle.pos.y += config.cpu_step;
        } else {
            paddle.pos.y -= config.cpu_step;
        }
        paddle.pos.y = config.clamp_paddle_y(paddle.pos.y);
    }
}
