use crate::{Ball, Board, Config, Events, Paddle, Side};
use glam::Vec2;
use hecs::World;
use tracing::debug;

/// Flip the ball's vertical velocity when it crosses the top or bottom wall.
///
/// The ball is not pushed back inside; a ball that overshoots simply keeps
/// flipping until it escapes the wall.
pub fn bounce_walls(world: &mut World, board: &Board, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y - ball.radius < 0.0 || ball.pos.y + ball.radius > board.height {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
    }
}

/// The paddle the ball is currently heading for, judged by which half of the
/// board its right edge is in.
pub fn target_side(ball: &Ball, board: &Board) -> Side {
    if ball.pos.x + ball.radius < board.mid_x() {
        Side::User
    } else {
        Side::Cpu
    }
}

/// Normalised offset of the ball from the paddle centre, roughly -1 (top
/// edge) to 1 (bottom edge). Not clamped: grazing hits can fall outside.
pub fn collide_point(ball: &Ball, paddle: &Paddle) -> f32 {
    let half_height = paddle.size.y / 2.0;
    (ball.pos.y - (paddle.pos.y + half_height)) / half_height
}

/// Outgoing ball velocity after a paddle hit
pub fn deflect(collide_point: f32, speed: f32, direction: f32, max_angle: f32) -> Vec2 {
    let angle = max_angle * collide_point;
    Vec2::new(direction * speed * angle.cos(), speed * angle.sin())
}

/// Test the ball against the paddle it is approaching and deflect it on a hit.
///
/// Only the target paddle is tested, so a ball already past the far paddle
/// cannot register a hit. There is no swept test: a ball fast enough to skip
/// over a paddle in one tick passes straight through.
pub fn check_paddle_collision(world: &mut World, config: &Config, events: &mut Events) {
    let board = config.board();

    // Collect paddle data without holding borrows
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let side = target_side(ball, &board);
        let Some(paddle) = paddles.iter().find(|p| p.side == side) else {
            continue;
        };

        if !paddle.bounds().overlaps(&ball.bounds()) {
            continue;
        }

        let point = collide_point(ball, paddle);
        let direction = match side {
            Side::User => 1.0,
            Side::Cpu => -1.0,
        };
        ball.vel = deflect(point, ball.speed, direction, config.max_bounce_angle);
        ball.speed += config.ball_speed_step;

        debug!(
            ?side,
            collide_point = point,
            speed = ball.speed,
            "ball hit paddle"
        );
        events.ball_hit_paddle = Some(side);
    }
}
