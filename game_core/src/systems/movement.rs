use crate::Ball;
use hecs::World;

/// Advance the ball by one tick of its velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_ball_moves_by_velocity() {
        let mut world = World::new();
        world.spawn((Ball::new(
            Vec2::new(400.0, 200.0),
            Vec2::new(5.0, -3.0),
            10.0,
            5.0,
        ),));

        move_ball(&mut world);
        move_ball(&mut world);

        for (_entity, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, Vec2::new(410.0, 194.0));
            assert_eq!(ball.vel, Vec2::new(5.0, -3.0), "Velocity is untouched");
        }
    }
}
