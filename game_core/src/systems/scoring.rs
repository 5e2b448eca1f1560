use crate::{Ball, Config, Events, Score, Side};
use hecs::World;
use tracing::debug;

/// Award a point when the ball leaves the board past a paddle, then reset it.
pub fn check_scoring(world: &mut World, config: &Config, score: &mut Score, events: &mut Events) {
    let board = config.board();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let scorer = if ball.pos.x - ball.radius < 0.0 {
            Side::Cpu
        } else if ball.pos.x + ball.radius > board.width {
            Side::User
        } else {
            continue;
        };

        score.increment(scorer);
        match scorer {
            Side::User => events.user_scored = true,
            Side::Cpu => events.cpu_scored = true,
        }
        debug!(?scorer, user = score.user, cpu = score.cpu, "point scored");

        ball.reset(board.center(), config.ball_speed_base);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    fn setup_world() -> (hecs::World, Config, Score, Events) {
        (World::new(), Config::new(), Score::new(), Events::new())
    }

    fn only_ball(world: &World) -> Ball {
        world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
            .expect("ball exists")
    }

    #[test]
    fn test_cpu_scores_when_ball_exits_left() {
        let (mut world, config, mut score, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(9.0, 120.0), Vec2::new(-8.0, 3.0), 10.0, 9.0);

        check_scoring(&mut world, &config, &mut score, &mut events);

        assert_eq!(score.cpu, 1, "CPU should score");
        assert_eq!(score.user, 0, "User should not score");
        assert!(events.cpu_scored, "Should trigger cpu_scored event");
    }

    #[test]
    fn test_user_scores_when_ball_exits_right() {
        let (mut world, config, mut score, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(791.0, 120.0), Vec2::new(8.0, 3.0), 10.0, 9.0);

        check_scoring(&mut world, &config, &mut score, &mut events);

        assert_eq!(score.user, 1, "User should score");
        assert_eq!(score.cpu, 0, "CPU should not score");
        assert!(events.user_scored, "Should trigger user_scored event");
    }

    #[test]
    fn test_ball_resets_after_scoring() {
        let (mut world, config, mut score, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(5.0, 120.0), Vec2::new(-8.0, 3.0), 10.0, 9.0);

        check_scoring(&mut world, &config, &mut score, &mut events);

        let ball = only_ball(&world);
        assert_eq!(ball.pos, Vec2::new(400.0, 200.0), "Ball back on the centre spot");
        assert_eq!(ball.vel, Vec2::new(8.0, 3.0), "Only horizontal direction flips");
        assert_eq!(ball.speed, 5.0, "Speed back to base");
    }

    #[test]
    fn test_ball_on_edge_does_not_score() {
        let (mut world, config, mut score, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(10.0, 200.0), Vec2::new(-5.0, 0.0), 10.0, 5.0);

        check_scoring(&mut world, &config, &mut score, &mut events);

        assert_eq!(score, Score::new());
        assert_eq!(events.scored(), None);
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, config, mut score, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(400.0, 200.0), Vec2::new(5.0, 5.0), 10.0, 5.0);

        check_scoring(&mut world, &config, &mut score, &mut events);

        assert_eq!(score.user, 0, "No score when ball in bounds");
        assert_eq!(score.cpu, 0, "No score when ball in bounds");
        assert!(
            !events.user_scored && !events.cpu_scored,
            "No scoring events"
        );
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut world, config, mut score, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(795.0, 200.0), Vec2::new(5.0, 0.0), 10.0, 5.0);
        check_scoring(&mut world, &config, &mut score, &mut events);
        events.clear();

        for (_e, ball) in world.query_mut::<&mut Ball>() {
            ball.pos.x = 800.0;
        }
        check_scoring(&mut world, &config, &mut score, &mut events);

        assert_eq!(score.user, 2, "Scores should accumulate");
        assert_eq!(score.cpu, 0);
    }
}
