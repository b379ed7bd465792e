use crate::{Ball, Config, Paddle, Side};
use hecs::World;

/// Proportional tracking: velocity is `gain` times the vertical offset from
/// the paddle's centre to the ball.
pub fn opponent_velocity(ball_y: f32, paddle_center_y: f32, gain: f32) -> f32 {
    (ball_y - paddle_center_y) * gain
}

/// Point the right paddle at the ball
pub fn steer_opponent(world: &mut World, config: &Config) {
    let ball_y = {
        let mut ball_query = world.query::<&Ball>();
        ball_query.iter().next().map(|(_e, ball)| ball.pos.y)
    };
    let Some(ball_y) = ball_y else {
        return;
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Right {
            paddle.vy = opponent_velocity(ball_y, paddle.center_y(), config.opponent_gain);
        }
    }
}
