use crate::{find_paddle, store_paddle, Ball, Config, Events, Paddle, Playfield, Side};
use hecs::World;

/// Reflect off the top and bottom edges.
///
/// Velocity only; the ball may sit slightly past the edge for a frame.
pub fn bounce_off_walls(ball: &mut Ball, field: &Playfield, events: &mut Events) {
    if ball.pos.y - ball.radius < 0.0 || ball.pos.y + ball.radius > field.height {
        ball.vel.y = -ball.vel.y;
        events.ball_hit_wall = true;
    }
}

/// Reflect off a paddle face. Returns true on a hit.
///
/// Only a ball travelling toward the paddle can hit it, so at most one paddle
/// fires per frame. On a hit the ball is placed flush with the face so it
/// cannot trigger again next frame.
pub fn bounce_off_paddle(
    ball: &mut Ball,
    paddle: &Paddle,
    config: &Config,
    events: &mut Events,
) -> bool {
    let crossed = match paddle.side {
        Side::Left => ball.vel.x < 0.0 && ball.pos.x - ball.radius < paddle.right_edge(),
        Side::Right => ball.vel.x > 0.0 && ball.pos.x + ball.radius > paddle.x,
    };
    if !crossed || !paddle.spans(ball.pos.y) {
        return false;
    }

    ball.vel.x *= -config.ball_speed_increase;
    ball.vel.y = (ball.pos.y - paddle.center_y()) * config.ball_spin;
    ball.pos.x = match paddle.side {
        Side::Left => paddle.right_edge() + ball.radius,
        Side::Right => paddle.x - ball.radius,
    };

    events.ball_hit_paddle = true;
    true
}

/// Run one ball update against both paddles. Returns the side that scored.
pub fn update_ball(
    world: &mut World,
    field: &Playfield,
    config: &Config,
    events: &mut Events,
) -> Option<Side> {
    // Copy paddles out so the ball can borrow them alongside itself
    let (Some(mut left), Some(mut right)) = (
        find_paddle(world, Side::Left),
        find_paddle(world, Side::Right),
    ) else {
        return None;
    };

    let mut scored = None;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        scored = ball.update(&mut left, &mut right, field, config, events);
    }

    store_paddle(world, left);
    store_paddle(world, right);
    scored
}
