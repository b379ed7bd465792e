use crate::{Ball, Config, Events, Paddle, Playfield, Side};

/// Check if ball left the field; award the point and reset the ball.
///
/// At most one side scores per call.
pub fn check_scoring(
    ball: &mut Ball,
    left: &mut Paddle,
    right: &mut Paddle,
    field: &Playfield,
    config: &Config,
    events: &mut Events,
) -> Option<Side> {
    let scorer = if ball.pos.x - ball.radius < 0.0 {
        right.score += 1;
        events.right_scored = true;
        Side::Right
    } else if ball.pos.x + ball.radius > field.width {
        left.score += 1;
        events.left_scored = true;
        Side::Left
    } else {
        return None;
    };

    ball.reset(field, config);
    Some(scorer)
}
