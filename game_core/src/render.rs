//! Frame composition as a list of draw commands

use crate::{Ball, Color, DrawCommand, Paddle, Playfield, Side};
use glam::Vec2;

const NET_WIDTH: f32 = 2.0;
const NET_DASH: f32 = 10.0;
const NET_STEP: f32 = 15.0;

/// Translucent fill over the whole field; leaves a fading trail behind motion
pub fn trail_clear(field: &Playfield) -> DrawCommand {
    DrawCommand::Rect {
        x: 0.0,
        y: 0.0,
        width: field.width,
        height: field.height,
        color: Color::TRAIL,
    }
}

/// Dashed centre line
pub fn net(field: &Playfield) -> Vec<DrawCommand> {
    let x = field.width / 2.0 - NET_WIDTH / 2.0;
    let mut dashes = Vec::new();
    let mut y = 0.0;
    while y < field.height {
        dashes.push(DrawCommand::Rect {
            x,
            y,
            width: NET_WIDTH,
            height: NET_DASH,
            color: Color::NET,
        });
        y += NET_STEP;
    }
    dashes
}

/// Darkened overlay with the result and restart hint
pub fn game_over_panel(field: &Playfield, winner: Side) -> Vec<DrawCommand> {
    let center = field.center();
    let text = |text: String, dy: f32, size: f32| DrawCommand::Text {
        text,
        pos: Vec2::new(center.x, center.y + dy),
        size,
        color: Color::WHITE,
    };

    vec![
        DrawCommand::Rect {
            x: 0.0,
            y: 0.0,
            width: field.width,
            height: field.height,
            color: Color::OVERLAY,
        },
        text("Game Over".to_string(), -40.0, 24.0),
        text(format!("{} wins!", winner.label()), 0.0, 20.0),
        text("Press 'r' to play again".to_string(), 40.0, 12.0),
    ]
}

/// Full frame: trail, net, paddles, ball, then the panel if the match ended
pub fn compose_frame(
    field: &Playfield,
    paddles: &[Paddle],
    ball: Option<&Ball>,
    game_over: Option<Side>,
) -> Vec<DrawCommand> {
    let mut frame = vec![trail_clear(field)];
    frame.extend(net(field));
    frame.extend(paddles.iter().map(Paddle::draw));
    frame.extend(ball.map(Ball::draw));
    if let Some(winner) = game_over {
        frame.extend(game_over_panel(field, winner));
    }
    frame
}
