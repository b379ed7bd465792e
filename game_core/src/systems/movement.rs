use crate::{Paddle, Playfield, Side};
use hecs::World;

/// Apply paddle velocities and clamp to the current field
pub fn move_paddles(world: &mut World, field: &Playfield) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.update(field);
    }
}

/// Copy out the paddle on `side`
pub fn find_paddle(world: &World, side: Side) -> Option<Paddle> {
    world
        .query::<&Paddle>()
        .iter()
        .find(|(_e, p)| p.side == side)
        .map(|(_e, p)| *p)
}

/// Write back a paddle previously copied out with [`find_paddle`]
pub fn store_paddle(world: &mut World, paddle: Paddle) {
    for (_entity, p) in world.query_mut::<&mut Paddle>() {
        if p.side == paddle.side {
            *p = paddle;
        }
    }
}

pub fn set_paddle_velocity(world: &mut World, side: Side, vy: f32) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == side {
            paddle.vy = vy;
        }
    }
}

pub fn recenter_paddle(world: &mut World, side: Side, field: &Playfield) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == side {
            paddle.recenter(field);
        }
    }
}

pub fn set_paddle_x(world: &mut World, side: Side, x: f32) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == side {
            paddle.x = x;
        }
    }
}
