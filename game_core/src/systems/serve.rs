use crate::{Ball, Config, Events, GameRng, Playfield, Time};
use hecs::World;

/// Advance pending serves by this frame's dt
pub fn tick_serve(
    world: &mut World,
    time: &Time,
    rng: &mut GameRng,
    config: &Config,
    events: &mut Events,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.tick_serve(time.dt, rng, config) {
            events.ball_served = true;
        }
    }
}

/// Recentre the ball and schedule a new serve
pub fn reset_ball(world: &mut World, field: &Playfield, config: &Config) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset(field, config);
    }
}
