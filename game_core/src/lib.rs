pub mod components;
pub mod config;
pub mod fsm;
pub mod game;
pub mod params;
pub mod playfield;
pub mod render;
pub mod resources;
pub mod session;
pub mod surface;
pub mod systems;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use game::*;
pub use params::*;
pub use playfield::*;
pub use resources::*;
pub use session::*;
pub use surface::*;
pub use systems::*;

use glam::Vec2;
use hecs::World;

/// Helper to create a paddle entity, vertically centred at its side's x
pub fn create_paddle(
    world: &mut World,
    side: Side,
    field: &Playfield,
    config: &Config,
) -> hecs::Entity {
    let x = config.paddle_x(side, field);
    let y = config.paddle_spawn_y(field);
    world.spawn((Paddle::new(side, x, y, config),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: Vec2, vel: Vec2, config: &Config) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, config.ball_radius),))
}
