use crate::systems::{bounce_off_paddle, bounce_off_walls, check_scoring};
use crate::{Color, Config, DrawCommand, Events, GameRng, Playfield};
use glam::Vec2;

/// Which end of the table an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,  // Player
    Right, // Heuristic opponent
}

impl Side {
    /// Name shown on the game-over banner
    pub fn label(&self) -> &'static str {
        match self {
            Side::Left => "Player 1",
            Side::Right => "CPU",
        }
    }
}

/// Paddle component - a vertical bar, positioned by its top-left corner
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub vy: f32, // Set externally: input or opponent heuristic
    pub score: u8,
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32, config: &Config) -> Self {
        Self {
            side,
            x,
            y,
            width: config.paddle_width,
            height: config.paddle_height,
            vy: 0.0,
            score: 0,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn right_edge(&self) -> f32 {
        self.x + self.width
    }

    /// Apply velocity, then clamp into the field
    pub fn update(&mut self, field: &Playfield) {
        self.y += self.vy;
        self.y = field.clamp_top(self.y, self.height);
    }

    pub fn recenter(&mut self, field: &Playfield) {
        self.y = field.height / 2.0 - self.height / 2.0;
    }

    /// True if `y` lies strictly inside the paddle's vertical span
    pub fn spans(&self, y: f32) -> bool {
        y > self.y && y < self.y + self.height
    }

    pub fn draw(&self) -> DrawCommand {
        DrawCommand::Rect {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            color: Color::PADDLE,
        }
    }
}

/// Pending serve owned by the ball.
///
/// Scheduling always replaces whatever was pending, so at most one serve can
/// ever fire per reset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServeTimer {
    pub remaining: Option<f32>, // seconds until serve, None = nothing pending
}

impl ServeTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, delay: f32) {
        self.remaining = Some(delay);
    }

    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    pub fn is_pending(&self) -> bool {
        self.remaining.is_some()
    }

    /// Advance by `dt`; returns true exactly once, when the delay elapses
    pub fn tick(&mut self, dt: f32) -> bool {
        match self.remaining {
            Some(t) if t - dt <= 0.0 => {
                self.remaining = None;
                true
            }
            Some(t) => {
                self.remaining = Some(t - dt);
                false
            }
            None => false,
        }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub serve: ServeTimer,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            serve: ServeTimer::new(),
        }
    }

    /// Integrate one frame, then resolve walls, paddles and scoring in order.
    ///
    /// Returns the side that scored, if any.
    pub fn update(
        &mut self,
        left: &mut Paddle,
        right: &mut Paddle,
        field: &Playfield,
        config: &Config,
        events: &mut Events,
    ) -> Option<Side> {
        self.pos += self.vel;

        bounce_off_walls(self, field, events);
        bounce_off_paddle(self, left, config, events);
        bounce_off_paddle(self, right, config, events);
        check_scoring(self, left, right, field, config, events)
    }

    /// Recentre, stop, and schedule a fresh serve (cancelling any pending one)
    pub fn reset(&mut self, field: &Playfield, config: &Config) {
        self.pos = field.center();
        self.vel = Vec2::ZERO;
        self.serve.schedule(config.serve_delay);
    }

    /// Count down the pending serve and launch the ball when it elapses
    pub fn tick_serve(&mut self, dt: f32, rng: &mut GameRng, config: &Config) -> bool {
        if !self.serve.tick(dt) {
            return false;
        }

        use rand::Rng;
        let vx = if rng.0.gen_bool(0.5) {
            config.serve_speed_x
        } else {
            -config.serve_speed_x
        };
        let vy = rng
            .0
            .gen_range(-config.serve_spread_y..config.serve_spread_y);
        self.vel = Vec2::new(vx, vy);
        true
    }

    pub fn draw(&self) -> DrawCommand {
        DrawCommand::Circle {
            center: self.pos,
            radius: self.radius,
            color: Color::WHITE,
        }
    }
}
