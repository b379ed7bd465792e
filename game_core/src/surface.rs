//! Ports between the simulation and its host
//!
//! The game never touches a display or an event loop directly. The host
//! implements these traits and hands them to [`crate::Game::new`].

use crate::Side;
use glam::Vec2;

/// Player intent delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Up,
    Down,
    Release,
    Restart,
}

/// RGBA colour, channels 0-255 plus alpha 0.0-1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const PADDLE: Color = Color::rgb(0xe8, 0x5d, 0x04);
    pub const TRAIL: Color = Color::rgba(0, 0, 0, 0.2);
    pub const NET: Color = Color::rgba(108, 117, 125, 0.5);
    pub const OVERLAY: Color = Color::rgba(0, 0, 0, 0.7);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS colour string for canvas fill styles
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

/// One filled primitive for the drawing surface
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    /// Horizontally centred on `pos.x`
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        color: Color,
    },
}

/// Source of player input, drained once per frame
pub trait InputSource {
    fn poll(&mut self) -> Vec<InputEvent>;
}

/// Drawing surface plus the two score labels
pub trait OutputSink {
    fn draw(&mut self, command: DrawCommand);
    fn set_score(&mut self, side: Side, score: u8);
}

/// Host environment (logging)
pub trait Environment {
    fn log(&self, msg: String);
}

/// Environment that discards all log lines
pub struct SilentEnv;

impl Environment for SilentEnv {
    fn log(&self, _msg: String) {}
}

/// Map a key-down to player intent
pub fn key_down_event(key: &str) -> Option<InputEvent> {
    match key {
        "ArrowUp" | "w" | "W" => Some(InputEvent::Up),
        "ArrowDown" | "s" | "S" => Some(InputEvent::Down),
        "r" | "R" => Some(InputEvent::Restart),
        _ => None,
    }
}

/// Map a key-up to player intent
pub fn key_up_event(key: &str) -> Option<InputEvent> {
    match key {
        "ArrowUp" | "w" | "W" | "ArrowDown" | "s" | "S" => Some(InputEvent::Release),
        _ => None,
    }
}
