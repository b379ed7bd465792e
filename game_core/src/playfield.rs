use glam::Vec2;

/// Rectangular simulation bounds, origin top-left, y grows downward.
///
/// Re-derived from the host surface on every resize, so entities receive the
/// current value on each call instead of caching it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Clamp the top edge of an object of `extent` height into the field.
    ///
    /// A field shorter than the object pins it to the top.
    pub fn clamp_top(&self, y: f32, extent: f32) -> f32 {
        y.min(self.height - extent).max(0.0)
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new(
            crate::Params::DEFAULT_WIDTH,
            crate::Params::DEFAULT_HEIGHT,
        )
    }
}
