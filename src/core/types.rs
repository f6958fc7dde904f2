use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::utils::allocator::BodyHandle;

/// RGB tag carried from the spawn request to the renderer.
///
/// The physics core never inspects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::RED
    }
}

/// Axis-aligned arena rectangle anchored at the origin (top-left corner).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether a circle lies fully inside the arena, with `tolerance` slack on every side.
    pub fn contains_circle(&self, center: Vec2, radius: f32, tolerance: f32) -> bool {
        center.x >= radius - tolerance
            && center.x <= self.width - radius + tolerance
            && center.y >= radius - tolerance
            && center.y <= self.height - radius + tolerance
    }
}

/// Read-only render snapshot of one body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyView {
    pub handle: BodyHandle,
    pub position: Vec2,
    pub radius: f32,
    pub color: Color,
}
