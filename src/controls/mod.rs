//! Headless model of the spawn controls a front end draws over the arena.
//!
//! Nothing here touches the physics core directly: clicks are turned into
//! [`SpawnRequest`]s that the driver hands to [`World::spawn`].

pub mod palette;
pub mod slider;

use glam::Vec2;
use serde::{Deserialize, Serialize};

pub use palette::{ColorButton, Palette};
pub use slider::{DragState, RadiusSlider};

use crate::{
    config::{DEFAULT_SPAWN_RADIUS, MAX_SPAWN_RADIUS, MIN_SPAWN_RADIUS, UI_BAND_HEIGHT},
    core::types::Color,
    error::Result,
    utils::allocator::BodyHandle,
    world::World,
};

/// Screen rectangle with a half-open hit test (`left <= x < right`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }
}

/// A spawn command for the physics core.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnRequest {
    pub position: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl SpawnRequest {
    pub fn apply(&self, world: &mut World) -> Result<BodyHandle> {
        world.spawn(self.position, self.radius, self.color)
    }
}

/// What a pointer press did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickOutcome {
    Spawn(SpawnRequest),
    ColorSelected(Color),
    SliderGrabbed,
    Ignored,
}

/// Slider, palette, and the control band they live in.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnControls {
    pub slider: RadiusSlider,
    pub palette: Palette,
    /// Presses with `y` at or above this value never spawn.
    pub band_height: f32,
}

impl Default for SpawnControls {
    fn default() -> Self {
        Self {
            slider: RadiusSlider::new(
                10.0,
                20.0,
                200.0,
                MIN_SPAWN_RADIUS,
                MAX_SPAWN_RADIUS,
                DEFAULT_SPAWN_RADIUS,
            ),
            palette: Palette::default(),
            band_height: UI_BAND_HEIGHT,
        }
    }
}

impl SpawnControls {
    fn in_arena(&self, point: Vec2) -> bool {
        point.y > self.band_height
    }

    /// Routes a pointer press.
    ///
    /// Below the band it produces a spawn request with the current radius and
    /// color; inside the band it selects a color or grabs the slider handle.
    pub fn press(&mut self, point: Vec2) -> ClickOutcome {
        if self.in_arena(point) {
            return ClickOutcome::Spawn(SpawnRequest {
                position: point,
                radius: self.slider.value(),
                color: self.palette.current(),
            });
        }
        if let Some(color) = self.palette.click(point) {
            return ClickOutcome::ColorSelected(color);
        }
        if self.slider.press(point) {
            return ClickOutcome::SliderGrabbed;
        }
        ClickOutcome::Ignored
    }

    pub fn pointer_moved(&mut self, point: Vec2) {
        self.slider.drag_to(point.x);
    }

    pub fn release(&mut self) {
        self.slider.release();
    }

    /// Outline to draw under the pointer, hidden over the control band.
    pub fn preview(&self, point: Vec2) -> Option<SpawnRequest> {
        self.in_arena(point).then(|| SpawnRequest {
            position: point,
            radius: self.slider.value(),
            color: self.palette.current(),
        })
    }
}
