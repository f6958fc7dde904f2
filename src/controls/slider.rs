use glam::Vec2;

use super::Rect;

/// Radius of the slider handle, used for hit-testing.
const HANDLE_RADIUS: f32 = 8.0;

/// Track thickness.
const TRACK_HEIGHT: f32 = 10.0;

/// Whether the slider handle is currently held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// Horizontal slider mapping the handle position onto `[min, max]`.
#[derive(Debug, Clone, PartialEq)]
pub struct RadiusSlider {
    track: Rect,
    min: f32,
    max: f32,
    value: f32,
    drag: DragState,
}

impl RadiusSlider {
    /// `initial` is clamped into `[min, max]`. Requires `min < max`.
    pub fn new(x: f32, y: f32, width: f32, min: f32, max: f32, initial: f32) -> Self {
        Self {
            track: Rect::new(x, y, width, TRACK_HEIGHT),
            min,
            max,
            value: initial.clamp(min, max),
            drag: DragState::Idle,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn range(&self) -> (f32, f32) {
        (self.min, self.max)
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn track(&self) -> Rect {
        self.track
    }

    /// Screen-space center of the handle.
    pub fn handle_center(&self) -> Vec2 {
        let t = (self.value - self.min) / (self.max - self.min);
        Vec2::new(self.track.x + t * self.track.width, self.track.center().y)
    }

    fn handle_rect(&self) -> Rect {
        let center = self.handle_center();
        Rect::new(
            center.x - HANDLE_RADIUS,
            self.track.y - 4.0,
            HANDLE_RADIUS * 2.0,
            HANDLE_RADIUS * 2.0,
        )
    }

    /// Starts a drag when `point` hits the handle. Returns whether it did.
    pub fn press(&mut self, point: Vec2) -> bool {
        if self.handle_rect().contains(point) {
            self.drag = DragState::Dragging;
            return true;
        }
        false
    }

    /// Follows the pointer while dragging; ignored when idle.
    pub fn drag_to(&mut self, pointer_x: f32) {
        if self.drag != DragState::Dragging {
            return;
        }
        let x = pointer_x.clamp(self.track.left(), self.track.right());
        self.value = self.min + (x - self.track.left()) / self.track.width * (self.max - self.min);
    }

    pub fn release(&mut self) {
        self.drag = DragState::Idle;
    }
}
