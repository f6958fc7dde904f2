use glam::Vec2;

use super::Rect;
use crate::core::types::Color;

/// A labelled color button.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorButton {
    pub rect: Rect,
    pub label: &'static str,
    pub color: Color,
}

impl ColorButton {
    pub fn new(rect: Rect, label: &'static str, color: Color) -> Self {
        Self { rect, label, color }
    }

    pub fn is_clicked(&self, point: Vec2) -> bool {
        self.rect.contains(point)
    }
}

/// Row of color buttons plus the currently selected color.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    buttons: Vec<ColorButton>,
    current: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(vec![
            ColorButton::new(Rect::new(10.0, 40.0, 60.0, 30.0), "Red", Color::RED),
            ColorButton::new(Rect::new(80.0, 40.0, 60.0, 30.0), "Green", Color::GREEN),
            ColorButton::new(Rect::new(150.0, 40.0, 60.0, 30.0), "Blue", Color::BLUE),
        ])
    }
}

impl Palette {
    /// The first button's color starts selected.
    pub fn new(buttons: Vec<ColorButton>) -> Self {
        let current = buttons.first().map(|b| b.color).unwrap_or_default();
        Self { buttons, current }
    }

    pub fn buttons(&self) -> &[ColorButton] {
        &self.buttons
    }

    pub fn current(&self) -> Color {
        self.current
    }

    /// Selects the color of the first button under `point`, if any.
    pub fn click(&mut self, point: Vec2) -> Option<Color> {
        let color = self.buttons.iter().find(|b| b.is_clicked(point))?.color;
        self.current = color;
        Some(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_starts_red() {
        let palette = Palette::default();
        assert_eq!(palette.current(), Color::RED);
        assert_eq!(palette.buttons().len(), 3);
    }

    #[test]
    fn clicking_a_button_selects_its_color() {
        let mut palette = Palette::default();
        assert_eq!(palette.click(Vec2::new(100.0, 50.0)), Some(Color::GREEN));
        assert_eq!(palette.current(), Color::GREEN);

        assert_eq!(palette.click(Vec2::new(75.0, 50.0)), None);
        assert_eq!(palette.current(), Color::GREEN);
    }
}
