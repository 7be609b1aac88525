//! Corner radii and shadow helpers.

use iced::{Color, Shadow, Vector};

/// Corner radius scale.
pub mod radius {
    /// Square corners.
    pub const NONE: f32 = 0.0;
    /// Inputs and small buttons.
    pub const SMALL: f32 = 6.0;
    /// Buttons and tiles.
    pub const MEDIUM: f32 = 10.0;
    /// Cards and panels.
    pub const LARGE: f32 = 14.0;
}

/// No shadow.
#[must_use]
pub fn none() -> Shadow {
    Shadow::default()
}

/// Soft shadow for raised tiles and panels.
#[must_use]
pub fn soft() -> Shadow {
    Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.18),
        offset: Vector::new(0.0, 2.0),
        blur_radius: 8.0,
    }
}
