//! Container style functions.

use iced::widget::container;
use iced::{Background, Border};

use super::palette;
use super::shadows;
use super::shadows::radius;

/// Top bar with search and account controls.
pub fn header_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();
    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Board list on the left.
pub fn sidebar_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();
    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Scrollable gallery area.
pub fn gallery_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();
    container::Style {
        background: Some(Background::Color(p.background)),
        ..Default::default()
    }
}

/// One wallpaper tile in the grid.
pub fn tile_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();
    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        shadow: shadows::soft(),
        ..Default::default()
    }
}

/// "No Preview" well inside a tile whose thumbnail is missing or failed.
pub fn placeholder_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();
    container::Style {
        background: Some(Background::Color(p.sunken)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        ..Default::default()
    }
}

/// Detail panel surface.
pub fn detail_panel_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();
    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::LARGE.into(),
        },
        shadow: shadows::soft(),
        ..Default::default()
    }
}

/// Banner shown above the grid when a pagination fetch fails.
pub fn error_banner_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();
    container::Style {
        background: Some(Background::Color(p.sunken)),
        border: Border {
            color: p.danger,
            width: 1.0,
            radius: radius::SMALL.into(),
        },
        ..Default::default()
    }
}

/// Transient confirmation line in the detail panel.
pub fn status_ok_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();
    container::Style {
        background: Some(Background::Color(p.sunken)),
        border: Border {
            color: p.success,
            width: 1.0,
            radius: radius::SMALL.into(),
        },
        ..Default::default()
    }
}

/// Failure line in the detail panel.
pub fn status_error_style(theme: &iced::Theme) -> container::Style {
    error_banner_style(theme)
}
