//! Color palette with light and dark theme support.
//!
//! A gallery app spends most of its pixels on artwork, so both palettes
//! keep the chrome quiet and let the thumbnails carry the color.

use iced::Color;

/// Application theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light theme.
    Light,
    /// Dark theme (default; wallpapers read better on dark chrome).
    #[default]
    Dark,
}

/// Complete color palette for the application.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Brand color for primary actions.
    pub primary: Color,
    /// Hover variant of the brand color.
    pub primary_light: Color,
    /// Pressed variant of the brand color.
    pub primary_dark: Color,

    /// Panel surface.
    pub surface: Color,
    /// Window background.
    pub background: Color,
    /// Recessed areas (tile wells, input fields).
    pub sunken: Color,

    /// Main text.
    pub text_primary: Color,
    /// Secondary text (metadata rows).
    pub text_secondary: Color,
    /// De-emphasized text (placeholders, captions).
    pub text_muted: Color,
    /// Text on primary-colored surfaces.
    pub text_on_primary: Color,

    /// Success messages and confirmations.
    pub success: Color,
    /// Errors and destructive actions.
    pub danger: Color,

    /// Selected row/tile background.
    pub selected: Color,
    /// Selected row/tile border.
    pub selected_border: Color,
    /// Hover background.
    pub hover: Color,

    /// Subtle separators.
    pub border_subtle: Color,
    /// Stronger separators.
    pub border_medium: Color,
}

impl Palette {
    /// Creates the light theme palette.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::from_rgb(0.13, 0.45, 0.85),
            primary_light: Color::from_rgb(0.30, 0.58, 0.95),
            primary_dark: Color::from_rgb(0.08, 0.35, 0.70),

            surface: Color::WHITE,
            background: Color::from_rgb(0.965, 0.97, 0.975),
            sunken: Color::from_rgb(0.93, 0.935, 0.945),

            text_primary: Color::from_rgb(0.10, 0.12, 0.15),
            text_secondary: Color::from_rgb(0.40, 0.44, 0.50),
            text_muted: Color::from_rgb(0.60, 0.63, 0.68),
            text_on_primary: Color::WHITE,

            success: Color::from_rgb(0.18, 0.65, 0.40),
            danger: Color::from_rgb(0.85, 0.28, 0.30),

            selected: Color::from_rgb(0.90, 0.94, 1.0),
            selected_border: Color::from_rgb(0.13, 0.45, 0.85),
            hover: Color::from_rgb(0.95, 0.96, 0.97),

            border_subtle: Color::from_rgb(0.90, 0.91, 0.92),
            border_medium: Color::from_rgb(0.82, 0.84, 0.86),
        }
    }

    /// Creates the dark theme palette.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::from_rgb(0.35, 0.62, 0.98),
            primary_light: Color::from_rgb(0.48, 0.71, 1.0),
            primary_dark: Color::from_rgb(0.25, 0.48, 0.82),

            surface: Color::from_rgb(0.11, 0.12, 0.14),
            background: Color::from_rgb(0.07, 0.08, 0.09),
            sunken: Color::from_rgb(0.05, 0.06, 0.07),

            text_primary: Color::from_rgb(0.91, 0.92, 0.94),
            text_secondary: Color::from_rgb(0.64, 0.67, 0.71),
            text_muted: Color::from_rgb(0.46, 0.49, 0.54),
            text_on_primary: Color::from_rgb(0.05, 0.06, 0.07),

            success: Color::from_rgb(0.30, 0.80, 0.52),
            danger: Color::from_rgb(1.0, 0.42, 0.42),

            selected: Color::from_rgb(0.13, 0.18, 0.26),
            selected_border: Color::from_rgb(0.35, 0.62, 0.98),
            hover: Color::from_rgb(0.14, 0.15, 0.17),

            border_subtle: Color::from_rgb(0.19, 0.20, 0.22),
            border_medium: Color::from_rgb(0.28, 0.29, 0.32),
        }
    }

    /// Gets the palette for a given theme mode.
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

/// Current active palette.
static CURRENT: std::sync::LazyLock<std::sync::RwLock<Palette>> =
    std::sync::LazyLock::new(|| std::sync::RwLock::new(Palette::dark()));

/// Sets the current global palette.
pub fn set_theme(mode: ThemeMode) {
    if let Ok(mut palette) = CURRENT.write() {
        *palette = Palette::for_mode(mode);
    }
}

/// Gets a copy of the current palette.
#[must_use]
pub fn current() -> Palette {
    CURRENT.read().map_or_else(|_| Palette::dark(), |p| *p)
}
