//! Persisted application settings.

use crate::style::widgets::palette::ThemeMode;

/// Settings that persist across sessions in `settings.json`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AppSettings {
    /// Base URL of the remote board deployment. The one piece of
    /// configuration this client needs.
    pub base_url: String,
    /// Current theme mode (serialized as string).
    #[serde(with = "theme_mode_serde")]
    pub theme_mode: ThemeMode,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost".into(),
            theme_mode: ThemeMode::Dark,
        }
    }
}

/// Serde helpers for `ThemeMode` (it lives in the style layer and does
/// not derive `Serialize`/`Deserialize` itself).
mod theme_mode_serde {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::ThemeMode;

    #[allow(clippy::trivially_copy_pass_by_ref)] // Required by serde with= signature
    pub fn serialize<S>(mode: &ThemeMode, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match mode {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        };
        serializer.serialize_str(s)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<ThemeMode, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "light" => Ok(ThemeMode::Light),
            _ => Ok(ThemeMode::Dark),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_round_trip() {
        let settings = AppSettings {
            base_url: "http://boards.example.com/board".into(),
            theme_mode: ThemeMode::Light,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.base_url, settings.base_url);
        assert_eq!(back.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn test_unknown_theme_falls_back_to_dark() {
        let back: AppSettings =
            serde_json::from_str(r#"{"base_url": "http://localhost", "theme_mode": "sepia"}"#)
                .unwrap();
        assert_eq!(back.theme_mode, ThemeMode::Dark);
    }
}
