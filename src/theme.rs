//! Theme Preference
//!
//! The only value persisted across sessions. Stored as `"dark"`/`"light"`
//! under `THEME_STORAGE_KEY`.

/// localStorage key holding the theme preference
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class toggled on `<html>` for the dark theme
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Anything but `"dark"` is light
    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Button label: names the theme a click switches to
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "☀️ Light",
            Theme::Light => "🌙 Dark",
        }
    }
}
