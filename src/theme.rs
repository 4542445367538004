//! Light/dark theme selection and persistence.

use std::fmt;

use crate::constants::THEME_KEY;
use crate::prefs::PreferenceStore;
use crate::register::Register;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the terminal advertises a dark background through `COLORFGBG`.
///
/// The variable looks like `15;0` (foreground;background). Background indexes
/// 0 to 6 and 8 are the dark entries of the 16-color palette.
pub fn terminal_prefers_dark() -> bool {
    std::env::var("COLORFGBG")
        .ok()
        .is_some_and(|value| colorfgbg_is_dark(&value))
}

fn colorfgbg_is_dark(value: &str) -> bool {
    value
        .rsplit(';')
        .next()
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .is_some_and(|bg| bg <= 6 || bg == 8)
}

/// The theme register plus the store it is persisted to.
pub struct ThemeController {
    current: Register<Theme>,
    store: Box<dyn PreferenceStore>,
}

impl ThemeController {
    /// Resolves the startup theme.
    ///
    /// A saved `dark` wins. With nothing saved, the terminal's own background
    /// decides. Anything else means light.
    pub fn load(mut store: Box<dyn PreferenceStore>, system_prefers_dark: bool) -> Self {
        let saved = store.get(THEME_KEY);
        let dark = match saved.as_deref() {
            Some("dark") => true,
            Some(_) => false,
            None => system_prefers_dark,
        };
        let theme = if dark { Theme::Dark } else { Theme::Light };

        if dark {
            persist(store.as_mut(), theme);
        }
        tracing::info!(theme = %theme, saved = ?saved, "resolved startup theme");

        Self {
            current: Register::new(theme),
            store,
        }
    }

    pub fn theme(&self) -> Theme {
        self.current.get()
    }

    /// Flips the theme and saves the new value.
    pub fn toggle(&mut self) -> Theme {
        let theme = self.current.get().toggled();
        self.current.set(theme);
        persist(self.store.as_mut(), theme);
        theme
    }
}

fn persist(store: &mut dyn PreferenceStore, theme: Theme) {
    if let Err(e) = store.set(THEME_KEY, theme.as_str()) {
        tracing::warn!(error = %e, theme = %theme, "failed to save theme preference");
    }
}
