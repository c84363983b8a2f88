use std::time::Duration;

use strum_macros::{Display, EnumString};

/// Dashboard color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Process-wide presentation state: splash flag, theme, transient banner.
/// Owned by the presentation layer; the analytics core never sees it.
#[derive(Debug, Clone)]
pub struct UiState {
    pub theme: Theme,
    pub loading: bool,
    pub success_message: Option<String>,
    pub splash_delay: Duration,
}

impl UiState {
    pub fn new(theme: Theme, splash_delay: Duration) -> Self {
        Self {
            theme,
            loading: true,
            success_message: None,
            splash_delay,
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Called once the splash delay has elapsed.
    pub fn finish_loading(&mut self) {
        self.loading = false;
    }

    pub fn set_banner(&mut self, message: impl Into<String>) {
        self.success_message = Some(message.into());
    }

    /// The banner is transient; the caller clears it after its display
    /// lifetime, it never expires on its own.
    pub fn clear_banner(&mut self) {
        self.success_message = None;
    }
}
