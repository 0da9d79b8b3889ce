use serde::{Deserialize, Serialize};
use terminal_colorsaurus::{QueryOptions, ThemeMode, theme_mode};
use tracing::debug;

/// Light or dark output theme.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Theme to use when no preference is stored: ask the terminal, fall back
    /// to dark.
    pub fn detect() -> Self {
        // Terminal queries can hang under test runners.
        if is_test_environment() {
            return Self::Dark;
        }
        match theme_mode(QueryOptions::default()) {
            Ok(ThemeMode::Light) => Self::Light,
            Ok(ThemeMode::Dark) => Self::Dark,
            Err(e) => {
                debug!("Terminal theme detection failed: {}", e);
                Self::Dark
            }
        }
    }
}

fn is_test_environment() -> bool {
    std::env::var("NEXTEST").is_ok() || std::env::var("RUST_TEST_THREADS").is_ok()
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
