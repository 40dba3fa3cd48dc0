// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme mode.

use iced::Theme;
use serde::{Deserialize, Serialize};

/// Theme selection persisted in the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the operating system preference.
    #[default]
    System,
}

impl ThemeMode {
    /// Resolves the mode to a concrete Iced theme.
    ///
    /// For `System`, detects the OS preference; defaults to dark when
    /// detection fails.
    #[must_use]
    pub fn resolve(&self) -> Theme {
        match self {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
            ThemeMode::System => {
                if matches!(dark_light::detect(), Ok(dark_light::Mode::Light)) {
                    Theme::Light
                } else {
                    Theme::Dark
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_resolve_directly() {
        assert_eq!(ThemeMode::Light.resolve(), Theme::Light);
        assert_eq!(ThemeMode::Dark.resolve(), Theme::Dark);
    }

    #[test]
    fn mode_round_trips_through_serde() {
        let serialized = toml::to_string(&SerdeWrap {
            theme_mode: ThemeMode::Light,
        })
        .expect("serialize");
        assert!(serialized.contains("light"));

        let parsed: SerdeWrap = toml::from_str("theme_mode = \"system\"").expect("deserialize");
        assert_eq!(parsed.theme_mode, ThemeMode::System);
    }

    #[derive(Serialize, Deserialize)]
    struct SerdeWrap {
        theme_mode: ThemeMode,
    }
}
