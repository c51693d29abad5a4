use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The raw palette the two themes draw from.
pub mod colors {
    pub const BLACK: &str = "#222";
    pub const WHITE: &str = "#FFF";
    pub const PURPLE: &str = "rebeccapurple";
    pub const GREY: &str = "#CCC";
}

/// A fixed record of color values applied across the whole page.
///
/// Exactly two instances exist, [`PRIMARY`] and [`SECONDARY`]. Themes are
/// selected by name and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: ThemeName,
    pub primary: &'static str,
    pub primary_inverse: &'static str,
    pub secondary: &'static str,
    pub tertiary: &'static str,
    pub border: &'static str,
    pub border_inverse: &'static str,
    pub background_primary: &'static str,
    pub background_secondary: &'static str,
    pub logo: &'static str,
}

/// Dark text on a light background.
pub const PRIMARY: Theme = Theme {
    name: ThemeName::Primary,
    primary: colors::BLACK,
    primary_inverse: colors::WHITE,
    secondary: colors::WHITE,
    tertiary: colors::PURPLE,
    border: colors::GREY,
    border_inverse: colors::WHITE,
    background_primary: colors::WHITE,
    background_secondary: colors::PURPLE,
    logo: colors::WHITE,
};

/// Light text on a purple background.
pub const SECONDARY: Theme = Theme {
    name: ThemeName::Secondary,
    primary: colors::WHITE,
    primary_inverse: colors::BLACK,
    secondary: colors::PURPLE,
    tertiary: colors::WHITE,
    border: colors::WHITE,
    border_inverse: colors::GREY,
    background_primary: colors::PURPLE,
    background_secondary: colors::WHITE,
    logo: colors::PURPLE,
};

/// Errors that can occur when resolving a theme by name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("Unknown theme name: {0}")]
    UnknownName(String),
}

/// The name of one of the two page themes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Primary,
    Secondary,
}

impl ThemeName {
    /// Returns the lowercase name used in storage and markup.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Primary => "primary",
            ThemeName::Secondary => "secondary",
        }
    }

    /// Returns the other theme name.
    pub fn toggled(&self) -> Self {
        match self {
            ThemeName::Primary => ThemeName::Secondary,
            ThemeName::Secondary => ThemeName::Primary,
        }
    }

    /// Resolves this name to its color record.
    pub fn resolve(&self) -> Theme {
        match self {
            ThemeName::Primary => PRIMARY,
            ThemeName::Secondary => SECONDARY,
        }
    }
}

impl FromStr for ThemeName {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary" => Ok(ThemeName::Primary),
            "secondary" => Ok(ThemeName::Secondary),
            other => Err(ThemeError::UnknownName(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_name_round_trips_through_str() {
        for name in [ThemeName::Primary, ThemeName::Secondary] {
            assert_eq!(name.as_str().parse::<ThemeName>(), Ok(name));
        }
    }

    #[test]
    fn test_theme_name_rejects_unknown_values() {
        let err = "sparkly".parse::<ThemeName>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown theme name: sparkly");
    }

    #[test]
    fn test_default_theme_is_primary() {
        assert_eq!(ThemeName::default(), ThemeName::Primary);
    }

    #[test]
    fn test_toggled_alternates_between_the_two_themes() {
        assert_eq!(ThemeName::Primary.toggled(), ThemeName::Secondary);
        assert_eq!(ThemeName::Secondary.toggled().toggled(), ThemeName::Secondary);
    }

    #[test]
    fn test_resolve_returns_matching_record() {
        assert_eq!(ThemeName::Primary.resolve().name, ThemeName::Primary);
        assert_eq!(ThemeName::Secondary.resolve().name, ThemeName::Secondary);
    }

    #[test]
    fn test_themes_invert_backgrounds() {
        assert_eq!(PRIMARY.background_primary, SECONDARY.background_secondary);
        assert_eq!(PRIMARY.background_secondary, SECONDARY.background_primary);
    }

    #[test]
    fn test_theme_name_serializes_lowercase() {
        let json = serde_json::to_string(&ThemeName::Secondary).unwrap();
        assert_eq!(json, "\"secondary\"");
    }
}
