//! Display preferences.
//!
//! The site's theme and syntax toggles, carried as a plain value that gets
//! handed to renderers. Nothing here changes how text is tagged.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Colour theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Dark => write!(f, "dark"),
            Theme::Light => write!(f, "light"),
        }
    }
}

/// Which spelling of the query-builder keywords to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyntaxMode {
    Classic,
    #[default]
    #[serde(alias = "gen-alpha")]
    GenAlpha,
}

impl SyntaxMode {
    pub fn toggle(self) -> Self {
        match self {
            SyntaxMode::Classic => SyntaxMode::GenAlpha,
            SyntaxMode::GenAlpha => SyntaxMode::Classic,
        }
    }

    pub fn is_gen_alpha(self) -> bool {
        self == SyntaxMode::GenAlpha
    }

    /// Heading shown above a code block.
    pub fn label(self) -> &'static str {
        match self {
            SyntaxMode::Classic => "Classic",
            SyntaxMode::GenAlpha => "Gen Alpha",
        }
    }
}

impl fmt::Display for SyntaxMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxMode::Classic => write!(f, "classic"),
            SyntaxMode::GenAlpha => write!(f, "genalpha"),
        }
    }
}

/// Everything a renderer needs to know about the reader's choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub theme: Theme,
    pub syntax: SyntaxMode,
}

impl Preferences {
    pub fn new(theme: Theme, syntax: SyntaxMode) -> Self {
        Self { theme, syntax }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs = Preferences::default();
        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(prefs.syntax, SyntaxMode::GenAlpha);
    }

    #[test]
    fn test_toggles() {
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
        assert!(!SyntaxMode::GenAlpha.toggle().is_gen_alpha());
    }

    #[test]
    fn test_labels() {
        assert_eq!(SyntaxMode::Classic.label(), "Classic");
        assert_eq!(SyntaxMode::GenAlpha.label(), "Gen Alpha");
        assert_eq!(SyntaxMode::GenAlpha.to_string().to_uppercase(), "GENALPHA");
    }

    #[test]
    fn test_syntax_serde_matches_display() {
        for syntax in [SyntaxMode::Classic, SyntaxMode::GenAlpha] {
            let json = serde_json::to_string(&syntax).unwrap();
            assert_eq!(json, format!("\"{}\"", syntax));
        }
        let legacy: SyntaxMode = serde_json::from_str("\"gen-alpha\"").unwrap();
        assert_eq!(legacy, SyntaxMode::GenAlpha);
    }
}
