// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Styles and themes for syntax highlighting.
//!
//! A theme maps token kinds to style descriptors. Each attribute of a
//! style is independently optional: `None` means the theme has nothing to
//! say about that attribute, which the rendering side reads as "no
//! override". An explicit `Some(Slant::Normal)` stays distinguishable
//! from an unset slant.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::{ListingError, Result};

/// A 24-bit RGB foreground color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Creates a color from its channel values.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` or `#rgb` hex notation.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if !digits.is_ascii() {
            return None;
        }
        match digits.len() {
            6 => {
                let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
                let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
                let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
                Some(Self::rgb(r, g, b))
            }
            3 => {
                let channel = |i: usize| {
                    u8::from_str_radix(&digits[i..i + 1], 16)
                        .ok()
                        .map(|v| v * 17)
                };
                Some(Self::rgb(channel(0)?, channel(1)?, channel(2)?))
            }
            _ => None,
        }
    }

    /// Formats the color as `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Slant of the rendered glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slant {
    Normal,
    Italic,
}

/// Weight of the rendered glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weight {
    Normal,
    Bold,
}

/// Style descriptor for one token kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub color: Option<Color>,
    pub slant: Option<Slant>,
    pub weight: Option<Weight>,
}

impl Style {
    /// Creates a style with just a foreground color.
    pub fn fg(color: Color) -> Self {
        Self {
            color: Some(color),
            ..Default::default()
        }
    }

    /// Builder: set the slant to italic.
    pub fn with_italic(mut self) -> Self {
        self.slant = Some(Slant::Italic);
        self
    }

    /// Builder: set the weight to bold.
    pub fn with_bold(mut self) -> Self {
        self.weight = Some(Weight::Bold);
        self
    }

    /// Returns true if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.slant.is_none() && self.weight.is_none()
    }
}

/// A named mapping from token kinds to styles.
#[derive(Debug, Clone)]
pub struct Theme {
    name: String,
    styles: HashMap<String, Style>,
}

impl Theme {
    /// Creates a theme from an explicit kind-to-style table.
    pub fn custom(name: impl Into<String>, styles: HashMap<String, Style>) -> Self {
        Self {
            name: name.into(),
            styles,
        }
    }

    /// The theme's registered name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up the style for a token kind.
    ///
    /// Kinds the theme does not know resolve to the empty style, so they
    /// produce no attribute entries downstream.
    pub fn style(&self, kind: &str) -> Style {
        self.styles.get(kind).copied().unwrap_or_default()
    }

    /// Resolves a builtin theme by case-normalized name.
    pub fn by_name(name: &str) -> Result<&'static Theme> {
        let normalized = name.to_lowercase();
        THEMES
            .get(normalized.as_str())
            .ok_or(ListingError::UnknownTheme(name.to_string()))
    }

    /// Names of all builtin themes.
    pub fn builtin_names() -> Vec<&'static str> {
        let mut names: Vec<_> = THEMES.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

/// Name of the theme used when the caller does not pick one.
pub const DEFAULT_THEME: &str = "default";

fn hex(s: &str) -> Color {
    Color::from_hex(s).expect("theme color literals are valid hex")
}

fn default_theme() -> Theme {
    let mut styles = HashMap::new();
    styles.insert("keyword".to_string(), Style::fg(hex("#008000")).with_bold());
    styles.insert("boolean".to_string(), Style::fg(hex("#008000")).with_bold());
    styles.insert("string".to_string(), Style::fg(hex("#ba2121")));
    styles.insert("character".to_string(), Style::fg(hex("#ba2121")));
    styles.insert("comment".to_string(), Style::fg(hex("#3d7b7b")).with_italic());
    styles.insert("digit".to_string(), Style::fg(hex("#666666")));
    styles.insert("operator".to_string(), Style::fg(hex("#666666")));
    styles.insert("function".to_string(), Style::fg(hex("#0000ff")));
    styles.insert("macros".to_string(), Style::fg(hex("#9c6500")));
    styles.insert("attribute".to_string(), Style::fg(hex("#687822")));
    styles.insert("namespace".to_string(), Style::fg(hex("#0000ff")).with_bold());
    styles.insert("struct".to_string(), Style::fg(hex("#b00040")));
    styles.insert("type".to_string(), Style::fg(hex("#b00040")));
    styles.insert("reference".to_string(), Style::fg(hex("#19177c")));
    styles.insert("global".to_string(), Style::fg(hex("#19177c")));
    styles.insert("regex".to_string(), Style::fg(hex("#a45a77")));
    styles.insert("header".to_string(), Style::fg(hex("#0000ff")).with_bold());
    styles.insert("tag".to_string(), Style::fg(hex("#008000")).with_bold());
    styles.insert("key".to_string(), Style::fg(hex("#008000")));
    styles.insert("link".to_string(), Style::fg(hex("#0000ee")));
    styles.insert("list".to_string(), Style::fg(hex("#666666")));
    styles.insert("insertion".to_string(), Style::fg(hex("#008000")));
    styles.insert("deletion".to_string(), Style::fg(hex("#a00000")));
    Theme::custom("default", styles)
}

fn monokai_theme() -> Theme {
    let mut styles = HashMap::new();
    styles.insert("keyword".to_string(), Style::fg(hex("#66d9ef")));
    styles.insert("boolean".to_string(), Style::fg(hex("#ae81ff")));
    styles.insert("string".to_string(), Style::fg(hex("#e6db74")));
    styles.insert("character".to_string(), Style::fg(hex("#e6db74")));
    styles.insert("comment".to_string(), Style::fg(hex("#75715e")));
    styles.insert("digit".to_string(), Style::fg(hex("#ae81ff")));
    styles.insert("operator".to_string(), Style::fg(hex("#f92672")));
    styles.insert("function".to_string(), Style::fg(hex("#a6e22e")));
    styles.insert("macros".to_string(), Style::fg(hex("#f92672")));
    styles.insert("attribute".to_string(), Style::fg(hex("#a6e22e")));
    styles.insert("namespace".to_string(), Style::fg(hex("#f8f8f2")));
    styles.insert("struct".to_string(), Style::fg(hex("#a6e22e")));
    styles.insert("type".to_string(), Style::fg(hex("#66d9ef")).with_italic());
    styles.insert("reference".to_string(), Style::fg(hex("#fd971f")));
    styles.insert("global".to_string(), Style::fg(hex("#fd971f")));
    styles.insert("regex".to_string(), Style::fg(hex("#e6db74")));
    styles.insert("header".to_string(), Style::fg(hex("#a6e22e")).with_bold());
    styles.insert("tag".to_string(), Style::fg(hex("#f92672")));
    styles.insert("key".to_string(), Style::fg(hex("#66d9ef")));
    styles.insert("link".to_string(), Style::fg(hex("#66d9ef")));
    styles.insert("list".to_string(), Style::fg(hex("#f92672")));
    styles.insert("insertion".to_string(), Style::fg(hex("#a6e22e")));
    styles.insert("deletion".to_string(), Style::fg(hex("#f92672")));
    Theme::custom("monokai", styles)
}

fn github_dark_theme() -> Theme {
    let mut styles = HashMap::new();
    styles.insert("keyword".to_string(), Style::fg(hex("#ff7b72")));
    styles.insert("boolean".to_string(), Style::fg(hex("#79c0ff")));
    styles.insert("string".to_string(), Style::fg(hex("#a5d6ff")));
    styles.insert("character".to_string(), Style::fg(hex("#a5d6ff")));
    styles.insert("comment".to_string(), Style::fg(hex("#8b949e")).with_italic());
    styles.insert("digit".to_string(), Style::fg(hex("#79c0ff")));
    styles.insert("operator".to_string(), Style::fg(hex("#ff7b72")));
    styles.insert("function".to_string(), Style::fg(hex("#d2a8ff")));
    styles.insert("macros".to_string(), Style::fg(hex("#d2a8ff")));
    styles.insert("attribute".to_string(), Style::fg(hex("#79c0ff")));
    styles.insert("namespace".to_string(), Style::fg(hex("#ffa657")));
    styles.insert("struct".to_string(), Style::fg(hex("#ffa657")));
    styles.insert("type".to_string(), Style::fg(hex("#ffa657")));
    styles.insert("reference".to_string(), Style::fg(hex("#c9d1d9")));
    styles.insert("global".to_string(), Style::fg(hex("#79c0ff")));
    styles.insert("regex".to_string(), Style::fg(hex("#a5d6ff")));
    styles.insert("header".to_string(), Style::fg(hex("#1f6feb")).with_bold());
    styles.insert("tag".to_string(), Style::fg(hex("#7ee787")));
    styles.insert("key".to_string(), Style::fg(hex("#7ee787")));
    styles.insert("link".to_string(), Style::fg(hex("#a5d6ff")));
    styles.insert("list".to_string(), Style::fg(hex("#ffa657")));
    styles.insert("insertion".to_string(), Style::fg(hex("#aff5b4")));
    styles.insert("deletion".to_string(), Style::fg(hex("#ffdcd7")));
    Theme::custom("github-dark", styles)
}

/// Builtin themes, keyed by lowercase name.
static THEMES: Lazy<HashMap<&'static str, Theme>> = Lazy::new(|| {
    let mut themes = HashMap::new();
    themes.insert("default", default_theme());
    themes.insert("monokai", monokai_theme());
    themes.insert("github-dark", github_dark_theme());
    themes
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from_hex("#ff0080"), Some(Color::rgb(255, 0, 128)));
        assert_eq!(Color::from_hex("#fff"), Some(Color::rgb(255, 255, 255)));
        assert_eq!(Color::from_hex("ff0080"), None);
        assert_eq!(Color::from_hex("#ff008"), None);
        assert_eq!(Color::from_hex("#gg0080"), None);
    }

    #[test]
    fn test_color_hex_roundtrip() {
        let color = Color::rgb(0x12, 0xab, 0xef);
        assert_eq!(Color::from_hex(&color.to_hex()), Some(color));
    }

    #[test]
    fn test_style_builders() {
        let style = Style::fg(Color::rgb(1, 2, 3)).with_italic().with_bold();
        assert_eq!(style.color, Some(Color::rgb(1, 2, 3)));
        assert_eq!(style.slant, Some(Slant::Italic));
        assert_eq!(style.weight, Some(Weight::Bold));
        assert!(!style.is_empty());
        assert!(Style::default().is_empty());
    }

    #[test]
    fn test_theme_lookup_case_normalized() {
        let theme = Theme::by_name("Default").unwrap();
        assert_eq!(theme.name(), "default");
        let theme = Theme::by_name("GITHUB-DARK").unwrap();
        assert_eq!(theme.name(), "github-dark");
    }

    #[test]
    fn test_unknown_theme_is_error() {
        let err = Theme::by_name("no-such-theme").unwrap_err();
        assert!(matches!(err, ListingError::UnknownTheme(name) if name == "no-such-theme"));
    }

    #[test]
    fn test_unknown_kind_resolves_empty() {
        let theme = Theme::by_name("default").unwrap();
        assert!(theme.style("not-a-kind").is_empty());
    }

    #[test]
    fn test_builtin_themes_style_keywords() {
        for name in Theme::builtin_names() {
            let theme = Theme::by_name(name).unwrap();
            assert!(theme.style("keyword").color.is_some(), "{name} styles keywords");
            assert!(theme.style("comment").color.is_some(), "{name} styles comments");
        }
    }
}
