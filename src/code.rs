// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The `Code` element: a syntax-highlighted source listing.
//!
//! Building a `Code` runs the whole pipeline in one synchronous pass:
//! validate the source, read and decode it if it lives on disk, normalize
//! line endings and tabs, resolve the language, lex, resolve the theme,
//! coalesce token runs into attribute ranges, and assemble the
//! [`StyledText`] handed to the renderer. Any failure surfaces before a
//! result exists; there are no partial listings.

use std::path::PathBuf;

use crate::error::{ListingError, Result};
use crate::source::{Encoding, normalize, read_source};
use crate::syntax::language::{Language, resolve_language};
use crate::syntax::{coalesce, tokenize};
use crate::text::{StyledText, TextConfig};
use crate::theme::{DEFAULT_THEME, Theme};

/// A highlighted source code listing.
#[derive(Debug, Clone)]
pub struct Code {
    language: Language,
    style_name: String,
    text: StyledText,
}

impl Code {
    /// Starts configuring a listing.
    pub fn builder() -> CodeBuilder {
        CodeBuilder::new()
    }

    /// Builds a listing from inline code with all defaults.
    pub fn from_source(code: impl Into<String>) -> Result<Code> {
        Code::builder().source(code).build()
    }

    /// Builds a listing from a file with all defaults.
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Code> {
        Code::builder().path(path).build()
    }

    /// The language the listing was highlighted as.
    pub fn language(&self) -> Language {
        self.language
    }

    /// The name of the theme that styled the listing.
    pub fn style_name(&self) -> &str {
        &self.style_name
    }

    /// The normalized code the listing displays.
    pub fn code(&self) -> &str {
        self.text.text()
    }

    /// The styled-text model for the rendering collaborator.
    pub fn styled_text(&self) -> &StyledText {
        &self.text
    }
}

/// Configures and builds a [`Code`] listing.
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    source: Option<String>,
    path: Option<PathBuf>,
    language: Option<String>,
    encoding: Encoding,
    style: Option<String>,
    config: TextConfig,
}

impl CodeBuilder {
    /// Creates a builder with default typography.
    pub fn new() -> Self {
        Self::default()
    }

    /// Supplies the code inline. Mutually exclusive with [`path`](Self::path).
    pub fn source(mut self, code: impl Into<String>) -> Self {
        self.source = Some(code.into());
        self
    }

    /// Supplies the code as a file path. Mutually exclusive with
    /// [`source`](Self::source).
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Names the language instead of relying on guessing.
    pub fn language(mut self, name: impl Into<String>) -> Self {
        self.language = Some(name.into());
        self
    }

    /// Sets the encoding used to read a file source.
    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Picks the theme by name (case-insensitive).
    pub fn style(mut self, name: impl Into<String>) -> Self {
        self.style = Some(name.into());
        self
    }

    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.config.font_family = family.into();
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.config.font_size = size;
        self
    }

    /// Number of spaces a tab expands to during normalization.
    pub fn tab_width(mut self, width: usize) -> Self {
        self.config.tab_width = width;
        self
    }

    pub fn line_spacing(mut self, spacing: f32) -> Self {
        self.config.line_spacing = spacing;
        self
    }

    pub fn ligatures(mut self, enabled: bool) -> Self {
        self.config.ligatures = enabled;
        self
    }

    /// Runs the pipeline and produces the listing.
    pub fn build(self) -> Result<Code> {
        let (code_string, path) = match (self.source, self.path) {
            (Some(_), Some(_)) => return Err(ListingError::AmbiguousSource),
            (None, None) => return Err(ListingError::MissingSource),
            (Some(source), None) => {
                if source.is_empty() {
                    return Err(ListingError::MissingSource);
                }
                (source, None)
            }
            (None, Some(path)) => (read_source(&path, self.encoding)?, Some(path)),
        };

        let normalized = normalize(&code_string, self.config.tab_width);
        let language = resolve_language(path.as_deref(), self.language.as_deref(), &normalized)?;
        let style_name = self.style.as_deref().unwrap_or(DEFAULT_THEME);
        let theme = Theme::by_name(style_name)?;

        let tokens = tokenize(&normalized, language, self.config.tab_width);
        let ranges = coalesce(tokens, theme);
        Ok(Code {
            language,
            style_name: theme.name().to_string(),
            text: StyledText::new(normalized, ranges, self.config),
        })
    }
}
