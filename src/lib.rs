// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Syntax-highlighted code listings as styled-text models.
//!
//! This crate turns source code (an inline string or a file) into a
//! [`StyledText`]: the normalized text plus three independent
//! range-to-attribute mappings (color, slant, weight) that a rich-text
//! renderer lays out and draws. Lexing is delegated to the Synoptic
//! engine; the logic owned here is the coalescing of its token stream
//! into compact, offset-keyed style ranges.
//!
//! ```
//! use listing::Code;
//!
//! fn main() -> listing::Result<()> {
//!     let code = Code::builder()
//!         .source("fn main() {\n    println!(\"hello\");\n}\n")
//!         .language("rust")
//!         .style("github-dark")
//!         .build()?;
//!
//!     for segment in code.styled_text().segments() {
//!         let _ = (segment.text, segment.color, segment.slant, segment.weight);
//!     }
//!     Ok(())
//! }
//! ```

pub mod code;
pub mod error;
pub mod source;
pub mod syntax;
pub mod text;
pub mod theme;

pub use code::{Code, CodeBuilder};
pub use error::{ListingError, Result};
pub use source::Encoding;
pub use syntax::{Language, StyledRanges, Token, TokenRun, coalesce, token_runs, tokenize};
pub use text::{Segment, SpanMap, StyledText, TextConfig};
pub use theme::{Color, DEFAULT_THEME, Slant, Style, Theme, Weight};
