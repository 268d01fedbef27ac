// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Syntax highlighting: language resolution, lexing, and coalescing.

pub mod coalesce;
pub mod language;
pub mod lexer;

pub use coalesce::{StyledRanges, TokenRun, coalesce, token_runs};
pub use language::{Language, detect_from_content, detect_from_path, resolve_language};
pub use lexer::{Token, tokenize};
