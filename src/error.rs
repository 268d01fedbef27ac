// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Error types for code listings.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for listing operations.
pub type Result<T> = std::result::Result<T, ListingError>;

/// Everything that can go wrong while building a listing.
///
/// All variants are raised synchronously and before any styled output
/// exists; there is no partial result to clean up after an error.
#[derive(Error, Debug)]
pub enum ListingError {
    /// Neither inline code nor a file path was supplied, or the inline
    /// code was empty.
    #[error("no source given: supply inline code or a file path")]
    MissingSource,

    /// Both inline code and a file path were supplied.
    #[error("both inline code and a file path given: supply exactly one")]
    AmbiguousSource,

    /// The path does not name an existing regular file.
    #[error("not an existing regular file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file's bytes are not valid in the requested encoding.
    #[error("{}: not valid {encoding}", .path.display())]
    Decode { path: PathBuf, encoding: &'static str },

    /// An explicit language name that no lexer is registered for.
    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    /// A style name that no theme is registered for.
    #[error("unknown style: {0}")]
    UnknownTheme(String),
}
