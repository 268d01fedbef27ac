// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Reading and normalizing listing sources.
//!
//! Files are validated to be existing regular files before anything is
//! read, and every source (inline or file) passes through one
//! normalization step before lexing, so downstream offsets always refer
//! to the normalized text.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ListingError, Result};

/// Character encoding used when reading a listing from disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// Strict UTF-8; invalid bytes are an error.
    #[default]
    Utf8,
    /// UTF-8 with invalid sequences replaced by U+FFFD.
    Utf8Lossy,
    /// ISO-8859-1, every byte mapped to its code point.
    Latin1,
}

impl Encoding {
    fn name(self) -> &'static str {
        match self {
            Encoding::Utf8 => "UTF-8",
            Encoding::Utf8Lossy => "UTF-8 (lossy)",
            Encoding::Latin1 => "Latin-1",
        }
    }
}

/// Reads a source file after validating the path.
///
/// The path must resolve to an existing regular file; a missing path or a
/// directory is an error before any bytes are read, never a silent empty
/// result.
pub fn read_source(path: &Path, encoding: Encoding) -> Result<String> {
    let resolved = path.canonicalize().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ListingError::NotAFile(path.to_path_buf())
        } else {
            ListingError::Io(e)
        }
    })?;
    if !resolved.is_file() {
        return Err(ListingError::NotAFile(resolved));
    }
    let bytes = fs::read(&resolved)?;
    decode(bytes, encoding, &resolved)
}

fn decode(bytes: Vec<u8>, encoding: Encoding, path: &Path) -> Result<String> {
    match encoding {
        Encoding::Utf8 => String::from_utf8(bytes).map_err(|_| ListingError::Decode {
            path: PathBuf::from(path),
            encoding: encoding.name(),
        }),
        Encoding::Utf8Lossy => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        Encoding::Latin1 => Ok(bytes.into_iter().map(char::from).collect()),
    }
}

/// Normalizes line endings and tabs ahead of lexing.
///
/// `\r\n` and bare `\r` become `\n`, and each tab expands to `tab_width`
/// spaces. Offsets emitted anywhere downstream refer to this text.
pub fn normalize(code: &str, tab_width: usize) -> String {
    let mut out = String::with_capacity(code.len());
    let mut chars = code.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push('\n');
            }
            '\t' => {
                for _ in 0..tab_width {
                    out.push(' ');
                }
            }
            c => out.push(c),
        }
    }
    out
}
