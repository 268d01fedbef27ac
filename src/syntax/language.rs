// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Language identification for syntax highlighting.
//!
//! A listing's language is resolved from an explicit name, from the file
//! name, or by guessing from the code itself: an explicit name is looked
//! up strictly, everything else falls back to heuristics and ultimately
//! to plain text.

use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ListingError, Result};

/// Languages the lexer layer has rules for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Rust,
    C,
    Cpp,
    JavaScript,
    TypeScript,
    Python,
    Json,
    Html,
    Css,
    Markdown,
    Yaml,
    Toml,
    Sql,
    Shell,
    /// No highlighting; every fragment stays unclassified.
    PlainText,
}

impl Language {
    /// Returns the display name of the language.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::Rust => "Rust",
            Language::C => "C",
            Language::Cpp => "C++",
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::Python => "Python",
            Language::Json => "JSON",
            Language::Html => "HTML",
            Language::Css => "CSS",
            Language::Markdown => "Markdown",
            Language::Yaml => "YAML",
            Language::Toml => "TOML",
            Language::Sql => "SQL",
            Language::Shell => "Shell",
            Language::PlainText => "Plain Text",
        }
    }

    /// Returns the primary file extension for this language.
    pub fn primary_extension(self) -> &'static str {
        match self {
            Language::Rust => "rs",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::JavaScript => "js",
            Language::TypeScript => "ts",
            Language::Python => "py",
            Language::Json => "json",
            Language::Html => "html",
            Language::Css => "css",
            Language::Markdown => "md",
            Language::Yaml => "yaml",
            Language::Toml => "toml",
            Language::Sql => "sql",
            Language::Shell => "sh",
            Language::PlainText => "txt",
        }
    }

    /// Looks up a language by its case-insensitive name or alias.
    pub fn from_name(name: &str) -> Option<Language> {
        let normalized = name.to_lowercase();
        NAME_MAP.get(normalized.as_str()).copied()
    }
}

/// Explicit names and aliases accepted for each language.
static NAME_MAP: Lazy<HashMap<&'static str, Language>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert("rust", Language::Rust);
    map.insert("rs", Language::Rust);
    map.insert("c", Language::C);
    map.insert("cpp", Language::Cpp);
    map.insert("c++", Language::Cpp);
    map.insert("cxx", Language::Cpp);
    map.insert("javascript", Language::JavaScript);
    map.insert("js", Language::JavaScript);
    map.insert("typescript", Language::TypeScript);
    map.insert("ts", Language::TypeScript);
    map.insert("python", Language::Python);
    map.insert("python3", Language::Python);
    map.insert("py", Language::Python);
    map.insert("json", Language::Json);
    map.insert("html", Language::Html);
    map.insert("css", Language::Css);
    map.insert("markdown", Language::Markdown);
    map.insert("md", Language::Markdown);
    map.insert("yaml", Language::Yaml);
    map.insert("yml", Language::Yaml);
    map.insert("toml", Language::Toml);
    map.insert("sql", Language::Sql);
    map.insert("shell", Language::Shell);
    map.insert("sh", Language::Shell);
    map.insert("bash", Language::Shell);
    map.insert("text", Language::PlainText);
    map.insert("plain", Language::PlainText);
    map.insert("plaintext", Language::PlainText);
    map
});

/// File extensions mapped to languages.
static EXTENSION_MAP: Lazy<HashMap<&'static str, Language>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert("rs", Language::Rust);
    map.insert("c", Language::C);
    map.insert("h", Language::C);
    map.insert("cpp", Language::Cpp);
    map.insert("cxx", Language::Cpp);
    map.insert("cc", Language::Cpp);
    map.insert("hpp", Language::Cpp);
    map.insert("js", Language::JavaScript);
    map.insert("mjs", Language::JavaScript);
    map.insert("cjs", Language::JavaScript);
    map.insert("jsx", Language::JavaScript);
    map.insert("ts", Language::TypeScript);
    map.insert("tsx", Language::TypeScript);
    map.insert("py", Language::Python);
    map.insert("pyw", Language::Python);
    map.insert("pyi", Language::Python);
    map.insert("json", Language::Json);
    map.insert("jsonc", Language::Json);
    map.insert("html", Language::Html);
    map.insert("htm", Language::Html);
    map.insert("xhtml", Language::Html);
    map.insert("css", Language::Css);
    map.insert("md", Language::Markdown);
    map.insert("markdown", Language::Markdown);
    map.insert("yaml", Language::Yaml);
    map.insert("yml", Language::Yaml);
    map.insert("toml", Language::Toml);
    map.insert("sql", Language::Sql);
    map.insert("sh", Language::Shell);
    map.insert("bash", Language::Shell);
    map.insert("zsh", Language::Shell);
    map.insert("txt", Language::PlainText);
    map.insert("text", Language::PlainText);
    map
});

/// Detects a language from a file path's extension.
pub fn detect_from_path(path: &Path) -> Option<Language> {
    let extension = path.extension()?.to_str()?.to_lowercase();
    EXTENSION_MAP.get(extension.as_str()).copied()
}

static SHEBANG: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#!\s*(\S+)(?:\s+(\S+))?").unwrap());

/// Keyword patterns scored during content-based guessing.
static CONTENT_PATTERNS: Lazy<Vec<(Language, Regex)>> = Lazy::new(|| {
    let pattern = |p: &str| Regex::new(p).unwrap();
    vec![
        (
            Language::Rust,
            pattern(r"\b(fn|impl|pub|struct|enum|trait|crate|mod|match)\b|&mut\b"),
        ),
        (
            Language::Python,
            pattern(r"\b(def|elif|lambda|None|self|import|pass|yield)\b"),
        ),
        (
            Language::JavaScript,
            pattern(r"\b(function|var|typeof|undefined|console|const|let)\b|=>"),
        ),
        (
            Language::Cpp,
            pattern(r"#include\s*<(iostream|vector|string|cstdio)>|\bstd::|\bcout\b"),
        ),
        (
            Language::C,
            pattern(r"#include\s*<\w+\.h>|\bprintf\s*\(|\bint\s+main\s*\("),
        ),
        (
            Language::Sql,
            pattern(r"(?i)\b(select|insert|update|delete)\b.*\b(from|into|set|where)\b"),
        ),
        (
            Language::Html,
            pattern(r"(?i)<!doctype\b|</?(html|head|body|div|span)\b"),
        ),
        (Language::Css, pattern(r"[.#]?[\w-]+\s*\{[^{}]*:[^{}]*\}")),
        (Language::Json, pattern(r#""[^"]*"\s*:"#)),
        (
            Language::Shell,
            pattern(r"\b(echo|esac|fi|done|export)\b|\$\{\w+\}"),
        ),
    ]
});

/// Guesses a language from the code itself.
///
/// A shebang line wins outright; otherwise each language's keyword
/// pattern is scored by match count and the best nonzero score wins.
/// Falls back to [`Language::PlainText`].
pub fn detect_from_content(code: &str) -> Language {
    let first_line = code.lines().next().unwrap_or("");
    if let Some(captures) = SHEBANG.captures(first_line) {
        // `#!/usr/bin/env python3` puts the interpreter in the argument.
        let interpreter = captures
            .get(2)
            .or_else(|| captures.get(1))
            .map(|m| m.as_str())
            .unwrap_or("");
        if interpreter.contains("python") {
            return Language::Python;
        }
        if interpreter.contains("node") {
            return Language::JavaScript;
        }
        if interpreter.ends_with("sh") {
            return Language::Shell;
        }
    }

    let mut best = (Language::PlainText, 0usize);
    for (language, regex) in CONTENT_PATTERNS.iter() {
        let score = regex.find_iter(code).count();
        if score > best.1 {
            best = (*language, score);
        }
    }
    best.0
}

/// Resolves the language for one listing.
///
/// With both a path and a language hint, the file name guess wins (the
/// hint only signals that highlighting is wanted); an explicit name alone
/// is looked up strictly and an unknown name is an error; otherwise the
/// content guess applies.
pub fn resolve_language(
    path: Option<&Path>,
    language: Option<&str>,
    code: &str,
) -> Result<Language> {
    match (path, language) {
        (Some(path), Some(_)) => {
            Ok(detect_from_path(path).unwrap_or_else(|| detect_from_content(code)))
        }
        (None, Some(name)) => {
            Language::from_name(name).ok_or_else(|| ListingError::UnknownLanguage(name.to_string()))
        }
        _ => Ok(detect_from_content(code)),
    }
}
