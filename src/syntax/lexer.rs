// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Token stream production on top of the Synoptic engine.
//!
//! Synoptic works line by line, so its output never contains the newline
//! characters themselves. The wrapper here flattens the per-line streams
//! into one document-order stream and interposes plain `"\n"` fragments,
//! so the stream reconstructs the input text exactly, with no gaps.

use synoptic::{Highlighter, TokOpt};

use crate::syntax::language::Language;

/// One classified (or plain) fragment of the input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The lexical category, or `None` for unclassified text.
    pub kind: Option<String>,
    /// The fragment's text content.
    pub text: String,
}

impl Token {
    /// Creates an unclassified token.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            kind: None,
            text: text.into(),
        }
    }

    /// Creates a classified token.
    pub fn classified(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            text: text.into(),
        }
    }

    /// Length of the fragment in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Lexes normalized code into a flat, gapless token stream.
///
/// The input is expected to be normalized already (no `\r`, no `\t`);
/// offsets computed over this stream are offsets into that text.
pub fn tokenize(code: &str, language: Language, tab_width: usize) -> Vec<Token> {
    let mut highlighter = highlighter_for(language, tab_width);
    let lines: Vec<String> = code.split('\n').map(str::to_string).collect();
    highlighter.run(&lines);

    let mut tokens = Vec::new();
    for (y, line) in lines.iter().enumerate() {
        if y > 0 {
            tokens.push(Token::plain("\n"));
        }
        for opt in highlighter.line(y, line) {
            match opt {
                TokOpt::Some(text, kind) => tokens.push(Token::classified(kind, text)),
                TokOpt::None(text) => tokens.push(Token::plain(text)),
            }
        }
    }
    tokens
}

/// Builds a Synoptic highlighter for the language.
///
/// Languages Synoptic ships rules for use those; the rest get the
/// fallback rule sets below. Plain text gets a rule-less highlighter, so
/// every fragment comes back unclassified.
fn highlighter_for(language: Language, tab_width: usize) -> Highlighter {
    if language == Language::PlainText {
        return Highlighter::new(tab_width);
    }
    match synoptic::from_extension(language.primary_extension(), tab_width) {
        Some(highlighter) => highlighter,
        None => fallback_highlighter(language, tab_width),
    }
}

fn fallback_highlighter(language: Language, tab_width: usize) -> Highlighter {
    let mut h = Highlighter::new(tab_width);
    match language {
        Language::Rust => {
            h.keyword("keyword", r"\b(fn|let|mut|pub|struct|enum|impl|trait|use|mod|const|static|if|else|match|for|while|loop|break|continue|return|where|async|await|move|ref|in|as|dyn)\b");
            h.keyword("boolean", r"\b(true|false)\b");
            h.keyword("digit", r"\b\d+(\.\d+)?\b");
            h.keyword("string", r#""(?:[^"\\]|\\.)*""#);
            h.keyword("comment", r"//.*$");
            h.bounded("comment", r"/\*", r"\*/", false);
        }
        Language::C | Language::Cpp => {
            h.keyword("keyword", r"\b(auto|break|case|char|const|continue|default|do|double|else|enum|extern|float|for|goto|if|int|long|register|return|short|signed|sizeof|static|struct|switch|typedef|union|unsigned|void|volatile|while|class|namespace|template|new|delete|public|private|protected|virtual)\b");
            h.keyword("macros", r"^\s*#\s*\w+");
            h.keyword("digit", r"\b\d+(\.\d+)?\b");
            h.keyword("string", r#""(?:[^"\\]|\\.)*""#);
            h.keyword("character", r"'(?:[^'\\]|\\.)'");
            h.keyword("comment", r"//.*$");
            h.bounded("comment", r"/\*", r"\*/", false);
        }
        Language::JavaScript | Language::TypeScript => {
            h.keyword("keyword", r"\b(function|var|let|const|if|else|for|while|do|switch|case|break|continue|return|class|extends|import|export|from|default|new|typeof|instanceof|async|await|yield)\b");
            h.keyword("boolean", r"\b(true|false|null|undefined)\b");
            h.keyword("digit", r"\b\d+(\.\d+)?\b");
            h.keyword("string", r#""(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'|`[^`]*`"#);
            h.keyword("comment", r"//.*$");
            h.bounded("comment", r"/\*", r"\*/", false);
        }
        Language::Python => {
            h.keyword("keyword", r"\b(def|class|if|elif|else|for|while|try|except|finally|with|import|from|as|return|yield|lambda|pass|break|continue|global|nonlocal|raise|assert|del|not|and|or|is|in)\b");
            h.keyword("boolean", r"\b(True|False|None)\b");
            h.keyword("digit", r"\b\d+(\.\d+)?\b");
            h.keyword("string", r#""(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'"#);
            h.keyword("comment", r"#.*$");
        }
        Language::Json => {
            h.keyword("key", r#""(?:[^"\\]|\\.)*"\s*:"#);
            h.keyword("string", r#""(?:[^"\\]|\\.)*""#);
            h.keyword("digit", r"\b\d+(\.\d+)?\b");
            h.keyword("boolean", r"\b(true|false|null)\b");
        }
        Language::Html => {
            h.keyword("tag", r"</?\w+|>");
            h.keyword("attribute", r"\b[\w-]+=");
            h.keyword("string", r#""[^"]*"|'[^']*'"#);
            h.bounded("comment", r"<!--", r"-->", false);
        }
        Language::Css => {
            h.keyword("attribute", r"\b[\w-]+\s*:");
            h.keyword("digit", r"\b\d+(\.\d+)?(px|em|rem|%)?\b");
            h.keyword("string", r#""[^"]*"|'[^']*'"#);
            h.bounded("comment", r"/\*", r"\*/", false);
        }
        Language::Markdown => {
            h.keyword("header", r"^#{1,6}\s.*$");
            h.keyword("link", r"\[[^\]]*\]\([^)]*\)");
            h.keyword("list", r"^\s*([-*+]|\d+\.)\s");
            h.bounded("string", r"```", r"```", false);
        }
        Language::Yaml => {
            h.keyword("key", r"^\s*[\w.-]+\s*:");
            h.keyword("boolean", r"\b(true|false|null|yes|no)\b");
            h.keyword("digit", r"\b\d+(\.\d+)?\b");
            h.keyword("string", r#""[^"]*"|'[^']*'"#);
            h.keyword("comment", r"#.*$");
        }
        Language::Toml => {
            h.keyword("header", r"^\s*\[[^\]]*\]");
            h.keyword("key", r"^\s*[\w.-]+\s*=");
            h.keyword("boolean", r"\b(true|false)\b");
            h.keyword("digit", r"\b\d+(\.\d+)?\b");
            h.keyword("string", r#""[^"]*"|'[^']*'"#);
            h.keyword("comment", r"#.*$");
        }
        Language::Sql => {
            h.keyword("keyword", r"(?i)\b(select|insert|update|delete|from|where|into|values|set|create|table|drop|alter|join|inner|left|right|on|group|by|order|having|limit|and|or|not|as|distinct|union)\b");
            h.keyword("digit", r"\b\d+(\.\d+)?\b");
            h.keyword("string", r"'[^']*'");
            h.keyword("comment", r"--.*$");
        }
        Language::Shell => {
            h.keyword("keyword", r"\b(if|then|else|elif|fi|for|in|do|done|while|case|esac|function|return|exit|export|local)\b");
            h.keyword("global", r"\$\{?\w+\}?");
            h.keyword("digit", r"\b\d+\b");
            h.keyword("string", r#""(?:[^"\\]|\\.)*"|'[^']*'"#);
            h.keyword("comment", r"#.*$");
        }
        Language::PlainText => {}
    }
    h
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream_text(tokens: &[Token]) -> String {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_stream_reconstructs_text() {
        let code = "fn main() {\n    println!(\"hi\");\n}\n";
        let tokens = tokenize(code, Language::Rust, 4);
        assert_eq!(stream_text(&tokens), code);
    }

    #[test]
    fn test_stream_reconstructs_text_without_trailing_newline() {
        let code = "let x = 1;";
        let tokens = tokenize(code, Language::Rust, 4);
        assert_eq!(stream_text(&tokens), code);
    }

    #[test]
    fn test_empty_input_reconstructs() {
        let tokens = tokenize("", Language::Rust, 4);
        assert_eq!(stream_text(&tokens), "");
    }

    #[test]
    fn test_plain_text_is_unclassified() {
        let tokens = tokenize("fn main() {}\ndef f(): pass\n", Language::PlainText, 4);
        assert!(tokens.iter().all(|t| t.kind.is_none()));
    }

    #[test]
    fn test_newline_tokens_are_plain() {
        let tokens = tokenize("a\nb\nc", Language::PlainText, 4);
        for token in tokens.iter().filter(|t| t.text == "\n") {
            assert_eq!(token.kind, None);
        }
        assert_eq!(
            tokens.iter().filter(|t| t.text == "\n").count(),
            2,
            "one newline token between each pair of lines"
        );
    }

    #[test]
    fn test_rust_source_gets_classified_tokens() {
        let code = "pub fn add(a: u32, b: u32) -> u32 {\n    // sum\n    a + b\n}\n";
        let tokens = tokenize(code, Language::Rust, 4);
        assert!(tokens.iter().any(|t| t.kind.is_some()));
    }

    #[test]
    fn test_token_char_len_is_chars_not_bytes() {
        let token = Token::plain("héllo");
        assert_eq!(token.char_len(), 5);
        assert_eq!(token.text.len(), 6);
    }
}
