// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Token-run coalescing and style-range emission.
//!
//! The lexer hands back one fragment per token, so a stretch of code in
//! one lexical category arrives as many small pieces. A single linear
//! pass merges adjacent equal-kind fragments into maximal runs keyed by
//! half-open character ranges, and each classified run is then resolved
//! through the theme into up to three attribute entries. Keeping the
//! merge unconditional is what keeps the output maps compact.

use std::ops::Range;

use crate::syntax::lexer::Token;
use crate::text::span_map::SpanMap;
use crate::theme::{Color, Slant, Theme, Weight};

/// A maximal stretch of input text under one lexical category.
///
/// Runs come out in increasing order, non-overlapping and gapless: their
/// union is exactly `[0, char_len)` of the lexed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRun {
    /// Half-open character range into the normalized text.
    pub range: Range<usize>,
    /// The run's category; `None` for unclassified text.
    pub kind: Option<String>,
}

/// The three range-to-attribute mappings handed to the rendering side.
#[derive(Debug, Clone, Default)]
pub struct StyledRanges {
    pub colors: SpanMap<Color>,
    pub slants: SpanMap<Slant>,
    pub weights: SpanMap<Weight>,
}

impl StyledRanges {
    /// Returns true if no attribute entries were emitted at all.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.slants.is_empty() && self.weights.is_empty()
    }
}

/// Merges adjacent equal-kind tokens into maximal runs.
///
/// One pass with a one-slot lookahead buffer: the current token's kind is
/// compared against the buffered next token's, and a run is flushed when
/// they differ. End of stream acts as the sentinel and flushes the final
/// run. Empty fragments carry no characters and are dropped up front, so
/// they can neither produce nor split a run.
pub fn token_runs<I>(tokens: I) -> Vec<TokenRun>
where
    I: IntoIterator<Item = Token>,
{
    let mut runs = Vec::new();
    let mut iter = tokens.into_iter().filter(|token| !token.text.is_empty());
    let mut pending = iter.next();
    let mut start = 0usize;
    let mut end = 0usize;

    while let Some(token) = pending {
        pending = iter.next();
        end += token.char_len();
        let at_boundary = match &pending {
            Some(next) => next.kind != token.kind,
            None => true,
        };
        if at_boundary {
            runs.push(TokenRun {
                range: start..end,
                kind: token.kind,
            });
            start = end;
        }
    }
    runs
}

/// Resolves runs against a theme and emits the three attribute maps.
///
/// Unclassified runs and unset attributes produce no entry: absence is
/// what tells the rendering side "no override here". An empty token
/// stream yields three empty maps.
pub fn coalesce<I>(tokens: I, theme: &Theme) -> StyledRanges
where
    I: IntoIterator<Item = Token>,
{
    let mut ranges = StyledRanges::default();
    for run in token_runs(tokens) {
        let Some(kind) = run.kind else { continue };
        let style = theme.style(&kind);
        if let Some(color) = style.color {
            ranges.colors.push(run.range.clone(), color);
        }
        if let Some(slant) = style.slant {
            ranges.slants.push(run.range.clone(), slant);
        }
        if let Some(weight) = style.weight {
            ranges.weights.push(run.range, weight);
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Style;
    use std::collections::HashMap;

    fn test_theme() -> Theme {
        let mut styles = HashMap::new();
        styles.insert("name".to_string(), Style::fg(Color::rgb(0x10, 0x20, 0x30)));
        styles.insert("operator".to_string(), Style::fg(Color::rgb(0x40, 0x50, 0x60)));
        styles.insert("digit".to_string(), Style::fg(Color::rgb(0x70, 0x80, 0x90)));
        styles.insert("comment".to_string(), Style::default().with_italic());
        styles.insert("keyword".to_string(), Style::fg(Color::rgb(1, 2, 3)).with_bold());
        Theme::custom("test", styles)
    }

    #[test]
    fn test_runs_cover_input_exactly() {
        let tokens = vec![
            Token::classified("keyword", "fn"),
            Token::plain(" "),
            Token::classified("name", "main"),
            Token::plain("()"),
            Token::plain(" {}"),
        ];
        let total: usize = tokens.iter().map(Token::char_len).sum();
        let runs = token_runs(tokens);

        let mut expected_start = 0;
        for run in &runs {
            assert_eq!(run.range.start, expected_start, "gapless, non-overlapping");
            assert!(run.range.start < run.range.end);
            expected_start = run.range.end;
        }
        assert_eq!(expected_start, total, "runs cover the whole input");
    }

    #[test]
    fn test_adjacent_equal_kinds_merge() {
        let tokens = vec![
            Token::classified("comment", "// a"),
            Token::classified("comment", " b"),
            Token::classified("comment", " c"),
        ];
        let runs = token_runs(tokens);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].range, 0..10);
        assert_eq!(runs[0].kind.as_deref(), Some("comment"));
    }

    #[test]
    fn test_unclassified_fragments_merge_too() {
        let tokens = vec![Token::plain("a"), Token::plain("\n"), Token::plain("b")];
        let runs = token_runs(tokens);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].range, 0..3);
        assert_eq!(runs[0].kind, None);
    }

    #[test]
    fn test_empty_fragments_produce_no_runs() {
        let tokens = vec![
            Token::classified("name", "a"),
            Token::classified("operator", ""),
            Token::classified("digit", "1"),
        ];
        let runs = token_runs(tokens);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].range, 0..1);
        assert_eq!(runs[1].range, 1..2);
    }

    #[test]
    fn test_empty_fragment_does_not_split_a_run() {
        let tokens = vec![
            Token::classified("name", "a"),
            Token::classified("operator", ""),
            Token::classified("name", "b"),
        ];
        let runs = token_runs(tokens);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].range, 0..2);
        assert_eq!(runs[0].kind.as_deref(), Some("name"));
    }

    #[test]
    fn test_empty_stream_yields_empty_maps() {
        let ranges = coalesce(Vec::new(), &test_theme());
        assert!(ranges.is_empty());
        assert!(ranges.colors.is_empty());
        assert!(ranges.slants.is_empty());
        assert!(ranges.weights.is_empty());
    }

    // The walkthrough scenario: `a = 1\n` lexed into name/whitespace/
    // operator/whitespace/digit/whitespace, colors on name, operator and
    // digit only.
    #[test]
    fn test_single_statement_scenario() {
        let theme = test_theme();
        let tokens = vec![
            Token::classified("name", "a"),
            Token::plain(" "),
            Token::classified("operator", "="),
            Token::plain(" "),
            Token::classified("digit", "1"),
            Token::plain("\n"),
        ];
        let ranges = coalesce(tokens, &theme);

        assert_eq!(ranges.colors.len(), 3);
        assert_eq!(ranges.colors.get(0), Some(&Color::rgb(0x10, 0x20, 0x30)));
        assert_eq!(ranges.colors.get(2), Some(&Color::rgb(0x40, 0x50, 0x60)));
        assert_eq!(ranges.colors.get(4), Some(&Color::rgb(0x70, 0x80, 0x90)));
        assert_eq!(ranges.colors.get(1), None);
        assert_eq!(ranges.colors.get(3), None);
        assert_eq!(ranges.colors.get(5), None);
        assert!(ranges.slants.is_empty());
        assert!(ranges.weights.is_empty());
    }

    #[test]
    fn test_attribute_absence_is_independent() {
        let theme = test_theme();
        // comment: slant only, no color, no weight
        let ranges = coalesce(vec![Token::classified("comment", "// hi")], &theme);
        assert!(ranges.colors.is_empty());
        assert_eq!(ranges.slants.len(), 1);
        assert_eq!(ranges.slants.get(0), Some(&Slant::Italic));
        assert!(ranges.weights.is_empty());

        // keyword: color and weight, no slant
        let ranges = coalesce(vec![Token::classified("keyword", "fn")], &theme);
        assert_eq!(ranges.colors.len(), 1);
        assert!(ranges.slants.is_empty());
        assert_eq!(ranges.weights.len(), 1);
        assert_eq!(ranges.weights.get(1), Some(&Weight::Bold));
    }

    #[test]
    fn test_unknown_kind_emits_nothing() {
        let ranges = coalesce(vec![Token::classified("mystery", "???")], &test_theme());
        assert!(ranges.is_empty());
    }

    #[test]
    fn test_single_run_emits_at_most_one_entry_per_map() {
        let theme = test_theme();
        let tokens: Vec<Token> = (0..8).map(|_| Token::classified("keyword", "x")).collect();
        let ranges = coalesce(tokens, &theme);
        assert_eq!(ranges.colors.len(), 1);
        assert_eq!(ranges.weights.len(), 1);
        let (range, _) = ranges.colors.iter().next().unwrap();
        assert_eq!(*range, 0..8);
    }

    #[test]
    fn test_offsets_are_characters() {
        let theme = test_theme();
        let tokens = vec![
            Token::classified("name", "héllo"),
            Token::classified("operator", "="),
        ];
        let ranges = coalesce(tokens, &theme);
        let entries: Vec<_> = ranges.colors.iter().map(|(r, _)| r.clone()).collect();
        assert_eq!(entries, vec![0..5, 5..6]);
    }
}
