// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The rendering-side handoff model.
//!
//! `StyledText` is what the layout/drawing collaborator consumes: the
//! normalized text, the three attribute maps keyed by character ranges,
//! and the typography options passed through unchanged. Nothing here
//! does glyph layout; `segments` just re-slices the text at attribute
//! boundaries for whoever does.

use std::ops::Range;

use crate::syntax::coalesce::StyledRanges;
use crate::text::span_map::SpanMap;
use crate::theme::{Color, Slant, Weight};

/// Typography configuration forwarded to the rendering collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct TextConfig {
    pub font_family: String,
    pub font_size: f32,
    /// Tab stop width used during normalization.
    pub tab_width: usize,
    pub line_spacing: f32,
    pub ligatures: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font_family: "monospace".to_string(),
            font_size: 24.0,
            tab_width: 4,
            line_spacing: 1.0,
            ligatures: false,
        }
    }
}

/// A contiguous slice of text with one resolved set of attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment<'a> {
    /// Character range into the styled text.
    pub range: Range<usize>,
    pub text: &'a str,
    pub color: Option<Color>,
    pub slant: Option<Slant>,
    pub weight: Option<Weight>,
}

/// Styled text ready for a rich-text renderer.
#[derive(Debug, Clone)]
pub struct StyledText {
    text: String,
    /// Byte offset of every character boundary, plus the end.
    char_starts: Vec<usize>,
    ranges: StyledRanges,
    config: TextConfig,
}

impl StyledText {
    /// Assembles the handoff model from its parts.
    pub fn new(text: String, ranges: StyledRanges, config: TextConfig) -> Self {
        let mut char_starts: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        char_starts.push(text.len());
        Self {
            text,
            char_starts,
            ranges,
            config,
        }
    }

    /// The normalized text all ranges refer to.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the text in characters.
    pub fn char_len(&self) -> usize {
        self.char_starts.len() - 1
    }

    pub fn config(&self) -> &TextConfig {
        &self.config
    }

    pub fn colors(&self) -> &SpanMap<Color> {
        &self.ranges.colors
    }

    pub fn slants(&self) -> &SpanMap<Slant> {
        &self.ranges.slants
    }

    pub fn weights(&self) -> &SpanMap<Weight> {
        &self.ranges.weights
    }

    /// The color override at a character offset, if any.
    pub fn color_at(&self, offset: usize) -> Option<Color> {
        self.ranges.colors.get(offset).copied()
    }

    /// The slant override at a character offset, if any.
    pub fn slant_at(&self, offset: usize) -> Option<Slant> {
        self.ranges.slants.get(offset).copied()
    }

    /// The weight override at a character offset, if any.
    pub fn weight_at(&self, offset: usize) -> Option<Weight> {
        self.ranges.weights.get(offset).copied()
    }

    /// Slices the text by a character range.
    pub fn slice(&self, range: Range<usize>) -> &str {
        let start = self.char_starts[range.start];
        let end = self.char_starts[range.end];
        &self.text[start..end]
    }

    /// Cuts the text at every attribute boundary.
    ///
    /// Concatenating the segment texts reconstructs the text exactly;
    /// every character belongs to exactly one segment.
    pub fn segments(&self) -> Vec<Segment<'_>> {
        let char_len = self.char_len();
        if char_len == 0 {
            return Vec::new();
        }

        let mut boundaries = vec![0, char_len];
        for (range, _) in &self.ranges.colors {
            boundaries.push(range.start);
            boundaries.push(range.end);
        }
        for (range, _) in &self.ranges.slants {
            boundaries.push(range.start);
            boundaries.push(range.end);
        }
        for (range, _) in &self.ranges.weights {
            boundaries.push(range.start);
            boundaries.push(range.end);
        }
        boundaries.retain(|&offset| offset <= char_len);
        boundaries.sort_unstable();
        boundaries.dedup();

        boundaries
            .windows(2)
            .map(|pair| {
                let range = pair[0]..pair[1];
                Segment {
                    text: self.slice(range.clone()),
                    color: self.color_at(range.start),
                    slant: self.slant_at(range.start),
                    weight: self.weight_at(range.start),
                    range,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StyledText {
        // "fn main" with a bold blue "fn" and an italic "main"
        let mut ranges = StyledRanges::default();
        ranges.colors.push(0..2, Color::rgb(0, 0, 255));
        ranges.weights.push(0..2, Weight::Bold);
        ranges.slants.push(3..7, Slant::Italic);
        StyledText::new("fn main".to_string(), ranges, TextConfig::default())
    }

    #[test]
    fn test_attribute_lookup() {
        let styled = sample();
        assert_eq!(styled.color_at(0), Some(Color::rgb(0, 0, 255)));
        assert_eq!(styled.color_at(2), None);
        assert_eq!(styled.weight_at(1), Some(Weight::Bold));
        assert_eq!(styled.slant_at(3), Some(Slant::Italic));
        assert_eq!(styled.slant_at(2), None);
    }

    #[test]
    fn test_segments_round_trip() {
        let styled = sample();
        let reconstructed: String = styled.segments().iter().map(|s| s.text).collect();
        assert_eq!(reconstructed, styled.text());
    }

    #[test]
    fn test_segments_split_at_attribute_boundaries() {
        let styled = sample();
        let segments = styled.segments();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].text, "fn");
        assert_eq!(segments[0].weight, Some(Weight::Bold));
        assert_eq!(segments[1].text, " ");
        assert_eq!(segments[1].color, None);
        assert_eq!(segments[2].text, "main");
        assert_eq!(segments[2].slant, Some(Slant::Italic));
    }

    #[test]
    fn test_empty_text_has_no_segments() {
        let styled = StyledText::new(String::new(), StyledRanges::default(), TextConfig::default());
        assert_eq!(styled.char_len(), 0);
        assert!(styled.segments().is_empty());
    }

    #[test]
    fn test_char_offset_slicing_handles_multibyte() {
        let mut ranges = StyledRanges::default();
        ranges.colors.push(0..2, Color::rgb(1, 2, 3));
        let styled = StyledText::new("é=1".to_string(), ranges, TextConfig::default());
        assert_eq!(styled.slice(0..2), "é=");
        assert_eq!(styled.slice(2..3), "1");
        let reconstructed: String = styled.segments().iter().map(|s| s.text).collect();
        assert_eq!(reconstructed, "é=1");
    }

    #[test]
    fn test_config_defaults() {
        let config = TextConfig::default();
        assert_eq!(config.font_size, 24.0);
        assert_eq!(config.tab_width, 4);
        assert!(!config.ligatures);
    }
}
