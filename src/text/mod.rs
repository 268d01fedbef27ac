// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Styled-text structures consumed by the rendering side.

pub mod span_map;
pub mod styled;

pub use span_map::SpanMap;
pub use styled::{Segment, StyledText, TextConfig};
