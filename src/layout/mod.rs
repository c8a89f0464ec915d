//! Text layout utilities for sizing and positioning content in containers.
//!
//! This module provides the styled text model, line wrapping against a
//! pluggable [`TextMetrics`](crate::layout::TextMetrics) collaborator, page
//! margins, and the baseline grid lines are snapped to after placement.
//!
//! # Example
//!
//! ```
//! use pageflow::layout::{FixedMetrics, StyledText, TextStyle};
//! use pageflow::Pt;
//!
//! let style = TextStyle::new(Pt(10.0), 1.5);
//! let text = StyledText::plain("Hello, world! Hello again!", style);
//!
//! // wrapped into 60pt wide lines, 15pt each
//! let (fits, rest) = text.split_at_height(Pt(60.0), Pt(15.0), &FixedMetrics::default());
//! assert_eq!(fits.text(), "Hello, ");
//! assert_eq!(rest.text(), "world! Hello again!");
//! ```

mod baseline;
mod margins;
mod text;

pub use baseline::*;
pub use margins::*;
pub use text::*;
