//! Typographic measurement units and text-flow overflow distribution for
//! programmatic page layout.
//!
//! The crate has two halves that work together:
//!
//! * [`units`]: absolute and relative unit values with mixed-unit arithmetic,
//!   clamping, parsing and deferred rendering against a base known only at
//!   layout time;
//! * [`flow`]: an engine that moves the text a [`TextBox`] can't hold along a
//!   chain of linked boxes, across pages if needed, while guarding against
//!   cyclic chains.
//!
//! A small [`Document`] model of pages and boxes ties the two together.

pub mod units;
pub use units::*;

mod error;
pub use error::*;

/// Distribution of overflowing text over linked containers
pub mod flow;

/// Utility functions and structures to lay out text in containers
pub mod layout;

mod document;
pub use document::*;

mod page;
pub use page::*;

/// Page sizes
pub mod pagesize;
pub use pagesize::Size;

mod rect;
pub use rect::*;

mod textbox;
pub use textbox::*;

/// Re-export of the arena ids pages and containers are referred to by
pub use id_arena;
