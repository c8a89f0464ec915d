//! Distribution of overflowing text over a chain of linked containers.
//!
//! A container that can't hold its content names the container that should
//! receive the rest, optionally on another page. [`resolve_overflow`] walks
//! that chain, moving the remainder forward until everything is placed or no
//! successor is left. The engine only talks to the document through the
//! [`FlowHost`] trait.
//!
//! # Example
//!
//! ```
//! use pageflow::flow::{resolve_overflow, FlowState};
//! use pageflow::layout::{StyledText, TextStyle};
//! use pageflow::{pagesize, pt, Document, Page, Pt, TextBox};
//!
//! let mut doc = Document::default();
//! let page = doc.add_page(Page::new(pagesize::A5));
//!
//! let style = TextStyle::new(Pt(10.0), 1.0);
//! let text = StyledText::plain("one two three four five six seven eight", style);
//! let first = doc
//!     .add_container(page, TextBox::new("a", pt(50.0), pt(20.0)).with_content(text).with_next("b"))
//!     .unwrap();
//! let second = doc.add_container(page, TextBox::new("b", pt(50.0), pt(200.0))).unwrap();
//!
//! let outcome = resolve_overflow(&mut doc, first).unwrap();
//! assert_eq!(outcome.state, FlowState::Placed);
//! assert_eq!(outcome.container, second);
//! assert!(!doc.is_overflowing(first).unwrap());
//! ```

use std::fmt::Debug;
use std::hash::Hash;

use crate::error::LayoutError;
use crate::layout::StyledText;
use crate::units::Pt;

mod engine;
mod session;

pub use engine::*;
pub use session::*;

/// Where to look for a successor container when it isn't on the current page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PageSelector {
    /// The page after the current one
    Next,
    /// A page relative to the current one
    Offset(isize),
    /// A page by its 0-based position in the document
    Index(usize),
    /// A page by name
    Named(String),
}

/// The successor a container's overflow should go to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowLink {
    pub container: String,
    pub page: Option<PageSelector>,
}

/// Text that doesn't fit its container, with its rendered height.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Overflow {
    pub text: StyledText,
    pub height: Pt,
}

impl Overflow {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// The document model the flow engine works on.
///
/// Lookups return `None` when nothing matches; the verbs fail only for stale
/// references.
pub trait FlowHost {
    type Page: Copy + Eq + Debug;
    type Container: Copy + Eq + Hash + Debug;

    /// The page a container lives on
    fn page_of(&self, container: Self::Container) -> Result<Self::Page, LayoutError>;

    /// The successor declared by a container, if any
    fn next_link(&self, container: Self::Container) -> Result<Option<FlowLink>, LayoutError>;

    /// Whether continued text in the successor may start with a first-line indent
    fn first_column_indent(&self, container: Self::Container) -> Result<bool, LayoutError>;

    fn lookup_container(&self, name: &str, page: Self::Page) -> Option<Self::Container>;

    fn lookup_page(&self, from: Self::Page, selector: &PageSelector) -> Option<Self::Page>;

    /// Search the whole document for a container with this name
    fn deep_find(&self, name: &str) -> Option<Self::Container>;

    /// The part of the content that does not fit, empty for elastic containers.
    /// Must not change the container.
    fn measure_overflow(&self, container: Self::Container) -> Result<Overflow, LayoutError>;

    /// Drop the overflowing part of the content
    fn retain_fitting(&mut self, container: Self::Container) -> Result<(), LayoutError>;

    fn append_content(
        &mut self,
        container: Self::Container,
        text: StyledText,
    ) -> Result<(), LayoutError>;

    /// Record where a container's content came from
    fn link_back(
        &mut self,
        container: Self::Container,
        prev_page: Self::Page,
        prev_container: Self::Container,
    ) -> Result<(), LayoutError>;
}
