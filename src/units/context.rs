use super::value::BaseSelector;
use super::{Pt, EM_FONT_SIZE};

/// Direction a length is measured in. Picks which parent extent relative
/// values render against.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// The late-bound references relative units are rendered against.
///
/// There is no process-wide default: whoever knows the surrounding geometry
/// builds one of these and passes it to [`UnitValue::render_in`](crate::units::UnitValue::render_in).
/// Extents that are not known yet stay `None`, and values depending on them
/// render to zero.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderContext {
    pub parent_width: Option<Pt>,
    pub parent_height: Option<Pt>,
    pub font_size: Pt,
}

impl Default for RenderContext {
    fn default() -> Self {
        RenderContext {
            parent_width: None,
            parent_height: None,
            font_size: EM_FONT_SIZE,
        }
    }
}

impl RenderContext {
    /// A context for content placed inside a parent of the given size
    pub fn with_parent(width: Pt, height: Pt) -> RenderContext {
        RenderContext {
            parent_width: Some(width),
            parent_height: Some(height),
            ..RenderContext::default()
        }
    }

    pub fn with_font_size(mut self, font_size: Pt) -> RenderContext {
        self.font_size = font_size;
        self
    }

    /// The parent extent along `axis`, if known
    pub fn extent(&self, axis: Axis) -> Option<Pt> {
        match axis {
            Axis::Horizontal => self.parent_width,
            Axis::Vertical => self.parent_height,
        }
    }

    pub fn resolve(&self, selector: BaseSelector) -> Option<Pt> {
        match selector {
            BaseSelector::ParentWidth => self.parent_width,
            BaseSelector::ParentHeight => self.parent_height,
            BaseSelector::FontSize => Some(self.font_size),
        }
    }
}
