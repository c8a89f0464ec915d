use crate::pagesize::Size;
use crate::units::*;

/// A rectangle, specified by two opposite corners. Coordinates grow to the
/// right and down from the top-left corner of the page.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the left edge.
    pub x1: Pt,
    /// The y-coordinate of the top edge.
    pub y1: Pt,
    /// The x-coordinate of the right edge.
    pub x2: Pt,
    /// The y-coordinate of the bottom edge.
    pub y2: Pt,
}

impl Rect {
    pub fn new(x: Pt, y: Pt, size: Size) -> Rect {
        Rect {
            x1: x,
            y1: y,
            x2: x + size.width,
            y2: y + size.height,
        }
    }

    pub fn width(&self) -> Pt {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Pt {
        self.y2 - self.y1
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}
