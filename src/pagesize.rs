//! Page dimensions and pre-defined sizes for common paper formats.
//!
//! All sizes are provided in portrait orientation (width, height) where width ≤ height.
//! Use [`Size::landscape`] and [`Size::portrait`] to switch orientation.
//!
//! # Available Sizes
//!
//! ## North American
//! `LETTER`, `HALF_LETTER`, `JUNIOR_LEGAL`, `LEGAL`, `TABLOID`, `LEDGER`
//!
//! ## ANSI
//! `ANSI_A` through `ANSI_E`
//!
//! ## ISO A-Series
//! `A0` through `A6`
//!
//! ## Traditional
//! `FOLIO`, `QUARTO`, `OCTAVO`
//!
//! # Example
//!
//! ```
//! use pageflow::pagesize::{A4, LETTER};
//! use pageflow::Pt;
//!
//! let landscape = A4.landscape();
//! assert!(landscape.width > landscape.height);
//!
//! // half a letter page, keeping the proportions
//! let half = LETTER.resize_width(Pt(306.0));
//! assert!(half.height.approx_eq(Pt(396.0), 1e-9));
//! ```

use crate::units::{Pt, INCH, MM};

/// Width and height of a page or container, in points.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Size {
    pub width: Pt,
    pub height: Pt,
}

impl Size {
    pub const fn new(width: Pt, height: Pt) -> Size {
        Size { width, height }
    }

    /// Width divided by height, `None` for a zero height
    pub fn aspect(&self) -> Option<f64> {
        self.width.ratio(self.height)
    }

    /// A size with the given width and the height that keeps the aspect ratio.
    /// A size without a usable aspect ratio keeps its height.
    pub fn resize_width(&self, width: Pt) -> Size {
        match self.aspect() {
            Some(aspect) if aspect != 0.0 => Size::new(width, width / aspect),
            _ => Size::new(width, self.height),
        }
    }

    /// A size with the given height and the width that keeps the aspect ratio.
    /// A size without a usable aspect ratio keeps its width.
    pub fn resize_height(&self, height: Pt) -> Size {
        match self.aspect() {
            Some(aspect) => Size::new(height * aspect, height),
            None => Size::new(self.width, height),
        }
    }

    /// The size in portrait orientation (width ≤ height)
    pub fn portrait(self) -> Size {
        if self.width <= self.height {
            self
        } else {
            Size::new(self.height, self.width)
        }
    }

    /// The size in landscape orientation (width ≥ height)
    pub fn landscape(self) -> Size {
        if self.width >= self.height {
            self
        } else {
            Size::new(self.height, self.width)
        }
    }
}

impl From<(Pt, Pt)> for Size {
    fn from((width, height): (Pt, Pt)) -> Self {
        Size::new(width, height)
    }
}

const fn inches(width: f64, height: f64) -> Size {
    Size::new(Pt(width * INCH), Pt(height * INCH))
}

const fn millimeters(width: f64, height: f64) -> Size {
    Size::new(Pt(width * MM), Pt(height * MM))
}

// north american sizes
pub const LETTER: Size = inches(8.5, 11.0);
pub const HALF_LETTER: Size = inches(5.5, 8.5);
pub const JUNIOR_LEGAL: Size = inches(5.0, 8.0);
pub const LEGAL: Size = inches(8.5, 13.0);
pub const TABLOID: Size = inches(11.0, 17.0);
pub const LEDGER: Size = inches(17.0, 11.0);

// ansi sizes
pub const ANSI_A: Size = inches(8.5, 11.0);
pub const ANSI_B: Size = inches(11.0, 17.0);
pub const ANSI_C: Size = inches(17.0, 22.0);
pub const ANSI_D: Size = inches(22.0, 34.0);
pub const ANSI_E: Size = inches(34.0, 44.0);

// traditional sizes
pub const FOLIO: Size = inches(12.0, 19.0);
pub const QUARTO: Size = inches(9.5, 12.0);
pub const OCTAVO: Size = inches(6.0, 9.0);

// iso a-series
pub const A0: Size = millimeters(841.0, 1189.0);
pub const A1: Size = millimeters(594.0, 841.0);
pub const A2: Size = millimeters(420.0, 594.0);
pub const A3: Size = millimeters(297.0, 420.0);
pub const A4: Size = millimeters(210.0, 297.0);
pub const A5: Size = millimeters(148.0, 210.0);
pub const A6: Size = millimeters(105.0, 148.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation() {
        assert_eq!(LEDGER.portrait(), TABLOID);
        assert_eq!(TABLOID.landscape(), LEDGER);
        assert_eq!(A4.portrait(), A4);
    }

    #[test]
    fn resizing_keeps_proportions() {
        let size = Size::new(Pt(400.0), Pt(200.0));
        assert_eq!(size.resize_width(Pt(100.0)), Size::new(Pt(100.0), Pt(50.0)));
        assert_eq!(size.resize_height(Pt(100.0)), Size::new(Pt(200.0), Pt(100.0)));
        // resizing returns a new size
        assert_eq!(size.width, Pt(400.0));
    }

    #[test]
    fn degenerate_sizes_resize_one_side() {
        let flat = Size::new(Pt(400.0), Pt::ZERO);
        assert_eq!(flat.aspect(), None);
        assert_eq!(flat.resize_width(Pt(10.0)), Size::new(Pt(10.0), Pt::ZERO));
        assert_eq!(flat.resize_height(Pt(10.0)), Size::new(Pt(400.0), Pt(10.0)));

        let thin = Size::new(Pt::ZERO, Pt(400.0));
        assert_eq!(thin.resize_width(Pt(10.0)), Size::new(Pt(10.0), Pt(400.0)));
    }

    #[test]
    fn iso_sizes_in_points() {
        assert!(A4.width.approx_eq(Pt(595.28), 0.01));
        assert!(A4.height.approx_eq(Pt(841.89), 0.01));
    }
}
