use crate::error::UnitError;
use crate::pagesize::Size;
use crate::rect::Rect;
use crate::units::{parse, pt, Axis, Pt, RenderContext, UnitValue};

/// Margins are used when laying out containers on a page. There is no control
/// preventing containers from overflowing the margins; they are guidelines
/// that determine the content box of each [`Page`](crate::Page) and the
/// extent relative container sizes are resolved against.
///
/// Each side may be given in any unit. Relative sides are resolved against
/// the page: left and right against its width, top and bottom against its
/// height.
#[derive(Debug, Clone, PartialEq)]
pub struct Margins {
    pub top: UnitValue,
    pub right: UnitValue,
    pub bottom: UnitValue,
    pub left: UnitValue,
}

/// Margins resolved to points
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct ResolvedMargins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Default for Margins {
    fn default() -> Self {
        Margins::empty()
    }
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl<T, R, B, L>(top: T, right: R, bottom: B, left: L) -> Margins
    where
        T: Into<UnitValue>,
        R: Into<UnitValue>,
        B: Into<UnitValue>,
        L: Into<UnitValue>,
    {
        Margins {
            top: top.into(),
            right: right.into(),
            bottom: bottom.into(),
            left: left.into(),
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<UnitValue>>(value: D) -> Margins {
        let value = value.into();
        Margins::trbl(value, value, value, value)
    }

    /// Create margins by specifying different values for vertical (top and bottom)
    /// and horizontal (left and right) margins
    pub fn symmetric<V: Into<UnitValue>, H: Into<UnitValue>>(vertical: V, horizontal: H) -> Margins {
        let vertical = vertical.into();
        let horizontal = horizontal.into();
        Margins::trbl(vertical, horizontal, vertical, horizontal)
    }

    /// Create margins where all values are 0.0
    pub fn empty() -> Margins {
        Margins::all(pt(0.0))
    }

    /// Parse CSS shorthand with one to four unit tokens, e.g. `"20mm"`,
    /// `"1in 10%"`, `"12pt 2p 12pt"` or `"1 2 3 4"`.
    ///
    /// ```
    /// use pageflow::layout::Margins;
    /// use pageflow::units::{mm, pt};
    ///
    /// let margins = Margins::parse("10mm 20pt").unwrap();
    /// assert_eq!(margins.top, mm(10.0));
    /// assert_eq!(margins.left, pt(20.0));
    /// assert!(Margins::parse("1 2 3 4 5").is_err());
    /// ```
    pub fn parse(shorthand: &str) -> Result<Margins, UnitError> {
        let values = shorthand
            .split_whitespace()
            .map(parse)
            .collect::<Result<Vec<UnitValue>, UnitError>>()?;
        match values[..] {
            [all] => Ok(Margins::all(all)),
            [vertical, horizontal] => Ok(Margins::symmetric(vertical, horizontal)),
            [top, horizontal, bottom] => Ok(Margins::trbl(top, horizontal, bottom, horizontal)),
            [top, right, bottom, left] => Ok(Margins::trbl(top, right, bottom, left)),
            _ => Err(UnitError::Parse(shorthand.to_string())),
        }
    }

    /// Resolve every side to points for a page of the given size
    pub fn resolve(&self, page: Size) -> ResolvedMargins {
        let context = RenderContext::with_parent(page.width, page.height);
        let side = |value: &UnitValue, axis: Axis| value.anchored(axis).render_in(&context);
        ResolvedMargins {
            top: side(&self.top, Axis::Vertical),
            right: side(&self.right, Axis::Horizontal),
            bottom: side(&self.bottom, Axis::Vertical),
            left: side(&self.left, Axis::Horizontal),
        }
    }

    /// The area inside the margins of a page of the given size
    pub fn content_box(&self, page: Size) -> Rect {
        let resolved = self.resolve(page);
        Rect {
            x1: resolved.left,
            y1: resolved.top,
            x2: page.width - resolved.right,
            y2: page.height - resolved.bottom,
        }
    }

    /// Utility method to add a gutter to the left of the page,
    /// usually for even-numbered pages in bound documents
    pub fn with_gutter_left<G: Into<UnitValue>>(&self, gutter: G) -> Result<Margins, UnitError> {
        Ok(Margins {
            left: self.left.try_add(gutter.into())?,
            ..self.clone()
        })
    }

    /// Utility method to add a gutter to the right of the page,
    /// usually for odd-numbered pages in bound documents
    pub fn with_gutter_right<G: Into<UnitValue>>(&self, gutter: G) -> Result<Margins, UnitError> {
        Ok(Margins {
            right: self.right.try_add(gutter.into())?,
            ..self.clone()
        })
    }

    /// Utility function to add a gutter to either the left or the right
    /// side of the page, depending on whether the page index is:
    /// * _even_ => left
    /// * _odd_ => right
    pub fn with_gutter<G: Into<UnitValue>>(
        &self,
        gutter: G,
        page_index: usize,
    ) -> Result<Margins, UnitError> {
        if page_index % 2 == 0 {
            self.with_gutter_left(gutter)
        } else {
            self.with_gutter_right(gutter)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{mm, perc};

    #[test]
    fn shorthand_follows_css_order() {
        let margins = Margins::parse("1 2 3").unwrap();
        assert_eq!(margins, Margins::trbl(1.0, 2.0, 3.0, 2.0));
        let margins = Margins::parse(" 4pt ").unwrap();
        assert_eq!(margins, Margins::all(4.0));
        assert!(Margins::parse("").is_err());
        assert!(Margins::parse("1 wide").is_err());
    }

    #[test]
    fn relative_sides_follow_their_axis() {
        let margins = Margins::symmetric(perc(10.0), perc(5.0));
        let resolved = margins.resolve(Size::new(Pt(400.0), Pt(600.0)));
        assert_eq!(resolved.top, Pt(60.0));
        assert_eq!(resolved.bottom, Pt(60.0));
        assert_eq!(resolved.left, Pt(20.0));
        assert_eq!(resolved.right, Pt(20.0));
    }

    #[test]
    fn content_box_is_inside_the_margins() {
        let margins = Margins::trbl(10.0, 20.0, 30.0, 40.0);
        let content = margins.content_box(Size::new(Pt(200.0), Pt(300.0)));
        assert_eq!(content.x1, Pt(40.0));
        assert_eq!(content.y1, Pt(10.0));
        assert_eq!(content.width(), Pt(140.0));
        assert_eq!(content.height(), Pt(260.0));
    }

    #[test]
    fn gutters_alternate_sides() {
        let margins = Margins::all(mm(10.0));
        let even = margins.with_gutter(mm(5.0), 0).unwrap();
        assert_eq!(even.left, mm(15.0));
        assert_eq!(even.right, mm(10.0));
        let odd = margins.with_gutter(mm(5.0), 1).unwrap();
        assert_eq!(odd.right, mm(15.0));

        assert!(Margins::all(perc(5.0)).with_gutter_left(mm(5.0)).is_err());
    }
}
