//! Typographic measurement units.
//!
//! Two layers live here:
//!
//! * plain absolute newtypes ([`Pt`], [`Mm`], [`In`], [`Pica`]) used everywhere a
//!   resolved length is needed (page sizes, offsets, line metrics);
//! * [`UnitValue`], a tagged measurement covering absolute and relative kinds,
//!   with clamping, mixed-unit arithmetic and deferred rendering against a base
//!   that may only be known at layout time.
//!
//! # Example
//!
//! ```
//! use pageflow::units::{col, mm, parse, perc, Pt};
//!
//! let width = parse("50%").unwrap().with_base(Pt(440.0));
//! assert_eq!(width.render(), Pt(220.0));
//!
//! // two columns out of a 100mm block with a 4mm gutter
//! let column = col(0.5).with_base(mm(100.0)).with_gutter(mm(4.0));
//! assert_eq!(column.to_points(), mm(48.0));
//!
//! assert!(perc(10.0).try_add(mm(1.0)).is_err());
//! ```

use derive_more::{Add, AddAssign, Display, From, Mul, MulAssign, Neg, Sub, SubAssign, Sum};

mod context;
mod format;
mod kind;
mod ops;
mod parse;
mod value;

pub use context::*;
pub use kind::*;
pub use ops::*;
pub use parse::*;
pub use value::*;

/// Points per inch
pub const INCH: f64 = 72.0;
/// Points per millimeter (0.0393701 inch)
pub const MM: f64 = 0.039_370_1 * INCH;
/// Points per pica
pub const PICA: f64 = 12.0;

/// Basic layout unit that other defaults are derived from
pub const U: Pt = Pt(6.0);
/// Font size used to render `em` values when nothing else is known
pub const EM_FONT_SIZE: Pt = Pt(2.0 * U.0);
/// Default distance between two lines of the baseline grid
pub const BASELINE_GRID: Pt = Pt(2.5 * U.0);
/// Default gutter between columns for [`col`] values
pub const DEFAULT_GUTTER: Pt = Pt(2.0 * U.0);

/// Two point values closer than this are considered equal when compared
/// across unit kinds.
pub const POINT_TOLERANCE: f64 = 1e-9;

/// A length in PostScript points (1/72 inch). Every other unit resolves to this.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    Mul,
    MulAssign,
    Neg,
    Sum,
    From,
    Display,
)]
#[display("{_0}pt")]
pub struct Pt(pub f64);

/// A length in millimeters
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, Mul, Neg, From, Display)]
#[display("{_0}mm")]
pub struct Mm(pub f64);

/// A length in inches
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, Mul, Neg, From, Display)]
#[display("{_0}\"")]
pub struct In(pub f64);

/// A length in picas (12 points)
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, Mul, Neg, From, Display)]
#[display("{_0}p")]
pub struct Pica(pub f64);

impl Pt {
    pub const ZERO: Pt = Pt(0.0);

    pub fn abs(self) -> Pt {
        Pt(self.0.abs())
    }

    pub fn max(self, other: Pt) -> Pt {
        Pt(self.0.max(other.0))
    }

    pub fn min(self, other: Pt) -> Pt {
        Pt(self.0.min(other.0))
    }

    /// Dimensionless ratio of two lengths, `None` when `other` is zero
    pub fn ratio(self, other: Pt) -> Option<f64> {
        if other.0 == 0.0 {
            None
        } else {
            Some(self.0 / other.0)
        }
    }

    /// Whether the two lengths differ by no more than `tolerance` points
    pub fn approx_eq(self, other: Pt, tolerance: f64) -> bool {
        (self.0 - other.0).abs() <= tolerance
    }
}

impl std::ops::Div<f64> for Pt {
    type Output = Pt;

    fn div(self, rhs: f64) -> Pt {
        Pt(self.0 / rhs)
    }
}

impl From<Mm> for Pt {
    fn from(value: Mm) -> Self {
        Pt(value.0 * MM)
    }
}

impl From<In> for Pt {
    fn from(value: In) -> Self {
        Pt(value.0 * INCH)
    }
}

impl From<Pica> for Pt {
    fn from(value: Pica) -> Self {
        Pt(value.0 * PICA)
    }
}

impl From<Pt> for Mm {
    fn from(value: Pt) -> Self {
        Mm(value.0 / MM)
    }
}

impl From<Pt> for In {
    fn from(value: Pt) -> Self {
        In(value.0 / INCH)
    }
}

impl From<Pt> for Pica {
    fn from(value: Pt) -> Self {
        Pica(value.0 / PICA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_newtypes_convert_through_points() {
        assert_eq!(Pt::from(In(1.0)), Pt(72.0));
        assert_eq!(Pt::from(Pica(2.0)), Pt(24.0));
        assert!(Pt::from(Mm(1.0)).approx_eq(Pt(2.834_647_2), 1e-9));

        for value in [0.0, 1.0, 12.5, -3.25, 210.0] {
            let back: Mm = Pt::from(Mm(value)).into();
            assert!((back.0 - value).abs() <= 1e-6);
            let back: In = Pt::from(In(value)).into();
            assert!((back.0 - value).abs() <= 1e-6);
            let back: Pica = Pt::from(Pica(value)).into();
            assert!((back.0 - value).abs() <= 1e-6);
        }
    }

    #[test]
    fn point_arithmetic() {
        let total: Pt = [Pt(1.0), Pt(2.0), Pt(3.5)].into_iter().sum();
        assert_eq!(total, Pt(6.5));
        assert_eq!(Pt(10.0) * 2.0, Pt(20.0));
        assert_eq!(Pt(10.0) / 4.0, Pt(2.5));
        assert_eq!(-Pt(3.0), Pt(-3.0));
        assert_eq!(Pt(3.0).ratio(Pt(0.0)), None);
        assert_eq!(Pt(3.0).ratio(Pt(6.0)), Some(0.5));
        assert_eq!(format!("{}", Pt(12.0)), "12pt");
    }

    #[test]
    fn layout_defaults() {
        assert_eq!(EM_FONT_SIZE, Pt(12.0));
        assert_eq!(BASELINE_GRID, Pt(15.0));
        assert_eq!(DEFAULT_GUTTER, Pt(12.0));
    }
}
