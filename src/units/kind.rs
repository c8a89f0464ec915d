use super::value::{Base, BaseSelector};
use super::{Pt, DEFAULT_GUTTER, INCH, MM, PICA};

/// Units with a fixed conversion factor to points.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Absolute {
    Point,
    /// Pixels, treated as equal to points
    Pixel,
    Millimeter,
    Inch,
    Pica,
}

/// Units that need a base reference before they can be expressed in points.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Relative {
    /// Hundredths of the base
    Percent,
    /// Multiples of the base, which is normally a font size
    Em,
    /// CSS-grid style fraction: the base divided by the value
    Fraction,
    /// Share of the base in column widths, accounting for gutters
    Column,
}

/// The closed set of unit kinds a [`UnitValue`](crate::units::UnitValue) can carry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnitKind {
    Absolute(Absolute),
    Relative(Relative),
}

impl Absolute {
    /// How many points one of this unit is
    pub const fn pt_factor(self) -> f64 {
        match self {
            Absolute::Point | Absolute::Pixel => 1.0,
            Absolute::Millimeter => MM,
            Absolute::Inch => INCH,
            Absolute::Pica => PICA,
        }
    }
}

impl Relative {
    /// Render a (clipped) value of this kind to points, given the base and gutter in points.
    /// Division by a zero value yields zero.
    pub fn render(self, value: f64, base: f64, gutter: f64) -> f64 {
        match self {
            Relative::Percent => base * value / 100.0,
            Relative::Em => base * value,
            Relative::Fraction => {
                if value == 0.0 {
                    0.0
                } else {
                    base / value
                }
            }
            Relative::Column => (base + gutter) * value - gutter,
        }
    }

    /// Inverse of [`Relative::render`]: the value of this kind that renders to `points`.
    /// A degenerate base yields zero.
    pub fn unrender(self, points: f64, base: f64, gutter: f64) -> f64 {
        match self {
            Relative::Percent if base != 0.0 => points / base * 100.0,
            Relative::Em if base != 0.0 => points / base,
            Relative::Fraction if points != 0.0 => base / points,
            Relative::Column if base + gutter != 0.0 => (points + gutter) / (base + gutter),
            _ => 0.0,
        }
    }

    /// Base a freshly constructed value of this kind starts with
    pub fn default_base(self) -> Base {
        match self {
            Relative::Percent => Base::Points(Pt(100.0)),
            Relative::Em => Base::Select(BaseSelector::FontSize),
            Relative::Fraction | Relative::Column => Base::Points(Pt(1.0)),
        }
    }

    /// Gutter a freshly constructed value of this kind starts with
    pub fn default_gutter(self) -> Pt {
        match self {
            Relative::Column => DEFAULT_GUTTER,
            _ => Pt::ZERO,
        }
    }
}

impl UnitKind {
    pub const POINT: UnitKind = UnitKind::Absolute(Absolute::Point);
    pub const PIXEL: UnitKind = UnitKind::Absolute(Absolute::Pixel);
    pub const MILLIMETER: UnitKind = UnitKind::Absolute(Absolute::Millimeter);
    pub const INCH: UnitKind = UnitKind::Absolute(Absolute::Inch);
    pub const PICA: UnitKind = UnitKind::Absolute(Absolute::Pica);
    pub const PERCENT: UnitKind = UnitKind::Relative(Relative::Percent);
    pub const EM: UnitKind = UnitKind::Relative(Relative::Em);
    pub const FRACTION: UnitKind = UnitKind::Relative(Relative::Fraction);
    pub const COLUMN: UnitKind = UnitKind::Relative(Relative::Column);

    pub fn is_absolute(self) -> bool {
        matches!(self, UnitKind::Absolute(_))
    }

    pub fn is_relative(self) -> bool {
        matches!(self, UnitKind::Relative(_))
    }

    /// The canonical suffix used when printing values of this kind
    pub fn tag(self) -> &'static str {
        match self {
            UnitKind::Absolute(Absolute::Point) => "pt",
            UnitKind::Absolute(Absolute::Pixel) => "px",
            UnitKind::Absolute(Absolute::Millimeter) => "mm",
            UnitKind::Absolute(Absolute::Inch) => "\"",
            UnitKind::Absolute(Absolute::Pica) => "p",
            UnitKind::Relative(Relative::Percent) => "%",
            UnitKind::Relative(Relative::Em) => "em",
            UnitKind::Relative(Relative::Fraction) => "fr",
            UnitKind::Relative(Relative::Column) => "col",
        }
    }

    /// Look up a kind from a lower-case unit tag. An empty tag means points.
    pub fn from_tag(tag: &str) -> Option<UnitKind> {
        let kind = match tag {
            "" | "pt" => UnitKind::POINT,
            "px" => UnitKind::PIXEL,
            "mm" => UnitKind::MILLIMETER,
            "\"" | "inch" => UnitKind::INCH,
            "p" | "pica" => UnitKind::PICA,
            "%" | "perc" => UnitKind::PERCENT,
            "em" => UnitKind::EM,
            "fr" => UnitKind::FRACTION,
            "col" => UnitKind::COLUMN,
            _ => return None,
        };
        Some(kind)
    }
}

impl std::fmt::Display for UnitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_render_formulas() {
        assert_eq!(Relative::Percent.render(20.0, 440.0, 0.0), 88.0);
        assert_eq!(Relative::Em.render(10.0, 8.0, 0.0), 80.0);
        assert_eq!(Relative::Fraction.render(8.0, 400.0, 0.0), 50.0);
        assert_eq!(Relative::Fraction.render(0.0, 400.0, 0.0), 0.0);
        assert_eq!(Relative::Column.render(0.5, 500.0, 8.0), 246.0);
    }

    #[test]
    fn unrender_inverts_render() {
        for kind in [
            Relative::Percent,
            Relative::Em,
            Relative::Fraction,
            Relative::Column,
        ] {
            let rendered = kind.render(4.0, 200.0, 8.0);
            let value = kind.unrender(rendered, 200.0, 8.0);
            assert!((value - 4.0).abs() < 1e-9, "{kind:?}");
        }
        assert_eq!(Relative::Percent.unrender(50.0, 0.0, 0.0), 0.0);
        assert_eq!(Relative::Fraction.unrender(0.0, 10.0, 0.0), 0.0);
    }

    #[test]
    fn tags_round_trip() {
        for kind in [
            UnitKind::POINT,
            UnitKind::PIXEL,
            UnitKind::MILLIMETER,
            UnitKind::INCH,
            UnitKind::PICA,
            UnitKind::PERCENT,
            UnitKind::EM,
            UnitKind::FRACTION,
            UnitKind::COLUMN,
        ] {
            assert_eq!(UnitKind::from_tag(kind.tag()), Some(kind));
        }
        assert_eq!(UnitKind::from_tag("inch"), Some(UnitKind::INCH));
        assert_eq!(UnitKind::from_tag("perc"), Some(UnitKind::PERCENT));
        assert_eq!(UnitKind::from_tag("furlong"), None);
    }
}
