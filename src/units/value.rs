use std::cmp::Ordering;

use super::context::{Axis, RenderContext};
use super::kind::{Absolute, Relative, UnitKind};
use super::{Pt, POINT_TOLERANCE};

/// A reference that is looked up in the [`RenderContext`] when a relative
/// value is rendered, rather than fixed when the value is built.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BaseSelector {
    ParentWidth,
    ParentHeight,
    FontSize,
}

/// The reference magnitude of a relative value.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Base {
    Points(Pt),
    Select(BaseSelector),
}

impl From<Pt> for Base {
    fn from(value: Pt) -> Self {
        Base::Points(value)
    }
}

impl From<f64> for Base {
    fn from(value: f64) -> Self {
        Base::Points(Pt(value))
    }
}

impl From<BaseSelector> for Base {
    fn from(value: BaseSelector) -> Self {
        Base::Select(value)
    }
}

/// A unit value used as a base is fixed to its point equivalent at assignment.
impl From<UnitValue> for Base {
    fn from(value: UnitValue) -> Self {
        Base::Points(value.render())
    }
}

/// A measurement tagged with its unit kind.
///
/// The raw value is kept as declared; [`value`](UnitValue::value) clips it to
/// the optional `min`/`max` bounds, and [`render`](UnitValue::render) turns
/// the clipped value into points. For absolute kinds rendering is only a unit
/// conversion; relative kinds need their base (and, for columns, the gutter).
#[derive(Debug, Copy, Clone)]
pub struct UnitValue {
    kind: UnitKind,
    raw: f64,
    min: f64,
    max: f64,
    base: Option<Base>,
    gutter: Pt,
}

impl UnitValue {
    /// Create a value of the given kind with the kind's default base and gutter
    /// and no bounds.
    pub fn new(kind: UnitKind, raw: f64) -> UnitValue {
        let (base, gutter) = match kind {
            UnitKind::Absolute(_) => (None, Pt::ZERO),
            UnitKind::Relative(relative) => {
                (Some(relative.default_base()), relative.default_gutter())
            }
        };
        UnitValue {
            kind,
            raw,
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
            base,
            gutter,
        }
    }

    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    pub fn is_absolute(&self) -> bool {
        self.kind.is_absolute()
    }

    pub fn is_relative(&self) -> bool {
        self.kind.is_relative()
    }

    /// The value as declared, ignoring `min` and `max`
    pub fn raw(&self) -> f64 {
        self.raw
    }

    /// The raw value clipped to `[min, max]`
    pub fn value(&self) -> f64 {
        self.max.min(self.min.max(self.raw))
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn base(&self) -> Option<Base> {
        self.base
    }

    pub fn gutter(&self) -> Pt {
        self.gutter
    }

    pub(crate) fn with_raw(mut self, raw: f64) -> UnitValue {
        self.raw = raw;
        self
    }

    /// Set the base used to render relative values. Absolute values ignore it.
    pub fn set_base<B: Into<Base>>(&mut self, base: B) {
        if self.is_relative() {
            self.base = Some(base.into());
        }
    }

    pub fn with_base<B: Into<Base>>(mut self, base: B) -> UnitValue {
        self.set_base(base);
        self
    }

    /// Set the inter-column gutter. Only [`col`] values use it.
    pub fn set_gutter<G: Into<UnitValue>>(&mut self, gutter: G) {
        self.gutter = gutter.into().render();
    }

    pub fn with_gutter<G: Into<UnitValue>>(mut self, gutter: G) -> UnitValue {
        self.set_gutter(gutter);
        self
    }

    /// Set the lower bound. Unit values are converted to points, plain numbers
    /// are taken as is; `None` removes the bound.
    pub fn set_min<M: Into<UnitValue>>(&mut self, min: Option<M>) {
        self.min = min.map_or(f64::NEG_INFINITY, |m| m.into().pt());
    }

    pub fn with_min<M: Into<UnitValue>>(mut self, min: M) -> UnitValue {
        self.set_min(Some(min));
        self
    }

    /// Set the upper bound, see [`UnitValue::set_min`]
    pub fn set_max<M: Into<UnitValue>>(&mut self, max: Option<M>) {
        self.max = max.map_or(f64::INFINITY, |m| m.into().pt());
    }

    pub fn with_max<M: Into<UnitValue>>(mut self, max: M) -> UnitValue {
        self.set_max(Some(max));
        self
    }

    /// Point magnitude of the base in `context`, or `None` for absolute values
    /// and for selectors the context cannot answer yet.
    pub fn resolve_base(&self, context: &RenderContext) -> Option<Pt> {
        match self.base? {
            Base::Points(points) => Some(points),
            Base::Select(selector) => context.resolve(selector),
        }
    }

    /// Render against the default context, see [`UnitValue::render_in`]
    pub fn render(&self) -> Pt {
        self.render_in(&RenderContext::default())
    }

    /// Render the clipped value to points. A relative value whose base is
    /// unresolved in `context` renders to zero.
    pub fn render_in(&self, context: &RenderContext) -> Pt {
        let value = self.value();
        match self.kind {
            UnitKind::Absolute(absolute) => Pt(value * absolute.pt_factor()),
            UnitKind::Relative(relative) => match self.resolve_base(context) {
                Some(base) => Pt(relative.render(value, base.0, self.gutter.0)),
                None => Pt::ZERO,
            },
        }
    }

    /// Rendered value as a plain number of points
    pub fn pt(&self) -> f64 {
        self.render().0
    }

    /// The rendered value as a point-kind unit value
    pub fn to_points(&self) -> UnitValue {
        pt(self.pt())
    }

    /// Rebind relative values to the parent extent along `axis` (or the font
    /// size, for `em`), the way element dimensions are resolved during layout.
    /// Absolute values are returned unchanged.
    pub fn anchored(self, axis: Axis) -> UnitValue {
        match self.kind {
            UnitKind::Absolute(_) => self,
            UnitKind::Relative(Relative::Em) => self.with_base(BaseSelector::FontSize),
            UnitKind::Relative(_) => self.with_base(match axis {
                Axis::Horizontal => BaseSelector::ParentWidth,
                Axis::Vertical => BaseSelector::ParentHeight,
            }),
        }
    }

    /// Re-express this value in another kind, see [`UnitValue::convert_in`]
    pub fn convert(&self, kind: UnitKind) -> UnitValue {
        self.convert_in(kind, &RenderContext::default())
    }

    /// Re-express this value in `kind` so that both render to the same number
    /// of points. Relative targets use their default base and gutter, looked
    /// up in `context`. The result carries no bounds.
    pub fn convert_in(&self, kind: UnitKind, context: &RenderContext) -> UnitValue {
        if kind == self.kind {
            return *self;
        }
        let points = self.render_in(context);
        let target = UnitValue::new(kind, 0.0);
        let raw = target.raw_for_points(points, context);
        target.with_raw(raw)
    }

    /// The raw value of this value's kind, base and gutter that renders to `points`
    pub(crate) fn raw_for_points(&self, points: Pt, context: &RenderContext) -> f64 {
        match self.kind {
            UnitKind::Absolute(absolute) => points.0 / absolute.pt_factor(),
            UnitKind::Relative(relative) => match self.resolve_base(context) {
                Some(base) => relative.unrender(points.0, base.0, self.gutter.0),
                None => 0.0,
            },
        }
    }

    /// A copy with the raw value rounded to the nearest integer
    pub fn round(&self) -> UnitValue {
        self.with_raw(self.raw.round())
    }

    /// A copy with a non-negative raw value
    pub fn abs(&self) -> UnitValue {
        self.with_raw(self.raw.abs())
    }
}

/// Values of the same kind compare their clipped values; values of different
/// kinds compare their point equivalents.
impl PartialEq for UnitValue {
    fn eq(&self, other: &UnitValue) -> bool {
        if self.kind == other.kind {
            self.value() == other.value()
        } else {
            (self.pt() - other.pt()).abs() <= POINT_TOLERANCE
        }
    }
}

impl PartialOrd for UnitValue {
    fn partial_cmp(&self, other: &UnitValue) -> Option<Ordering> {
        if self.kind == other.kind {
            self.value().partial_cmp(&other.value())
        } else if self == other {
            Some(Ordering::Equal)
        } else {
            self.pt().partial_cmp(&other.pt())
        }
    }
}

impl From<Pt> for UnitValue {
    fn from(value: Pt) -> Self {
        pt(value.0)
    }
}

/// Plain numbers are points
impl From<f64> for UnitValue {
    fn from(value: f64) -> Self {
        pt(value)
    }
}

impl From<i32> for UnitValue {
    fn from(value: i32) -> Self {
        pt(value as f64)
    }
}

impl From<super::Mm> for UnitValue {
    fn from(value: super::Mm) -> Self {
        mm(value.0)
    }
}

impl From<super::In> for UnitValue {
    fn from(value: super::In) -> Self {
        inch(value.0)
    }
}

impl From<super::Pica> for UnitValue {
    fn from(value: super::Pica) -> Self {
        pica(value.0)
    }
}

/// Points
pub fn pt(value: f64) -> UnitValue {
    UnitValue::new(UnitKind::Absolute(Absolute::Point), value)
}

/// Pixels, equal to points
pub fn px(value: f64) -> UnitValue {
    UnitValue::new(UnitKind::Absolute(Absolute::Pixel), value)
}

/// Millimeters
pub fn mm(value: f64) -> UnitValue {
    UnitValue::new(UnitKind::Absolute(Absolute::Millimeter), value)
}

/// Inches
pub fn inch(value: f64) -> UnitValue {
    UnitValue::new(UnitKind::Absolute(Absolute::Inch), value)
}

/// Picas; fractional picas carry the point remainder (`pica(2.5)` is `2p6`)
pub fn pica(value: f64) -> UnitValue {
    UnitValue::new(UnitKind::Absolute(Absolute::Pica), value)
}

/// Percentage of the base, which defaults to 100pt
pub fn perc(value: f64) -> UnitValue {
    UnitValue::new(UnitKind::Relative(Relative::Percent), value)
}

/// Multiple of the font size in the render context
pub fn em(value: f64) -> UnitValue {
    UnitValue::new(UnitKind::Relative(Relative::Em), value)
}

/// Grid fraction: renders to `base / value`
pub fn fr(value: f64) -> UnitValue {
    UnitValue::new(UnitKind::Relative(Relative::Fraction), value)
}

/// Column share: renders to `(base + gutter) * value - gutter`
pub fn col(value: f64) -> UnitValue {
    UnitValue::new(UnitKind::Relative(Relative::Column), value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-6
    }

    #[test]
    fn absolute_values_render_to_their_clipped_value() {
        let width = mm(100.0).with_min(10.0).with_max(30.0);
        assert_eq!(width.raw(), 100.0);
        assert_eq!(width.value(), 30.0);
        assert!(close(width.pt(), 30.0 * super::super::MM));
        assert_eq!(inch(4.0).pt(), 288.0);
        assert_eq!(pica(1.0).pt(), 12.0);
        assert_eq!(px(7.0).pt(), 7.0);
    }

    #[test]
    fn absolute_round_trip_through_points() {
        let kinds = [
            UnitKind::POINT,
            UnitKind::PIXEL,
            UnitKind::MILLIMETER,
            UnitKind::INCH,
            UnitKind::PICA,
        ];
        for a in kinds {
            for b in kinds {
                for v in [0.0, 1.0, 3.75, -12.0, 297.0] {
                    let there = UnitValue::new(a, v).convert(b);
                    let back = there.convert(a);
                    assert!(close(back.raw(), v), "{a:?} -> {b:?} -> {a:?} for {v}");
                }
            }
        }
    }

    #[test]
    fn percent_and_em_render_linearly_in_base() {
        for base in [0.0, 12.0, 440.0] {
            let once = perc(20.0).with_base(Pt(base)).render();
            let twice = perc(20.0).with_base(Pt(2.0 * base)).render();
            assert!(close(twice.0, 2.0 * once.0));

            let once = em(1.5).with_base(Pt(base)).render();
            let twice = em(1.5).with_base(Pt(2.0 * base)).render();
            assert!(close(twice.0, 2.0 * once.0));
        }
        assert_eq!(perc(20.0).with_base(Pt(440.0)).render(), Pt(88.0));
        assert_eq!(perc(100.0).render(), Pt(100.0));
    }

    #[test]
    fn column_render_subtracts_one_gutter() {
        let column = col(0.5).with_base(mm(100.0)).with_gutter(mm(4.0));
        assert_eq!(column.to_points(), mm(48.0));

        let quarter = col(0.25).with_base(mm(200.0)).with_gutter(mm(8.0));
        assert!(close(quarter.pt(), mm(44.0).pt()));

        // doubling the base does not double the result, the gutter is removed once
        let base = 100.0;
        let gutter = 10.0;
        let single = col(0.5).with_base(Pt(base)).with_gutter(Pt(gutter)).pt();
        let double = col(0.5).with_base(Pt(2.0 * base)).with_gutter(Pt(gutter)).pt();
        assert!(close(single, (base + gutter) * 0.5 - gutter));
        assert!(close(double, (2.0 * base + gutter) * 0.5 - gutter));
    }

    #[test]
    fn fraction_renders_inversely() {
        assert_eq!(fr(8.0).with_base(Pt(400.0)).render(), Pt(50.0));
        assert_eq!(fr(4.0).with_base(100.0).render(), Pt(25.0));
        assert_eq!(fr(0.0).with_base(100.0).render(), Pt::ZERO);
    }

    #[test]
    fn em_uses_context_font_size() {
        let size = em(10.0);
        assert_eq!(size.render(), Pt(120.0));
        let context = RenderContext::default().with_font_size(Pt(8.0));
        assert_eq!(size.render_in(&context), Pt(80.0));
        assert_eq!(size.with_base(Pt(24.0)).render_in(&context), Pt(240.0));
    }

    #[test]
    fn unresolved_base_renders_to_zero() {
        let width = perc(50.0).with_base(BaseSelector::ParentWidth);
        assert_eq!(width.render(), Pt::ZERO);
        let context = RenderContext::with_parent(Pt(300.0), Pt(500.0));
        assert_eq!(width.render_in(&context), Pt(150.0));
        let column = col(1.0).with_base(BaseSelector::ParentWidth);
        assert_eq!(column.render(), Pt::ZERO);
    }

    #[test]
    fn anchored_rebinds_relative_bases() {
        let context = RenderContext::with_parent(Pt(300.0), Pt(500.0));
        assert_eq!(perc(40.0).anchored(Axis::Vertical).render_in(&context), Pt(200.0));
        assert_eq!(perc(40.0).anchored(Axis::Horizontal).render_in(&context), Pt(120.0));
        assert_eq!(em(2.0).anchored(Axis::Vertical).render_in(&context), Pt(24.0));
        assert_eq!(pt(5.0).anchored(Axis::Vertical).render_in(&context), Pt(5.0));
    }

    #[test]
    fn clamping_applies_before_rendering() {
        let share = perc(150.0).with_base(Pt(200.0)).with_max(100.0);
        assert_eq!(share.value(), 100.0);
        assert_eq!(share.render(), Pt(200.0));
        assert_eq!(share.raw(), 150.0);

        let mut bounded = pt(5.0).with_min(10.0);
        assert_eq!(bounded.value(), 10.0);
        bounded.set_min(None::<f64>);
        assert_eq!(bounded.value(), 5.0);
    }

    #[test]
    fn bounds_given_as_units_are_points() {
        let value = pt(100.0).with_max(inch(1.0));
        assert_eq!(value.max(), 72.0);
        assert_eq!(value.value(), 72.0);
    }

    #[test]
    fn convert_to_relative_kinds() {
        let percent = pt(50.0).convert(UnitKind::PERCENT);
        assert!(close(percent.raw(), 50.0));
        let ems = pt(36.0).convert(UnitKind::EM);
        assert!(close(ems.raw(), 3.0));
        let inches = mm(25.4).convert(UnitKind::INCH);
        assert!(close(inches.raw(), 1.0));
        assert_eq!(pt(12.0).convert(UnitKind::POINT).raw(), 12.0);
    }

    #[test]
    fn round_and_abs_keep_bounds() {
        let value = pt(12.6).with_max(20.0);
        let rounded = value.round();
        assert_eq!(rounded.raw(), 13.0);
        assert_eq!(rounded.max(), 20.0);
        assert_eq!(value.raw(), 12.6);
        assert_eq!(mm(-1000.0).abs().raw(), 1000.0);
    }

    #[test]
    fn equality_across_kinds_uses_points() {
        assert_eq!(inch(1.0), pt(72.0));
        assert_eq!(pica(6.0), inch(1.0));
        assert!(mm(10.0) > pt(20.0));
        assert!(pt(10.0) < pt(11.0));
        assert_ne!(perc(50.0), em(50.0));
    }

    #[test]
    fn base_on_absolute_value_is_ignored() {
        let value = pt(10.0).with_base(Pt(400.0));
        assert_eq!(value.base(), None);
        assert_eq!(value.render(), Pt(10.0));
    }
}
