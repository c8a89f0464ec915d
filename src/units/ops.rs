use std::ops::{Add, Div, Mul, Neg, Sub};

use super::kind::UnitKind;
use super::value::UnitValue;
use super::Pt;
use crate::error::UnitError;

/// Right-hand side of a unit operation: a plain number in the left value's own
/// unit, or another unit value.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Operand {
    Scalar(f64),
    Unit(UnitValue),
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Scalar(value as f64)
    }
}

impl From<UnitValue> for Operand {
    fn from(value: UnitValue) -> Self {
        Operand::Unit(value)
    }
}

impl From<Pt> for Operand {
    fn from(value: Pt) -> Self {
        Operand::Unit(value.into())
    }
}

/// Result of a division: dividing by a number keeps the unit, dividing by a
/// unit gives a ratio.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Quotient {
    Unit(UnitValue),
    Ratio(f64),
}

impl UnitValue {
    /// Add a number (in this value's unit) or another unit value.
    ///
    /// Values of the same kind add their raw values. Different absolute kinds
    /// add through points and the result keeps this value's kind. Relative
    /// values only combine with their own kind.
    ///
    /// ```
    /// use pageflow::units::{mm, pt};
    ///
    /// let sum = pt(10.0).try_add(mm(10.0)).unwrap();
    /// assert_eq!(format!("{sum}"), "38.35pt");
    /// assert_eq!(pt(10.0).try_add(20.0).unwrap(), pt(30.0));
    /// ```
    pub fn try_add<O: Into<Operand>>(&self, rhs: O) -> Result<UnitValue, UnitError> {
        self.combine(rhs.into(), |a, b| a + b)
    }

    /// Subtract, with the same rules as [`UnitValue::try_add`]
    pub fn try_sub<O: Into<Operand>>(&self, rhs: O) -> Result<UnitValue, UnitError> {
        self.combine(rhs.into(), |a, b| a - b)
    }

    /// Scale by a number. Multiplying two units is not a length and fails.
    pub fn try_mul<O: Into<Operand>>(&self, rhs: O) -> Result<UnitValue, UnitError> {
        match rhs.into() {
            Operand::Scalar(factor) => Ok(self.with_raw(self.raw() * factor)),
            Operand::Unit(other) => Err(UnitError::InvalidUnitOperation {
                lhs: self.kind(),
                rhs: other.kind(),
            }),
        }
    }

    /// Divide by a number (keeping the unit) or by a unit (giving the ratio of
    /// their point values).
    pub fn try_div<O: Into<Operand>>(&self, rhs: O) -> Result<Quotient, UnitError> {
        match rhs.into() {
            Operand::Scalar(divisor) => {
                if divisor == 0.0 {
                    return Err(UnitError::DivisionByZero(self.kind()));
                }
                Ok(Quotient::Unit(self.with_raw(self.raw() / divisor)))
            }
            Operand::Unit(other) => self.ratio(&other).map(Quotient::Ratio),
        }
    }

    /// Ratio of the point values of `self` and `other`
    pub fn ratio(&self, other: &UnitValue) -> Result<f64, UnitError> {
        let divisor = other.pt();
        if divisor == 0.0 {
            return Err(UnitError::DivisionByZero(self.kind()));
        }
        Ok(self.pt() / divisor)
    }

    fn combine(&self, rhs: Operand, op: impl Fn(f64, f64) -> f64) -> Result<UnitValue, UnitError> {
        match rhs {
            Operand::Scalar(amount) => Ok(self.with_raw(op(self.raw(), amount))),
            Operand::Unit(other) if other.kind() == self.kind() => {
                Ok(self.with_raw(op(self.raw(), other.raw())))
            }
            Operand::Unit(other) => match (self.kind(), other.kind()) {
                (UnitKind::Absolute(absolute), UnitKind::Absolute(_)) => {
                    let points = op(self.pt(), other.pt());
                    Ok(self.with_raw(points / absolute.pt_factor()))
                }
                (lhs, rhs) => Err(UnitError::IncompatibleUnits { lhs, rhs }),
            },
        }
    }
}

impl Add for UnitValue {
    type Output = Result<UnitValue, UnitError>;

    fn add(self, rhs: UnitValue) -> Self::Output {
        self.try_add(rhs)
    }
}

impl Sub for UnitValue {
    type Output = Result<UnitValue, UnitError>;

    fn sub(self, rhs: UnitValue) -> Self::Output {
        self.try_sub(rhs)
    }
}

impl Add<f64> for UnitValue {
    type Output = UnitValue;

    fn add(self, rhs: f64) -> UnitValue {
        self.with_raw(self.raw() + rhs)
    }
}

impl Sub<f64> for UnitValue {
    type Output = UnitValue;

    fn sub(self, rhs: f64) -> UnitValue {
        self.with_raw(self.raw() - rhs)
    }
}

impl Mul<f64> for UnitValue {
    type Output = UnitValue;

    fn mul(self, rhs: f64) -> UnitValue {
        self.with_raw(self.raw() * rhs)
    }
}

impl Div<f64> for UnitValue {
    type Output = Result<UnitValue, UnitError>;

    fn div(self, rhs: f64) -> Self::Output {
        if rhs == 0.0 {
            return Err(UnitError::DivisionByZero(self.kind()));
        }
        Ok(self.with_raw(self.raw() / rhs))
    }
}

impl Div for UnitValue {
    type Output = Result<f64, UnitError>;

    fn div(self, rhs: UnitValue) -> Self::Output {
        self.ratio(&rhs)
    }
}

/// Negates the raw value only; base and bounds are kept.
impl Neg for UnitValue {
    type Output = UnitValue;

    fn neg(self) -> UnitValue {
        self.with_raw(-self.raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{col, em, fr, inch, mm, perc, pica, pt, px};

    #[test]
    fn same_kind_adds_raw_values() {
        assert_eq!(px(12.0).try_add(px(10.0)).unwrap().raw(), 22.0);
        assert_eq!(perc(15.0).try_add(5.0).unwrap().raw(), 20.0);
        assert_eq!((mm(10.0).try_add(mm(5.0)).unwrap() * 2.0).raw(), 30.0);
        assert_eq!(fr(2.0).try_mul(3.0).unwrap().raw(), 6.0);
    }

    #[test]
    fn mixed_absolute_kinds_go_through_points() {
        let sum = mm(10.0).try_add(px(1.0)).unwrap();
        assert_eq!(sum.kind(), UnitKind::MILLIMETER);
        assert!((sum.raw() - (10.0 + 1.0 / crate::units::MM)).abs() < 1e-9);

        let diff = pt(50.0).try_sub(mm(10.0)).unwrap();
        assert!((diff.raw() - 21.653_528).abs() < 1e-6);

        let picas = pica(1.0).try_add(pt(100.0)).unwrap();
        assert!((picas.pt() - 112.0).abs() < 1e-9);
    }

    #[test]
    fn relative_kinds_do_not_mix() {
        assert_eq!(
            perc(10.0).try_add(em(1.0)),
            Err(UnitError::IncompatibleUnits {
                lhs: UnitKind::PERCENT,
                rhs: UnitKind::EM,
            })
        );
        assert!(col(0.5).try_sub(pt(3.0)).is_err());
        assert!(pt(3.0).try_add(fr(1.0)).is_err());
        // going through points first is allowed
        let points = perc(10.0).to_points();
        assert_eq!(points.try_add(em(1.0).to_points()).unwrap(), pt(22.0));
    }

    #[test]
    fn unit_times_unit_is_invalid() {
        assert_eq!(
            pt(3.0).try_mul(mm(2.0)),
            Err(UnitError::InvalidUnitOperation {
                lhs: UnitKind::POINT,
                rhs: UnitKind::MILLIMETER,
            })
        );
    }

    #[test]
    fn division() {
        assert_eq!((pt(60.0) / 2.0).unwrap(), pt(30.0));
        assert_eq!((pt(60.0) / pt(120.0)).unwrap(), 0.5);
        let ratio = (pt(60.0) / mm(1.5)).unwrap();
        assert!((ratio - 14.11).abs() < 0.01);
        assert_eq!(pt(1.0).try_div(0.0), Err(UnitError::DivisionByZero(UnitKind::POINT)));
        assert_eq!(
            inch(1.0).try_div(pt(0.0)),
            Err(UnitError::DivisionByZero(UnitKind::INCH))
        );
        assert!(matches!(inch(1.0).try_div(pt(36.0)), Ok(Quotient::Ratio(r)) if r == 2.0));
    }

    #[test]
    fn negation_flips_raw_only() {
        let value = -(perc(20.0).with_base(Pt(50.0)).with_min(-5.0));
        assert_eq!(value.raw(), -20.0);
        assert_eq!(value.min(), -5.0);
        assert_eq!(value.value(), -5.0);
        assert_eq!(value.render(), Pt(-2.5));
    }

    #[test]
    fn clamped_value_survives_arithmetic() {
        let mut value = pt(10.0).with_min(0.0).with_max(50.0);
        let steps: [(char, f64); 8] = [
            ('+', 30.0),
            ('*', 4.0),
            ('-', 500.0),
            ('+', 25.0),
            ('*', -3.0),
            ('+', 1e6),
            ('-', 7.5),
            ('*', 0.001),
        ];
        for (op, amount) in steps {
            value = match op {
                '+' => value.try_add(amount).unwrap(),
                '-' => value.try_sub(pt(amount)).unwrap(),
                _ => value.try_mul(amount).unwrap(),
            };
            assert!(value.value() >= 0.0 && value.value() <= 50.0);
        }
    }
}
