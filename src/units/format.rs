use std::fmt;

use super::kind::{Absolute, UnitKind};
use super::value::UnitValue;
use super::PICA;

/// Whole numbers print without decimals, anything else with at most two.
pub(crate) fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        return format!("{}", value as i64);
    }
    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn format_pica(value: f64) -> String {
    let mut picas = value.floor();
    let mut points = ((value - picas) * PICA * 100.0).round() / 100.0;
    if points >= PICA {
        picas += 1.0;
        points = 0.0;
    }
    if points == 0.0 {
        format!("{}p", picas as i64)
    } else {
        format!("{}p{}", picas as i64, format_number(points))
    }
}

/// Prints the clipped value followed by the unit tag: `12pt`, `4.23mm`,
/// `1"`, `0.40"`, `2p6`, `50%`, `1.5em`, `3fr`, `0.25col`. Width, fill and
/// alignment flags apply to the whole token.
impl fmt::Display for UnitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.value();
        let token = match self.kind() {
            UnitKind::Absolute(Absolute::Inch) if value.fract() == 0.0 => {
                format!("{}\"", value as i64)
            }
            UnitKind::Absolute(Absolute::Inch) => format!("{value:.2}\""),
            UnitKind::Absolute(Absolute::Pica) => format_pica(value),
            kind => format!("{}{}", format_number(value), kind.tag()),
        };
        f.pad(&token)
    }
}
