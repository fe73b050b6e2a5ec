use crate::sass::op::Op;
use crate::error::{Result, SassError, ErrorKind};

use once_cell::sync::Lazy;
use regex::Regex;

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct NumberValue {
    pub scalar: f64,
    pub unit:   Option<String>,
}

impl NumberValue {
    pub fn from_scalar(num: f64) -> NumberValue {
        NumberValue {
            scalar: num,
            unit:   None,
        }
    }

    pub fn with_units<S: Into<String>>(num: f64, unit: S) -> NumberValue {
        NumberValue {
            scalar: num,
            unit:   Some(unit.into()),
        }
    }

    /// Reads a leading number with an optional unit, like `10`, `-1.5em` or `50%`.
    pub fn parse(text: &str) -> Option<NumberValue> {
        static NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"^\s*(?P<scalar>[-+]?(?:\d+\.?\d*|\.\d+))(?P<unit>%|[a-zA-Z]+)?\s*$")
                .expect("number regex should compile")
        });

        let caps = NUMBER_RE.captures(text)?;
        let scalar = caps.name("scalar")?.as_str().parse::<f64>().ok()?;
        Some(NumberValue {
            scalar: scalar,
            unit:   caps.name("unit").map(|u| u.as_str().to_string()),
        })
    }

    pub fn unit_string(&self) -> &str {
        match self.unit {
            Some(ref u) => u,
            None        => "",
        }
    }

    pub fn apply_math(self, op: Op, nv: NumberValue) -> Result<NumberValue> {
        let result       = self.compute_number(op, &nv)?;
        let result_units = self.compute_units(op, nv)?;

        Ok(NumberValue {
            scalar: result,
            unit:   result_units,
        })
    }

    fn compute_number(&self, op: Op, nv: &NumberValue) -> Result<f64> {
        op.math(self.scalar, nv.scalar)
    }

    fn compute_units(self, op: Op, nv: NumberValue) -> Result<Option<String>> {
        let unit = match (self.unit, nv.unit) {
            (Some(u), None) | (None, Some(u)) => Some(u),
            (Some(u1), Some(u2)) => {
                if u1 != u2 {
                    return Err(SassError::new(
                        ErrorKind::IncompatibleUnits,
                        0,
                        format!("Incompatible units: {} and {}", u1, u2),
                    ))
                }
                match op {
                    Op::Slash => None, // Divide out the units
                    Op::Star => return Err(SassError::new(
                        ErrorKind::InvalidSquareUnits,
                        0,
                        format!(
                            "Multiplication of {} and {} would produce invalid squared units",
                            u1, u2
                        ),
                    )),
                    _ => Some(u1),
                }
            },
            (None, None) => None,
        };
        Ok(unit)
    }
}

/// Decimal places kept when a number is printed.
const PRECISION: i32 = 5;

impl fmt::Display for NumberValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let factor = 10f64.powi(PRECISION);
        let mut rounded = (self.scalar * factor).round() / factor;
        if rounded == 0.0 {
            rounded = 0.0;
        }
        write!(f, "{}{}", rounded, self.unit_string())
    }
}
