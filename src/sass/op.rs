use crate::sass::value_part::ValuePart;
use crate::error::{Result, SassError, ErrorKind};

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Equal,
    NotEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match *self {
            Op::Plus         => "+",
            Op::Minus        => "-",
            Op::Star         => "*",
            Op::Slash        => "/",
            Op::Percent      => "%",
            Op::Equal        => "==",
            Op::NotEqual     => "!=",
            Op::Greater      => ">",
            Op::GreaterEqual => ">=",
            Op::Less         => "<",
            Op::LessEqual    => "<=",
        };
        write!(f, "{}", s)
    }
}

impl Op {
    pub fn apply(&self, first: ValuePart, second: ValuePart) -> Result<ValuePart> {
        match *self {
            Op::Equal    => Ok(ValuePart::Bool(first == second)),
            Op::NotEqual => Ok(ValuePart::Bool(first != second)),
            Op::Greater | Op::GreaterEqual | Op::Less | Op::LessEqual => {
                let f = first.to_number()?;
                let s = second.to_number()?;
                Ok(ValuePart::Bool(match *self {
                    Op::Greater      => f > s,
                    Op::GreaterEqual => f >= s,
                    Op::Less         => f < s,
                    _                => f <= s,
                }))
            },
            _ => self.apply_math(first, second),
        }
    }

    fn apply_math(&self, first: ValuePart, second: ValuePart) -> Result<ValuePart> {
        match (first, second) {
            (ValuePart::Number(f), ValuePart::Number(s)) => {
                Ok(ValuePart::Number(f.apply_math(*self, s)?))
            },
            (ValuePart::String(f), s) if *self == Op::Plus => {
                Ok(ValuePart::String(format!("{}{}", f, s)))
            },
            (f @ ValuePart::Number(_), ValuePart::String(s)) if *self == Op::Plus => {
                Ok(ValuePart::String(format!("{}{}", f, s)))
            },
            (f, s) => Err(SassError::new(
                ErrorKind::TypeCoercion,
                0,
                format!("Invalid operands for `{}`: `{}` and `{}`", self, f, s),
            )),
        }
    }

    pub fn math(&self, first: f64, second: f64) -> Result<f64> {
        match *self {
            Op::Plus    => Ok(first + second),
            Op::Minus   => Ok(first - second),
            Op::Star    => Ok(first * second),
            Op::Slash   => Ok(first / second),
            Op::Percent => Ok(first % second),
            other => Err(SassError::new(
                ErrorKind::TypeCoercion,
                0,
                format!("`{}` is not an arithmetic operator", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sass::number_value::NumberValue;

    fn num(n: f64) -> ValuePart {
        ValuePart::Number(NumberValue::from_scalar(n))
    }

    #[test]
    fn it_adds_numbers() {
        assert_eq!(Ok(num(3.0)), Op::Plus.apply(num(1.0), num(2.0)));
    }

    #[test]
    fn it_concatenates_strings() {
        assert_eq!(
            Ok(ValuePart::String(String::from("foo-bar"))),
            Op::Plus.apply(ValuePart::from("foo-"), ValuePart::from("bar"))
        );
    }

    #[test]
    fn it_compares_numbers() {
        assert_eq!(Ok(ValuePart::Bool(true)), Op::Less.apply(num(1.0), num(2.0)));
        assert_eq!(Ok(ValuePart::Bool(false)), Op::GreaterEqual.apply(num(1.0), num(2.0)));
        assert_eq!(Ok(ValuePart::Bool(true)), Op::Equal.apply(num(2.0), num(2.0)));
    }

    #[test]
    fn it_refuses_to_subtract_strings() {
        let result = Op::Minus.apply(ValuePart::from("a"), ValuePart::from("b"));
        assert_eq!(ErrorKind::TypeCoercion, result.unwrap_err().kind);
    }
}
