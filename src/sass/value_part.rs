use crate::sass::number_value::NumberValue;
use crate::error::{Result, SassError, ErrorKind};

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListSeparator {
    Space,
    Comma,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValuePart {
    Null,
    Bool(bool),
    Number(NumberValue),
    String(String),
    List(Vec<ValuePart>, ListSeparator),
}

impl ValuePart {
    /// `null`, `false`, zero, the empty string and the empty list are falsy.
    pub fn is_truthy(&self) -> bool {
        match *self {
            ValuePart::Null => false,
            ValuePart::Bool(b) => b,
            ValuePart::Number(ref nv) => nv.scalar != 0.0,
            ValuePart::String(ref s) => !s.is_empty(),
            ValuePart::List(ref items, _) => !items.is_empty(),
        }
    }

    pub fn to_number(&self) -> Result<f64> {
        let number = match *self {
            ValuePart::Number(ref nv) => Some(nv.scalar),
            ValuePart::String(ref s) => NumberValue::parse(s).map(|nv| nv.scalar),
            _ => None,
        };
        number.ok_or_else(|| SassError::new(
            ErrorKind::TypeCoercion,
            0,
            format!("Expected a number, got `{}`", self),
        ))
    }

    pub fn is_null(&self) -> bool {
        *self == ValuePart::Null
    }
}

impl From<f64> for ValuePart {
    fn from(n: f64) -> ValuePart {
        ValuePart::Number(NumberValue::from_scalar(n))
    }
}

impl From<bool> for ValuePart {
    fn from(b: bool) -> ValuePart {
        ValuePart::Bool(b)
    }
}

impl<'a> From<&'a str> for ValuePart {
    fn from(s: &'a str) -> ValuePart {
        ValuePart::String(s.to_string())
    }
}

impl From<NumberValue> for ValuePart {
    fn from(nv: NumberValue) -> ValuePart {
        ValuePart::Number(nv)
    }
}

impl fmt::Display for ValuePart {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ValuePart::Null => Ok(()),
            ValuePart::Bool(b) => write!(f, "{}", b),
            ValuePart::Number(ref num) => write!(f, "{}", num),
            ValuePart::String(ref s) => write!(f, "{}", s),
            ValuePart::List(ref list, separator) => {
                let sep = match separator {
                    ListSeparator::Space => " ",
                    ListSeparator::Comma => ", ",
                };
                write!(f, "{}", list.iter().map( |l| l.to_string() ).collect::<Vec<_>>().join(sep))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_treats_empty_and_zero_values_as_falsy() {
        assert!(!ValuePart::Null.is_truthy());
        assert!(!ValuePart::from(false).is_truthy());
        assert!(!ValuePart::from(0.0).is_truthy());
        assert!(!ValuePart::from("").is_truthy());
        assert!(!ValuePart::List(vec![], ListSeparator::Space).is_truthy());
    }

    #[test]
    fn it_treats_everything_else_as_truthy() {
        assert!(ValuePart::from(true).is_truthy());
        assert!(ValuePart::from(-1.0).is_truthy());
        assert!(ValuePart::from("nonempty").is_truthy());
        assert!(ValuePart::from("false").is_truthy());
    }

    #[test]
    fn it_coerces_numeric_strings() {
        assert_eq!(Ok(2.5), ValuePart::from("2.5").to_number());
        assert_eq!(Ok(3.0), ValuePart::from("3px").to_number());
    }

    #[test]
    fn it_fails_to_coerce_words() {
        let err = ValuePart::from("red").to_number().unwrap_err();
        assert_eq!(ErrorKind::TypeCoercion, err.kind);
    }

    #[test]
    fn it_displays_lists_with_their_separator() {
        let list = ValuePart::List(
            vec![ValuePart::from(1.0), ValuePart::from("solid")],
            ListSeparator::Space,
        );
        assert_eq!("1 solid", list.to_string());

        let list = ValuePart::List(
            vec![ValuePart::from("a"), ValuePart::from("b")],
            ListSeparator::Comma,
        );
        assert_eq!("a, b", list.to_string());
    }
}
