use crate::error::{Result, SassError, ErrorKind};
use crate::registry::Registry;
use crate::sass::number_value::NumberValue;
use crate::sass::value_part::ValuePart;

pub fn register_builtins(registry: &mut Registry) {
    registry.register_builtin("min:n", min);
    registry.register_builtin("max:n", max);
    registry.register_builtin("percentage:1", percentage);
    registry.register_builtin("round:1", round);
    registry.register_builtin("unquote:1", unquote);
}

/// Renders a call nobody knows how to evaluate back into CSS, so native
/// functions like `rgba()` or `url()` survive untouched.
pub fn unknown(name: &str, args: &[ValuePart]) -> ValuePart {
    let args = args.iter().map(|a| a.to_string()).collect::<Vec<_>>().join(", ");
    ValuePart::String(format!("{}({})", name, args))
}

fn number_arg(value: &ValuePart) -> Result<NumberValue> {
    match *value {
        ValuePart::Number(ref nv) => Ok(nv.clone()),
        ValuePart::String(ref s) => NumberValue::parse(s).ok_or_else(|| SassError::new(
            ErrorKind::TypeCoercion,
            0,
            format!("Expected a number, got `{}`", s),
        )),
        ref other => Err(SassError::new(
            ErrorKind::TypeCoercion,
            0,
            format!("Expected a number, got `{}`", other),
        )),
    }
}

fn extreme<F>(name: &str, args: &[ValuePart], better: F) -> Result<ValuePart>
    where F: Fn(f64, f64) -> bool
{
    let mut best: Option<NumberValue> = None;
    for arg in args {
        let nv = number_arg(arg)?;
        best = match best {
            Some(b) => if better(nv.scalar, b.scalar) { Some(nv) } else { Some(b) },
            None => Some(nv),
        };
    }
    best.map(ValuePart::Number).ok_or_else(|| SassError::new(
        ErrorKind::TypeCoercion,
        0,
        format!("{}() needs at least one argument", name),
    ))
}

fn min(args: &[ValuePart]) -> Result<ValuePart> {
    extreme("min", args, |candidate, best| candidate < best)
}

fn max(args: &[ValuePart]) -> Result<ValuePart> {
    extreme("max", args, |candidate, best| candidate > best)
}

fn percentage(args: &[ValuePart]) -> Result<ValuePart> {
    let scalar = args[0].to_number()?;
    Ok(ValuePart::Number(NumberValue::with_units(scalar * 100.0, "%")))
}

fn round(args: &[ValuePart]) -> Result<ValuePart> {
    let nv = number_arg(&args[0])?;
    Ok(ValuePart::Number(NumberValue { scalar: nv.scalar.round(), ..nv }))
}

fn unquote(args: &[ValuePart]) -> Result<ValuePart> {
    let text = args[0].to_string();
    let trimmed = text.trim_matches(|c: char| c == '"' || c == '\'');
    Ok(ValuePart::String(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_finds_the_smallest_number_keeping_units() {
        let args = vec![ValuePart::from("3px"), ValuePart::from("1px"), ValuePart::from("2px")];
        assert_eq!(Ok(ValuePart::Number(NumberValue::with_units(1.0, "px"))), min(&args));
    }

    #[test]
    fn it_finds_the_largest_number() {
        let args = vec![ValuePart::from(3.0), ValuePart::from(7.0)];
        assert_eq!(Ok(ValuePart::from(7.0)), max(&args));
    }

    #[test]
    fn it_needs_an_argument_for_min() {
        assert_eq!(ErrorKind::TypeCoercion, min(&[]).unwrap_err().kind);
    }

    #[test]
    fn it_converts_to_a_percentage() {
        let result = percentage(&[ValuePart::from(0.5)]);
        assert_eq!(Ok(ValuePart::Number(NumberValue::with_units(50.0, "%"))), result);
    }

    #[test]
    fn it_rounds() {
        let result = round(&[ValuePart::from("2.6em")]);
        assert_eq!(Ok(ValuePart::Number(NumberValue::with_units(3.0, "em"))), result);
    }

    #[test]
    fn it_unquotes() {
        assert_eq!(Ok(ValuePart::from("Helvetica")), unquote(&[ValuePart::from("\"Helvetica\"")]));
    }

    #[test]
    fn it_renders_unknown_calls_verbatim() {
        let args = vec![ValuePart::from(1.0), ValuePart::from(2.0)];
        assert_eq!(ValuePart::from("bar(1, 2)"), unknown("bar", &args));
    }
}
