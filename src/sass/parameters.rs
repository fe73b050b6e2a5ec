use crate::ast::expression::Expression;
use crate::context::Context;
use crate::error::Result;
use crate::registry::Registry;
use crate::sass::value_part::ValuePart;

use std::collections::HashMap;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub struct SassParameter {
    pub name: String,
    pub default: Option<Expression>,
}

impl SassParameter {
    pub fn new<S: Into<String>>(name: S) -> SassParameter {
        SassParameter { name: name.into(), default: None }
    }

    pub fn with_default<S: Into<String>>(name: S, default: Expression) -> SassParameter {
        SassParameter { name: name.into(), default: Some(default) }
    }

    /// Picks the value this parameter is bound to. A supplied value only wins
    /// when it is truthy, so an explicit `false`, `0` or `""` falls back to the
    /// declared default, or to null when there is none.
    pub fn bind(&self, supplied: Option<ValuePart>, registry: &mut Registry) -> Result<ValuePart> {
        match (supplied, &self.default) {
            (Some(value), _) if value.is_truthy() => Ok(value),
            (_, &Some(ref default)) => default.evaluate(registry),
            (_, &None) => Ok(ValuePart::Null),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SassArgument {
    pub name: Option<String>,
    pub value: Expression,
}

impl SassArgument {
    pub fn positional(value: Expression) -> SassArgument {
        SassArgument { name: None, value: value }
    }

    pub fn named<S: Into<String>>(name: S, value: Expression) -> SassArgument {
        SassArgument { name: Some(name.into()), value: value }
    }

    pub fn copy_with(&self, ctx: &Rc<Context>) -> SassArgument {
        SassArgument {
            name: self.name.clone(),
            value: self.value.copy_with(ctx),
        }
    }
}

/// An argument after evaluation at the call site.
#[derive(Clone, Debug, PartialEq)]
pub struct ArgumentValue {
    pub name: Option<String>,
    pub value: ValuePart,
}

impl ArgumentValue {
    pub fn positional(value: ValuePart) -> ArgumentValue {
        ArgumentValue { name: None, value: value }
    }
}

pub fn evaluate_arguments(arguments: &[SassArgument], registry: &mut Registry) -> Result<Vec<ArgumentValue>> {
    let mut values = Vec::with_capacity(arguments.len());
    for a in arguments {
        values.push(ArgumentValue {
            name: a.name.clone(),
            value: a.value.evaluate(registry)?,
        });
    }
    Ok(values)
}

/// Builds the context for one invocation: named arguments first, then
/// positional arguments in order, then defaults. Arguments beyond the
/// declared parameters are dropped.
pub fn collate_args_parameters(
    parameters: &[SassParameter],
    arguments: Vec<ArgumentValue>,
    registry: &mut Registry,
) -> Result<Rc<Context>> {

    let mut named_arguments = HashMap::new();
    let mut positional_arguments = Vec::new();

    for a in arguments {
        match a.name {
            Some(name) => { named_arguments.insert(name, a.value); },
            None => positional_arguments.push(a.value),
        }
    }

    let mut positional_arguments = positional_arguments.into_iter();
    let mut bindings = Vec::with_capacity(parameters.len());

    for p in parameters {
        let supplied = match named_arguments.remove(&p.name) {
            Some(v) => Some(v),
            None => positional_arguments.next(),
        };
        bindings.push((p.name.clone(), p.bind(supplied, registry)?));
    }

    Ok(Context::from_bindings(bindings))
}
