use crate::context::Context;
use crate::error::Result;
use crate::registry::{DiagnosticKind, Registry};
use crate::sass::function::SassFunctionCall;
use crate::sass::op::Op;
use crate::sass::value_part::{ListSeparator, ValuePart};

use std::rc::Rc;

/// A `$name` reference. The attached context, when there is one, shadows the
/// registry.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableRef {
    pub name: String,
    pub ctx: Option<Rc<Context>>,
    pub offset: usize,
}

impl VariableRef {
    pub fn new<S: Into<String>>(name: S) -> VariableRef {
        VariableRef { name: name.into(), ctx: None, offset: 0 }
    }

    pub fn resolve(&self, registry: &mut Registry) -> ValuePart {
        if let Some(value) = self.ctx.as_ref().and_then(|ctx| ctx.get_variable(&self.name)) {
            return value.clone()
        }
        if let Some(value) = registry.variable(&self.name) {
            return value.clone()
        }
        registry.warn(
            DiagnosticKind::UndefinedVariable,
            format!("Undefined variable: ${} at {}.", self.name, self.offset),
        );
        ValuePart::String(format!("${}", self.name))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Value(ValuePart),
    Variable(VariableRef),
    FunctionCall(SassFunctionCall),
    Binary(Op, Box<Expression>, Box<Expression>),
    List(Vec<Expression>, ListSeparator),
}

impl Expression {
    pub fn value(value: ValuePart) -> Expression {
        Expression::Value(value)
    }

    pub fn number(n: f64) -> Expression {
        Expression::Value(ValuePart::from(n))
    }

    pub fn string(s: &str) -> Expression {
        Expression::Value(ValuePart::from(s))
    }

    pub fn var(name: &str) -> Expression {
        Expression::Variable(VariableRef::new(name))
    }

    pub fn call(name: &str, arguments: Vec<Expression>) -> Expression {
        Expression::FunctionCall(SassFunctionCall::new(name, arguments))
    }

    pub fn binary(op: Op, first: Expression, second: Expression) -> Expression {
        Expression::Binary(op, Box::new(first), Box::new(second))
    }

    pub fn space_list(items: Vec<Expression>) -> Expression {
        Expression::List(items, ListSeparator::Space)
    }

    pub fn evaluate(&self, registry: &mut Registry) -> Result<ValuePart> {
        match *self {
            Expression::Value(ref v) => Ok(v.clone()),
            Expression::Variable(ref var) => Ok(var.resolve(registry)),
            Expression::FunctionCall(ref call) => call.evaluate(registry),
            Expression::Binary(op, ref first, ref second) => {
                let f = first.evaluate(registry)?;
                let s = second.evaluate(registry)?;
                op.apply(f, s)
            },
            Expression::List(ref items, separator) => {
                let mut values = Vec::with_capacity(items.len());
                for item in items {
                    values.push(item.evaluate(registry)?);
                }
                Ok(ValuePart::List(values, separator))
            },
        }
    }

    /// Binds every variable reference in this expression to `ctx`, replacing
    /// whatever context it carried before. Literal values come back as they were.
    pub fn copy_with(&self, ctx: &Rc<Context>) -> Expression {
        match *self {
            Expression::Value(..) => self.clone(),
            Expression::Variable(ref var) => Expression::Variable(VariableRef {
                ctx: Some(ctx.clone()),
                ..var.clone()
            }),
            Expression::FunctionCall(ref call) => Expression::FunctionCall(call.copy_with(ctx)),
            Expression::Binary(op, ref first, ref second) => Expression::Binary(
                op,
                Box::new(first.copy_with(ctx)),
                Box::new(second.copy_with(ctx)),
            ),
            Expression::List(ref items, separator) => Expression::List(
                items.iter().map(|i| i.copy_with(ctx)).collect(),
                separator,
            ),
        }
    }

    pub fn render(&self, registry: &mut Registry) -> Result<String> {
        Ok(self.evaluate(registry)?.to_string())
    }
}
