use crate::ast::expression::Expression;
use crate::ast::node::Node;
use crate::context::Context;
use crate::error::{Result, SassError, ErrorKind};
use crate::evaluator::{Mode, Target};
use crate::registry::Registry;
use crate::sass::value_part::ValuePart;

use std::rc::Rc;

/// `@if condition { body } @else { els }`. A missing else branch is empty.
#[derive(Clone, Debug, PartialEq)]
pub struct SassIf {
    pub condition: Expression,
    pub body: Vec<Node>,
    pub els: Vec<Node>,
    pub offset: usize,
}

impl SassIf {
    pub fn new(condition: Expression, body: Vec<Node>, els: Vec<Node>) -> SassIf {
        SassIf {
            condition: condition,
            body: body,
            els: els,
            offset: 0,
        }
    }

    pub fn get_node(&self, registry: &mut Registry) -> Result<&[Node]> {
        let condition = self.condition.evaluate(registry).map_err(|e| e.at(self.offset))?;
        if condition.is_truthy() {
            Ok(self.body.as_slice())
        } else {
            Ok(self.els.as_slice())
        }
    }

    pub fn parse(&self, target: &mut Target, registry: &mut Registry, mode: Mode) -> Result<()> {
        if mode == Mode::Deferred {
            return Ok(())
        }
        for n in self.get_node(registry)? {
            n.parse(target, registry, mode)?;
        }
        Ok(())
    }

    /// The value of the selected branch's last statement, used when the
    /// conditional ends a function body.
    pub fn value(&self, registry: &mut Registry) -> Result<ValuePart> {
        let branch = self.get_node(registry)?;
        for n in branch {
            n.register(registry, Mode::Immediate)?;
        }
        match branch.last() {
            Some(last) => last.value(registry),
            None => Ok(ValuePart::Null),
        }
    }

    pub fn copy_with(&self, ctx: &Rc<Context>) -> SassIf {
        SassIf {
            condition: self.condition.copy_with(ctx),
            body: self.body.iter().map(|n| n.copy_with(ctx)).collect(),
            els: self.els.iter().map(|n| n.copy_with(ctx)).collect(),
            offset: self.offset,
        }
    }
}

/// `@for $variable from first through second { body }`
#[derive(Clone, Debug, PartialEq)]
pub struct SassFor {
    pub variable: String,
    pub first: Expression,
    pub second: Expression,
    pub body: Vec<Node>,
    pub offset: usize,
}

impl SassFor {
    pub fn new(variable: &str, first: Expression, second: Expression, body: Vec<Node>) -> SassFor {
        SassFor {
            variable: variable.to_string(),
            first: first,
            second: second,
            body: body,
            offset: 0,
        }
    }

    fn bound(&self, expr: &Expression, registry: &mut Registry) -> Result<i64> {
        let value = expr.evaluate(registry)?;
        let scalar = value.to_number().map_err(|e| e.at(self.offset))?;
        if !scalar.is_finite() {
            return Err(SassError::new(
                ErrorKind::TypeCoercion,
                self.offset,
                format!("@for bound `{}` is not a finite number", value),
            ))
        }
        Ok(scalar.trunc() as i64)
    }

    /// Both bounds truncated toward zero. An inverted range is empty; a span
    /// over `max_iterations` is an error.
    pub fn range(&self, registry: &mut Registry) -> Result<(i64, i64)> {
        let first = self.bound(&self.first, registry)?;
        let second = self.bound(&self.second, registry)?;
        let max = registry.options().max_iterations;
        if second >= first && (second as i128 - first as i128) >= max as i128 {
            return Err(SassError::new(
                ErrorKind::UnboundedIteration,
                self.offset,
                format!(
                    "@for ${} from {} through {} exceeds the limit of {} iterations",
                    self.variable, first, second, max
                ),
            ))
        }
        Ok((first, second))
    }

    /// One copy of the body per step, produced on demand, each bound to
    /// the loop variable.
    pub fn bodies<'a>(&'a self, registry: &mut Registry) -> Result<impl Iterator<Item = Vec<Node>> + 'a> {
        let (first, second) = self.range(registry)?;
        debug!("@for ${} from {} through {}", self.variable, first, second);
        Ok((first..=second).map(move |i| {
            let ctx = Context::single(self.variable.clone(), ValuePart::from(i as f64));
            self.body.iter().map(|n| n.copy_with(&ctx)).collect()
        }))
    }

    pub fn parse(&self, target: &mut Target, registry: &mut Registry, mode: Mode) -> Result<()> {
        if mode == Mode::Deferred {
            return Ok(())
        }
        for body in self.bodies(registry)? {
            for n in &body {
                n.parse(target, registry, mode)?;
            }
        }
        Ok(())
    }
}
