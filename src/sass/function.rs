use crate::ast::expression::Expression;
use crate::ast::node::Node;
use crate::context::Context;
use crate::error::Result;
use crate::evaluator::Mode;
use crate::registry::Registry;
use crate::sass::parameters::{collate_args_parameters, ArgumentValue, SassParameter};
use crate::sass::value_part::ValuePart;

use std::rc::Rc;

/// `@function name($params...) { body }`
#[derive(Clone, Debug, PartialEq)]
pub struct SassFunction {
    pub name: String,
    pub parameters: Vec<SassParameter>,
    pub body: Vec<Node>,
    pub offset: usize,
}

impl SassFunction {
    pub fn new(name: &str, parameters: Vec<SassParameter>, body: Vec<Node>) -> SassFunction {
        SassFunction {
            name: name.to_string(),
            parameters: parameters,
            body: body,
            offset: 0,
        }
    }

    /// The dispatch table key, `name:arity`.
    pub fn key(&self) -> String {
        format!("{}:{}", self.name, self.parameters.len())
    }

    /// Invokes the function: the body is copied under the bound arguments and
    /// the value of its last statement is the result.
    pub fn wrapper(&self, args: Vec<ValuePart>, registry: &mut Registry) -> Result<ValuePart> {
        registry.enter(self.offset)?;
        let result = self.invoke(args, registry);
        registry.leave();
        result
    }

    fn invoke(&self, args: Vec<ValuePart>, registry: &mut Registry) -> Result<ValuePart> {
        let args = args.into_iter().map(ArgumentValue::positional).collect();
        let ctx = collate_args_parameters(&self.parameters, args, registry)?;

        let copies = self.body.iter().map(|e| e.copy_with(&ctx)).collect::<Vec<_>>();
        for node in &copies {
            node.register(registry, Mode::Immediate)?;
        }
        match copies.last() {
            Some(last) => last.value(registry),
            None => Ok(ValuePart::Null),
        }
    }
}

/// `name(args...)` inside an expression.
#[derive(Clone, Debug, PartialEq)]
pub struct SassFunctionCall {
    pub name: String,
    pub arguments: Vec<Expression>,
    pub offset: usize,
}

impl SassFunctionCall {
    pub fn new(name: &str, arguments: Vec<Expression>) -> SassFunctionCall {
        SassFunctionCall {
            name: name.to_string(),
            arguments: arguments,
            offset: 0,
        }
    }

    pub fn evaluate(&self, registry: &mut Registry) -> Result<ValuePart> {
        let mut args = Vec::with_capacity(self.arguments.len());
        for a in &self.arguments {
            args.push(a.evaluate(registry)?);
        }
        registry.call_function(&self.name, args, self.offset)
    }

    pub fn copy_with(&self, ctx: &Rc<Context>) -> SassFunctionCall {
        SassFunctionCall {
            name: self.name.clone(),
            arguments: self.arguments.iter().map(|a| a.copy_with(ctx)).collect(),
            offset: self.offset,
        }
    }
}
