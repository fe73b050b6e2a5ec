use crate::ast::expression::Expression;
use crate::context::Context;
use crate::error::Result;
use crate::evaluator::{Mode, Target};
use crate::output::Stylesheet;
use crate::registry::Registry;
use crate::sass::control_flow::{SassFor, SassIf};
use crate::sass::extend::SassExtend;
use crate::sass::function::SassFunction;
use crate::sass::mixin::{SassMixin, SassMixinCall};
use crate::sass::parameters::{SassArgument, SassParameter};
use crate::sass::rule::SassRule;
use crate::sass::value_part::ValuePart;
use crate::sass::variable::SassVariable;

use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Rule(SassRule),
    Property(String, Expression),
    Variable(SassVariable),
    Function(SassFunction),
    Return(Expression),
    Mixin(SassMixin),
    Include(SassMixinCall),
    Extend(SassExtend),
    If(SassIf),
    For(SassFor),
    Empty,
}

impl Node {
    pub fn rule(selectors: &str, children: Vec<Node>) -> Node {
        Node::Rule(SassRule::new(selectors, children))
    }

    pub fn property(name: &str, value: Expression) -> Node {
        Node::Property(name.to_string(), value)
    }

    pub fn variable(name: &str, value: Expression) -> Node {
        Node::Variable(SassVariable::new(name, value))
    }

    pub fn default_variable(name: &str, value: Expression) -> Node {
        Node::Variable(SassVariable::with_default(name, value))
    }

    pub fn function(name: &str, parameters: Vec<SassParameter>, body: Vec<Node>) -> Node {
        Node::Function(SassFunction::new(name, parameters, body))
    }

    pub fn ret(value: Expression) -> Node {
        Node::Return(value)
    }

    pub fn mixin(name: &str, parameters: Vec<SassParameter>, children: Vec<Node>) -> Node {
        Node::Mixin(SassMixin::new(name, parameters, children))
    }

    pub fn include(name: &str, arguments: Vec<SassArgument>) -> Node {
        Node::Include(SassMixinCall::new(name, arguments))
    }

    pub fn extend(selector: &str) -> Node {
        Node::Extend(SassExtend::new(selector))
    }

    pub fn if_else(condition: Expression, body: Vec<Node>, els: Vec<Node>) -> Node {
        Node::If(SassIf::new(condition, body, els))
    }

    pub fn for_range(variable: &str, first: Expression, second: Expression, body: Vec<Node>) -> Node {
        Node::For(SassFor::new(variable, first, second, body))
    }

    /// Emits this node's contribution into `target`.
    pub fn parse(&self, target: &mut Target, registry: &mut Registry, mode: Mode) -> Result<()> {
        match *self {
            Node::Rule(ref rule) => rule.parse(target, registry, mode),
            Node::Property(ref name, ref value) => {
                if mode == Mode::Deferred {
                    return Ok(())
                }
                let value = value.evaluate(registry)?;
                if !value.is_null() {
                    target.push_declaration(name, value.to_string());
                }
                Ok(())
            },
            Node::Variable(..) | Node::Function(..) | Node::Mixin(..) => self.register(registry, mode),
            Node::Include(ref call) => call.parse(target, registry, mode).map(|_| ()),
            Node::Extend(ref extend) => extend.parse(target, registry, mode),
            Node::If(ref node) => node.parse(target, registry, mode),
            Node::For(ref node) => node.parse(target, registry, mode),
            Node::Return(..) | Node::Empty => Ok(()),
        }
    }

    /// Makes a definition visible in the registry. Mixins and functions
    /// then walk their own bodies in deferred mode so that nested
    /// definitions are registered too. A variable only registers in
    /// immediate mode, once its free references are bound.
    pub fn register(&self, registry: &mut Registry, mode: Mode) -> Result<()> {
        match *self {
            Node::Variable(ref var) => {
                if mode == Mode::Immediate {
                    var.register(registry)?;
                }
                Ok(())
            },
            Node::Function(ref function) => {
                registry.set_function(Rc::new(function.clone()));
                register_deferred(&function.body, registry)
            },
            Node::Mixin(ref mixin) => {
                registry.set_mixin(Rc::new(mixin.clone()));
                register_deferred(&mixin.children, registry)
            },
            _ => Ok(()),
        }
    }

    /// Produces the same node with every free variable reference bound to
    /// `ctx`. Definitions, `@extend` and `@for` come back unchanged.
    pub fn copy_with(&self, ctx: &Rc<Context>) -> Node {
        match *self {
            Node::Rule(ref rule) => Node::Rule(rule.copy_with(ctx)),
            Node::Property(ref name, ref value) => Node::Property(name.clone(), value.copy_with(ctx)),
            Node::Variable(ref var) => Node::Variable(var.copy_with(ctx)),
            Node::Return(ref value) => Node::Return(value.copy_with(ctx)),
            Node::Include(ref call) => Node::Include(call.copy_with(ctx)),
            Node::If(ref node) => Node::If(node.copy_with(ctx)),
            Node::Function(..) | Node::Mixin(..) | Node::Extend(..) | Node::For(..) | Node::Empty => {
                self.clone()
            },
        }
    }

    /// The value this statement stands for when it ends a function body.
    /// The statement must already be registered: a definition stands for
    /// whatever its name is bound to afterwards.
    pub fn value(&self, registry: &mut Registry) -> Result<ValuePart> {
        match *self {
            Node::Return(ref value) => value.evaluate(registry),
            Node::Variable(ref var) => {
                Ok(registry.variable(&var.name).cloned().unwrap_or(ValuePart::Null))
            },
            Node::If(ref node) => node.value(registry),
            _ => Ok(ValuePart::Null),
        }
    }

    /// This node on its own, as text.
    pub fn render(&self, registry: &mut Registry) -> Result<String> {
        match *self {
            Node::Include(ref call) => call.render(registry),
            Node::Return(ref value) => value.render(registry),
            Node::Variable(..) | Node::Function(..) | Node::Mixin(..) | Node::Empty => Ok(String::new()),
            _ => {
                let mut sheet = Stylesheet::new();
                registry.with_scratch_rulesets(|registry| {
                    self.parse(&mut Target::root(&mut sheet), registry, Mode::Immediate)
                })?;
                Ok(sheet.render(registry.options().style))
            },
        }
    }
}

fn register_deferred(body: &[Node], registry: &mut Registry) -> Result<()> {
    let mut scratch = Stylesheet::new();
    let mut target = Target::root(&mut scratch);
    for node in body {
        node.parse(&mut target, registry, Mode::Deferred)?;
    }
    Ok(())
}
