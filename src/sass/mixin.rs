use crate::ast::node::Node;
use crate::context::Context;
use crate::error::Result;
use crate::evaluator::{Mode, Target};
use crate::output::Stylesheet;
use crate::registry::{DiagnosticKind, Registry};
use crate::sass::parameters::{collate_args_parameters, evaluate_arguments, ArgumentValue, SassArgument, SassParameter};

use std::rc::Rc;

/// `@mixin name($params...) { children }`
#[derive(Clone, Debug, PartialEq)]
pub struct SassMixin {
    pub name: String,
    pub parameters: Vec<SassParameter>,
    pub children: Vec<Node>,
    pub offset: usize,
}

impl SassMixin {
    pub fn new(name: &str, parameters: Vec<SassParameter>, children: Vec<Node>) -> SassMixin {
        SassMixin {
            name: name.to_string(),
            parameters: parameters,
            children: children,
            offset: 0,
        }
    }

    /// Expands the body into `target` with the parameters bound to
    /// `arguments`. Nothing happens while `target` is itself a deferred body.
    pub fn include(
        &self,
        target: &mut Target,
        arguments: Vec<ArgumentValue>,
        registry: &mut Registry,
        mode: Mode,
    ) -> Result<()> {
        if mode == Mode::Deferred {
            return Ok(())
        }
        registry.enter(self.offset)?;
        let result = self.expand(target, arguments, registry);
        registry.leave();
        result
    }

    fn expand(&self, target: &mut Target, arguments: Vec<ArgumentValue>, registry: &mut Registry) -> Result<()> {
        let ctx = collate_args_parameters(&self.parameters, arguments, registry)?;
        debug!("including {} with {} bindings", self.name, ctx.len());
        for e in &self.children {
            let node = e.copy_with(&ctx);
            node.parse(target, registry, Mode::Immediate)?;
        }
        Ok(())
    }
}

/// `@include name(args...);`
#[derive(Clone, Debug, PartialEq)]
pub struct SassMixinCall {
    pub name: String,
    pub arguments: Vec<SassArgument>,
    pub offset: usize,
}

impl SassMixinCall {
    pub fn new(name: &str, arguments: Vec<SassArgument>) -> SassMixinCall {
        SassMixinCall {
            name: name.to_string(),
            arguments: arguments,
            offset: 0,
        }
    }

    /// Looks the mixin up and includes it. Returns whether it was found.
    pub fn parse(&self, target: &mut Target, registry: &mut Registry, mode: Mode) -> Result<bool> {
        if mode == Mode::Deferred {
            return Ok(false)
        }
        match registry.mixin(&self.name) {
            Some(mixin) => {
                let arguments = evaluate_arguments(&self.arguments, registry)?;
                mixin.include(target, arguments, registry, mode)?;
                Ok(true)
            },
            None => {
                registry.warn(
                    DiagnosticKind::MissingMixin,
                    format!("Required mixin not found: {}:{}.", self.name, self.arguments.len()),
                );
                Ok(false)
            },
        }
    }

    /// The expansion on its own, as text. A missing mixin renders as nothing.
    pub fn render(&self, registry: &mut Registry) -> Result<String> {
        let mut sheet = Stylesheet::new();
        let found = registry.with_scratch_rulesets(|registry| {
            self.parse(&mut Target::root(&mut sheet), registry, Mode::Immediate)
        })?;
        if !found {
            return Ok(String::new())
        }
        Ok(sheet.render(registry.options().style))
    }

    pub fn copy_with(&self, ctx: &Rc<Context>) -> SassMixinCall {
        SassMixinCall {
            name: self.name.clone(),
            arguments: self.arguments.iter().map(|a| a.copy_with(ctx)).collect(),
            offset: self.offset,
        }
    }
}
