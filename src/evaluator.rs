use crate::ast::node::Node;
use crate::error::Result;
use crate::options::SassOptions;
use crate::output::{Declaration, Stylesheet};
use crate::registry::{BuiltinFn, Registry};
use crate::sass::selector::SelectorGroup;

/// Whether nodes are being emitted into live output or walked inside a
/// mixin or function body that has not been instantiated yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    Immediate,
    Deferred,
}

/// Where parsed nodes put their output: the stylesheet, and the rule-set
/// currently being filled, if any.
#[derive(Debug)]
pub struct Target<'s> {
    pub sheet: &'s mut Stylesheet,
    pub rule: Option<usize>,
}

impl<'s> Target<'s> {
    pub fn root(sheet: &'s mut Stylesheet) -> Target<'s> {
        Target { sheet: sheet, rule: None }
    }

    pub fn rule(sheet: &'s mut Stylesheet, index: usize) -> Target<'s> {
        Target { sheet: sheet, rule: Some(index) }
    }

    pub fn selectors(&self) -> Vec<SelectorGroup> {
        match self.rule {
            Some(index) => self.sheet.rules[index].selectors.clone(),
            None => Vec::new(),
        }
    }

    pub fn push_declaration(&mut self, name: &str, value: String) {
        let declaration = Declaration { name: name.to_string(), value: value };
        match self.rule {
            Some(index) => self.sheet.rules[index].declarations.push(declaration),
            None => self.sheet.declarations.push(declaration),
        }
    }
}

/// Drives one evaluation pass per document.
pub struct Evaluator {
    options: SassOptions,
    host_functions: Vec<(String, BuiltinFn)>,
    registry: Registry,
}

impl Evaluator {
    pub fn new(options: SassOptions) -> Evaluator {
        Evaluator {
            registry: Registry::new(options.clone()),
            host_functions: Vec::new(),
            options: options,
        }
    }

    /// Adds a native function to every document this evaluator expands.
    /// `key` is `name:arity`, or `name:n` for any number of arguments.
    pub fn register_builtin(&mut self, key: &str, function: BuiltinFn) {
        self.host_functions.push((key.to_string(), function));
    }

    fn fresh_registry(&self) -> Registry {
        let mut registry = Registry::new(self.options.clone());
        for &(ref key, function) in &self.host_functions {
            registry.register_builtin(key, function);
        }
        registry
    }

    /// Expands a document. The registry starts empty for every call, so
    /// evaluating the same tree twice gives the same stylesheet.
    pub fn evaluate(&mut self, nodes: &[Node]) -> Result<Stylesheet> {
        self.registry = self.fresh_registry();
        let mut sheet = Stylesheet::new();
        {
            let mut target = Target::root(&mut sheet);
            for node in nodes {
                node.parse(&mut target, &mut self.registry, Mode::Immediate)?;
            }
        }
        debug!("evaluated {} top-level nodes into {} rule-sets", nodes.len(), sheet.rules.len());
        Ok(sheet)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}
