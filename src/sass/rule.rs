use crate::ast::node::Node;
use crate::context::Context;
use crate::error::Result;
use crate::evaluator::{Mode, Target};
use crate::registry::Registry;
use crate::sass::selector::SelectorGroup;

use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub struct SassRule {
    pub selectors: Vec<SelectorGroup>,
    pub children: Vec<Node>,
    pub offset: usize,
}

impl SassRule {
    pub fn new(selectors: &str, children: Vec<Node>) -> SassRule {
        SassRule {
            selectors: SelectorGroup::parse_list(selectors),
            children: children,
            offset: 0,
        }
    }

    fn selector_distribution(&self, parents: &[SelectorGroup]) -> Vec<SelectorGroup> {
        if parents.is_empty() {
            return self.selectors.clone()
        }
        parents.iter().flat_map(|p| {
            self.selectors.iter().map(move |s| s.nest(p))
        }).collect()
    }

    /// Emits a new rule-set after the target's, registers it for `@extend`,
    /// and parses the children into it. In a deferred body only nested
    /// definitions are visited.
    pub fn parse(&self, target: &mut Target, registry: &mut Registry, mode: Mode) -> Result<()> {
        if mode == Mode::Deferred {
            for child in &self.children {
                child.parse(target, registry, mode)?;
            }
            return Ok(())
        }

        let selectors = self.selector_distribution(&target.selectors());
        let index = target.sheet.push_rule(selectors.clone());
        registry.register_ruleset(&selectors, index);

        let mut inner = Target::rule(&mut *target.sheet, index);
        for child in &self.children {
            child.parse(&mut inner, registry, mode)?;
        }
        Ok(())
    }

    pub fn copy_with(&self, ctx: &Rc<Context>) -> SassRule {
        SassRule {
            selectors: self.selectors.clone(),
            children: self.children.iter().map(|c| c.copy_with(ctx)).collect(),
            offset: self.offset,
        }
    }
}
