use crate::error::Result;
use crate::evaluator::{Mode, Target};
use crate::registry::{DiagnosticKind, Registry};
use crate::sass::selector::SelectorGroup;

/// `@extend selector;`
#[derive(Clone, Debug, PartialEq)]
pub struct SassExtend {
    pub selector: SelectorGroup,
    pub offset: usize,
}

impl SassExtend {
    pub fn new(selector: &str) -> SassExtend {
        SassExtend {
            selector: SelectorGroup::new(selector),
            offset: 0,
        }
    }

    /// Adds the target's selectors to every rule-set registered under the
    /// extended selector, each one increased by that rule-set's first group.
    pub fn parse(&self, target: &mut Target, registry: &mut Registry, mode: Mode) -> Result<()> {
        if mode == Mode::Deferred {
            return Ok(())
        }
        let name = self.selector.to_string();
        let rulesets = registry.rulesets(&name).to_vec();
        if rulesets.is_empty() {
            registry.warn(
                DiagnosticKind::MissingExtend,
                format!("Ruleset for extend not found: {}", name),
            );
            return Ok(())
        }

        let extenders = target.selectors();
        for index in rulesets {
            let rule = match target.sheet.rules.get_mut(index) {
                Some(rule) => rule,
                None => continue,
            };
            let first = match rule.selectors.first() {
                Some(first) => first.clone(),
                None => continue,
            };
            for sg in &extenders {
                let increased = sg.increase(&first);
                if !rule.selectors.contains(&increased) {
                    debug!("extending {} with {}", name, increased);
                    rule.selectors.push(increased);
                }
            }
        }
        Ok(())
    }
}
