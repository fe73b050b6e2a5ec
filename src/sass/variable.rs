use crate::ast::expression::Expression;
use crate::context::Context;
use crate::error::Result;
use crate::registry::Registry;

use std::rc::Rc;

/// `$name: value;` or `$name: value !default;`
#[derive(Clone, Debug, PartialEq)]
pub struct SassVariable {
    pub name: String,
    pub value: Expression,
    pub default: bool,
    pub offset: usize,
}

impl SassVariable {
    pub fn new(name: &str, value: Expression) -> SassVariable {
        SassVariable {
            name: name.to_string(),
            value: value,
            default: false,
            offset: 0,
        }
    }

    pub fn with_default(name: &str, value: Expression) -> SassVariable {
        SassVariable {
            default: true,
            ..SassVariable::new(name, value)
        }
    }

    /// Evaluates the value and stores it under the name. A `!default`
    /// definition leaves an existing non-null binding alone.
    pub fn register(&self, registry: &mut Registry) -> Result<()> {
        if self.default {
            if let Some(existing) = registry.variable(&self.name) {
                if !existing.is_null() {
                    debug!("keeping existing ${} over !default", self.name);
                    return Ok(())
                }
            }
        }
        let value = self.value.evaluate(registry).map_err(|e| e.at(self.offset))?;
        registry.set_var(&self.name, value);
        Ok(())
    }

    pub fn copy_with(&self, ctx: &Rc<Context>) -> SassVariable {
        SassVariable {
            value: self.value.copy_with(ctx),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sass::op::Op;
    use crate::sass::value_part::ValuePart;

    #[test]
    fn it_registers_its_value() {
        let mut registry = Registry::default();
        SassVariable::new("a", Expression::string("red")).register(&mut registry).unwrap();
        assert_eq!(Some(&ValuePart::from("red")), registry.variable("a"));
    }

    #[test]
    fn it_reads_the_previous_binding_of_its_own_name() {
        let mut registry = Registry::default();
        registry.set_var("i", ValuePart::from(1.0));
        let increment = SassVariable::new(
            "i", Expression::binary(Op::Plus, Expression::var("i"), Expression::number(1.0))
        );
        increment.register(&mut registry).unwrap();
        assert_eq!(Some(&ValuePart::from(2.0)), registry.variable("i"));
    }

    #[test]
    fn it_does_not_override_with_a_default() {
        let mut registry = Registry::default();
        registry.set_var("a", ValuePart::from("red"));
        SassVariable::with_default("a", Expression::string("blue")).register(&mut registry).unwrap();
        assert_eq!(Some(&ValuePart::from("red")), registry.variable("a"));
    }

    #[test]
    fn it_sets_a_default_when_unset() {
        let mut registry = Registry::default();
        SassVariable::with_default("a", Expression::string("blue")).register(&mut registry).unwrap();
        assert_eq!(Some(&ValuePart::from("blue")), registry.variable("a"));
    }

    #[test]
    fn it_binds_its_value_when_copied() {
        let mut registry = Registry::default();
        let ctx = Context::single("size", ValuePart::from("4px"));
        SassVariable::new("pad", Expression::var("size")).copy_with(&ctx).register(&mut registry).unwrap();
        assert_eq!(Some(&ValuePart::from("4px")), registry.variable("pad"));
    }
}
