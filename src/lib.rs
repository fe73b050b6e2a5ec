//! The expansion engine of a Sass compiler.
//!
//! Takes an already-parsed tree of [`Node`]s and resolves variables, mixins,
//! functions, `@if`, `@for` and `@extend` into a flat [`Stylesheet`].

#[macro_use]
extern crate log;

pub mod context;
pub mod error;
pub mod evaluator;
pub mod options;
pub mod output;
pub mod registry;

pub mod ast {
    pub mod expression;
    pub mod node;
}

pub mod sass {
    pub mod builtins;
    pub mod control_flow;
    pub mod extend;
    pub mod function;
    pub mod mixin;
    pub mod number_value;
    pub mod op;
    pub mod output_style;
    pub mod parameters;
    pub mod rule;
    pub mod selector;
    pub mod value_part;
    pub mod variable;
}

pub use crate::ast::expression::Expression;
pub use crate::ast::node::Node;
pub use crate::error::{ErrorKind, Result, SassError};
pub use crate::evaluator::{Evaluator, Mode, Target};
pub use crate::options::SassOptions;
pub use crate::output::Stylesheet;
pub use crate::registry::{Diagnostic, DiagnosticKind, Registry};
pub use crate::sass::output_style::SassOutputStyle;

/// Expands a document into a stylesheet.
pub fn evaluate(nodes: &[Node], options: SassOptions) -> Result<Stylesheet> {
    Evaluator::new(options).evaluate(nodes)
}

/// Expands a document and renders it in the named output style.
pub fn compile(nodes: &[Node], style: &str) -> Result<String> {
    let style: SassOutputStyle = style.parse()?;
    let options = SassOptions { style: style, ..SassOptions::default() };
    let sheet = evaluate(nodes, options)?;
    Ok(sheet.render(style))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sass::op::Op;
    use crate::sass::parameters::{SassArgument, SassParameter};
    use crate::sass::value_part::ValuePart;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn foo_exact(_args: &[ValuePart]) -> Result<ValuePart> {
        Ok(ValuePart::from("exact"))
    }

    fn foo_any(_args: &[ValuePart]) -> Result<ValuePart> {
        Ok(ValuePart::from("variadic"))
    }

    #[test]
    fn it_compiles_a_document_in_the_expanded_style() {
        init();
        let nodes = vec![
            Node::variable("base", Expression::number(4.0)),
            Node::function("scale", vec![SassParameter::new("n")], vec![
                Node::ret(Expression::binary(Op::Star, Expression::var("n"), Expression::var("base"))),
            ]),
            Node::mixin("box", vec![SassParameter::with_default("size", Expression::number(1.0))], vec![
                Node::property("padding", Expression::call("scale", vec![Expression::var("size")])),
            ]),
            Node::rule(".card", vec![Node::include("box", vec![SassArgument::positional(Expression::number(2.0))])]),
        ];
        assert_eq!(Ok(String::from(".card {\n  padding: 8;\n}\n")), compile(&nodes, "expanded"));
    }

    #[test]
    fn it_rejects_unknown_styles() {
        assert_eq!(ErrorKind::InvalidOutputStyle, compile(&[], "pretty").unwrap_err().kind);
    }

    #[test]
    fn it_dispatches_exact_arity_before_variadic() {
        init();
        let mut evaluator = Evaluator::new(SassOptions::default());
        evaluator.register_builtin("foo:n", foo_any);
        evaluator.register_builtin("foo:2", foo_exact);
        let nodes = vec![
            Node::rule(".a", vec![
                Node::property("two", Expression::call("foo", vec![Expression::number(1.0), Expression::number(2.0)])),
                Node::property("three", Expression::call("foo", vec![
                    Expression::number(1.0), Expression::number(2.0), Expression::number(3.0),
                ])),
            ]),
        ];
        let sheet = evaluator.evaluate(&nodes).unwrap();
        assert_eq!(
            ".a { two: exact; three: variadic; }\n",
            sheet.render(SassOutputStyle::Compact)
        );
    }

    #[test]
    fn it_passes_unknown_functions_through_as_css() {
        let nodes = vec![
            Node::rule(".a", vec![
                Node::property("x", Expression::call("bar", vec![Expression::number(1.0), Expression::number(2.0)])),
            ]),
        ];
        assert_eq!(Ok(String::from(".a { x: bar(1, 2); }\n")), compile(&nodes, "compact"));
    }

    #[test]
    fn it_keeps_going_past_a_missing_mixin() {
        init();
        let nodes = vec![
            Node::rule(".a", vec![
                Node::include("missing", vec![SassArgument::positional(Expression::number(1.0))]),
                Node::property("color", Expression::string("red")),
            ]),
        ];
        let mut evaluator = Evaluator::new(SassOptions::with_warnings());
        let sheet = evaluator.evaluate(&nodes).unwrap();
        assert_eq!(".a { color: red; }\n", sheet.render(SassOutputStyle::Compact));
        assert_eq!(
            vec![Diagnostic {
                kind: DiagnosticKind::MissingMixin,
                message: String::from("Required mixin not found: missing:1."),
            }],
            evaluator.registry().diagnostics().to_vec()
        );
    }

    #[test]
    fn it_expands_mixins_that_include_other_mixins() {
        let nodes = vec![
            Node::mixin("color", vec![SassParameter::new("c")], vec![
                Node::property("color", Expression::var("c")),
            ]),
            Node::mixin("theme", vec![SassParameter::new("main")], vec![
                Node::include("color", vec![SassArgument::positional(Expression::var("main"))]),
                Node::rule("a", vec![Node::property("border-color", Expression::var("main"))]),
            ]),
            Node::rule(".dark", vec![
                Node::include("theme", vec![SassArgument::named("main", Expression::string("black"))]),
            ]),
        ];
        assert_eq!(
            Ok(String::from(".dark { color: black; }\n\n.dark a { border-color: black; }\n")),
            compile(&nodes, "compact")
        );
    }

    #[test]
    fn it_evaluates_conditionals_on_loop_variables() {
        let nodes = vec![
            Node::rule(".grid", vec![
                Node::for_range("i", Expression::number(1.0), Expression::number(3.0), vec![
                    Node::if_else(
                        Expression::binary(Op::Equal, Expression::var("i"), Expression::number(2.0)),
                        vec![Node::property("middle", Expression::var("i"))],
                        vec![Node::property("edge", Expression::var("i"))],
                    ),
                ]),
            ]),
        ];
        assert_eq!(
            Ok(String::from(".grid { edge: 1; middle: 2; edge: 3; }\n")),
            compile(&nodes, "compact")
        );
    }
}
