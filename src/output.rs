use crate::sass::output_style::SassOutputStyle;
use crate::sass::selector::SelectorGroup;

#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutputRule {
    pub selectors: Vec<SelectorGroup>,
    pub declarations: Vec<Declaration>,
}

/// The expanded document: flat rule-sets in emission order, plus any
/// declarations that were emitted outside of a rule-set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stylesheet {
    pub declarations: Vec<Declaration>,
    pub rules: Vec<OutputRule>,
}

impl Stylesheet {
    pub fn new() -> Stylesheet {
        Stylesheet {
            declarations: Vec::new(),
            rules: Vec::new(),
        }
    }

    pub fn push_rule(&mut self, selectors: Vec<SelectorGroup>) -> usize {
        self.rules.push(OutputRule {
            selectors: selectors,
            declarations: Vec::new(),
        });
        self.rules.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty() && self.rules.iter().all(|r| r.declarations.is_empty())
    }

    pub fn render(&self, style: SassOutputStyle) -> String {
        let mut output = String::new();

        if !self.declarations.is_empty() {
            output.push_str(&render_declarations(&self.declarations, style, ""));
            if self.rules.iter().any(|r| !r.declarations.is_empty()) {
                output.push_str(style.property_separator());
            }
        }

        let rules = self.rules.iter()
                        .filter(|r| !r.declarations.is_empty())
                        .map(|r| render_rule(r, style))
                        .collect::<Vec<_>>();
        output.push_str(&rules.join(style.rule_separator()));
        output
    }
}

fn render_declarations(declarations: &[Declaration], style: SassOutputStyle, indent: &str) -> String {
    declarations.iter().map(|d| {
        format!(
            "{}{}{}{}{}",
            indent, d.name, style.name_value_separator(), d.value, style.after_property()
        )
    }).collect::<Vec<_>>().join(style.property_separator())
}

fn render_rule(rule: &OutputRule, style: SassOutputStyle) -> String {
    let selector_string = rule.selectors.iter()
                              .map(|s| s.to_string())
                              .collect::<Vec<_>>()
                              .join(style.selector_separator());
    let properties_string = render_declarations(&rule.declarations, style, style.before_property());

    format!(
        "{}{}{{{}{}{}}}{}",
        selector_string,
        style.selector_brace_separator(),
        style.brace_property_separator(),
        properties_string,
        style.property_brace_separator(),
        style.after_rule(),
    )
}
