use crate::error::{Result, SassError, ErrorKind};
use crate::options::SassOptions;
use crate::sass::builtins;
use crate::sass::function::SassFunction;
use crate::sass::mixin::SassMixin;
use crate::sass::selector::SelectorGroup;
use crate::sass::value_part::ValuePart;

use std::collections::HashMap;
use std::fmt;
use std::mem;
use std::rc::Rc;

pub type BuiltinFn = fn(&[ValuePart]) -> Result<ValuePart>;

/// An entry of the function dispatch table.
#[derive(Clone)]
pub enum Callable {
    Builtin(BuiltinFn),
    User(Rc<SassFunction>),
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Callable::Builtin(..) => write!(f, "Builtin"),
            Callable::User(ref func) => write!(f, "User({})", func.key()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DiagnosticKind {
    MissingMixin,
    MissingExtend,
    UndefinedVariable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
}

/// Name resolution for one document. Every table is last-write-wins.
///
/// The registry is built fresh for each document and handed by reference to
/// every node that registers or looks something up.
#[derive(Debug)]
pub struct Registry {
    options:     SassOptions,
    variables:   HashMap<String, ValuePart>,
    mixins:      HashMap<String, Rc<SassMixin>>,
    functions:   HashMap<String, Rc<SassFunction>>,
    rulesets:    HashMap<String, Vec<usize>>,
    dispatch:    HashMap<String, Callable>,
    diagnostics: Vec<Diagnostic>,
    depth:       usize,
}

impl Registry {
    pub fn new(options: SassOptions) -> Registry {
        let mut registry = Registry {
            options:     options,
            variables:   HashMap::new(),
            mixins:      HashMap::new(),
            functions:   HashMap::new(),
            rulesets:    HashMap::new(),
            dispatch:    HashMap::new(),
            diagnostics: Vec::new(),
            depth:       0,
        };
        builtins::register_builtins(&mut registry);
        registry
    }

    pub fn options(&self) -> &SassOptions {
        &self.options
    }

    /// Boolean document options by name.
    pub fn get_opt(&self, name: &str) -> Option<bool> {
        match name {
            "warn" => Some(self.options.warn),
            _ => None,
        }
    }

    pub fn set_var(&mut self, name: &str, value: ValuePart) {
        debug!("registering variable ${} = {:?}", name, value);
        self.variables.insert(name.to_string(), value);
    }

    pub fn variable(&self, name: &str) -> Option<&ValuePart> {
        self.variables.get(name)
    }

    pub fn set_mixin(&mut self, mixin: Rc<SassMixin>) {
        debug!("registering mixin {}", mixin.name);
        self.mixins.insert(mixin.name.clone(), mixin);
    }

    pub fn mixin(&self, name: &str) -> Option<Rc<SassMixin>> {
        self.mixins.get(name).cloned()
    }

    /// Caches the definition by name and installs it in the dispatch table
    /// under `name:arity`.
    pub fn set_function(&mut self, function: Rc<SassFunction>) {
        debug!("registering function {}", function.key());
        self.dispatch.insert(function.key(), Callable::User(function.clone()));
        self.functions.insert(function.name.clone(), function);
    }

    pub fn function(&self, name: &str) -> Option<Rc<SassFunction>> {
        self.functions.get(name).cloned()
    }

    /// Installs a native function; `key` is `name:arity` or `name:n`.
    pub fn register_builtin(&mut self, key: &str, function: BuiltinFn) {
        self.dispatch.insert(key.to_string(), Callable::Builtin(function));
    }

    /// Looks up `name:arity`, then `name:n`.
    pub fn resolve_function(&self, name: &str, arity: usize) -> Option<Callable> {
        self.dispatch.get(&format!("{}:{}", name, arity))
            .or_else(|| self.dispatch.get(&format!("{}:n", name)))
            .cloned()
    }

    /// Calls a function by name. Unknown functions are passed through as
    /// plain CSS function text.
    pub fn call_function(&mut self, name: &str, args: Vec<ValuePart>, offset: usize) -> Result<ValuePart> {
        match self.resolve_function(name, args.len()) {
            Some(Callable::Builtin(function)) => {
                debug!("dispatching {}:{} to a builtin", name, args.len());
                function(&args).map_err(|e| e.at(offset))
            },
            Some(Callable::User(function)) => {
                debug!("dispatching {}:{} to {}", name, args.len(), function.key());
                function.wrapper(args, self)
            },
            None => Ok(builtins::unknown(name, &args)),
        }
    }

    pub fn register_ruleset(&mut self, selectors: &[SelectorGroup], index: usize) {
        for sg in selectors {
            self.rulesets.entry(sg.to_string()).or_insert_with(Vec::new).push(index);
        }
    }

    pub fn rulesets(&self, name: &str) -> &[usize] {
        self.rulesets.get(name).map(|indices| indices.as_slice()).unwrap_or(&[])
    }

    /// Runs `f` against an empty rule-set table and restores the previous
    /// one afterwards. Rule-sets emitted into a throwaway stylesheet must not
    /// leak their indices into the document's table.
    pub fn with_scratch_rulesets<T, F>(&mut self, f: F) -> T
        where F: FnOnce(&mut Registry) -> T
    {
        let saved = mem::replace(&mut self.rulesets, HashMap::new());
        let result = f(self);
        self.rulesets = saved;
        result
    }

    /// Records a diagnostic when the `warn` option is on.
    pub fn warn(&mut self, kind: DiagnosticKind, message: String) {
        if self.options.warn {
            warn!("{}", message);
            self.diagnostics.push(Diagnostic { kind: kind, message: message });
        }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn enter(&mut self, offset: usize) -> Result<()> {
        if self.depth >= self.options.max_depth {
            return Err(SassError::new(
                ErrorKind::RecursionLimit,
                offset,
                format!("Mixin and function calls nested deeper than {}", self.options.max_depth),
            ))
        }
        self.depth += 1;
        Ok(())
    }

    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

impl Default for Registry {
    fn default() -> Registry {
        Registry::new(SassOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_arg(args: &[ValuePart]) -> Result<ValuePart> {
        Ok(args[0].clone())
    }

    fn variadic(args: &[ValuePart]) -> Result<ValuePart> {
        Ok(ValuePart::from(args.len() as f64))
    }

    #[test]
    fn it_overwrites_variables() {
        let mut registry = Registry::default();
        registry.set_var("a", ValuePart::from(1.0));
        registry.set_var("a", ValuePart::from(2.0));
        assert_eq!(Some(&ValuePart::from(2.0)), registry.variable("a"));
    }

    #[test]
    fn it_caches_the_latest_function_by_name_and_dispatches_both_arities() {
        use crate::sass::parameters::SassParameter;

        let mut registry = Registry::default();
        registry.set_function(Rc::new(SassFunction::new("f", vec![SassParameter::new("a")], vec![])));
        registry.set_function(Rc::new(SassFunction::new(
            "f", vec![SassParameter::new("a"), SassParameter::new("b")], vec![],
        )));
        assert_eq!(Some(String::from("f:2")), registry.function("f").map(|f| f.key()));
        assert!(registry.function("g").is_none());
        assert!(registry.resolve_function("f", 1).is_some());
        assert!(registry.resolve_function("f", 2).is_some());
    }

    #[test]
    fn it_answers_the_warn_option() {
        assert_eq!(Some(false), Registry::default().get_opt("warn"));
        assert_eq!(Some(true), Registry::new(SassOptions::with_warnings()).get_opt("warn"));
        assert_eq!(None, Registry::default().get_opt("nope"));
    }

    #[test]
    fn it_prefers_exact_arity_over_variadic() {
        let mut registry = Registry::default();
        registry.register_builtin("foo:n", variadic);
        registry.register_builtin("foo:2", first_arg);
        let result = registry.call_function(
            "foo", vec![ValuePart::from("x"), ValuePart::from("y")], 0
        );
        assert_eq!(Ok(ValuePart::from("x")), result);
    }

    #[test]
    fn it_falls_back_to_variadic() {
        let mut registry = Registry::default();
        registry.register_builtin("foo:n", variadic);
        registry.register_builtin("foo:2", first_arg);
        let result = registry.call_function("foo", vec![ValuePart::from("x")], 0);
        assert_eq!(Ok(ValuePart::from(1.0)), result);
    }

    #[test]
    fn it_passes_unknown_functions_through() {
        let mut registry = Registry::default();
        let result = registry.call_function(
            "bar", vec![ValuePart::from(1.0), ValuePart::from(2.0)], 0
        );
        assert_eq!(Ok(ValuePart::from("bar(1, 2)")), result);
    }

    #[test]
    fn it_only_records_diagnostics_when_warning() {
        let mut quiet = Registry::default();
        quiet.warn(DiagnosticKind::MissingMixin, String::from("nope"));
        assert!(quiet.diagnostics().is_empty());

        let mut loud = Registry::new(SassOptions::with_warnings());
        loud.warn(DiagnosticKind::MissingMixin, String::from("nope"));
        assert_eq!(1, loud.diagnostics().len());
    }

    #[test]
    fn it_restores_the_ruleset_table_after_a_scratch_pass() {
        let mut registry = Registry::default();
        registry.register_ruleset(&SelectorGroup::parse_list(".a"), 0);
        let inside = registry.with_scratch_rulesets(|registry| {
            registry.register_ruleset(&SelectorGroup::parse_list(".b"), 3);
            (registry.rulesets(".a").to_vec(), registry.rulesets(".b").to_vec())
        });
        assert_eq!((vec![], vec![3]), inside);
        assert_eq!(&[0], registry.rulesets(".a"));
        assert!(registry.rulesets(".b").is_empty());
    }

    #[test]
    fn it_limits_nesting_depth() {
        let mut registry = Registry::new(SassOptions { max_depth: 2, ..SassOptions::default() });
        assert!(registry.enter(0).is_ok());
        assert!(registry.enter(0).is_ok());
        assert_eq!(ErrorKind::RecursionLimit, registry.enter(7).unwrap_err().kind);
        registry.leave();
        assert!(registry.enter(0).is_ok());
    }
}
