use crate::sass::value_part::ValuePart;

use std::collections::HashMap;
use std::rc::Rc;

/// Bindings for one expansion pass. A context is assembled once per
/// invocation and then shared read-only by every variable reference it is
/// copied into.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    variables: HashMap<String, ValuePart>,
}

impl Context {
    pub fn from_bindings<I>(bindings: I) -> Rc<Context>
        where I: IntoIterator<Item = (String, ValuePart)>
    {
        Rc::new(Context {
            variables: bindings.into_iter().collect(),
        })
    }

    pub fn single<S: Into<String>>(name: S, value: ValuePart) -> Rc<Context> {
        Context::from_bindings(vec![(name.into(), value)])
    }

    pub fn get_variable(&self, name: &str) -> Option<&ValuePart> {
        self.variables.get(name)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
