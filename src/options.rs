use crate::sass::output_style::SassOutputStyle;

/// Document-level options, read by the engine through `Registry::get_opt`
/// and the accessors below.
#[derive(Debug, Clone, PartialEq)]
pub struct SassOptions {
    /// Surface diagnostics for unresolved mixins, `@extend` targets and variables.
    pub warn: bool,
    /// Largest number of bodies a single `@for` may produce.
    pub max_iterations: usize,
    /// Deepest nesting of mixin inclusions and function calls.
    pub max_depth: usize,
    pub style: SassOutputStyle,
}

impl Default for SassOptions {
    fn default() -> SassOptions {
        SassOptions {
            warn: false,
            max_iterations: 10_000,
            max_depth: 64,
            style: SassOutputStyle::default(),
        }
    }
}

impl SassOptions {
    pub fn with_warnings() -> SassOptions {
        SassOptions {
            warn: true,
            ..SassOptions::default()
        }
    }
}
