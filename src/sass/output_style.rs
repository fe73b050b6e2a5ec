use crate::error::{Result, SassError, ErrorKind};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SassOutputStyle {
    Expanded,
    Nested,
    Compact,
    Compressed,
}

impl Default for SassOutputStyle {
    fn default() -> SassOutputStyle {
        SassOutputStyle::Nested
    }
}

impl FromStr for SassOutputStyle {
    type Err = SassError;
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "nested"     => Ok(SassOutputStyle::Nested),
            "compressed" => Ok(SassOutputStyle::Compressed),
            "expanded"   => Ok(SassOutputStyle::Expanded),
            "compact"    => Ok(SassOutputStyle::Compact),
            style        => Err(SassError::new(
                ErrorKind::InvalidOutputStyle,
                0,
                format!("Unknown output style {:?}. Please specify one of nested, compressed, expanded, or compact.", style),
            )),
        }
    }
}

impl SassOutputStyle {
    pub fn rule_separator(&self) -> &'static str {
        match *self {
            SassOutputStyle::Compressed => "",
            _ => "\n",
        }
    }

    pub fn selector_separator(&self) -> &'static str {
        match *self {
            SassOutputStyle::Compressed => ",",
            _ => ", ",
        }
    }

    pub fn selector_brace_separator(&self) -> &'static str {
        match *self {
            SassOutputStyle::Compressed => "",
            _ => " ",
        }
    }

    pub fn brace_property_separator(&self) -> &'static str {
        match *self {
            SassOutputStyle::Nested | SassOutputStyle::Expanded => "\n",
            SassOutputStyle::Compact => " ",
            SassOutputStyle::Compressed => "",
        }
    }

    pub fn before_property(&self) -> &'static str {
        match *self {
            SassOutputStyle::Nested | SassOutputStyle::Expanded => "  ",
            _ => "",
        }
    }

    pub fn property_separator(&self) -> &'static str {
        match *self {
            SassOutputStyle::Nested | SassOutputStyle::Expanded => "\n",
            SassOutputStyle::Compact => " ",
            SassOutputStyle::Compressed => ";",
        }
    }

    pub fn name_value_separator(&self) -> &'static str {
        match *self {
            SassOutputStyle::Compressed => ":",
            _ => ": ",
        }
    }

    pub fn after_property(&self) -> &'static str {
        match *self {
            SassOutputStyle::Compressed => "",
            _ => ";",
        }
    }

    pub fn property_brace_separator(&self) -> &'static str {
        match *self {
            SassOutputStyle::Nested => " ",
            SassOutputStyle::Expanded => "\n",
            SassOutputStyle::Compact => " ",
            SassOutputStyle::Compressed => "",
        }
    }

    pub fn after_rule(&self) -> &'static str {
        match *self {
            SassOutputStyle::Compressed => "",
            _ => "\n",
        }
    }
}
