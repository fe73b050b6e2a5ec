use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use std::fmt;

/// One comma-free selector, kept as its whitespace-separated parts so that
/// nesting and `@extend` can splice compound selectors in and out.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorGroup {
    pub parts: Vec<String>,
}

fn squeeze(data: &str) -> String {
    static SPACES_RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"\s{2,}").expect("whitespace regex should compile")
    });
    SPACES_RE.replace_all(data.trim(), " ").into_owned()
}

fn compress_attr_selectors(data: &str) -> String {
    static ATTR_RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"\[\s*(?P<attrname>[^\s*~^|=]+)\s*(?P<operator>[*~^$|]?=)\s*(?P<attrval>[^\s\]]+)\s*\]")
            .expect("attribute selector regex should compile")
    });
    ATTR_RE.replace_all(data, |caps: &Captures| {
        format!("[{}{}{}]", &caps["attrname"], &caps["operator"], &caps["attrval"])
    }).into_owned()
}

impl SelectorGroup {
    pub fn new(selector: &str) -> SelectorGroup {
        let normalized = compress_attr_selectors(&squeeze(selector));
        SelectorGroup {
            parts: normalized.split(' ').filter(|p| !p.is_empty()).map(String::from).collect(),
        }
    }

    /// Splits `a, b > c` into one group per comma.
    pub fn parse_list(selectors: &str) -> Vec<SelectorGroup> {
        selectors.split(',')
                 .map(SelectorGroup::new)
                 .filter(|sg| !sg.parts.is_empty())
                 .collect()
    }

    /// Places `self` where the last compound selector of `other` was, so that
    /// `.b` increased by `div .a` reads `div .b`.
    pub fn increase(&self, other: &SelectorGroup) -> SelectorGroup {
        let keep = other.parts.len().saturating_sub(1);
        let mut parts = other.parts[..keep].to_vec();
        parts.extend(self.parts.iter().cloned());
        SelectorGroup { parts: parts }
    }

    /// Resolves `self` as a child of `parent`: `&` is replaced by the parent,
    /// anything else becomes a descendant of it.
    pub fn nest(&self, parent: &SelectorGroup) -> SelectorGroup {
        let text = self.to_string();
        if text.contains('&') {
            SelectorGroup::new(&text.replace('&', &parent.to_string()))
        } else {
            let mut parts = parent.parts.clone();
            parts.extend(self.parts.iter().cloned());
            SelectorGroup { parts: parts }
        }
    }
}

impl fmt::Display for SelectorGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.parts.join(" "))
    }
}
