use std::fmt;

use serde::{Deserialize, Serialize};

use crate::stylesheet::style_rule::StyleRule;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Selector {
    Body,
    Class(String),
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Body => f.write_str("body"),
            Selector::Class(name) => write!(f, ".{}", name),
        }
    }
}

/// A selector and its declarations, kept in emission order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StylesheetClass {
    pub selector: Selector,
    pub rules: Vec<StyleRule>,
}

impl StylesheetClass {
    pub fn new(name: impl ToString, rules: Vec<StyleRule>) -> Self {
        StylesheetClass {
            selector: Selector::Class(name.to_string()),
            rules,
        }
    }

    pub fn body(rules: Vec<StyleRule>) -> Self {
        StylesheetClass {
            selector: Selector::Body,
            rules,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match &self.selector {
            Selector::Class(name) => Some(name),
            Selector::Body => None,
        }
    }
}

impl fmt::Display for StylesheetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {{", self.selector)?;
        for rule in &self.rules {
            writeln!(f, "  {}", rule)?;
        }
        writeln!(f, "}}")
    }
}
