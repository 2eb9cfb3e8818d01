mod background;
mod border_style;
mod colour;
mod computed_style;
mod length;
mod position;
mod style_rule;
mod stylesheet_class;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use self::{
    background::Background, border_style::BorderStyle, colour::Colour,
    computed_style::ComputedStyle, length::Length, position::Position, style_rule::StyleRule,
    stylesheet_class::{Selector, StylesheetClass},
};

/// An exported style sheet: an optional `body` block followed by one class
/// block per element, in order.
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Stylesheet {
    pub body: Option<StylesheetClass>,
    pub classes: Vec<StylesheetClass>,
}

impl Stylesheet {
    pub fn new(body: Option<StylesheetClass>, classes: Vec<StylesheetClass>) -> Self {
        Stylesheet { body, classes }
    }

    pub fn get(&self, class: &str) -> Option<&StylesheetClass> {
        self.classes.iter().find(|c| c.name() == Some(class))
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_none() && self.classes.is_empty()
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(body) = &self.body {
            writeln!(f, "{}", body)?;
        }

        for (index, class) in self.classes.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", class)?;
        }

        Ok(())
    }
}
