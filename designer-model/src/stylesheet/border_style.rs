use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Colour, Length};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum BorderStyle {
    None,
    Solid { width: Length, colour: Colour },
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BorderStyle::None => f.write_str("none"),
            BorderStyle::Solid { width, colour } => write!(f, "{} solid {}", width, colour),
        }
    }
}
