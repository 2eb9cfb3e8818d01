use std::fmt;

use serde::{Deserialize, Serialize};

use super::Colour;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Background {
    Solid(Colour),
    LinearGradient {
        angle_degrees: f64,
        from: Colour,
        to: Colour,
    },
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Background::Solid(colour) => write!(f, "{}", colour),
            Background::LinearGradient {
                angle_degrees,
                from,
                to,
            } => write!(f, "linear-gradient({}deg, {}, {})", angle_degrees, from, to),
        }
    }
}
