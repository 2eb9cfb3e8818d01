use std::fmt;

use serde::{Deserialize, Serialize};

/// A colour value as typed or picked by the user, usually a hex string.
///
/// Written to the style sheet verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Colour(String);

impl Colour {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Colour {
    fn from(value: &str) -> Self {
        Colour(value.to_string())
    }
}

impl From<String> for Colour {
    fn from(value: String) -> Self {
        Colour(value)
    }
}
