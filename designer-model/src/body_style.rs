use serde::{Deserialize, Serialize};

use crate::stylesheet::Colour;

pub const DEFAULT_BODY_BACKGROUND: &str = "#1e1e2f";
pub const DEFAULT_FONT_COLOUR: &str = "#ffffff";
pub const DEFAULT_FONT_SIZE: &str = "16px";
pub const DEFAULT_FONT_FAMILY: &str = "Segoe UI, sans-serif";

/// Page-wide defaults emitted as a `body` rule when enabled.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyStyle {
    pub background_colour: Colour,
    pub font_colour: Colour,
    pub font_size: String,
    pub font_family: String,
}

impl Default for BodyStyle {
    fn default() -> Self {
        BodyStyle {
            background_colour: Colour::from(DEFAULT_BODY_BACKGROUND),
            font_colour: Colour::from(DEFAULT_FONT_COLOUR),
            font_size: DEFAULT_FONT_SIZE.to_string(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
        }
    }
}
