use std::fmt;

use serde::{Deserialize, Serialize};

use crate::stylesheet::{Background, BorderStyle, Colour, Length};

pub const DEFAULT_WIDTH: f64 = 150.0;
pub const DEFAULT_HEIGHT: f64 = 80.0;
pub const DEFAULT_COLOUR: &str = "#8f5cf4";
pub const DEFAULT_BORDER_COLOUR: &str = "#ffffff";
pub const DEFAULT_BORDER_WIDTH: f64 = 2.0;
pub const DEFAULT_BORDER_RADIUS: f64 = 10.0;

/// Second stop of the 45 degree gradient used when `use_gradient` is set.
pub const GRADIENT_STOP: &str = "#ffffff33";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub u64);

impl ElementId {
    /// The following id, or `None` at `u64::MAX`.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(ElementId)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ElementId {
    fn from(value: u64) -> Self {
        ElementId(value)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Border {
    pub width: f64,
    pub colour: Colour,
}

impl Default for Border {
    fn default() -> Self {
        Border {
            width: DEFAULT_BORDER_WIDTH,
            colour: Colour::from(DEFAULT_BORDER_COLOUR),
        }
    }
}

/// One positioned, styled rectangle on the canvas.
///
/// The optional properties are only emitted when present: `None` means the
/// property is switched off, not zeroed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "ElementRecord", into = "ElementRecord")]
pub struct Element {
    pub id: ElementId,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub colour: Colour,
    pub use_gradient: bool,
    pub opacity: Option<f64>,
    pub border_radius: Option<f64>,
    pub border: Option<Border>,
}

impl Element {
    /// Opacity used for live rendering, 1 when switched off.
    pub fn effective_opacity(&self) -> f64 {
        self.opacity.unwrap_or(1.0)
    }

    /// Corner rounding used for live rendering, 0 when switched off.
    pub fn effective_border_radius(&self) -> f64 {
        self.border_radius.unwrap_or(0.0)
    }

    pub fn background(&self) -> Background {
        if self.use_gradient {
            Background::LinearGradient {
                angle_degrees: 45.0,
                from: self.colour.clone(),
                to: Colour::from(GRADIENT_STOP),
            }
        } else {
            Background::Solid(self.colour.clone())
        }
    }

    pub fn border_style(&self) -> BorderStyle {
        match &self.border {
            Some(border) => BorderStyle::Solid {
                width: Length::Pixels(border.width),
                colour: border.colour.clone(),
            },
            None => BorderStyle::None,
        }
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}

/// Flat on-disk shape of an [`Element`].
///
/// Field names are fixed: layouts saved by earlier versions of the designer
/// must keep loading, so every `show*` flag and hidden value is tolerated
/// when missing.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ElementRecord {
    id: ElementId,
    name: String,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    color: String,
    #[serde(default)]
    use_gradient: bool,
    #[serde(default)]
    show_opacity: bool,
    #[serde(default = "full_opacity")]
    opacity: f64,
    #[serde(default)]
    show_radius: bool,
    #[serde(default)]
    border_radius: f64,
    #[serde(default)]
    show_border: bool,
    #[serde(default = "default_border_colour")]
    border_color: String,
    #[serde(default = "default_border_width")]
    border_width: f64,
}

fn full_opacity() -> f64 {
    1.0
}

fn default_border_colour() -> String {
    DEFAULT_BORDER_COLOUR.to_string()
}

fn default_border_width() -> f64 {
    DEFAULT_BORDER_WIDTH
}

impl From<ElementRecord> for Element {
    fn from(record: ElementRecord) -> Self {
        Element {
            id: record.id,
            name: record.name,
            x: record.x,
            y: record.y,
            width: record.width,
            height: record.height,
            colour: Colour::from(record.color),
            use_gradient: record.use_gradient,
            opacity: record.show_opacity.then_some(record.opacity),
            border_radius: record.show_radius.then_some(record.border_radius),
            border: record.show_border.then(|| Border {
                width: record.border_width,
                colour: Colour::from(record.border_color),
            }),
        }
    }
}

impl From<Element> for ElementRecord {
    fn from(element: Element) -> Self {
        let border = element.border.clone().unwrap_or_default();

        ElementRecord {
            id: element.id,
            name: element.name,
            x: element.x,
            y: element.y,
            width: element.width,
            height: element.height,
            color: element.colour.into_string(),
            use_gradient: element.use_gradient,
            show_opacity: element.opacity.is_some(),
            opacity: element.opacity.unwrap_or(1.0),
            show_radius: element.border_radius.is_some(),
            border_radius: element.border_radius.unwrap_or(0.0),
            show_border: element.border.is_some(),
            border_color: border.colour.into_string(),
            border_width: border.width,
        }
    }
}
