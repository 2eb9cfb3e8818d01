use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::{
    element::{Border, Element, DEFAULT_COLOUR, DEFAULT_HEIGHT, DEFAULT_WIDTH},
    stylesheet::Colour,
};

static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+$").expect("element name pattern is a valid regex")
});

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a name for the shape.")]
    EmptyName,

    #[error(
        "The shape name '{0}' must contain only letters, numbers, underscores (_) or dashes (-), with no spaces."
    )]
    InvalidName(String),

    #[error("The {0} of the shape must be a finite number.")]
    NonFiniteNumber(&'static str),
}

/// Checks a proposed element name and returns it trimmed.
///
/// The name becomes a class selector in the exported style sheet, so it is
/// limited to `[A-Za-z0-9_-]+`.
pub fn validate_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    if !NAME_PATTERN.is_match(trimmed) {
        return Err(ValidationError::InvalidName(trimmed.to_string()));
    }

    Ok(trimmed.to_string())
}

/// Field values for an element that is being created or edited, before the
/// user confirms them.
#[derive(Clone, Debug, PartialEq)]
pub struct DraftElementConfig {
    pub name: String,
    pub width: f64,
    pub height: f64,
    pub colour: Colour,
    pub use_gradient: bool,
    pub opacity: Option<f64>,
    pub border_radius: Option<f64>,
    pub border: Option<Border>,
}

pub type DraftElement = DraftElementConfig;

impl Default for DraftElementConfig {
    fn default() -> Self {
        DraftElementConfig {
            name: String::new(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            colour: Colour::from(DEFAULT_COLOUR),
            use_gradient: false,
            opacity: None,
            border_radius: None,
            border: None,
        }
    }
}

impl DraftElementConfig {
    pub fn named(name: impl ToString) -> Self {
        DraftElementConfig {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn size(self, width: f64, height: f64) -> Self {
        DraftElementConfig {
            width,
            height,
            ..self
        }
    }

    pub fn colour(self, colour: impl Into<Colour>) -> Self {
        DraftElementConfig {
            colour: colour.into(),
            ..self
        }
    }

    pub fn gradient(self, use_gradient: bool) -> Self {
        DraftElementConfig {
            use_gradient,
            ..self
        }
    }

    pub fn opacity(self, opacity: Option<f64>) -> Self {
        DraftElementConfig { opacity, ..self }
    }

    pub fn border_radius(self, border_radius: Option<f64>) -> Self {
        DraftElementConfig {
            border_radius,
            ..self
        }
    }

    pub fn border(self, border: Option<Border>) -> Self {
        DraftElementConfig { border, ..self }
    }

    /// Validates the draft and returns the name to store.
    ///
    /// Sizes and optional values must be finite; they cannot be written to
    /// the saved layout otherwise.
    pub fn validated_name(&self) -> Result<String, ValidationError> {
        let name = validate_name(&self.name)?;

        let numbers = [
            ("width", Some(self.width)),
            ("height", Some(self.height)),
            ("opacity", self.opacity),
            ("border radius", self.border_radius),
            ("border width", self.border.as_ref().map(|b| b.width)),
        ];
        if let Some((field, _)) = numbers
            .into_iter()
            .find(|(_, value)| value.is_some_and(|v| !v.is_finite()))
        {
            return Err(ValidationError::NonFiniteNumber(field));
        }

        Ok(name)
    }
}

impl From<&Element> for DraftElementConfig {
    fn from(element: &Element) -> Self {
        DraftElementConfig {
            name: element.name.clone(),
            width: element.width,
            height: element.height,
            colour: element.colour.clone(),
            use_gradient: element.use_gradient,
            opacity: element.opacity,
            border_radius: element.border_radius,
            border: element.border.clone(),
        }
    }
}
