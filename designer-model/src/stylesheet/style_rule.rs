use std::fmt;

use serde::{Deserialize, Serialize};

use crate::stylesheet::{
    background::Background, border_style::BorderStyle, colour::Colour, length::Length,
    position::Position,
};

/// A single declaration inside a rule block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum StyleRule {
    // Text
    BackgroundColour(Colour),
    TextColour(Colour),
    FontSize(String),
    FontFamily(String),

    // Box
    Width(Length),
    Height(Length),
    Background(Background),
    Opacity(f64),
    BorderRadius(Length),
    Border(BorderStyle),

    // Placement
    Position(Position),
    Left(Length),
    Top(Length),
}

impl StyleRule {
    pub fn property(&self) -> &'static str {
        match self {
            StyleRule::BackgroundColour(_) => "background-color",
            StyleRule::TextColour(_) => "color",
            StyleRule::FontSize(_) => "font-size",
            StyleRule::FontFamily(_) => "font-family",
            StyleRule::Width(_) => "width",
            StyleRule::Height(_) => "height",
            StyleRule::Background(_) => "background",
            StyleRule::Opacity(_) => "opacity",
            StyleRule::BorderRadius(_) => "border-radius",
            StyleRule::Border(_) => "border",
            StyleRule::Position(_) => "position",
            StyleRule::Left(_) => "left",
            StyleRule::Top(_) => "top",
        }
    }

    pub fn value(&self) -> String {
        match self {
            StyleRule::BackgroundColour(colour) | StyleRule::TextColour(colour) => {
                colour.to_string()
            }
            StyleRule::FontSize(text) | StyleRule::FontFamily(text) => text.clone(),
            StyleRule::Width(length)
            | StyleRule::Height(length)
            | StyleRule::BorderRadius(length)
            | StyleRule::Left(length)
            | StyleRule::Top(length) => length.to_string(),
            StyleRule::Background(background) => background.to_string(),
            StyleRule::Opacity(opacity) => opacity.to_string(),
            StyleRule::Border(border) => border.to_string(),
            StyleRule::Position(position) => position.to_string(),
        }
    }
}

impl fmt::Display for StyleRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.property(), self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declarations() {
        assert_eq!(
            StyleRule::Width(Length::Pixels(150.0)).to_string(),
            "width: 150px;"
        );
        assert_eq!(StyleRule::Opacity(0.5).to_string(), "opacity: 0.5;");
        assert_eq!(
            StyleRule::FontFamily("Segoe UI, sans-serif".to_string()).to_string(),
            "font-family: Segoe UI, sans-serif;"
        );
        assert_eq!(
            StyleRule::Position(Position::Absolute).to_string(),
            "position: absolute;"
        );
    }

    #[test]
    fn test_gradient_background() {
        let rule = StyleRule::Background(Background::LinearGradient {
            angle_degrees: 45.0,
            from: Colour::from("#8f5cf4"),
            to: Colour::from("#ffffff33"),
        });

        assert_eq!(
            rule.to_string(),
            "background: linear-gradient(45deg, #8f5cf4, #ffffff33);"
        );
    }

    #[test]
    fn test_border() {
        let solid = StyleRule::Border(BorderStyle::Solid {
            width: Length::Pixels(2.0),
            colour: Colour::from("#ffffff"),
        });
        assert_eq!(solid.to_string(), "border: 2px solid #ffffff;");
        assert_eq!(
            StyleRule::Border(BorderStyle::None).to_string(),
            "border: none;"
        );
    }
}
