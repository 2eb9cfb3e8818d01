//! Styles for drawing an element on the live canvas.
//!
//! Unlike the exported style sheet, the canvas always needs an opacity and a
//! border value, so switched-off properties fall back to neutral ones here.

use super::{Length, Position, StyleRule};
use crate::element::Element;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComputedStyle {
    rules: Vec<StyleRule>,
}

impl ComputedStyle {
    pub fn for_element(element: &Element) -> Self {
        let mut rules = vec![
            StyleRule::Position(Position::Absolute),
            StyleRule::Left(Length::Pixels(element.x)),
            StyleRule::Top(Length::Pixels(element.y)),
            StyleRule::Width(Length::Pixels(element.width)),
            StyleRule::Height(Length::Pixels(element.height)),
            StyleRule::Background(element.background()),
            StyleRule::Opacity(element.effective_opacity()),
        ];

        if let Some(radius) = element.border_radius {
            rules.push(StyleRule::BorderRadius(Length::Pixels(radius)));
        }

        rules.push(StyleRule::Border(element.border_style()));

        ComputedStyle { rules }
    }

    /// Get a specific style rule by matching on the discriminant
    pub fn get<F>(&self, matcher: F) -> Option<&StyleRule>
    where
        F: Fn(&StyleRule) -> bool,
    {
        self.rules.iter().rev().find(|rule| matcher(rule))
    }

    pub fn has<F>(&self, matcher: F) -> bool
    where
        F: Fn(&StyleRule) -> bool,
    {
        self.rules.iter().any(matcher)
    }

    /// Renders the rules as an inline `style` attribute value.
    pub fn inline(&self) -> String {
        self.rules
            .iter()
            .map(|rule| rule.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
