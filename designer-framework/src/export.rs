//! Style sheet export.
//!
//! Output is a pure function of its inputs: the `body` block (when enabled)
//! followed by one class block per element in collection order.

use layout_designer_model::{
    stylesheet::{Length, Position, StyleRule, Stylesheet, StylesheetClass},
    BodyStyle, Element,
};

pub fn export(elements: &[Element], body: &BodyStyle, enable_body_style: bool) -> String {
    stylesheet_for(elements, body, enable_body_style).to_string()
}

pub fn stylesheet_for(
    elements: &[Element],
    body: &BodyStyle,
    enable_body_style: bool,
) -> Stylesheet {
    let body = enable_body_style.then(|| body_class(body));
    let classes = elements.iter().map(element_class).collect();

    Stylesheet::new(body, classes)
}

fn body_class(body: &BodyStyle) -> StylesheetClass {
    StylesheetClass::body(vec![
        StyleRule::BackgroundColour(body.background_colour.clone()),
        StyleRule::TextColour(body.font_colour.clone()),
        StyleRule::FontSize(body.font_size.clone()),
        StyleRule::FontFamily(body.font_family.clone()),
    ])
}

fn element_class(element: &Element) -> StylesheetClass {
    let mut rules = vec![
        StyleRule::Width(Length::Pixels(element.width)),
        StyleRule::Height(Length::Pixels(element.height)),
        StyleRule::Background(element.background()),
    ];

    if let Some(opacity) = element.opacity {
        rules.push(StyleRule::Opacity(opacity));
    }
    if let Some(radius) = element.border_radius {
        rules.push(StyleRule::BorderRadius(Length::Pixels(radius)));
    }
    if element.border.is_some() {
        rules.push(StyleRule::Border(element.border_style()));
    }

    rules.extend([
        StyleRule::Position(Position::Absolute),
        StyleRule::Left(Length::Pixels(element.x)),
        StyleRule::Top(Length::Pixels(element.y)),
    ]);

    StylesheetClass::new(&element.name, rules)
}
