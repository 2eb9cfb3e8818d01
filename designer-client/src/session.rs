use layout_designer::{
    ComputedStyle, Designer, DraftElement, Element, ElementId, Input, LayoutStore, Outcome,
    NUDGE_STEP,
};
use std::fs;

use crate::{
    command::{body_style, Command},
    config::Config,
    error::{ClientError, Result},
};

/// What the prompt should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Message(String),
    /// Ask before clearing the canvas, then send `restart --yes`.
    ConfirmRestart,
    Quit,
}

/// Drives a [`Designer`] from prompt commands.
///
/// The add and edit forms live for a single command: a command opens the
/// form, fills it in and submits it in one go.
pub struct Session {
    designer: Designer,
}

impl Session {
    pub fn new(designer: Designer) -> Self {
        Session { designer }
    }

    pub fn open(config: &Config) -> Result<Self> {
        let storage = config.open_storage()?;
        let store = LayoutStore::open(storage, config.placement());
        Ok(Session::new(Designer::new(store)))
    }

    pub fn designer(&self) -> &Designer {
        &self.designer
    }

    pub fn execute(&mut self, command: Command) -> Result<Reply> {
        let message = match command {
            Command::Add { name, style } => {
                self.send(Input::BeginAdd)?;
                let draft = style.apply(DraftElement::named(name));
                describe(&self.submit(draft)?)
            }

            Command::Edit { id, name, style } => {
                let id = ElementId(id);
                let Outcome::Editing(draft) = self.send(Input::BeginEdit(id))? else {
                    return Err(ClientError::UnknownElement(id));
                };

                let mut draft = style.apply(draft);
                if let Some(name) = name {
                    draft.name = name;
                }
                describe(&self.submit(draft)?)
            }

            Command::Select { id } => {
                let id = ElementId(id);
                self.expect_element(id, Input::Select(id))?
            }

            Command::Nudge { direction, steps: 1 } => {
                self.selected_id()?;
                describe(&self.send(Input::KeyDown(direction.key().to_string()))?)
            }

            // Several steps land as one move, saved once
            Command::Nudge { direction, steps } => {
                let element = self.element(self.selected_id()?)?;
                let (dx, dy) = direction.delta(NUDGE_STEP * f64::from(steps));
                let input = Input::DragStop {
                    id: element.id,
                    x: element.x + dx,
                    y: element.y + dy,
                };
                self.expect_element(element.id, input)?
            }

            Command::Drag { id, x, y } => {
                let id = ElementId(id);
                self.expect_element(id, Input::DragStop { id, x, y })?
            }

            Command::Resize {
                id,
                width,
                height,
                x,
                y,
            } => {
                let id = ElementId(id);
                let element = self.element(id)?;
                let input = Input::ResizeStop {
                    id,
                    width,
                    height,
                    x: x.unwrap_or(element.x),
                    y: y.unwrap_or(element.y),
                };
                self.expect_element(id, input)?
            }

            Command::Duplicate { id } => {
                if let Some(id) = id {
                    let id = ElementId(id);
                    self.expect_element(id, Input::Select(id))?;
                }

                match self.send(Input::Duplicate)? {
                    Outcome::Ignored => return Err(ClientError::NothingSelected),
                    outcome => describe(&outcome),
                }
            }

            Command::Delete { id } => {
                let id = match id {
                    Some(id) => ElementId(id),
                    None => self.selected_id()?,
                };

                if self.send(Input::BeginEdit(id))? == Outcome::Ignored {
                    return Err(ClientError::UnknownElement(id));
                }
                describe(&self.send(Input::Delete)?)
            }

            Command::List => self.list(),

            Command::Show { id } => {
                let element = self.element(ElementId(id))?;
                format!(
                    "{}\n{}",
                    summary(&element),
                    ComputedStyle::for_element(&element).inline()
                )
            }

            Command::Body {
                background,
                colour,
                font_size,
                font_family,
            } => {
                let body = body_style(
                    self.designer.body_style(),
                    background.as_deref(),
                    colour.as_deref(),
                    font_size.as_deref(),
                    &font_family,
                );
                describe(&self.send(Input::ApplyBodyStyle(body))?)
            }

            Command::Export { output } => {
                let Outcome::Exported(text) = self.send(Input::Export)? else {
                    return Ok(Reply::Message(String::new()));
                };

                match output {
                    Some(path) => {
                        fs::write(&path, &text)?;
                        log::info!("Exported {} bytes to {}", text.len(), path.display());
                        format!("Wrote {}", path.display())
                    }
                    None if text.is_empty() => "Nothing to export".to_string(),
                    None => text.trim_end().to_string(),
                }
            }

            Command::Restart { yes: false } => return Ok(Reply::ConfirmRestart),

            Command::Restart { yes: true } => describe(&self.send(Input::Restart)?),

            Command::Quit => return Ok(Reply::Quit),
        };

        Ok(Reply::Message(message))
    }

    fn send(&mut self, input: Input) -> Result<Outcome> {
        log::debug!("Input: {:?}", input);
        Ok(self.designer.handle(input)?)
    }

    /// Submits the open form, closing it again when validation fails.
    fn submit(&mut self, draft: DraftElement) -> Result<Outcome> {
        match self.designer.handle(Input::Submit(draft)) {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                self.send(Input::CancelEdit)?;
                Err(e.into())
            }
        }
    }

    fn expect_element(&mut self, id: ElementId, input: Input) -> Result<String> {
        match self.send(input)? {
            Outcome::Ignored => Err(ClientError::UnknownElement(id)),
            outcome => Ok(describe(&outcome)),
        }
    }

    fn element(&self, id: ElementId) -> Result<Element> {
        self.designer
            .store()
            .get(id)
            .cloned()
            .ok_or(ClientError::UnknownElement(id))
    }

    fn selected_id(&self) -> Result<ElementId> {
        self.designer
            .selected()
            .map(|element| element.id)
            .ok_or(ClientError::NothingSelected)
    }

    fn list(&self) -> String {
        let elements = self.designer.store().snapshot();
        if elements.is_empty() {
            return "No elements".to_string();
        }

        let selected = self.designer.selected().map(|element| element.id);
        elements
            .iter()
            .map(|element| {
                let marker = if Some(element.id) == selected { '*' } else { ' ' };
                format!("{} {}", marker, details(element))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn describe(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Ignored => "Nothing to do".to_string(),
        Outcome::Selected(e) => format!("Selected {}", summary(e)),
        Outcome::Editing(draft) => format!("Editing '{}'", draft.name),
        Outcome::Added(e) => format!("Added {}", summary(e)),
        Outcome::Updated(e) => format!("Updated {}", summary(e)),
        Outcome::Removed(e) => format!("Deleted {}", summary(e)),
        Outcome::Duplicated(e) => format!("Duplicated as {}", summary(e)),
        Outcome::Moved(e) => format!("Moved {}", summary(e)),
        Outcome::BodyStyleApplied => "Body styling enabled".to_string(),
        Outcome::Exported(text) => text.clone(),
        Outcome::Restarted => "Canvas cleared".to_string(),
    }
}

fn summary(element: &Element) -> String {
    format!(
        "{} '{}' at ({}, {}) size {}x{}",
        element.id, element.name, element.x, element.y, element.width, element.height
    )
}

fn details(element: &Element) -> String {
    let mut line = format!("{} {}", summary(element), element.colour);

    if element.use_gradient {
        line.push_str(" gradient");
    }
    if let Some(opacity) = element.opacity {
        line.push_str(&format!(" opacity {}", opacity));
    }
    if let Some(radius) = element.border_radius {
        line.push_str(&format!(" radius {}px", radius));
    }
    if let Some(border) = &element.border {
        line.push_str(&format!(" border {}px {}", border.width, border.colour));
    }

    line
}
