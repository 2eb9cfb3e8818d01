//! Interaction state of a designer session.
//!
//! A [`Designer`] owns the layout store together with the state the user
//! interface keeps around it: the selected element, the element whose edit
//! form is open, body styling and the last exported text. Front ends feed it
//! one [`Input`] per user event.

use layout_designer_model::{BodyStyle, DraftElement, Element, ElementId, ValidationError};

use crate::{direction::Direction, export::export, store::LayoutStore};

#[derive(Clone, Debug, PartialEq)]
pub enum Input {
    /// An element on the canvas was clicked.
    Select(ElementId),
    /// A drag gesture ended at an absolute position.
    DragStop { id: ElementId, x: f64, y: f64 },
    /// A resize gesture ended with an absolute size and position.
    ResizeStop {
        id: ElementId,
        width: f64,
        height: f64,
        x: f64,
        y: f64,
    },
    /// A key was pressed; arrow keys move the selected element.
    KeyDown(String),
    /// The form for a new element was opened.
    BeginAdd,
    /// The edit form for an element was opened.
    BeginEdit(ElementId),
    /// The open form was dismissed.
    CancelEdit,
    /// The open form was confirmed.
    Submit(DraftElement),
    /// Delete was pressed in the edit form.
    Delete,
    /// Duplicate was pressed while an element is selected.
    Duplicate,
    ApplyBodyStyle(BodyStyle),
    Export,
    /// Restart, after the user has confirmed it.
    Restart,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// Nothing to do: unknown id, no selection, or an unhandled key.
    Ignored,
    Selected(Element),
    Editing(DraftElement),
    Added(Element),
    Updated(Element),
    Removed(Element),
    Duplicated(Element),
    Moved(Element),
    BodyStyleApplied,
    Exported(String),
    Restarted,
}

pub struct Designer {
    store: LayoutStore,
    body_style: BodyStyle,
    enable_body_style: bool,
    selected: Option<ElementId>,
    editing: Option<ElementId>,
    css_preview: Option<String>,
}

impl Designer {
    pub fn new(store: LayoutStore) -> Self {
        Designer {
            store,
            body_style: BodyStyle::default(),
            enable_body_style: false,
            selected: None,
            editing: None,
            css_preview: None,
        }
    }

    pub fn handle(&mut self, input: Input) -> Result<Outcome, ValidationError> {
        let outcome = match input {
            Input::Select(id) => match self.store.get(id) {
                Some(element) => {
                    self.selected = Some(id);
                    Outcome::Selected(element.clone())
                }
                None => Outcome::Ignored,
            },

            Input::DragStop { id, x, y } => moved(self.store.move_to(id, x, y)),

            Input::ResizeStop {
                id,
                width,
                height,
                x,
                y,
            } => moved(self.store.resize(id, width, height, x, y)),

            Input::KeyDown(key) => match (self.selected, Direction::from_key(&key)) {
                (Some(id), Some(direction)) => moved(self.store.nudge(id, direction)),
                _ => Outcome::Ignored,
            },

            Input::BeginAdd => {
                self.editing = None;
                Outcome::Editing(DraftElement::default())
            }

            Input::BeginEdit(id) => match self.store.get(id) {
                Some(element) => {
                    let draft = DraftElement::from(element);
                    self.editing = Some(id);
                    self.selected = Some(id);
                    Outcome::Editing(draft)
                }
                None => Outcome::Ignored,
            },

            Input::CancelEdit => {
                self.editing = None;
                Outcome::Ignored
            }

            Input::Submit(draft) => self.submit(&draft)?,

            Input::Delete => match self.editing.take() {
                Some(id) => match self.store.remove(id) {
                    Some(removed) => {
                        if self.selected == Some(id) {
                            self.selected = None;
                        }
                        Outcome::Removed(removed)
                    }
                    None => Outcome::Ignored,
                },
                None => Outcome::Ignored,
            },

            Input::Duplicate => match self.selected.and_then(|id| self.store.duplicate(id)) {
                Some(copy) => Outcome::Duplicated(copy),
                None => Outcome::Ignored,
            },

            Input::ApplyBodyStyle(body_style) => {
                self.body_style = body_style;
                self.enable_body_style = true;
                log::info!("Body styling enabled");
                Outcome::BodyStyleApplied
            }

            Input::Export => {
                let text = self.export();
                self.css_preview = Some(text.clone());
                Outcome::Exported(text)
            }

            Input::Restart => {
                self.restart();
                Outcome::Restarted
            }
        };

        Ok(outcome)
    }

    /// Confirms the open form: updates the element being edited, or adds a
    /// new one. The form stays open when validation fails.
    fn submit(&mut self, draft: &DraftElement) -> Result<Outcome, ValidationError> {
        let outcome = match self.editing {
            Some(id) => match self.store.update(id, draft)? {
                Some(updated) => Outcome::Updated(updated),
                None => Outcome::Ignored,
            },
            None => Outcome::Added(self.store.add(draft)?),
        };

        self.editing = None;
        Ok(outcome)
    }

    /// Clears the canvas, the saved layout and the export text. Body styling
    /// is left as it was.
    fn restart(&mut self) {
        self.store.clear();
        self.css_preview = None;
        self.selected = None;
        self.editing = None;
    }

    pub fn export(&self) -> String {
        export(
            self.store.snapshot(),
            &self.body_style,
            self.enable_body_style,
        )
    }

    pub fn store(&self) -> &LayoutStore {
        &self.store
    }

    pub fn body_style(&self) -> &BodyStyle {
        &self.body_style
    }

    pub fn body_style_enabled(&self) -> bool {
        self.enable_body_style
    }

    pub fn selected(&self) -> Option<&Element> {
        self.selected.and_then(|id| self.store.get(id))
    }

    pub fn editing(&self) -> Option<ElementId> {
        self.editing
    }

    pub fn css_preview(&self) -> Option<&str> {
        self.css_preview.as_deref()
    }
}

fn moved(element: Option<&Element>) -> Outcome {
    match element {
        Some(element) => Outcome::Moved(element.clone()),
        None => Outcome::Ignored,
    }
}
