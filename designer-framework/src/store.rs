use layout_designer_model::{DraftElement, Element, ElementId, ValidationError};

use crate::{
    direction::{Direction, NUDGE_STEP},
    placement::Placement,
    storage::{KeyValueStore, StorageError, LAYOUT_KEY},
};

/// Offset applied to both axes when an element is duplicated.
pub const DUPLICATE_OFFSET: f64 = 20.0;

/// Suffix appended to the name of a duplicated element.
pub const DUPLICATE_SUFFIX: &str = "-copy";

/// The ordered collection of elements on the canvas.
///
/// Insertion order is display and export order. Every mutation is written
/// through to the key-value store under [`LAYOUT_KEY`]. Operations on an id
/// that is not in the collection do nothing and return `None`, as do moves
/// and resizes that would leave a coordinate or size non-finite.
pub struct LayoutStore {
    elements: Vec<Element>,
    storage: Box<dyn KeyValueStore>,
    placement: Placement,
    /// `None` once the counter has passed `u64::MAX`; ids are then taken
    /// from the lowest free value.
    next_id: Option<ElementId>,
}

impl LayoutStore {
    /// Opens the store and restores whatever layout was saved previously.
    pub fn open(storage: impl KeyValueStore + 'static, placement: Placement) -> Self {
        let mut store = LayoutStore {
            elements: Vec::new(),
            storage: Box::new(storage),
            placement,
            next_id: Some(ElementId(1)),
        };
        store.restore();
        store
    }

    /// Reloads the collection from storage. Missing or unreadable data gives
    /// an empty collection.
    pub fn restore(&mut self) {
        self.elements = match self.storage.get(LAYOUT_KEY) {
            Some(saved) => match serde_json::from_str::<Vec<Element>>(&saved) {
                Ok(elements) => elements,
                Err(e) => {
                    log::warn!("Ignoring unreadable saved layout: {}", e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        if let Some(max) = self.elements.iter().map(|e| e.id).max() {
            let after = max.next();
            if after.is_none() {
                log::warn!("Saved layout uses id {}, reusing free ids from now on", max);
            }
            self.next_id = self.next_id.zip(after).map(|(next, after)| next.max(after));
        }

        log::debug!("Restored {} elements", self.elements.len());
    }

    /// Writes the collection to storage. Failures are logged and otherwise
    /// ignored.
    pub fn persist(&mut self) {
        let result = serde_json::to_string(&self.elements)
            .map_err(StorageError::from)
            .and_then(|json| self.storage.set(LAYOUT_KEY, json));

        if let Err(e) = result {
            log::warn!("Failed to save layout: {}", e);
        }
    }

    pub fn add(&mut self, draft: &DraftElement) -> Result<Element, ValidationError> {
        let name = draft.validated_name()?;
        let id = self.allocate_id();
        let (x, y) = self.placement.initial_position(draft.width, draft.height);

        let element = Element {
            id,
            name,
            x,
            y,
            width: draft.width,
            height: draft.height,
            colour: draft.colour.clone(),
            use_gradient: draft.use_gradient,
            opacity: draft.opacity,
            border_radius: draft.border_radius,
            border: draft.border.clone(),
        };

        log::info!("Added element {} '{}' at ({}, {})", id, element.name, x, y);
        self.elements.push(element.clone());
        self.persist();

        Ok(element)
    }

    /// Replaces every styled field of `id` with the draft, keeping the
    /// element's position and its place in the order.
    pub fn update(
        &mut self,
        id: ElementId,
        draft: &DraftElement,
    ) -> Result<Option<Element>, ValidationError> {
        let name = draft.validated_name()?;

        let Some(element) = self.elements.iter_mut().find(|e| e.id == id) else {
            log::debug!("Update of unknown element {}", id);
            return Ok(None);
        };

        *element = Element {
            id,
            name,
            x: element.x,
            y: element.y,
            width: draft.width,
            height: draft.height,
            colour: draft.colour.clone(),
            use_gradient: draft.use_gradient,
            opacity: draft.opacity,
            border_radius: draft.border_radius,
            border: draft.border.clone(),
        };
        let updated = element.clone();

        log::info!("Updated element {} '{}'", id, updated.name);
        self.persist();

        Ok(Some(updated))
    }

    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        let Some(index) = self.position(id) else {
            log::debug!("Remove of unknown element {}", id);
            return None;
        };

        let removed = self.elements.remove(index);
        log::info!("Removed element {} '{}'", id, removed.name);
        self.persist();

        Some(removed)
    }

    /// Copies `id` to the end of the collection under a fresh id, shifted by
    /// [`DUPLICATE_OFFSET`] and named with [`DUPLICATE_SUFFIX`].
    pub fn duplicate(&mut self, id: ElementId) -> Option<Element> {
        let original = self.get(id)?.clone();
        let copy = Element {
            id: self.allocate_id(),
            name: format!("{}{}", original.name, DUPLICATE_SUFFIX),
            x: original.x + DUPLICATE_OFFSET,
            y: original.y + DUPLICATE_OFFSET,
            ..original
        };

        log::info!("Duplicated element {} as {} '{}'", id, copy.id, copy.name);
        self.elements.push(copy.clone());
        self.persist();

        Some(copy)
    }

    pub fn move_by(&mut self, id: ElementId, dx: f64, dy: f64) -> Option<&Element> {
        self.modify(id, |element| element.translate(dx, dy))
    }

    /// Absolute move, as reported when a drag gesture ends.
    pub fn move_to(&mut self, id: ElementId, x: f64, y: f64) -> Option<&Element> {
        self.modify(id, |element| {
            element.x = x;
            element.y = y;
        })
    }

    /// Absolute size and position, as reported when a resize gesture ends.
    pub fn resize(
        &mut self,
        id: ElementId,
        width: f64,
        height: f64,
        x: f64,
        y: f64,
    ) -> Option<&Element> {
        self.modify(id, |element| {
            element.width = width;
            element.height = height;
            element.x = x;
            element.y = y;
        })
    }

    /// One arrow-key step of [`NUDGE_STEP`] pixels.
    pub fn nudge(&mut self, id: ElementId, direction: Direction) -> Option<&Element> {
        let (dx, dy) = direction.delta(NUDGE_STEP);
        self.move_by(id, dx, dy)
    }

    /// Empties the collection and erases the saved entry.
    pub fn clear(&mut self) {
        log::info!("Clearing {} elements", self.elements.len());
        self.elements.clear();

        if let Err(e) = self.storage.remove(LAYOUT_KEY) {
            log::warn!("Failed to erase saved layout: {}", e);
        }
    }

    pub fn snapshot(&self) -> &[Element] {
        &self.elements
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn storage(&self) -> &dyn KeyValueStore {
        &*self.storage
    }

    fn position(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|e| e.id == id)
    }

    fn allocate_id(&mut self) -> ElementId {
        if let Some(id) = self.next_id {
            self.next_id = id.next();
            return id;
        }

        // Fewer elements than ids, so a free one is found quickly
        let mut id = ElementId(1);
        while self.get(id).is_some() {
            id = ElementId(id.0 + 1);
        }
        id
    }

    fn modify<F>(&mut self, id: ElementId, f: F) -> Option<&Element>
    where
        F: FnOnce(&mut Element),
    {
        let Some(index) = self.position(id) else {
            log::debug!("Change to unknown element {}", id);
            return None;
        };

        let mut changed = self.elements[index].clone();
        f(&mut changed);

        let finite = [changed.x, changed.y, changed.width, changed.height]
            .iter()
            .all(|value| value.is_finite());
        if !finite {
            log::warn!(
                "Ignoring change that leaves element {} with a non-finite position or size",
                id
            );
            return None;
        }

        self.elements[index] = changed;
        log::debug!(
            "Element {} now at ({}, {}) size {}x{}",
            id,
            self.elements[index].x,
            self.elements[index].y,
            self.elements[index].width,
            self.elements[index].height
        );
        self.persist();

        self.elements.get(index)
    }
}
