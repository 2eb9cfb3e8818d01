//! Common test utilities shared across integration tests

use layout_designer::{
    Designer, Element, Input, LayoutStore, MemoryStore, Outcome, Placement, Viewport,
    LAYOUT_KEY,
};

pub const SEED: u64 = 0x5eed;

/// Store over an empty in-memory key-value store with seeded placement
pub fn new_store() -> LayoutStore {
    open_store(MemoryStore::new())
}

pub fn open_store(storage: MemoryStore) -> LayoutStore {
    LayoutStore::open(storage, Placement::seeded(Viewport::default(), SEED))
}

#[allow(dead_code)]
pub fn new_designer() -> Designer {
    Designer::new(new_store())
}

/// Saved layout JSON currently held by the store's backing storage
#[allow(dead_code)]
pub fn saved_layout(store: &LayoutStore) -> Option<String> {
    store.storage().get(LAYOUT_KEY)
}

/// Copy of the store's backing storage, for reopening in a fresh store
#[allow(dead_code)]
pub fn storage_copy(store: &LayoutStore) -> MemoryStore {
    match saved_layout(store) {
        Some(json) => [(LAYOUT_KEY, json)].into_iter().collect(),
        None => MemoryStore::new(),
    }
}

/// Assert that the outcome carries an element and return it
#[allow(dead_code)]
pub fn expect_element(outcome: Outcome) -> Element {
    match outcome {
        Outcome::Selected(e)
        | Outcome::Added(e)
        | Outcome::Updated(e)
        | Outcome::Removed(e)
        | Outcome::Duplicated(e)
        | Outcome::Moved(e) => e,
        other => panic!("Expected an element outcome, got: {:?}", other),
    }
}

/// Send an input that must pass validation
#[allow(dead_code)]
pub fn send(designer: &mut Designer, input: Input) -> Outcome {
    designer
        .handle(input)
        .unwrap_or_else(|e| panic!("Unexpected validation error: {}", e))
}
