mod designer;
mod direction;
mod export;
mod placement;
mod storage;
mod store;

pub use designer::{Designer, Input, Outcome};
pub use direction::{Direction, NUDGE_STEP};
pub use export::{export, stylesheet_for};
pub use layout_designer_model::{
    stylesheet::{ComputedStyle, Stylesheet},
    validate_name, BodyStyle, Border, DraftElement, DraftElementConfig, Element, ElementId,
    ValidationError,
};
pub use placement::{Placement, RandomSource, Viewport, SIDEBAR_WIDTH};
pub use storage::{KeyValueStore, MemoryStore, StorageError, LAYOUT_KEY};
pub use store::{LayoutStore, DUPLICATE_OFFSET, DUPLICATE_SUFFIX};
