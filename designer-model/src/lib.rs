pub mod body_style;
pub mod draft;
pub mod element;
pub mod stylesheet;

// Re-export commonly used types
pub use body_style::BodyStyle;
pub use draft::{validate_name, DraftElement, DraftElementConfig, ValidationError};
pub use element::{Border, Element, ElementId};
