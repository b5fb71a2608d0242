// Build screen: the working draft, its mutation primitives, the events the
// page sends, required-field checks and profile picture ingestion.

pub mod controller;
pub mod events;
pub mod handlers;
pub mod image;
pub mod section;
pub mod validation;

pub use controller::{FormController, Screen};
pub use section::SectionKind;
