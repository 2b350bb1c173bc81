//! Reusable widget components.

pub mod form;
pub mod modal;

pub use form::{DescriptionEditor, EditorOutcome, FormFocus, FormOutcome, TaskForm};
pub use modal::MessageModal;
