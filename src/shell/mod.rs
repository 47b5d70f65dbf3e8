//! Interaction shell: form definition, session state and verdict feedback.
//!
//! Nothing here depends on a UI toolkit; the desktop form renders what
//! `FormSession::feedback` reports.

pub mod celebration;
pub mod form;
pub mod session;

pub use celebration::Celebration;
pub use form::{FieldSpec, FormState, FIELDS};
pub use session::{Feedback, FormSession, Outcome, Tone};
