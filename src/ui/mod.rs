//! Desktop rendering of the interaction shell

pub mod app;
pub mod design;

pub use app::{FatalErrorApp, FraudFormApp};
pub use design::DesignSystem;
