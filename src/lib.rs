//! Financial Transaction Fraud Prediction Form
//!
//! Collects ten transaction attributes, scores them with a pre-trained ONNX
//! classifier and turns the score into a fraudulent / legitimate verdict.

pub mod app;
pub mod banner;
pub mod config;
pub mod consumer;
pub mod error;
pub mod feature_extractor;
pub mod metrics;
pub mod models;
pub mod producer;
pub mod shell;
pub mod telemetry;
pub mod types;

#[cfg(feature = "ui")]
pub mod ui;

pub use app::AppState;
pub use config::AppConfig;
pub use error::{RequestError, StartupError};
pub use feature_extractor::{FeatureExtractor, FEATURE_NAMES};
pub use models::{Classifier, ModelLoader, PredictionService};
pub use shell::FormSession;
pub use types::{PredictionRequest, Verdict, VerdictReport};
