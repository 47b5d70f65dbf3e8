//! ML model loading and inference components

pub mod cache;
pub mod classifier;
pub mod inference;
pub mod loader;

pub use cache::PredictionCache;
pub use classifier::{ClassProbabilities, Classifier, OnnxClassifier};
pub use inference::PredictionService;
pub use loader::ModelLoader;
