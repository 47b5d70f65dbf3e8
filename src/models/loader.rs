//! ONNX model loader

use crate::config::ModelConfig;
use crate::error::StartupError;
use crate::models::classifier::OnnxClassifier;
use ort::session::{builder::GraphOptimizationLevel, Session};
use std::path::Path;
use std::sync::Mutex;
use tracing::info;

/// Loader for the fraud classifier artifact
pub struct ModelLoader {
    /// Number of threads for ONNX inference
    onnx_threads: usize,
}

impl ModelLoader {
    /// Create a new model loader with default settings (1 thread)
    pub fn new() -> Self {
        Self::with_threads(1)
    }

    /// Create a new model loader with specified number of threads
    pub fn with_threads(onnx_threads: usize) -> Self {
        Self {
            onnx_threads: onnx_threads.max(1),
        }
    }

    /// Create a loader from the model section of the configuration
    pub fn from_config(config: &ModelConfig) -> Self {
        Self::with_threads(config.onnx_threads)
    }

    /// Load the classifier from file.
    ///
    /// The artifact is checked before ONNX Runtime is touched, so a missing or
    /// empty file is reported without initializing the runtime.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<OnnxClassifier, StartupError> {
        let path = path.as_ref();
        check_artifact(path)?;

        ort::init().commit().map_err(load_error(path))?;
        info!(onnx_threads = self.onnx_threads, "ONNX Runtime initialized");

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "model".to_string());

        info!(
            model = %name,
            path = %path.display(),
            threads = self.onnx_threads,
            "Loading ONNX model"
        );

        let session = Session::builder()
            .map_err(load_error(path))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(load_error(path))?
            .with_intra_threads(self.onnx_threads)
            .map_err(load_error(path))?
            .commit_from_file(path)
            .map_err(load_error(path))?;

        let input_name = session
            .inputs
            .first()
            .map(|i| i.name.clone())
            .unwrap_or_else(|| "float_input".to_string());

        let output_name = session
            .outputs
            .iter()
            .find(|o| o.name.contains("prob"))
            .map(|o| o.name.clone())
            .unwrap_or_else(|| {
                session
                    .outputs
                    .last()
                    .map(|o| o.name.clone())
                    .unwrap_or_else(|| "probabilities".to_string())
            });

        info!(
            model = %name,
            input = %input_name,
            output = %output_name,
            "Model loaded successfully"
        );

        Ok(OnnxClassifier {
            name,
            session: Mutex::new(session),
            input_name,
            output_name,
        })
    }
}

impl Default for ModelLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn load_error<E: std::fmt::Display>(path: &Path) -> impl Fn(E) -> StartupError + '_ {
    move |e| StartupError::ModelLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
}

/// Reject artifacts that are missing, unreadable or empty.
fn check_artifact(path: &Path) -> Result<(), StartupError> {
    let metadata = std::fs::metadata(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => StartupError::ModelMissing {
            path: path.to_path_buf(),
        },
        _ => StartupError::ModelLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        },
    })?;

    if !metadata.is_file() {
        return Err(StartupError::ModelLoad {
            path: path.to_path_buf(),
            reason: "not a regular file".to_string(),
        });
    }
    if metadata.len() == 0 {
        return Err(StartupError::ModelEmpty {
            path: path.to_path_buf(),
        });
    }

    Ok(())
}
