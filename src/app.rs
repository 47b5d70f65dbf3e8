//! Startup sequence shared by the desktop form and the headless scorer

use crate::banner::BannerStatus;
use crate::config::{AppConfig, ModelConfig};
use crate::error::StartupError;
use crate::models::{Classifier, ModelLoader, PredictionService};
use std::sync::Arc;
use tracing::{error, info};

/// Everything a running form needs, built once at process start.
pub struct AppState {
    pub config: AppConfig,
    pub service: Arc<PredictionService>,
    pub banner: BannerStatus,
}

impl AppState {
    /// Load the ONNX classifier named in `config`, then the banner.
    pub fn bootstrap(config: AppConfig) -> Result<Self, StartupError> {
        Self::bootstrap_with(config, |model| {
            let classifier = ModelLoader::from_config(model).load(&model.path)?;
            Ok(Arc::new(classifier) as Arc<dyn Classifier>)
        })
    }

    /// Startup with a custom model source.
    ///
    /// A model failure is returned as-is and nothing else is loaded. A banner
    /// failure is recorded in `banner` and startup continues.
    pub fn bootstrap_with<F>(config: AppConfig, load_model: F) -> Result<Self, StartupError>
    where
        F: FnOnce(&ModelConfig) -> Result<Arc<dyn Classifier>, StartupError>,
    {
        let classifier = load_model(&config.model).inspect_err(|e| {
            error!(error = %e, "Model could not be loaded, halting startup");
        })?;
        let service = Arc::new(PredictionService::new(classifier));
        info!(model = %service.classifier_name(), "Prediction service ready");

        let banner = BannerStatus::load(&config.banner);

        Ok(Self {
            config,
            service,
            banner,
        })
    }

    /// Non-fatal problems to show on the form
    pub fn startup_reports(&self) -> Vec<String> {
        self.banner.error().map(|e| e.to_string()).into_iter().collect()
    }
}
