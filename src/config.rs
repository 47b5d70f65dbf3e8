//! Configuration management for the fraud prediction form

use anyhow::{Context, Result};
use config::{Config, ConfigBuilder, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default location of the optional configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config/config.toml";

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub model: ModelConfig,
    pub banner: BannerConfig,
    pub shell: ShellConfig,
    pub metrics: MetricsConfig,
    pub logging: LoggingConfig,
}

/// Classifier artifact configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Path to the ONNX model file
    pub path: PathBuf,
    /// Number of threads for ONNX inference (default: 1)
    #[serde(default = "default_onnx_threads")]
    pub onnx_threads: usize,
}

fn default_onnx_threads() -> usize {
    1
}

/// Decorative banner shown above the form
#[derive(Debug, Clone, Deserialize)]
pub struct BannerConfig {
    /// Path to the PNG image
    pub path: PathBuf,
    /// Caption displayed under the image
    pub caption: String,
}

/// Interaction shell pacing
#[derive(Debug, Clone, Deserialize)]
pub struct ShellConfig {
    /// Number of celebration bursts before the legitimate verdict is shown
    pub celebration_bursts: u32,
    /// Pause between two bursts in milliseconds
    pub celebration_pause_ms: u64,
}

impl ShellConfig {
    pub fn celebration_pause(&self) -> Duration {
        Duration::from_millis(self.celebration_pause_ms)
    }
}

/// Metrics reporting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    /// Seconds between periodic summaries in the headless scorer (0 disables)
    pub report_interval_secs: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format (json, pretty)
    pub format: String,
}

impl AppConfig {
    /// Load configuration from the default file, falling back to built-in defaults
    pub fn load() -> Result<Self> {
        let file = File::from(Path::new(DEFAULT_CONFIG_PATH)).required(false);
        Self::build(defaults()?.add_source(file))
    }

    /// Load configuration from a specific path
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::build(defaults()?.add_source(File::from(path.as_ref())))
    }

    fn build(builder: ConfigBuilder<config::builder::DefaultState>) -> Result<Self> {
        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}

fn defaults() -> Result<ConfigBuilder<config::builder::DefaultState>> {
    let defaults = AppConfig::default();

    Config::builder()
        .set_default("model.path", defaults.model.path.to_string_lossy().into_owned())?
        .set_default("model.onnx_threads", defaults.model.onnx_threads as i64)?
        .set_default("banner.path", defaults.banner.path.to_string_lossy().into_owned())?
        .set_default("banner.caption", defaults.banner.caption)?
        .set_default("shell.celebration_bursts", i64::from(defaults.shell.celebration_bursts))?
        .set_default("shell.celebration_pause_ms", defaults.shell.celebration_pause_ms as i64)?
        .set_default("metrics.report_interval_secs", defaults.metrics.report_interval_secs as i64)?
        .set_default("logging.level", defaults.logging.level)?
        .set_default("logging.format", defaults.logging.format)
        .context("Failed to register configuration defaults")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model: ModelConfig {
                path: PathBuf::from("models/final_model.onnx"),
                onnx_threads: 1,
            },
            banner: BannerConfig {
                path: PathBuf::from("assets/home_banner.png"),
                caption: "Impacting the World of Finance and Banking with Artificial Intelligence (AI)"
                    .to_string(),
            },
            shell: ShellConfig {
                celebration_bursts: 3,
                celebration_pause_ms: 5000,
            },
            metrics: MetricsConfig {
                report_interval_secs: 30,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
            },
        }
    }
}
