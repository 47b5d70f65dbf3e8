mod common;

use common::StubClassifier;
use fraud_prediction_form::config::AppConfig;
use fraud_prediction_form::models::Classifier;
use fraud_prediction_form::{AppState, PredictionRequest, StartupError};
use std::path::PathBuf;
use std::sync::Arc;

fn config_in(dir: &tempfile::TempDir) -> AppConfig {
    let mut config = AppConfig::default();
    config.model.path = dir.path().join("final_model.onnx");
    config.banner.path = dir.path().join("home_banner.png");
    config
}

#[test]
fn test_missing_model_halts_startup() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);
    let expected = config.model.path.clone();

    let err = AppState::bootstrap(config).err().unwrap();

    assert!(err.is_fatal());
    assert!(err.to_string().starts_with("Error loading model"));
    assert!(matches!(err, StartupError::ModelMissing { path } if path == expected));
}

#[test]
fn test_empty_model_halts_startup() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);
    std::fs::write(&config.model.path, b"").unwrap();

    let err = AppState::bootstrap(config).err().unwrap();

    assert!(matches!(err, StartupError::ModelEmpty { .. }));
}

#[test]
fn test_corrupt_model_halts_startup() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);
    std::fs::write(&config.model.path, b"not an onnx graph").unwrap();
    let expected = config.model.path.clone();

    let err = AppState::bootstrap(config).err().unwrap();

    assert!(err.is_fatal());
    assert!(err.to_string().starts_with("Error loading model"));
    assert!(matches!(err, StartupError::ModelLoad { path, .. } if path == expected));
}

#[test]
fn test_model_error_is_returned_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);

    let result = AppState::bootstrap_with(config, |model| {
        Err(StartupError::ModelLoad {
            path: model.path.clone(),
            reason: "bad graph".to_string(),
        })
    });

    let err = result.err().unwrap();
    assert!(err.is_fatal());
    assert!(err.to_string().contains("bad graph"));
}

#[test]
fn test_missing_banner_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);

    let state = AppState::bootstrap_with(config, |_| {
        Ok(Arc::new(StubClassifier::new(0.2)) as Arc<dyn Classifier>)
    })
    .unwrap();

    let reports = state.startup_reports();
    assert_eq!(reports.len(), 1);
    assert!(reports[0].starts_with("Error loading image"));
    assert!(state.banner.banner().is_none());

    let score = state.service.predict(&PredictionRequest::default()).unwrap();
    assert_eq!(score, 0.2);
}

#[test]
fn test_config_file_paths_feed_startup() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[model]\npath = \"no/such/model.onnx\"\n\n[logging]\nformat = \"json\"\n",
    )
    .unwrap();

    let config = AppConfig::load_from_path(&path).unwrap();
    assert_eq!(config.logging.format, "json");

    let err = AppState::bootstrap(config).err().unwrap();
    assert!(matches!(
        err,
        StartupError::ModelMissing { path } if path == PathBuf::from("no/such/model.onnx")
    ));
}
