//! Stub classifiers shared by the integration tests

#![allow(dead_code)]

use anyhow::{bail, Result};
use fraud_prediction_form::feature_extractor::FeatureVector;
use fraud_prediction_form::models::ClassProbabilities;
use fraud_prediction_form::Classifier;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Returns a fixed class-0 probability and counts calls
pub struct StubClassifier {
    legitimate: f64,
    calls: AtomicUsize,
}

impl StubClassifier {
    pub fn new(legitimate: f64) -> Self {
        Self {
            legitimate,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Classifier for StubClassifier {
    fn predict_proba(&self, _features: &FeatureVector) -> Result<ClassProbabilities> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(ClassProbabilities {
            legitimate: self.legitimate,
            fraud: 1.0 - self.legitimate,
        })
    }

    fn name(&self) -> &str {
        "stub"
    }
}

/// Remembers every row it was asked to score
pub struct RecordingClassifier {
    rows: Mutex<Vec<FeatureVector>>,
}

impl RecordingClassifier {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
        }
    }

    pub fn rows(&self) -> Vec<FeatureVector> {
        self.rows.lock().unwrap().clone()
    }
}

impl Classifier for RecordingClassifier {
    fn predict_proba(&self, features: &FeatureVector) -> Result<ClassProbabilities> {
        self.rows.lock().unwrap().push(*features);
        Ok(ClassProbabilities::from_fraud(0.5))
    }

    fn name(&self) -> &str {
        "recording"
    }
}

/// Fails every call
pub struct FailingClassifier {
    calls: AtomicUsize,
}

impl FailingClassifier {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Classifier for FailingClassifier {
    fn predict_proba(&self, _features: &FeatureVector) -> Result<ClassProbabilities> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        bail!("session run failed")
    }

    fn name(&self) -> &str {
        "failing"
    }
}
