//! Prediction service: request in, rounded legitimate-class probability out

use crate::feature_extractor::FeatureExtractor;
use crate::metrics::PredictionMetrics;
use crate::models::cache::{CacheKey, PredictionCache};
use crate::models::classifier::Classifier;
use crate::types::request::PredictionRequest;
use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error};

/// Scores prediction requests against a loaded classifier, memoizing results.
pub struct PredictionService {
    classifier: Arc<dyn Classifier>,
    extractor: FeatureExtractor,
    cache: Arc<PredictionCache>,
    metrics: Arc<PredictionMetrics>,
}

impl PredictionService {
    /// Create a service with its own cache and metrics
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self::with_parts(
            classifier,
            Arc::new(PredictionCache::new()),
            Arc::new(PredictionMetrics::new()),
        )
    }

    /// Create a service around an existing cache and metrics collector
    pub fn with_parts(
        classifier: Arc<dyn Classifier>,
        cache: Arc<PredictionCache>,
        metrics: Arc<PredictionMetrics>,
    ) -> Self {
        Self {
            classifier,
            extractor: FeatureExtractor::new(),
            cache,
            metrics,
        }
    }

    /// Legitimate-class probability for `request`, rounded to 2 decimals.
    ///
    /// Identical requests are answered from the cache without calling the
    /// model. Model errors propagate and are not cached.
    pub fn predict(&self, request: &PredictionRequest) -> Result<f64> {
        let start = Instant::now();
        let key = CacheKey::new(request);

        if let Some(score) = self.cache.get(&key) {
            self.metrics.record_prediction(start.elapsed(), score, true);
            debug!(score = score, "Prediction served from cache");
            return Ok(score);
        }

        let features = self.extractor.extract(request);
        self.metrics.record_model_invocation();

        let probs = match self.classifier.predict_proba(&features) {
            Ok(probs) => probs,
            Err(e) => {
                self.metrics.record_model_failure();
                error!(model = %self.classifier.name(), error = %e, "Model inference failed");
                return Err(e);
            }
        };

        let score = round_score(probs.legitimate)?;
        let score = self.cache.insert(key, score);

        let latency = start.elapsed();
        self.metrics.record_prediction(latency, score, false);
        debug!(
            model = %self.classifier.name(),
            score = score,
            latency_us = latency.as_micros() as u64,
            "Prediction computed"
        );

        Ok(score)
    }

    pub fn classifier_name(&self) -> &str {
        self.classifier.name()
    }

    pub fn cache(&self) -> &Arc<PredictionCache> {
        &self.cache
    }

    pub fn metrics(&self) -> &Arc<PredictionMetrics> {
        &self.metrics
    }
}

/// Round a probability to 2 decimals the way fixed-point formatting does.
fn round_score(probability: f64) -> Result<f64> {
    format!("{:.2}", probability)
        .parse::<f64>()
        .context("Failed to round prediction score")
}
