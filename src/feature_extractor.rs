//! Feature extraction for fraud model inference.
//!
//! The classifier was trained on ten columns in a fixed order. Nothing in the
//! model artifact records that order, so it lives here as a named table and a
//! single function that writes each field into its slot.

use crate::types::request::PredictionRequest;

/// Number of model input columns
pub const FEATURE_COUNT: usize = 10;

/// Column names in the order the model expects them
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "card1",
    "card2",
    "card4",
    "card6",
    "addr1",
    "addr2",
    "TransactionAmt",
    "P_emaildomain",
    "ProductCD",
    "DeviceType",
];

/// Single-row model input
pub type FeatureVector = [f32; FEATURE_COUNT];

/// Transforms prediction requests into model input features.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureExtractor;

impl FeatureExtractor {
    /// Create a new feature extractor.
    pub fn new() -> Self {
        Self
    }

    /// Encode a request as one row of features, matching `FEATURE_NAMES`.
    pub fn extract(&self, request: &PredictionRequest) -> FeatureVector {
        [
            request.card1 as f32,
            request.card2 as f32,
            f32::from(request.card4.code()),
            f32::from(request.card6.code()),
            f32::from(request.addr1),
            f32::from(request.addr2),
            request.transaction_amt as f32,
            f32::from(request.p_emaildomain.code()),
            f32::from(request.product_cd.code()),
            f32::from(request.device_type.code()),
        ]
    }
}
