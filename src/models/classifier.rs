//! Classifier abstraction and the ONNX Runtime implementation

use crate::feature_extractor::{FeatureVector, FEATURE_COUNT};
use anyhow::{Context, Result};
use ort::memory::Allocator;
use ort::session::Session;
use ort::value::{DowncastableTarget, DynMapValueType, DynSequenceValueType, Tensor};
use std::sync::Mutex;
use tracing::debug;

/// Class probabilities for one row, `[legitimate, fraud]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassProbabilities {
    /// Class 0 probability
    pub legitimate: f64,
    /// Class 1 probability
    pub fraud: f64,
}

impl ClassProbabilities {
    /// Build from a single class-1 probability.
    pub fn from_fraud(fraud: f64) -> Self {
        Self {
            legitimate: 1.0 - fraud,
            fraud,
        }
    }
}

/// A loaded model that can score one feature row.
pub trait Classifier: Send + Sync {
    /// Probabilities for classes `[legitimate, fraud]`, summing to 1.
    fn predict_proba(&self, features: &FeatureVector) -> Result<ClassProbabilities>;

    fn name(&self) -> &str;
}

/// Classifier backed by an ONNX Runtime session
pub struct OnnxClassifier {
    /// Model name (file stem)
    pub(crate) name: String,
    /// ONNX Runtime session, runs need exclusive access
    pub(crate) session: Mutex<Session>,
    /// Input name for the model
    pub(crate) input_name: String,
    /// Output name for probabilities
    pub(crate) output_name: String,
}

impl OnnxClassifier {
    /// Extract class probabilities from model output.
    /// Handles plain tensor outputs and the seq(map) output of zipmapped exports.
    fn extract_probabilities(
        &self,
        outputs: &ort::session::SessionOutputs,
    ) -> Result<ClassProbabilities> {
        if let Some(output) = outputs.get(self.output_name.as_str()) {
            if let Some(probs) = self.extract_from_value(output)? {
                return Ok(probs);
            }
        }

        for (name, output) in outputs.iter() {
            if name.contains("label") {
                continue;
            }
            if let Some(probs) = self.extract_from_value(&output)? {
                debug!(model = %self.name, output = %name, "Extracted probabilities (fallback)");
                return Ok(probs);
            }
        }

        anyhow::bail!("Model {} produced no probability output", self.name)
    }

    fn extract_from_value(
        &self,
        output: &ort::value::DynValue,
    ) -> Result<Option<ClassProbabilities>> {
        if let Ok((shape, data)) = output.try_extract_tensor::<f32>() {
            let dims: Vec<i64> = shape.iter().copied().collect();
            return probabilities_from_tensor(&dims, data).map(Some);
        }

        let dtype = output.dtype();
        if DynSequenceValueType::can_downcast(&dtype) {
            return self.extract_from_sequence_map(output).map(Some);
        }

        Ok(None)
    }

    /// Extract probabilities from seq(map(int64, float)) format
    fn extract_from_sequence_map(
        &self,
        output: &ort::value::DynValue,
    ) -> Result<ClassProbabilities> {
        let allocator = Allocator::default();

        let sequence = output
            .downcast_ref::<DynSequenceValueType>()
            .map_err(|e| anyhow::anyhow!("Failed to downcast to sequence: {}", e))?;

        let maps = sequence.try_extract_sequence::<DynMapValueType>(&allocator)?;
        let map_value = maps.first().context("Empty probability sequence")?;

        // Batch size is always 1, so only the first map matters
        let kv_pairs = map_value.try_extract_key_values::<i64, f32>()?;

        let class_prob = |class: i64| {
            kv_pairs
                .iter()
                .find(|(class_id, _)| *class_id == class)
                .map(|(_, prob)| f64::from(*prob))
        };

        match (class_prob(0), class_prob(1)) {
            (Some(legitimate), Some(fraud)) => Ok(ClassProbabilities { legitimate, fraud }),
            (None, Some(fraud)) => Ok(ClassProbabilities::from_fraud(fraud)),
            (Some(legitimate), None) => Ok(ClassProbabilities {
                legitimate,
                fraud: 1.0 - legitimate,
            }),
            (None, None) => anyhow::bail!("No class probability found in map"),
        }
    }
}

impl Classifier for OnnxClassifier {
    fn predict_proba(&self, features: &FeatureVector) -> Result<ClassProbabilities> {
        let shape = vec![1_i64, FEATURE_COUNT as i64];
        let input_tensor = Tensor::from_array((shape, features.to_vec()))
            .context("Failed to create input tensor")?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock error: {}", e))?;

        let outputs = session.run(ort::inputs![&self.input_name => input_tensor])?;
        let probs = self.extract_probabilities(&outputs)?;

        debug!(
            model = %self.name,
            legitimate = probs.legitimate,
            fraud = probs.fraud,
            "Model inference complete"
        );

        Ok(probs)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Read class probabilities from a `[1, classes]` or `[classes]` tensor.
fn probabilities_from_tensor(dims: &[i64], data: &[f32]) -> Result<ClassProbabilities> {
    let classes = dims.last().copied().unwrap_or(0);

    match (classes, data) {
        (c, [legitimate, fraud, ..]) if c >= 2 => Ok(ClassProbabilities {
            legitimate: f64::from(*legitimate),
            fraud: f64::from(*fraud),
        }),
        (1, [fraud, ..]) => Ok(ClassProbabilities::from_fraud(f64::from(*fraud))),
        _ => anyhow::bail!("Unexpected probability tensor shape {:?}", dims),
    }
}
