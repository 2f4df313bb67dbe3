//! Inference Adapter - ONNX Runtime Integration
//!
//! Wraps the pre-trained sleep disorder classifier behind the `Classifier`
//! trait. The artifact is loaded once at process start and injected into the
//! request path; nothing here mutates after load. The exported model follows
//! the usual scikit-learn-to-ONNX shape: output 0 is an int64 label tensor,
//! output 1 a `[1, 2]` float tensor of class probabilities.

use std::path::Path;

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::logic::features::{FeatureVector, FEATURE_COUNT};

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Binary prediction label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisorderLabel {
    NoDisorder,
    Disorder,
}

impl DisorderLabel {
    /// Map the classifier's integer class to a label
    pub fn from_class(class: i64) -> Self {
        if class == 0 {
            DisorderLabel::NoDisorder
        } else {
            DisorderLabel::Disorder
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DisorderLabel::NoDisorder => "No Sleep Disorder",
            DisorderLabel::Disorder => "Sleep Disorder",
        }
    }
}

/// Prediction output for one request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    pub label: DisorderLabel,
    /// Probability of the positive ("Disorder") class, in [0, 1]
    pub probability: f32,
}

/// Model metadata kept alongside the loaded session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub model_path: String,
    pub feature_count: usize,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Artifact missing or corrupt at startup. Fatal for the process.
#[derive(Debug)]
pub struct ModelUnavailable(pub String);

impl std::fmt::Display for ModelUnavailable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ModelUnavailable: {}", self.0)
    }
}

impl std::error::Error for ModelUnavailable {}

/// Per-request failure inside the classifier call. Caught at the request
/// boundary, never retried.
#[derive(Debug)]
pub struct InferenceError(pub String);

impl std::fmt::Display for InferenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InferenceError: {}", self.0)
    }
}

impl std::error::Error for InferenceError {}

// ============================================================================
// CLASSIFIER TRAIT
// ============================================================================

/// Capability of the pre-trained classifier: a binary label and the
/// probability it assigns to the positive class, over a 45-column vector.
pub trait Classifier {
    fn predict(&self, vector: &FeatureVector) -> Result<DisorderLabel, InferenceError>;
    fn predict_proba(&self, vector: &FeatureVector) -> Result<f32, InferenceError>;

    /// One request round trip: label plus positive-class probability.
    /// The label is the model's own decision, never re-derived from the
    /// probability here.
    fn run(&self, vector: &FeatureVector) -> Result<PredictionResult, InferenceError> {
        Ok(PredictionResult {
            label: self.predict(vector)?,
            probability: self.predict_proba(vector)?,
        })
    }
}

// ============================================================================
// ONNX IMPLEMENTATION
// ============================================================================

/// ONNX-backed classifier. `Session::run` needs `&mut`, so the session sits
/// behind a mutex while everything else stays immutable after load.
#[derive(Debug)]
pub struct OnnxClassifier {
    session: Mutex<Session>,
    output_names: Vec<String>,
    metadata: ModelMetadata,
}

impl OnnxClassifier {
    /// Load the model artifact. Called once at process start; failure here
    /// means no predictions are served for the process lifetime.
    pub fn load(model_path: &str) -> Result<Self, ModelUnavailable> {
        log::info!("Loading ONNX model from: {}", model_path);

        if !Path::new(model_path).exists() {
            return Err(ModelUnavailable(format!("Model not found: {}", model_path)));
        }

        let session = Session::builder()
            .map_err(|e| ModelUnavailable(format!("Failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| ModelUnavailable(format!("Failed to set optimization: {}", e)))?
            .commit_from_file(model_path)
            .map_err(|e| ModelUnavailable(format!("Failed to load model: {}", e)))?;

        let output_names: Vec<String> = session.outputs.iter().map(|o| o.name.clone()).collect();
        if output_names.is_empty() {
            return Err(ModelUnavailable("Model defines no outputs".to_string()));
        }

        log::info!("ONNX model loaded successfully ({} outputs)", output_names.len());

        Ok(Self {
            session: Mutex::new(session),
            output_names,
            metadata: ModelMetadata {
                model_path: model_path.to_string(),
                feature_count: FEATURE_COUNT,
                loaded_at: chrono::Utc::now(),
            },
        })
    }

    /// Metadata for status logging
    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    /// Run the session once, returning (class, positive-class probability)
    fn run_session(&self, vector: &FeatureVector) -> Result<(i64, f32), InferenceError> {
        vector
            .validate()
            .map_err(|e| InferenceError(e.to_string()))?;

        let input_array =
            Array2::<f32>::from_shape_vec((1, FEATURE_COUNT), vector.as_slice().to_vec())
                .map_err(|e| InferenceError(format!("Array error: {}", e)))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| InferenceError(format!("Tensor error: {}", e)))?;

        let mut session = self.session.lock();
        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| InferenceError(format!("Inference failed: {}", e)))?;

        // Output 0: label
        let label_output = outputs
            .get(self.output_names[0].as_str())
            .ok_or_else(|| InferenceError("No label output".to_string()))?;
        let class = match label_output.try_extract_tensor::<i64>() {
            Ok((_, data)) => *data
                .first()
                .ok_or_else(|| InferenceError("Empty label output".to_string()))?,
            Err(_) => {
                let (_, data) = label_output
                    .try_extract_tensor::<f32>()
                    .map_err(|e| InferenceError(format!("Label extract error: {}", e)))?;
                *data
                    .first()
                    .ok_or_else(|| InferenceError("Empty label output".to_string()))?
                    as i64
            }
        };

        // Output 1: class probabilities
        let proba_name = self
            .output_names
            .get(1)
            .ok_or_else(|| InferenceError("Model defines no probability output".to_string()))?;
        let proba_output = outputs
            .get(proba_name.as_str())
            .ok_or_else(|| InferenceError("No probability output".to_string()))?;
        let (_, proba) = proba_output
            .try_extract_tensor::<f32>()
            .map_err(|e| InferenceError(format!("Probability extract error: {}", e)))?;

        // [p_no_disorder, p_disorder] per row; a single value is already the
        // positive-class probability
        let probability = match proba.len() {
            0 => return Err(InferenceError("Empty probability output".to_string())),
            1 => proba[0],
            _ => proba[1],
        };

        Ok((class, probability.clamp(0.0, 1.0)))
    }
}

impl Classifier for OnnxClassifier {
    fn predict(&self, vector: &FeatureVector) -> Result<DisorderLabel, InferenceError> {
        let (class, _) = self.run_session(vector)?;
        Ok(DisorderLabel::from_class(class))
    }

    fn predict_proba(&self, vector: &FeatureVector) -> Result<f32, InferenceError> {
        let (_, probability) = self.run_session(vector)?;
        Ok(probability)
    }

    // One session run serves both halves of the contract
    fn run(&self, vector: &FeatureVector) -> Result<PredictionResult, InferenceError> {
        let (class, probability) = self.run_session(vector)?;
        Ok(PredictionResult {
            label: DisorderLabel::from_class(class),
            probability,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
