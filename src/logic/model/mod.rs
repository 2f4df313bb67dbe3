//! Model Module - Inference Adapter
//!
//! Wraps the pre-trained classifier artifact. The model is opaque: how it
//! was trained and how accurate it is are not this crate's concern.

pub mod inference;

// Re-export common types
pub use inference::{
    Classifier, DisorderLabel, InferenceError, ModelMetadata, ModelUnavailable, OnnxClassifier,
    PredictionResult,
};
