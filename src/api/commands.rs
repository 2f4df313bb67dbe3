//! Request Boundary - Encode-Then-Infer Round Trip
//!
//! One stateless round trip per request: raw record in, rendered prediction
//! out. Per-request failures stop here and become a message for the caller;
//! they are never retried and never take the process down.

use serde::{Deserialize, Serialize};

use crate::logic::features::encode;
use crate::logic::model::{Classifier, DisorderLabel, InferenceError};
use crate::logic::record::RawRecord;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Prediction rendered for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// "Sleep Disorder" or "No Sleep Disorder"
    pub label: String,
    /// Probability of a sleep disorder, in [0, 1]
    pub probability: f32,
    /// Probability formatted to 2 decimal places
    pub probability_text: String,
    /// Advisory text for the user
    pub message: String,
}

// ============================================================================
// COMMANDS
// ============================================================================

/// Run one prediction request: clamp, encode, infer, render.
pub fn predict(
    classifier: &dyn Classifier,
    record: RawRecord,
) -> Result<PredictionResponse, InferenceError> {
    let record = record.clamped();
    let vector = encode(&record);

    log::debug!("Encoded request: {}", vector.to_log_entry());

    let result = classifier.run(&vector)?;

    let message = match result.label {
        DisorderLabel::Disorder => {
            "This individual is likely to have a sleep disorder. Consider consulting a specialist."
        }
        DisorderLabel::NoDisorder => "This individual is unlikely to have a sleep disorder.",
    };

    Ok(PredictionResponse {
        label: result.label.as_str().to_string(),
        probability: result.probability,
        probability_text: format!("{:.2}", result.probability),
        message: message.to_string(),
    })
}

// ============================================================================
// TESTS
// ============================================================================
