//! Feature Encoder - RawRecord to FeatureVector Alignment
//!
//! One-hot encodes the categorical fields against the training-time domains
//! and copies the numeric fields into their named slots, in the exact order
//! `layout::FEATURE_LAYOUT` defines.
//!
//! Total function: never fails on a well-formed record. An out-of-domain
//! categorical value leaves its whole indicator group all-zero, the same way
//! the model saw unseen categories at training time. That silently absorbs
//! data-entry errors (a typoed blood pressure reading becomes "none of the
//! known readings"), which is kept on purpose for compatibility with the
//! trained artifact.

use crate::logic::record::RawRecord;

use super::vector::FeatureVector;

/// Encode a raw record into the fixed 45-column feature vector.
pub fn encode(record: &RawRecord) -> FeatureVector {
    let mut vector = FeatureVector::new();

    // Continuous / ordinal slots
    vector.set_by_name("Age", record.age as f32);
    vector.set_by_name("Sleep Duration", record.sleep_duration);
    vector.set_by_name("Quality of Sleep", record.quality_of_sleep as f32);
    vector.set_by_name("Physical Activity Level", record.physical_activity_level as f32);
    vector.set_by_name("Stress Level", record.stress_level as f32);
    vector.set_by_name("Heart Rate", record.heart_rate as f32);
    vector.set_by_name("Daily Steps", record.daily_steps as f32);

    // One-hot indicator groups
    set_indicator(&mut vector, "Gender", record.gender.label());
    set_indicator(&mut vector, "Occupation", record.occupation.label());
    set_indicator(&mut vector, "BMI Category", record.bmi_category.label());
    set_indicator(&mut vector, "Blood Pressure", record.blood_pressure.label());

    vector
}

/// Set the `<group>_<value>` indicator column to 1.
///
/// Two silent outcomes are part of the contract:
/// - `value` is `None` (out-of-domain input): the group stays all-zero.
/// - The column is not in the trained schema (e.g. `Gender_Female`): dropped.
fn set_indicator(vector: &mut FeatureVector, group: &str, value: Option<&str>) {
    match value {
        Some(value) => {
            let column = format!("{}_{}", group, value);
            if !vector.set_by_name(&column, 1.0) {
                log::debug!("Indicator column '{}' not in schema, dropped", column);
            }
        }
        None => {
            log::warn!(
                "Out-of-domain {} value, indicator group left all-zero",
                group
            );
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
