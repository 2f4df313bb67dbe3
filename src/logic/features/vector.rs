//! Feature Vector - The Classifier's Input
//!
//! **Versioned feature vector with layout validation**
//!
//! Uses the centralized schema from `layout.rs` for:
//! - Consistent column ordering
//! - Version tracking
//! - Layout hash for compatibility checks

use serde::{Deserialize, Serialize};

use super::layout::{
    layout_hash, validate_layout, LayoutMismatchError, FEATURE_COUNT, FEATURE_LAYOUT,
    SCHEMA_VERSION,
};

// ============================================================================
// VERSIONED FEATURE VECTOR
// ============================================================================

/// Versioned feature vector with layout metadata.
///
/// Built once per request by the encoder and handed to the classifier;
/// never mutated afterwards. Never pass a raw `Vec<f32>` across the
/// inference boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Schema version this vector was built against
    pub version: u8,
    /// CRC32 hash of the feature layout (for mismatch detection)
    pub layout_hash: u32,
    /// Column values in the order defined by FEATURE_LAYOUT
    #[serde(with = "values_serde")]
    pub values: [f32; FEATURE_COUNT],
}

// serde has no derive support for arrays this wide
mod values_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::FEATURE_COUNT;

    pub fn serialize<S: Serializer>(
        values: &[f32; FEATURE_COUNT],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        values.as_slice().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<[f32; FEATURE_COUNT], D::Error> {
        let values = Vec::<f32>::deserialize(deserializer)?;
        values
            .try_into()
            .map_err(|v: Vec<f32>| serde::de::Error::invalid_length(v.len(), &"45 column values"))
    }
}

impl FeatureVector {
    /// Create a new zeroed vector with the current schema version
    pub fn new() -> Self {
        Self {
            version: SCHEMA_VERSION,
            layout_hash: layout_hash(),
            values: [0.0; FEATURE_COUNT],
        }
    }

    /// Create from raw values with the current schema version
    pub fn from_values(values: [f32; FEATURE_COUNT]) -> Self {
        Self {
            version: SCHEMA_VERSION,
            layout_hash: layout_hash(),
            values,
        }
    }

    /// Get values as slice
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Get column value by index
    pub fn get(&self, index: usize) -> Option<f32> {
        self.values.get(index).copied()
    }

    /// Get column value by name
    pub fn get_by_name(&self, name: &str) -> Option<f32> {
        super::layout::feature_index(name).and_then(|i| self.get(i))
    }

    /// Set column by name. Returns false if the name is not part of the
    /// schema, which is how columns implied by encoding but absent from
    /// the trained layout get dropped.
    pub fn set_by_name(&mut self, name: &str, value: f32) -> bool {
        if let Some(index) = super::layout::feature_index(name) {
            self.values[index] = value;
            true
        } else {
            false
        }
    }

    /// Validate that this vector matches the current schema
    pub fn validate(&self) -> Result<(), LayoutMismatchError> {
        validate_layout(self.version, self.layout_hash)
    }

    /// Column names for this vector
    pub fn feature_names(&self) -> &'static [&'static str] {
        FEATURE_LAYOUT
    }

    /// Named values for logging
    pub fn to_log_entry(&self) -> serde_json::Value {
        serde_json::json!({
            "schema_version": self.version,
            "layout_hash": self.layout_hash,
            "named_values": FEATURE_LAYOUT.iter()
                .zip(self.values.iter())
                .map(|(name, value)| (name.to_string(), *value))
                .collect::<std::collections::HashMap<_, _>>(),
        })
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[f32; FEATURE_COUNT]> for FeatureVector {
    fn from(values: [f32; FEATURE_COUNT]) -> Self {
        Self::from_values(values)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed_and_current() {
        let vector = FeatureVector::new();
        assert!(vector.values.iter().all(|&v| v == 0.0));
        assert_eq!(vector.version, SCHEMA_VERSION);
        assert!(vector.validate().is_ok());
    }

    #[test]
    fn test_set_by_name_known_column() {
        let mut vector = FeatureVector::new();
        assert!(vector.set_by_name("Heart Rate", 70.0));
        assert_eq!(vector.get_by_name("Heart Rate"), Some(70.0));
    }

    #[test]
    fn test_set_by_name_drops_unknown_column() {
        let mut vector = FeatureVector::new();
        // Gender_Female was not retained in the trained schema
        assert!(!vector.set_by_name("Gender_Female", 1.0));
        assert!(vector.values.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_serde_round_trip() {
        let mut vector = FeatureVector::new();
        vector.set_by_name("Age", 30.0);
        vector.set_by_name("Blood Pressure_120/80", 1.0);
        let json = serde_json::to_string(&vector).unwrap();
        let back: FeatureVector = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vector);
    }

    #[test]
    fn test_deserialize_rejects_wrong_width() {
        let json = serde_json::json!({
            "version": SCHEMA_VERSION,
            "layout_hash": layout_hash(),
            "values": [1.0, 2.0, 3.0],
        });
        assert!(serde_json::from_value::<FeatureVector>(json).is_err());
    }

    #[test]
    fn test_stale_vector_fails_validation() {
        let mut vector = FeatureVector::new();
        vector.version = SCHEMA_VERSION.wrapping_add(1);
        assert!(vector.validate().is_err());
    }
}
