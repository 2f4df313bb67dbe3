//! Feature Layout - Centralized Schema Definition
//!
//! **CRITICAL: This file controls the feature schema**
//!
//! The column names and their order are exactly what the classifier was
//! trained on. A reordered or missing column does not fail loudly, it
//! silently corrupts every prediction. Rules:
//! 1. Add column → increment SCHEMA_VERSION
//! 2. Change order → increment SCHEMA_VERSION
//! 3. Remove column → increment SCHEMA_VERSION
//!
//! The layout hash lets a vector built against a stale schema be detected
//! at runtime instead of silently mis-scoring.

use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

// ============================================================================
// SCHEMA VERSION
// ============================================================================

/// Current schema version, incremented on any layout change
pub const SCHEMA_VERSION: u8 = 1;

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// Column names in the exact order the classifier expects.
/// This is the SINGLE SOURCE OF TRUTH for the feature schema.
pub const FEATURE_LAYOUT: &[&str] = &[
    // === Continuous / ordinal (0-6) ===
    "Age",
    "Sleep Duration",
    "Quality of Sleep",
    "Physical Activity Level",
    "Stress Level",
    "Heart Rate",
    "Daily Steps",
    // === Gender indicator (7) ===
    // Only the Male column was retained at training time
    "Gender_Male",
    // === Occupation indicators (8-17) ===
    "Occupation_Doctor",
    "Occupation_Engineer",
    "Occupation_Lawyer",
    "Occupation_Manager",
    "Occupation_Nurse",
    "Occupation_Sales Representative",
    "Occupation_Salesperson",
    "Occupation_Scientist",
    "Occupation_Software Engineer",
    "Occupation_Teacher",
    // === BMI category indicators (18-20) ===
    "BMI Category_Normal Weight",
    "BMI Category_Obese",
    "BMI Category_Overweight",
    // === Blood pressure indicators (21-44) ===
    "Blood Pressure_115/78",
    "Blood Pressure_117/76",
    "Blood Pressure_118/75",
    "Blood Pressure_118/76",
    "Blood Pressure_119/77",
    "Blood Pressure_120/80",
    "Blood Pressure_121/79",
    "Blood Pressure_122/80",
    "Blood Pressure_125/80",
    "Blood Pressure_125/82",
    "Blood Pressure_126/83",
    "Blood Pressure_128/84",
    "Blood Pressure_128/85",
    "Blood Pressure_129/84",
    "Blood Pressure_130/85",
    "Blood Pressure_130/86",
    "Blood Pressure_131/86",
    "Blood Pressure_132/87",
    "Blood Pressure_135/88",
    "Blood Pressure_135/90",
    "Blood Pressure_139/91",
    "Blood Pressure_140/90",
    "Blood Pressure_140/95",
    "Blood Pressure_142/92",
];

/// Total number of feature columns
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 45;

/// Number of continuous/ordinal columns at the front of the layout
pub const NUMERIC_COUNT: usize = 7;

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// Compute CRC32 hash of the feature layout.
/// Used to detect layout mismatches at runtime.
pub fn compute_layout_hash() -> u32 {
    let mut hasher = Hasher::new();

    // Include version in hash
    hasher.update(&[SCHEMA_VERSION]);

    // Hash all column names in order
    for name in FEATURE_LAYOUT {
        hasher.update(name.as_bytes());
        hasher.update(&[0]); // Separator
    }

    hasher.finalize()
}

/// Get layout hash
pub fn layout_hash() -> u32 {
    compute_layout_hash()
}

// ============================================================================
// LAYOUT INFO
// ============================================================================

/// Complete layout information for serialization/logging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutInfo {
    pub version: u8,
    pub hash: u32,
    pub feature_count: usize,
    pub feature_names: Vec<String>,
}

impl LayoutInfo {
    pub fn current() -> Self {
        Self {
            version: SCHEMA_VERSION,
            hash: layout_hash(),
            feature_count: FEATURE_COUNT,
            feature_names: FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for LayoutInfo {
    fn default() -> Self {
        Self::current()
    }
}

// ============================================================================
// LAYOUT VALIDATION
// ============================================================================

/// Error when a vector's layout doesn't match the current schema
#[derive(Debug, Clone)]
pub struct LayoutMismatchError {
    pub expected_version: u8,
    pub expected_hash: u32,
    pub actual_version: u8,
    pub actual_hash: u32,
}

impl std::fmt::Display for LayoutMismatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Feature layout mismatch: expected v{} (hash: {:08x}), got v{} (hash: {:08x})",
            self.expected_version, self.expected_hash, self.actual_version, self.actual_hash
        )
    }
}

impl std::error::Error for LayoutMismatchError {}

/// Validate that incoming data matches the current layout
pub fn validate_layout(incoming_version: u8, incoming_hash: u32) -> Result<(), LayoutMismatchError> {
    let current_hash = layout_hash();

    if incoming_version != SCHEMA_VERSION || incoming_hash != current_hash {
        return Err(LayoutMismatchError {
            expected_version: SCHEMA_VERSION,
            expected_hash: current_hash,
            actual_version: incoming_version,
            actual_hash: incoming_hash,
        });
    }

    Ok(())
}

// ============================================================================
// FEATURE INDEX LOOKUP
// ============================================================================

/// Get column index by name (O(n) but the schema is small)
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}

/// Get column name by index
pub fn feature_name(index: usize) -> Option<&'static str> {
    FEATURE_LAYOUT.get(index).copied()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_count() {
        assert_eq!(FEATURE_COUNT, 45);
        assert_eq!(FEATURE_LAYOUT.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_no_duplicate_columns() {
        for (i, a) in FEATURE_LAYOUT.iter().enumerate() {
            for b in &FEATURE_LAYOUT[i + 1..] {
                assert_ne!(a, b, "duplicate column name: {}", a);
            }
        }
    }

    #[test]
    fn test_numeric_columns_lead() {
        assert_eq!(feature_index("Age"), Some(0));
        assert_eq!(feature_index("Daily Steps"), Some(NUMERIC_COUNT - 1));
        assert_eq!(feature_index("Gender_Male"), Some(NUMERIC_COUNT));
    }

    #[test]
    fn test_indicator_group_sizes() {
        let count = |prefix: &str| {
            FEATURE_LAYOUT
                .iter()
                .filter(|n| n.starts_with(prefix))
                .count()
        };
        assert_eq!(count("Gender_"), 1);
        assert_eq!(count("Occupation_"), 10);
        assert_eq!(count("BMI Category_"), 3);
        assert_eq!(count("Blood Pressure_"), 24);
    }

    #[test]
    fn test_layout_hash_consistency() {
        // Hash should be consistent across calls
        let hash1 = compute_layout_hash();
        let hash2 = compute_layout_hash();
        assert_eq!(hash1, hash2);
    }

    #[test]
    fn test_layout_hash_non_zero() {
        assert_ne!(layout_hash(), 0);
    }

    #[test]
    fn test_validate_layout_success() {
        assert!(validate_layout(SCHEMA_VERSION, layout_hash()).is_ok());
    }

    #[test]
    fn test_validate_layout_rejects_stale() {
        assert!(validate_layout(SCHEMA_VERSION + 1, layout_hash()).is_err());
        assert!(validate_layout(SCHEMA_VERSION, layout_hash() ^ 1).is_err());
    }

    #[test]
    fn test_feature_name_lookup() {
        assert_eq!(feature_name(0), Some("Age"));
        assert_eq!(feature_name(44), Some("Blood Pressure_142/92"));
        assert_eq!(feature_name(45), None);
    }
}
