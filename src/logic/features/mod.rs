//! Features Module - Encoding Engine
//!
//! Maps one raw patient record into the fixed 45-column vector the trained
//! classifier expects. The schema lives in `layout`, the encoding rules in
//! `encode`; nothing outside this module knows column positions.

pub mod encode;
pub mod layout;
pub mod vector;

#[cfg(test)]
mod tests;

// Re-export common types
pub use encode::encode;
pub use layout::{layout_hash, LayoutInfo, FEATURE_COUNT, FEATURE_LAYOUT, SCHEMA_VERSION};
pub use vector::FeatureVector;
