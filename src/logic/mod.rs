//! Logic Module - Encoding & Inference Engines
//!
//! - `record` - raw patient record and its categorical domains
//! - `features` - alignment into the fixed 45-column schema
//! - `model` - inference adapter over the loaded classifier

pub mod features;
pub mod model;
pub mod record;
