//! API Module - Request Boundary
//!
//! The surface the presentation layer talks to. One command: `predict`.

pub mod commands;

pub use commands::{predict, PredictionResponse};
