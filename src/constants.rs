//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change the default model location, only edit this file.

/// Default model artifact filename, resolved against the working directory
pub const DEFAULT_MODEL_PATH: &str = "sleep_disorder_model.onnx";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Sleep Screen";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get model artifact path from environment or use default
pub fn get_model_path() -> String {
    std::env::var("SLEEP_MODEL_PATH")
        .unwrap_or_else(|_| DEFAULT_MODEL_PATH.to_string())
}

/// Get log filter from environment or use default
pub fn get_log_filter() -> String {
    std::env::var("SLEEP_LOG")
        .unwrap_or_else(|_| "info".to_string())
}
