//! Sleep Screen - Main Entry Point
//!
//! Bootstrap order matters: logger first, then the model artifact. A missing
//! or corrupt artifact halts the process before any input is read; there is
//! no degraded mode without a model.

mod api;
mod logic;
pub mod constants;

use std::io::{self, BufRead, Write};

use logic::model::{Classifier, OnnxClassifier};
use logic::record::RawRecord;

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(constants::get_log_filter()),
    )
    .init();

    log::info!("Starting {} v{}...", constants::APP_NAME, constants::APP_VERSION);

    let layout = logic::features::LayoutInfo::current();
    log::info!(
        "Feature schema v{} ({} columns, hash {:08x})",
        layout.version,
        layout.feature_count,
        layout.hash
    );

    let model_path = constants::get_model_path();
    let classifier = match OnnxClassifier::load(&model_path) {
        Ok(classifier) => classifier,
        Err(e) => {
            log::error!("{}", e);
            log::error!("No predictions can be served; exiting");
            std::process::exit(1);
        }
    };
    log::info!(
        "Model ready: {} ({} features, loaded at {})",
        classifier.metadata().model_path,
        classifier.metadata().feature_count,
        classifier.metadata().loaded_at
    );

    serve(&classifier);
}

/// Request loop: one JSON record per stdin line, one JSON response per line.
/// Malformed lines and failed predictions produce an error line; only the
/// end of input (or a broken pipe) ends the loop.
fn serve(classifier: &dyn Classifier) {
    let stdin = io::stdin();
    let stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("Failed to read input: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<RawRecord>(&line) {
            Ok(record) => match api::predict(classifier, record) {
                Ok(response) => serde_json::json!(response),
                Err(e) => {
                    log::warn!("{}", e);
                    serde_json::json!({ "error": format!("Prediction failed: {}", e) })
                }
            },
            Err(e) => serde_json::json!({ "error": format!("Malformed record: {}", e) }),
        };

        let mut out = stdout.lock();
        if writeln!(out, "{}", response).is_err() {
            break;
        }
    }

    log::info!("Input closed, shutting down");
}
