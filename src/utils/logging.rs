use tracing::{error, info, warn};

/// Logs rejected requests with consistent format
pub fn log_request_rejected(path: &str, reason: &str) {
    warn!("REQUEST_REJECTED: {} - {}", path, reason);
}

/// Logs validation errors with consistent format
pub fn log_validation_error(field: &str, value: &str, error: &str) {
    warn!(
        "VALIDATION_ERROR: {} field '{}' invalid: {}",
        field, value, error
    );
}

/// Logs template rendering failures with consistent format
pub fn log_render_error(template: &str, error: &str) {
    error!("RENDER_ERROR: {} failed: {}", template, error);
}

/// Logs system events with consistent format
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}
