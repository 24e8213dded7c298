/// Structured logging helpers built on tracing
pub mod logging;
/// Timezone normalization and validation
pub mod validation;
