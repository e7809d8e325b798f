// Infrastructure layer modules
pub mod logging;

// Re-exports
pub use logging::{init_logging, log_filter, DEFAULT_LOG_LEVEL};
