pub mod config;
pub mod convert;
pub mod error;
pub mod export;
pub mod extract;
pub mod models;
pub mod utils;

// Re-export error types for convenience
pub use error::ArcmarksError;
pub use export::serialize;
pub use extract::extract;
