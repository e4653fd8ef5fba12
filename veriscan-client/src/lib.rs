pub mod client;
pub mod error;
pub mod models;

// Re-export key types
pub use client::{AnalysisClient, DEFAULT_API_URL};
pub use error::ClientError;
pub use models::*;
