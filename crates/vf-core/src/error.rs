//! Error types for VitalForge

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum VfError {
    #[error("Invalid parameter: {0}")]
    InvalidParam(String),
}

/// Result type alias
pub type VfResult<T> = Result<T, VfError>;
