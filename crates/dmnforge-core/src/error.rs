//! Error types for dmnforge Core

use thiserror::Error;

/// Core error type
///
/// XML generation itself is infallible by design; errors only arise when
/// ingesting foreign data (e.g. JSON grids) into the core types.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
