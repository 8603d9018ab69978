//! Coordinate validation errors.
//!
//! Sub-crates define their own error enums and wrap `CoreError` where a
//! coordinate check is part of their contract.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("latitude {0} outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

pub type CoreResult<T> = Result<T, CoreError>;
