use thiserror::Error;

use sf_core::{CoreError, StoreId};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("store CSV parse error at line {line}: {message}")]
    Parse { line: u64, message: String },

    #[error("store {id} at line {line}: {source}")]
    CoordinateOutOfRange {
        line:   u64,
        id:     StoreId,
        #[source]
        source: CoreError,
    },

    #[error("duplicate {id} at line {line}")]
    DuplicateId { id: StoreId, line: u64 },

    #[error("line {line}: datasets are limited to {max} stores")]
    TooManyStores { line: u64, max: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DatasetResult<T> = Result<T, DatasetError>;
