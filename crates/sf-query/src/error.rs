use thiserror::Error;

use sf_core::{CoreError, GeoPoint, RecordIndex, StoreId};

/// Failures a query can signal instead of an outcome.
///
/// The two halves of the taxonomy are kept apart so a request layer can map
/// them differently: [`InvalidArgument`](Self::InvalidArgument) is the
/// caller's fault, everything else is the dataset's.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("data integrity violation: {id} (record {record}) has coordinates {pos}: {source}")]
    DataIntegrity {
        record: RecordIndex,
        id:     StoreId,
        pos:    GeoPoint,
        #[source]
        source: CoreError,
    },

    #[error("dataset has {len} records; at most {max} can be queried")]
    DatasetTooLarge { len: usize, max: usize },

    #[error("spatial index covers {indexed} records but the dataset has {dataset}")]
    IndexMismatch { indexed: usize, dataset: usize },
}

impl QueryError {
    /// `true` when the request itself was bad; `false` when the dataset or
    /// its index is at fault.
    pub fn is_client_error(&self) -> bool {
        matches!(self, QueryError::InvalidArgument(_))
    }
}

pub type QueryResult<T> = Result<T, QueryError>;
