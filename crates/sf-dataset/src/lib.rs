//! `sf-dataset` — loading store datasets from CSV.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                 |
//! |------------|----------------------------------------------------------|
//! | [`loader`] | `load_stores_csv`, `load_stores_reader`, `CsvOptions`    |
//! | [`error`]  | `DatasetError`, `DatasetResult<T>`                       |
//!
//! The loader is the only place untyped input becomes [`sf_core::Store`]
//! records.  Everything it returns has a unique id and in-range coordinates.

pub mod error;
pub mod loader;


pub use error::{DatasetError, DatasetResult};
pub use loader::{load_stores_csv, load_stores_reader, CsvOptions};
