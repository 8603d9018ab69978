//! `sf-spatial` — spatial acceleration for radius queries.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                |
//! |-----------|---------------------------------------------------------|
//! | [`index`] | `StoreIndex` (R-tree over store positions)              |
//!
//! The index is purely an optimisation: it narrows the set of records a
//! query engine has to run the distance function on, and never decides
//! membership by itself.

pub mod index;

#[cfg(test)]
mod tests;

pub use index::StoreIndex;
