//! Provide traits for the different stages of the inference pipeline
//!
//! Every stage consumes either a single observation (`ArrayBase<_, Ix1>`) or a
//! batch of observations with one row per observation (`ArrayBase<_, Ix2>`).
use crate::error::Result;

/// Transformation of records
///
/// A transformer maps records to a new representation, for example scaled or
/// projected records.
pub trait Transformer<R, T> {
    fn transform(&self, x: R) -> Result<T>;
}

/// Predict a cluster membership for records
pub trait Predict<R, T> {
    fn predict(&self, x: R) -> Result<T>;
}
