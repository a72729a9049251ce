//! `hll-sketch` is a Rust crate designed to estimate the number of distinct elements in a stream or dataset
//! using bounded memory.
//!
//! This library uses HyperLogLog with densely packed registers, linear counting for small cardinalities and
//! empirical bias correction for mid-range cardinalities, keeping relative error close to `1.04 / sqrt(2^P)`.
mod bias;
pub mod error;
pub mod estimator;
pub mod precision;
mod registers;
pub mod sketch;

pub use error::SketchError;
pub use estimator::{lower_bound, Correction};
pub use precision::{Precision, DEFAULT_PRECISION, MAX_PRECISION, MIN_PRECISION};
pub use sketch::Sketch;
