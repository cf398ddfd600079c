//! Numeric and collection helpers shared by the primitives crates.
//!
//! - [`numbers`]: conversions between base units and decimal strings, float
//!   rounding and formatting
//! - [`slice`]: fixed-size batching of item lists

pub mod error;
pub mod numbers;
pub mod slice;

pub use error::UtilsError;
pub use slice::Batch;
