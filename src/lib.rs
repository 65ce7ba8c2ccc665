//! irsz - Hungarian postal code lookup table generator
//!
//! This library provides the row normalizer and the spreadsheet/JSON plumbing
//! used by the `convert` binary.

pub mod error;
pub mod models;
pub mod normalize;
pub mod output;
pub mod pipeline;
pub mod sheet;

pub use error::ConvertError;
pub use models::{Cell, LookupTable, RawRow};
pub use normalize::{normalize, Normalizer};
pub use pipeline::{convert, ConvertReport};
