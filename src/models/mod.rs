//! Core data models for the postal code lookup.

pub mod cell;
pub mod lookup;

pub use cell::{Cell, RawRow};
pub use lookup::{LookupStats, LookupTable};
