//! Core data model for pressure-transient (well test) analysis.
//!
//! This crate defines the types shared by every pipeline stage:
//!
//! - [`RawRow`] — an imported record before validation, where `time` and
//!   `pressure` may be missing or non-numeric.
//! - [`TestPoint`] — a single clean measurement.
//! - [`TestSeries`] — a column-oriented series with enforced invariants
//!   (strictly increasing time, all times positive and finite).
//! - [`ExclusionRange`] — a closed time interval flagged for removal.
//!
//! `TestSeries` can only be built through its checked constructor, so any
//! series handed to the derivative or regime stages already satisfies the
//! invariants those stages rely on.

pub mod error;
pub mod exclusion;
pub mod point;
pub mod series;

pub use error::SeriesError;
pub use exclusion::ExclusionRange;
pub use point::{RawRow, TestPoint};
pub use series::TestSeries;
