//! CSV import for well-test data.
//!
//! Field exports name their columns inconsistently (`Elapsed Time`, `dt`,
//! `WHP`, ...), so the reader takes a [`ColumnMap`] from import-specific
//! names to the canonical `{time, pressure, rate}` triple. Cells that are
//! empty or non-numeric become `None` in the emitted [`RawRow`]s — counted
//! by the validator, dropped by the preprocessor, never a hard error. Only
//! a missing required *column* is structural and errors out.

pub mod error;
pub mod reader;

pub use error::IoError;
pub use reader::{ColumnMap, read_rows, read_rows_from};
