//! Comparison: the bounded compared-property set, its persistence port,
//! and the derived comparison matrix.

pub mod matrix;
pub mod persister;
pub mod store;

pub use matrix::{build_matrix, CellValue, ColumnHeader, ComparisonMatrix, ComparisonRow};
pub use persister::{ComparePersister, NoPersister};
pub use store::{CompareOutcome, CompareStore, MAX_COMPARE};
