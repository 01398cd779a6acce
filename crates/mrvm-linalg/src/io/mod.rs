//! Readers and writers for plain-text matrix files.
pub mod text_matrix;

pub use text_matrix::{count_columns, count_rows};
