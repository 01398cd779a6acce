//! mrvm-linalg: dense matrix and vector types for statistical preprocessing.
//!
//! The crate provides an owned, row-major `Matrix` and its companion
//! `Vector`, construction from buffers, diagonals or whitespace-delimited
//! text files, LU-based inversion, a transpose-on-the-right multiply, and
//! per-column standardization ("sphering").
//!
//! Numeric kernels are delegated to `nalgebra`, `ndarray` and `statrs`; this
//! crate only marshals row-major data in and out of them.
pub mod config;
pub mod error;
pub mod io;
pub mod math;
pub mod preprocessing;

pub use error::{MatrixError, Result};
pub use math::{Matrix, Vector};
