//! Dense `Matrix` and `Vector` types.
//!
//! Both own a contiguous `Vec<f64>`. Numeric kernels (LU inversion, the
//! generalized multiply, column statistics) are delegated to `nalgebra`,
//! `ndarray` and `statrs` through the crate-private `backend` module.
pub(crate) mod backend;
pub mod matrix;
pub mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
