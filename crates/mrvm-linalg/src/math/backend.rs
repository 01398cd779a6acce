//! Thin marshaling layer over the numeric crates.
//!
//! Every function takes and returns row-major `f64` buffers. LU inversion is
//! done by `nalgebra`, the generalized multiply by `ndarray`, and column
//! statistics by `statrs`.
use nalgebra::DMatrix;
use ndarray::linalg::general_mat_mul;
use ndarray::{ArrayView2, ArrayViewMut2};
use statrs::statistics::Statistics;

use crate::error::{MatrixError, Result};

fn view(data: &[f64], rows: usize, cols: usize) -> Result<ArrayView2<'_, f64>> {
    ArrayView2::from_shape((rows, cols), data).map_err(|_| MatrixError::Shape {
        rows,
        cols,
        len: data.len(),
    })
}

/// Invert an `n x n` row-major matrix through an LU decomposition with
/// partial pivoting.
pub(crate) fn lu_invert(data: &[f64], n: usize) -> Result<Vec<f64>> {
    if data.len() != n * n {
        return Err(MatrixError::Shape {
            rows: n,
            cols: n,
            len: data.len(),
        });
    }
    let working = DMatrix::from_row_slice(n, n, data);
    let lu = working.lu();
    log::trace!("LU decomposition of {}x{} matrix done", n, n);
    let inverse = lu.try_inverse().ok_or(MatrixError::Singular)?;

    // nalgebra stores column-major
    let mut out = Vec::with_capacity(n * n);
    for row in 0..n {
        for col in 0..n {
            out.push(inverse[(row, col)]);
        }
    }
    Ok(out)
}

/// `C = alpha * A * B^T + beta * C` with `A: m x k`, `B: n x k`, `C: m x n`.
///
/// `c` must already hold `m * n` values; pass `beta = 0.0` to overwrite it.
#[allow(clippy::too_many_arguments)]
pub(crate) fn gemm_nt(
    alpha: f64,
    a: &[f64],
    m: usize,
    k: usize,
    b: &[f64],
    n: usize,
    beta: f64,
    c: &mut [f64],
) -> Result<()> {
    let a = view(a, m, k)?;
    let b = view(b, n, k)?;
    let c_len = c.len();
    let mut c = ArrayViewMut2::from_shape((m, n), c).map_err(|_| MatrixError::Shape {
        rows: m,
        cols: n,
        len: c_len,
    })?;
    log::trace!("gemm (NoTrans, Trans): m={}, n={}, k={}", m, n, k);
    general_mat_mul(alpha, &a, &b.t(), beta, &mut c);
    Ok(())
}

/// Convenience wrapper around [`gemm_nt`] that allocates the output.
pub(crate) fn multiply_nt(a: &[f64], m: usize, k: usize, b: &[f64], n: usize) -> Result<Vec<f64>> {
    let mut out = vec![0.0; m * n];
    gemm_nt(1.0, a, m, k, b, n, 0.0, &mut out)?;
    Ok(out)
}

pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().mean()
}

/// Sample standard deviation (`n - 1` denominator). `NaN` for fewer than two values.
pub(crate) fn std_dev(values: &[f64]) -> f64 {
    values.iter().std_dev()
}
