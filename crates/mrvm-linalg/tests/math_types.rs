//! Integration tests for the Matrix and Vector types.

use mrvm_linalg::error::Axis;
use mrvm_linalg::{Matrix, MatrixError, Vector};

// ---------------------------------------------------------------------------
// Vector basics
// ---------------------------------------------------------------------------

#[test]
fn vector_zeros_and_len() {
    let v = Vector::zeros(4);
    assert_eq!(v.len(), 4);
    assert!(!v.is_empty());
    assert!(v.iter().all(|&x| x == 0.0));
}

#[test]
fn vector_from_slice_copies() {
    let mut raw = vec![1.0, 2.0, 3.0];
    let v = Vector::from_slice(&raw);
    raw[0] = 99.0;
    assert_eq!(v.to_vec(), vec![1.0, 2.0, 3.0]);
}

#[test]
fn vector_checked_get_set() {
    let mut v = Vector::from_vec(vec![1.0, 2.0]);
    v.set(1, 5.0).unwrap();
    assert_eq!(v.get(1).unwrap(), 5.0);
    assert!(matches!(
        v.get(2),
        Err(MatrixError::IndexOutOfBounds { index: 2, bound: 2, .. })
    ));
    assert!(v.set(7, 0.0).is_err());
}

#[test]
fn vector_dot_requires_equal_length() {
    let a = Vector::from_vec(vec![1.0, 2.0, 3.0]);
    let b = Vector::from_vec(vec![4.0, 5.0, 6.0]);
    assert_eq!(a.dot(&b).unwrap(), 32.0);
    assert!(a.dot(&Vector::zeros(2)).is_err());
}

#[test]
fn vector_display_two_decimals() {
    let v = Vector::from_vec(vec![1.0, -0.5, 2.346]);
    assert_eq!(v.to_string(), "1.00 -0.50 2.35 \n");
}

// ---------------------------------------------------------------------------
// Matrix construction
// ---------------------------------------------------------------------------

#[test]
fn matrix_new_is_zeroed() {
    let m = Matrix::new(2, 3).unwrap();
    assert_eq!(m.shape(), (2, 3));
    assert!(m.as_slice().iter().all(|&x| x == 0.0));
}

#[test]
fn matrix_from_slice_is_row_major() {
    let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let m = Matrix::from_slice(&data, 2, 3).unwrap();
    for row in 0..2 {
        for col in 0..3 {
            assert_eq!(m.get(row, col).unwrap(), data[row * 3 + col]);
        }
    }
}

#[test]
fn matrix_shape_mismatch_errors() {
    let result = Matrix::from_shape_vec((2, 3), vec![1.0, 2.0, 3.0]);
    assert!(matches!(
        result,
        Err(MatrixError::Shape { rows: 2, cols: 3, len: 3 })
    ));
}

#[test]
fn matrix_from_diagonal() {
    let m = Matrix::from_diagonal(&Vector::from_vec(vec![2.0, 3.0, 5.0])).unwrap();
    assert_eq!(m.shape(), (3, 3));
    for row in 0..3 {
        for col in 0..3 {
            let expected = match (row, col) {
                (0, 0) => 2.0,
                (1, 1) => 3.0,
                (2, 2) => 5.0,
                _ => 0.0,
            };
            assert_eq!(m[(row, col)], expected);
        }
    }
}

#[test]
fn matrix_from_empty_diagonal_errors() {
    assert!(Matrix::from_diagonal(&Vector::zeros(0)).is_err());
}

#[test]
fn clone_is_independent() {
    let m = Matrix::from_slice(&[1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
    let mut c = m.clone();
    assert_eq!(c, m);
    c.set(0, 0, 42.0).unwrap();
    assert_eq!(m.get(0, 0).unwrap(), 1.0);
    assert_eq!(c.get(0, 0).unwrap(), 42.0);
}

// ---------------------------------------------------------------------------
// Element, row and column access
// ---------------------------------------------------------------------------

#[test]
fn checked_access_reports_axis() {
    let mut m = Matrix::new(2, 3).unwrap();
    assert!(matches!(
        m.get(2, 0),
        Err(MatrixError::IndexOutOfBounds { axis: Axis::Row, index: 2, bound: 2 })
    ));
    assert!(matches!(
        m.set(0, 3, 1.0),
        Err(MatrixError::IndexOutOfBounds { axis: Axis::Column, index: 3, bound: 3 })
    ));
}

#[test]
fn row_and_column_are_copies() {
    let mut m = Matrix::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3, 2).unwrap();
    let row = m.row(1).unwrap();
    let col = m.column(1).unwrap();
    assert_eq!(row.to_vec(), vec![3.0, 4.0]);
    assert_eq!(col.to_vec(), vec![2.0, 4.0, 6.0]);

    m.set(1, 1, -1.0).unwrap();
    assert_eq!(row[1], 4.0);
    assert_eq!(col[1], 4.0);
}

#[test]
fn row_and_column_out_of_range() {
    let m = Matrix::new(2, 2).unwrap();
    assert!(m.row(2).is_err());
    assert!(m.column(5).is_err());
}

#[test]
fn set_row_with_own_row_is_identity() {
    let mut m = Matrix::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
    let before = m.clone();
    for i in 0..m.height() {
        let row = m.row(i).unwrap();
        m.set_row(i, &row).unwrap();
    }
    assert_eq!(m, before);
}

#[test]
fn set_row_and_set_column_overwrite() {
    let mut m = Matrix::new(2, 3).unwrap();
    m.set_row(0, &Vector::from_vec(vec![1.0, 2.0, 3.0])).unwrap();
    m.set_column(2, &Vector::from_vec(vec![7.0, 8.0])).unwrap();
    assert_eq!(m.as_slice(), &[1.0, 2.0, 7.0, 0.0, 0.0, 8.0]);
}

#[test]
fn set_row_length_mismatch_leaves_matrix_untouched() {
    let mut m = Matrix::from_slice(&[1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
    let before = m.clone();
    assert!(matches!(
        m.set_row(0, &Vector::zeros(3)),
        Err(MatrixError::DimensionMismatch { op: "set_row", .. })
    ));
    assert!(matches!(
        m.set_column(0, &Vector::zeros(1)),
        Err(MatrixError::DimensionMismatch { op: "set_column", .. })
    ));
    assert_eq!(m, before);
}

#[test]
fn add_is_elementwise() {
    let mut a = Matrix::from_slice(&[1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
    let b = Matrix::from_slice(&[10.0, 20.0, 30.0, 40.0], 2, 2).unwrap();
    a.add(&b).unwrap();
    assert_eq!(a.as_slice(), &[11.0, 22.0, 33.0, 44.0]);
}

#[test]
fn add_shape_mismatch_errors() {
    let mut a = Matrix::new(2, 2).unwrap();
    let b = Matrix::new(2, 3).unwrap();
    assert!(matches!(
        a.add(&b),
        Err(MatrixError::DimensionMismatch { op: "add", expected: (2, 2), found: (2, 3) })
    ));
}

#[test]
fn transpose_swaps_axes() {
    let m = Matrix::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
    let t = m.transpose();
    assert_eq!(t.shape(), (3, 2));
    assert_eq!(t.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
}
