use std::fmt;
use std::fs::File;
use std::io::{self, Read, Seek, Write};
use std::ops::{Index, IndexMut};
use std::path::Path;

use crate::error::{Axis, MatrixError, Result};
use crate::io::text_matrix;
use crate::math::backend;
use crate::math::vector::Vector;

/// Dense row-major matrix of `f64`.
///
/// A `Matrix` exclusively owns its storage and `clone()` is always a deep
/// copy. It is not synchronized: sharing one across threads for mutation
/// needs an external lock.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

fn check_dims(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(MatrixError::EmptyDimension { rows, cols });
    }
    rows.checked_mul(cols)
        .ok_or(MatrixError::Allocation { rows, cols })
}

impl Matrix {
    /// Allocate a zero-filled `height x width` matrix.
    pub fn new(height: usize, width: usize) -> Result<Self> {
        let len = check_dims(height, width)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| MatrixError::Allocation {
                rows: height,
                cols: width,
            })?;
        data.resize(len, 0.0);
        Ok(Self {
            data,
            rows: height,
            cols: width,
        })
    }

    /// Take ownership of a row-major buffer.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<f64>) -> Result<Self> {
        let (rows, cols) = shape;
        let len = check_dims(rows, cols)?;
        if data.len() != len {
            return Err(MatrixError::Shape {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Copy a caller-owned row-major buffer: `data[row * width + col]` lands
    /// at `(row, col)`.
    pub fn from_slice(data: &[f64], height: usize, width: usize) -> Result<Self> {
        Self::from_shape_vec((height, width), data.to_vec())
    }

    /// Square matrix with `diag` on the main diagonal and zeros elsewhere.
    pub fn from_diagonal(diag: &Vector) -> Result<Self> {
        let n = diag.len();
        let mut m = Self::new(n, n)?;
        for (i, &value) in diag.iter().enumerate() {
            m[(i, i)] = value;
        }
        Ok(m)
    }

    /// Parse a whitespace-delimited text file, detecting its dimensions.
    ///
    /// See [`text_matrix::read_auto`] for the scanning rules.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = open(path.as_ref())?;
        let m = Self::from_reader(file)?;
        log::debug!(
            "Loaded {}x{} matrix from {}",
            m.rows,
            m.cols,
            path.as_ref().display()
        );
        Ok(m)
    }

    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        text_matrix::read_auto(reader)
    }

    /// Parse a text file whose first line is a `rows cols` header.
    pub fn from_file_with_header<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = open(path.as_ref())?;
        Self::from_reader_with_header(file)
    }

    pub fn from_reader_with_header<R: Read>(reader: R) -> Result<Self> {
        text_matrix::read_with_header(reader)
    }

    pub fn height(&self) -> usize {
        self.rows
    }

    pub fn width(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.rows {
            return Err(MatrixError::IndexOutOfBounds {
                axis: Axis::Row,
                index: row,
                bound: self.rows,
            });
        }
        Ok(())
    }

    fn check_col(&self, col: usize) -> Result<()> {
        if col >= self.cols {
            return Err(MatrixError::IndexOutOfBounds {
                axis: Axis::Column,
                index: col,
                bound: self.cols,
            });
        }
        Ok(())
    }

    /// Checked element read. Use indexing (`m[(r, c)]`) for the panicking
    /// fast path.
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        self.check_row(row)?;
        self.check_col(col)?;
        Ok(self.data[self.offset(row, col)])
    }

    /// Checked element write.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        self.check_row(row)?;
        self.check_col(col)?;
        let offset = self.offset(row, col);
        self.data[offset] = value;
        Ok(())
    }

    /// Borrow one row. Panics if `row` is out of range.
    pub fn row_slice(&self, row: usize) -> &[f64] {
        assert!(row < self.rows, "row index out of bounds");
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn row(&self, row: usize) -> Result<Vector> {
        self.check_row(row)?;
        Ok(Vector::from_slice(self.row_slice(row)))
    }

    pub fn column(&self, col: usize) -> Result<Vector> {
        self.check_col(col)?;
        Ok((0..self.rows).map(|row| self[(row, col)]).collect())
    }

    pub fn set_row(&mut self, row: usize, values: &Vector) -> Result<()> {
        self.check_row(row)?;
        if values.len() != self.cols {
            return Err(MatrixError::DimensionMismatch {
                op: "set_row",
                expected: (1, self.cols),
                found: (1, values.len()),
            });
        }
        let start = self.offset(row, 0);
        self.data[start..start + self.cols].copy_from_slice(values.as_slice());
        Ok(())
    }

    pub fn set_column(&mut self, col: usize, values: &Vector) -> Result<()> {
        self.check_col(col)?;
        if values.len() != self.rows {
            return Err(MatrixError::DimensionMismatch {
                op: "set_column",
                expected: (self.rows, 1),
                found: (values.len(), 1),
            });
        }
        for (row, &value) in values.iter().enumerate() {
            self[(row, col)] = value;
        }
        Ok(())
    }

    /// Element-wise `self += other`.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&mut self, other: &Matrix) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(MatrixError::DimensionMismatch {
                op: "add",
                expected: self.shape(),
                found: other.shape(),
            });
        }
        for (a, b) in self.data.iter_mut().zip(other.data.iter()) {
            *a += b;
        }
        Ok(())
    }

    /// Inverse through LU decomposition with partial pivoting.
    ///
    /// Fails with [`MatrixError::Singular`] when a pivot is exactly zero.
    /// Ill-conditioned inputs may still succeed with huge or non-finite
    /// entries, which are returned as-is.
    pub fn invert(&self) -> Result<Matrix> {
        if self.rows != self.cols {
            return Err(MatrixError::DimensionMismatch {
                op: "invert",
                expected: (self.rows, self.rows),
                found: self.shape(),
            });
        }
        let n = self.rows;
        let inverse = backend::lu_invert(&self.data, n)?;
        Matrix::from_shape_vec((n, n), inverse)
    }

    /// `self * other^T`.
    ///
    /// The right operand is transposed, so both operands must have the same
    /// width and the result is `self.height() x other.height()`. Entry
    /// `(i, j)` is the dot product of row `i` of `self` and row `j` of
    /// `other`. Use [`Matrix::matmul`] for the ordinary product.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.cols {
            return Err(MatrixError::DimensionMismatch {
                op: "multiply",
                expected: (other.rows, self.cols),
                found: other.shape(),
            });
        }
        let out = backend::multiply_nt(&self.data, self.rows, self.cols, &other.data, other.rows)?;
        Matrix::from_shape_vec((self.rows, other.rows), out)
    }

    /// `self * v^T`, treating `v` as a single row. Returns a vector of length
    /// `self.height()`.
    pub fn multiply_vector(&self, v: &Vector) -> Result<Vector> {
        if v.len() != self.cols {
            return Err(MatrixError::DimensionMismatch {
                op: "multiply_vector",
                expected: (1, self.cols),
                found: (1, v.len()),
            });
        }
        let out = backend::multiply_nt(&self.data, self.rows, self.cols, v.as_slice(), 1)?;
        Ok(Vector::from_vec(out))
    }

    pub fn transpose(&self) -> Matrix {
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                data.push(self[(row, col)]);
            }
        }
        Matrix {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Ordinary matrix product `self * other`.
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(MatrixError::DimensionMismatch {
                op: "matmul",
                expected: (self.cols, other.cols),
                found: other.shape(),
            });
        }
        self.multiply(&other.transpose())
    }

    /// Render with `precision` decimals, each value followed by one space and
    /// each row terminated by a newline.
    pub fn render(&self, precision: usize) -> String {
        let mut out = String::new();
        for row in 0..self.rows {
            for value in self.row_slice(row) {
                out.push_str(&format!("{:.*} ", precision, value));
            }
            out.push('\n');
        }
        out
    }

    /// Write the matrix to stdout in the two-decimal display format.
    pub fn print(&self) {
        print!("{}", self);
    }

    /// Write in the plain whitespace format read by [`Matrix::from_reader`].
    pub fn write_to<W: Write>(&self, writer: W) -> io::Result<()> {
        text_matrix::write_plain(self, writer)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let io_err = |source| MatrixError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::create(path).map_err(io_err)?;
        let mut writer = io::BufWriter::new(file);
        self.write_to(&mut writer).map_err(io_err)?;
        writer.flush().map_err(io_err)
    }
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| {
        log::error!("Error: {}: {}", path.display(), source);
        MatrixError::Io {
            path: path.to_path_buf(),
            source,
        }
    })
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "matrix index out of bounds"
        );
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "matrix index out of bounds"
        );
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(2))
    }
}
