use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Which axis an index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Errors raised by matrix and vector operations.
#[derive(Debug)]
pub enum MatrixError {
    /// The matrix file could not be opened or read.
    Io { path: PathBuf, source: io::Error },
    /// Reading from an already open stream failed.
    Read(io::Error),
    /// Operand shapes are incompatible for `op`.
    DimensionMismatch {
        op: &'static str,
        expected: (usize, usize),
        found: (usize, usize),
    },
    /// Buffer length does not equal `rows * cols`.
    Shape { rows: usize, cols: usize, len: usize },
    /// A matrix must have at least one row and one column.
    EmptyDimension { rows: usize, cols: usize },
    /// Storage for `rows * cols` values could not be allocated.
    Allocation { rows: usize, cols: usize },
    IndexOutOfBounds { axis: Axis, index: usize, bound: usize },
    /// LU decomposition found a zero pivot.
    Singular,
    /// Column has zero (or undefined) sample variance.
    ZeroVariance { column: usize },
    /// Malformed dimension header.
    Parse { line: usize, message: String },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatrixError::Io { path, source } => {
                write!(f, "File read error: {}: {}", path.display(), source)
            }
            MatrixError::Read(source) => write!(f, "failed to read matrix data: {}", source),
            MatrixError::DimensionMismatch { op, expected, found } => write!(
                f,
                "dimension mismatch in {}: expected ({}, {}), found ({}, {})",
                op, expected.0, expected.1, found.0, found.1
            ),
            MatrixError::Shape { rows, cols, len } => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                rows, cols, len
            ),
            MatrixError::EmptyDimension { rows, cols } => {
                write!(f, "matrix dimensions must be non-zero, got ({}, {})", rows, cols)
            }
            MatrixError::Allocation { rows, cols } => {
                write!(f, "cannot allocate storage for a {}x{} matrix", rows, cols)
            }
            MatrixError::IndexOutOfBounds { axis, index, bound } => {
                write!(f, "{} index {} out of bounds for length {}", axis, index, bound)
            }
            MatrixError::Singular => write!(f, "matrix is singular and cannot be inverted"),
            MatrixError::ZeroVariance { column } => {
                write!(f, "column {} has zero variance and cannot be sphered", column)
            }
            MatrixError::Parse { line, message } => {
                write!(f, "parse error on line {}: {}", line, message)
            }
        }
    }
}

impl From<io::Error> for MatrixError {
    fn from(value: io::Error) -> Self {
        MatrixError::Read(value)
    }
}

impl Error for MatrixError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MatrixError::Io { source, .. } => Some(source),
            MatrixError::Read(source) => Some(source),
            _ => None,
        }
    }
}
