use std::fmt;
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};
use std::slice::Iter;

use crate::error::{Axis, MatrixError, Result};

/// Dense, owned, fixed-length vector of `f64`.
///
/// Rows and columns handed out by [`Matrix`](crate::math::Matrix) are
/// independent copies of this type, never views into the matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    pub fn from_vec(data: Vec<f64>) -> Self {
        Self { data }
    }

    /// Copy `data` into newly owned storage.
    pub fn from_slice(data: &[f64]) -> Self {
        Self::from_vec(data.to_vec())
    }

    pub fn zeros(len: usize) -> Self {
        Self::from_elem(len, 0.0)
    }

    pub fn from_elem(len: usize, value: f64) -> Self {
        Self::from_vec(vec![value; len])
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Checked element read.
    pub fn get(&self, index: usize) -> Result<f64> {
        self.data
            .get(index)
            .copied()
            .ok_or(MatrixError::IndexOutOfBounds {
                axis: Axis::Column,
                index,
                bound: self.len(),
            })
    }

    /// Checked element write.
    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        let bound = self.len();
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(MatrixError::IndexOutOfBounds {
                axis: Axis::Column,
                index,
                bound,
            }),
        }
    }

    pub fn iter(&self) -> Iter<'_, f64> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    pub fn dot(&self, other: &Vector) -> Result<f64> {
        if self.len() != other.len() {
            return Err(MatrixError::DimensionMismatch {
                op: "dot",
                expected: (1, self.len()),
                found: (1, other.len()),
            });
        }
        Ok(self.iter().zip(other.iter()).map(|(a, b)| a * b).sum())
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Vector::from_vec(iter.into_iter().collect())
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

/// One line, each value as `{:.2}` followed by a space.
impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.data.iter() {
            write!(f, "{:.2} ", value)?;
        }
        writeln!(f)
    }
}
