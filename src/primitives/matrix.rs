//! Matrix type for 2D numeric data.

use crate::error::{MatrizError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A dense matrix of `f64` values (row-major storage).
///
/// Both dimensions are at least 1 and every row has exactly `cols`
/// elements; the flat backing vector makes the invariant structural.
/// Dropping a matrix releases its storage — there is no explicit
/// destroy operation.
///
/// # Examples
///
/// ```
/// use matriz::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Creates a matrix with allocated but unspecified element values.
    ///
    /// Callers must write every cell before reading it back; the initial
    /// contents are not part of the contract.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either dimension is 0 and
    /// `OutOfMemory` if the backing storage cannot be allocated.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let data = Self::alloc_backing(rows, cols)?;
        Ok(Self { data, rows, cols })
    }

    /// Creates a matrix of zeros.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either dimension is 0 and
    /// `OutOfMemory` if the backing storage cannot be allocated.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::new(rows, cols)
    }

    /// Creates a generalized identity matrix: 1.0 where the row index
    /// equals the column index (up to `min(rows, cols)`), 0.0 elsewhere.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either dimension is 0 and
    /// `OutOfMemory` if the backing storage cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use matriz::primitives::Matrix;
    ///
    /// let m = Matrix::identity(2, 3).expect("dimensions are positive");
    /// assert_eq!(m.get(1, 1).unwrap(), 1.0);
    /// assert_eq!(m.get(2, 2).unwrap(), 1.0);
    /// assert_eq!(m.get(2, 3).unwrap(), 0.0);
    /// ```
    pub fn identity(rows: usize, cols: usize) -> Result<Self> {
        let mut mat = Self::new(rows, cols)?;
        for i in 0..rows.min(cols) {
            mat.data[i * cols + i] = 1.0;
        }
        Ok(mat)
    }

    /// Creates a square identity matrix of order `n`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `n` is 0 and `OutOfMemory` if the
    /// backing storage cannot be allocated.
    pub fn eye(n: usize) -> Result<Self> {
        Self::identity(n, n)
    }

    /// Creates a new matrix from a vector of row-major data.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either dimension is 0 or data length
    /// doesn't match rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        Self::require_positive(rows, cols)?;
        if data.len() != rows * cols {
            return Err(MatrizError::InvalidArgument {
                param: "data".to_string(),
                value: format!("{} elements", data.len()),
                constraint: format!("exactly {} (rows * cols)", rows * cols),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Returns the size along one dimension: 1 for the row count, 2 for
    /// the column count.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for any other dimension selector.
    pub fn size(&self, dimension: usize) -> Result<usize> {
        match dimension {
            1 => Ok(self.rows),
            2 => Ok(self.cols),
            _ => Err(MatrizError::InvalidArgument {
                param: "dimension".to_string(),
                value: dimension.to_string(),
                constraint: "1 (rows) or 2 (columns)".to_string(),
            }),
        }
    }

    /// Gets the element in the i-th row and j-th column.
    ///
    /// Indices are **1-based**: valid ranges are `1..=rows` and
    /// `1..=cols`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if an index is out of range; a valid
    /// zero and a failed read are never conflated.
    pub fn get(&self, i: usize, j: usize) -> Result<f64> {
        self.require_in_bounds(i, j)?;
        Ok(self.data[(i - 1) * self.cols + (j - 1)])
    }

    /// Sets the element in the i-th row and j-th column.
    ///
    /// Indices are **1-based**, as for [`Matrix::get`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if an index is out of range; the matrix
    /// is left unmodified.
    pub fn set(&mut self, i: usize, j: usize, value: f64) -> Result<()> {
        self.require_in_bounds(i, j)?;
        self.data[(i - 1) * self.cols + (j - 1)] = value;
        Ok(())
    }

    /// Returns the underlying row-major data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Adds another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the shapes differ; no result matrix
    /// is allocated in that case.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.require_same_shape(other)?;
        let data: Vec<f64> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a + b)
            .collect();
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Subtracts another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the shapes differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.require_same_shape(other)?;
        let data: Vec<f64> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a - b)
            .collect();
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Multiplies each element by a scalar.
    #[must_use]
    pub fn mul_scalar(&self, scalar: f64) -> Self {
        Self {
            data: self.data.iter().map(|x| x * scalar).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Transposes the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = vec![0.0; self.rows * self.cols];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Matrix-matrix multiplication: `C[i][j] = Σ_k A[i][k] * B[k][j]`.
    ///
    /// The accumulator resets to 0.0 for every output cell; cost is
    /// O(rows · inner · cols) with no early exit.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `self.cols != other.rows`.
    ///
    /// # Examples
    ///
    /// ```
    /// use matriz::primitives::Matrix;
    ///
    /// let a = Matrix::eye(3).expect("order is positive");
    /// let b = Matrix::from_vec(3, 2, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// let c = a.matmul(&b).expect("inner dimensions match");
    /// assert_eq!(c, b);
    /// ```
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(MatrizError::dimension_mismatch(
                &format!("inner dimension {}", self.cols),
                &other.rows.to_string(),
            ));
        }

        let mut result = vec![0.0; self.rows * other.cols];
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.data[i * self.cols + k] * other.data[k * other.cols + j];
                }
                result[i * other.cols + j] = sum;
            }
        }

        Ok(Self {
            data: result,
            rows: self.rows,
            cols: other.cols,
        })
    }

    fn require_positive(rows: usize, cols: usize) -> Result<()> {
        if rows == 0 {
            return Err(MatrizError::zero_dimension("rows"));
        }
        if cols == 0 {
            return Err(MatrizError::zero_dimension("cols"));
        }
        Ok(())
    }

    fn require_in_bounds(&self, i: usize, j: usize) -> Result<()> {
        if i == 0 || i > self.rows {
            return Err(MatrizError::index_out_of_bounds("i", i, self.rows));
        }
        if j == 0 || j > self.cols {
            return Err(MatrizError::index_out_of_bounds("j", j, self.cols));
        }
        Ok(())
    }

    fn require_same_shape(&self, other: &Self) -> Result<()> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrizError::dimension_mismatch(
                &format!("{}x{}", self.rows, self.cols),
                &format!("{}x{}", other.rows, other.cols),
            ));
        }
        Ok(())
    }

    // try_reserve_exact reports allocator failure as a value; a partial
    // reservation is released with the temporary Vec.
    fn alloc_backing(rows: usize, cols: usize) -> Result<Vec<f64>> {
        Self::require_positive(rows, cols)?;
        let len = rows.checked_mul(cols).ok_or(MatrizError::OutOfMemory {
            requested: usize::MAX,
        })?;
        let mut data = Vec::new();
        if data.try_reserve_exact(len).is_err() {
            return Err(MatrizError::OutOfMemory { requested: len });
        }
        data.resize(len, 0.0);
        Ok(data)
    }
}

/// Renders one row per line, values space-separated, fixed-point with six
/// fractional digits.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.cols) {
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value:.6}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
