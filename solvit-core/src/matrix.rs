//! Pairwise distances between the start position and each job.
//!
//! Row and column 0 always describe the start. Rows `1..=n` follow the input
//! order of the job positions, so a job's matrix index is its slice index
//! plus one.

use thiserror::Error;

use crate::{DistanceMetric, Position};

/// Errors from [`DistanceMatrix::from_rows`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistanceMatrixError {
    /// No rows were supplied.
    ///
    /// A matrix always contains at least the start position.
    #[error("distance matrix must contain at least the start row")]
    Empty,
    /// A row length differs from the number of rows.
    #[error("row {row} has {found} columns but {expected} expected (matrix must be square)")]
    NotSquare {
        /// Offending row index.
        row: usize,
        /// Number of columns found in that row.
        found: usize,
        /// Number of rows, which every row length must match.
        expected: usize,
    },
    /// A cell was negative, NaN, or infinite.
    #[error("distance at ({row}, {column}) must be finite and non-negative")]
    InvalidDistance {
        /// Row index of the offending cell.
        row: usize,
        /// Column index of the offending cell.
        column: usize,
    },
}

/// Square matrix of distances for one optimisation call.
///
/// # Examples
/// ```
/// use solvit_core::{DistanceMatrix, Haversine, Position};
///
/// let start = Position::new(0.0, 0.0, "home");
/// let jobs = [Position::new(0.0, 1.0, "boiler"), Position::new(1.0, 0.0, "tap")];
/// let matrix = DistanceMatrix::build(&Haversine, &start, &jobs);
///
/// assert_eq!(matrix.dimension(), 3);
/// assert_eq!(matrix.job_count(), 2);
/// assert_eq!(matrix.distance(1, 1), Some(0.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    dimension: usize,
    cells: Vec<f64>,
}

impl DistanceMatrix {
    /// Build the `(n+1) x (n+1)` matrix for `start` followed by `jobs`.
    ///
    /// Diagonal cells are set to zero without consulting the metric.
    pub fn build<M>(metric: &M, start: &Position, jobs: &[Position]) -> Self
    where
        M: DistanceMetric + ?Sized,
    {
        let positions: Vec<&Position> = std::iter::once(start).chain(jobs).collect();
        let dimension = positions.len();
        let mut cells = Vec::with_capacity(dimension.saturating_mul(dimension));
        for (row, from) in positions.iter().enumerate() {
            for (column, to) in positions.iter().enumerate() {
                let distance = if row == column {
                    0.0
                } else {
                    metric.distance(from, to)
                };
                cells.push(distance);
            }
        }
        Self { dimension, cells }
    }

    /// Construct a matrix from explicit rows.
    ///
    /// Rows must be square and every cell finite and non-negative. Diagonal
    /// values are taken as given.
    ///
    /// # Errors
    ///
    /// Returns [`DistanceMatrixError`] when the rows are empty, jagged, or
    /// contain an invalid distance.
    ///
    /// # Examples
    /// ```
    /// use solvit_core::{DistanceMatrix, DistanceMatrixError};
    ///
    /// let matrix = DistanceMatrix::from_rows(vec![vec![0.0, 2.0], vec![2.0, 0.0]])?;
    /// assert_eq!(matrix.distance(0, 1), Some(2.0));
    ///
    /// let err = DistanceMatrix::from_rows(vec![vec![0.0, 2.0], vec![2.0]]).unwrap_err();
    /// assert!(matches!(err, DistanceMatrixError::NotSquare { row: 1, .. }));
    /// # Ok::<(), DistanceMatrixError>(())
    /// ```
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, DistanceMatrixError> {
        let dimension = rows.len();
        if dimension == 0 {
            return Err(DistanceMatrixError::Empty);
        }
        let mut cells = Vec::with_capacity(dimension.saturating_mul(dimension));
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != dimension {
                return Err(DistanceMatrixError::NotSquare {
                    row,
                    found: values.len(),
                    expected: dimension,
                });
            }
            if let Some(column) = values.iter().position(|d| !d.is_finite() || *d < 0.0) {
                return Err(DistanceMatrixError::InvalidDistance { row, column });
            }
            cells.extend(values);
        }
        Ok(Self { dimension, cells })
    }

    /// Number of rows (and columns), i.e. job count plus the start.
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of jobs described by the matrix.
    #[must_use]
    pub const fn job_count(&self) -> usize {
        self.dimension.saturating_sub(1)
    }

    /// Distance from index `from` to index `to`, if both are in range.
    #[must_use]
    pub fn distance(&self, from: usize, to: usize) -> Option<f64> {
        if from >= self.dimension || to >= self.dimension {
            return None;
        }
        self.cells
            .get(from.saturating_mul(self.dimension).saturating_add(to))
            .copied()
    }

    /// Whether `distance(i, j) == distance(j, i)` holds exactly for every pair.
    #[must_use]
    #[expect(clippy::float_cmp, reason = "symmetry is checked bit-for-bit")]
    pub fn is_symmetric(&self) -> bool {
        (0..self.dimension).all(|row| {
            (row.saturating_add(1)..self.dimension)
                .all(|column| self.distance(row, column) == self.distance(column, row))
        })
    }

    /// Round-trip cost of visiting `order` from the start and returning.
    ///
    /// `order` lists matrix indices of jobs (so `1..=n`). Returns `None` if
    /// any index is out of range. An empty order costs nothing.
    ///
    /// # Examples
    /// ```
    /// use solvit_core::DistanceMatrix;
    ///
    /// let matrix = DistanceMatrix::from_rows(vec![
    ///     vec![0.0, 1.0, 4.0],
    ///     vec![1.0, 0.0, 2.0],
    ///     vec![4.0, 2.0, 0.0],
    /// ])
    /// .unwrap();
    /// assert_eq!(matrix.tour_cost(&[1, 2]), Some(7.0));
    /// assert_eq!(matrix.tour_cost(&[]), Some(0.0));
    /// assert_eq!(matrix.tour_cost(&[3]), None);
    /// ```
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "tour cost sums edge distances")]
    pub fn tour_cost(&self, order: &[usize]) -> Option<f64> {
        let mut cost = 0.0;
        let mut current = 0_usize;
        for &next in order {
            cost += self.distance(current, next)?;
            current = next;
        }
        cost += self.distance(current, 0)?;
        Some(cost)
    }
}
