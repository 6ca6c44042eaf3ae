//! Sparse document-term weight matrix

use crate::error::{RankError, Result};
use ndarray::{Array1, Array2};
use tracing::debug;

/// Documents × terms matrix of non-negative weights in compressed sparse row
/// form. Only non-zero weights are stored.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedMatrix {
    rows: usize,
    cols: usize,
    /// Row `r` occupies `indices[indptr[r]..indptr[r + 1]]`
    indptr: Vec<usize>,
    indices: Vec<usize>,
    data: Vec<f64>,
}

impl WeightedMatrix {
    /// An all-zero matrix
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            indptr: vec![0; rows + 1],
            indices: Vec::new(),
            data: Vec::new(),
        }
    }

    /// Build from dense rows, each exactly `cols` wide
    pub fn from_dense_rows<R>(cols: usize, rows: &[R]) -> Result<Self>
    where
        R: AsRef<[f64]>,
    {
        let mut indptr = Vec::with_capacity(rows.len() + 1);
        let mut indices = Vec::new();
        let mut data = Vec::new();
        indptr.push(0);

        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(RankError::RaggedRow {
                    row: r,
                    expected: cols,
                    actual: row.len(),
                });
            }
            for (c, &value) in row.iter().enumerate() {
                check_weight(r, c, value)?;
                if value != 0.0 {
                    indices.push(c);
                    data.push(value);
                }
            }
            indptr.push(indices.len());
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            indptr,
            indices,
            data,
        })
    }

    /// Build from `(row, col, weight)` entries in any order.
    ///
    /// Repeated coordinates are summed.
    pub fn from_triplets(
        rows: usize,
        cols: usize,
        entries: impl IntoIterator<Item = (usize, usize, f64)>,
    ) -> Result<Self> {
        let mut entries: Vec<(usize, usize, f64)> = entries.into_iter().collect();
        for &(row, col, value) in &entries {
            if row >= rows || col >= cols {
                return Err(RankError::EntryOutOfBounds {
                    row,
                    col,
                    rows,
                    cols,
                });
            }
            check_weight(row, col, value)?;
        }
        entries.sort_by_key(|&(row, col, _)| (row, col));

        let mut indptr = vec![0; rows + 1];
        let mut indices: Vec<usize> = Vec::with_capacity(entries.len());
        let mut data: Vec<f64> = Vec::with_capacity(entries.len());
        let mut last: Option<(usize, usize)> = None;

        for (row, col, value) in entries {
            if last == Some((row, col)) {
                if let Some(prev) = data.last_mut() {
                    *prev += value;
                }
                continue;
            }
            indices.push(col);
            data.push(value);
            indptr[row + 1] += 1;
            last = Some((row, col));
        }
        for r in 0..rows {
            indptr[r + 1] += indptr[r];
        }

        let mut matrix = Self {
            rows,
            cols,
            indptr,
            indices,
            data,
        };
        matrix.prune_zeros();
        Ok(matrix)
    }

    fn prune_zeros(&mut self) {
        if self.data.iter().all(|v| *v != 0.0) {
            return;
        }
        let mut indptr = Vec::with_capacity(self.rows + 1);
        let mut indices = Vec::with_capacity(self.indices.len());
        let mut data = Vec::with_capacity(self.data.len());
        indptr.push(0);
        for r in 0..self.rows {
            for k in self.indptr[r]..self.indptr[r + 1] {
                if self.data[k] != 0.0 {
                    indices.push(self.indices[k]);
                    data.push(self.data[k]);
                }
            }
            indptr.push(indices.len());
        }
        self.indptr = indptr;
        self.indices = indices;
        self.data = data;
    }

    /// Number of documents
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of vocabulary terms
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of stored (non-zero) weights
    #[must_use]
    pub const fn nnz(&self) -> usize {
        self.data.len()
    }

    /// Weight at `(row, col)`, zero when not stored
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        let (indices, data) = self.row_entries(row)?;
        if col >= self.cols {
            return Err(RankError::EntryOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(indices
            .binary_search(&col)
            .map_or(0.0, |k| data[k]))
    }

    fn row_entries(&self, row: usize) -> Result<(&[usize], &[f64])> {
        if row >= self.rows {
            return Err(RankError::RowOutOfRange {
                row,
                rows: self.rows,
            });
        }
        let span = self.indptr[row]..self.indptr[row + 1];
        Ok((&self.indices[span.clone()], &self.data[span]))
    }

    /// One row as a dense vector of length `cols`
    pub fn row_dense(&self, row: usize) -> Result<Array1<f64>> {
        let (indices, data) = self.row_entries(row)?;
        let mut dense = Array1::zeros(self.cols);
        for (&c, &value) in indices.iter().zip(data) {
            dense[c] = value;
        }
        Ok(dense)
    }

    /// The given rows, in the given order, as a dense `selection × cols` array
    pub fn select_dense(&self, rows: &[usize]) -> Result<Array2<f64>> {
        let mut dense = Array2::zeros((rows.len(), self.cols));
        for (out, &row) in rows.iter().enumerate() {
            let (indices, data) = self.row_entries(row)?;
            for (&c, &value) in indices.iter().zip(data) {
                dense[[out, c]] = value;
            }
        }
        debug!(
            selected = rows.len(),
            cols = self.cols,
            "Densified row selection"
        );
        Ok(dense)
    }

    /// The whole matrix as a dense array
    #[must_use]
    pub fn to_dense(&self) -> Array2<f64> {
        let mut dense = Array2::zeros((self.rows, self.cols));
        for r in 0..self.rows {
            for k in self.indptr[r]..self.indptr[r + 1] {
                dense[[r, self.indices[k]]] = self.data[k];
            }
        }
        dense
    }
}

fn check_weight(row: usize, col: usize, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(RankError::InvalidWeight { row, col, value })
    }
}
