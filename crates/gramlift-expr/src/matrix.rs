//! Sparse matrices of polynomials.
//!
//! A matrix is a shape plus a map from (row, col) to a polynomial cell.
//! Absent cells denote the zero polynomial. A cell holding an empty
//! polynomial is never stored: algorithms that count stored cells (the
//! Gram-matrix degrees-of-freedom analysis among them) rely on absence
//! being the only representation of zero.
//!
//! Cells are kept in a `BTreeMap` so iteration is row-major and
//! deterministic, which in turn makes evaluation results reproducible.

use std::collections::BTreeMap;

use gramlift_algebra::{Field, Polynomial, Scalar, VarTable};

use crate::error::EvalError;

/// A sparse `rows x cols` matrix with polynomial entries.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SparseMatrix<C: Scalar> {
    rows: usize,
    cols: usize,
    cells: BTreeMap<(usize, usize), Polynomial<C>>,
}

impl<C: Scalar> SparseMatrix<C> {
    /// Creates an all-zero matrix of the given shape.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: BTreeMap::new(),
        }
    }

    /// Creates a matrix from an iterator of entries.
    ///
    /// Zero polynomials are dropped; duplicate positions keep the last value.
    ///
    /// # Panics
    ///
    /// Panics if an entry lies outside the shape.
    #[must_use]
    pub fn from_entries(
        rows: usize,
        cols: usize,
        entries: impl IntoIterator<Item = (usize, usize, Polynomial<C>)>,
    ) -> Self {
        let mut matrix = Self::new(rows, cols);
        for (r, c, poly) in entries {
            matrix.insert(r, c, poly);
        }
        matrix
    }

    /// Creates a 1x1 matrix holding a single polynomial.
    #[must_use]
    pub fn scalar(poly: Polynomial<C>) -> Self {
        Self::from_entries(1, 1, [(0, 0, poly)])
    }

    /// Returns the shape `(rows, cols)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the number of stored (non-zero) cells.
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.cells.len()
    }

    /// Returns the cell at (row, col), or `None` if it is zero.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&Polynomial<C>> {
        self.cells.get(&(row, col))
    }

    /// Stores a cell, dropping it if the polynomial is zero.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the shape.
    pub fn insert(&mut self, row: usize, col: usize, poly: Polynomial<C>) {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} matrix",
            self.rows,
            self.cols
        );
        if poly.is_zero() {
            self.cells.remove(&(row, col));
        } else {
            self.cells.insert((row, col), poly);
        }
    }

    /// Iterates over stored cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Polynomial<C>)> {
        self.cells.iter().map(|(&(r, c), p)| (r, c, p))
    }

    /// Computes the Kronecker product `self ⊗ other`.
    ///
    /// The result has shape `(r1*r2, c1*c2)`; a result cell is present iff
    /// both factor cells are present.
    #[must_use]
    pub fn kron(&self, other: &Self) -> Self {
        let mut result = Self::new(self.rows * other.rows, self.cols * other.cols);

        for (i, j, left) in self.iter() {
            for (k, l, right) in other.iter() {
                let row = i * other.rows + k;
                let col = j * other.cols + l;
                result.insert(row, col, left.mul(right));
            }
        }

        result
    }

    /// Tiles the matrix `p` times vertically and `q` times horizontally.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::ShapeMismatch`] if either repetition factor is
    /// zero.
    pub fn repmat(&self, p: usize, q: usize) -> Result<Self, EvalError> {
        if p == 0 || q == 0 {
            return Err(EvalError::ShapeMismatch {
                op: "RepMat",
                detail: format!(
                    "repetition factors must be positive, got ({p}, {q}) for {}x{} child",
                    self.rows, self.cols
                ),
            });
        }

        let mut result = Self::new(p * self.rows, q * self.cols);
        for (r, c, poly) in self.iter() {
            for bi in 0..p {
                for bj in 0..q {
                    result.insert(bi * self.rows + r, bj * self.cols + c, poly.clone());
                }
            }
        }

        Ok(result)
    }

    /// Renders the matrix against a variable table, one cell per line.
    #[must_use]
    pub fn display(&self, vars: &VarTable) -> String {
        let mut out = format!("{}x{} sparse matrix, {} cells", self.rows, self.cols, self.nnz());
        for (r, c, poly) in self.iter() {
            out.push_str(&format!("\n  ({r}, {c}): {}", poly.display(vars)));
        }
        out
    }
}

impl<C: Field> SparseMatrix<C> {
    /// Symmetrizes the matrix: `out[r][c] = ½(at(r,c) + at(c,r))`.
    ///
    /// The result is always square of size `max(rows, cols)`; out-of-range
    /// or absent cells read as zero. A single present mirror cell yields
    /// half of that cell, while mirror cells that cancel leave the result
    /// cell absent.
    #[must_use]
    pub fn symmetrize(&self) -> Self {
        let n = self.rows.max(self.cols);
        let mut result = Self::new(n, n);
        let half = C::half();

        for r in 0..n {
            for c in r..n {
                let forward = self.get(r, c);
                let mirror = self.get(c, r);

                let sum = match (forward, mirror) {
                    (None, None) => continue,
                    (Some(p), None) | (None, Some(p)) => p.scale(&half),
                    (Some(p), Some(q)) => p.add(q).scale(&half),
                };

                if r == c {
                    result.insert(r, c, sum);
                } else {
                    result.insert(r, c, sum.clone());
                    result.insert(c, r, sum);
                }
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gramlift_algebra::Q;

    fn constant(n: i64) -> Polynomial<Q> {
        Polynomial::constant(Q::from_integer(n))
    }

    #[test]
    fn test_insert_drops_zero() {
        let mut m = SparseMatrix::<Q>::new(2, 2);
        m.insert(0, 0, constant(1));
        assert_eq!(m.nnz(), 1);

        m.insert(0, 0, Polynomial::zero());
        assert_eq!(m.nnz(), 0);
        assert_eq!(m.get(0, 0), None);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_insert_out_of_range() {
        let mut m = SparseMatrix::<Q>::new(2, 2);
        m.insert(2, 0, constant(1));
    }

    #[test]
    fn test_kron_absent_times_anything() {
        // left has a hole at (0,1); every kron block sourced from it is absent
        let left = SparseMatrix::from_entries(1, 2, [(0, 0, constant(2))]);
        let right = SparseMatrix::from_entries(1, 1, [(0, 0, constant(3))]);

        let k = left.kron(&right);
        assert_eq!(k.shape(), (1, 2));
        assert_eq!(k.get(0, 0), Some(&constant(6)));
        assert_eq!(k.get(0, 1), None);
    }

    #[test]
    fn test_repmat_zero_factor() {
        let m = SparseMatrix::from_entries(1, 1, [(0, 0, constant(1))]);
        let err = m.repmat(0, 2).unwrap_err();
        assert!(matches!(err, EvalError::ShapeMismatch { op: "RepMat", .. }));
    }

    #[test]
    fn test_symmetrize_rectangular() {
        // 1x2 row [a, b] symmetrizes into a 2x2 with halved off-diagonals
        let m = SparseMatrix::from_entries(1, 2, [(0, 0, constant(2)), (0, 1, constant(4))]);
        let s = m.symmetrize();

        assert_eq!(s.shape(), (2, 2));
        assert_eq!(s.get(0, 0), Some(&constant(2)));
        assert_eq!(s.get(0, 1), Some(&constant(2)));
        assert_eq!(s.get(1, 0), Some(&constant(2)));
        assert_eq!(s.get(1, 1), None);
    }

    #[test]
    fn test_symmetrize_cancellation() {
        // at(0,1) = 1, at(1,0) = -1: the symmetrized cell must be absent
        let m = SparseMatrix::from_entries(
            2,
            2,
            [(0, 1, constant(1)), (1, 0, constant(-1))],
        );
        let s = m.symmetrize();
        assert_eq!(s.get(0, 1), None);
        assert_eq!(s.get(1, 0), None);
        assert_eq!(s.nnz(), 0);
    }
}
