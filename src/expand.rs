//! Lazy block-Kronecker expansion of one matrix by another.
//!
//! Given a base matrix $\vec A$ of shape $p \times q$ and a pattern matrix $\vec B$ of shape
//! $r \times s$, the expanded matrix has shape $pr \times qs$ and entries
//! $$
//! (\vec A \otimes \vec B)_{ij} = A_{\lfloor i / r \rfloor, \lfloor j / s \rfloor} \\, B_{i \bmod r, j \bmod s}.
//! $$
//! This is convenient for building block-structured operators, e.g. expanding a scalar
//! node-node matrix into a vector-valued one by expanding it with the identity.
//!
//! [`ExpandedMatrix`] is a read-only view: every entry is computed on demand from the two
//! operands, and nothing is allocated until [`ExpandedMatrix::evaluate`] is called.
use crate::error::DimensionMismatch;
use itertools::iproduct;
use nalgebra::allocator::Allocator;
use nalgebra::storage::{Storage, StorageMut};
use nalgebra::{ClosedMul, DefaultAllocator, Dim, DimMul, DimProd, Matrix, OMatrix, Scalar};
use std::fmt;

/// A lazily evaluated expansion of a base matrix by a pattern matrix.
///
/// Created with [`expand`].
pub struct ExpandedMatrix<'a, T, R1, C1, S1, R2, C2, S2> {
    base: &'a Matrix<T, R1, C1, S1>,
    pattern: &'a Matrix<T, R2, C2, S2>,
}

impl<'a, T, R1, C1, S1, R2, C2, S2> Clone for ExpandedMatrix<'a, T, R1, C1, S1, R2, C2, S2> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T, R1, C1, S1, R2, C2, S2> Copy for ExpandedMatrix<'a, T, R1, C1, S1, R2, C2, S2> {}

impl<'a, T, R1, C1, S1, R2, C2, S2> fmt::Debug for ExpandedMatrix<'a, T, R1, C1, S1, R2, C2, S2>
where
    R1: Dim,
    C1: Dim,
    S1: fmt::Debug,
    R2: Dim,
    C2: Dim,
    S2: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpandedMatrix")
            .field("base", &self.base)
            .field("pattern", &self.pattern)
            .finish()
    }
}

/// Expands `base` by `pattern`.
///
/// ```
/// use continuum::expand::expand;
/// use continuum::nalgebra::{Matrix2, Matrix3, Matrix6};
///
/// let a = Matrix2::new(1.0, 2.0,
///                      3.0, 4.0);
/// let b = Matrix3::identity();
/// let expanded = expand(&a, &b);
/// assert_eq!(expanded.shape(), (6, 6));
/// assert_eq!(expanded.entry(4, 5), a[(1, 1)] * b[(1, 2)]);
///
/// let evaluated: Matrix6<f64> = expanded.evaluate();
/// assert_eq!(evaluated, a.kronecker(&b));
/// ```
pub fn expand<'a, T, R1, C1, S1, R2, C2, S2>(
    base: &'a Matrix<T, R1, C1, S1>,
    pattern: &'a Matrix<T, R2, C2, S2>,
) -> ExpandedMatrix<'a, T, R1, C1, S1, R2, C2, S2>
where
    T: Scalar + ClosedMul,
    R1: Dim,
    C1: Dim,
    S1: Storage<T, R1, C1>,
    R2: Dim,
    C2: Dim,
    S2: Storage<T, R2, C2>,
{
    ExpandedMatrix { base, pattern }
}

impl<'a, T, R1, C1, S1, R2, C2, S2> ExpandedMatrix<'a, T, R1, C1, S1, R2, C2, S2>
where
    T: Scalar + ClosedMul,
    R1: Dim,
    C1: Dim,
    S1: Storage<T, R1, C1>,
    R2: Dim,
    C2: Dim,
    S2: Storage<T, R2, C2>,
{
    pub fn base(&self) -> &'a Matrix<T, R1, C1, S1> {
        self.base
    }

    pub fn pattern(&self) -> &'a Matrix<T, R2, C2, S2> {
        self.pattern
    }

    pub fn nrows(&self) -> usize {
        self.base.nrows() * self.pattern.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.base.ncols() * self.pattern.ncols()
    }

    /// The `(rows, cols)` shape of the expanded matrix.
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    /// The shape of the expanded matrix as (possibly) compile-time dimensions.
    pub fn shape_generic(&self) -> (DimProd<R1, R2>, DimProd<C1, C2>)
    where
        R1: DimMul<R2>,
        C1: DimMul<C2>,
    {
        let (r1, c1) = self.base.shape_generic();
        let (r2, c2) = self.pattern.shape_generic();
        (r1.mul(r2), c1.mul(c2))
    }

    /// Computes entry `(i, j)` of the expanded matrix, or `None` if the index is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> Option<T> {
        (i < self.nrows() && j < self.ncols()).then(|| self.compute_entry(i, j))
    }

    /// Computes entry `(i, j)` of the expanded matrix.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    pub fn entry(&self, i: usize, j: usize) -> T {
        let (nrows, ncols) = self.shape();
        assert!(
            i < nrows && j < ncols,
            "Index ({}, {}) out of bounds for expanded matrix of shape {}x{}.",
            i,
            j,
            nrows,
            ncols
        );
        self.compute_entry(i, j)
    }

    /// Iterates over all entries of the expanded matrix in column-major order.
    pub fn iter(&self) -> impl Iterator<Item = T> + 'a {
        let view = *self;
        iproduct!(0..self.ncols(), 0..self.nrows()).map(move |(j, i)| view.compute_entry(i, j))
    }

    /// Materializes the expanded matrix.
    pub fn evaluate(&self) -> OMatrix<T, DimProd<R1, R2>, DimProd<C1, C2>>
    where
        R1: DimMul<R2>,
        C1: DimMul<C2>,
        DefaultAllocator: Allocator<T, DimProd<R1, R2>, DimProd<C1, C2>>,
    {
        let (nrows, ncols) = self.shape_generic();
        OMatrix::from_fn_generic(nrows, ncols, |i, j| self.compute_entry(i, j))
    }

    /// Materializes the expanded matrix into the given output matrix.
    ///
    /// Returns an error if the output does not have the shape of the expanded matrix.
    pub fn evaluate_into<R, C, S>(&self, output: &mut Matrix<T, R, C, S>) -> Result<(), DimensionMismatch>
    where
        R: Dim,
        C: Dim,
        S: StorageMut<T, R, C>,
    {
        if output.shape() != self.shape() {
            return Err(DimensionMismatch::Shape {
                expected: self.shape(),
                actual: output.shape(),
            });
        }
        for j in 0..output.ncols() {
            for i in 0..output.nrows() {
                output[(i, j)] = self.compute_entry(i, j);
            }
        }
        Ok(())
    }

    fn compute_entry(&self, i: usize, j: usize) -> T {
        let (r, s) = self.pattern.shape();
        self.base[(i / r, j / s)].clone() * self.pattern[(i % r, j % s)].clone()
    }
}
