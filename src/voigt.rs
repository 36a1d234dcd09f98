//! Algebra directly on Voigt vectors.
//!
//! A Voigt vector stores the $n(n+1)/2$ independent components of a symmetric second-order
//! tensor. The leading three entries always hold the diagonal of the (padded) 3D tensor,
//! also for 2D problems, so that bulk quantities such as the trace can be computed uniformly.
//! The remaining entries are off-diagonal terms. Whether those are stored doubled (strain)
//! or unscaled (stress) is a matter of meaning, not of the vector itself. See
//! [`conversion`](crate::conversion) for the conversions to and from full tensors.
//!
//! The operations in this module need at least one off-diagonal entry past the diagonal block.
//! This is enforced through [`PaddedVoigtDim`]: a 2D Voigt vector, which has exactly three
//! entries, is rejected at compile time.
//!
//! ```compile_fail
//! use continuum::nalgebra::Vector3;
//! use continuum::voigt::trace;
//!
//! let _ = trace(&Vector3::new(1.0, 2.0, 3.0));
//! ```
//!
//! Runtime-checked counterparts for dynamically sized storage are available with a `try_` prefix.
use crate::error::DimensionMismatch;
use crate::{Real, SmallDim};
use nalgebra::allocator::Allocator;
use nalgebra::storage::Storage;
use nalgebra::{
    DMatrixView, DVector, DVectorView, DefaultAllocator, DimName, DimSub, Matrix, OVector, Vector, U1, U2, U3, U4,
    U5, U6, U7, U8, U9,
};
use numeric_literals::replace_float_literals;

/// Number of leading Voigt entries that hold the diagonal of the padded 3D tensor.
const DIAGONAL_BLOCK_LEN: usize = 3;

/// The dimension of a symmetric second-order tensor that has a Voigt representation.
pub trait SymmetricDim: SmallDim + DimSub<U1> {
    /// The length of the associated Voigt vector.
    type VoigtDim: VoigtDim;

    /// Tensor indices `(row, col)` of the off-diagonal entries, in Voigt storage order.
    ///
    /// The off-diagonal entries are stored directly after the diagonal entries.
    const OFF_DIAGONAL: &'static [(usize, usize)];
}

/// The length of a Voigt vector, together with the dimension of the tensor it represents.
pub trait VoigtDim: DimName {
    type TensorDim: SymmetricDim;
}

/// The length of a Voigt vector that holds the padded diagonal block followed by
/// at least one off-diagonal entry.
pub trait PaddedVoigtDim: DimName {}

impl SymmetricDim for U2 {
    type VoigtDim = U3;
    const OFF_DIAGONAL: &'static [(usize, usize)] = &[(0, 1)];
}

impl SymmetricDim for U3 {
    type VoigtDim = U6;
    const OFF_DIAGONAL: &'static [(usize, usize)] = &[(0, 1), (1, 2), (0, 2)];
}

impl VoigtDim for U3 {
    type TensorDim = U2;
}

impl VoigtDim for U6 {
    type TensorDim = U3;
}

macro_rules! impl_padded_voigt_dim {
    ($($dim:ty),*) => {
        $(impl PaddedVoigtDim for $dim {})*
    };
}

impl_padded_voigt_dim!(U4, U5, U6, U7, U8, U9);

/// The sum of the three diagonal entries of the Voigt vector.
pub fn trace<T, L, S>(voigt: &Vector<T, L, S>) -> T
where
    T: Real,
    L: PaddedVoigtDim,
    S: Storage<T, L>,
{
    voigt[0] + voigt[1] + voigt[2]
}

/// The Voigt representation of the identity tensor.
///
/// The diagonal block holds ones and all off-diagonal entries are zero.
pub fn identity<T, L>() -> OVector<T, L>
where
    T: Real,
    L: PaddedVoigtDim,
    DefaultAllocator: Allocator<T, L>,
{
    OVector::<T, L>::from_fn(|i, _| if i < DIAGONAL_BLOCK_LEN { T::one() } else { T::zero() })
}

/// Returns a copy of the Voigt vector with every off-diagonal entry multiplied by `factor`.
///
/// This is the primitive for switching between the unscaled and the doubled off-diagonal
/// convention before algebraic operations.
pub fn scale_off_diagonal<T, L, S>(voigt: &Vector<T, L, S>, factor: T) -> OVector<T, L>
where
    T: Real,
    L: PaddedVoigtDim,
    S: Storage<T, L>,
    DefaultAllocator: Allocator<T, L>,
{
    let mut scaled = voigt.clone_owned();
    for entry in scaled.iter_mut().skip(DIAGONAL_BLOCK_LEN) {
        *entry *= factor;
    }
    scaled
}

/// Same as [`scale_off_diagonal`] with a factor of two.
#[replace_float_literals(T::from_f64(literal).expect("literal must fit in T"))]
pub fn double_off_diagonal<T, L, S>(voigt: &Vector<T, L, S>) -> OVector<T, L>
where
    T: Real,
    L: PaddedVoigtDim,
    S: Storage<T, L>,
    DefaultAllocator: Allocator<T, L>,
{
    scale_off_diagonal(voigt, 2.0)
}

/// The Frobenius norm of the tensor represented by an unscaled (stress-convention) Voigt vector.
///
/// Every off-diagonal entry represents two entries of the symmetric tensor, so the naive
/// Euclidean norm of the vector underestimates the norm of the tensor. The off-diagonal entries
/// are therefore scaled by $\sqrt{2}$ before taking the norm.
///
/// ```
/// use continuum::nalgebra::Vector6;
/// use continuum::voigt::norm;
///
/// // The tensor has two entries equal to 1 on the off-diagonal
/// let v = Vector6::new(0.0, 0.0, 0.0, 1.0, 0.0, 0.0);
/// assert!((norm(&v) - f64::sqrt(2.0)).abs() < 1e-14);
/// ```
pub fn norm<T, L, S>(voigt: &Vector<T, L, S>) -> T
where
    T: Real,
    L: PaddedVoigtDim,
    S: Storage<T, L>,
    DefaultAllocator: Allocator<T, L>,
{
    scale_off_diagonal(voigt, sqrt_2()).norm()
}

/// Applies a linear operator in Voigt form, such as a stiffness matrix, to a Voigt vector.
///
/// Computes `matrix * double_off_diagonal(voigt)`, so that the contributions of the
/// symmetric off-diagonal entries are counted twice.
pub fn contract<T, R, L, S1, S2>(matrix: &Matrix<T, R, L, S1>, voigt: &Vector<T, L, S2>) -> OVector<T, R>
where
    T: Real,
    R: DimName,
    L: PaddedVoigtDim,
    S1: Storage<T, R, L>,
    S2: Storage<T, L>,
    DefaultAllocator: Allocator<T, R> + Allocator<T, L>,
{
    matrix * double_off_diagonal(voigt)
}

/// Runtime-checked version of [`trace`].
pub fn try_trace<'a, T: Real>(voigt: impl Into<DVectorView<'a, T>>) -> Result<T, DimensionMismatch> {
    let voigt = voigt.into();
    check_padded_len(voigt.len())?;
    Ok(voigt[0] + voigt[1] + voigt[2])
}

/// Runtime-checked version of [`identity`].
pub fn try_identity<T: Real>(len: usize) -> Result<DVector<T>, DimensionMismatch> {
    check_padded_len(len)?;
    Ok(DVector::from_fn(len, |i, _| {
        if i < DIAGONAL_BLOCK_LEN {
            T::one()
        } else {
            T::zero()
        }
    }))
}

/// Runtime-checked version of [`scale_off_diagonal`].
pub fn try_scale_off_diagonal<'a, T: Real>(
    voigt: impl Into<DVectorView<'a, T>>,
    factor: T,
) -> Result<DVector<T>, DimensionMismatch> {
    let voigt = voigt.into();
    check_padded_len(voigt.len())?;
    let mut scaled = voigt.clone_owned();
    for entry in scaled.iter_mut().skip(DIAGONAL_BLOCK_LEN) {
        *entry *= factor;
    }
    Ok(scaled)
}

/// Runtime-checked version of [`norm`].
pub fn try_norm<'a, T: Real>(voigt: impl Into<DVectorView<'a, T>>) -> Result<T, DimensionMismatch> {
    try_scale_off_diagonal(voigt, sqrt_2()).map(|scaled| scaled.norm())
}

/// Runtime-checked version of [`contract`].
#[replace_float_literals(T::from_f64(literal).expect("literal must fit in T"))]
pub fn try_contract<'a, 'b, T: Real>(
    matrix: impl Into<DMatrixView<'a, T>>,
    voigt: impl Into<DVectorView<'b, T>>,
) -> Result<DVector<T>, DimensionMismatch> {
    let matrix = matrix.into();
    let voigt = voigt.into();
    if matrix.ncols() != voigt.len() {
        return Err(DimensionMismatch::Contraction {
            matrix_cols: matrix.ncols(),
            vector_len: voigt.len(),
        });
    }
    let doubled = try_scale_off_diagonal(voigt, 2.0)?;
    Ok(matrix * doubled)
}

fn check_padded_len(len: usize) -> Result<(), DimensionMismatch> {
    if len > DIAGONAL_BLOCK_LEN {
        Ok(())
    } else {
        Err(DimensionMismatch::VoigtTooShort { len })
    }
}

#[replace_float_literals(T::from_f64(literal).expect("literal must fit in T"))]
fn sqrt_2<T: Real>() -> T {
    T::sqrt(2.0)
}
