//! Conversion between symmetric second-order tensors and Voigt vectors.
//!
//! The Voigt order is $(xx, yy, xy)$ in 2D and $(xx, yy, zz, xy, yz, xz)$ in 3D.
//!
//! Strain and stress use different conventions for the off-diagonal (shear) entries:
//!
//! - Strain Voigt vectors store the *engineering* shear strain, i.e. off-diagonal entries
//!   are doubled: $\gamma_{xy} = 2 \epsilon_{xy}$.
//! - Stress Voigt vectors store the off-diagonal entries unscaled.
//!
//! Mixing up the two silently produces wrong results, so callers must always pick the
//! variant matching the physical quantity. The functions never infer the convention from the data.
//!
//! Tensors are assumed to be symmetric. Only the diagonal and the upper triangle are read.
//!
//! ```
//! use continuum::conversion::{strain_to_voigt, voigt_to_strain};
//! use continuum::nalgebra::{Matrix2, Vector3};
//!
//! let strain = Matrix2::new(1.0, 0.5,
//!                           0.5, 2.0);
//! let voigt = strain_to_voigt(&strain);
//! assert_eq!(voigt, Vector3::new(1.0, 2.0, 1.0));
//! assert_eq!(voigt_to_strain(&voigt), strain);
//! ```
use crate::allocators::VoigtAllocator;
use crate::error::DimensionMismatch;
use crate::voigt::{SymmetricDim, VoigtDim};
use crate::Real;
use nalgebra::storage::Storage;
use nalgebra::{DVectorView, DefaultAllocator, DimName, Matrix, OMatrix, OVector, Vector};
use numeric_literals::replace_float_literals;

/// Converts a symmetric strain tensor to a Voigt vector with doubled off-diagonal entries.
#[replace_float_literals(T::from_f64(literal).expect("literal must fit in T"))]
pub fn strain_to_voigt<T, D, S>(strain: &Matrix<T, D, D, S>) -> OVector<T, D::VoigtDim>
where
    T: Real,
    D: SymmetricDim,
    S: Storage<T, D, D>,
    DefaultAllocator: VoigtAllocator<T, D>,
{
    tensor_to_voigt(strain, 2.0)
}

/// Converts a symmetric stress tensor to a Voigt vector with unscaled off-diagonal entries.
#[replace_float_literals(T::from_f64(literal).expect("literal must fit in T"))]
pub fn stress_to_voigt<T, D, S>(stress: &Matrix<T, D, D, S>) -> OVector<T, D::VoigtDim>
where
    T: Real,
    D: SymmetricDim,
    S: Storage<T, D, D>,
    DefaultAllocator: VoigtAllocator<T, D>,
{
    tensor_to_voigt(stress, 1.0)
}

/// Converts a strain Voigt vector (doubled off-diagonal entries) to the symmetric strain tensor.
#[replace_float_literals(T::from_f64(literal).expect("literal must fit in T"))]
pub fn voigt_to_strain<T, L, S>(voigt: &Vector<T, L, S>) -> OMatrix<T, L::TensorDim, L::TensorDim>
where
    T: Real,
    L: VoigtDim,
    S: Storage<T, L>,
    DefaultAllocator: VoigtAllocator<T, L::TensorDim>,
{
    tensor_from_voigt_entries(|k| voigt[k], 0.5)
}

/// Converts a stress Voigt vector (unscaled off-diagonal entries) to the symmetric stress tensor.
#[replace_float_literals(T::from_f64(literal).expect("literal must fit in T"))]
pub fn voigt_to_stress<T, L, S>(voigt: &Vector<T, L, S>) -> OMatrix<T, L::TensorDim, L::TensorDim>
where
    T: Real,
    L: VoigtDim,
    S: Storage<T, L>,
    DefaultAllocator: VoigtAllocator<T, L::TensorDim>,
{
    tensor_from_voigt_entries(|k| voigt[k], 1.0)
}

/// Runtime-checked version of [`voigt_to_strain`] for dynamically sized storage.
///
/// Returns an error if the length of the vector does not match the Voigt length
/// associated with the tensor dimension `D`.
#[replace_float_literals(T::from_f64(literal).expect("literal must fit in T"))]
pub fn try_voigt_to_strain<'a, T, D>(voigt: impl Into<DVectorView<'a, T>>) -> Result<OMatrix<T, D, D>, DimensionMismatch>
where
    T: Real,
    D: SymmetricDim,
    DefaultAllocator: VoigtAllocator<T, D>,
{
    let voigt = voigt.into();
    check_voigt_len::<D>(voigt.len())?;
    Ok(tensor_from_voigt_entries(|k| voigt[k], 0.5))
}

/// Runtime-checked version of [`voigt_to_stress`] for dynamically sized storage.
#[replace_float_literals(T::from_f64(literal).expect("literal must fit in T"))]
pub fn try_voigt_to_stress<'a, T, D>(voigt: impl Into<DVectorView<'a, T>>) -> Result<OMatrix<T, D, D>, DimensionMismatch>
where
    T: Real,
    D: SymmetricDim,
    DefaultAllocator: VoigtAllocator<T, D>,
{
    let voigt = voigt.into();
    check_voigt_len::<D>(voigt.len())?;
    Ok(tensor_from_voigt_entries(|k| voigt[k], 1.0))
}

fn check_voigt_len<D: SymmetricDim>(len: usize) -> Result<(), DimensionMismatch> {
    let expected = D::VoigtDim::dim();
    if len == expected {
        Ok(())
    } else {
        Err(DimensionMismatch::VoigtLength { expected, actual: len })
    }
}

fn tensor_to_voigt<T, D, S>(tensor: &Matrix<T, D, D, S>, off_diagonal_scale: T) -> OVector<T, D::VoigtDim>
where
    T: Real,
    D: SymmetricDim,
    S: Storage<T, D, D>,
    DefaultAllocator: VoigtAllocator<T, D>,
{
    let n = D::dim();
    let mut voigt = OVector::<T, D::VoigtDim>::zeros();
    for i in 0..n {
        voigt[i] = tensor[(i, i)];
    }
    for (k, &(i, j)) in D::OFF_DIAGONAL.iter().enumerate() {
        voigt[n + k] = tensor[(i, j)] * off_diagonal_scale;
    }
    voigt
}

/// Builds a symmetric tensor from Voigt entries, where `entry(k)` returns the `k`-th Voigt entry.
fn tensor_from_voigt_entries<T, D>(entry: impl Fn(usize) -> T, off_diagonal_scale: T) -> OMatrix<T, D, D>
where
    T: Real,
    D: SymmetricDim,
    DefaultAllocator: VoigtAllocator<T, D>,
{
    let n = D::dim();
    let mut tensor = OMatrix::<T, D, D>::zeros();
    for i in 0..n {
        tensor[(i, i)] = entry(i);
    }
    for (k, &(i, j)) in D::OFF_DIAGONAL.iter().enumerate() {
        let value = entry(n + k) * off_diagonal_scale;
        tensor[(i, j)] = value;
        tensor[(j, i)] = value;
    }
    tensor
}
