//! Strain measures derived from the deformation gradient $\vec F$.
//!
//! All strain measures are symmetric and can be converted to Voigt form with
//! [`strain_to_voigt`](crate::conversion::strain_to_voigt).
use crate::allocators::{DimAllocator, EigenAllocator};
use crate::error::SingularInput;
use crate::polar::{checked_symmetric_eigen, map_spectrum, PolarDecompositionSettings, RightPolarDecomposition};
use crate::voigt::SymmetricDim;
use crate::Real;
use nalgebra::storage::Storage;
use nalgebra::{DefaultAllocator, DimName, Matrix, OMatrix};
use numeric_literals::replace_float_literals;

/// The right Cauchy-Green tensor $\vec C = \vec F^T \vec F$.
pub fn right_cauchy_green<T, D, S>(deformation_gradient: &Matrix<T, D, D, S>) -> OMatrix<T, D, D>
where
    T: Real,
    D: DimName,
    S: Storage<T, D, D>,
    DefaultAllocator: DimAllocator<T, D>,
{
    deformation_gradient.tr_mul(deformation_gradient)
}

/// The left Cauchy-Green tensor $\vec B = \vec F \vec F^T$.
pub fn left_cauchy_green<T, D, S>(deformation_gradient: &Matrix<T, D, D, S>) -> OMatrix<T, D, D>
where
    T: Real,
    D: DimName,
    S: Storage<T, D, D>,
    DefaultAllocator: DimAllocator<T, D>,
{
    deformation_gradient * deformation_gradient.transpose()
}

/// The Green-Lagrange strain tensor $\vec E = \frac{1}{2} (\vec F^T \vec F - \vec I)$.
#[allow(non_snake_case)]
#[replace_float_literals(T::from_f64(literal).expect("literal must fit in T"))]
pub fn green_lagrange_strain<T, D, S>(deformation_gradient: &Matrix<T, D, D, S>) -> OMatrix<T, D, D>
where
    T: Real,
    D: DimName,
    S: Storage<T, D, D>,
    DefaultAllocator: DimAllocator<T, D>,
{
    let I = OMatrix::<T, D, D>::identity();
    (right_cauchy_green(deformation_gradient) - I) * 0.5
}

/// The infinitesimal strain tensor $\vec \epsilon = \frac{1}{2} (\vec F + \vec F^T) - \vec I$.
///
/// This is the linearization of the Green-Lagrange strain around $\vec F = \vec I$.
#[replace_float_literals(T::from_f64(literal).expect("literal must fit in T"))]
pub fn infinitesimal_strain<T, D, S>(deformation_gradient: &Matrix<T, D, D, S>) -> OMatrix<T, D, D>
where
    T: Real,
    D: DimName,
    S: Storage<T, D, D>,
    DefaultAllocator: DimAllocator<T, D>,
{
    let f = deformation_gradient;
    (f + f.transpose()) * 0.5 - OMatrix::<T, D, D>::identity()
}

/// The Hencky (logarithmic) strain tensor $\vec H = \ln \vec U = \frac{1}{2} \ln (\vec F^T \vec F)$.
///
/// Computed from the same checked symmetric eigen-decomposition as the polar decomposition,
/// so singular input is rejected in the same way.
#[replace_float_literals(T::from_f64(literal).expect("literal must fit in T"))]
pub fn hencky_strain<T, D, S>(
    deformation_gradient: &Matrix<T, D, D, S>,
    settings: &PolarDecompositionSettings<T>,
) -> Result<OMatrix<T, D, D>, SingularInput>
where
    T: Real,
    D: SymmetricDim,
    S: Storage<T, D, D>,
    DefaultAllocator: EigenAllocator<T, D>,
{
    let eigen = checked_symmetric_eigen(right_cauchy_green(deformation_gradient), settings)?;
    Ok(map_spectrum(&eigen, |lambda| 0.5 * lambda.ln()))
}

impl<T, D> RightPolarDecomposition<T, D>
where
    T: Real,
    D: SymmetricDim,
    DefaultAllocator: EigenAllocator<T, D>,
{
    /// The Biot strain tensor $\vec U - \vec I$.
    pub fn biot_strain(&self) -> OMatrix<T, D, D> {
        &self.stretch - OMatrix::<T, D, D>::identity()
    }
}
