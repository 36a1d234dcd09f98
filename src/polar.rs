//! Polar decompositions of deformation gradients.
//!
//! Any invertible square matrix $\vec F$ admits the unique factorizations
//! $$
//! \vec F = \vec R \vec U = \vec V \vec R,
//! $$
//! where $\vec U$ and $\vec V$ are symmetric positive definite (the right and left stretch
//! tensors) and $\vec R$ is orthogonal.
//!
//! The orthogonal factor is computed with the scaled Newton iteration
//! $$
//! \vec X_{k+1} = \frac{1}{2} \left( \gamma_k \vec X_k + \gamma_k^{-1} \vec X_k^{-T} \right),
//! \quad \vec X_0 = \vec F,
//! $$
//! which converges quadratically to $\vec R$ for any invertible $\vec F$ and keeps $\vec R$ orthogonal
//! to round-off also when $\vec F^T \vec F$ has (nearly) repeated eigenvalues. The stretches then
//! follow as the symmetric parts of $\vec R^T \vec F$ and $\vec F \vec R^T$.
//!
//! # Preconditions
//!
//! $\vec F$ must be invertible. Singular or nearly singular input is detected by inspecting the
//! spectrum of $\vec F^T \vec F$ (resp. $\vec F \vec F^T$) and reported as [`SingularInput`]
//! instead of producing a meaningless rotation. If $\det \vec F < 0$, the orthogonal factor is
//! an improper rotation with $\det \vec R = -1$.
use crate::allocators::EigenAllocator;
use crate::error::SingularInput;
use crate::voigt::SymmetricDim;
use crate::Real;
use log::{debug, trace};
use nalgebra::allocator::Allocator;
use nalgebra::storage::Storage;
use nalgebra::{DefaultAllocator, DimName, Matrix, OMatrix, Scalar, SymmetricEigen};
use numeric_literals::replace_float_literals;
use serde::{Deserialize, Serialize};


/// Settings for polar decompositions and other spectral computations on deformation gradients.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolarDecompositionSettings<T> {
    /// Relative tolerance for detecting singular input.
    ///
    /// The input is rejected if $\lambda_{\min} \leq \tau \lambda_{\max}$, where $\lambda$ are the
    /// eigenvalues of $\vec F^T \vec F$ (or $\vec F \vec F^T$) and $\tau$ is the tolerance.
    pub singular_tolerance: T,
    /// Maximum number of iterations of the polar iteration and the symmetric eigen solver.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

fn default_max_iterations() -> usize {
    100
}

impl<T: Real> Default for PolarDecompositionSettings<T> {
    #[replace_float_literals(T::from_f64(literal).expect("literal must fit in T"))]
    fn default() -> Self {
        Self {
            singular_tolerance: 1e-12,
            max_iterations: default_max_iterations(),
        }
    }
}

/// The right polar decomposition $\vec F = \vec R \vec U$.
#[derive(Debug, Clone, PartialEq)]
pub struct RightPolarDecomposition<T, D>
where
    T: Scalar,
    D: DimName,
    DefaultAllocator: Allocator<T, D, D>,
{
    /// The orthogonal factor $\vec R$.
    pub rotation: OMatrix<T, D, D>,
    /// The right stretch tensor $\vec U = \sqrt{\vec F^T \vec F}$.
    pub stretch: OMatrix<T, D, D>,
    /// The inverse right stretch tensor $\vec U^{-1}$.
    pub stretch_inverse: OMatrix<T, D, D>,
}

/// The left polar decomposition $\vec F = \vec V \vec R$.
#[derive(Debug, Clone, PartialEq)]
pub struct LeftPolarDecomposition<T, D>
where
    T: Scalar,
    D: DimName,
    DefaultAllocator: Allocator<T, D, D>,
{
    /// The orthogonal factor $\vec R$.
    pub rotation: OMatrix<T, D, D>,
    /// The left stretch tensor $\vec V = \sqrt{\vec F \vec F^T}$.
    pub stretch: OMatrix<T, D, D>,
    /// The inverse left stretch tensor $\vec V^{-1}$.
    pub stretch_inverse: OMatrix<T, D, D>,
}

#[allow(non_snake_case)]
impl<T, D> RightPolarDecomposition<T, D>
where
    T: Real,
    D: SymmetricDim,
    DefaultAllocator: EigenAllocator<T, D>,
{
    /// Computes the right polar decomposition with default settings.
    pub fn try_from_matrix<S>(deformation_gradient: &Matrix<T, D, D, S>) -> Result<Self, SingularInput>
    where
        S: Storage<T, D, D>,
    {
        Self::try_from_matrix_with_settings(deformation_gradient, &PolarDecompositionSettings::default())
    }

    pub fn try_from_matrix_with_settings<S>(
        deformation_gradient: &Matrix<T, D, D, S>,
        settings: &PolarDecompositionSettings<T>,
    ) -> Result<Self, SingularInput>
    where
        S: Storage<T, D, D>,
    {
        let F = deformation_gradient;
        let spectrum = check_spectrum(&F.tr_mul(F), settings)?;
        let (R, F_inv) = orthogonal_polar_factor(F, spectrum, settings)?;
        // U = R^T F and U^-1 = F^-1 R, symmetrized to remove round-off
        let U = symmetric_part(R.tr_mul(F));
        let U_inv = symmetric_part(F_inv * &R);
        Ok(Self {
            rotation: R,
            stretch: U,
            stretch_inverse: U_inv,
        })
    }

    /// Returns $\vec R \vec U$, which reproduces the original matrix up to round-off.
    pub fn reconstruct(&self) -> OMatrix<T, D, D> {
        &self.rotation * &self.stretch
    }

    /// The left stretch tensor $\vec V = \vec R \vec U \vec R^T$ of the same matrix.
    pub fn left_stretch(&self) -> OMatrix<T, D, D> {
        &self.rotation * &self.stretch * self.rotation.transpose()
    }
}

#[allow(non_snake_case)]
impl<T, D> LeftPolarDecomposition<T, D>
where
    T: Real,
    D: SymmetricDim,
    DefaultAllocator: EigenAllocator<T, D>,
{
    /// Computes the left polar decomposition with default settings.
    pub fn try_from_matrix<S>(deformation_gradient: &Matrix<T, D, D, S>) -> Result<Self, SingularInput>
    where
        S: Storage<T, D, D>,
    {
        Self::try_from_matrix_with_settings(deformation_gradient, &PolarDecompositionSettings::default())
    }

    pub fn try_from_matrix_with_settings<S>(
        deformation_gradient: &Matrix<T, D, D, S>,
        settings: &PolarDecompositionSettings<T>,
    ) -> Result<Self, SingularInput>
    where
        S: Storage<T, D, D>,
    {
        let F = deformation_gradient;
        let spectrum = check_spectrum(&(F * F.transpose()), settings)?;
        let (R, F_inv) = orthogonal_polar_factor(F, spectrum, settings)?;
        // V = F R^T and V^-1 = R F^-1
        let V = symmetric_part(F * R.transpose());
        let V_inv = symmetric_part(&R * F_inv);
        Ok(Self {
            rotation: R,
            stretch: V,
            stretch_inverse: V_inv,
        })
    }

    /// Returns $\vec V \vec R$, which reproduces the original matrix up to round-off.
    pub fn reconstruct(&self) -> OMatrix<T, D, D> {
        &self.stretch * &self.rotation
    }

    /// The right stretch tensor $\vec U = \vec R^T \vec V \vec R$ of the same matrix.
    pub fn right_stretch(&self) -> OMatrix<T, D, D> {
        self.rotation.tr_mul(&self.stretch) * &self.rotation
    }
}

/// Rejects the symmetric positive semi-definite matrix `c` if it is numerically singular
/// or not finite. Returns the smallest and largest eigenvalue otherwise.
fn check_spectrum<T, D>(c: &OMatrix<T, D, D>, settings: &PolarDecompositionSettings<T>) -> Result<(T, T), SingularInput>
where
    T: Real,
    D: SymmetricDim,
    DefaultAllocator: EigenAllocator<T, D>,
{
    // The eigen solver iterates until convergence, which never happens for non-finite entries
    if !c.iter().all(|c_ij| c_ij.is_finite()) {
        let err = SingularInput::non_finite();
        debug!("Rejecting input with non-finite Cauchy-Green tensor. {}", err);
        return Err(err);
    }

    let eigenvalues = c.symmetric_eigenvalues();
    trace!(
        "Eigenvalues of Cauchy-Green tensor: {:?}",
        eigenvalues.iter().collect::<Vec<_>>()
    );

    let lambda_min = eigenvalues.min();
    let lambda_max = eigenvalues.max();
    // Written as a negated comparison so that NaN spectra are rejected too
    if !(lambda_min > settings.singular_tolerance * lambda_max) {
        let err = singular_input(lambda_min, lambda_max);
        debug!("Rejecting singular input. {}", err);
        return Err(err);
    }

    Ok((lambda_min, lambda_max))
}

/// Computes the eigen-decomposition of the symmetric positive semi-definite matrix `c`,
/// rejecting it if it is numerically singular.
pub(crate) fn checked_symmetric_eigen<T, D>(
    c: OMatrix<T, D, D>,
    settings: &PolarDecompositionSettings<T>,
) -> Result<SymmetricEigen<T, D>, SingularInput>
where
    T: Real,
    D: SymmetricDim,
    DefaultAllocator: EigenAllocator<T, D>,
{
    check_spectrum(&c, settings)?;
    // A zero tolerance only decouples exactly vanishing off-diagonal entries. The default
    // tolerance stops early for clustered eigenvalues and loses about half the digits.
    // nalgebra treats zero iterations as unbounded
    let max_iterations = settings.max_iterations.max(1);
    match SymmetricEigen::try_new(c.clone(), T::zero(), max_iterations) {
        Some(eigen) => Ok(eigen),
        None => {
            debug!(
                "Symmetric eigen solver did not decouple exactly within {} iterations, \
                 falling back to default tolerance.",
                max_iterations
            );
            Ok(c.symmetric_eigen())
        }
    }
}

/// Applies `f` to the eigenvalues of a symmetric eigen-decomposition and recomposes the matrix.
pub(crate) fn map_spectrum<T, D>(eigen: &SymmetricEigen<T, D>, f: impl FnMut(T) -> T) -> OMatrix<T, D, D>
where
    T: Real,
    D: SymmetricDim,
    DefaultAllocator: EigenAllocator<T, D>,
{
    let q = &eigen.eigenvectors;
    let lambda = eigen.eigenvalues.map(f);
    q * OMatrix::<T, D, D>::from_diagonal(&lambda) * q.transpose()
}

/// Computes the orthogonal polar factor of `f` with the scaled Newton iteration.
///
/// Returns the orthogonal factor together with the inverse of `f`. The extreme eigenvalues
/// of the Cauchy-Green tensor are only used for error reporting.
#[replace_float_literals(T::from_f64(literal).expect("literal must fit in T"))]
fn orthogonal_polar_factor<T, D, S>(
    f: &Matrix<T, D, D, S>,
    (lambda_min, lambda_max): (T, T),
    settings: &PolarDecompositionSettings<T>,
) -> Result<(OMatrix<T, D, D>, OMatrix<T, D, D>), SingularInput>
where
    T: Real,
    D: SymmetricDim,
    S: Storage<T, D, D>,
    DefaultAllocator: EigenAllocator<T, D>,
{
    let f_inv = f
        .clone_owned()
        .try_inverse()
        .ok_or_else(|| singular_input(lambda_min, lambda_max))?;

    let mut x = f.clone_owned();
    let mut x_inv = f_inv.clone();
    let mut scaled = true;
    for iter in 0..settings.max_iterations {
        // Frobenius norm scaling, switched off close to convergence where it only adds round-off
        let gamma = if scaled { (x_inv.norm() / x.norm()).sqrt() } else { 1.0 };
        let x_next = (&x * gamma + x_inv.transpose() / gamma) * 0.5;
        let update = (&x_next - &x).norm() / x_next.norm();
        x = x_next;
        trace!("Polar iteration {}: relative update {:?}", iter, update);

        // Convergence is quadratic, so the error of the new iterate is of the order update^2
        if update <= 1e-9 {
            return Ok((x, f_inv));
        }
        if update < 1e-2 {
            scaled = false;
        }
        x_inv = x
            .clone()
            .try_inverse()
            .ok_or_else(|| singular_input(lambda_min, lambda_max))?;
    }

    let err = singular_input(lambda_min, lambda_max);
    debug!(
        "Polar iteration did not converge within {} iterations. {}",
        settings.max_iterations, err
    );
    Err(err)
}

#[replace_float_literals(T::from_f64(literal).expect("literal must fit in T"))]
fn symmetric_part<T, D>(a: OMatrix<T, D, D>) -> OMatrix<T, D, D>
where
    T: Real,
    D: SymmetricDim,
    DefaultAllocator: EigenAllocator<T, D>,
{
    (&a + a.transpose()) * 0.5
}

fn singular_input<T: Real>(lambda_min: T, lambda_max: T) -> SingularInput {
    SingularInput {
        smallest_eigenvalue: lambda_min.to_subset().unwrap_or(f64::NAN),
        largest_eigenvalue: lambda_max.to_subset().unwrap_or(f64::NAN),
    }
}
