//! Tensor algebra for continuum mechanics.
//!
//! `continuum` provides the small, stateless building blocks that material models and finite
//! element codes use to move between physical second-order tensors and their reduced forms:
//!
//! - [Voigt vector algebra](voigt): trace, identity, norm and operator contraction directly
//!   on Voigt vectors.
//! - [Strain and stress conversions](conversion) between symmetric tensors and Voigt vectors.
//!   Strain vectors store doubled (engineering) shear components, stress vectors do not.
//! - [Polar decompositions](polar) $\vec F = \vec R \vec U = \vec V \vec R$ of deformation
//!   gradients.
//! - [Strain measures](kinematics) derived from the deformation gradient.
//! - [Lazy Kronecker-style expansion](expand) of one matrix by another.
//!
//! Tensor dimensions are encoded in the type system, so that for example a 2D Voigt vector
//! cannot be passed to an operation that requires off-diagonal entries past the padded
//! diagonal block.
use nalgebra::{DimMin, DimName};

pub mod allocators;
pub mod conversion;
pub mod error;
pub mod expand;
pub mod kinematics;
pub mod polar;
pub mod voigt;

#[cfg(feature = "proptest-support")]
pub mod proptest;

pub extern crate nalgebra;

pub use continuum_traits::Real;

/// A small, fixed-size dimension.
///
/// Used as a trait alias for various traits frequently needed by generic `continuum` routines.
pub trait SmallDim: DimName + DimMin<Self, Output = Self> {}

impl<D> SmallDim for D where D: DimName + DimMin<Self, Output = Self> {}
