//! Helper traits for allocator trait bounds.
use crate::voigt::SymmetricDim;
use nalgebra::{DefaultAllocator, Scalar};

/// An allocator for a symmetric tensor dimension together with its Voigt vector length.
pub trait VoigtAllocator<T, D>: BiDimAllocator<T, D, D::VoigtDim>
where
    T: Scalar,
    D: SymmetricDim,
{
}

impl<T, D> VoigtAllocator<T, D> for DefaultAllocator
where
    T: Scalar,
    D: SymmetricDim,
    DefaultAllocator: BiDimAllocator<T, D, D::VoigtDim>,
{
}

pub use continuum_traits::allocators::*;
