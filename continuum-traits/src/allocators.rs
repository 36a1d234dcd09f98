//! Helper traits for allocator trait bounds.
use nalgebra::allocator::Allocator;
use nalgebra::{DefaultAllocator, DimDiff, DimName, DimSub, Scalar, U1};

/// An allocator for a single dimension.
pub trait DimAllocator<T: Scalar, D: DimName>: Allocator<T, D> + Allocator<T, D, D> + Allocator<T, U1, D> {}

impl<T, D> DimAllocator<T, D> for DefaultAllocator
where
    T: Scalar,
    D: DimName,
    DefaultAllocator: Allocator<T, D> + Allocator<T, D, D> + Allocator<T, U1, D>,
{
}

/// An allocator for two dimensions.
pub trait BiDimAllocator<T: Scalar, D1: DimName, D2: DimName>:
    DimAllocator<T, D1> + DimAllocator<T, D2> + Allocator<T, D1, D2> + Allocator<T, D2, D1>
{
}

impl<T: Scalar, D1: DimName, D2: DimName> BiDimAllocator<T, D1, D2> for DefaultAllocator where
    DefaultAllocator: DimAllocator<T, D1> + DimAllocator<T, D2> + Allocator<T, D1, D2> + Allocator<T, D2, D1>
{
}

/// An allocator for symmetric eigen-decompositions of square matrices of dimension `D`.
///
/// The tridiagonalization used by `nalgebra` needs storage for the off-diagonal of size `D - 1`.
pub trait EigenAllocator<T: Scalar, D: DimName + DimSub<U1>>:
    DimAllocator<T, D> + Allocator<T, DimDiff<D, U1>>
{
}

impl<T, D> EigenAllocator<T, D> for DefaultAllocator
where
    T: Scalar,
    D: DimName + DimSub<U1>,
    DefaultAllocator: DimAllocator<T, D> + Allocator<T, DimDiff<D, U1>>,
{
}
