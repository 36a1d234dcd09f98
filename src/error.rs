//! Error types.
//!
//! All operations in `continuum` are pure transformations, so errors always indicate
//! a violated precondition on the caller's side. Nothing is retried or recovered internally.
use std::error::Error;
use std::fmt;
use std::fmt::Display;

/// Shapes of the operands are incompatible with the requested operation.
///
/// Only the runtime-checked APIs can produce this error. The statically sized APIs reject
/// the same mistakes at compile time.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DimensionMismatch {
    /// The Voigt vector has no entries past the padded three-entry diagonal block.
    VoigtTooShort { len: usize },
    /// The Voigt vector length does not correspond to the requested tensor dimension.
    VoigtLength { expected: usize, actual: usize },
    /// The number of matrix columns does not match the length of the Voigt vector.
    Contraction { matrix_cols: usize, vector_len: usize },
    /// A matrix does not have the expected `(rows, cols)` shape.
    Shape {
        expected: (usize, usize),
        actual: (usize, usize),
    },
}

impl Display for DimensionMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            &DimensionMismatch::VoigtTooShort { len } => {
                write!(
                    f,
                    "Voigt vector must have more than 3 components, but has {} components.",
                    len
                )
            }
            &DimensionMismatch::VoigtLength { expected, actual } => {
                write!(f, "Expected Voigt vector of length {}, got length {}.", expected, actual)
            }
            &DimensionMismatch::Contraction {
                matrix_cols,
                vector_len,
            } => {
                write!(
                    f,
                    "Cannot contract matrix with {} columns with Voigt vector of length {}.",
                    matrix_cols, vector_len
                )
            }
            &DimensionMismatch::Shape { expected, actual } => {
                write!(
                    f,
                    "Expected matrix of shape {}x{}, got {}x{}.",
                    expected.0, expected.1, actual.0, actual.1
                )
            }
        }
    }
}

impl Error for DimensionMismatch {}

/// The input matrix is (numerically) singular.
///
/// Reports the extreme eigenvalues of the symmetric positive semi-definite matrix
/// ($\vec F^T \vec F$ or $\vec F \vec F^T$) whose spectrum was inspected.
///
/// Input whose Cauchy-Green tensor is not finite, because the input itself contains NaN or
/// infinite entries or because $\vec F^T \vec F$ overflows, is reported with NaN eigenvalues.
/// See [`SingularInput::is_non_finite`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SingularInput {
    pub smallest_eigenvalue: f64,
    pub largest_eigenvalue: f64,
}

impl SingularInput {
    pub(crate) fn non_finite() -> Self {
        Self {
            smallest_eigenvalue: f64::NAN,
            largest_eigenvalue: f64::NAN,
        }
    }

    /// Whether the input was rejected because its Cauchy-Green tensor is not finite.
    pub fn is_non_finite(&self) -> bool {
        self.smallest_eigenvalue.is_nan() && self.largest_eigenvalue.is_nan()
    }
}

impl Display for SingularInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        if self.is_non_finite() {
            write!(
                f,
                "Cauchy-Green tensor of input matrix is not finite: the input contains \
                 non-finite entries or is too large to square."
            )
        } else {
            write!(
                f,
                "Input matrix is singular: eigenvalues of the associated Cauchy-Green tensor \
                 range from {:e} to {:e}.",
                self.smallest_eigenvalue, self.largest_eigenvalue
            )
        }
    }
}

impl Error for SingularInput {}

/// Any error produced by `continuum`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TensorError {
    DimensionMismatch(DimensionMismatch),
    SingularInput(SingularInput),
}

impl Display for TensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            TensorError::DimensionMismatch(err) => write!(f, "Dimension mismatch. {}", err),
            TensorError::SingularInput(err) => write!(f, "Singular input. {}", err),
        }
    }
}

impl Error for TensorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TensorError::DimensionMismatch(err) => Some(err),
            TensorError::SingularInput(err) => Some(err),
        }
    }
}

impl From<DimensionMismatch> for TensorError {
    fn from(err: DimensionMismatch) -> Self {
        Self::DimensionMismatch(err)
    }
}

impl From<SingularInput> for TensorError {
    fn from(err: SingularInput) -> Self {
        Self::SingularInput(err)
    }
}
