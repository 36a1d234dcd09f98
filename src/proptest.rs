//! Strategies for property-based testing of code that uses `continuum`.
use ::proptest::array::{uniform2, uniform3, uniform6};
use ::proptest::prelude::*;
use nalgebra::{Matrix2, Matrix3, Rotation2, Rotation3, Vector3};

// Pick a reasonably small range to pick entries from, otherwise we can easily get floating
// point numbers that are so large as to make any tolerance meaningless
fn entry() -> std::ops::Range<f64> {
    -10.0..10.0
}

/// Singular values are drawn from this range, which keeps the condition number of
/// generated deformation gradients moderate.
fn singular_value() -> std::ops::Range<f64> {
    0.2..5.0
}

/// Arbitrary symmetric 2x2 tensors.
pub fn symmetric_matrix2() -> impl Strategy<Value = Matrix2<f64>> {
    uniform3(entry()).prop_map(|[xx, yy, xy]| Matrix2::new(xx, xy, xy, yy))
}

/// Arbitrary symmetric 3x3 tensors.
pub fn symmetric_matrix3() -> impl Strategy<Value = Matrix3<f64>> {
    uniform6(entry()).prop_map(|[xx, yy, zz, xy, yz, xz]| Matrix3::new(xx, xy, xz, xy, yy, yz, xz, yz, zz))
}

/// Arbitrary 2x2 deformation gradients with positive determinant.
pub fn deformation_gradient2() -> impl Strategy<Value = Matrix2<f64>> {
    let angle = -std::f64::consts::PI..std::f64::consts::PI;
    (angle.clone(), uniform2(singular_value()), angle).prop_map(|(angle1, [s1, s2], angle2)| {
        let rot1 = Rotation2::new(angle1).matrix().clone_owned();
        let rot2 = Rotation2::new(angle2).matrix().clone_owned();
        rot1 * Matrix2::new(s1, 0.0, 0.0, s2) * rot2
    })
}

/// Arbitrary 3x3 deformation gradients with positive determinant.
///
/// Constructed as $\vec R_1 \vec \Sigma \vec R_2$ with rotations $\vec R_1$, $\vec R_2$ and a
/// positive diagonal $\vec \Sigma$, so that the singular values are controlled.
pub fn deformation_gradient3() -> impl Strategy<Value = Matrix3<f64>> {
    (uniform3(entry()), uniform3(singular_value()), uniform3(entry())).prop_map(|(axis1, sigma, axis2)| {
        let rot1 = Rotation3::from_scaled_axis(Vector3::from(axis1))
            .matrix()
            .clone_owned();
        let rot2 = Rotation3::from_scaled_axis(Vector3::from(axis2))
            .matrix()
            .clone_owned();
        rot1 * Matrix3::from_diagonal(&Vector3::from(sigma)) * rot2
    })
}
