use crate::unit_tests::{symmetric_tensor_2d, symmetric_tensor_3d};
use continuum::conversion::{
    strain_to_voigt, stress_to_voigt, try_voigt_to_strain, try_voigt_to_stress, voigt_to_strain, voigt_to_stress,
};
use continuum::error::DimensionMismatch;
use continuum::nalgebra::{DVector, Vector3, Vector6, U2, U3};
use continuum::proptest::{symmetric_matrix2, symmetric_matrix3};
use continuum::voigt::double_off_diagonal;
use matrixcompare::prop_assert_matrix_eq;
use proptest::prelude::*;

#[test]
fn strain_to_voigt_3d_doubles_shear_in_voigt_order() {
    let voigt = strain_to_voigt(&symmetric_tensor_3d());
    // (xx, yy, zz, xy, yz, xz)
    assert_eq!(voigt, Vector6::new(1.0, 2.0, 3.0, 8.0, 10.0, 12.0));
}

#[test]
fn stress_to_voigt_3d_keeps_shear_in_voigt_order() {
    let voigt = stress_to_voigt(&symmetric_tensor_3d());
    assert_eq!(voigt, Vector6::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0));
}

#[test]
fn strain_and_stress_to_voigt_2d() {
    // (xx, yy, xy)
    assert_eq!(strain_to_voigt(&symmetric_tensor_2d()), Vector3::new(1.0, 2.0, 6.0));
    assert_eq!(stress_to_voigt(&symmetric_tensor_2d()), Vector3::new(1.0, 2.0, 3.0));
}

#[test]
fn voigt_to_strain_halves_shear() {
    let voigt_3d = Vector6::new(1.0, 2.0, 3.0, 8.0, 10.0, 12.0);
    assert_eq!(voigt_to_strain(&voigt_3d), symmetric_tensor_3d());

    let voigt_2d = Vector3::new(1.0, 2.0, 6.0);
    assert_eq!(voigt_to_strain(&voigt_2d), symmetric_tensor_2d());
}

#[test]
fn voigt_to_stress_mirrors_shear() {
    let voigt_3d = Vector6::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
    assert_eq!(voigt_to_stress(&voigt_3d), symmetric_tensor_3d());

    let voigt_2d = Vector3::new(1.0, 2.0, 3.0);
    assert_eq!(voigt_to_stress(&voigt_2d), symmetric_tensor_2d());
}

#[test]
fn strain_and_stress_conventions_differ_by_doubled_shear() {
    let tensor = symmetric_tensor_3d();
    assert_eq!(strain_to_voigt(&tensor), double_off_diagonal(&stress_to_voigt(&tensor)));
}

#[test]
fn conversions_accept_matrix_views() {
    let tensor = symmetric_tensor_3d();
    let view = tensor.fixed_view::<3, 3>(0, 0);
    assert_eq!(strain_to_voigt(&view), strain_to_voigt(&tensor));

    let voigt = stress_to_voigt(&tensor);
    assert_eq!(voigt_to_stress(&voigt.fixed_rows::<6>(0)), tensor);
}

#[test]
fn try_voigt_to_strain_checks_length() {
    let voigt_3d = DVector::from_column_slice(&[1.0, 2.0, 3.0, 8.0, 10.0, 12.0]);
    assert_eq!(try_voigt_to_strain::<f64, U3>(&voigt_3d), Ok(symmetric_tensor_3d()));
    assert_eq!(
        try_voigt_to_strain::<f64, U2>(&voigt_3d),
        Err(DimensionMismatch::VoigtLength { expected: 3, actual: 6 })
    );

    let voigt_2d = DVector::from_column_slice(&[1.0, 2.0, 6.0]);
    assert_eq!(try_voigt_to_strain::<f64, U2>(&voigt_2d), Ok(symmetric_tensor_2d()));
    assert_eq!(
        try_voigt_to_strain::<f64, U3>(&voigt_2d),
        Err(DimensionMismatch::VoigtLength { expected: 6, actual: 3 })
    );
}

#[test]
fn try_voigt_to_stress_checks_length() {
    let voigt_3d = DVector::from_column_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(try_voigt_to_stress::<f64, U3>(&voigt_3d), Ok(symmetric_tensor_3d()));

    let too_long = DVector::from_column_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
    assert_eq!(
        try_voigt_to_stress::<f64, U3>(&too_long),
        Err(DimensionMismatch::VoigtLength { expected: 6, actual: 7 })
    );
}

proptest! {
    #[test]
    fn strain_round_trip_3d(tensor in symmetric_matrix3()) {
        prop_assert_matrix_eq!(voigt_to_strain(&strain_to_voigt(&tensor)), tensor, comp = abs, tol = 1e-14);
    }

    #[test]
    fn stress_round_trip_3d(tensor in symmetric_matrix3()) {
        prop_assert_matrix_eq!(voigt_to_stress(&stress_to_voigt(&tensor)), tensor, comp = abs, tol = 1e-14);
    }

    #[test]
    fn strain_round_trip_2d(tensor in symmetric_matrix2()) {
        prop_assert_matrix_eq!(voigt_to_strain(&strain_to_voigt(&tensor)), tensor, comp = abs, tol = 1e-14);
    }

    #[test]
    fn stress_round_trip_2d(tensor in symmetric_matrix2()) {
        prop_assert_matrix_eq!(voigt_to_stress(&stress_to_voigt(&tensor)), tensor, comp = abs, tol = 1e-14);
    }

    #[test]
    fn mixing_conventions_does_not_round_trip(tensor in symmetric_matrix3()) {
        // Reading a strain vector as a stress vector doubles the shear entries
        let mixed = voigt_to_stress(&strain_to_voigt(&tensor));
        let mut expected = tensor * 2.0;
        expected.set_diagonal(&tensor.diagonal());
        prop_assert_matrix_eq!(mixed, expected, comp = abs, tol = 1e-14);
    }
}
