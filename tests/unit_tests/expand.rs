use continuum::error::DimensionMismatch;
use continuum::expand::expand;
use continuum::nalgebra::{DMatrix, Matrix2, Matrix2x3, Matrix3, Matrix3x2, Matrix6, OMatrix, U6};
use matrixcompare::assert_matrix_eq;
use nalgebra::matrix;

#[test]
fn expanded_shape_and_entries() {
    let a = Matrix2::new(1.0, 2.0, 3.0, 4.0);
    let b = Matrix3::from_fn(|i, j| (3 * i + j + 1) as f64);
    let expanded = expand(&a, &b);

    assert_eq!(expanded.nrows(), 6);
    assert_eq!(expanded.ncols(), 6);
    assert_eq!(expanded.shape(), (6, 6));
    assert_eq!(expanded.entry(4, 5), a[(1, 1)] * b[(1, 2)]);
    assert_eq!(expanded.entry(0, 0), 1.0);
    assert_eq!(expanded.entry(5, 0), a[(1, 0)] * b[(2, 0)]);
}

#[test]
fn evaluate_matches_kronecker_product_for_rectangular_operands() {
    let a = Matrix2x3::new(1.0, -2.0, 3.0, 0.5, 4.0, -1.0);
    let b = Matrix3x2::new(2.0, 1.0, 0.0, -3.0, 5.0, 7.0);
    let expanded = expand(&a, &b);

    assert_eq!(expanded.shape(), (6, 6));
    let evaluated: Matrix6<f64> = expanded.evaluate();
    assert_eq!(evaluated, a.kronecker(&b));
    for i in 0..6 {
        for j in 0..6 {
            assert_eq!(evaluated[(i, j)], a[(i / 3, j / 2)] * b[(i % 3, j % 2)]);
        }
    }
}

#[test]
fn expansion_of_dynamic_matrices() {
    let a = DMatrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let b = DMatrix::from_row_slice(1, 2, &[1.0, -1.0]);
    let expanded = expand(&a, &b);

    assert_eq!(expanded.shape(), (2, 6));
    let evaluated = expanded.evaluate();
    assert_eq!(evaluated, a.kronecker(&b));
    assert_eq!(
        evaluated,
        DMatrix::from_row_slice(2, 6, &[1.0, -1.0, 2.0, -2.0, 3.0, -3.0, 4.0, -4.0, 5.0, -5.0, 6.0, -6.0])
    );
}

#[test]
fn expansion_by_identity_gives_block_diagonal_structure() {
    let a = matrix![2.0, -1.0;
                    -1.0, 2.0];
    let expanded = expand(&a, &Matrix3::identity()).evaluate();
    for i in 0..6 {
        for j in 0..6 {
            let expected = if i % 3 == j % 3 { a[(i / 3, j / 3)] } else { 0.0 };
            assert_eq!(expanded[(i, j)], expected);
        }
    }
}

#[test]
fn get_returns_none_out_of_bounds() {
    let a = Matrix2::new(1.0, 2.0, 3.0, 4.0);
    let b = Matrix3::identity();
    let expanded = expand(&a, &b);

    assert_eq!(expanded.get(4, 4), Some(4.0));
    assert_eq!(expanded.get(6, 0), None);
    assert_eq!(expanded.get(0, 6), None);
    assert_eq!(expanded.get(6, 6), None);
}

#[test]
#[should_panic]
fn entry_panics_out_of_bounds() {
    let a = Matrix2::new(1.0, 2.0, 3.0, 4.0);
    let b = Matrix3::identity();
    expand(&a, &b).entry(6, 0);
}

#[test]
fn iter_visits_entries_in_column_major_order() {
    let a = Matrix2x3::new(1.0, -2.0, 3.0, 0.5, 4.0, -1.0);
    let b = Matrix2::new(2.0, 1.0, -3.0, 5.0);
    let expanded = expand(&a, &b);

    let entries: Vec<_> = expanded.iter().collect();
    assert_eq!(entries.len(), 24);
    assert_eq!(entries.as_slice(), expanded.evaluate().as_slice());
}

#[test]
fn evaluate_into_checks_output_shape() {
    let a = Matrix2::new(1.0, 2.0, 3.0, 4.0);
    let b = Matrix3::identity();
    let expanded = expand(&a, &b);

    let mut wrong_shape = DMatrix::zeros(5, 6);
    assert_eq!(
        expanded.evaluate_into(&mut wrong_shape),
        Err(DimensionMismatch::Shape {
            expected: (6, 6),
            actual: (5, 6)
        })
    );

    let mut output = DMatrix::zeros(6, 6);
    expanded.evaluate_into(&mut output).unwrap();
    assert_matrix_eq!(output, a.kronecker(&b));

    let mut fixed_output = OMatrix::<f64, U6, U6>::zeros();
    expanded.evaluate_into(&mut fixed_output).unwrap();
    assert_eq!(fixed_output, a.kronecker(&b));
}

#[test]
fn base_and_pattern_are_borrowed_unchanged() {
    let a = Matrix2::new(1.0, 2.0, 3.0, 4.0);
    let b = Matrix3::identity();
    let expanded = expand(&a, &b);
    let copy = expanded;
    assert_eq!(copy.base(), &a);
    assert_eq!(expanded.pattern(), &b);
}

#[test]
fn expansion_debug_shows_operands() {
    let a = Matrix2::new(1.0, 2.0, 3.0, 4.0);
    let b = DMatrix::from_row_slice(1, 2, &[5.0, 6.0]);
    let debug = format!("{:?}", expand(&a, &b));
    assert!(debug.starts_with("ExpandedMatrix"));
    assert!(debug.contains("base"));
    assert!(debug.contains("pattern"));
}

#[test]
fn concurrent_reads_of_the_same_expansion() {
    let a = DMatrix::from_fn(4, 4, |i, j| (i * 4 + j) as f64);
    let b = DMatrix::from_fn(3, 3, |i, j| if i == j { 2.0 } else { 1.0 });
    let expanded = expand(&a, &b);
    let expected = a.kronecker(&b);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let expected = &expected;
                scope.spawn(move || {
                    for i in (t..12).step_by(4) {
                        for j in 0..12 {
                            assert_eq!(expanded.entry(i, j), expected[(i, j)]);
                        }
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    });
}
