//! Property-based tests using proptest.
//!
//! These tests verify the algebraic laws of the matrix operations and
//! the stability of the text round-trip.

use matriz::prelude::*;
use proptest::prelude::*;

// Strategy for generating small matrices
fn matrix_strategy(rows: usize, cols: usize) -> impl Strategy<Value = Matrix> {
    proptest::collection::vec(-100.0f64..100.0, rows * cols)
        .prop_map(move |data| Matrix::from_vec(rows, cols, data).expect("test data should be valid"))
}

// Strategy for matrices whose values carry at most six fractional digits,
// so the {:.6} text format preserves them exactly
fn quantized_matrix_strategy(rows: usize, cols: usize) -> impl Strategy<Value = Matrix> {
    proptest::collection::vec(-100_000_000i64..100_000_000, rows * cols).prop_map(move |ints| {
        let data = ints.into_iter().map(|n| n as f64 / 1e6).collect();
        Matrix::from_vec(rows, cols, data).expect("test data should be valid")
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn transpose_is_an_involution(m in matrix_strategy(3, 4)) {
        prop_assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn adding_zeros_is_neutral(m in matrix_strategy(3, 3)) {
        let zeros = Matrix::zeros(3, 3).expect("dimensions are positive");
        prop_assert_eq!(m.add(&zeros).expect("shapes match"), m);
    }

    #[test]
    fn addition_commutes(a in matrix_strategy(3, 3), b in matrix_strategy(3, 3)) {
        let ab = a.add(&b).expect("shapes match");
        let ba = b.add(&a).expect("shapes match");
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn subtracting_self_is_zero(m in matrix_strategy(2, 5)) {
        let diff = m.sub(&m).expect("shapes match");
        prop_assert!(diff.as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn identity_matmul_is_neutral(m in matrix_strategy(4, 3)) {
        let eye = Matrix::eye(4).expect("order is positive");
        prop_assert_eq!(eye.matmul(&m).expect("inner dimensions match"), m);
    }

    #[test]
    fn matmul_shape_is_outer_dims(a in matrix_strategy(2, 4), b in matrix_strategy(4, 5)) {
        let c = a.matmul(&b).expect("inner dimensions match");
        prop_assert_eq!(c.shape(), (2, 5));
    }

    #[test]
    fn scaling_by_one_is_neutral(m in matrix_strategy(3, 3)) {
        prop_assert_eq!(m.mul_scalar(1.0), m);
    }

    #[test]
    fn scaling_distributes_over_addition(a in matrix_strategy(3, 3), b in matrix_strategy(3, 3)) {
        let left = a.add(&b).expect("shapes match").mul_scalar(2.0);
        let right = a.mul_scalar(2.0).add(&b.mul_scalar(2.0)).expect("shapes match");
        for (x, y) in left.as_slice().iter().zip(right.as_slice().iter()) {
            prop_assert!((x - y).abs() < 1e-9);
        }
    }

    #[test]
    fn file_roundtrip_preserves_quantized_values(m in quantized_matrix_strategy(3, 3)) {
        let dir = tempfile::TempDir::new().expect("temp dir is creatable");
        let path = dir.path().join("roundtrip.txt");

        m.to_delimited_file(&path, ';').expect("write succeeds");
        let loaded = Matrix::from_delimited_file(&path, ';').expect("read succeeds");

        prop_assert_eq!(loaded, m);
    }
}
