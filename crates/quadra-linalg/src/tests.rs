//! Integration tests for quadra-linalg.

#[cfg(test)]
mod integration_tests {
    use quadra_rings::{Q, Z};

    use crate::{
        add, check_dimensions, crop, multiply, multiply_with, square_pad, subtract, Algorithm,
        Dimensions, Matrix, MatrixError, MultiplyConfig, Operation,
    };

    fn m(rows: Vec<Vec<i64>>) -> Matrix<i64> {
        Matrix::from_rows(rows).unwrap()
    }

    fn z(rows: Vec<Vec<i64>>) -> Matrix<Z> {
        Matrix::from_rows(
            rows.into_iter()
                .map(|r| r.into_iter().map(Z::new).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_standard_rectangular_product() {
        let a = m(vec![vec![2, -1], vec![1, 3]]);
        let b = m(vec![vec![1, 2, -1], vec![3, 4, 0]]);
        let c = multiply(&a, &b, Algorithm::Standard).unwrap();
        assert_eq!(c.to_rows(), vec![vec![-1, 0, -2], vec![10, 14, -1]]);
    }

    #[test]
    fn test_strassen_matches_standard_on_non_square() {
        let a = m(vec![vec![2, 3, 3], vec![3, 1, 3], vec![-2, 0, 4]]);
        let b = m(vec![vec![3, 1], vec![2, 2], vec![1, 3]]);
        let standard = multiply(&a, &b, Algorithm::Standard).unwrap();
        assert_eq!(multiply(&a, &b, Algorithm::Strassen).unwrap(), standard);
        assert_eq!(
            multiply(&a, &b, Algorithm::DivideAndConquer).unwrap(),
            standard
        );
    }

    #[test]
    fn test_variadic_add_and_subtract() {
        let a = m(vec![vec![1, 2, -1], vec![3, 4, 0]]);
        let b = m(vec![vec![5, 0, -3], vec![4, 3, 2]]);
        let c = m(vec![vec![-2, 1, 4], vec![0, 7, -4]]);
        assert_eq!(
            add(&[&a, &b, &c]).unwrap().to_rows(),
            vec![vec![4, 3, 0], vec![7, 14, -2]]
        );
        assert_eq!(
            subtract(&[&a, &b, &c]).unwrap().to_rows(),
            vec![vec![-2, 1, -2], vec![-1, -6, 2]]
        );
    }

    #[test]
    fn test_add_single_matrix_fails() {
        let a = m(vec![vec![1, 2]]);
        assert!(matches!(
            add(&[&a]),
            Err(MatrixError::InsufficientOperands { count: 1, .. })
        ));
    }

    #[test]
    fn test_incompatible_multiply_fails() {
        let a = m(vec![vec![1, 2]]);
        assert!(!check_dimensions(&[&a, &a], Operation::Multiply));
        assert!(matches!(
            multiply(&a, &a, Algorithm::Standard),
            Err(MatrixError::DimensionMismatch {
                operation: Operation::Multiply,
                ..
            })
        ));
    }

    #[test]
    fn test_algorithms_agree_over_exact_types() {
        let a = z(vec![vec![1, -2, 3, 4, 5], vec![6, 7, -8, 9, 0]]);
        let b = z(vec![
            vec![1, 0, 2],
            vec![-1, 3, 1],
            vec![4, 4, -4],
            vec![0, 1, 0],
            vec![2, -3, 5],
        ]);
        let expected = multiply(&a, &b, Algorithm::Standard).unwrap();
        assert_eq!(expected.dimensions(), Dimensions::new(2, 3));
        for algorithm in Algorithm::ALL {
            assert_eq!(multiply(&a, &b, algorithm).unwrap(), expected);
        }
    }

    #[test]
    fn test_rational_strassen() {
        let a = Matrix::from_rows(vec![
            vec![Q::new(1, 2), Q::new(1, 3), Q::new(1, 4)],
            vec![Q::new(-2, 5), Q::from_integer(1), Q::new(3, 7)],
            vec![Q::from_integer(0), Q::new(5, 6), Q::new(-1, 9)],
        ])
        .unwrap();
        let at = a.transpose();
        let standard = multiply(&a, &at, Algorithm::Standard).unwrap();
        let strassen = multiply(&a, &at, Algorithm::Strassen).unwrap();
        assert_eq!(strassen, standard);
        // A·Aᵀ is symmetric
        assert_eq!(strassen, strassen.transpose());
    }

    #[test]
    fn test_parallel_kernel_is_opt_in() {
        let a = Matrix::<i64>::random_integers(70, 33, 100, 3);
        let b = Matrix::<i64>::random_integers(33, 41, 100, 4);
        assert_eq!(MultiplyConfig::default().parallel_threshold, usize::MAX);

        let opted_in = MultiplyConfig::default().with_parallel_threshold(64);
        let parallel = multiply_with(&a, &b, &opted_in).unwrap();
        assert_eq!(multiply(&a, &b, Algorithm::Standard).unwrap(), parallel);
        for algorithm in Algorithm::ALL {
            let config = MultiplyConfig::new(algorithm);
            assert_eq!(multiply_with(&a, &b, &config).unwrap(), parallel);
        }
    }

    #[test]
    fn test_exact_integers_absorb_strassen_intermediates() {
        // A11 + A12 and A11 + A22 exceed i64::MAX although the product is zero
        let big = Z::new(1 << 62);
        let zero = Z::new(0);
        let a = Matrix::from_rows(vec![
            vec![big.clone(), zero.clone(), big],
            vec![zero.clone(), zero.clone(), zero.clone()],
            vec![zero.clone(), zero.clone(), zero],
        ])
        .unwrap();
        let b = Matrix::<Z>::zeros(3, 3);
        for algorithm in Algorithm::ALL {
            assert!(multiply(&a, &b, algorithm).unwrap().is_zero(), "{algorithm}");
        }

        let square = multiply(&a, &a, Algorithm::Strassen).unwrap();
        assert_eq!(square, multiply(&a, &a, Algorithm::Standard).unwrap());
        assert_eq!(square[(0, 0)].to_i64(), None);
    }

    #[test]
    fn test_zero_padding_is_neutral() {
        let a = m(vec![vec![3, -1], vec![2, 5], vec![0, 4]]);
        let b = m(vec![vec![1, 2, 3], vec![-4, 5, 6]]);
        let side = 5;
        let padded = multiply(
            &square_pad(&a, side, 0).unwrap(),
            &square_pad(&b, side, 0).unwrap(),
            Algorithm::Standard,
        )
        .unwrap();
        let valid = crop(&padded, 3, 3).unwrap();
        assert_eq!(valid, multiply(&a, &b, Algorithm::Standard).unwrap());
        // everything outside the valid block stays zero
        for i in 0..side {
            for j in 0..side {
                if i >= 3 || j >= 3 {
                    assert_eq!(padded[(i, j)], 0);
                }
            }
        }
    }

    #[test]
    fn test_floats() {
        let a = Matrix::from_rows(vec![vec![0.5f64, 2.0], vec![1.5, -1.0]]).unwrap();
        let b = Matrix::<f64>::identity(2).scale(&2.0);
        let c = multiply(&a, &b, Algorithm::Strassen).unwrap();
        assert_eq!(c.to_rows(), vec![vec![1.0, 4.0], vec![3.0, -2.0]]);
    }
}
