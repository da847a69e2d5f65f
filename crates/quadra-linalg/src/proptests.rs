//! Property-based tests for the matrix engine.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{add, crop, multiply, square_pad, subtract, Algorithm, Matrix};

    fn dims() -> impl Strategy<Value = usize> {
        1usize..=9
    }

    fn matrix(rows: usize, cols: usize) -> impl Strategy<Value = Matrix<i64>> {
        prop::collection::vec(-50i64..=50, rows * cols)
            .prop_map(move |data| Matrix::from_vec(rows, cols, data).unwrap())
    }

    /// A compatible pair `(n × k, k × m)`.
    fn operands() -> impl Strategy<Value = (Matrix<i64>, Matrix<i64>)> {
        (dims(), dims(), dims()).prop_flat_map(|(n, k, m)| (matrix(n, k), matrix(k, m)))
    }

    /// Three matrices of one shape.
    fn same_shape() -> impl Strategy<Value = (Matrix<i64>, Matrix<i64>, Matrix<i64>)> {
        (dims(), dims()).prop_flat_map(|(r, c)| (matrix(r, c), matrix(r, c), matrix(r, c)))
    }

    proptest! {
        #[test]
        fn algorithms_agree((a, b) in operands()) {
            let standard = multiply(&a, &b, Algorithm::Standard).unwrap();
            prop_assert_eq!(standard.rows(), a.rows());
            prop_assert_eq!(standard.cols(), b.cols());
            prop_assert_eq!(&multiply(&a, &b, Algorithm::DivideAndConquer).unwrap(), &standard);
            prop_assert_eq!(&multiply(&a, &b, Algorithm::Strassen).unwrap(), &standard);
        }

        #[test]
        fn add_commutes_and_associates((a, b, c) in same_shape()) {
            prop_assert_eq!(add(&[&a, &b]).unwrap(), add(&[&b, &a]).unwrap());
            prop_assert_eq!(
                add(&[&add(&[&a, &b]).unwrap(), &c]).unwrap(),
                add(&[&a, &add(&[&b, &c]).unwrap()]).unwrap()
            );
            prop_assert_eq!(
                add(&[&a, &b, &c]).unwrap(),
                add(&[&c, &a, &b]).unwrap()
            );
        }

        #[test]
        fn subtract_is_add_of_negation((a, b, c) in same_shape()) {
            prop_assert_eq!(subtract(&[&a, &b]).unwrap(), add(&[&a, &b.negate()]).unwrap());
            prop_assert_eq!(
                subtract(&[&a, &b, &c]).unwrap(),
                subtract(&[&a, &add(&[&b, &c]).unwrap()]).unwrap()
            );
        }

        #[test]
        fn pad_then_crop_is_identity(
            (a, extra) in (dims(), dims()).prop_flat_map(|(r, c)| (matrix(r, c), 0usize..4))
        ) {
            let side = a.rows().max(a.cols()) + extra;
            let padded = square_pad(&a, side, 0).unwrap();
            prop_assert_eq!(padded.rows(), side);
            prop_assert_eq!(padded.cols(), side);
            prop_assert_eq!(crop(&padded, a.rows(), a.cols()).unwrap(), a);
        }

        #[test]
        fn mismatched_shapes_are_rejected(
            (a, b) in (dims(), dims(), dims(), dims())
                .prop_filter("inner dimensions must differ", |(_, k, j, _)| k != j)
                .prop_flat_map(|(n, k, j, m)| (matrix(n, k), matrix(j, m)))
        ) {
            for algorithm in Algorithm::ALL {
                prop_assert!(multiply(&a, &b, algorithm).is_err());
            }
        }
    }
}
