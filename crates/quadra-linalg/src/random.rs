//! Reproducible random matrices for tests and benchmarks.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use quadra_rings::Ring;

use crate::matrix::Matrix;

impl<T: Ring + From<i32>> Matrix<T> {
    /// Creates a `rows × cols` matrix of integers drawn uniformly from
    /// `-bound..=bound`. The same seed always yields the same matrix.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn random_integers(rows: usize, cols: usize, bound: u16, seed: u64) -> Self {
        assert!(
            rows > 0 && cols > 0,
            "matrix must have at least one row and one column"
        );
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let bound = i32::from(bound);
        let data = (0..rows * cols)
            .map(|_| T::from(rng.gen_range(-bound..=bound)))
            .collect();
        Matrix::from_parts(rows, cols, data)
    }
}
