//! Standard triple-loop multiplication.

use rayon::prelude::*;

use quadra_rings::Ring;

use crate::matrix::Matrix;

/// `C[i][j] = Σ_k A[i][k]·B[k][j]`. Operands must already be compatible.
pub(crate) fn multiply<T: Ring>(a: &Matrix<T>, b: &Matrix<T>) -> Matrix<T> {
    let mut result = Matrix::zeros(a.rows(), b.cols());
    for i in 0..a.rows() {
        for j in 0..b.cols() {
            result[(i, j)] = dot(a, b, i, j);
        }
    }
    result
}

/// Same as [`multiply`], computing output rows in parallel.
pub(crate) fn multiply_parallel<T: Ring + Send + Sync>(a: &Matrix<T>, b: &Matrix<T>) -> Matrix<T> {
    let data: Vec<T> = (0..a.rows())
        .into_par_iter()
        .flat_map_iter(|i| (0..b.cols()).map(move |j| dot(a, b, i, j)))
        .collect();
    Matrix::from_parts(a.rows(), b.cols(), data)
}

fn dot<T: Ring>(a: &Matrix<T>, b: &Matrix<T>, i: usize, j: usize) -> T {
    a.row(i)
        .iter()
        .enumerate()
        .fold(T::zero(), |acc, (k, v)| acc + v.clone() * b[(k, j)].clone())
}
