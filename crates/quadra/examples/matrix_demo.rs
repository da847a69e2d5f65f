//! Matrix Engine Walkthrough
//!
//! Prints the classic textbook examples for each operation and algorithm.
//!
//! Run with: cargo run -p quadra --example matrix_demo
//! Set `RUST_LOG=quadra_linalg=trace` to watch the recursion.

use quadra::linalg::{crop, padded_side};
use quadra::prelude::*;
use tracing_subscriber::EnvFilter;

fn matrix(rows: &[&[i64]]) -> Result<Matrix<i64>, MatrixError> {
    Matrix::from_rows(rows.iter().map(|r| r.to_vec()).collect())
}

fn main() -> Result<(), MatrixError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("\n>> 2D Matrix Multiplication Examples:");
    let a = matrix(&[&[2, -1], &[1, 3]])?;
    let b = matrix(&[&[1, 2, -1], &[3, 4, 0]])?;
    println!("\nMatrix A: {a}");
    println!("Matrix B: {b}\n");
    for algorithm in Algorithm::ALL {
        println!("    > {algorithm}: {}", multiply(&a, &b, algorithm)?);
    }

    let a = matrix(&[&[2, 3, 3], &[3, 1, 3], &[-2, 0, 4]])?;
    let b = matrix(&[&[3, 1], &[2, 2], &[1, 3]])?;
    println!("\nMatrix A: {a}");
    println!("Matrix B: {b}\n");
    for algorithm in Algorithm::ALL {
        println!("    > {algorithm}: {}", multiply(&a, &b, algorithm)?);
    }

    println!("\n>> Padding:");
    let side = padded_side(a.dimensions(), b.dimensions());
    let padded = square_pad(&b, side, 0)?;
    println!("\n    > B padded to {side}x{side}: {padded}");
    println!("    > cropped back: {}", crop(&padded, b.rows(), b.cols())?);

    println!("\n>> Elementwise Examples:");
    let x = matrix(&[&[1, 2, -1], &[3, 4, 0]])?;
    let y = matrix(&[&[5, 0, -3], &[4, 3, 2]])?;
    let w = matrix(&[&[-2, 1, 4], &[0, 7, -4]])?;
    println!("\n    > add: {}", add(&[&x, &y, &w])?);
    println!("    > subtract: {}", subtract(&[&x, &y, &w])?);

    println!("\n>> Exact Rationals:");
    let q = Matrix::from_rows(vec![
        vec![Q::new(1, 2), Q::new(1, 3)],
        vec![Q::new(-1, 4), Q::from_integer(2)],
    ])?;
    println!("\n    > Q²: {}", multiply(&q, &q, Algorithm::Strassen)?);

    println!("\n>> Errors:");
    if let Err(err) = add(&[&x]) {
        println!("\n    > {err}");
    }
    let row = matrix(&[&[1, 2]])?;
    if let Err(err) = multiply(&row, &row, Algorithm::Standard) {
        println!("    > {err}");
    }
    if let Err(err) = "winograd".parse::<Algorithm>() {
        println!("    > {err}");
    }
    println!();

    Ok(())
}
