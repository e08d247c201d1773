// src/ops.rs
//! Free-function forms of the vector operations.
//!
//! Each arithmetic operation exists twice: as a free function here (the
//! binary, "static" form) and as an inherent method on [`Vector`] that
//! delegates to it. Both forms leave their operands untouched and return a
//! freshly allocated result.

use crate::error::{Result, VectorError};
use crate::types::Scalar;
use crate::vector::Vector;

/// Walk two vectors index by index up to the longer dimension.
///
/// For each `index` in `0..max(dim(a), dim(b))`, calls `f(left, right, index)`
/// in increasing index order, where a component missing on the shorter side
/// reads as zero. This is the single zero-padding point in the crate:
/// [`add`] and [`subtract`] both route through it rather than reimplementing
/// the mismatched-dimension rule.
pub fn for_every<F>(a: &Vector, b: &Vector, mut f: F)
where
    F: FnMut(Scalar, Scalar, usize),
{
    let len = a.dimension().max(b.dimension());
    for index in 0..len {
        let left = a.components().get(index).copied().unwrap_or(0.0);
        let right = b.components().get(index).copied().unwrap_or(0.0);
        f(left, right, index);
    }
}

/// Component-wise sum of two vectors.
///
/// The result dimension is `max(dim(a), dim(b))`; the shorter operand is
/// treated as zero-padded. Commutative.
pub fn add(a: &Vector, b: &Vector) -> Vector {
    let mut out = Vec::with_capacity(a.dimension().max(b.dimension()));
    for_every(a, b, |left, right, _| out.push(left + right));
    Vector::from_checked(out)
}

/// Component-wise difference `a - b`.
///
/// Same dimension contract as [`add`]. Not commutative:
/// `subtract(a, b)` equals `-subtract(b, a)` component-wise.
pub fn subtract(a: &Vector, b: &Vector) -> Vector {
    let mut out = Vec::with_capacity(a.dimension().max(b.dimension()));
    for_every(a, b, |left, right, _| out.push(left - right));
    Vector::from_checked(out)
}

/// Scale every component of `v` by `scalar`.
///
/// Fails with [`VectorError::NonFiniteScalar`] when `scalar` is NaN or
/// infinite, rather than producing a vector full of NaN. The result has the
/// same dimension as `v`.
pub fn multiply(v: &Vector, scalar: Scalar) -> Result<Vector> {
    if !scalar.is_finite() {
        return Err(VectorError::NonFiniteScalar(scalar));
    }
    Ok(Vector::from_checked(
        v.iter().map(|c| c * scalar).collect(),
    ))
}

/// Euclidean norm of `v`: the square root of the sum of squared components.
///
/// Defined for every dimension; the empty vector has magnitude zero.
pub fn magnitude(v: &Vector) -> Scalar {
    let sum_of_squares: Scalar = v.iter().map(|c| c * c).sum();
    sum_of_squares.sqrt()
}

/// Unit vector with the same direction as `v`.
///
/// Fails with [`VectorError::ZeroMagnitude`] when `v` has magnitude zero —
/// the naive `1 / magnitude` would otherwise hand back ±∞/NaN components.
pub fn normalize(v: &Vector) -> Result<Vector> {
    let m = magnitude(v);
    if m == 0.0 {
        return Err(VectorError::ZeroMagnitude);
    }
    multiply(v, 1.0 / m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_every_pads_shorter_side_with_zero() {
        let a = Vector::new([1.0, 2.0]).unwrap();
        let b = Vector::new([10.0, 20.0, 30.0]).unwrap();

        let mut seen = Vec::new();
        for_every(&a, &b, |left, right, index| seen.push((left, right, index)));

        assert_eq!(seen, vec![(1.0, 10.0, 0), (2.0, 20.0, 1), (0.0, 30.0, 2)]);
    }

    #[test]
    fn for_every_visits_nothing_for_empty_operands() {
        let mut calls = 0;
        for_every(&Vector::zeros(0), &Vector::zeros(0), |_, _, _| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn for_every_runs_in_index_order() {
        let a = Vector::zeros(4);
        let b = Vector::zeros(2);

        let mut indices = Vec::new();
        for_every(&a, &b, |_, _, index| indices.push(index));

        assert_eq!(indices, vec![0, 1, 2, 3]);
    }
}
