//! Per-path value vectors for Monte Carlo valuation.
//!
//! A [`PathVector`] holds one `f64` per simulation path. A vector of length 1
//! is *degenerate*: it represents a value that is identical on every path and
//! broadcasts against vectors of any length.
//!
//! Every operation returns a new vector; buffers are never mutated after
//! construction, so vectors can be shared freely across threads.
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::PathVector;
//!
//! let rates = PathVector::from_vec(vec![0.01, 0.02, 0.03]).unwrap();
//! let notional = PathVector::constant(1_000_000.0);
//!
//! let coupons = &rates * &notional * 0.5;
//! assert_eq!(coupons.len(), 3);
//! assert!((coupons.get(1) - 10_000.0).abs() < 1e-9);
//! ```

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::sync::Arc;

use rayon::prelude::*;

use super::error::PathVectorError;

/// Path count above which elementwise operations run on the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 16_384;

/// Immutable vector of per-path values.
///
/// Cloning is cheap: the underlying buffer is reference counted.
#[derive(Clone, Debug, PartialEq)]
pub struct PathVector {
    values: Arc<[f64]>,
}

impl PathVector {
    /// Creates a vector from explicit per-path values.
    ///
    /// # Errors
    ///
    /// Returns [`PathVectorError::Empty`] if `values` is empty.
    pub fn from_vec(values: Vec<f64>) -> Result<Self, PathVectorError> {
        if values.is_empty() {
            return Err(PathVectorError::Empty);
        }
        Ok(Self::from_buffer(values))
    }

    /// Creates a vector of `n` paths by evaluating `f` on each path index.
    ///
    /// # Errors
    ///
    /// Returns [`PathVectorError::Empty`] if `n == 0`.
    pub fn from_fn(n: usize, f: impl Fn(usize) -> f64) -> Result<Self, PathVectorError> {
        Self::from_vec((0..n).map(f).collect())
    }

    /// Creates a vector of `n` paths all holding `value`.
    ///
    /// # Errors
    ///
    /// Returns [`PathVectorError::Empty`] if `n == 0`.
    pub fn filled(n: usize, value: f64) -> Result<Self, PathVectorError> {
        Self::from_vec(vec![value; n])
    }

    /// Creates a degenerate vector holding the same value on every path.
    #[inline]
    pub fn constant(value: f64) -> Self {
        Self::from_buffer(vec![value])
    }

    /// The degenerate zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self::constant(0.0)
    }

    #[inline]
    fn from_buffer(values: Vec<f64>) -> Self {
        Self {
            values: values.into(),
        }
    }

    /// Number of stored values (1 for a degenerate vector).
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; a path vector holds at least one value.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `true` if the vector holds a single value shared by all paths.
    #[inline]
    pub fn is_deterministic(&self) -> bool {
        self.values.len() == 1
    }

    /// Value on `path`. Degenerate vectors return their value for any path.
    ///
    /// # Panics
    ///
    /// Panics if `path` is out of range for a non-degenerate vector.
    #[inline]
    pub fn get(&self, path: usize) -> f64 {
        if self.is_deterministic() {
            self.values[0]
        } else {
            self.values[path]
        }
    }

    /// Stored values as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Copies the stored values into a new `Vec`.
    pub fn to_vec(&self) -> Vec<f64> {
        self.values.to_vec()
    }

    /// Iterates over the stored values.
    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.values.iter()
    }

    /// Arithmetic mean across paths (the Monte Carlo expectation).
    pub fn average(&self) -> f64 {
        let n = self.values.len();
        let sum: f64 = if n >= PARALLEL_THRESHOLD {
            self.values.par_iter().sum()
        } else {
            self.values.iter().sum()
        };
        sum / n as f64
    }

    /// Elementwise sum, or an error if the lengths are incompatible.
    pub fn try_add(&self, other: &PathVector) -> Result<PathVector, PathVectorError> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Elementwise difference, or an error if the lengths are incompatible.
    pub fn try_sub(&self, other: &PathVector) -> Result<PathVector, PathVectorError> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Elementwise product, or an error if the lengths are incompatible.
    pub fn try_mult(&self, other: &PathVector) -> Result<PathVector, PathVectorError> {
        self.zip_with(other, |a, b| a * b)
    }

    /// Elementwise quotient, or an error if the lengths are incompatible.
    pub fn try_div(&self, other: &PathVector) -> Result<PathVector, PathVectorError> {
        self.zip_with(other, |a, b| a / b)
    }

    /// Computes `self + numerator / denominator` in a single pass.
    ///
    /// # Panics
    ///
    /// Panics if the three lengths cannot be broadcast together.
    pub fn add_ratio(&self, numerator: &PathVector, denominator: &PathVector) -> PathVector {
        fail_fast(self.zip3_with(numerator, denominator, |a, n, d| a + n / d))
    }

    /// Computes `self - numerator / denominator` in a single pass.
    ///
    /// # Panics
    ///
    /// Panics if the three lengths cannot be broadcast together.
    pub fn sub_ratio(&self, numerator: &PathVector, denominator: &PathVector) -> PathVector {
        fail_fast(self.zip3_with(numerator, denominator, |a, n, d| a - n / d))
    }

    /// Adds `value` to every path. Same as `self + value`.
    pub fn add_scalar(&self, value: f64) -> PathVector {
        self.map(|a| a + value)
    }

    /// Multiplies every path by `value`. Same as `self * value`.
    pub fn mult_scalar(&self, value: f64) -> PathVector {
        self.map(|a| a * value)
    }

    /// Elementwise reciprocal.
    pub fn invert(&self) -> PathVector {
        self.map(|a| 1.0 / a)
    }

    /// Applies `f` to every stored value.
    pub fn map(&self, f: impl Fn(f64) -> f64 + Send + Sync) -> PathVector {
        let values: Vec<f64> = if self.len() >= PARALLEL_THRESHOLD {
            self.values.par_iter().map(|&a| f(a)).collect()
        } else {
            self.values.iter().map(|&a| f(a)).collect()
        };
        Self::from_buffer(values)
    }

    fn zip_with(
        &self,
        other: &PathVector,
        f: impl Fn(f64, f64) -> f64 + Send + Sync,
    ) -> Result<PathVector, PathVectorError> {
        let n = broadcast_len(self.len(), other.len())?;
        let values: Vec<f64> = if n >= PARALLEL_THRESHOLD {
            (0..n)
                .into_par_iter()
                .map(|i| f(self.get(i), other.get(i)))
                .collect()
        } else {
            (0..n).map(|i| f(self.get(i), other.get(i))).collect()
        };
        Ok(Self::from_buffer(values))
    }

    fn zip3_with(
        &self,
        second: &PathVector,
        third: &PathVector,
        f: impl Fn(f64, f64, f64) -> f64 + Send + Sync,
    ) -> Result<PathVector, PathVectorError> {
        let n = broadcast_len(broadcast_len(self.len(), second.len())?, third.len())?;
        let values: Vec<f64> = if n >= PARALLEL_THRESHOLD {
            (0..n)
                .into_par_iter()
                .map(|i| f(self.get(i), second.get(i), third.get(i)))
                .collect()
        } else {
            (0..n)
                .map(|i| f(self.get(i), second.get(i), third.get(i)))
                .collect()
        };
        Ok(Self::from_buffer(values))
    }
}

fn broadcast_len(left: usize, right: usize) -> Result<usize, PathVectorError> {
    match (left, right) {
        (1, n) | (n, 1) => Ok(n),
        (l, r) if l == r => Ok(l),
        (l, r) => Err(PathVectorError::LengthMismatch { left: l, right: r }),
    }
}

fn fail_fast(result: Result<PathVector, PathVectorError>) -> PathVector {
    match result {
        Ok(values) => values,
        Err(err) => panic!("path vector precondition violated: {err}"),
    }
}

impl Default for PathVector {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<f64> for PathVector {
    fn from(value: f64) -> Self {
        Self::constant(value)
    }
}

impl fmt::Display for PathVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_deterministic() {
            write!(f, "PathVector[{}]", self.values[0])
        } else {
            write!(
                f,
                "PathVector[{} paths, mean = {}]",
                self.len(),
                self.average()
            )
        }
    }
}

// Operators on path vectors fail fast on incompatible lengths.
macro_rules! impl_vector_op {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl $trait<&PathVector> for &PathVector {
            type Output = PathVector;
            fn $method(self, rhs: &PathVector) -> PathVector {
                fail_fast(self.$checked(rhs))
            }
        }

        impl $trait<PathVector> for PathVector {
            type Output = PathVector;
            fn $method(self, rhs: PathVector) -> PathVector {
                fail_fast(self.$checked(&rhs))
            }
        }

        impl $trait<&PathVector> for PathVector {
            type Output = PathVector;
            fn $method(self, rhs: &PathVector) -> PathVector {
                fail_fast(self.$checked(rhs))
            }
        }

        impl $trait<PathVector> for &PathVector {
            type Output = PathVector;
            fn $method(self, rhs: PathVector) -> PathVector {
                fail_fast(self.$checked(&rhs))
            }
        }
    };
}

impl_vector_op!(Add, add, try_add);
impl_vector_op!(Sub, sub, try_sub);
impl_vector_op!(Mul, mul, try_mult);
impl_vector_op!(Div, div, try_div);

macro_rules! impl_scalar_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait<f64> for &PathVector {
            type Output = PathVector;
            fn $method(self, rhs: f64) -> PathVector {
                self.map(|a| a $op rhs)
            }
        }

        impl $trait<f64> for PathVector {
            type Output = PathVector;
            fn $method(self, rhs: f64) -> PathVector {
                self.map(|a| a $op rhs)
            }
        }
    };
}

impl_scalar_op!(Add, add, +);
impl_scalar_op!(Sub, sub, -);
impl_scalar_op!(Mul, mul, *);
impl_scalar_op!(Div, div, /);

impl Neg for &PathVector {
    type Output = PathVector;
    fn neg(self) -> PathVector {
        self.map(|a| -a)
    }
}

impl Neg for PathVector {
    type Output = PathVector;
    fn neg(self) -> PathVector {
        self.map(|a| -a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn paths(values: &[f64]) -> PathVector {
        PathVector::from_vec(values.to_vec()).unwrap()
    }

    #[test]
    fn test_empty_vector_is_rejected() {
        assert_eq!(PathVector::from_vec(vec![]), Err(PathVectorError::Empty));
        assert_eq!(PathVector::filled(0, 1.0), Err(PathVectorError::Empty));
    }

    #[test]
    fn test_constant_is_deterministic() {
        let c = PathVector::constant(2.5);
        assert!(c.is_deterministic());
        assert_eq!(c.get(0), 2.5);
        assert_eq!(c.get(1_000), 2.5);
    }

    #[test]
    fn test_degenerate_broadcast() {
        let v = paths(&[1.0, 2.0, 3.0]);
        let sum = &v + &PathVector::constant(1.0);
        assert_eq!(sum.as_slice(), &[2.0, 3.0, 4.0]);

        let sum = &PathVector::constant(1.0) + &v;
        assert_eq!(sum.as_slice(), &[2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_degenerate_stays_degenerate() {
        let product = PathVector::constant(3.0) * PathVector::constant(4.0);
        assert!(product.is_deterministic());
        assert_eq!(product.get(0), 12.0);
    }

    #[test]
    fn test_length_mismatch_is_error() {
        let a = paths(&[1.0, 2.0]);
        let b = paths(&[1.0, 2.0, 3.0]);
        assert_eq!(
            a.try_add(&b),
            Err(PathVectorError::LengthMismatch { left: 2, right: 3 })
        );
    }

    #[test]
    #[should_panic(expected = "precondition violated")]
    fn test_length_mismatch_operator_panics() {
        let a = paths(&[1.0, 2.0]);
        let b = paths(&[1.0, 2.0, 3.0]);
        let _ = &a * &b;
    }

    #[test]
    fn test_fused_ratios() {
        let base = paths(&[1.0, 1.0]);
        let num = paths(&[4.0, 9.0]);
        let den = PathVector::constant(2.0);

        assert_eq!(base.add_ratio(&num, &den).as_slice(), &[3.0, 5.5]);
        assert_eq!(base.sub_ratio(&num, &den).as_slice(), &[-1.0, -3.5]);
    }

    #[test]
    fn test_scalar_ops_and_negation() {
        let v = paths(&[1.0, -2.0]);
        assert_eq!((&v * 2.0).as_slice(), &[2.0, -4.0]);
        assert_eq!((&v + 1.0).as_slice(), &[2.0, -1.0]);
        assert_eq!((-&v).as_slice(), &[-1.0, 2.0]);
        assert_eq!(v.add_scalar(1.0), &v + 1.0);
        assert_eq!(v.mult_scalar(-3.0).as_slice(), &[-3.0, 6.0]);
        assert_eq!(v.invert().as_slice(), &[1.0, -0.5]);
    }

    #[test]
    fn test_average() {
        assert_relative_eq!(paths(&[1.0, 2.0, 3.0, 6.0]).average(), 3.0);
        assert_relative_eq!(PathVector::constant(7.0).average(), 7.0);
    }

    #[test]
    fn test_parallel_path_matches_sequential() {
        let n = PARALLEL_THRESHOLD + 3;
        let a = PathVector::from_fn(n, |i| i as f64).unwrap();
        let b = PathVector::constant(2.0);
        let product = &a * &b;
        assert_eq!(product.len(), n);
        assert_eq!(product.get(n - 1), 2.0 * (n - 1) as f64);
        assert_relative_eq!(a.average(), (n - 1) as f64 / 2.0);
    }

    #[test]
    fn test_operations_do_not_mutate_inputs() {
        let a = paths(&[1.0, 2.0]);
        let snapshot = a.clone();
        let _ = &a + &a;
        let _ = a.add_ratio(&a, &a);
        assert_eq!(a, snapshot);
    }

    #[test]
    fn test_display() {
        assert_eq!(PathVector::constant(1.5).to_string(), "PathVector[1.5]");
        assert!(paths(&[1.0, 3.0]).to_string().contains("2 paths"));
    }
}
