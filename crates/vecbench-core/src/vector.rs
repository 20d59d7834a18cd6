//! The [`Vector`] data model: a dense, owned sequence of `f64` components.
//!
//! Scalar multiplication is the primitive the benchmarks time. It is
//! exposed both as [`Vector::scaled`] and as `Mul` operator impls so call
//! sites can write `sc * &a` the way array libraries do. The remaining
//! elementwise operations exist for workloads and benches built around the
//! same model.

use std::ops::{Div, Index, Mul, Neg};

use crate::error::VectorError;

/// A dense, heap-allocated vector of `f64` components.
///
/// Vectors are transient benchmark inputs: created fresh for a trial,
/// consumed by one operation, then dropped. There is no identity beyond
/// the component values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vector {
    components: Vec<f64>,
}

impl Vector {
    /// Create a vector from its components.
    pub fn new(components: Vec<f64>) -> Self {
        Self { components }
    }

    /// Create a vector of `len` zeros.
    pub fn zeros(len: usize) -> Self {
        Self {
            components: vec![0.0; len],
        }
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if the vector has no components.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Borrow the components as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.components
    }

    /// Iterate over the components in order.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.components.iter()
    }

    /// Elementwise scalar multiplication, producing a new vector.
    ///
    /// This is the measured primitive: the returned vector is a fresh
    /// allocation of the same length.
    pub fn scaled(&self, scalar: f64) -> Vector {
        Vector {
            components: self.components.iter().map(|v| scalar * v).collect(),
        }
    }

    /// Elementwise addition.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the lengths differ.
    pub fn try_add(&self, other: &Vector) -> Result<Vector, VectorError> {
        self.zip_check(other)?;
        Ok(Vector {
            components: self
                .components
                .iter()
                .zip(&other.components)
                .map(|(a, b)| a + b)
                .collect(),
        })
    }

    /// Elementwise subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the lengths differ.
    pub fn try_sub(&self, other: &Vector) -> Result<Vector, VectorError> {
        self.zip_check(other)?;
        Ok(Vector {
            components: self
                .components
                .iter()
                .zip(&other.components)
                .map(|(a, b)| a - b)
                .collect(),
        })
    }

    /// Dot product.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the lengths differ.
    pub fn dot(&self, other: &Vector) -> Result<f64, VectorError> {
        self.zip_check(other)?;
        Ok(self
            .components
            .iter()
            .zip(&other.components)
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.components
            .iter()
            .map(|v| v * v)
            .sum::<f64>()
            .sqrt()
    }

    fn zip_check(&self, other: &Vector) -> Result<(), VectorError> {
        if self.len() != other.len() {
            return Err(VectorError::DimensionMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(())
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, scalar: f64) -> Vector {
        self.scaled(scalar)
    }
}

impl Mul<&Vector> for f64 {
    type Output = Vector;

    fn mul(self, vector: &Vector) -> Vector {
        vector.scaled(self)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(mut self, scalar: f64) -> Vector {
        for v in &mut self.components {
            *v *= scalar;
        }
        self
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, vector: Vector) -> Vector {
        vector * self
    }
}

impl Div<f64> for &Vector {
    type Output = Vector;

    fn div(self, scalar: f64) -> Vector {
        Vector {
            components: self.components.iter().map(|v| v / scalar).collect(),
        }
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector {
            components: self.components.iter().map(|v| -v).collect(),
        }
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.components[index]
    }
}

impl From<Vec<f64>> for Vector {
    fn from(components: Vec<f64>) -> Self {
        Self::new(components)
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            components: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Absolute tolerance for floating-point comparisons.
    const ACCURACY: f64 = 1e-7;

    fn assert_close(a: f64, b: f64) {
        let scale = a.abs().max(b.abs()).max(1.0);
        assert!(
            (a - b).abs() <= ACCURACY * scale,
            "expected {a} ~= {b}"
        );
    }

    // ---------------------------------------------------------------
    // Unit tests
    // ---------------------------------------------------------------

    #[test]
    fn scaled_multiplies_every_component() {
        let v = Vector::new(vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(v.scaled(2.0), Vector::new(vec![2.0, 4.0, 6.0, 8.0]));
    }

    #[test]
    fn mul_operator_matches_scaled_both_orders() {
        let v = Vector::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(&v * 2.0, v.scaled(2.0));
        assert_eq!(2.0 * &v, v.scaled(2.0));
        assert_eq!(v.clone() * 2.0, v.scaled(2.0));
        assert_eq!(2.0 * v.clone(), v.scaled(2.0));
    }

    #[test]
    fn scaled_preserves_length_and_allocates_fresh() {
        let v = Vector::new(vec![0.5; 100]);
        let scaled = v.scaled(-3.0);
        assert_eq!(scaled.len(), 100);
        // The input is untouched.
        assert_eq!(v, Vector::new(vec![0.5; 100]));
    }

    #[test]
    fn div_operator_divides_every_component() {
        let v = Vector::new(vec![2.0, 4.0, 6.0, 8.0]);
        assert_eq!(&v / 2.0, Vector::new(vec![1.0, 2.0, 3.0, 4.0]));
    }

    #[test]
    fn neg_negates_every_component() {
        let v = Vector::new(vec![1.0, -2.0, 3.0]);
        assert_eq!(-&v, Vector::new(vec![-1.0, 2.0, -3.0]));
    }

    #[test]
    fn add_matching_lengths() {
        let a = Vector::new(vec![1.0, 2.0]);
        let b = Vector::new(vec![10.0, 20.0]);
        assert_eq!(a.try_add(&b).unwrap(), Vector::new(vec![11.0, 22.0]));
    }

    #[test]
    fn add_mismatched_lengths_fails() {
        let a = Vector::new(vec![1.0, 2.0]);
        let b = Vector::new(vec![1.0]);
        match a.try_add(&b) {
            Err(VectorError::DimensionMismatch { left: 2, right: 1 }) => {}
            other => panic!("expected DimensionMismatch, got {other:?}"),
        }
    }

    #[test]
    fn sub_mismatched_lengths_fails() {
        let a = Vector::new(vec![1.0]);
        let b = Vector::new(vec![1.0, 2.0, 3.0]);
        match a.try_sub(&b) {
            Err(VectorError::DimensionMismatch { left: 1, right: 3 }) => {}
            other => panic!("expected DimensionMismatch, got {other:?}"),
        }
    }

    #[test]
    fn dot_product() {
        let a = Vector::new(vec![1.0, 2.0, 3.0]);
        let b = Vector::new(vec![4.0, 5.0, 6.0]);
        assert_close(a.dot(&b).unwrap(), 32.0);
    }

    #[test]
    fn dot_mismatched_lengths_fails() {
        let a = Vector::new(vec![1.0, 2.0]);
        let b = Vector::new(vec![1.0, 2.0, 3.0]);
        assert!(a.dot(&b).is_err());
    }

    #[test]
    fn norm_of_three_four_is_five() {
        let v = Vector::new(vec![3.0, 4.0]);
        assert_close(v.norm(), 5.0);
    }

    #[test]
    fn zeros_has_zero_norm() {
        assert_eq!(Vector::zeros(10).norm(), 0.0);
        assert_eq!(Vector::zeros(10).len(), 10);
    }

    #[test]
    fn empty_vector() {
        let v = Vector::default();
        assert!(v.is_empty());
        assert_eq!(v.scaled(5.0).len(), 0);
        assert_eq!(v.norm(), 0.0);
    }

    #[test]
    fn index_and_iter() {
        let v = Vector::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(v[1], 2.0);
        assert_eq!(v.iter().copied().collect::<Vec<_>>(), vec![1.0, 2.0, 3.0]);
        let sum: f64 = (&v).into_iter().sum();
        assert_close(sum, 6.0);
    }

    // ---------------------------------------------------------------
    // Property tests
    // ---------------------------------------------------------------

    fn arb_components() -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(-1.0e6f64..1.0e6, 0..64)
    }

    fn arb_scalar() -> impl Strategy<Value = f64> {
        -1.0e3f64..1.0e3
    }

    proptest! {
        #[test]
        fn scaled_preserves_length(c in arb_components(), s in arb_scalar()) {
            let v = Vector::new(c);
            prop_assert_eq!(v.scaled(s).len(), v.len());
        }

        #[test]
        fn scaled_by_one_is_identity(c in arb_components()) {
            let v = Vector::new(c);
            prop_assert_eq!(v.scaled(1.0), v.clone());
        }

        #[test]
        fn scaled_by_zero_is_zeros(c in arb_components()) {
            let v = Vector::new(c);
            prop_assert_eq!(v.scaled(0.0), Vector::zeros(v.len()));
        }

        #[test]
        fn scaling_distributes_over_addition(
            pair in arb_components().prop_flat_map(|a| {
                let len = a.len();
                (Just(a), prop::collection::vec(-1.0e6f64..1.0e6, len..=len))
            }),
            s in arb_scalar(),
        ) {
            let (a, b) = pair;
            let a = Vector::new(a);
            let b = Vector::new(b);
            let lhs = a.try_add(&b).unwrap().scaled(s);
            let rhs = a.scaled(s).try_add(&b.scaled(s)).unwrap();
            for (x, y) in lhs.iter().zip(rhs.iter()) {
                let scale = x.abs().max(y.abs()).max(1.0);
                prop_assert!((x - y).abs() <= ACCURACY * scale);
            }
        }

        #[test]
        fn scaling_scales_norm(c in arb_components(), s in arb_scalar()) {
            let v = Vector::new(c);
            let lhs = v.scaled(s).norm();
            let rhs = s.abs() * v.norm();
            let scale = lhs.abs().max(rhs.abs()).max(1.0);
            prop_assert!((lhs - rhs).abs() <= ACCURACY * scale);
        }

        #[test]
        fn borrowed_and_owned_mul_agree(c in arb_components(), s in arb_scalar()) {
            let v = Vector::new(c);
            prop_assert_eq!(&v * s, v.clone() * s);
        }
    }
}
