//! Dense univariate polynomials in coefficient form.
//!
//! Unlike `ark_poly::univariate::DensePolynomial`, trailing zero coefficients are kept as
//! given: `[2, 3, 1, 0]` has degree 3. Commitments record the degree of the polynomial they
//! were computed from, and quotients are always one coefficient shorter than the dividend.

use crate::error::{invalid_input, KResult};
use ark_ff::Field;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, Read, SerializationError, Write};
use ark_std::cmp::max;
use ark_std::ops::{Add, Mul, Sub};
use ark_std::rand::RngCore;
use ark_std::{vec, vec::Vec};

/// Polynomial `coeffs[0] + coeffs[1] * X + ... + coeffs[n - 1] * X^{n - 1}`
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Polynomial<F: Field> {
    /// coefficients, lowest degree first
    pub coeffs: Vec<F>,
}

impl<F: Field> Polynomial<F> {
    /// Polynomial without any coefficient.
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// Takes ownership of the coefficients, lowest degree first.
    pub fn from_coefficients_vec(coeffs: Vec<F>) -> Self {
        Self { coeffs }
    }

    /// Copies the coefficients, lowest degree first.
    pub fn from_coefficients_slice(coeffs: &[F]) -> Self {
        Self::from_coefficients_vec(coeffs.to_vec())
    }

    /// Random polynomial with `degree + 1` coefficients.
    pub fn rand<R: RngCore>(degree: usize, rng: &mut R) -> Self {
        Self::from_coefficients_vec((0..=degree).map(|_| F::rand(rng)).collect())
    }

    /// Coefficients, lowest degree first.
    pub fn coeffs(&self) -> &[F] {
        &self.coeffs
    }

    /// Number of coefficients.
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Returns true if there is no coefficient at all.
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Number of coefficients minus one. Trailing zeros count.
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Evaluate the polynomial at `point` with Horner's rule.
    pub fn evaluate(&self, point: &F) -> F {
        self.coeffs
            .iter()
            .rev()
            .fold(F::zero(), |acc, coeff| acc * point + coeff)
    }

    /// Coefficient-wise sum. The result has as many coefficients as the longer operand.
    pub fn add(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a + b)
    }

    /// Coefficient-wise difference. The result has as many coefficients as the longer operand.
    pub fn sub(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a - b)
    }

    /// Product by convolution. The result has `n + m - 1` coefficients, or none if either
    /// operand is empty.
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::zero();
        }
        let mut coeffs = vec![F::zero(); self.len() + other.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in other.coeffs.iter().enumerate() {
                coeffs[i + j] += *a * b;
            }
        }
        Self::from_coefficients_vec(coeffs)
    }

    /// Compute `q` such that `f(X) - y = q(X) * (X - z)`, where `f` is `self`.
    ///
    /// The division is synthetic, from the highest coefficient down, and the remainder
    /// `f(z) - y` is dropped. When `f(z) != y` the quotient is well formed but does not satisfy
    /// the identity; an evaluation proof built from it will not verify.
    ///
    /// The quotient has exactly `self.len() - 1` coefficients.
    pub fn quotient_by_linear(&self, z: &F, _y: &F) -> KResult<Self> {
        if self.is_empty() {
            return Err(invalid_input("cannot divide an empty polynomial"));
        }
        let n = self.len();
        let mut quotient = vec![F::zero(); n - 1];
        let mut carry = F::zero();
        for i in (1..n).rev() {
            carry = carry * z + self.coeffs[i];
            quotient[i - 1] = carry;
        }
        Ok(Self::from_coefficients_vec(quotient))
    }

    fn zip_with(&self, other: &Self, op: impl Fn(F, F) -> F) -> Self {
        let len = max(self.len(), other.len());
        let coeffs = (0..len)
            .map(|i| {
                let a = self.coeffs.get(i).copied().unwrap_or_else(F::zero);
                let b = other.coeffs.get(i).copied().unwrap_or_else(F::zero);
                op(a, b)
            })
            .collect();
        Self::from_coefficients_vec(coeffs)
    }
}

impl<'a, 'b, F: Field> Add<&'a Polynomial<F>> for &'b Polynomial<F> {
    type Output = Polynomial<F>;

    fn add(self, other: &'a Polynomial<F>) -> Polynomial<F> {
        Polynomial::add(self, other)
    }
}

impl<'a, 'b, F: Field> Sub<&'a Polynomial<F>> for &'b Polynomial<F> {
    type Output = Polynomial<F>;

    fn sub(self, other: &'a Polynomial<F>) -> Polynomial<F> {
        Polynomial::sub(self, other)
    }
}

impl<'a, 'b, F: Field> Mul<&'a Polynomial<F>> for &'b Polynomial<F> {
    type Output = Polynomial<F>;

    fn mul(self, other: &'a Polynomial<F>) -> Polynomial<F> {
        Polynomial::mul(self, other)
    }
}
