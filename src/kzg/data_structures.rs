use ark_ec::PairingEngine;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, Read, SerializationError, Write};
use ark_std::vec::Vec;

/// Updatable Structured Reference String
///
/// Encodes an unknown trapdoor `tau` as `g1 * tau^i` for `i` in `0..=max_degree` and as
/// `g2 * tau`. The reference string is replaced as a whole by every update; commitments and
/// proofs only verify against the exact instance they were computed with.
#[derive(Debug, Clone, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct SRS<E: PairingEngine> {
    /// Maximum degree of a committable polynomial
    pub max_degree: usize,
    /// G1 generator
    pub g1: E::G1Affine,
    /// G2 generator
    pub g2: E::G2Affine,
    /// `g1 * tau^i` for `i` in `0..=max_degree`; the first entry is `g1`
    pub powers_of_g1: Vec<E::G1Affine>,
    /// `g2 * tau`
    pub g2_tau: E::G2Affine,
}

impl<E: PairingEngine> SRS<E> {
    /// Check the shape of the reference string: `max_degree + 1` powers starting at the
    /// generator. This says nothing about the powers sharing one trapdoor.
    ///
    /// `max_degree` may come from untrusted bytes, so it is only compared against the
    /// length of the powers, never used for arithmetic.
    pub fn is_well_formed(&self) -> bool {
        self.max_degree > 0
            && self.powers_of_g1.len().checked_sub(1) == Some(self.max_degree)
            && self.powers_of_g1[0] == self.g1
    }
}

/// Published alongside an updated reference string. Attests to the contribution `beta`
/// without revealing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct UpdateProof<E: PairingEngine> {
    /// `g1 * beta`
    pub g1_beta: E::G1Affine,
    /// `g2 * beta`
    pub g2_beta: E::G2Affine,
}

/// Commitment to a polynomial
#[derive(Debug, Clone, Copy, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Commitment<E: PairingEngine> {
    /// `sum_i f_i * g1 * tau^i`
    pub c: E::G1Affine,
    /// number of coefficients of the committed polynomial minus one
    pub degree: usize,
}

/// Proof that a committed polynomial evaluates to `y` at `z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct EvaluationProof<E: PairingEngine> {
    /// evaluation point
    pub z: E::Fr,
    /// claimed evaluation
    pub y: E::Fr,
    /// commitment to the quotient `(f(X) - y) / (X - z)`
    pub pi: E::G1Affine,
}
