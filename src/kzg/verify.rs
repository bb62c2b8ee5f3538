//! Verifier for commitment scheme
use crate::kzg::data_structures::{Commitment, EvaluationProof, SRS};
use crate::kzg::utils::pairings_match;
use crate::kzg::UpdatableKZG;
use ark_ec::{AffineCurve, PairingEngine, ProjectiveCurve};
use ark_ff::PrimeField;

impl<E: PairingEngine> UpdatableKZG<E> {
    /// Verify that the committed polynomial evaluates to `proof.y` at `proof.z`.
    ///
    /// Checks `e(C - y * g1, g2) == e(pi, g2 * tau - z * g2)`, which is
    /// `f(X) - y = q(X) * (X - z)` at the trapdoor. Returns false for any proof that does not
    /// satisfy the equation, including proofs made against another reference string.
    pub fn eval_verify(
        srs: &SRS<E>,
        commitment: &Commitment<E>,
        proof: &EvaluationProof<E>,
    ) -> bool {
        let verify_time = start_timer!(|| "verify evaluation proof");
        let left = commitment.c.into_projective() - &srs.g1.mul(proof.y.into_repr());
        let right = srs.g2_tau.into_projective() - &srs.g2.mul(proof.z.into_repr());
        let result = pairings_match::<E>(left.into_affine(), srs.g2, proof.pi, right.into_affine());
        end_timer!(verify_time);
        result
    }
}
