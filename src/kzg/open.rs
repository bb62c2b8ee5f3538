//! Evaluation proofs
use crate::error::KResult;
use crate::kzg::data_structures::{EvaluationProof, SRS};
use crate::kzg::utils::{check_degree, msm};
use crate::kzg::UpdatableKZG;
use crate::polynomial::Polynomial;
use ark_ec::{PairingEngine, ProjectiveCurve};

impl<E: PairingEngine> UpdatableKZG<E> {
    /// Prove the evaluation of `polynomial` at `point`.
    ///
    /// The proof is a commitment to `q(X) = (f(X) - f(z)) / (X - z)`, which has one
    /// coefficient less than `f` and therefore always fits the reference string.
    pub fn eval_prove(
        srs: &SRS<E>,
        polynomial: &Polynomial<E::Fr>,
        point: E::Fr,
    ) -> KResult<EvaluationProof<E>> {
        check_degree(srs, polynomial)?;
        let open_time =
            start_timer!(|| format!("open polynomial of degree {}", polynomial.degree()));
        let eval = polynomial.evaluate(&point);
        let quotient = polynomial.quotient_by_linear(&point, &eval)?;
        let pi = msm(&srs.powers_of_g1, quotient.coeffs());
        end_timer!(open_time);
        Ok(EvaluationProof {
            z: point,
            y: eval,
            pi: pi.into_affine(),
        })
    }
}
