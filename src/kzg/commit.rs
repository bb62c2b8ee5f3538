//! Commit function for the commitment scheme
use crate::error::KResult;
use crate::kzg::data_structures::{Commitment, SRS};
use crate::kzg::utils::{check_degree, msm};
use crate::kzg::UpdatableKZG;
use crate::polynomial::Polynomial;
use ark_ec::{PairingEngine, ProjectiveCurve};

impl<E: PairingEngine> UpdatableKZG<E> {
    /// Commit a polynomial of degree at most `srs.max_degree`.
    ///
    /// The commitment is binding but not hiding.
    pub fn commit(srs: &SRS<E>, polynomial: &Polynomial<E::Fr>) -> KResult<Commitment<E>> {
        check_degree(srs, polynomial)?;
        let c = msm(&srs.powers_of_g1, polynomial.coeffs());
        Ok(Commitment {
            c: c.into_affine(),
            degree: polynomial.degree(),
        })
    }
}
