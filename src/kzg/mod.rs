//! KZG polynomial commitments over an updatable reference string.
//!
//! More details can be found in the documentation of [`UpdatableKZG`](struct.UpdatableKZG.html)

use ark_ec::PairingEngine;
use ark_std::marker::PhantomData;

/// Update ceremony: a chain of contributions starting from an initial reference string
pub mod ceremony;
/// Commit function
pub mod commit;
/// Data structures: reference string, commitment, proofs
pub mod data_structures;
/// Evaluation proofs
pub mod open;
/// Initial reference string generation
pub mod trusted_setup;
/// Reference string updates and their verification
pub mod update;
/// Common functions: degree checks, MSM, pairing checks
mod utils;
/// Evaluation proof verification
pub mod verify;

pub use ceremony::{Ceremony, Contribution};
pub use data_structures::{Commitment, EvaluationProof, UpdateProof, SRS};
pub use update::UpdateReport;

/// ### KZG commitments with an updatable reference string
/// [Source](https://www.iacr.org/archive/asiacrypt2010/6477178/6477178.pdf)
///
/// The reference string `g1 * tau^i`, `g2 * tau` bounds the degree of committable
/// polynomials. Anybody can re-randomize the trapdoor with [`update`](#method.update) and
/// anybody can check such an update with [`verify_update`](#method.verify_update).
///
/// * `E`: pairing engine
///
/// ### Example Usage
/// ```
/// # use ark_updatable_kzg::kzg::UpdatableKZG;
/// # use ark_updatable_kzg::polynomial::Polynomial;
/// # use ark_bls12_381::{Bls12_381, Fr};
/// # use ark_std::{test_rng, UniformRand};
/// type KZG = UpdatableKZG<Bls12_381>;
/// let mut rng = test_rng();
/// // test-only setup, then one contribution
/// let srs = KZG::kgen(16, &mut rng).unwrap();
/// let (srs2, update_proof) = KZG::update_with_rng(&srs, &mut rng).unwrap();
/// assert!(KZG::verify_update(&srs, &srs2, &update_proof));
///
/// // commit, open, verify against the updated reference string
/// let f = Polynomial::<Fr>::rand(10, &mut rng);
/// let commitment = KZG::commit(&srs2, &f).unwrap();
/// let proof = KZG::eval_prove(&srs2, &f, Fr::rand(&mut rng)).unwrap();
/// assert!(KZG::eval_verify(&srs2, &commitment, &proof));
///
/// // the proof is tied to `srs2`
/// assert!(!KZG::eval_verify(&srs, &commitment, &proof));
/// ```
pub struct UpdatableKZG<E: PairingEngine> {
    #[doc(hidden)]
    _marker: PhantomData<E>,
}
