//! Plug point for a general-purpose proof system consuming KZG commitments.
use crate::kzg::data_structures::SRS;
use ark_ec::PairingEngine;
use ark_std::rand::RngCore;

/// A proof system that proves statements about committed polynomials, typically
/// knowledge of a witness behind a [`Commitment`](crate::kzg::Commitment).
///
/// Nothing in this crate implements it; implementers choose their own keys and encodings.
///
/// * `E`: pairing engine of the reference string
pub trait SNARKAdapter<E: PairingEngine> {
    /// key used by the prover
    type ProvingKey;
    /// key used by the verifier
    type VerifyingKey;
    /// public statement
    type Statement;
    /// private witness
    type Witness;
    /// proof of the statement
    type Proof;
    /// error type
    type Error: ark_std::error::Error + From<crate::Error>;

    /// Derive proving and verifying keys from a reference string.
    fn keygen<R: RngCore>(
        srs: &SRS<E>,
        rng: &mut R,
    ) -> Result<(Self::ProvingKey, Self::VerifyingKey), Self::Error>;

    /// Prove that `witness` satisfies `statement`.
    fn prove<R: RngCore>(
        pk: &Self::ProvingKey,
        statement: &Self::Statement,
        witness: &Self::Witness,
        rng: &mut R,
    ) -> Result<Self::Proof, Self::Error>;

    /// Verify a proof. Returns `Ok(false)` for proofs that are well formed but invalid.
    fn verify(
        vk: &Self::VerifyingKey,
        statement: &Self::Statement,
        proof: &Self::Proof,
    ) -> Result<bool, Self::Error>;
}
