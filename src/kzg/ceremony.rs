use crate::error::KResult;
use crate::kzg::data_structures::{UpdateProof, SRS};
use crate::kzg::UpdatableKZG;
use ark_ec::PairingEngine;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, Read, SerializationError, Write};
use ark_std::rand::RngCore;
use ark_std::vec::Vec;

/// One published contribution: the reference string it produced and its update proof
#[derive(Debug, Clone, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Contribution<E: PairingEngine> {
    /// reference string after this contribution
    pub srs: SRS<E>,
    /// proof that `srs` extends the previous reference string
    pub proof: UpdateProof<E>,
}

/// Public transcript of an update ceremony.
///
/// The ceremony is a fold of [`UpdatableKZG::update`] over the contributions, starting at
/// `initial`. Every contribution is kept so that the whole chain can be audited; the
/// reference string to use is the last one.
#[derive(Debug, Clone, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Ceremony<E: PairingEngine> {
    /// reference string the ceremony starts from, usually the output of `kgen`
    pub initial: SRS<E>,
    /// contributions in the order they were made
    pub contributions: Vec<Contribution<E>>,
}

impl<E: PairingEngine> Ceremony<E> {
    /// Ceremony without any contribution yet.
    pub fn new(initial: SRS<E>) -> Self {
        Self {
            initial,
            contributions: Vec::new(),
        }
    }

    /// Reference string produced by the last contribution.
    pub fn current(&self) -> &SRS<E> {
        self.contributions
            .last()
            .map(|c| &c.srs)
            .unwrap_or(&self.initial)
    }

    /// Number of contributions so far.
    pub fn len(&self) -> usize {
        self.contributions.len()
    }

    /// Returns true if nobody contributed yet.
    pub fn is_empty(&self) -> bool {
        self.contributions.is_empty()
    }

    /// Extend the ceremony with the contribution `beta`.
    pub fn contribute(mut self, beta: E::Fr) -> KResult<Self> {
        let (srs, proof) = UpdatableKZG::<E>::update(self.current(), beta)?;
        self.contributions.push(Contribution { srs, proof });
        Ok(self)
    }

    /// Extend the ceremony with a contribution drawn from `rng`.
    pub fn contribute_with_rng<R: RngCore>(mut self, rng: &mut R) -> KResult<Self> {
        let (srs, proof) = UpdatableKZG::<E>::update_with_rng(self.current(), rng)?;
        self.contributions.push(Contribution { srs, proof });
        Ok(self)
    }

    /// Extend the ceremony with a contribution derived from `entropy`.
    pub fn contribute_entropy(mut self, entropy: &[u8]) -> KResult<Self> {
        let (srs, proof) = UpdatableKZG::<E>::update_from_entropy(self.current(), entropy)?;
        self.contributions.push(Contribution { srs, proof });
        Ok(self)
    }

    /// Run a whole ceremony from `initial` over `betas`.
    pub fn from_contributions(
        initial: SRS<E>,
        betas: impl IntoIterator<Item = E::Fr>,
    ) -> KResult<Self> {
        betas
            .into_iter()
            .try_fold(Self::new(initial), |ceremony, beta| ceremony.contribute(beta))
    }

    /// Index of the first contribution that does not verify against its predecessor.
    pub fn first_invalid(&self) -> Option<usize> {
        let mut previous = &self.initial;
        for (i, contribution) in self.contributions.iter().enumerate() {
            if !UpdatableKZG::<E>::verify_update(previous, &contribution.srs, &contribution.proof) {
                return Some(i);
            }
            previous = &contribution.srs;
        }
        None
    }

    /// Returns true if every contribution verifies against its predecessor.
    pub fn verify(&self) -> bool {
        self.first_invalid().is_none()
    }
}
