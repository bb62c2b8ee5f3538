//! Permissionless updates of the reference string.
//!
//! An update raises the trapdoor `tau` to `tau * beta` without anybody learning either
//! value: every `g1 * tau^i` is multiplied by `beta^i` and `g2 * tau` by `beta`. The updater
//! publishes `(g1 * beta, g2 * beta)` so that anyone holding the old and the new reference
//! strings can check the update with pairings. After a chain of updates the trapdoor is the
//! product of all contributions and stays unknown as long as one contributor discarded its
//! share.
use crate::error::{invalid_input, KResult};
use crate::kzg::data_structures::{UpdateProof, SRS};
use crate::kzg::trusted_setup::sample_nonzero;
use crate::kzg::utils::{pairings_match, powers_of};
use crate::kzg::UpdatableKZG;
use crate::transcript::{Blake2bTranscript, Transcript};
use ark_ec::{AffineCurve, PairingEngine, ProjectiveCurve};
use ark_ff::{PrimeField, Zero};
use ark_std::rand::RngCore;
use ark_std::vec::Vec;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Outcome of every check performed on an update, for diagnostics.
///
/// Unlike [`UpdatableKZG::verify_update`], which stops at the first failing check, this
/// report is filled exhaustively. Pairing checks that cannot run because the inputs are
/// malformed are reported as failed, and no chain index is listed for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateReport {
    /// both reference strings have the same maximum degree
    pub degree_matches: bool,
    /// both reference strings have the right shape, share generators, and the update is
    /// not degenerate
    pub well_formed: bool,
    /// `e(new[1], g2) == e(old[1], g2 * beta)`
    pub first_power: bool,
    /// `e(g1 * beta, old g2 * tau) == e(g1, new g2 * tau)`
    pub tau_link: bool,
    /// `e(g1 * beta, g2) == e(g1, g2 * beta)`
    pub beta_link: bool,
    /// indices `i >= 2` for which `e(new[i], g2) != e(new[i - 1], new g2 * tau)`
    pub failed_chain_indices: Vec<usize>,
}

impl UpdateReport {
    /// Returns true if every check passed.
    pub fn is_valid(&self) -> bool {
        self.degree_matches
            && self.well_formed
            && self.first_power
            && self.tau_link
            && self.beta_link
            && self.failed_chain_indices.is_empty()
    }
}

impl<E: PairingEngine> UpdatableKZG<E> {
    /// Contribute `beta` to the reference string.
    ///
    /// Returns the new reference string and the proof that it was derived from `old`.
    /// `beta` must be drawn from a secure source, used once, and discarded.
    pub fn update(old: &SRS<E>, beta: E::Fr) -> KResult<(SRS<E>, UpdateProof<E>)> {
        if beta.is_zero() {
            return Err(invalid_input("update contribution must be nonzero"));
        }
        if !old.is_well_formed() {
            return Err(invalid_input("cannot update a malformed reference string"));
        }
        let update_time = start_timer!(|| format!("SRS update with max degree {}", old.max_degree));

        let powers_of_g1 = {
            let powers_of_beta = powers_of(beta, old.max_degree + 1);
            let mut scaled = Vec::with_capacity(old.max_degree + 1);
            scaled.push(old.g1.into_projective());
            let tail: Vec<E::G1Projective> = cfg_iter!(old.powers_of_g1[1..])
                .zip(cfg_iter!(powers_of_beta[1..]))
                .map(|(power, beta_i)| power.mul(beta_i.into_repr()))
                .collect();
            scaled.extend(tail);
            E::G1Projective::batch_normalization_into_affine(&scaled)
        };
        let beta = beta.into_repr();
        let new = SRS {
            max_degree: old.max_degree,
            g1: old.g1,
            g2: old.g2,
            powers_of_g1,
            g2_tau: old.g2_tau.mul(beta).into_affine(),
        };
        let proof = UpdateProof {
            g1_beta: old.g1.mul(beta).into_affine(),
            g2_beta: old.g2.mul(beta).into_affine(),
        };
        end_timer!(update_time);
        Ok((new, proof))
    }

    /// Contribute a fresh nonzero scalar drawn from `rng`.
    pub fn update_with_rng<R: RngCore>(
        old: &SRS<E>,
        rng: &mut R,
    ) -> KResult<(SRS<E>, UpdateProof<E>)> {
        let beta: E::Fr = sample_nonzero(rng);
        Self::update(old, beta)
    }

    /// Contribute a scalar derived from `entropy` and the reference string being updated.
    ///
    /// The same entropy yields unrelated contributions on different reference strings. The
    /// entropy must be as secret as the contribution itself.
    pub fn update_from_entropy(
        old: &SRS<E>,
        entropy: &[u8],
    ) -> KResult<(SRS<E>, UpdateProof<E>)> {
        let mut transcript = Blake2bTranscript::new();
        transcript.absorb(old)?;
        transcript.absorb(entropy)?;
        let beta: E::Fr = transcript.challenge_scalar();
        Self::update(old, beta)
    }

    /// Check that `new` was obtained from `old` by a single contribution attested by `proof`.
    ///
    /// Returns false as soon as one check fails; no partial success is reported. Use
    /// [`Self::verify_update_report`] to learn which checks fail.
    pub fn verify_update(old: &SRS<E>, new: &SRS<E>, proof: &UpdateProof<E>) -> bool {
        if old.max_degree != new.max_degree {
            return false;
        }
        if !Self::update_is_well_formed(old, new, proof) {
            return false;
        }
        let verify_time =
            start_timer!(|| format!("verify update with max degree {}", new.max_degree));
        let result = Self::first_power_holds(old, new, proof)
            && Self::tau_link_holds(old, new, proof)
            && Self::beta_link_holds(old, proof)
            && cfg_into_iter!(2..=new.max_degree).all(|i| Self::chain_holds(old, new, i));
        end_timer!(verify_time);
        result
    }

    /// Run every check of [`Self::verify_update`] without short-circuiting.
    pub fn verify_update_report(
        old: &SRS<E>,
        new: &SRS<E>,
        proof: &UpdateProof<E>,
    ) -> UpdateReport {
        let degree_matches = old.max_degree == new.max_degree;
        let well_formed = degree_matches && Self::update_is_well_formed(old, new, proof);
        if !well_formed {
            return UpdateReport {
                degree_matches,
                well_formed,
                first_power: false,
                tau_link: false,
                beta_link: false,
                failed_chain_indices: Vec::new(),
            };
        }
        let failed_chain_indices: Vec<usize> = cfg_into_iter!(2..=new.max_degree)
            .filter(|i| !Self::chain_holds(old, new, *i))
            .collect();
        UpdateReport {
            degree_matches,
            well_formed,
            first_power: Self::first_power_holds(old, new, proof),
            tau_link: Self::tau_link_holds(old, new, proof),
            beta_link: Self::beta_link_holds(old, proof),
            failed_chain_indices,
        }
    }

    /// Shape checks that must pass before any pairing is computed.
    fn update_is_well_formed(old: &SRS<E>, new: &SRS<E>, proof: &UpdateProof<E>) -> bool {
        old.is_well_formed()
            && new.is_well_formed()
            && old.g1 == new.g1
            && old.g2 == new.g2
            && !new.g2_tau.is_zero()
            && !proof.g1_beta.is_zero()
            && !proof.g2_beta.is_zero()
    }

    /// binds the attested beta to the new first power
    fn first_power_holds(old: &SRS<E>, new: &SRS<E>, proof: &UpdateProof<E>) -> bool {
        pairings_match::<E>(
            new.powers_of_g1[1],
            old.g2,
            old.powers_of_g1[1],
            proof.g2_beta,
        )
    }

    /// links the G1 side of the proof to the new `g2 * tau`
    fn tau_link_holds(old: &SRS<E>, new: &SRS<E>, proof: &UpdateProof<E>) -> bool {
        pairings_match::<E>(proof.g1_beta, old.g2_tau, old.g1, new.g2_tau)
    }

    /// both halves of the proof carry the same beta
    fn beta_link_holds(old: &SRS<E>, proof: &UpdateProof<E>) -> bool {
        pairings_match::<E>(proof.g1_beta, old.g2, old.g1, proof.g2_beta)
    }

    /// `new[i]` is `new[i - 1]` raised once more to the new trapdoor
    fn chain_holds(old: &SRS<E>, new: &SRS<E>, i: usize) -> bool {
        pairings_match::<E>(
            new.powers_of_g1[i],
            old.g2,
            new.powers_of_g1[i - 1],
            new.g2_tau,
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::kzg::data_structures::{UpdateProof, SRS};
    use crate::kzg::UpdatableKZG;
    use crate::Error;
    use ark_bls12_381::{Bls12_381, Fr, G1Projective, G2Projective};
    use ark_ec::{AffineCurve, ProjectiveCurve};
    use ark_ff::{PrimeField, UniformRand, Zero};
    use ark_std::test_rng;

    type E = Bls12_381;

    type KZG = UpdatableKZG<E>;

    fn honest_update(max_degree: usize) -> (SRS<E>, SRS<E>, UpdateProof<E>) {
        let rng = &mut test_rng();
        let old = KZG::kgen(max_degree, rng).unwrap();
        let (new, proof) = KZG::update_with_rng(&old, rng).unwrap();
        (old, new, proof)
    }

    #[test]
    fn honest_updates_verify() {
        for max_degree in [1, 8, 16, 32] {
            let (old, new, proof) = honest_update(max_degree);
            assert!(KZG::verify_update(&old, &new, &proof), "degree {}", max_degree);
            assert!(KZG::verify_update_report(&old, &new, &proof).is_valid());
            assert_eq!(new.powers_of_g1[0], old.g1);
            assert_ne!(new.g2_tau, old.g2_tau);
        }
    }

    #[test]
    fn update_matches_known_beta() {
        let rng = &mut test_rng();
        let old = KZG::kgen(4, rng).unwrap();
        let beta = Fr::rand(rng);
        let (new, proof) = KZG::update(&old, beta).unwrap();
        assert_eq!(proof.g1_beta, old.g1.mul(beta.into_repr()).into_affine());
        assert_eq!(proof.g2_beta, old.g2.mul(beta.into_repr()).into_affine());
        // new[2] = old[2] * beta^2
        assert_eq!(
            new.powers_of_g1[2],
            old.powers_of_g1[2].mul((beta * beta).into_repr()).into_affine()
        );
    }

    #[test]
    fn perturbed_powers_are_rejected() {
        let (old, new, proof) = honest_update(8);
        let noise = G1Projective::prime_subgroup_generator();
        for i in 0..=8 {
            let mut forged = new.clone();
            forged.powers_of_g1[i] =
                (forged.powers_of_g1[i].into_projective() + noise).into_affine();
            assert!(!KZG::verify_update(&old, &forged, &proof), "index {}", i);
            assert!(!KZG::verify_update_report(&old, &forged, &proof).is_valid());
        }
    }

    #[test]
    fn report_pinpoints_broken_chain_link() {
        let (old, new, proof) = honest_update(8);
        let mut forged = new.clone();
        forged.powers_of_g1[5] = forged.powers_of_g1[4];
        let report = KZG::verify_update_report(&old, &forged, &proof);
        assert!(report.well_formed && report.first_power && report.tau_link && report.beta_link);
        // index 5 fails against index 4, and index 6 fails against the forged index 5
        assert_eq!(report.failed_chain_indices, vec![5, 6]);
    }

    #[test]
    fn perturbed_proof_is_rejected() {
        let (old, new, proof) = honest_update(8);

        let mut forged = proof;
        forged.g2_beta = (forged.g2_beta.into_projective()
            + G2Projective::prime_subgroup_generator())
        .into_affine();
        assert!(!KZG::verify_update(&old, &new, &forged));
        assert!(!KZG::verify_update_report(&old, &new, &forged).first_power);

        let mut forged = proof;
        forged.g1_beta = (forged.g1_beta.into_projective()
            + G1Projective::prime_subgroup_generator())
        .into_affine();
        assert!(!KZG::verify_update(&old, &new, &forged));
        assert!(!KZG::verify_update_report(&old, &new, &forged).tau_link);
    }

    #[test]
    fn proof_of_another_update_is_rejected() {
        let rng = &mut test_rng();
        let old = KZG::kgen(8, rng).unwrap();
        let (new, _) = KZG::update_with_rng(&old, rng).unwrap();
        let (_, other_proof) = KZG::update_with_rng(&old, rng).unwrap();
        assert!(!KZG::verify_update(&old, &new, &other_proof));
    }

    #[test]
    fn degree_mismatch_is_rejected() {
        let rng = &mut test_rng();
        let old = KZG::kgen(8, rng).unwrap();
        let (_, proof) = KZG::update_with_rng(&old, rng).unwrap();
        let other = KZG::kgen(16, rng).unwrap();
        let (new, _) = KZG::update_with_rng(&other, rng).unwrap();
        assert!(!KZG::verify_update(&old, &new, &proof));
        let report = KZG::verify_update_report(&old, &new, &proof);
        assert!(!report.degree_matches && !report.is_valid());
    }

    #[test]
    fn degenerate_contributions_are_rejected() {
        let (old, _, _) = honest_update(4);
        assert!(matches!(
            KZG::update(&old, Fr::zero()),
            Err(Error::InvalidInput(_))
        ));

        // what a zero contribution would have produced
        let mut collapsed = old.clone();
        for power in collapsed.powers_of_g1.iter_mut().skip(1) {
            *power = Zero::zero();
        }
        collapsed.g2_tau = Zero::zero();
        let proof = UpdateProof {
            g1_beta: Zero::zero(),
            g2_beta: Zero::zero(),
        };
        assert!(!KZG::verify_update(&old, &collapsed, &proof));
    }

    #[test]
    fn oversized_degree_is_rejected_without_panicking() {
        let (old, new, proof) = honest_update(4);

        let mut forged = new.clone();
        forged.max_degree = usize::MAX;
        assert!(!forged.is_well_formed());
        assert!(!KZG::verify_update(&old, &forged, &proof));
        let report = KZG::verify_update_report(&old, &forged, &proof);
        assert!(!report.degree_matches && !report.is_valid());
        assert!(report.failed_chain_indices.is_empty());

        let mut forged_old = old.clone();
        forged_old.max_degree = usize::MAX;
        assert!(!KZG::verify_update(&forged_old, &forged, &proof));
        let report = KZG::verify_update_report(&forged_old, &forged, &proof);
        assert!(report.degree_matches && !report.well_formed);
        assert!(report.failed_chain_indices.is_empty());
        assert!(matches!(
            KZG::update(&forged_old, Fr::from(3u64)),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn swapped_generators_are_rejected() {
        let (old, new, proof) = honest_update(4);

        let mut forged = new.clone();
        forged.g2 = (forged.g2.into_projective() + G2Projective::prime_subgroup_generator())
            .into_affine();
        assert!(forged.is_well_formed());
        assert!(!KZG::verify_update(&old, &forged, &proof));
        assert!(!KZG::verify_update_report(&old, &forged, &proof).well_formed);

        let mut forged = new.clone();
        forged.g1 = (forged.g1.into_projective() + G1Projective::prime_subgroup_generator())
            .into_affine();
        forged.powers_of_g1[0] = forged.g1;
        assert!(forged.is_well_formed());
        assert!(!KZG::verify_update(&old, &forged, &proof));
        assert!(!KZG::verify_update_report(&old, &forged, &proof).well_formed);
    }

    #[test]
    fn malformed_reference_string_cannot_be_updated() {
        let (mut old, _, _) = honest_update(4);
        old.powers_of_g1.pop();
        assert!(matches!(
            KZG::update(&old, Fr::from(3u64)),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn entropy_contributions_are_bound_to_the_reference_string() {
        let rng = &mut test_rng();
        let a = KZG::kgen(4, rng).unwrap();
        let b = KZG::kgen(4, rng).unwrap();
        let entropy = b"correct horse battery staple";

        let (a1, proof_a1) = KZG::update_from_entropy(&a, entropy).unwrap();
        let (a2, proof_a2) = KZG::update_from_entropy(&a, entropy).unwrap();
        assert_eq!(a1, a2);
        assert_eq!(proof_a1, proof_a2);
        assert!(KZG::verify_update(&a, &a1, &proof_a1));

        let (_, proof_b) = KZG::update_from_entropy(&b, entropy).unwrap();
        assert_ne!(proof_a1.g1_beta, proof_b.g1_beta);
    }
}
