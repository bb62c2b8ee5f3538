//! Initial reference string generation.
use crate::error::{invalid_input, KResult};
use crate::kzg::data_structures::SRS;
use crate::kzg::utils::{mul_gen, powers_of};
use crate::kzg::UpdatableKZG;
use ark_ec::{AffineCurve, PairingEngine, ProjectiveCurve};
use ark_ff::{PrimeField, UniformRand, Zero};
use ark_std::rand::RngCore;

/// Draw a nonzero scalar from `rng`.
pub(crate) fn sample_nonzero<F: PrimeField, R: RngCore>(rng: &mut R) -> F {
    loop {
        let x = F::rand(rng);
        if !x.is_zero() {
            return x;
        }
    }
}

impl<E: PairingEngine> UpdatableKZG<E> {
    /// Generate a reference string for polynomials of degree at most `max_degree`.
    ///
    /// The trapdoor is drawn from `rng` and dropped before returning. Whoever runs this knows
    /// the trapdoor, so this is only meant for tests and for bootstrapping an update
    /// ceremony: the result is trustworthy once at least one honest party has updated it.
    pub fn kgen<R: RngCore>(max_degree: usize, rng: &mut R) -> KResult<SRS<E>> {
        if max_degree == 0 {
            return Err(invalid_input("max degree must be at least 1"));
        }
        let setup_time = start_timer!(|| format!("KZG setup with max degree {}", max_degree));
        let g1 = E::G1Projective::prime_subgroup_generator();
        let g2 = E::G2Projective::prime_subgroup_generator();

        let tau: E::Fr = sample_nonzero(rng);
        let powers_of_g1 = {
            let powers_of_tau = powers_of(tau, max_degree + 1);
            mul_gen(&powers_of_tau, g1)
        };
        let g2 = g2.into_affine();
        let g2_tau = g2.mul(tau.into_repr()).into_affine();
        end_timer!(setup_time);

        Ok(SRS {
            max_degree,
            g1: g1.into_affine(),
            g2,
            powers_of_g1,
            g2_tau,
        })
    }
}
