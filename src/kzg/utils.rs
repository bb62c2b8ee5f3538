use crate::error::{Error, KResult};
use crate::kzg::data_structures::SRS;
use crate::polynomial::Polynomial;
use ark_ec::msm::{FixedBaseMSM, VariableBaseMSM};
use ark_ec::{AffineCurve, PairingEngine, ProjectiveCurve};
use ark_ff::{Field, One, PrimeField};
use ark_std::vec::Vec;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Reject polynomials the reference string cannot hold before any group arithmetic.
pub(crate) fn check_degree<E: PairingEngine>(
    srs: &SRS<E>,
    poly: &Polynomial<E::Fr>,
) -> KResult<()> {
    let capacity = ark_std::cmp::min(srs.max_degree.saturating_add(1), srs.powers_of_g1.len());
    if poly.is_empty() || poly.len() > capacity {
        return Err(Error::DegreeExceeded {
            num_coeffs: poly.len(),
            max_degree: srs.max_degree,
        });
    }
    Ok(())
}

/// Commits coefficients to group elements via VariableBaseMSM: `sum_i coeffs[i] * powers[i]`.
///
/// `powers` must hold at least `coeffs.len()` elements.
pub(crate) fn msm<G: AffineCurve>(powers: &[G], coeffs: &[G::ScalarField]) -> G::Projective {
    let msm_time = start_timer!(|| format!("MSM of size {}", coeffs.len()));
    let scalars = convert_to_bigints(coeffs);
    let result = VariableBaseMSM::multi_scalar_mul(&powers[..scalars.len()], &scalars);
    end_timer!(msm_time);
    result
}

/// `[1, x, x^2, ..., x^{n - 1}]`
pub(crate) fn powers_of<F: Field>(x: F, n: usize) -> Vec<F> {
    let mut powers = Vec::with_capacity(n);
    let mut current = F::one();
    for _ in 0..n {
        powers.push(current);
        current *= x;
    }
    powers
}

/// `[g * coeffs[0], g * coeffs[1], ...]` with a fixed-base window table.
pub(crate) fn mul_gen<F: PrimeField, G: ProjectiveCurve<ScalarField = F>>(
    coeffs: &[F],
    g: G,
) -> Vec<G::Affine> {
    let window_size = FixedBaseMSM::get_mul_window_size(coeffs.len());
    let scalar_field_size_bits = F::size_in_bits();
    let table = FixedBaseMSM::get_window_table(scalar_field_size_bits, window_size, g);
    let multiples =
        FixedBaseMSM::multi_scalar_mul(scalar_field_size_bits, window_size, &table, coeffs);

    G::batch_normalization_into_affine(&multiples)
}

/// `e(a, b) == e(c, d)`, computed as a single product of pairings `e(a, b) * e(-c, d) == 1`.
pub(crate) fn pairings_match<E: PairingEngine>(
    a: E::G1Affine,
    b: E::G2Affine,
    c: E::G1Affine,
    d: E::G2Affine,
) -> bool {
    let pairs: [(E::G1Prepared, E::G2Prepared); 2] =
        [(a.into(), b.into()), ((-c).into(), d.into())];
    E::product_of_pairings(pairs.iter()).is_one()
}

/// Converts a slice of PrimeField Elements into a vector of BigInt
fn convert_to_bigints<F: PrimeField>(p: &[F]) -> Vec<F::BigInt> {
    cfg_iter!(p).map(|s| s.into_repr()).collect()
}
