//! Polynomial encoding of witnesses.
//!
//! A witness `w` of length `n` is encoded as the polynomial whose first `n` coefficients are
//! `w`, followed by `ell` random coefficients. Opening the commitment at up to `ell` points
//! then reveals nothing about `w` beyond the opened values. Decoding drops the padding.
use crate::error::{invalid_input, KResult};
use crate::polynomial::Polynomial;
use ark_ff::Field;
use ark_std::rand::RngCore;
use ark_std::vec::Vec;

/// Encode `w` (of length `n`) with the padding `rho` (of length `ell`).
pub fn enc<F: Field>(w: &[F], n: usize, ell: usize, rho: &[F]) -> KResult<Polynomial<F>> {
    if w.len() != n {
        return Err(invalid_input("witness length does not match n"));
    }
    if rho.len() != ell {
        return Err(invalid_input("padding length does not match ell"));
    }
    let mut coeffs = Vec::with_capacity(n + ell);
    coeffs.extend_from_slice(w);
    coeffs.extend_from_slice(rho);
    Ok(Polynomial::from_coefficients_vec(coeffs))
}

/// Encode `w` with `ell` padding coefficients drawn from `rng`.
pub fn enc_with_rng<F: Field, R: RngCore>(w: &[F], ell: usize, rng: &mut R) -> Polynomial<F> {
    let mut coeffs = Vec::with_capacity(w.len() + ell);
    coeffs.extend_from_slice(w);
    coeffs.extend((0..ell).map(|_| F::rand(rng)));
    Polynomial::from_coefficients_vec(coeffs)
}

/// Recover the witness of length `n` from an encoding with `ell` padding coefficients.
pub fn dec<F: Field>(f: &Polynomial<F>, n: usize, ell: usize) -> KResult<Vec<F>> {
    if f.len() != n + ell {
        return Err(invalid_input("encoding length does not match n + ell"));
    }
    Ok(f.coeffs()[..n].to_vec())
}
