//! KZG polynomial commitments with a permissionless, publicly verifiable update protocol for
//! the structured reference string.
//!
//! * [`polynomial`]: dense univariate polynomials, evaluation and division by `X - z`
//! * [`kzg`]: reference string generation and updates, commitments, evaluation proofs
//! * [`pes`]: padding of witnesses into polynomials
//! * [`snark`]: interface for proof systems consuming the commitments
#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unused_import_braces, trivial_casts)]
#![deny(trivial_numeric_casts, variant_size_differences)]
#![deny(stable_features, unreachable_pub, non_shorthand_field_patterns)]
#![deny(unused_attributes, unused_mut)]
#![deny(missing_docs)]
#![deny(renamed_and_removed_lints, unused_allocation)]
#![deny(unused_comparisons, bare_trait_objects, unused_must_use)]

#[macro_use]
#[allow(unused_imports)]
extern crate ark_std;

pub use error::{Error, KResult};

/// error for this crate
mod error;

pub mod kzg;
pub mod pes;
pub mod polynomial;
pub mod snark;
pub mod transcript;
