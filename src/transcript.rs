//! Hash-based transcript used to derive update contributions.
//!
//! A contributor who does not want to manage a secure RNG can derive its β from its own
//! entropy bytes and the reference string it is extending. The derived β depends on every
//! absorbed message, so the same contribution can never be replayed on another SRS.
use crate::error::KResult;
use ark_ff::PrimeField;
use ark_serialize::CanonicalSerialize;
use ark_std::rand::RngCore;
use ark_std::vec::Vec;
use blake2::{Blake2b512, Digest};

/// Domain separator absorbed before anything else.
pub const TRANSCRIPT_DOMAIN: &[u8] = b"ark-updatable-kzg/update/v1";

/// Random generator whose output is a deterministic function of the absorbed messages.
///
/// Same sequence of `absorb` and squeeze calls yields the same output.
pub trait Transcript: RngCore {
    /// Fresh transcript with only the domain separator absorbed.
    fn new() -> Self;

    /// Absorb a serializable message.
    fn absorb<M: CanonicalSerialize + ?Sized>(&mut self, msg: &M) -> KResult<()>;

    /// Squeeze a nonzero scalar.
    fn challenge_scalar<F: PrimeField>(&mut self) -> F {
        loop {
            let candidate = F::rand(self);
            if !candidate.is_zero() {
                return candidate;
            }
        }
    }
}

/// Transcript over a 512-bit blake2b digest
pub struct Blake2bTranscript {
    state: Blake2b512,
}

impl Transcript for Blake2bTranscript {
    fn new() -> Self {
        let mut state = Blake2b512::new();
        state.update(TRANSCRIPT_DOMAIN);
        Self { state }
    }

    fn absorb<M: CanonicalSerialize + ?Sized>(&mut self, msg: &M) -> KResult<()> {
        let mut buf = Vec::new();
        msg.serialize_uncompressed(&mut buf)?;
        self.state.update(&buf);
        Ok(())
    }
}

impl RngCore for Blake2bTranscript {
    fn next_u32(&mut self) -> u32 {
        let mut temp = [0u8; 4];
        self.fill_bytes(&mut temp);
        u32::from_le_bytes(temp)
    }

    fn next_u64(&mut self) -> u64 {
        let mut temp = [0u8; 8];
        self.fill_bytes(&mut temp);
        u64::from_le_bytes(temp)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let output_size = <Blake2b512 as Digest>::output_size();
        for chunk in dest.chunks_mut(output_size) {
            let block = self.state.clone().finalize();
            chunk.copy_from_slice(&block[..chunk.len()]);
            // ratchet so that the next block differs
            self.state.update(&block);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), ark_std::rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::transcript::{Blake2bTranscript, Transcript};
    use ark_bls12_381::Fr;
    use ark_ff::Zero;
    use ark_std::rand::{Rng, RngCore};
    use ark_std::test_rng;
    use ark_std::vec::Vec;

    fn random_message<R: RngCore>(rng: &mut R, size: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(size);
        data.resize_with(size, || rng.gen());
        data
    }

    fn run(msgs: &[Vec<u8>]) -> (Vec<Fr>, Vec<u8>) {
        let mut transcript = Blake2bTranscript::new();
        let mut scalars = Vec::new();
        transcript.absorb(&msgs[0]).unwrap();
        scalars.push(transcript.challenge_scalar());
        scalars.push(transcript.challenge_scalar());
        transcript.absorb(&msgs[1]).unwrap();
        transcript.absorb(&msgs[2]).unwrap();
        scalars.push(transcript.challenge_scalar());
        // not aligned to the digest size
        let mut bytes = vec![0u8; 777];
        transcript.fill_bytes(&mut bytes);
        scalars.push(transcript.challenge_scalar());
        (scalars, bytes)
    }

    #[test]
    fn same_messages_same_output() {
        let mut rng = test_rng();
        let msgs: Vec<_> = (0..3).map(|_| random_message(&mut rng, 128)).collect();
        let (scalars, bytes) = run(&msgs);
        for _ in 0..5 {
            assert_eq!(run(&msgs), (scalars.clone(), bytes.clone()));
        }
        assert_ne!(scalars[0], scalars[1], "squeezing twice must not repeat");
        assert!(scalars.iter().all(|s| !s.is_zero()));
        assert_ne!(&bytes[..64], &bytes[64..128]);
    }

    #[test]
    fn different_messages_different_output() {
        let mut rng = test_rng();
        let msgs: Vec<_> = (0..3).map(|_| random_message(&mut rng, 64)).collect();
        let mut other = msgs.clone();
        other[2][0] ^= 1;
        assert_ne!(run(&msgs).0[2], run(&other).0[2]);
        // output before the diverging message is unaffected
        assert_eq!(run(&msgs).0[..2], run(&other).0[..2]);
    }

    #[test]
    fn slices_absorb_like_vectors() {
        let mut rng = test_rng();
        let msg = random_message(&mut rng, 96);

        let mut from_slice = Blake2bTranscript::new();
        from_slice.absorb(&msg[..]).unwrap();
        let mut from_vec = Blake2bTranscript::new();
        from_vec.absorb(&msg).unwrap();

        let a: Fr = from_slice.challenge_scalar();
        let b: Fr = from_vec.challenge_scalar();
        assert_eq!(a, b);
    }
}
