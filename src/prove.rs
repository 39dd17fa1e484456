use halo2curves::ff::{Field, FromUniformBytes};
use rand_core::{CryptoRng, OsRng, RngCore};
use sha2::Sha512;
use sha3::{Digest, Keccak256};
use subtle::ConstantTimeEq;
use tracing::trace;

use crate::field::{scalar_from_be_bytes_reduced, to_be_bytes};
use crate::{Error, Keypair, Point, Prikey, Proof, Scalar};

const NONCE_TAG: &[u8] = b"schnorr-derive/nonce";

/// Fiat-Shamir challenge
/// `e = Keccak256(R.x || R.y || Y.x || Y.y || message) mod n`,
/// coordinates as 32-byte big-endian integers.
pub(crate) fn challenge(commitment: &Point, public_key: &Point, message: &[u8]) -> Scalar {
    let (r_x, r_y) = commitment.to_be_bytes();
    let (y_x, y_y) = public_key.to_be_bytes();

    let mut hasher = Keccak256::new();
    hasher.update(r_x);
    hasher.update(r_y);
    hasher.update(y_x);
    hasher.update(y_y);
    hasher.update(message);
    let digest: [u8; 32] = hasher.finalize().into();
    scalar_from_be_bytes_reduced(&digest)
}

impl Keypair {
    /// Derive the secret per-proof nonce k from the private key, the caller's
    /// auxiliary entropy and the statement being proven.
    ///
    /// Mixing in the message means that reusing `aux` across two different
    /// messages still yields two different nonces for the same key.
    pub(crate) fn nonce_gen(&self, message: &[u8], aux: &[u8; 32]) -> Result<Scalar, Error> {
        if bool::from(aux[..].ct_eq(&[0u8; 32][..])) {
            return Err(Error::WeakEntropy);
        }
        let (y_x, y_y) = self.public_key.to_coordinates();

        let mut hasher = Sha512::new();
        hasher.update(NONCE_TAG);
        hasher.update(self.private_key.to_bytes());
        hasher.update(aux);
        hasher.update(y_x);
        hasher.update(y_y);
        hasher.update(message);
        let wide: [u8; 64] = hasher.finalize().into();
        let nonce_k = Scalar::from_uniform_bytes(&wide);

        if bool::from(nonce_k.is_zero()) {
            return Err(Error::WeakEntropy);
        }
        Ok(nonce_k)
    }

    /// Prove knowledge of the private key, bound to `message`, using the
    /// caller's auxiliary entropy. Deterministic in `(key, message, aux)`.
    pub fn prove(&self, message: &[u8], aux: &[u8; 32]) -> Result<Proof, Error> {
        if bool::from(self.private_key.scalar_x.is_zero()) {
            return Err(Error::InvalidPrivateKey);
        }

        // commit: R = k * G
        let nonce_k = self.nonce_gen(message, aux)?;
        let commitment = Point::GENERATOR.mul(&nonce_k);

        // challenge: e = H(R, Y, m)
        let challenge_e = challenge(&commitment, &self.public_key.point_y, message);
        trace!(challenge = ?challenge_e, "proof challenge");

        // response: s = k + e * x
        let scalar_s = nonce_k + challenge_e * self.private_key.scalar_x;

        Ok(Proof {
            public_key: self.public_key,
            challenge_e,
            scalar_s,
        })
    }

    /// Prove with auxiliary entropy drawn from `rng`.
    pub fn prove_with_rng(
        &self,
        message: &[u8],
        mut rng: impl RngCore + CryptoRng,
    ) -> Result<Proof, Error> {
        let mut aux = [0u8; 32];
        rng.try_fill_bytes(&mut aux)
            .map_err(|_| Error::WeakEntropy)?;
        self.prove(message, &aux)
    }
}

impl Proof {
    /// `(Y.x, Y.y, e, s)` as 32-byte big-endian integers.
    pub fn to_be_bytes(&self) -> ([u8; 32], [u8; 32], [u8; 32], [u8; 32]) {
        let (y_x, y_y) = self.public_key.to_coordinates();
        (
            y_x,
            y_y,
            to_be_bytes(&self.challenge_e),
            to_be_bytes(&self.scalar_s),
        )
    }
}

/// Prove ownership of a private key given as a big-endian integer, with
/// auxiliary entropy from the operating system.
pub fn create_proof(privkey: &[u8; 32], message: &[u8]) -> Result<Proof, Error> {
    let keypair = Keypair::from_private_key(Prikey::from_bytes(privkey)?);
    keypair.prove_with_rng(message, OsRng)
}

/// Prove ownership of a private key given as a big-endian integer, with
/// caller-supplied auxiliary entropy.
pub fn create_proof_with_aux(
    privkey: &[u8; 32],
    message: &[u8],
    aux: &[u8; 32],
) -> Result<Proof, Error> {
    let keypair = Keypair::from_private_key(Prikey::from_bytes(privkey)?);
    keypair.prove(message, aux)
}
