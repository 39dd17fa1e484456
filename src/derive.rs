//! Additive derivation of child keys from a public nonce.
//!
//! With parent keys (x, X = x*G) and nonce t, the child keys are
//! (x + t mod n, X + t*G). Both sides agree because scalar multiplication
//! distributes over scalar addition, so a verifier holding only X can
//! predict the child public key without seeing any private key.

use halo2curves::ff::Field;
use sha3::{Digest, Keccak256};
use tracing::debug;

use crate::field::scalar_from_be_bytes_reduced;
use crate::{Error, Keypair, Point, Prikey, Pubkey, Scalar};

/// Derive a nonce from arbitrary data as `Keccak256(preimage) mod n`.
pub fn nonce_from_preimage(preimage: &[u8]) -> Scalar {
    let digest: [u8; 32] = Keccak256::digest(preimage).into();
    scalar_from_be_bytes_reduced(&digest)
}

/// Child private key `privkey + nonce mod n`. Total; a zero result is left
/// for [`Keypair::derive`] to reject.
pub fn priv_derive(privkey: &Scalar, nonce: &Scalar) -> Scalar {
    *privkey + nonce
}

/// Child public key `pubkey + nonce * G`.
///
/// The parent must be a curve point other than the identity. Everything
/// here is public, so the variable-time multiplication is used.
pub fn pub_derive(pubkey: &Point, nonce: &Scalar) -> Result<Point, Error> {
    if pubkey.is_identity() || !pubkey.is_on_curve() {
        debug!("rejected parent public key");
        return Err(Error::PointNotOnCurve);
    }
    let child = pubkey.add(&Point::GENERATOR.mul_vartime(nonce))?;
    if child.is_identity() {
        debug!("public derivation reached the identity");
        return Err(Error::DegenerateDerivation);
    }
    Ok(child)
}

impl Prikey {
    pub fn derive(&self, nonce: &Scalar) -> Prikey {
        Prikey {
            scalar_x: priv_derive(&self.scalar_x, nonce),
        }
    }
}

impl Pubkey {
    pub fn derive(&self, nonce: &Scalar) -> Result<Pubkey, Error> {
        Ok(Pubkey {
            point_y: pub_derive(&self.point_y, nonce)?,
        })
    }
}

impl Keypair {
    /// Derive both halves of the child key pair.
    ///
    /// The public half is computed from the parent public key, not from the
    /// child private key, so the result is only as consistent as `self`.
    pub fn derive(&self, nonce: &Scalar) -> Result<Keypair, Error> {
        let private_key = self.private_key.derive(nonce);
        if bool::from(private_key.scalar_x.is_zero()) {
            debug!("private derivation reached zero");
            return Err(Error::DegenerateDerivation);
        }
        let public_key = self.public_key.derive(nonce)?;
        Ok(Keypair {
            public_key,
            private_key,
        })
    }
}
