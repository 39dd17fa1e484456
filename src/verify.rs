use subtle::ConstantTimeEq;
use tracing::{debug, trace};

use crate::field::from_be_bytes;
use crate::prove::challenge;
use crate::{Point, Proof, Pubkey, Scalar};

impl Proof {
    /// Verify a proof against `message`.
    ///
    /// Rebuilds the commitment as R' = s*G - e*Y and accepts iff hashing it
    /// reproduces e. Malformed public keys are rejected before any
    /// arithmetic. Never errors: every failure is `false`.
    pub fn verify(&self, message: &[u8]) -> bool {
        if !self.public_key.is_valid() {
            debug!("rejected proof with invalid public key");
            return false;
        }
        let public_key = self.public_key.point_y;

        // R' = s*G + (n - e)*Y
        let s_g = Point::GENERATOR.mul_vartime(&self.scalar_s);
        let neg_e_y = public_key.mul_vartime(&-self.challenge_e);
        let commitment = match s_g.add(&neg_e_y) {
            Ok(point) => point,
            Err(_) => return false,
        };
        if commitment.is_identity() {
            debug!("rejected proof with identity commitment");
            return false;
        }
        trace!(commitment = ?commitment, "reconstructed commitment");

        let challenge_e = challenge(&commitment, &public_key, message);
        bool::from(challenge_e.ct_eq(&self.challenge_e))
    }
}

/// Verify a proof given as 32-byte big-endian integers.
///
/// Off-curve or non-canonical public keys, and challenges or responses that
/// are not reduced mod n, all verify as `false`.
pub fn verify_proof(
    pubkey_x: &[u8; 32],
    pubkey_y: &[u8; 32],
    message: &[u8],
    response: &[u8; 32],
    challenge: &[u8; 32],
) -> bool {
    let public_key = match Pubkey::from_coordinates(pubkey_x, pubkey_y) {
        Ok(public_key) => public_key,
        Err(_) => return false,
    };
    let (challenge_e, scalar_s) = match (
        from_be_bytes::<Scalar>(challenge),
        from_be_bytes::<Scalar>(response),
    ) {
        (Some(challenge_e), Some(scalar_s)) => (challenge_e, scalar_s),
        _ => {
            debug!("rejected non-canonical proof scalars");
            return false;
        }
    };
    Proof {
        public_key,
        challenge_e,
        scalar_s,
    }
    .verify(message)
}
