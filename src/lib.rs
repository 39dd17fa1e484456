//! Additive key derivation and Schnorr proofs of key ownership over
//! secp256k1.
//!
//! A parent key pair is tweaked by a public nonce: the holder of the private
//! key computes the child private key, and anyone holding the parent public
//! key computes the matching child public key. The child private key can
//! then prove knowledge of itself, bound to a message, with a
//! non-interactive Schnorr proof.

use std::fmt;

mod derive;
mod error;
pub mod field;
mod keys;
mod point;
mod projective;
mod prove;
mod verify;

pub use derive::{nonce_from_preimage, priv_derive, pub_derive};
pub use error::Error;
pub use field::{encode_uint, FieldElement, Scalar};
pub use point::Point;
pub use prove::{create_proof, create_proof_with_aux};
pub use verify::verify_proof;

#[derive(Debug, Clone, Copy)]
pub struct Keypair {
    pub public_key: Pubkey,
    pub private_key: Prikey,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pubkey {
    pub point_y: Point,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Prikey {
    pub scalar_x: Scalar,
}

impl fmt::Debug for Prikey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Prikey(..)")
    }
}

/// A proof that whoever built it knew the discrete log of `public_key`.
///
/// The commitment R is not carried; verification rebuilds it from the
/// challenge and response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Proof {
    pub public_key: Pubkey,
    pub challenge_e: Scalar,
    pub scalar_s: Scalar,
}
