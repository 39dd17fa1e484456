use halo2curves::ff::{Field, FromUniformBytes};
use rand_core::RngCore;
use sha2::Digest;
use sha2::Sha512;

use crate::field::{scalar_from_be_bytes_reduced, to_be_bytes};
use crate::{Error, Keypair, Point, Prikey, Pubkey, Scalar};

const SEED_TAG: &[u8] = b"schnorr-derive/seed";

/// Private scalar for `seed` at rehash round `counter`.
pub(crate) fn expand_seed(seed: &[u8; 32], counter: u32) -> Scalar {
    let mut hasher = Sha512::new();
    hasher.update(SEED_TAG);
    hasher.update(seed);
    hasher.update(counter.to_be_bytes());
    let output: [u8; 64] = hasher.finalize().into();
    // 64 bytes so the reduction mod n is close to uniform
    Scalar::from_uniform_bytes(&output)
}

impl Keypair {
    /// Build a new pair of keys from a 32-byte seed
    pub fn new(seed: [u8; 32]) -> Self {
        // a zero scalar is not a key; rehash with the next counter instead
        let mut counter = 0u32;
        let sk = loop {
            let sk = expand_seed(&seed, counter);
            if !bool::from(sk.is_zero()) {
                break sk;
            }
            counter = counter.wrapping_add(1);
        };
        Self::from_private_key(Prikey { scalar_x: sk })
    }

    /// Build a new pair of keys from rng
    pub fn random(mut rng: impl RngCore) -> Self {
        let mut seed = [0u8; 32];
        rng.fill_bytes(&mut seed);
        Self::new(seed)
    }

    pub fn from_private_key(private_key: Prikey) -> Self {
        Keypair {
            public_key: private_key.into(),
            private_key,
        }
    }

    /// Check that the public half is the private half times G.
    pub fn is_consistent(&self) -> bool {
        Pubkey::from(self.private_key) == self.public_key
    }
}

impl From<Prikey> for Pubkey {
    fn from(sk: Prikey) -> Self {
        Pubkey {
            point_y: Point::GENERATOR.mul(&sk.scalar_x),
        }
    }
}

impl Prikey {
    /// Read a private key given as a 256-bit big-endian integer. The value is
    /// reduced mod n and must not reduce to zero.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, Error> {
        let scalar_x = scalar_from_be_bytes_reduced(bytes);
        if bool::from(scalar_x.is_zero()) {
            return Err(Error::InvalidPrivateKey);
        }
        Ok(Self { scalar_x })
    }

    /// Convert the private key to big-endian bytes.
    pub fn to_bytes(&self) -> [u8; 32] {
        to_be_bytes(&self.scalar_x)
    }
}

impl Pubkey {
    /// Read a public key from big-endian affine coordinates.
    pub fn from_coordinates(x: &[u8; 32], y: &[u8; 32]) -> Result<Self, Error> {
        Ok(Self {
            point_y: Point::from_be_bytes(x, y)?,
        })
    }

    pub fn to_coordinates(&self) -> ([u8; 32], [u8; 32]) {
        self.point_y.to_be_bytes()
    }

    /// Read a SEC1 encoded public key, compressed or not.
    pub fn from_sec1(bytes: &[u8]) -> Result<Self, Error> {
        Ok(Self {
            point_y: Point::from_sec1(bytes)?,
        })
    }

    pub fn to_compressed(&self) -> Option<[u8; 33]> {
        self.point_y.to_compressed()
    }

    pub fn to_uncompressed(&self) -> Option<[u8; 65]> {
        self.point_y.to_uncompressed()
    }

    /// A usable public key is a curve point other than the identity.
    pub fn is_valid(&self) -> bool {
        !self.point_y.is_identity() && self.point_y.is_on_curve()
    }
}
