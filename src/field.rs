//! Modular arithmetic over the two secp256k1 moduli.
//!
//! The base field `p` carries point coordinates and the scalar field `n`
//! carries private keys, nonces, challenges and responses. Both are exact
//! 256-bit Montgomery representations from `halo2curves`; there is no
//! floating point and no truncation anywhere.
//!
//! Integers crossing the crate boundary are 32-byte big-endian, while the
//! `halo2curves` representations are little-endian. The helpers below are
//! the only place that conversion happens.

use halo2curves::ff::{Field, FromUniformBytes, PrimeField};
use halo2curves::secp256k1::{Fp, Fq};

use crate::Error;

/// Element of the base field, `0 <= x < p`.
pub type FieldElement = Fp;

/// Element of the scalar field, `0 <= k < n`.
pub type Scalar = Fq;

/// p = 2^256 - 2^32 - 977, big-endian.
pub const FIELD_MODULUS: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe, 0xff, 0xff, 0xfc, 0x2f,
];

/// Group order n, big-endian.
pub const GROUP_ORDER: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe,
    0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36, 0x41, 0x41,
];

/// Curve coefficient b in y^2 = x^3 + b.
pub const CURVE_B: FieldElement = Fp::from_raw([7, 0, 0, 0]);

/// 3b, used by the complete projective formulas.
pub(crate) const CURVE_B3: FieldElement = Fp::from_raw([21, 0, 0, 0]);

pub(crate) const GENERATOR_X: FieldElement = Fp::from_raw([
    0x59f2815b16f81798,
    0x029bfcdb2dce28d9,
    0x55a06295ce870b07,
    0x79be667ef9dcbbac,
]);

pub(crate) const GENERATOR_Y: FieldElement = Fp::from_raw([
    0x9c47d08ffb10d4b8,
    0xfd17b448a6855419,
    0x5da4fbfc0e1108a8,
    0x483ada7726a3c465,
]);

pub fn mod_add<F: Field>(a: &F, b: &F) -> F {
    *a + b
}

pub fn mod_sub<F: Field>(a: &F, b: &F) -> F {
    *a - b
}

pub fn mod_mul<F: Field>(a: &F, b: &F) -> F {
    *a * b
}

/// Multiplicative inverse. Both moduli are prime, so only zero fails.
pub fn mod_inverse<F: Field>(a: &F) -> Result<F, Error> {
    Option::from(a.invert()).ok_or(Error::NotInvertible)
}

/// Decode a canonical big-endian integer. Values `>= modulus` are rejected.
pub fn from_be_bytes<F: PrimeField<Repr = [u8; 32]>>(bytes: &[u8; 32]) -> Option<F> {
    let mut repr = *bytes;
    repr.reverse();
    F::from_repr(repr).into()
}

/// Encode as a 32-byte big-endian integer.
pub fn to_be_bytes<F: PrimeField<Repr = [u8; 32]>>(element: &F) -> [u8; 32] {
    let mut bytes = element.to_repr();
    bytes.reverse();
    bytes
}

/// Interpret any 256-bit big-endian integer as a scalar, reducing mod n.
pub fn scalar_from_be_bytes_reduced(bytes: &[u8; 32]) -> Scalar {
    // the upper half stays zero, so this is an exact reduction of a
    // 256-bit value rather than a wide hash-to-field
    let mut wide = [0u8; 64];
    wide[..32].copy_from_slice(bytes);
    wide[..32].reverse();
    Scalar::from_uniform_bytes(&wide)
}

/// Encode an unsigned integer the way the calling environment encodes a
/// `uint256`: 32 bytes, big-endian.
///
/// Only covers values below 2^128. Wider `uint256` values are already in
/// their final form as a 32-byte big-endian array and are passed as is.
pub fn encode_uint(value: u128) -> [u8; 32] {
    let mut out = [0u8; 32];
    out[16..].copy_from_slice(&value.to_be_bytes());
    out
}
