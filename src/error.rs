use thiserror::Error;

/// Errors returned by key derivation and proof generation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("element is not invertible")]
    NotInvertible,
    #[error("point is not on the curve")]
    PointNotOnCurve,
    #[error("invalid private key")]
    InvalidPrivateKey,
    #[error("derived key is the identity")]
    DegenerateDerivation,
    #[error("auxiliary entropy is zero or unusable")]
    WeakEntropy,
}
