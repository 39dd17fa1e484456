use halo2curves::ff::Field;
use tracing::debug;

use crate::field::{
    from_be_bytes, mod_inverse, to_be_bytes, FieldElement, Scalar, CURVE_B, GENERATOR_X,
    GENERATOR_Y,
};
use crate::projective::ProjectivePoint;
use crate::Error;

const SEC1_COMPRESSED_EVEN: u8 = 0x02;
const SEC1_COMPRESSED_ODD: u8 = 0x03;
const SEC1_UNCOMPRESSED: u8 = 0x04;

/// A point on secp256k1 in affine form, or the point at infinity.
///
/// `Point::Affine` can be built directly, so values coming from outside the
/// crate must go through [`Point::from_coordinates`] (or be checked with
/// [`Point::is_on_curve`]) before they are used in arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Point {
    Identity,
    Affine { x: FieldElement, y: FieldElement },
}

impl Default for Point {
    fn default() -> Self {
        Point::Identity
    }
}

impl Point {
    /// The base point G.
    pub const GENERATOR: Point = Point::Affine {
        x: GENERATOR_X,
        y: GENERATOR_Y,
    };

    pub fn generator() -> Self {
        Self::GENERATOR
    }

    /// Build an affine point, checking y^2 = x^3 + 7.
    pub fn from_coordinates(x: FieldElement, y: FieldElement) -> Result<Self, Error> {
        let point = Point::Affine { x, y };
        if point.is_on_curve() {
            Ok(point)
        } else {
            debug!("rejected off-curve point");
            Err(Error::PointNotOnCurve)
        }
    }

    /// Build an affine point from big-endian coordinates. Coordinates that
    /// are not reduced mod p are treated like any other malformed point.
    pub fn from_be_bytes(x: &[u8; 32], y: &[u8; 32]) -> Result<Self, Error> {
        match (from_be_bytes(x), from_be_bytes(y)) {
            (Some(x), Some(y)) => Self::from_coordinates(x, y),
            _ => {
                debug!("rejected non-canonical point coordinates");
                Err(Error::PointNotOnCurve)
            }
        }
    }

    /// Big-endian coordinates. The identity encodes as `(0, 0)`, which is
    /// never a curve point since b != 0.
    pub fn to_be_bytes(&self) -> ([u8; 32], [u8; 32]) {
        match self {
            Point::Identity => ([0u8; 32], [0u8; 32]),
            Point::Affine { x, y } => (to_be_bytes(x), to_be_bytes(y)),
        }
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Identity)
    }

    pub fn is_on_curve(&self) -> bool {
        match self {
            Point::Identity => true,
            Point::Affine { x, y } => y.square() == x.square() * x + CURVE_B,
        }
    }

    pub fn coordinates(&self) -> Option<(FieldElement, FieldElement)> {
        match self {
            Point::Identity => None,
            Point::Affine { x, y } => Some((*x, *y)),
        }
    }

    pub fn neg(&self) -> Self {
        match self {
            Point::Identity => Point::Identity,
            Point::Affine { x, y } => Point::Affine { x: *x, y: -*y },
        }
    }

    /// The group law in affine coordinates.
    ///
    /// The chord formula divides by `x2 - x1`, so the identity, doubling and
    /// `P + (-P)` are handled before it is reached. The only error is a
    /// failed inversion, which cannot happen for points on the curve.
    pub fn add(&self, other: &Self) -> Result<Self, Error> {
        let (x1, y1, x2, y2) = match (self, other) {
            (Point::Identity, q) => return Ok(*q),
            (p, Point::Identity) => return Ok(*p),
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => {
                (*x1, *y1, *x2, *y2)
            }
        };

        if x1 == x2 {
            if y1 == y2 && !bool::from(y1.is_zero()) {
                return self.double();
            }
            // y1 == -y2, or a point of order two
            return Ok(Point::Identity);
        }

        let lambda = (y2 - y1) * mod_inverse(&(x2 - x1))?;
        let x3 = lambda.square() - x1 - x2;
        let y3 = lambda * (x1 - x3) - y1;
        Ok(Point::Affine { x: x3, y: y3 })
    }

    /// 2P with the tangent slope 3x^2 / 2y.
    pub fn double(&self) -> Result<Self, Error> {
        let (x, y) = match self {
            Point::Identity => return Ok(Point::Identity),
            Point::Affine { x, y } => (*x, *y),
        };
        if bool::from(y.is_zero()) {
            return Ok(Point::Identity);
        }

        let xx = x.square();
        let lambda = (xx.double() + xx) * mod_inverse(&y.double())?;
        let x3 = lambda.square() - x.double();
        let y3 = lambda * (x - x3) - y;
        Ok(Point::Affine { x: x3, y: y3 })
    }

    /// k * self in constant time. Use this whenever `k` is secret.
    pub fn mul(&self, k: &Scalar) -> Self {
        ProjectivePoint::from_affine(self).mul_ladder(k).to_affine()
    }

    /// k * self in variable time. Only for public scalars and points.
    pub fn mul_vartime(&self, k: &Scalar) -> Self {
        ProjectivePoint::from_affine(self).mul_vartime(k).to_affine()
    }

    /// SEC1 uncompressed encoding `0x04 || x || y`. The identity has none.
    pub fn to_uncompressed(&self) -> Option<[u8; 65]> {
        let (x, y) = match self {
            Point::Identity => return None,
            Point::Affine { x, y } => (to_be_bytes(x), to_be_bytes(y)),
        };
        let mut out = [0u8; 65];
        out[0] = SEC1_UNCOMPRESSED;
        out[1..33].copy_from_slice(&x);
        out[33..].copy_from_slice(&y);
        Some(out)
    }

    /// SEC1 compressed encoding `0x02/0x03 || x`, the tag carrying y's parity.
    pub fn to_compressed(&self) -> Option<[u8; 33]> {
        let (x, y) = match self {
            Point::Identity => return None,
            Point::Affine { x, y } => (to_be_bytes(x), to_be_bytes(y)),
        };
        let mut out = [0u8; 33];
        out[0] = if y[31] & 1 == 1 {
            SEC1_COMPRESSED_ODD
        } else {
            SEC1_COMPRESSED_EVEN
        };
        out[1..].copy_from_slice(&x);
        Some(out)
    }

    /// Parse either SEC1 form, validating that the result is on the curve.
    pub fn from_sec1(bytes: &[u8]) -> Result<Self, Error> {
        match (bytes.first(), bytes.len()) {
            (Some(&SEC1_UNCOMPRESSED), 65) => {
                let x: [u8; 32] = bytes[1..33].try_into().map_err(|_| Error::PointNotOnCurve)?;
                let y: [u8; 32] = bytes[33..].try_into().map_err(|_| Error::PointNotOnCurve)?;
                Self::from_be_bytes(&x, &y)
            }
            (Some(&tag), 33) if tag == SEC1_COMPRESSED_EVEN || tag == SEC1_COMPRESSED_ODD => {
                let x_bytes: [u8; 32] = bytes[1..].try_into().map_err(|_| Error::PointNotOnCurve)?;
                let x: FieldElement = from_be_bytes(&x_bytes).ok_or(Error::PointNotOnCurve)?;
                let y: FieldElement = Option::from((x.square() * x + CURVE_B).sqrt())
                    .ok_or(Error::PointNotOnCurve)?;
                let odd = to_be_bytes(&y)[31] & 1 == 1;
                let y = if odd == (tag == SEC1_COMPRESSED_ODD) { y } else { -y };
                Self::from_coordinates(x, y)
            }
            _ => {
                debug!(len = bytes.len(), "rejected malformed sec1 encoding");
                Err(Error::PointNotOnCurve)
            }
        }
    }
}
