//! Homogeneous projective points with complete addition.
//!
//! The formulas are Algorithm 7 of Renes, Costello and Batina,
//! "Complete addition formulas for prime order elliptic curves"
//! (<https://eprint.iacr.org/2015/1060>), specialised to a = 0. They have no
//! exceptional cases, so the same instruction sequence handles the identity,
//! doubling and inverse inputs. That is what lets the ladder below run in a
//! fixed pattern for secret scalars.

use halo2curves::ff::{Field, PrimeField};
use subtle::{Choice, ConditionallySelectable};

use crate::field::{mod_inverse, FieldElement, Scalar, CURVE_B3};
use crate::point::Point;

const SCALAR_BITS: usize = 256;

#[derive(Clone, Copy, Debug)]
pub(crate) struct ProjectivePoint {
    x: FieldElement,
    y: FieldElement,
    z: FieldElement,
}

impl ProjectivePoint {
    pub(crate) const IDENTITY: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ZERO,
    };

    pub(crate) fn from_affine(point: &Point) -> Self {
        match point {
            Point::Identity => Self::IDENTITY,
            Point::Affine { x, y } => Self {
                x: *x,
                y: *y,
                z: FieldElement::ONE,
            },
        }
    }

    pub(crate) fn to_affine(&self) -> Point {
        match mod_inverse(&self.z) {
            Ok(z_inv) => Point::Affine {
                x: self.x * z_inv,
                y: self.y * z_inv,
            },
            Err(_) => Point::Identity,
        }
    }

    pub(crate) fn add(&self, other: &Self) -> Self {
        let xx = self.x * other.x;
        let yy = self.y * other.y;
        let zz = self.z * other.z;

        let xy_pairs = (self.x + self.y) * (other.x + other.y) - (xx + yy);
        let yz_pairs = (self.y + self.z) * (other.y + other.z) - (yy + zz);
        let xz_pairs = (self.x + self.z) * (other.x + other.z) - (xx + zz);

        let bzz3 = zz * CURVE_B3;
        let yy_m_bzz3 = yy - bzz3;
        let yy_p_bzz3 = yy + bzz3;

        let byz3 = yz_pairs * CURVE_B3;
        let xx3 = xx.double() + xx;
        let bxx9 = xx3 * CURVE_B3;

        Self {
            x: xy_pairs * yy_m_bzz3 - byz3 * xz_pairs,
            y: yy_p_bzz3 * yy_m_bzz3 + bxx9 * xz_pairs,
            z: yz_pairs * yy_p_bzz3 + xx3 * xy_pairs,
        }
    }

    pub(crate) fn double(&self) -> Self {
        self.add(self)
    }

    /// k * self, scanning all 256 bits of k from the most significant end
    /// with a Montgomery ladder. Every iteration performs one addition, one
    /// doubling and two conditional swaps regardless of the bit value.
    pub(crate) fn mul_ladder(&self, k: &Scalar) -> Self {
        let repr = k.to_repr();
        let bytes = repr.as_ref();

        let mut r0 = Self::IDENTITY;
        let mut r1 = *self;
        for i in (0..SCALAR_BITS).rev() {
            let bit = Choice::from((bytes[i / 8] >> (i % 8)) & 1);
            Self::conditional_swap(&mut r0, &mut r1, bit);
            r1 = r0.add(&r1);
            r0 = r0.double();
            Self::conditional_swap(&mut r0, &mut r1, bit);
        }
        r0
    }

    /// k * self by plain double-and-add, most significant bit first. Skips
    /// the addition for zero bits, so only use it with public scalars.
    pub(crate) fn mul_vartime(&self, k: &Scalar) -> Self {
        let repr = k.to_repr();
        let bytes = repr.as_ref();

        let mut acc = Self::IDENTITY;
        for i in (0..SCALAR_BITS).rev() {
            acc = acc.double();
            if (bytes[i / 8] >> (i % 8)) & 1 == 1 {
                acc = acc.add(self);
            }
        }
        acc
    }
}

impl ConditionallySelectable for ProjectivePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
        }
    }
}
