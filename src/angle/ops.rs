//! Arithmetic, comparison and absolute value for [`Angle`].
//!
//! Bare `f64` operands are always interpreted as degrees.
//!
//! Subtraction keeps the right operand as the augend: `a - b` is the angle
//! of `b.degrees() - a.degrees()`.
//!
//! Ordering follows the signed degree view in `(-180, 180]`. This is a linear
//! cut of the circle, so 179.9° compares greater than -179.9° even though the
//! two directions are only 0.2° apart.

use super::Angle;
use crate::util::math::{is_close, seam_folded_diff, signed_deg, EQ_ATOL, EQ_RTOL};
use std::cmp::Ordering;
use std::ops::{Add, Neg, Sub};

impl Angle {
    /// Returns the representative of `{self, -self}` in the upper half circle,
    /// `[0°, 180°]`.
    pub fn abs(self) -> Angle {
        if self.sin() < 0.0 {
            -self
        } else {
            self
        }
    }

    fn eq_degrees(&self, other_deg: f64) -> bool {
        is_close(
            seam_folded_diff(self.degrees, other_deg),
            0.0,
            EQ_RTOL,
            EQ_ATOL,
        )
    }

    fn cmp_signed(&self, other_deg: f64) -> Option<Ordering> {
        if self.eq_degrees(other_deg) {
            return Some(Ordering::Equal);
        }
        // Unequal operands that fold onto the same signed value are unordered.
        match self.signed_degrees().partial_cmp(&signed_deg(other_deg)) {
            Some(Ordering::Equal) => None,
            ordering => ordering,
        }
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle::from_degrees(rhs.degrees + self.degrees)
    }
}

impl Add<f64> for Angle {
    type Output = Angle;

    fn add(self, rhs: f64) -> Angle {
        Angle::from_degrees(rhs + self.degrees)
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle::from_degrees(rhs.degrees - self.degrees)
    }
}

impl Sub<f64> for Angle {
    type Output = Angle;

    fn sub(self, rhs: f64) -> Angle {
        Angle::from_degrees(rhs - self.degrees)
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle::from_normalized(self.unit.conj())
    }
}

macro_rules! forward_ref_binop {
    ($imp:ident, $method:ident, $rhs:ty) => {
        impl<'a> $imp<$rhs> for &'a Angle {
            type Output = Angle;

            fn $method(self, rhs: $rhs) -> Angle {
                $imp::$method(*self, rhs)
            }
        }

        impl<'a> $imp<&'a $rhs> for Angle {
            type Output = Angle;

            fn $method(self, rhs: &'a $rhs) -> Angle {
                $imp::$method(self, *rhs)
            }
        }

        impl<'a, 'b> $imp<&'a $rhs> for &'b Angle {
            type Output = Angle;

            fn $method(self, rhs: &'a $rhs) -> Angle {
                $imp::$method(*self, *rhs)
            }
        }
    };
}

forward_ref_binop!(Add, add, Angle);
forward_ref_binop!(Add, add, f64);
forward_ref_binop!(Sub, sub, Angle);
forward_ref_binop!(Sub, sub, f64);

impl Neg for &Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        -*self
    }
}

/// Tolerance equality that folds only the 0/360 seam.
///
/// This relation is not transitive, so `Angle` deliberately has no `Eq` or
/// `Hash` implementation.
impl PartialEq for Angle {
    fn eq(&self, other: &Angle) -> bool {
        self.eq_degrees(other.degrees)
    }
}

/// Compares against a raw degree value without wrapping it first.
impl PartialEq<f64> for Angle {
    fn eq(&self, other: &f64) -> bool {
        self.eq_degrees(*other)
    }
}

impl PartialOrd for Angle {
    fn partial_cmp(&self, other: &Angle) -> Option<Ordering> {
        self.cmp_signed(other.degrees)
    }
}

/// Scalar operands are folded into `(-180, 180]` before comparing.
impl PartialOrd<f64> for Angle {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.cmp_signed(*other)
    }
}
