//! Planar angle value with degree, radian and unit-vector views.
//!
//! An [`Angle`] stores all three views and computes them together in a single
//! constructor, so they always denote the same direction:
//!
//! - degrees in `[0, 360)`,
//! - radians in `[0, 2π)`,
//! - a unit complex number whose argument equals the radian value.
//!
//! Values are `Copy` and never mutated piecewise. The `set_*` methods replace
//! the whole value at once through an exclusive borrow.

mod ops;
mod seed;

pub use seed::{AngleSeed, SeedSet};

use crate::util::math::{signed_deg, signed_rad, wrap_deg, wrap_rad};
use crate::util::{AngleError, AngleResult};
use num_complex::Complex64;
use std::f64::consts::TAU;

/// A planar angle with synchronized degree, radian and unit-vector views.
#[derive(Clone, Copy, Debug)]
pub struct Angle {
    degrees: f64,
    radians: f64,
    unit: Complex64,
}

impl Angle {
    /// The zero angle.
    pub const ZERO: Angle = Angle {
        degrees: 0.0,
        radians: 0.0,
        unit: Complex64::new(1.0, 0.0),
    };

    /// Creates an angle from degrees, wrapped to `[0, 360)`.
    pub fn from_degrees(degrees: f64) -> Self {
        let degrees = wrap_deg(degrees);
        let radians = wrap_rad(degrees.to_radians());
        Self {
            degrees,
            radians,
            unit: Complex64::from_polar(1.0, radians),
        }
    }

    /// Creates an angle from radians, wrapped to `[0, 2π)`.
    pub fn from_radians(radians: f64) -> Self {
        let radians = wrap_rad(radians);
        Self {
            degrees: wrap_deg(radians.to_degrees()),
            radians,
            unit: Complex64::from_polar(1.0, radians),
        }
    }

    /// Creates an angle from the direction of a planar vector.
    ///
    /// The vector is normalized to unit length. A zero-length or non-finite
    /// vector has no direction and yields [`AngleError::UndefinedAngle`].
    pub fn from_unit_vector(vector: Complex64) -> AngleResult<Self> {
        let magnitude = vector.norm();
        if !magnitude.is_finite() || magnitude <= 0.0 {
            return Err(AngleError::UndefinedAngle);
        }
        Ok(Self::from_normalized(vector / magnitude))
    }

    /// Builds an angle from a vector already known to have unit length.
    pub(crate) fn from_normalized(unit: Complex64) -> Self {
        let radians = wrap_rad(unit.arg());
        Self {
            degrees: wrap_deg(radians.to_degrees()),
            radians,
            unit,
        }
    }

    /// Creates an angle from a single seed.
    pub fn from_seed(seed: AngleSeed) -> AngleResult<Self> {
        match seed {
            AngleSeed::UnitVector(z) => Self::from_unit_vector(z),
            AngleSeed::Radians(r) => Ok(Self::from_radians(r)),
            AngleSeed::Degrees(d) => Ok(Self::from_degrees(d)),
        }
    }

    /// Creates an angle from the highest-precedence seed present, or zero.
    pub fn from_seed_set(seeds: &SeedSet) -> AngleResult<Self> {
        match seeds.resolve() {
            Some(seed) => Self::from_seed(seed),
            None => Ok(Self::ZERO),
        }
    }

    /// Replaces this angle with one built from `seed`.
    ///
    /// On error the current value is left untouched.
    pub fn reseed(&mut self, seed: AngleSeed) -> AngleResult<()> {
        *self = Self::from_seed(seed)?;
        Ok(())
    }

    /// Replaces this angle with `degrees`.
    pub fn set_degrees(&mut self, degrees: f64) {
        *self = Self::from_degrees(degrees);
    }

    /// Replaces this angle with `radians`.
    pub fn set_radians(&mut self, radians: f64) {
        *self = Self::from_radians(radians);
    }

    /// Replaces this angle with the direction of `vector`.
    pub fn set_unit_vector(&mut self, vector: Complex64) -> AngleResult<()> {
        self.reseed(AngleSeed::UnitVector(vector))
    }

    /// Degrees in `[0, 360)`.
    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    /// Radians in `[0, 2π)`.
    pub fn radians(&self) -> f64 {
        self.radians
    }

    /// Unit complex number pointing in this direction.
    pub fn unit_vector(&self) -> Complex64 {
        self.unit
    }

    /// Degrees in `(-180, 180]`.
    pub fn signed_degrees(&self) -> f64 {
        signed_deg(self.degrees)
    }

    /// Radians in `(-π, π]`.
    pub fn signed_radians(&self) -> f64 {
        signed_rad(self.radians)
    }

    /// Fraction of a full turn, in `[0, 1)`.
    pub fn fraction(&self) -> f64 {
        self.radians / TAU
    }

    /// Sine, the imaginary part of the unit vector.
    pub fn sin(&self) -> f64 {
        self.unit.im
    }

    /// Cosine, the real part of the unit vector.
    pub fn cos(&self) -> f64 {
        self.unit.re
    }

    /// Tangent of the radian value.
    pub fn tan(&self) -> f64 {
        self.radians.tan()
    }

    /// Hyperbolic sine of the signed radian value.
    ///
    /// The hyperbolic projections take `signed_radians` rather than
    /// `radians`, unlike the circular ones.
    pub fn sinh(&self) -> f64 {
        self.signed_radians().sinh()
    }

    /// Hyperbolic cosine of the signed radian value.
    pub fn cosh(&self) -> f64 {
        self.signed_radians().cosh()
    }

    /// Hyperbolic tangent of the signed radian value.
    pub fn tanh(&self) -> f64 {
        self.signed_radians().tanh()
    }
}

impl Default for Angle {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<AngleSeed> for Angle {
    type Error = AngleError;

    fn try_from(seed: AngleSeed) -> AngleResult<Self> {
        Self::from_seed(seed)
    }
}
