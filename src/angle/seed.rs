//! Seed sources an [`Angle`](super::Angle) can be built from.

use num_complex::Complex64;

/// A single source value for constructing an angle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AngleSeed {
    /// Any non-zero planar vector; only its direction is kept.
    UnitVector(Complex64),
    /// Radians, any real value.
    Radians(f64),
    /// Degrees, any real value.
    Degrees(f64),
}

impl Default for AngleSeed {
    fn default() -> Self {
        AngleSeed::Degrees(0.0)
    }
}

/// Optional seed values, at most one of which is used.
///
/// Presence is explicit: `Some(0.0)` is a supplied zero, not a missing value.
/// When several are present, the unit vector wins over radians, and radians
/// win over degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SeedSet {
    pub unit_vector: Option<Complex64>,
    pub radians: Option<f64>,
    pub degrees: Option<f64>,
}

impl SeedSet {
    /// Picks the seed with the highest precedence, if any is present.
    pub fn resolve(&self) -> Option<AngleSeed> {
        if let Some(z) = self.unit_vector {
            return Some(AngleSeed::UnitVector(z));
        }
        if let Some(r) = self.radians {
            return Some(AngleSeed::Radians(r));
        }
        self.degrees.map(AngleSeed::Degrees)
    }
}

impl From<AngleSeed> for SeedSet {
    fn from(seed: AngleSeed) -> Self {
        match seed {
            AngleSeed::UnitVector(z) => Self {
                unit_vector: Some(z),
                ..Self::default()
            },
            AngleSeed::Radians(r) => Self {
                radians: Some(r),
                ..Self::default()
            },
            AngleSeed::Degrees(d) => Self {
                degrees: Some(d),
                ..Self::default()
            },
        }
    }
}
