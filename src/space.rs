//! Evenly spaced angular sweeps between two angles.
//!
//! A sweep always advances in the increasing-degree direction, from `start`
//! around to `end`. It never takes the shorter way backwards.

use crate::angle::Angle;
use crate::trace::{trace_event, trace_span};
use crate::util::math::wrap_deg;
use crate::util::{AngleError, AngleResult};

/// Default number of samples in a sweep.
pub const DEFAULT_STEPS: usize = 100;

/// Number of samples in a sweep, including both endpoints. Always at least 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Steps(usize);

impl Steps {
    /// Validates a sample count.
    pub fn new(steps: usize) -> AngleResult<Self> {
        if steps < 2 {
            return Err(AngleError::InvalidParameter {
                reason: "steps must be >= 2",
            });
        }
        Ok(Self(steps))
    }

    /// Returns the sample count.
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for Steps {
    fn default() -> Self {
        Self(DEFAULT_STEPS)
    }
}

impl TryFrom<usize> for Steps {
    type Error = AngleError;

    fn try_from(value: usize) -> AngleResult<Self> {
        Self::new(value)
    }
}

macro_rules! steps_from_int {
    ($($ty:ty),+) => {
        $(
            impl TryFrom<$ty> for Steps {
                type Error = AngleError;

                fn try_from(value: $ty) -> AngleResult<Self> {
                    let steps = usize::try_from(value).map_err(|_| AngleError::InvalidParameter {
                        reason: "steps must be a non-negative integer",
                    })?;
                    Self::new(steps)
                }
            }
        )+
    };
}

steps_from_int!(u32, u64, i32, i64);

/// Floats are never a valid sample count, even when they hold a whole number.
impl TryFrom<f64> for Steps {
    type Error = AngleError;

    fn try_from(_value: f64) -> AngleResult<Self> {
        Err(AngleError::InvalidParameter {
            reason: "steps must be an integer",
        })
    }
}

/// Precomputed sweep from `start` to `end` with a fixed number of samples.
///
/// The sweep is a pure function of its inputs; [`AngularSpace::iter`] can be
/// called any number of times and yields the same sequence.
#[derive(Clone, Copy, Debug)]
pub struct AngularSpace {
    start_deg: f64,
    sweep_deg: f64,
    increment_deg: f64,
    len: usize,
}

impl AngularSpace {
    /// Builds the sweep from `start` to `end`.
    pub fn new(start: &Angle, end: &Angle, steps: Steps) -> Self {
        let sweep_deg = wrap_deg(end.degrees() - start.degrees());
        let increment_deg = sweep_deg / (steps.get() - 1) as f64;
        Self {
            start_deg: start.degrees(),
            sweep_deg,
            increment_deg,
            len: steps.get(),
        }
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; a sweep has at least two samples.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the starting angle in degrees.
    pub fn start_deg(&self) -> f64 {
        self.start_deg
    }

    /// Returns the total swept arc in degrees, in `[0, 360)`.
    pub fn sweep_deg(&self) -> f64 {
        self.sweep_deg
    }

    /// Returns the spacing between consecutive samples in degrees.
    pub fn increment_deg(&self) -> f64 {
        self.increment_deg
    }

    /// Returns the sample at `idx` in degrees, wrapped to `[0, 360)`.
    pub fn angle_at(&self, idx: usize) -> f64 {
        debug_assert!(idx < self.len);
        wrap_deg(self.start_deg + (idx as f64) * self.increment_deg)
    }

    /// Iterates over all samples in degrees.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        (0..self.len).map(|idx| self.angle_at(idx))
    }
}

/// Returns `steps` evenly spaced degree values sweeping from `start` to `end`.
///
/// `steps` must be an integer of at least 2. Any `f64`, or a smaller or
/// negative integer, fails with [`AngleError::InvalidParameter`].
pub fn angular_space<S>(start: &Angle, end: &Angle, steps: S) -> AngleResult<Vec<f64>>
where
    S: TryInto<Steps>,
    S::Error: Into<AngleError>,
{
    let steps = steps.try_into().map_err(Into::into)?;
    let space = AngularSpace::new(start, end, steps);
    let _span = trace_span!("angular_space", steps = space.len()).entered();
    trace_event!(
        "angular_sweep",
        sweep_deg = space.sweep_deg(),
        increment_deg = space.increment_deg()
    );
    Ok(space.iter().collect())
}
