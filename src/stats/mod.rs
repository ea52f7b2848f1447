//! Circular statistics over collections of angles.
//!
//! Inputs are any iterable whose items implement [`AsAngle`]. Items that do
//! not hold an angle (for example `None` in a `Vec<Option<Angle>>`) are
//! skipped without error; only the remaining angles count.

mod median;

pub use median::{candidate_costs, geometric_median, geometric_median_with};

use crate::angle::Angle;
use crate::trace::{trace_event, trace_span};
use crate::util::{AngleError, AngleResult};
use num_complex::Complex64;

/// Something that may hold an angle.
pub trait AsAngle {
    /// Returns the angle, or `None` if this item should be skipped.
    fn as_angle(&self) -> Option<Angle>;
}

impl AsAngle for Angle {
    fn as_angle(&self) -> Option<Angle> {
        Some(*self)
    }
}

impl<T: AsAngle + ?Sized> AsAngle for &T {
    fn as_angle(&self) -> Option<Angle> {
        (**self).as_angle()
    }
}

impl<T: AsAngle> AsAngle for Option<T> {
    fn as_angle(&self) -> Option<Angle> {
        self.as_ref().and_then(AsAngle::as_angle)
    }
}

/// Configuration for the statistics functions.
#[derive(Clone, Debug)]
pub struct StatsConfig {
    /// A mean vector no longer than this is treated as an exact cancellation.
    pub singular_eps: f64,
    /// Median candidates whose cost is within this many degrees of the
    /// minimum are tied.
    pub tie_tolerance: f64,
    /// Evaluate median costs in parallel (requires the `rayon` feature).
    pub parallel: bool,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            singular_eps: 1e-12,
            tie_tolerance: 1e-9,
            parallel: false,
        }
    }
}

/// Returns the circular mean of the angles in `items`.
///
/// The mean is the direction of the average unit vector. Fails with
/// [`AngleError::NoValidElements`] if `items` holds no angle and with
/// [`AngleError::AmbiguousMean`] if the unit vectors cancel out.
pub fn mean_angle<I>(items: I) -> AngleResult<Angle>
where
    I: IntoIterator,
    I::Item: AsAngle,
{
    mean_angle_with(items, &StatsConfig::default())
}

/// Same as [`mean_angle`] with an explicit configuration.
pub fn mean_angle_with<I>(items: I, cfg: &StatsConfig) -> AngleResult<Angle>
where
    I: IntoIterator,
    I::Item: AsAngle,
{
    let _span = trace_span!("mean_angle").entered();

    let mut count = 0usize;
    let mut skipped = 0usize;
    let mut sum = Complex64::new(0.0, 0.0);
    for item in items {
        match item.as_angle() {
            Some(angle) => {
                count += 1;
                sum += angle.unit_vector();
            }
            None => skipped += 1,
        }
    }
    trace_event!("mean_inputs", count = count, skipped = skipped);

    if count == 0 {
        return Err(AngleError::NoValidElements);
    }
    let mean = sum / count as f64;
    if mean.norm() <= cfg.singular_eps {
        return Err(AngleError::AmbiguousMean);
    }
    Angle::from_unit_vector(mean)
}
