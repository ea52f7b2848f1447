//! circangle is a planar angle value type with circular statistics.
//!
//! [`Angle`] keeps degree, radian and unit-vector views of one direction in
//! sync and gives them circular comparison and arithmetic semantics. On top of
//! it the crate provides the circular mean, a geometric median and evenly
//! spaced angular sweeps. Median cost evaluation can run in parallel via the
//! `rayon` feature; the `tracing` feature emits spans for the statistics.

pub mod angle;
pub mod space;
pub mod stats;
mod trace;
pub mod util;

pub use angle::{Angle, AngleSeed, SeedSet};
pub use num_complex::Complex64;
pub use space::{angular_space, AngularSpace, Steps, DEFAULT_STEPS};
pub use stats::{
    candidate_costs, geometric_median, geometric_median_with, mean_angle, mean_angle_with,
    AsAngle, StatsConfig,
};
pub use util::{AngleError, AngleResult};
