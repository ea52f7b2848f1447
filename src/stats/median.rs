//! Geometric median of a set of angles.
//!
//! Every candidate is scored against every element, so the cost is quadratic
//! in the number of angles. Intended for small inputs.

use super::{mean_angle_with, AsAngle, StatsConfig};
use crate::angle::Angle;
use crate::trace::{trace_event, trace_span};
use crate::util::{AngleError, AngleResult};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Total distance from `candidate` to every angle in `angles`.
///
/// The distance to each element is the degree value of the upper half-circle
/// representative of their difference, in `[0, 180]`.
fn candidate_cost(candidate: &Angle, angles: &[Angle]) -> f64 {
    angles
        .iter()
        .map(|element| (element - candidate).abs().degrees())
        .sum()
}

/// Returns the total distance cost of each angle as a median candidate.
///
/// `costs[i]` belongs to `angles[i]`.
pub fn candidate_costs(angles: &[Angle]) -> Vec<f64> {
    angles
        .iter()
        .map(|candidate| candidate_cost(candidate, angles))
        .collect()
}

#[cfg(feature = "rayon")]
fn candidate_costs_par(angles: &[Angle]) -> Vec<f64> {
    angles
        .par_iter()
        .map(|candidate| candidate_cost(candidate, angles))
        .collect()
}

#[cfg(feature = "rayon")]
fn costs_for(angles: &[Angle], cfg: &StatsConfig) -> Vec<f64> {
    if cfg.parallel {
        candidate_costs_par(angles)
    } else {
        candidate_costs(angles)
    }
}

#[cfg(not(feature = "rayon"))]
fn costs_for(angles: &[Angle], _cfg: &StatsConfig) -> Vec<f64> {
    candidate_costs(angles)
}

/// Returns the angle in `items` with the least total distance to all others.
///
/// If several candidates tie for the minimum, the result is the circular
/// mean of exactly the tied candidates, so it can fail with
/// [`AngleError::AmbiguousMean`] when they are evenly spread.
pub fn geometric_median<I>(items: I) -> AngleResult<Angle>
where
    I: IntoIterator,
    I::Item: AsAngle,
{
    geometric_median_with(items, &StatsConfig::default())
}

/// Same as [`geometric_median`] with an explicit configuration.
pub fn geometric_median_with<I>(items: I, cfg: &StatsConfig) -> AngleResult<Angle>
where
    I: IntoIterator,
    I::Item: AsAngle,
{
    let angles: Vec<Angle> = items
        .into_iter()
        .filter_map(|item| item.as_angle())
        .collect();
    if angles.is_empty() {
        return Err(AngleError::NoValidElements);
    }
    let _span = trace_span!("geometric_median", count = angles.len()).entered();

    let costs = costs_for(&angles, cfg);
    let min_cost = costs.iter().copied().fold(f64::INFINITY, f64::min);
    let tied: Vec<Angle> = angles
        .iter()
        .zip(costs.iter())
        .filter(|(_, cost)| (**cost - min_cost).abs() <= cfg.tie_tolerance)
        .map(|(angle, _)| *angle)
        .collect();
    trace_event!("median_ties", min_cost = min_cost, tied = tied.len());

    mean_angle_with(&tied, cfg)
}
