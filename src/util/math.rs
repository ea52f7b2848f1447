//! Wraparound and tolerance helpers shared by the angle type and statistics.

use std::f64::consts::{PI, TAU};

/// Relative tolerance of angle equality.
pub(crate) const EQ_RTOL: f64 = 1e-12;
/// Absolute tolerance of angle equality, in degrees.
pub(crate) const EQ_ATOL: f64 = 1e-8;
/// Degree differences above this are treated as straddling the 0/360 seam.
pub(crate) const SEAM_FOLD_DEG: f64 = 359.0;

/// Wraps an angle in degrees to the range [0, 360).
pub(crate) fn wrap_deg(angle_deg: f64) -> f64 {
    let wrapped = angle_deg.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0; also clears -0.0
    if wrapped >= 360.0 || wrapped == 0.0 {
        0.0
    } else {
        wrapped
    }
}

/// Wraps an angle in radians to the range [0, 2π).
pub(crate) fn wrap_rad(angle_rad: f64) -> f64 {
    let wrapped = angle_rad.rem_euclid(TAU);
    if wrapped >= TAU || wrapped == 0.0 {
        0.0
    } else {
        wrapped
    }
}

/// Maps an angle in degrees to the signed range (-180, 180].
pub(crate) fn signed_deg(angle_deg: f64) -> f64 {
    let wrapped = wrap_deg(angle_deg);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Maps an angle in radians to the signed range (-π, π].
pub(crate) fn signed_rad(angle_rad: f64) -> f64 {
    let wrapped = wrap_rad(angle_rad);
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}

/// Returns true if `a` is within `atol + rtol * |b|` of `b`.
pub(crate) fn is_close(a: f64, b: f64, rtol: f64, atol: f64) -> bool {
    (a - b).abs() <= atol + rtol * b.abs()
}

/// Degree difference between two raw degree values with only the 0/360 seam folded.
pub(crate) fn seam_folded_diff(a_deg: f64, b_deg: f64) -> f64 {
    let diff = (b_deg - a_deg).abs();
    if diff > SEAM_FOLD_DEG {
        diff - 360.0
    } else {
        diff
    }
}
