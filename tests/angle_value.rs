use circangle::{Angle, AngleError, AngleSeed, Complex64, SeedSet};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::{FRAC_PI_2, PI};

fn circular_gap_deg(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs();
    diff.min(360.0 - diff)
}

#[test]
fn degree_normalization_is_idempotent_over_full_turns() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let degrees: f64 = rng.random_range(-1.0e4..1.0e4);
        let turns: i32 = rng.random_range(-5..=5);
        let base = Angle::from_degrees(degrees);
        let shifted = Angle::from_degrees(degrees + 360.0 * turns as f64);

        assert!(base.degrees() >= 0.0 && base.degrees() < 360.0);
        assert!(base.radians() >= 0.0 && base.radians() < 2.0 * PI);
        assert!(circular_gap_deg(base.degrees(), shifted.degrees()) < 1e-9);
        let again = Angle::from_degrees(base.degrees());
        assert!(circular_gap_deg(again.degrees(), base.degrees()) < 1e-12);
    }
}

#[test]
fn radian_view_round_trips_to_degrees() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..500 {
        let angle = Angle::from_degrees(rng.random_range(-720.0..720.0));
        let from_radians = angle.radians().to_degrees();
        let from_vector = angle.unit_vector().arg().to_degrees();
        assert!(circular_gap_deg(from_radians, angle.degrees()) < 1e-9);
        assert!((angle.unit_vector().norm() - 1.0).abs() < 1e-12);
        assert!(circular_gap_deg(from_vector, angle.degrees()) < 1e-9);
    }
}

#[test]
fn seeds_from_every_source_agree() {
    let from_deg = Angle::from_degrees(135.0);
    let from_rad = Angle::from_radians(0.75 * PI);
    let from_vec = Angle::from_unit_vector(Complex64::new(-2.0, 2.0)).unwrap();

    assert!(from_deg == from_rad);
    assert!(from_deg == from_vec);
    assert!((from_vec.cos() - from_deg.cos()).abs() < 1e-12);
    assert!((from_vec.sin() - from_deg.sin()).abs() < 1e-12);
    assert!((from_deg.fraction() - 0.375).abs() < 1e-12);
    assert!((from_deg.tan() + 1.0).abs() < 1e-9);
}

#[test]
fn explicit_zero_seed_is_not_treated_as_missing() {
    let zero_radians = SeedSet {
        radians: Some(0.0),
        degrees: Some(90.0),
        ..SeedSet::default()
    };
    let angle = Angle::from_seed_set(&zero_radians).unwrap();
    assert_eq!(angle.degrees(), 0.0);

    let zero_degrees = SeedSet {
        degrees: Some(0.0),
        ..SeedSet::default()
    };
    assert_eq!(Angle::from_seed_set(&zero_degrees).unwrap().degrees(), 0.0);

    let vector_wins = SeedSet {
        unit_vector: Some(Complex64::new(0.0, 1.0)),
        radians: Some(0.0),
        degrees: Some(0.0),
    };
    let angle = Angle::from_seed_set(&vector_wins).unwrap();
    assert!((angle.degrees() - 90.0).abs() < 1e-12);

    assert_eq!(Angle::default().degrees(), 0.0);
}

#[test]
fn zero_vector_seed_is_rejected() {
    let err = Angle::from_seed(AngleSeed::UnitVector(Complex64::new(0.0, 0.0)))
        .err()
        .unwrap();
    assert_eq!(err, AngleError::UndefinedAngle);

    let err = Angle::try_from(AngleSeed::UnitVector(Complex64::new(f64::INFINITY, 0.0)))
        .err()
        .unwrap();
    assert_eq!(err, AngleError::UndefinedAngle);
}

#[test]
fn signed_views_cover_half_open_ranges() {
    let half = Angle::from_degrees(180.0);
    assert_eq!(half.signed_degrees(), 180.0);
    assert!((half.signed_radians() - PI).abs() < 1e-12);

    let quarter_back = Angle::from_degrees(270.0);
    assert!((quarter_back.signed_degrees() + 90.0).abs() < 1e-12);
    assert!((quarter_back.signed_radians() + FRAC_PI_2).abs() < 1e-12);
    assert!((quarter_back.sinh() - (-FRAC_PI_2).sinh()).abs() < 1e-12);
}

#[test]
fn scalar_addition_is_in_degrees() {
    let sum = Angle::from_degrees(-20.0) + 70.0;
    assert!((sum.degrees() - 50.0).abs() < 1e-12);
    assert!(sum == 50.0);

    let wrapped = Angle::from_degrees(300.0) + Angle::from_degrees(90.0);
    assert!((wrapped.degrees() - 30.0).abs() < 1e-9);
}

#[test]
fn subtraction_takes_right_operand_as_augend() {
    let a = Angle::from_degrees(30.0);
    let b = Angle::from_degrees(100.0);
    assert!(((a - b).degrees() - 70.0).abs() < 1e-9);
    assert!(((a - 10.0).degrees() - 340.0).abs() < 1e-9);
}

#[test]
fn equality_folds_only_the_zero_seam() {
    let zero = Angle::from_degrees(0.0);
    assert!(zero == Angle::from_degrees(359.9999999999));
    assert!(zero == 359.9999999999);
    assert!(zero != Angle::from_degrees(350.0));
    assert!(zero != 350.0);

    let tiny_positive = Angle::from_degrees(1e-9);
    let tiny_negative = Angle::from_degrees(-1e-9);
    assert!(tiny_positive == tiny_negative);
}

#[test]
fn ordering_has_a_seam_at_half_turn() {
    let just_below = Angle::from_degrees(179.9);
    let just_above = Angle::from_degrees(-179.9);
    assert!(just_below > just_above);
    assert!(just_above < just_below);

    let a = Angle::from_degrees(10.0);
    assert!(!(a > Angle::from_degrees(10.0)));
    assert!(a >= Angle::from_degrees(10.0));
    assert!(a <= Angle::from_degrees(370.0));
    assert!(a < Angle::from_degrees(20.0));
}

#[test]
fn scalar_ordering_folds_into_signed_range() {
    let a = Angle::from_degrees(10.0);
    assert!(a > 200.0);
    assert!(a < 30.0);
    assert!(a >= 10.0);
    assert!(!(a < 10.0));
    assert!(Angle::from_degrees(f64::NAN).partial_cmp(&a).is_none());
}

#[test]
fn unwrapped_scalar_on_same_direction_is_unordered() {
    let zero = Angle::ZERO;
    assert!(zero != 720.0);
    assert!(zero.partial_cmp(&720.0).is_none());
    assert!(!(zero >= 720.0));
    assert!(!(zero <= 720.0));
    assert!(!(zero > 720.0));
    assert!(!(zero < 720.0));

    let a = Angle::from_degrees(10.0);
    assert!(a != 730.0);
    assert!(a.partial_cmp(&730.0).is_none());
    assert!(!(a >= 730.0) && !(a <= 730.0));
}

#[test]
fn absolute_value_picks_upper_half_representative() {
    let lower = Angle::from_degrees(250.0);
    assert!((lower.abs().degrees() - 110.0).abs() < 1e-9);
    assert!(lower.abs().sin() >= 0.0);

    let upper = Angle::from_degrees(45.0);
    assert!(upper.abs() == upper);
    assert!((-upper) == 315.0);
}

#[test]
fn reseeding_replaces_every_view() {
    let mut angle = Angle::from_degrees(10.0);
    angle.set_degrees(-90.0);
    assert!((angle.degrees() - 270.0).abs() < 1e-12);
    assert!((angle.sin() + 1.0).abs() < 1e-12);

    angle.set_unit_vector(Complex64::new(-1.0, 0.0)).unwrap();
    assert!((angle.degrees() - 180.0).abs() < 1e-12);
    assert!((angle.radians() - PI).abs() < 1e-12);
}
