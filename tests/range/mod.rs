use las_bounds::*;
use rand::Rng;

#[test]
fn overlaps_is_symmetric() {
    let mut rng = rand::rng();
    for _ in 0..1000 {
        let a = Range::new(rng.random_range(-100..0), rng.random_range(0..100));
        let b = Range::new(rng.random_range(-100..0), rng.random_range(0..100));
        assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }
}

#[rstest::rstest]
#[case(Range::new(0., 1.), Range::new(1., 2.))]
#[case(Range::new(-1., 0.), Range::new(0., 0.))]
#[case(Range::new(3., 3.), Range::new(3., 3.))]
fn touching_endpoints_overlap(#[case] a: Range<f64>, #[case] b: Range<f64>) {
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
}

#[test]
fn shift_then_unshift_restores() {
    let mut rng = rand::rng();
    for _ in 0..1000 {
        let min = rng.random_range(-1e6..1e6);
        let original = Range::new(min, min + rng.random_range(0.0..1e3));
        let delta = rng.random_range(-1e3..1e3);

        let mut r = original;
        r.shift(delta);
        r.shift(-delta);
        approx::assert_abs_diff_eq!(original, r, epsilon = 1e-6);
    }
}

#[test]
fn grow_covers_every_value() {
    let mut rng = rand::rng();
    let values: Vec<f32> = (0..100).map(|_| rng.random_range(-50.0..50.0)).collect();
    let mut r = Range::default();
    values.iter().for_each(|&v| r.grow(v));
    assert!(values.iter().all(|&v| r.contains_value(v)));
    assert!(matches!(r.state(), RangeState::Populated { min, max } if min <= max));
}

#[test]
fn clip_disjoint_stays_inverted() {
    let mut r = Range::new(0, 10);
    r.clip(&Range::new(20, 30));
    assert_eq!((20, 10), (r.min, r.max));
    assert!(!r.empty());
    assert_eq!(-10, r.length());
}

#[test]
fn from_inclusive_range() {
    assert_eq!(Range::new(-1., 1.), Range::from(-1.0..=1.0));
}
