mod range;

use las_bounds::*;

pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[test]
fn default_range_is_empty_until_grown() {
    let mut r = Range::<f64>::default();
    assert!(r.empty());
    r.grow(42.);
    assert!(!r.empty());
}

#[test]
fn intersects_if_any_axis_overlaps() {
    let a = Bounds::new_2d(0., 0., 10., 10.);
    let b = Bounds::new_2d(5., 100., 15., 110.);
    assert!(a.intersects(&b));
    assert!(!a.intersects_all_axes(&b));
}

#[test]
fn contains_is_true_for_disjoint_bounds() {
    let a = Bounds::new_3d(0., 0., 0., 1., 1., 1.);
    let b = Bounds::new_3d(100., 100., 100., 200., 200., 200.);
    assert!(a.contains(&b));
    assert!(!a.contains_all_axes(&b));
}

#[test]
fn shift_with_a_delta_per_axis_fails() {
    let mut b = Bounds::new_3d(0., 0., 0., 1., 1., 1.);
    let err = b.shift(&[1., 2., 3.]).unwrap_err();
    assert_eq!(
        BoundsError::Dimensionality {
            operation: "shift",
            deltas: 3,
            dimension: 3
        },
        err
    );
    assert_eq!(
        "Bounds::shift: Delta vector size, 3, is larger than the dimensionality of the bounds, 3",
        err.to_string()
    );
}

#[test]
fn shift_with_fewer_deltas_than_axes() -> anyhow::Result<()> {
    let mut b = Bounds::new_3d(0., 0., 0., 1., 1., 1.);
    b.shift(&[1., 2.])?;
    assert_eq!(Bounds::new_3d(1., 2., 0., 2., 3., 1.), b);
    Ok(())
}

#[test]
fn volume_is_zero() {
    assert_eq!(0., Bounds::new_3d(0., 0., 0., 10., 10., 10.).volume());
    assert_eq!(0, Bounds::new_3d(0, 0, 0, 10, 10, 10).volume());
}

#[test]
fn verify_rejects_inverted_extent() {
    init_tracing();
    let err = Bounds::new_3d(0., 0., 0., -1., -1., -1.)
        .verify()
        .unwrap_err();
    assert_eq!(BoundsError::InvalidExtent { axis: 0 }, err);
    assert!(err.to_string().contains("dimension 0"));
}

#[test]
fn absent_axis_reads_zero_and_writes_grow() {
    init_tracing();
    let mut b = Bounds::new_3d(0., 0., 0., 1., 1., 1.);
    assert_eq!(0., b.min(5));
    assert_eq!(3, b.dimension());
    b.set_min(5, 3.0);
    assert_eq!(6, b.dimension());
    assert_eq!(3.0, b.min(5));
}

#[test]
fn project_through_identity_keeps_corners() {
    init_tracing();
    let b = Bounds::new_3d(-3.5, 1., 2., 3., 4.25, 5.);
    let srs = SpatialReference::Wkt("LOCAL_CS[\"local\"]".into());
    let Ok(projected) = b.project(&Identity, &srs, &srs);
    assert_eq!(b, projected);
    approx::assert_abs_diff_eq!(b.min_point(), projected.min_point());
    approx::assert_abs_diff_eq!(b.max_point(), projected.max_point());
}
