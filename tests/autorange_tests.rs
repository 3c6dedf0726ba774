use chrono::{TimeZone, Utc};
use multi_axis_rs::api::{ChartOptions, MultiAxisEngine, MultiAxisEngineConfig};
use multi_axis_rs::core::{
    AxisRange, DataPoint, Dimension, LineSeries, RangeOrigin, SceneRect, ViewportId,
};
use multi_axis_rs::host::NullSurfaceHost;
use rust_decimal::Decimal;

fn engine() -> MultiAxisEngine<NullSurfaceHost> {
    let config = MultiAxisEngineConfig::new(SceneRect::from_size(800.0, 600.0));
    MultiAxisEngine::new(NullSurfaceHost::default(), config).expect("engine init")
}

fn range(a: f64, b: f64) -> AxisRange {
    AxisRange::new(a, b).expect("valid range")
}

fn points(xs: &[f64], ys: &[f64]) -> Vec<DataPoint> {
    xs.iter()
        .zip(ys)
        .map(|(x, y)| DataPoint::new(*x, *y))
        .collect()
}

/// Three dedicated surfaces sharing `x`, each with its own Y axis.
fn three_charts(engine: &mut MultiAxisEngine<NullSurfaceHost>) -> [ViewportId; 3] {
    let mut surfaces = [ViewportId::MASTER; 3];
    for (index, surface) in surfaces.iter_mut().enumerate() {
        let name = format!("c{index}");
        let y_axis = format!("y{index}");
        *surface = engine
            .register_chart(&name, Some("x"), Some(&y_axis), ChartOptions::default())
            .expect("register chart");
    }
    surfaces
}

#[test]
fn shared_axis_fits_envelope_of_all_members() {
    let mut engine = engine();
    let surfaces = three_charts(&mut engine);
    engine
        .set_chart_data("c0", points(&[1.0, 5.0], &[10.0, 20.0]))
        .expect("c0 data");
    engine
        .set_chart_data("c1", points(&[-2.0, 3.0], &[0.5, 0.75]))
        .expect("c1 data");
    engine
        .set_chart_data("c2", points(&[4.0, 4.0], &[-7.0, -7.0]))
        .expect("c2 data");

    engine.recompute_auto_ranges().expect("recompute");

    for surface in surfaces {
        assert_eq!(engine.view_range(surface, Dimension::X).expect("x"), range(-2.0, 5.0));
    }
    assert_eq!(engine.view_range(surfaces[0], Dimension::Y).expect("y0"), range(10.0, 20.0));
    assert_eq!(engine.view_range(surfaces[1], Dimension::Y).expect("y1"), range(0.5, 0.75));
    assert_eq!(engine.view_range(surfaces[2], Dimension::Y).expect("y2"), range(-7.0, -7.0));
    assert!(engine.axis("x").expect("x").auto_range());
}

#[test]
fn charts_on_master_surface_share_one_envelope() {
    let mut engine = engine();
    engine
        .register_chart("m0", None, None, ChartOptions::default())
        .expect("m0");
    engine
        .register_chart("m1", None, None, ChartOptions::default())
        .expect("m1");
    engine
        .set_chart_data("m0", points(&[0.0, 1.0], &[3.0, 4.0]))
        .expect("m0 data");
    engine
        .set_chart_data("m1", points(&[2.0, 6.0], &[-1.0, 2.0]))
        .expect("m1 data");

    engine.recompute_auto_ranges().expect("recompute");

    let master = engine.viewport(ViewportId::MASTER).expect("master");
    assert_eq!(master.range(Dimension::X), range(0.0, 6.0));
    assert_eq!(master.range(Dimension::Y), range(-1.0, 4.0));
    assert_eq!(engine.host().range_updates, 2);
}

#[test]
fn axis_without_data_keeps_its_range() {
    let mut engine = engine();
    let surfaces = three_charts(&mut engine);
    engine
        .set_view_range(surfaces[0], Dimension::X, range(0.0, 10.0), RangeOrigin::Programmatic)
        .expect("seed range");

    engine.recompute_auto_ranges().expect("recompute");

    for surface in surfaces {
        assert_eq!(engine.view_range(surface, Dimension::X).expect("x"), range(0.0, 10.0));
    }
}

#[test]
fn empty_members_do_not_shrink_the_envelope() {
    let mut engine = engine();
    let surfaces = three_charts(&mut engine);
    engine
        .set_chart_data("c1", points(&[2.0, 3.0], &[1.0, 1.0]))
        .expect("c1 data");

    engine.recompute_auto_ranges().expect("recompute");

    for surface in surfaces {
        assert_eq!(engine.view_range(surface, Dimension::X).expect("x"), range(2.0, 3.0));
    }
    assert_eq!(
        engine.view_range(surfaces[0], Dimension::Y).expect("y0"),
        AxisRange::UNIT
    );
}

#[test]
fn manual_override_persists_until_auto_range_is_enabled() {
    let mut engine = engine();
    let surfaces = three_charts(&mut engine);
    engine
        .set_chart_data("c0", points(&[0.0, 50.0], &[1.0, 2.0]))
        .expect("c0 data");
    engine
        .set_view_range(surfaces[0], Dimension::X, range(100.0, 200.0), RangeOrigin::Manual)
        .expect("pan");

    engine.recompute_auto_ranges().expect("recompute while pinned");
    assert_eq!(engine.view_range(surfaces[1], Dimension::X).expect("x"), range(100.0, 200.0));
    assert_eq!(engine.view_range(surfaces[0], Dimension::Y).expect("y"), range(1.0, 2.0));

    engine.enable_axis_auto_range("x").expect("enable");
    engine.recompute_auto_ranges().expect("recompute after enable");
    for surface in surfaces {
        assert_eq!(engine.view_range(surface, Dimension::X).expect("x"), range(0.0, 50.0));
    }
}

#[test]
fn recompute_is_idempotent() {
    let mut engine = engine();
    three_charts(&mut engine);
    engine
        .set_chart_data("c2", points(&[1.0, 9.0], &[-1.0, 1.0]))
        .expect("data");

    engine.recompute_auto_ranges().expect("first pass");
    let first = engine.snapshot().expect("snapshot");
    let updates = engine.host().range_updates;
    engine.recompute_auto_ranges().expect("second pass");

    assert_eq!(engine.snapshot().expect("snapshot"), first);
    assert_eq!(engine.host().range_updates, updates);
}

#[test]
fn clean_drops_data_but_keeps_bindings_and_ranges() {
    let mut engine = engine();
    let surfaces = three_charts(&mut engine);
    engine
        .set_chart_data("c0", points(&[3.0, 4.0], &[3.0, 4.0]))
        .expect("data");
    engine.recompute_auto_ranges().expect("fit");

    engine.clean();
    engine.recompute_auto_ranges().expect("no-op");

    assert!(engine.series("c0").expect("c0 series").is_empty());
    assert_eq!(engine.members_of("x").len(), 3);
    assert_eq!(engine.view_range(surfaces[2], Dimension::X).expect("x"), range(3.0, 4.0));
}

#[test]
fn custom_series_and_in_place_edits_feed_the_envelope() {
    let mut engine = engine();
    let surfaces = three_charts(&mut engine);
    engine
        .replace_series("c0", Box::new(LineSeries::from_values(&[5.0, 1.0, 3.0])))
        .expect("replace");
    engine.series_mut("c0").expect("series").clear();
    engine
        .replace_series("c1", Box::new(LineSeries::from_values(&[2.0, 8.0])))
        .expect("replace");

    engine.recompute_auto_ranges().expect("recompute");

    assert_eq!(engine.view_range(surfaces[1], Dimension::X).expect("x"), range(0.0, 1.0));
    assert_eq!(engine.view_range(surfaces[1], Dimension::Y).expect("y"), range(2.0, 8.0));
}

#[test]
fn decimal_time_samples_are_plotted_in_unix_seconds() {
    let mut engine = engine();
    let surfaces = three_charts(&mut engine);
    let start = Utc
        .with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
        .single()
        .expect("valid start");
    let end = Utc
        .with_ymd_and_hms(2024, 1, 2, 3, 5, 5)
        .single()
        .expect("valid end");
    let samples = vec![
        DataPoint::from_decimal_time(start, Decimal::new(12_345, 2)).expect("first sample"),
        DataPoint::from_decimal_time(end, Decimal::new(-5, 1)).expect("second sample"),
    ];
    engine.set_chart_data("c0", samples).expect("data");

    engine.recompute_auto_ranges().expect("recompute");

    let x = engine.view_range(surfaces[0], Dimension::X).expect("x");
    assert_eq!(x.lo(), start.timestamp() as f64);
    assert_eq!(x.span(), 60.0);
    let y = engine.view_range(surfaces[0], Dimension::Y).expect("y");
    approx::assert_relative_eq!(y.lo(), -0.5);
    approx::assert_relative_eq!(y.hi(), 123.45);
}
