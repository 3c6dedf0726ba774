use multi_axis_rs::ChartError;
use multi_axis_rs::api::{ChartOptions, ChartSurface, MultiAxisEngine, MultiAxisEngineConfig};
use multi_axis_rs::core::{AxisOptions, AxisOrientation, Dimension, SceneRect, ViewportId};
use multi_axis_rs::host::NullSurfaceHost;

fn engine() -> MultiAxisEngine<NullSurfaceHost> {
    let config = MultiAxisEngineConfig::new(SceneRect::from_size(800.0, 600.0));
    MultiAxisEngine::new(NullSurfaceHost::default(), config).expect("engine init")
}

#[test]
fn chart_without_axis_names_uses_master_surface_and_default_axes() {
    let mut engine = engine();
    let viewport = engine
        .register_chart("main", None, None, ChartOptions::default())
        .expect("register chart");

    assert_eq!(viewport, ViewportId::MASTER);
    assert_eq!(
        engine.chart("main").map(|chart| chart.surface()),
        Some(ChartSurface::Master)
    );
    let bottom = engine.axis("bottom").expect("bottom axis");
    let left = engine.axis("left").expect("left axis");
    assert_eq!(bottom.orientation(), AxisOrientation::Bottom);
    assert_eq!(left.orientation(), AxisOrientation::Left);
    assert_eq!(bottom.linked_viewport(), Some(ViewportId::MASTER));
    assert_eq!(left.linked_viewport(), Some(ViewportId::MASTER));
    assert_eq!(engine.viewport_count(), 1);
}

#[test]
fn named_axis_gives_chart_a_dedicated_surface() {
    let mut engine = engine();
    engine
        .register_axis("sx1", AxisOrientation::Top, AxisOptions::default())
        .expect("register axis");
    let viewport = engine
        .register_chart("c1", Some("sx1"), None, ChartOptions::default())
        .expect("register chart");

    assert!(!viewport.is_master());
    assert_eq!(engine.viewport_count(), 2);
    assert_eq!(engine.chart_surface(Some("c1")).expect("surface"), viewport);
    assert_eq!(engine.chart_surface(None).expect("master"), ViewportId::MASTER);

    let chart = engine.chart("c1").expect("chart");
    assert_eq!(chart.x_axis(), "sx1");
    assert_eq!(chart.y_axis(), "left");
    assert_eq!(
        engine.axis("left").map(|axis| axis.orientation()),
        Some(AxisOrientation::Left)
    );
}

#[test]
fn every_chart_is_a_member_of_exactly_its_two_axes() {
    let mut engine = engine();
    engine
        .register_chart("a", Some("x"), Some("y1"), ChartOptions::default())
        .expect("a");
    engine
        .register_chart("b", Some("x"), Some("y2"), ChartOptions::default())
        .expect("b");
    engine
        .register_chart("c", None, None, ChartOptions::default())
        .expect("c");

    for chart in engine.registry().charts() {
        for axis in engine.registry().axes() {
            let is_member = engine
                .members_of(axis.name())
                .iter()
                .any(|member| member == chart.name());
            let is_bound = axis.name() == chart.x_axis() || axis.name() == chart.y_axis();
            assert_eq!(is_member, is_bound, "chart {} axis {}", chart.name(), axis.name());
        }
    }
    assert_eq!(engine.members_of("x"), ["a".to_owned(), "b".to_owned()]);
    assert!(engine.members_of("missing").is_empty());
}

#[test]
fn duplicate_axis_is_rejected_without_side_effects() {
    let mut engine = engine();
    engine
        .register_axis("depth", AxisOrientation::Right, AxisOptions::default())
        .expect("first registration");
    engine
        .register_chart("c", Some("x"), Some("depth"), ChartOptions::default())
        .expect("chart");
    let before = engine.snapshot().expect("snapshot before");

    let err = engine
        .register_axis("depth", AxisOrientation::Left, AxisOptions::default())
        .expect_err("duplicate must fail");
    assert!(matches!(err, ChartError::DuplicateAxis { ref name } if name == "depth"));
    assert_eq!(engine.snapshot().expect("snapshot after"), before);
}

#[test]
fn registering_left_twice_keeps_the_first_axis() {
    let mut engine = engine();
    engine
        .register_axis("left", AxisOrientation::Left, AxisOptions::default().with_units("m"))
        .expect("first registration");
    let before = engine.snapshot().expect("snapshot before");

    let err = engine
        .register_axis("left", AxisOrientation::Right, AxisOptions::default())
        .expect_err("duplicate must fail");
    assert!(matches!(err, ChartError::DuplicateAxis { ref name } if name == "left"));
    assert_eq!(engine.snapshot().expect("snapshot after"), before);
    assert_eq!(engine.axis("left").and_then(|axis| axis.units()), Some("m"));
}

#[test]
fn explicit_left_collides_with_the_implicit_default_axis() {
    let mut engine = engine();
    engine
        .register_chart("main", None, None, ChartOptions::default())
        .expect("chart creates bottom/left");
    let before = engine.snapshot().expect("snapshot before");

    let err = engine
        .register_axis("left", AxisOrientation::Left, AxisOptions::default())
        .expect_err("left already exists");
    assert!(matches!(err, ChartError::DuplicateAxis { ref name } if name == "left"));
    assert_eq!(engine.snapshot().expect("snapshot after"), before);
    assert_eq!(engine.members_of("left"), ["main".to_owned()]);
}

#[test]
fn duplicate_chart_is_rejected_without_side_effects() {
    let mut engine = engine();
    engine
        .register_chart("c", Some("x"), None, ChartOptions::default())
        .expect("chart");
    let viewports = engine.viewport_count();
    let subscriptions = engine.subscription_count();

    let err = engine
        .register_chart("c", Some("other"), None, ChartOptions::default())
        .expect_err("duplicate chart");
    assert!(matches!(err, ChartError::DuplicateChart { .. }));
    assert!(!engine.registry().contains_axis("other"));
    assert_eq!(engine.viewport_count(), viewports);
    assert_eq!(engine.subscription_count(), subscriptions);
}

#[test]
fn orientation_mismatch_aborts_the_whole_registration() {
    let mut engine = engine();
    engine
        .register_axis("pressure", AxisOrientation::Right, AxisOptions::default())
        .expect("axis");

    let err = engine
        .register_chart("c", Some("pressure"), None, ChartOptions::default())
        .expect_err("vertical axis cannot serve X");
    assert!(matches!(
        err,
        ChartError::AxisOrientationMismatch {
            role: Dimension::X,
            orientation: AxisOrientation::Right,
            ..
        }
    ));

    assert!(engine.chart("c").is_none());
    assert!(!engine.registry().contains_axis("left"));
    assert!(engine.members_of("pressure").is_empty());
    assert_eq!(engine.viewport_count(), 1);
    assert_eq!(engine.subscription_count(), 0);
    assert_eq!(
        engine.axis("pressure").and_then(|axis| axis.linked_viewport()),
        None
    );
}

#[test]
fn unknown_names_are_reported() {
    let mut engine = engine();
    assert!(matches!(
        engine.enable_axis_auto_range("ghost"),
        Err(ChartError::UnknownAxis { .. })
    ));
    assert!(matches!(
        engine.chart_surface(Some("ghost")),
        Err(ChartError::UnknownChart { .. })
    ));
    assert!(matches!(
        engine.set_chart_data("ghost", Vec::new()),
        Err(ChartError::UnknownChart { .. })
    ));
    assert!(matches!(
        engine.link_axis_to_view("ghost", ViewportId::MASTER),
        Err(ChartError::UnknownAxis { .. })
    ));
}

#[test]
fn linking_to_a_missing_viewport_fails() {
    let mut engine = engine();
    engine
        .register_axis("x", AxisOrientation::Bottom, AxisOptions::default())
        .expect("axis");
    let err = engine
        .link_axis_to_view("x", ViewportId::new(42))
        .expect_err("no such viewport");
    assert!(matches!(err, ChartError::UnknownViewport { .. }));
    assert_eq!(engine.axis("x").and_then(|axis| axis.linked_viewport()), None);
}

#[test]
fn first_binding_stays_canonical() {
    let mut engine = engine();
    let first = engine
        .register_chart("a", Some("x"), Some("ya"), ChartOptions::default())
        .expect("a");
    let second = engine
        .register_chart("b", Some("x"), Some("yb"), ChartOptions::default())
        .expect("b");

    assert_ne!(first, second);
    assert_eq!(
        engine.axis("x").and_then(|axis| axis.linked_viewport()),
        Some(first)
    );
}

#[test]
fn reset_drops_everything_but_the_master_surface() {
    let mut engine = engine();
    let dedicated = engine
        .register_chart("a", Some("x"), None, ChartOptions::default())
        .expect("a");
    engine.make_layout(None, None).expect("layout");

    engine.reset();
    assert_eq!(engine.registry().axis_count(), 0);
    assert_eq!(engine.registry().chart_count(), 0);
    assert_eq!(engine.subscription_count(), 0);
    assert_eq!(engine.viewport_count(), 1);
    assert!(engine.viewport(dedicated).is_none());
    assert!(engine.layout().is_empty());

    let fresh = engine
        .register_chart("a", Some("x"), None, ChartOptions::default())
        .expect("re-register after reset");
    assert_ne!(fresh, dedicated);
}
