use super::*;

fn metrics(width: f32, height: f32, padding: EdgeInsets) -> TrackMetrics {
    TrackMetrics::new(Size::new(width, height), padding)
}

#[test]
fn slide_total_subtracts_padding_margins_and_block() {
    let geometry = TrackGeometry::new(
        metrics(200.0, 52.0, EdgeInsets::symmetric(4.0, 0.0)),
        50.0,
        EdgeInsets::uniform(1.0),
    );
    assert_eq!(geometry.slide_total(), 140.0);
    assert_eq!(geometry.min_left(), 5.0);
    assert_eq!(geometry.max_left(), 145.0);
    assert_eq!(geometry.block_size(), Size::new(50.0, 50.0));
}

#[test]
fn resting_positions_follow_state() {
    let geometry = TrackGeometry::new(
        metrics(152.0, 52.0, EdgeInsets::default()),
        50.0,
        EdgeInsets::uniform(1.0),
    );
    assert_eq!(geometry.slide_total(), 100.0);
    assert_eq!(
        geometry.resting_position(ToggleState::Closed),
        Point::new(1.0, 1.0)
    );
    assert_eq!(
        geometry.resting_position(ToggleState::Open),
        Point::new(101.0, 1.0)
    );
    assert_eq!(geometry.displacement(16.0), 15.0);
}

#[test]
fn undersized_track_collapses_to_zero_range() {
    let geometry = TrackGeometry::new(
        metrics(40.0, 20.0, EdgeInsets::default()),
        50.0,
        EdgeInsets::uniform(1.0),
    );
    assert_eq!(geometry.slide_total(), 0.0);
    assert_eq!(geometry.max_left(), geometry.min_left());
    let clamp = geometry.drag_clamp();
    assert_eq!(clamp.clamp_horizontal(30.0), 1.0);
}

#[test]
fn drag_clamp_uses_track_bounds() {
    let geometry = TrackGeometry::new(
        metrics(152.0, 52.0, EdgeInsets::from_components(0.0, 2.0, 0.0, 0.0)),
        50.0,
        EdgeInsets::uniform(1.0),
    );
    let clamp = geometry.drag_clamp();
    assert_eq!(clamp.min_left(), 1.0);
    assert_eq!(clamp.max_left(), 101.0);
    assert_eq!(clamp.top_bound(), 2.0);
    assert_eq!(clamp.bottom_bound(), 52.0 - geometry.block_size().height);
}

#[test]
fn settle_bounds_report_horizontal_range_only() {
    let geometry = TrackGeometry::new(
        metrics(152.0, 52.0, EdgeInsets::default()),
        50.0,
        EdgeInsets::uniform(1.0),
    );
    let bounds = geometry.settle_bounds();
    assert_eq!(bounds.horizontal_range, 100.0);
    assert_eq!(bounds.vertical_range, 0.0);
    assert_eq!(bounds.container_width, 152.0);
}
