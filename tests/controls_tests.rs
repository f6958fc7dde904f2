use circle_arena::config::{DEFAULT_SPAWN_RADIUS, MAX_SPAWN_RADIUS};
use circle_arena::*;

fn new_world() -> World {
    World::new(WorldConfig::default()).unwrap()
}

#[test]
fn click_below_band_spawns_with_current_settings() {
    let mut controls = SpawnControls::default();
    let mut world = new_world();

    let ClickOutcome::Spawn(request) = controls.press(Vec2::new(300.0, 200.0)) else {
        panic!("click in the arena should spawn");
    };
    assert_eq!(request.radius, DEFAULT_SPAWN_RADIUS);
    assert_eq!(request.color, Color::RED);

    let handle = request.apply(&mut world).unwrap();
    let body = world.body(handle).unwrap();
    assert_eq!(body.position, Vec2::new(300.0, 200.0));
    assert_eq!(body.radius(), DEFAULT_SPAWN_RADIUS);
}

#[test]
fn color_button_changes_next_spawn() {
    let mut controls = SpawnControls::default();
    assert_eq!(
        controls.press(Vec2::new(160.0, 55.0)),
        ClickOutcome::ColorSelected(Color::BLUE)
    );

    match controls.press(Vec2::new(400.0, 400.0)) {
        ClickOutcome::Spawn(request) => assert_eq!(request.color, Color::BLUE),
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[test]
fn dragging_slider_changes_next_radius() {
    let mut controls = SpawnControls::default();
    let handle = controls.slider.handle_center();

    assert_eq!(controls.press(handle), ClickOutcome::SliderGrabbed);
    assert_eq!(controls.slider.drag_state(), DragState::Dragging);
    controls.pointer_moved(Vec2::new(500.0, 30.0));
    controls.release();
    assert_eq!(controls.slider.drag_state(), DragState::Idle);

    let request = controls.preview(Vec2::new(400.0, 300.0)).unwrap();
    assert_eq!(request.radius, MAX_SPAWN_RADIUS);
}

#[test]
fn clicks_in_band_outside_widgets_are_ignored() {
    let mut controls = SpawnControls::default();
    assert_eq!(controls.press(Vec2::new(600.0, 40.0)), ClickOutcome::Ignored);
    assert!(controls.preview(Vec2::new(600.0, 40.0)).is_none());
    assert!(controls.preview(Vec2::new(600.0, 80.0)).is_none());
    assert!(controls.preview(Vec2::new(600.0, 81.0)).is_some());
}
