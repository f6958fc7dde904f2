use circle_arena::*;

fn main() {
    let mut engine = PhysicsEngine::new(WorldConfig::default()).expect("default config is valid");
    engine.set_parallel_enabled(true);

    let mut controls = SpawnControls::default();
    let clicks = [
        Vec2::new(200.0, 120.0),
        Vec2::new(210.0, 160.0),
        Vec2::new(400.0, 100.0),
        Vec2::new(600.0, 300.0),
    ];

    for (i, click) in clicks.iter().enumerate() {
        // Red for the first two drops, blue for the rest.
        if i == 2 {
            controls.press(Vec2::new(160.0, 55.0));
        }
        if let ClickOutcome::Spawn(request) = controls.press(*click) {
            request
                .apply(engine.world_mut())
                .expect("slider radius is always positive");
        }
    }

    for _ in 0..(5 * 60) {
        engine.step(1.0 / 60.0).expect("fixed dt is valid");
    }

    for view in engine.world().snapshot() {
        println!(
            "body {} at ({:.1}, {:.1}) r={} color={:?}",
            view.handle, view.position.x, view.position.y, view.radius, view.color
        );
    }
    println!(
        "average step: {:?} over {} frames",
        engine.profiler().average_frame_time(),
        engine.profiler().frames
    );
    engine.profiler().report();
}
