use canvas_physics::*;

fn main() {
    env_logger::init();

    let mut scene = Scene::new(Bounds::new(320.0, 240.0));

    let ball = scene.add(
        Instance::builder()
            .shape(ShapeKind::Circle)
            .position(Vec2::new(40.0, 120.0))
            .size(Vec2::splat(8.0))
            .velocity(Vec2::new(3.0, 1.5))
            .options(InstanceOptions::all())
            .build(),
    );
    scene.add(
        Instance::builder()
            .shape(ShapeKind::Circle)
            .position(Vec2::new(160.0, 120.0))
            .size(Vec2::splat(8.0))
            .options(InstanceOptions::all())
            .build(),
    );
    scene.add(
        Instance::builder()
            .shape(ShapeKind::sprite("crate.png"))
            .position(Vec2::new(250.0, 20.0))
            .size(Vec2::splat(24.0))
            .velocity(Vec2::new(0.0, 2.0))
            .use_bounds(true)
            .build(),
    );

    let mut frame = CommandBuffer::new();
    for tick in 0..240 {
        let stats = scene.step();
        if stats.colliding_pairs > 0 || stats.bounds_hits > 0 {
            println!(
                "tick {tick}: {} colliding pairs, {} bounds hits",
                stats.colliding_pairs, stats.bounds_hits
            );
        }
        frame.clear();
        scene.render(&mut frame);
    }

    if let Some(ball) = scene.get(ball) {
        println!(
            "Ball after 240 ticks: position {:?}, velocity {:?}",
            ball.position, ball.velocity
        );
    }
    println!("Last frame issued {} draw calls", frame.len());
}
