//! Headless sweep demo — runs the visibility sweep over a random scene.
//!
//! Usage:
//! ```text
//! cargo run --example sweep
//! RUST_LOG=sightline=debug cargo run --example sweep
//! ```
//!
//! Prints per-viewpoint hit and marker counts; rendering is left to
//! whatever presentation layer consumes the output.

use sightline::geometry::Field;
use sightline::math::Point2;
use sightline::scene::Scene;
use sightline::sweep::sweep;
use sightline::SightlineError;

const FIELD_WIDTH: u32 = 800;
const FIELD_HEIGHT: u32 = 600;
const NUM_SEGMENTS: usize = 3;
const NUM_CIRCLES: usize = 5;

fn main() -> Result<(), SightlineError> {
    // Default: WARN for everything, DEBUG for sightline.
    // Override with RUST_LOG env var (e.g. RUST_LOG=sightline=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("sightline=debug".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let field = Field::new(FIELD_WIDTH, FIELD_HEIGHT)?;
    let scene = Scene::random(&field, NUM_SEGMENTS, NUM_CIRCLES)?;

    println!(
        "field {FIELD_WIDTH}x{FIELD_HEIGHT}, {} segments, {} circles",
        scene.segments.len(),
        scene.circles.len()
    );

    // Sweep from the center and the four quadrant midpoints, the way a
    // mouse-driven viewer would sample as the cursor moves.
    let viewpoints = [
        Point2::new(400.0, 300.0),
        Point2::new(200.0, 150.0),
        Point2::new(600.0, 150.0),
        Point2::new(200.0, 450.0),
        Point2::new(600.0, 450.0),
    ];

    for viewpoint in viewpoints {
        let out = sweep(&viewpoint, &field, &scene);
        println!(
            "viewpoint ({:>3}, {:>3}): {:>4} hit segments, {:>2} silhouette markers",
            viewpoint.x,
            viewpoint.y,
            out.hit_segments.len(),
            out.markers.len()
        );
    }

    Ok(())
}
