//! Headless chase-light run.
//!
//! Lays out a grid of lights, spawns a path, and steps the engine for a
//! few simulated seconds, printing a brightness strip every half second.
//!
//! ```text
//! cargo run --example chase
//! RUST_LOG=chaselight=trace cargo run --example chase
//! ```

use std::time::Duration;

use chaselight::math::Point3;
use chaselight::tessellation::DrawCommand;
use chaselight::{Fixture, LiveParams, Light, SpawnConfig, SpawnEngine};

const FRAME: Duration = Duration::from_millis(16);

fn main() -> chaselight::Result<()> {
    // Default: WARN for everything, INFO for chaselight.
    // Override with RUST_LOG env var.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("chase=info".parse().unwrap_or_default())
        .add_directive("chaselight=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let params = LiveParams::default().clamped();
    let mut engine = SpawnEngine::seeded(SpawnConfig::default(), 2024);
    engine.respawn(&params)?;

    let mut lights: Vec<Light> = (-3..=3)
        .flat_map(|x| {
            (-3..=3).map(move |z| Light::new(Point3::new(f64::from(x), 0.0, f64::from(z))))
        })
        .collect();

    for frame in 0..300 {
        engine.advance_and_activate_elapsed(&mut lights, params.speed, params.radius, FRAME);
        for light in &mut lights {
            light.update(params.fade_in, params.fade_out);
        }

        if frame % 30 == 0 {
            let strip: String = lights.iter().map(|l| shade(l.value())).collect();
            if let Some((_, cursor)) = engine.paths().next() {
                let head = cursor.current_position();
                println!(
                    "t={:>5.2}s pos={:.3} head=({:>5.2}, {:>5.2}, {:>5.2}) {strip}",
                    FRAME.as_secs_f64() * f64::from(frame),
                    cursor.position(),
                    head.x,
                    head.y,
                    head.z,
                );
            }
        }
    }

    let mut preview = Vec::new();
    engine.render_preview(&mut preview);
    for command in &preview {
        match command {
            DrawCommand::Polyline(poly) => println!("preview: polyline, {} points", poly.points.len()),
            DrawCommand::Marker { center, radius, .. } => {
                println!("preview: marker at {center} r={radius}");
            }
        }
    }

    let brightest = lights
        .iter()
        .max_by(|a, b| a.value().total_cmp(&b.value()))
        .map(Fixture::position);
    println!("brightest light: {brightest:?}");
    Ok(())
}

fn shade(value: f64) -> char {
    match value {
        v if v > 0.75 => '#',
        v if v > 0.5 => '+',
        v if v > 0.25 => '-',
        v if v > 0.05 => '.',
        _ => ' ',
    }
}
