//! Print the formula of a built-in scene.
//!
//! Run with: cargo run --example presets --features tracing -- boat 5
//! (set RUST_LOG=figura=debug to see placement and evaluation logs)

use figura::{Preset, Scene};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let preset = match std::env::args().nth(1).map(|name| name.parse::<Preset>()) {
        None => Preset::House,
        Some(Ok(preset)) => preset,
        Some(Err(e)) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let n = std::env::args()
        .nth(2)
        .and_then(|arg| arg.parse::<u32>().ok());

    let mut scene = Scene::new();
    scene.load_preset(preset);
    if let Some(n) = n {
        scene.set_n(n);
    }

    println!("{} at n = {}", preset, scene.n());
    for shape in scene.shapes() {
        let origin = scene.world_position(shape);
        println!(
            "  {} {:<18} at ({}, {}) rot {} -> {} dots",
            shape.id(),
            shape.kind().display_name(),
            origin.x,
            origin.y,
            shape.rotation,
            shape.value(scene.n())
        );
    }
    println!("{}", scene.formula_text());
    println!("{}", scene.formula_latex());
    println!("{}", scene.calculation());
}
