use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use spawn_shape::prelude::*;
use spawn_shape_examples::{init_tracing, render_points_to_png, PointStyle, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let view = Vec2::new(100.0, 100.0);
    let count = 2000usize;
    let mut rng = StdRng::seed_from_u64(42);

    // Filled disc
    let disc = Torus::new(&TorusConfig::circle(40.0));
    render_shape(
        &disc,
        count,
        &mut rng,
        view,
        "shapes-torus-ring-vs-disk-disc.png",
        [200, 235, 240],
    )?;

    // Ring with the same outer radius
    let ring = Torus::new(&TorusConfig::ring(40.0, 25.0));
    render_shape(
        &ring,
        count,
        &mut rng,
        view,
        "shapes-torus-ring-vs-disk-ring.png",
        [240, 235, 200],
    )?;

    Ok(())
}

fn render_shape(
    shape: &dyn SpawnShape,
    count: usize,
    rng: &mut StdRng,
    view: Vec2,
    out_path: &str,
    color: [u8; 3],
) -> anyhow::Result<()> {
    let points: Vec<SpawnPoint> = (0..count).map(|_| shape.sample_point(&mut *rng)).collect();
    let rc = RenderConfig::new((1000, 1000), view).with_style(PointStyle {
        color,
        ..Default::default()
    });
    render_points_to_png(&points, &rc, out_path)
}
