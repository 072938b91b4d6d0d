use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use spawn_shape::prelude::*;
use spawn_shape_examples::{init_tracing, render_points_to_png, PointStyle, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Eccentric ellipse: uniform parameter sampling bunches points near the
    // ends of the major axis.
    let oval = Oval::new(&OvalConfig::new(40.0, 12.0).with_affect_rotation(true));
    let mut rng = StdRng::seed_from_u64(2025);

    let count = 600usize;
    let points: Vec<SpawnPoint> = (0..count).map(|_| oval.sample_point(&mut rng)).collect();

    let rc = RenderConfig::new((1000, 1000), Vec2::new(100.0, 100.0)).with_style(PointStyle {
        color: [240, 200, 120],
        radius: 2,
        heading_px: 12.0,
    });
    render_points_to_png(&points, &rc, "shapes-oval-boundary-basic.png")?;

    Ok(())
}
