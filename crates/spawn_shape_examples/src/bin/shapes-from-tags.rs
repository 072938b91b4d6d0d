use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use spawn_shape::prelude::*;
use spawn_shape_examples::{init_tracing, render_points_to_png, RenderConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut rng = StdRng::seed_from_u64(7);
    let count = 1500usize;

    // Build every registered shape from its tag, then give each a size.
    for tag in SHAPE_TYPES {
        let config = match ShapeConfig::default_for(tag)? {
            ShapeConfig::Oval(_) => OvalConfig::new(45.0, 20.0).into(),
            ShapeConfig::Rect(_) => RectConfig::new(80.0, 50.0).into(),
            ShapeConfig::Torus(_) => TorusConfig::ring(45.0, 10.0).into(),
            other => other,
        };
        config.validate()?;

        let shape = config.build();
        let points: Vec<SpawnPoint> = (0..count)
            .map(|_| shape.sample_point(&mut rng).translated(shape.center()))
            .collect();
        info!(shape = shape.shape_type(), count, "sampled");

        let rc = RenderConfig::new((800, 800), Vec2::new(100.0, 100.0));
        render_points_to_png(&points, &rc, format!("shapes-from-tags-{tag}.png"))?;
    }

    Ok(())
}
