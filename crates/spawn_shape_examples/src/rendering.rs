//! Minimal PNG rendering for sampled spawn points.
use std::path::Path;

use glam::Vec2;
use image::{Rgb, RgbImage};
use spawn_shape::prelude::SpawnPoint;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber honoring `RUST_LOG` (defaults to `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// How each point is drawn.
#[derive(Debug, Clone, Copy)]
pub struct PointStyle {
    pub color: [u8; 3],
    /// Dot radius in pixels.
    pub radius: i32,
    /// Length in pixels of a heading tick drawn along the rotation. 0 disables it.
    pub heading_px: f32,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            color: [235, 235, 235],
            radius: 2,
            heading_px: 0.0,
        }
    }
}

/// Output image and the world-space window it shows.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub image_size: (u32, u32),
    /// World extent shown, centered on the origin.
    pub view_extent: Vec2,
    pub background: [u8; 3],
    pub style: PointStyle,
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32), view_extent: Vec2) -> Self {
        Self {
            image_size,
            view_extent,
            background: [26, 26, 26],
            style: PointStyle::default(),
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_style(mut self, style: PointStyle) -> Self {
        self.style = style;
        self
    }

    fn to_pixel(&self, p: Vec2) -> (f32, f32) {
        let (w, h) = self.image_size;
        let u = (p.x / self.view_extent.x + 0.5) * w as f32;
        // Image rows grow downward.
        let v = (0.5 - p.y / self.view_extent.y) * h as f32;
        (u, v)
    }
}

/// Draw `points` as dots (and optional heading ticks) and save a PNG.
pub fn render_points_to_png(
    points: &[SpawnPoint],
    config: &RenderConfig,
    out_path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (w, h) = config.image_size;
    let mut img = RgbImage::from_pixel(w, h, Rgb(config.background));
    let style = config.style;

    for point in points {
        let (px, py) = config.to_pixel(point.position);
        fill_disk(&mut img, px as i32, py as i32, style.radius, style.color);

        if style.heading_px > 0.0 {
            let (sin, cos) = point.rotation.sin_cos();
            let steps = style.heading_px.ceil() as i32;
            for s in 0..=steps {
                let t = s as f32;
                put(&mut img, (px + cos * t) as i32, (py - sin * t) as i32, style.color);
            }
        }
    }

    let out_path = out_path.as_ref();
    img.save(out_path)?;
    info!(points = points.len(), path = %out_path.display(), "wrote image");
    Ok(())
}

fn fill_disk(img: &mut RgbImage, cx: i32, cy: i32, radius: i32, color: [u8; 3]) {
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r2 {
                put(img, cx + dx, cy + dy, color);
            }
        }
    }
}

fn put(img: &mut RgbImage, x: i32, y: i32, color: [u8; 3]) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, Rgb(color));
    }
}
