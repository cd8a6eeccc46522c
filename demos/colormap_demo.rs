#![allow(clippy::cast_precision_loss)]
//! Colormap demonstration.
//!
//! Loads a PLY model (or generates a torus point cloud when no path is
//! given), colors its scalar field with every colormap and logs a summary of
//! the resulting colors. The blue-white-red map is shown at several white
//! points.
//!
//! Run with: cargo run --example `colormap_demo` -- [model.ply] [scalar property]

use std::f32::consts::PI;

use davim::{init_logging, ColorBuffer, ColorMapPolicy, Options, Result, Scene, Vec3, Vec4};

const MODEL: &str = "model";

/// Generate points on a torus surface.
fn generate_torus(major_radius: f32, minor_radius: f32, n_major: usize, n_minor: usize) -> Vec<Vec3> {
    let mut points = Vec::with_capacity(n_major * n_minor);
    for i in 0..n_major {
        let theta = 2.0 * PI * i as f32 / n_major as f32;
        for j in 0..n_minor {
            let phi = 2.0 * PI * j as f32 / n_minor as f32;
            let x = (major_radius + minor_radius * phi.cos()) * theta.cos();
            let y = (major_radius + minor_radius * phi.cos()) * theta.sin();
            let z = minor_radius * phi.sin();
            points.push(Vec3::new(x, y, z));
        }
    }
    points
}

fn summarize(label: &str, colors: &ColorBuffer) {
    let mean = colors.iter().fold(Vec4::ZERO, |acc, c| acc + c) / colors.len().max(1) as f32;
    log::info!(
        "{label:>20}: {} colors, first {:?}, mean rgb ({:.3}, {:.3}, {:.3})",
        colors.len(),
        colors.get(0).map(|c| c.truncate()),
        mean.x,
        mean.y,
        mean.z
    );
}

fn main() -> Result<()> {
    init_logging();

    let mut args = std::env::args().skip(1);
    let path = args.next();
    let property = args.next().unwrap_or_else(|| "scalar".to_string());

    let mut scene = Scene::with_options(Options::new().with_scalar_property(property.clone()));
    let quantity = if let Some(path) = path {
        scene.load_ply_model(MODEL, path)?;
        property
    } else {
        let points = generate_torus(1.0, 0.3, 80, 40);
        // Signed distance to the unit sphere
        let distance: Vec<f32> = points.iter().map(|p| p.length() - 1.0).collect();
        scene.register_point_cloud(MODEL, points)?;
        scene.add_vertex_scalar_quantity(MODEL, "distance", distance)?;
        "distance".to_string()
    };
    log::info!(
        "scene center {:?}, length scale {:.3}",
        scene.center(),
        scene.length_scale()
    );

    for policy in ColorMapPolicy::ALL {
        scene.set_color_map(policy);
        let colors = scene.vertex_colors(MODEL, &quantity)?;
        summarize(policy.name(), &colors);
    }

    scene.set_color_map(ColorMapPolicy::BlueWhiteRed);
    for percent in [0.0, 25.0, 50.0, 75.0, 100.0] {
        scene.set_white_point(percent)?;
        let colors = scene.vertex_colors(MODEL, &quantity)?;
        summarize(&format!("white point {percent}%"), &colors);
    }

    Ok(())
}
