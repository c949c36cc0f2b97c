//! Coons-Mesh-Editor (headless).
//!
//! Lädt die Optionen, baut das Start-Gitter, tesselliert es und gibt eine
//! JSON-Zusammenfassung des Frames auf stdout aus.
//!
//! Aufruf: `coons-mesh-editor [optionen.toml]`

use anyhow::Context;
use coons_mesh_editor::{
    render, AppController, AppState, BoundingBox, MeshOptions, RenderQuality, SurfaceEvaluator,
};
use serde::Serialize;
use std::path::PathBuf;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "Coons-Mesh-Editor v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    if let Err(e) = AppRunner::run() {
        log::error!("Abbruch: {:#}", e);
        std::process::exit(1);
    }
}

/// Kompakte Frame-Beschreibung für die Ausgabe.
#[derive(Debug, Serialize)]
struct FrameSummary {
    rows: usize,
    cols: usize,
    patches: usize,
    knots: usize,
    evaluator: SurfaceEvaluator,
    render_quality: RenderQuality,
    quads: usize,
    handles: usize,
    bounds: Option<BoundingBox>,
    /// Mittlere Farbe je Patch (RGBA), Arena-Reihenfolge
    patch_colors: Vec<[f32; 4]>,
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        let config_path = std::env::args()
            .nth(1)
            .map(PathBuf::from)
            .unwrap_or_else(MeshOptions::config_path);
        let options = MeshOptions::load_from_file(&config_path);

        let mut state = AppState::with_options(options);
        state.config_path = Some(config_path);
        state
            .manager
            .mesh()
            .validate()
            .context("Start-Gitter verletzt Knoten-Invarianten")?;

        let controller = AppController::new();
        let scene = controller.build_render_scene(&state);
        let mut renderer = render::Renderer::new();
        let frame = renderer.render_scene(&scene);

        let mesh = state.manager.mesh();
        let samples = scene.render_quality.resolution().max(1).pow(2);
        let patch_colors = frame
            .quads
            .chunks(samples)
            .map(|quads| {
                let sum = quads
                    .iter()
                    .map(|q| q.mean_color().to_array())
                    .fold([0.0f32; 4], |mut acc, c| {
                        for (a, v) in acc.iter_mut().zip(c) {
                            *a += v;
                        }
                        acc
                    });
                sum.map(|v| v / quads.len() as f32)
            })
            .collect();

        let summary = FrameSummary {
            rows: mesh.rows(),
            cols: mesh.cols(),
            patches: mesh.patches().len(),
            knots: mesh.knots().len(),
            evaluator: scene.evaluator,
            render_quality: scene.render_quality,
            quads: frame.quads.len(),
            handles: frame.handles.len(),
            bounds: frame.bounds,
            patch_colors,
        };

        let json =
            serde_json::to_string_pretty(&summary).context("Zusammenfassung nicht serialisierbar")?;
        println!("{json}");
        log::info!(
            "{} Patches mit {} Vierecken tesselliert",
            summary.patches,
            summary.quads
        );
        Ok(())
    }
}
