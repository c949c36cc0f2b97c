//! Zentrale Konfiguration für den Coons-Mesh-Editor.
//!
//! `MeshOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use super::RenderQuality;
use crate::core::{
    CornerPalette, EdgeFollow, InteractionState, InteriorPolicy, PatchSettings, Rgba,
    SurfaceEvaluator,
};
use glam::DVec2;
use serde::{Deserialize, Serialize};

// ── Interaktion ─────────────────────────────────────────────────────

/// Treffer-Radius (Welteinheiten) für Knoten und Randpunkte.
pub const PICK_RADIUS: f64 = 10.0;
/// Darstellungsgröße eines Handles (Welteinheiten).
pub const HANDLE_SIZE: f64 = 5.0;

// ── Gitter ──────────────────────────────────────────────────────────

/// Ursprung des Standard-Gitters.
pub const GRID_ORIGIN: [f64; 2] = [50.0, 50.0];
/// Breite eines Patches im Standard-Gitter.
pub const GRID_PATCH_WIDTH: f64 = 100.0;
/// Höhe eines Patches im Standard-Gitter.
pub const GRID_PATCH_HEIGHT: f64 = 100.0;
/// Patch-Zeilen des Standard-Gitters.
pub const GRID_ROWS: usize = 2;
/// Patch-Spalten des Standard-Gitters.
pub const GRID_COLS: usize = 2;

// ── Farben ──────────────────────────────────────────────────────────

/// Eckfarbe oben links (RGBA: Rot).
pub const COLOR_TOP_LEFT: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Eckfarbe oben rechts (RGBA: Grün).
pub const COLOR_TOP_RIGHT: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
/// Eckfarbe unten links (RGBA: Gelb).
pub const COLOR_BOTTOM_LEFT: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
/// Eckfarbe unten rechts (RGBA: Blau).
pub const COLOR_BOTTOM_RIGHT: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

/// Handle-Farbe im Ruhezustand (RGBA: Schwarz).
pub const HANDLE_COLOR_IDLE: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Handle-Farbe unter dem Zeiger (RGBA: Dunkelgrau).
pub const HANDLE_COLOR_HOVERED: [f32; 4] = [0.14, 0.14, 0.14, 1.0];
/// Handle-Farbe des fokussierten Ziels (RGBA: Hellgrau).
pub const HANDLE_COLOR_FOCUSED: [f32; 4] = [0.66, 0.66, 0.66, 1.0];

// ── History ─────────────────────────────────────────────────────────

/// Maximale Anzahl Undo-Schritte.
pub const HISTORY_DEPTH: usize = 200;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Mesh-Optionen.
/// Wird als `coons_mesh_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshOptions {
    // ── Interaktion ─────────────────────────────────────────────
    /// Treffer-Radius für Knoten und Randpunkte
    pub pick_radius: f64,
    /// Darstellungsgröße eines Handles
    pub handle_size: f64,

    // ── Fläche ──────────────────────────────────────────────────
    /// Auswerter für die Tessellierung
    #[serde(default)]
    pub surface_evaluator: SurfaceEvaluator,
    /// Strategie für die inneren Kontrollpunkte
    #[serde(default)]
    pub interior_policy: InteriorPolicy,
    /// Nachführen der Kanten bei Eckbewegungen
    #[serde(default)]
    pub edge_follow: EdgeFollow,
    /// Tessellierungs-Qualität (Abtastschritte pro Patch-Achse)
    #[serde(default)]
    pub render_quality: RenderQuality,

    // ── Gitter ──────────────────────────────────────────────────
    pub grid_origin: [f64; 2],
    pub grid_patch_width: f64,
    pub grid_patch_height: f64,
    pub grid_rows: usize,
    pub grid_cols: usize,

    // ── Farben ──────────────────────────────────────────────────
    pub color_top_left: [f32; 4],
    pub color_top_right: [f32; 4],
    pub color_bottom_left: [f32; 4],
    pub color_bottom_right: [f32; 4],
    /// Handle-Farbe im Ruhezustand
    pub handle_color_idle: [f32; 4],
    /// Handle-Farbe unter dem Zeiger
    pub handle_color_hovered: [f32; 4],
    /// Handle-Farbe des fokussierten Ziels
    pub handle_color_focused: [f32; 4],

    // ── History ─────────────────────────────────────────────────
    /// Maximale Anzahl Undo-Schritte
    #[serde(default = "default_history_depth")]
    pub history_depth: usize,
}

impl Default for MeshOptions {
    fn default() -> Self {
        Self {
            pick_radius: PICK_RADIUS,
            handle_size: HANDLE_SIZE,

            surface_evaluator: SurfaceEvaluator::default(),
            interior_policy: InteriorPolicy::default(),
            edge_follow: EdgeFollow::default(),
            render_quality: RenderQuality::default(),

            grid_origin: GRID_ORIGIN,
            grid_patch_width: GRID_PATCH_WIDTH,
            grid_patch_height: GRID_PATCH_HEIGHT,
            grid_rows: GRID_ROWS,
            grid_cols: GRID_COLS,

            color_top_left: COLOR_TOP_LEFT,
            color_top_right: COLOR_TOP_RIGHT,
            color_bottom_left: COLOR_BOTTOM_LEFT,
            color_bottom_right: COLOR_BOTTOM_RIGHT,
            handle_color_idle: HANDLE_COLOR_IDLE,
            handle_color_hovered: HANDLE_COLOR_HOVERED,
            handle_color_focused: HANDLE_COLOR_FOCUSED,

            history_depth: HISTORY_DEPTH,
        }
    }
}

/// Serde-Default für `history_depth` (ältere TOML-Dateien ohne das Feld).
fn default_history_depth() -> usize {
    HISTORY_DEPTH
}

impl MeshOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content).unwrap_or_else(|e| {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {e:#}");
                Self::default()
            }),
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus einem TOML-String.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let opts = toml::from_str(content)?;
        log::info!("Optionen geladen");
        Ok(opts)
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("coons-mesh-editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("coons_mesh_editor.toml")
    }

    /// Eckfarben-Palette für neue Gitter.
    pub fn palette(&self) -> CornerPalette {
        CornerPalette {
            top_left: Rgba::from_array(self.color_top_left),
            top_right: Rgba::from_array(self.color_top_right),
            bottom_left: Rgba::from_array(self.color_bottom_left),
            bottom_right: Rgba::from_array(self.color_bottom_right),
        }
    }

    /// Patch-Einstellungen für neue Gitter.
    pub fn patch_settings(&self) -> PatchSettings {
        PatchSettings {
            interior_policy: self.interior_policy,
            edge_follow: self.edge_follow,
        }
    }

    pub fn grid_origin(&self) -> DVec2 {
        DVec2::from_array(self.grid_origin)
    }

    /// Handle-Farbe passend zum Interaktionszustand.
    pub fn handle_color(&self, state: InteractionState) -> Rgba {
        Rgba::from_array(match state {
            InteractionState::Idle => self.handle_color_idle,
            InteractionState::Hovered => self.handle_color_hovered,
            InteractionState::Selected => self.handle_color_focused,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_palette_entspricht_core_palette() {
        assert_eq!(MeshOptions::default().palette(), CornerPalette::default());
    }

    #[test]
    fn toml_roundtrip_behaelt_werte() {
        let mut opts = MeshOptions::default();
        opts.pick_radius = 4.5;
        opts.interior_policy = InteriorPolicy::WeightedAverage;
        opts.edge_follow = EdgeFollow::Half;
        opts.surface_evaluator = SurfaceEvaluator::CoonsBoundary;
        opts.grid_rows = 5;

        let text = toml::to_string_pretty(&opts).expect("serialisierbar");
        let parsed = MeshOptions::from_toml_str(&text).expect("parsebar");
        assert_eq!(parsed, opts);
    }

    #[test]
    fn fehlende_optionale_felder_nutzen_defaults() {
        let text = toml::to_string_pretty(&MeshOptions::default()).expect("serialisierbar");
        let mut table: toml::Table = text.parse().expect("gültiges TOML");
        table.remove("history_depth");
        table.remove("interior_policy");

        let parsed = MeshOptions::from_toml_str(&table.to_string()).expect("parsebar");
        assert_eq!(parsed.history_depth, HISTORY_DEPTH);
        assert_eq!(parsed.interior_policy, InteriorPolicy::Coons);
    }

    #[test]
    fn handle_farbe_folgt_zustand() {
        let mut opts = MeshOptions::default();
        opts.handle_color_hovered = [1.0, 0.0, 0.0, 1.0];

        assert_eq!(
            opts.handle_color(InteractionState::Idle),
            Rgba::from_array(HANDLE_COLOR_IDLE)
        );
        assert_eq!(opts.handle_color(InteractionState::Hovered), Rgba::RED);
        assert_eq!(
            opts.handle_color(InteractionState::Selected),
            Rgba::from_array(HANDLE_COLOR_FOCUSED)
        );
    }

    #[test]
    fn fehlerhafte_datei_liefert_fehler() {
        assert!(MeshOptions::from_toml_str("pick_radius = \"gross\"").is_err());
    }

    #[test]
    fn load_ohne_datei_liefert_defaults() {
        let path = std::env::temp_dir().join("coons_mesh_editor_gibt_es_nicht.toml");
        assert_eq!(MeshOptions::load_from_file(&path), MeshOptions::default());
    }

    #[test]
    fn save_und_load_ueber_datei() {
        let path = std::env::temp_dir().join(format!(
            "coons_mesh_editor_test_{}.toml",
            std::process::id()
        ));
        let mut opts = MeshOptions::default();
        opts.grid_cols = 7;
        opts.save_to_file(&path).expect("speicherbar");

        let loaded = MeshOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded.grid_cols, 7);
    }
}
