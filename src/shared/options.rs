//! Zentrale Konfiguration des Zeichen-Kerns.
//!
//! `PlotOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten. Werte wie das
//! Doppelklick-Intervall werden beim Erstellen in jeden Zustandsautomaten
//! injiziert — es gibt keinen prozessweiten Settings-Singleton.

use serde::{Deserialize, Serialize};

// ── Eingabe ─────────────────────────────────────────────────────────

/// Intervall, unter dem zwei Klicks als ein Doppelklick gelten (Millisekunden).
pub const LEFT_DOUBLE_CLICK_TIME_INTERVAL_MS: f64 = 200.0;
/// Toleranz der Koordinaten-Gleichheit beim Duplikat-Check (Grad).
pub const CLICK_DUPLICATE_TOLERANCE: f64 = 1e-6;

// ── Darstellung ─────────────────────────────────────────────────────

/// Standard-Linienstärke in Pixeln.
pub const DEFAULT_LINE_WIDTH: f64 = 2.0;
/// Standard-Punktgröße der Vertex-Marker in Pixeln.
pub const DEFAULT_POINT_SIZE: f64 = 6.0;
/// Standard-Farbe neuer Shapes.
pub const DEFAULT_COLOR: &str = "#ffffff";

// ── Interpolation ───────────────────────────────────────────────────

/// Zwischenpunkte pro Spline-Segment.
pub const DEFAULT_CURVE_RESOLUTION: usize = 10;
/// Tangenten-Skalierung der Corner-Hermite-Spline.
pub const DEFAULT_CURVE_SHARPNESS: f64 = 0.5;
/// Eckenzahl des regelmäßigen Vielecks.
pub const DEFAULT_REGULAR_POLYGON_SIDES: usize = 6;
/// Winkelschritt der Kreis-Tessellation in Grad.
pub const DEFAULT_CIRCLE_GRANULARITY_DEG: f64 = 1.0;

// ── Terrain ─────────────────────────────────────────────────────────

/// Terrain-Überhöhungsfaktor (1.0 = keine Überhöhung).
pub const DEFAULT_TERRAIN_EXAGGERATION: f64 = 1.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen des Zeichen-Kerns.
/// Wird als `globe_plot_editor.toml` neben der Host-Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotOptions {
    // ── Eingabe ─────────────────────────────────────────────────
    /// Doppelklick-Intervall in Millisekunden
    pub double_click_interval_ms: f64,
    /// Toleranz der Koordinaten-Gleichheit (Grad)
    pub coordinate_tolerance: f64,

    // ── Darstellung ─────────────────────────────────────────────
    /// Linienstärke in Pixeln
    pub line_width: f64,
    /// Punktgröße der Vertex-Marker in Pixeln
    pub point_size: f64,
    /// CSS-Farbstring neuer Shapes
    pub color: String,

    // ── Interpolation ───────────────────────────────────────────
    /// Zwischenpunkte pro Spline-Segment
    pub curve_resolution: usize,
    /// Tangenten-Skalierung der Corner-Hermite-Spline
    pub curve_sharpness: f64,
    /// Eckenzahl des regelmäßigen Vielecks
    #[serde(default = "default_regular_polygon_sides")]
    pub regular_polygon_sides: usize,
    /// Winkelschritt der Kreis-Tessellation in Grad
    #[serde(default = "default_circle_granularity_deg")]
    pub circle_granularity_deg: f64,

    // ── Terrain ─────────────────────────────────────────────────
    /// Überhöhungsfaktor für Höhen unter 0
    #[serde(default = "default_terrain_exaggeration")]
    pub terrain_exaggeration: f64,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            double_click_interval_ms: LEFT_DOUBLE_CLICK_TIME_INTERVAL_MS,
            coordinate_tolerance: CLICK_DUPLICATE_TOLERANCE,
            line_width: DEFAULT_LINE_WIDTH,
            point_size: DEFAULT_POINT_SIZE,
            color: DEFAULT_COLOR.to_string(),
            curve_resolution: DEFAULT_CURVE_RESOLUTION,
            curve_sharpness: DEFAULT_CURVE_SHARPNESS,
            regular_polygon_sides: DEFAULT_REGULAR_POLYGON_SIDES,
            circle_granularity_deg: DEFAULT_CIRCLE_GRANULARITY_DEG,
            terrain_exaggeration: DEFAULT_TERRAIN_EXAGGERATION,
        }
    }
}

/// Serde-Default für `regular_polygon_sides` (Abwärtskompatibilität).
fn default_regular_polygon_sides() -> usize {
    DEFAULT_REGULAR_POLYGON_SIDES
}

/// Serde-Default für `circle_granularity_deg` (Abwärtskompatibilität).
fn default_circle_granularity_deg() -> f64 {
    DEFAULT_CIRCLE_GRANULARITY_DEG
}

/// Serde-Default für `terrain_exaggeration` (Abwärtskompatibilität).
fn default_terrain_exaggeration() -> f64 {
    DEFAULT_TERRAIN_EXAGGERATION
}

impl PlotOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Host-Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("globe_plot_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("globe_plot_editor.toml")
    }
}
