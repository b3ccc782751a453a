//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Konfiguration, die von `tools` und `edit`
//! gemeinsam genutzt wird, ohne direkte Abhängigkeiten zu erzeugen.

pub mod options;

pub use options::PlotOptions;
pub use options::{
    CLICK_DUPLICATE_TOLERANCE, DEFAULT_CIRCLE_GRANULARITY_DEG, DEFAULT_COLOR,
    DEFAULT_CURVE_RESOLUTION, DEFAULT_CURVE_SHARPNESS,
    DEFAULT_LINE_WIDTH, DEFAULT_POINT_SIZE, DEFAULT_REGULAR_POLYGON_SIDES,
    DEFAULT_TERRAIN_EXAGGERATION, LEFT_DOUBLE_CLICK_TIME_INTERVAL_MS,
};
