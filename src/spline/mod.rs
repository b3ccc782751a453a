//! Spline-Engine: reine Interpolations-Funktionen ohne Zustand.
//!
//! Planare Arbeit läuft auf `DVec2` (x = Längengrad, y = Breitengrad),
//! öffentliche geographische Verträge auf `GeographicCoordinate`.

pub mod bspline;
pub mod cardinal;
pub mod catmull;
pub mod hermite;
pub mod linear;

pub use bspline::quadratic_bspline;
pub use cardinal::{calculate_points_fbz3, create_close_cardinal, create_close_curve};
pub use catmull::TimedCatmullRom;
pub use hermite::{
    hermite_spline_corner_curve, hermite_spline_curve, DEFAULT_CORNER_RESOLUTION,
    DEFAULT_CORNER_SHARPNESS, DEFAULT_HERMITE_SAMPLES,
};
pub use linear::{linear_spline_curve, DEFAULT_LINEAR_RESOLUTION};
