//! Globe-Plot-Editor — Geometrie-Kern für interaktive Zeichen-Werkzeuge
//! auf einem Globus-Renderer.
//!
//! Der Kern konsumiert aufgelöste geographische Koordinaten
//! {Längengrad, Breitengrad, Höhe} und liefert geographische bzw.
//! kartesische Punktfolgen, die der externe Renderer direkt darstellt.
//! Szene, Picking, Kamera und UI sind externe Kollaborateure.

pub mod core;
pub mod edit;
pub mod military;
pub mod shared;
pub mod spline;
pub mod tools;

pub use crate::core::{
    bearing, convert_area, convert_length, destination, haversine_km, is_same_coordinate,
    nearest_segment_index, path_length_km, polygon_area_m2, rectangle_from_two_points,
    to_cartesian, to_geographic, ArcKind, Ellipsoid, GeographicCoordinate, ShapeDescriptor,
    ShapeKind, ShapeStyle, UnitError,
};
pub use edit::{EditSession, HelperMarker, RegisteredShape, ShapeRegistry, UpdateEffect};
pub use military::{
    arc_points, arch_points, assemble_points, attack_arrow_ring, break_position,
    circle_outline_points, formation_mark_layout, regular_polygon_points,
    rounded_rectangle_points, sector_points, tailed_attack_arrow,
};
pub use shared::PlotOptions;
pub use spline::{
    create_close_cardinal, create_close_curve, hermite_spline_corner_curve, hermite_spline_curve,
    linear_spline_curve, quadratic_bspline,
};
pub use tools::{
    recompute, DrawAction, DrawError, DrawManager, DrawPhase, DrawPreview, DrawResult,
    GeneratorOptions, ShapeArity, ShapeDraw,
};
