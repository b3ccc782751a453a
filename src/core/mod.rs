//! Core-Domänentypen: Koordinaten, Einheiten, Geometrie-Primitiven, Shapes.

pub mod coordinate;
pub mod geometry;
pub mod shape;
pub mod units;

pub use coordinate::{
    degree_to_dms, dms_to_degree, east_north_up, is_same_coordinate, is_same_coordinate_with,
    to_cartesian, to_cartesian_array, to_geographic, to_geographic_array, Ellipsoid,
    GeographicCoordinate, COORDINATE_TOLERANCE,
};
pub use geometry::{
    bearing, center_of, destination, destination_vincenty, haversine_km, nearest_segment_index,
    northernmost_index, offset_coordinates, parallelogram_fourth_vertex, path_length_km,
    polygon_area_m2, rectangle_from_two_points, rectangle_opposite_index,
};
pub use shape::{ArcKind, ShapeDescriptor, ShapeKind, ShapeStyle};
pub use units::{
    convert_area, convert_length, format_degree, DegreeFormat, FormattedDegree, UnitError,
};
