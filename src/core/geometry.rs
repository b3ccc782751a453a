//! Reine Geometrie-Primitiven auf geographischen Koordinaten.
//!
//! Layer-neutral: wird von `spline`, `military`, `tools` und `edit`
//! importiert, ohne Zirkel-Abhängigkeiten zu erzeugen.

use glam::DVec3;

use super::coordinate::{to_cartesian, Ellipsoid, GeographicCoordinate};

/// Mittlerer Erdradius in Metern (Haversine-Distanz und Ring-Fläche).
pub const EARTH_RADIUS_MEAN: f64 = 6_371_008.8;
/// Äquatorialer Erdradius in Metern (sphärische Zielpunkt-Berechnung).
pub const EARTH_RADIUS_EQUATORIAL: f64 = 6_378_137.0;

// ── Distanz und Azimut ──────────────────────────────────────────────

/// Großkreis-Distanz zwischen zwei Punkten in Kilometern (Haversine).
pub fn haversine_km(p1: &GeographicCoordinate, p2: &GeographicCoordinate) -> f64 {
    let lat1 = p1.latitude.to_radians();
    let lat2 = p2.latitude.to_radians();
    let d_lat = (p2.latitude - p1.latitude).to_radians();
    let d_lon = (p2.longitude - p1.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * a.sqrt().atan2((1.0 - a).sqrt()) * EARTH_RADIUS_MEAN / 1000.0
}

/// Länge einer Polyline in Kilometern (Summe der Großkreis-Segmente).
pub fn path_length_km(coords: &[GeographicCoordinate]) -> f64 {
    coords
        .windows(2)
        .map(|w| haversine_km(&w[0], &w[1]))
        .sum()
}

/// Vorwärts-Azimut von `p1` nach `p2` in Grad, normalisiert auf [0, 360).
pub fn bearing(p1: &GeographicCoordinate, p2: &GeographicCoordinate) -> f64 {
    let lat1 = p1.latitude.to_radians();
    let lat2 = p2.latitude.to_radians();
    let d_lon = (p2.longitude - p1.longitude).to_radians();

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();
    (y.atan2(x).to_degrees() + 360.0) % 360.0
}

// ── Zielpunkt-Berechnung ────────────────────────────────────────────

/// Zielpunkt aus Startpunkt, Azimut (Grad) und Distanz (Meter) — sphärisch.
pub fn destination(
    origin: &GeographicCoordinate,
    bearing_deg: f64,
    distance_m: f64,
) -> GeographicCoordinate {
    let r = EARTH_RADIUS_EQUATORIAL;
    let lon0 = origin.longitude.to_radians();
    let lat0 = origin.latitude.to_radians();
    let azimuth = bearing_deg.to_radians();
    let angular = distance_m / r;

    let lat = (lat0.sin() * angular.cos() + lat0.cos() * angular.sin() * azimuth.cos()).asin();
    let lon = lon0
        + (azimuth.sin() * angular.sin() * lat0.cos())
            .atan2(angular.cos() - lat0.sin() * lat.sin());

    GeographicCoordinate::new(lon.to_degrees(), lat.to_degrees(), 0.0)
}

/// Zielpunkt aus Startpunkt, Azimut (Grad) und Distanz (Meter) —
/// direkte geodätische Lösung auf dem WGS84-Ellipsoid (Vincenty).
pub fn destination_vincenty(
    origin: &GeographicCoordinate,
    bearing_deg: f64,
    distance_m: f64,
) -> GeographicCoordinate {
    let a = 6_378_137.0;
    let b = 6_356_752.3142;
    let f = 1.0 / 298.257_223_563;

    let alpha1 = bearing_deg.to_radians();
    let sin_alpha1 = alpha1.sin();
    let cos_alpha1 = alpha1.cos();
    let tan_u1 = (1.0 - f) * origin.latitude.to_radians().tan();
    let cos_u1 = 1.0 / (1.0 + tan_u1 * tan_u1).sqrt();
    let sin_u1 = tan_u1 * cos_u1;
    let sigma1 = tan_u1.atan2(cos_alpha1);
    let sin_alpha = cos_u1 * sin_alpha1;
    let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
    let u_sq = cos_sq_alpha * (a * a - b * b) / (b * b);
    let big_a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
    let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));

    let mut sigma = distance_m / (b * big_a);
    let mut sigma_prev = 2.0 * std::f64::consts::PI;
    let mut cos_2sigma_m = 0.0;
    let mut sin_sigma = 0.0;
    let mut cos_sigma = 0.0;
    while (sigma - sigma_prev).abs() > 1e-12 {
        cos_2sigma_m = (2.0 * sigma1 + sigma).cos();
        sin_sigma = sigma.sin();
        cos_sigma = sigma.cos();
        let delta_sigma = big_b
            * sin_sigma
            * (cos_2sigma_m
                + big_b / 4.0
                    * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                        - big_b / 6.0
                            * cos_2sigma_m
                            * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                            * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)));
        sigma_prev = sigma;
        sigma = distance_m / (b * big_a) + delta_sigma;
    }

    let tmp = sin_u1 * sin_sigma - cos_u1 * cos_sigma * cos_alpha1;
    let lat2 = (sin_u1 * cos_sigma + cos_u1 * sin_sigma * cos_alpha1)
        .atan2((1.0 - f) * (sin_alpha * sin_alpha + tmp * tmp).sqrt());
    let lambda = (sin_sigma * sin_alpha1).atan2(cos_u1 * cos_sigma - sin_u1 * sin_sigma * cos_alpha1);
    let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
    let l = lambda
        - (1.0 - c)
            * f
            * sin_alpha
            * (sigma
                + c * sin_sigma
                    * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

    GeographicCoordinate::new(
        origin.longitude + l.to_degrees(),
        lat2.to_degrees(),
        0.0,
    )
}

// ── Fläche ──────────────────────────────────────────────────────────

/// Geodätische Fläche eines geschlossenen Rings in Quadratmetern.
///
/// Erwartet einen geschlossenen Ring (erster Punkt exakt gleich letztem,
/// inklusive Höhe) mit mindestens 4 Punkten (3 Ecken + Schlusspunkt);
/// andernfalls `None`.
pub fn polygon_area_m2(ring: &[GeographicCoordinate]) -> Option<f64> {
    if ring.len() < 4 {
        return None;
    }
    let first = &ring[0];
    let last = &ring[ring.len() - 1];
    if first.longitude != last.longitude
        || first.latitude != last.latitude
        || first.height != last.height
    {
        return None;
    }

    let n = ring.len();
    let mut total = 0.0;
    for i in 0..n {
        let lower = &ring[i];
        let middle = &ring[(i + 1) % n];
        let upper = &ring[(i + 2) % n];
        total += (upper.longitude.to_radians() - lower.longitude.to_radians())
            * middle.latitude.to_radians().sin();
    }
    Some((total * EARTH_RADIUS_MEAN * EARTH_RADIUS_MEAN / 2.0).abs())
}

// ── Rechteck und Parallelogramm ─────────────────────────────────────

/// Achsen-paralleles Rechteck aus zwei Diagonalpunkten.
///
/// Ecken in der Reihenfolge SW, NW, NO, SO, SW (geschlossen);
/// Höhe = Mittelwert der beiden Eingabe-Höhen.
pub fn rectangle_from_two_points(
    p1: &GeographicCoordinate,
    p2: &GeographicCoordinate,
) -> [GeographicCoordinate; 5] {
    let west = p1.longitude.min(p2.longitude);
    let east = p1.longitude.max(p2.longitude);
    let south = p1.latitude.min(p2.latitude);
    let north = p1.latitude.max(p2.latitude);
    let height = (p1.height + p2.height) / 2.0;
    [
        GeographicCoordinate::new(west, south, height),
        GeographicCoordinate::new(west, north, height),
        GeographicCoordinate::new(east, north, height),
        GeographicCoordinate::new(east, south, height),
        GeographicCoordinate::new(west, south, height),
    ]
}

/// Index der diagonal gegenüberliegenden Ecke in einem 4-Ecken-Rechteck.
pub fn rectangle_opposite_index(index: usize) -> usize {
    (index + 2) % 4
}

/// Vierter Parallelogramm-Punkt zu drei geordneten Ecken: D = C − (B − A).
pub fn parallelogram_fourth_vertex(a: DVec3, b: DVec3, c: DVec3) -> DVec3 {
    c - (b - a)
}

// ── Polyline-Hit-Tests ──────────────────────────────────────────────

/// Kürzeste Distanz eines Punkts zu einem Segment im 3D-Kartesischen Raum.
///
/// Der Projektionsparameter t wird auf [0, 1] geklemmt.
fn distance_to_segment(point: DVec3, start: DVec3, end: DVec3) -> f64 {
    let direction = end - start;
    let v = point - start;
    let denom = direction.dot(direction);
    if denom <= f64::EPSILON {
        return v.length();
    }
    let t = v.dot(direction) / denom;
    if t < 0.0 {
        v.length()
    } else if t > 1.0 {
        (point - end).length()
    } else {
        (point - (start + direction * t)).length()
    }
}

/// Index des Segments einer Polyline, das dem Punkt am nächsten liegt.
///
/// Brute-Force-Minimum über alle Segmente; `None` bei weniger als 2 Punkten.
pub fn nearest_segment_index(
    polyline: &[GeographicCoordinate],
    point: &GeographicCoordinate,
) -> Option<usize> {
    if polyline.len() < 2 {
        return None;
    }
    let ellipsoid = Ellipsoid::WGS84;
    let target = to_cartesian(point, &ellipsoid, 1.0);

    let mut nearest_index = 0;
    let mut nearest_distance = f64::MAX;
    for i in 0..polyline.len() - 1 {
        let start = to_cartesian(&polyline[i], &ellipsoid, 1.0);
        let end = to_cartesian(&polyline[i + 1], &ellipsoid, 1.0);
        let d = distance_to_segment(target, start, end);
        if d < nearest_distance {
            nearest_distance = d;
            nearest_index = i;
        }
    }
    Some(nearest_index)
}

// ── Hilfsfunktionen ─────────────────────────────────────────────────

/// Schwerpunkt einer Koordinatenliste; bei `closed` wird der
/// Schlusspunkt nicht doppelt gewichtet.
pub fn center_of(coords: &[GeographicCoordinate], closed: bool) -> Option<GeographicCoordinate> {
    let count = if closed {
        coords.len().checked_sub(1)?
    } else {
        coords.len()
    };
    if count == 0 {
        return None;
    }
    let mut lon = 0.0;
    let mut lat = 0.0;
    let mut height = 0.0;
    for c in &coords[..count] {
        lon += c.longitude;
        lat += c.latitude;
        height += c.height;
    }
    let n = count as f64;
    Some(GeographicCoordinate::new(lon / n, lat / n, height / n))
}

/// Verschiebt alle Koordinaten um einen konstanten Offset.
pub fn offset_coordinates(
    coords: &[GeographicCoordinate],
    lon_bias: f64,
    lat_bias: f64,
    height_bias: f64,
) -> Vec<GeographicCoordinate> {
    coords
        .iter()
        .map(|c| {
            GeographicCoordinate::new(
                c.longitude + lon_bias,
                c.latitude + lat_bias,
                c.height + height_bias,
            )
        })
        .collect()
}

/// Index des nördlichsten Punkts einer Koordinatenliste.
pub fn northernmost_index(coords: &[GeographicCoordinate]) -> Option<usize> {
    if coords.is_empty() {
        return None;
    }
    let mut index = 0;
    for (i, c) in coords.iter().enumerate().skip(1) {
        if c.latitude > coords[index].latitude {
            index = i;
        }
    }
    Some(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_haversine_one_degree_longitude_at_equator() {
        let a = GeographicCoordinate::new(0.0, 0.0, 0.0);
        let b = GeographicCoordinate::new(1.0, 0.0, 0.0);
        // 1° Bogenlänge am Äquator auf der Mittelradius-Kugel
        let expected = EARTH_RADIUS_MEAN * 1f64.to_radians() / 1000.0;
        assert_relative_eq!(haversine_km(&a, &b), expected, epsilon = 1e-6);
    }

    #[test]
    fn test_path_length_is_segment_sum() {
        let coords = [
            GeographicCoordinate::new(0.0, 0.0, 0.0),
            GeographicCoordinate::new(1.0, 0.0, 0.0),
            GeographicCoordinate::new(1.0, 1.0, 0.0),
        ];
        let expected = haversine_km(&coords[0], &coords[1]) + haversine_km(&coords[1], &coords[2]);
        assert_relative_eq!(path_length_km(&coords), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_bearing_cardinal_directions() {
        let origin = GeographicCoordinate::new(0.0, 0.0, 0.0);
        let east = GeographicCoordinate::new(1.0, 0.0, 0.0);
        let north = GeographicCoordinate::new(0.0, 1.0, 0.0);
        let west = GeographicCoordinate::new(-1.0, 0.0, 0.0);
        assert_relative_eq!(bearing(&origin, &east), 90.0, epsilon = 1e-9);
        assert_relative_eq!(bearing(&origin, &north), 0.0, epsilon = 1e-9);
        assert_relative_eq!(bearing(&origin, &west), 270.0, epsilon = 1e-9);
    }

    #[test]
    fn test_destination_roundtrip_with_bearing() {
        let origin = GeographicCoordinate::new(10.0, 45.0, 0.0);
        let target = destination(&origin, 60.0, 5000.0);
        assert_relative_eq!(bearing(&origin, &target), 60.0, epsilon = 0.01);
        assert_relative_eq!(
            haversine_km(&origin, &target) * 1000.0,
            5000.0,
            max_relative = 0.005
        );
    }

    #[test]
    fn test_destination_vincenty_close_to_spherical() {
        let origin = GeographicCoordinate::new(120.0, 30.0, 0.0);
        let spherical = destination(&origin, 45.0, 10_000.0);
        let geodesic = destination_vincenty(&origin, 45.0, 10_000.0);
        assert_relative_eq!(spherical.longitude, geodesic.longitude, epsilon = 0.01);
        assert_relative_eq!(spherical.latitude, geodesic.latitude, epsilon = 0.01);
    }

    #[test]
    fn test_polygon_area_rejects_open_ring() {
        let open = [
            GeographicCoordinate::new(0.0, 0.0, 0.0),
            GeographicCoordinate::new(0.01, 0.0, 0.0),
            GeographicCoordinate::new(0.01, 0.01, 0.0),
            GeographicCoordinate::new(0.0, 0.01, 0.0),
        ];
        assert!(polygon_area_m2(&open).is_none());
    }

    #[test]
    fn test_polygon_area_rejects_too_few_points() {
        let degenerate = [
            GeographicCoordinate::new(0.0, 0.0, 0.0),
            GeographicCoordinate::new(0.01, 0.0, 0.0),
            GeographicCoordinate::new(0.0, 0.0, 0.0),
        ];
        assert!(polygon_area_m2(&degenerate).is_none());
    }

    #[test]
    fn test_polygon_area_unit_square() {
        let ring = [
            GeographicCoordinate::new(0.0, 0.0, 0.0),
            GeographicCoordinate::new(0.01, 0.0, 0.0),
            GeographicCoordinate::new(0.01, 0.01, 0.0),
            GeographicCoordinate::new(0.0, 0.01, 0.0),
            GeographicCoordinate::new(0.0, 0.0, 0.0),
        ];
        let area = polygon_area_m2(&ring).expect("geschlossener Ring");
        // ~1.11 km Kantenlänge am Äquator
        let side = EARTH_RADIUS_MEAN * 0.01f64.to_radians();
        assert_relative_eq!(area, side * side, max_relative = 0.01);
    }

    #[test]
    fn test_rectangle_from_two_points_order_and_height() {
        let corners = rectangle_from_two_points(
            &GeographicCoordinate::new(2.0, 1.0, 100.0),
            &GeographicCoordinate::new(1.0, 2.0, 300.0),
        );
        assert_eq!(corners[0].planar(), glam::DVec2::new(1.0, 1.0)); // SW
        assert_eq!(corners[1].planar(), glam::DVec2::new(1.0, 2.0)); // NW
        assert_eq!(corners[2].planar(), glam::DVec2::new(2.0, 2.0)); // NO
        assert_eq!(corners[3].planar(), glam::DVec2::new(2.0, 1.0)); // SO
        assert_eq!(corners[4], corners[0]);
        assert!(corners.iter().all(|c| c.height == 200.0));
    }

    #[test]
    fn test_rectangle_opposite_index() {
        assert_eq!(rectangle_opposite_index(0), 2);
        assert_eq!(rectangle_opposite_index(1), 3);
        assert_eq!(rectangle_opposite_index(2), 0);
        assert_eq!(rectangle_opposite_index(3), 1);
    }

    #[test]
    fn test_parallelogram_fourth_vertex() {
        let a = DVec3::new(0.0, 0.0, 0.0);
        let b = DVec3::new(2.0, 0.0, 0.0);
        let c = DVec3::new(3.0, 1.0, 0.0);
        assert_eq!(parallelogram_fourth_vertex(a, b, c), DVec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_nearest_segment_index() {
        let line = [
            GeographicCoordinate::new(0.0, 0.0, 0.0),
            GeographicCoordinate::new(1.0, 0.0, 0.0),
            GeographicCoordinate::new(2.0, 0.0, 0.0),
            GeographicCoordinate::new(3.0, 0.0, 0.0),
        ];
        let near_second = GeographicCoordinate::new(1.4, 0.2, 0.0);
        assert_eq!(nearest_segment_index(&line, &near_second), Some(1));

        let before_start = GeographicCoordinate::new(-1.0, 0.0, 0.0);
        assert_eq!(nearest_segment_index(&line, &before_start), Some(0));

        let single = [line[0]];
        assert_eq!(nearest_segment_index(&single, &near_second), None);
    }

    #[test]
    fn test_center_of_closed_ring_skips_closing_point() {
        let ring = [
            GeographicCoordinate::new(0.0, 0.0, 0.0),
            GeographicCoordinate::new(2.0, 0.0, 0.0),
            GeographicCoordinate::new(2.0, 2.0, 0.0),
            GeographicCoordinate::new(0.0, 2.0, 0.0),
            GeographicCoordinate::new(0.0, 0.0, 0.0),
        ];
        let center = center_of(&ring, true).unwrap();
        assert_relative_eq!(center.longitude, 1.0);
        assert_relative_eq!(center.latitude, 1.0);
    }

    #[test]
    fn test_northernmost_index() {
        let coords = [
            GeographicCoordinate::new(0.0, 0.0, 0.0),
            GeographicCoordinate::new(1.0, 5.0, 0.0),
            GeographicCoordinate::new(2.0, 3.0, 0.0),
        ];
        assert_eq!(northernmost_index(&coords), Some(1));
    }
}
