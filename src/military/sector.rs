//! Sektor-, Bogen- und Sehnenbogen-Generatoren.
//!
//! Alle drei Formen entstehen aus denselben drei Kontrollpunkten:
//! Scheitel, Radius-/Startwinkel-Punkt und Endwinkel-Punkt. Der Bogen
//! läuft vom kleineren zum größeren Azimut in 1°-Schritten.

use glam::DVec3;

use crate::core::{
    bearing, destination, path_length_km, to_cartesian, to_geographic, Ellipsoid,
    GeographicCoordinate,
};

/// Winkelschritt des Bogens in Grad.
const ANGLE_STEP_DEG: f64 = 1.0;

/// Geschlossenes Tortenstück: Scheitel + Bogen + Scheitel.
///
/// Weniger als 3 Kontrollpunkte ⇒ `None`. Der Radius ist die
/// Großkreis-Distanz Scheitel → zweiter Punkt; Start-/Endwinkel sind die
/// Vorwärts-Azimute zum zweiten bzw. dritten Punkt.
pub fn sector_points(positions: &[GeographicCoordinate]) -> Option<Vec<GeographicCoordinate>> {
    if positions.len() < 3 {
        return None;
    }

    let apex = GeographicCoordinate::new(positions[0].longitude, positions[0].latitude, 0.0);
    let radius_m = path_length_km(&positions[0..2]) * 1000.0;
    let bearing_a = bearing(&positions[0], &positions[1]);
    let bearing_b = bearing(&positions[0], &positions[2]);
    let start = bearing_a.min(bearing_b);
    let end = bearing_a.max(bearing_b);

    let steps = (end - start) / ANGLE_STEP_DEG;
    let mut result = Vec::with_capacity(steps as usize + 4);
    result.push(apex);
    let mut i = 0.0;
    while i <= steps {
        result.push(destination(&apex, start + i * ANGLE_STEP_DEG, radius_m));
        i += 1.0;
    }
    // Letzten Bogenpunkt exakt auf den Endwinkel legen
    result.push(destination(&apex, end, radius_m));
    result.push(apex);

    Some(result)
}

/// Offener Bogen: Sektor ohne die beiden Scheitel-Einträge.
pub fn arc_points(positions: &[GeographicCoordinate]) -> Option<Vec<GeographicCoordinate>> {
    let mut sector = sector_points(positions)?;
    sector.remove(0);
    sector.pop();
    Some(sector)
}

/// Sehnenbogen: offener Bogen, geschlossen auf seinen eigenen ersten Punkt.
pub fn arch_points(positions: &[GeographicCoordinate]) -> Option<Vec<GeographicCoordinate>> {
    let mut arc = arc_points(positions)?;
    if let Some(&first) = arc.first() {
        arc.push(first);
    }
    Some(arc)
}

/// Projiziert beim Drag eines Sektor-Kontrollpunkts den unberührten
/// Winkel-Punkt auf den neuen Radius zurück.
///
/// `new_vertex` definiert den neuen Radius, `old_vertex` die beizubehaltende
/// Richtung; das Ergebnis liegt auf Höhe 0 über dem Ellipsoid.
pub fn update_sector_vertices(center: DVec3, new_vertex: DVec3, old_vertex: DVec3) -> DVec3 {
    let radius = center.distance(new_vertex);
    let direction = (old_vertex - center).normalize();
    let moved = center + direction * radius;

    // Zurück auf die Ellipsoid-Oberfläche (Höhe 0)
    let mut geo = to_geographic(moved, &Ellipsoid::WGS84, 1.0);
    geo.height = 0.0;
    to_cartesian(&geo, &Ellipsoid::WGS84, 1.0)
}
