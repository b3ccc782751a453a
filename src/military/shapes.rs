//! Abgerundetes Rechteck, Kreis-Außenlinie und regelmäßiges Vieleck.

use glam::DVec2;
use std::f64::consts::{FRAC_PI_2, PI};

use crate::core::{destination, haversine_km, GeographicCoordinate};

/// Eckenradius relativ zur kürzeren Rechteckseite.
const CORNER_RADIUS_RATIO: f64 = 0.1;
/// Winkelschritt der Eckbögen (1°).
const CORNER_STEP: f64 = PI / 180.0;
/// Standard-Winkelschritt der Kreis-Außenlinie in Grad.
pub const DEFAULT_CIRCLE_STEP_DEG: f64 = 1.0;

/// Abgerundetes Rechteck aus zwei Diagonal-Ankern.
///
/// Die vier Bogen-Zentren liegen um r = min(Breite, Höhe) / 10 von den
/// Ecken nach innen versetzt; vier Viertelkreise in 1°-Schritten, im
/// Uhrzeigersinn beginnend oben links. Weniger als 2 Anker ⇒ Eingabe
/// unverändert.
pub fn rounded_rectangle_points(anchors: &[GeographicCoordinate]) -> Vec<GeographicCoordinate> {
    if anchors.len() < 2 {
        return anchors.to_vec();
    }

    let p0 = anchors[0].planar();
    let p1 = anchors[1].planar();
    let center = (p0 + p1) / 2.0;
    let width = (p0.x - p1.x).abs();
    let height = (p0.y - p1.y).abs();
    let r = CORNER_RADIUS_RATIO * width.min(height);

    // Bogen-Zentren im Uhrzeigersinn ab oben links, mit Start-Winkel
    let arcs = [
        (center + DVec2::new(-width / 2.0 + r, -height / 2.0 + r), PI),
        (
            center + DVec2::new(width / 2.0 - r, -height / 2.0 + r),
            1.5 * PI,
        ),
        (center + DVec2::new(width / 2.0 - r, height / 2.0 - r), 0.0),
        (
            center + DVec2::new(-width / 2.0 + r, height / 2.0 - r),
            FRAC_PI_2,
        ),
    ];

    // 90°-Bogen in 1°-Schritten
    let steps_per_arc = 90;
    let mut points = Vec::with_capacity(4 * steps_per_arc);
    for (arc_center, start_angle) in arcs {
        for i in 0..steps_per_arc {
            let angle = start_angle + i as f64 * CORNER_STEP;
            points.push(GeographicCoordinate::new(
                arc_center.x + r * angle.cos(),
                arc_center.y + r * angle.sin(),
                0.0,
            ));
        }
    }
    points
}

/// Kreis-Außenlinie um `center` durch `edge`.
///
/// Der Azimut läuft in `step_deg`-Schritten von 0° bis 360°; erster und
/// letzter Punkt fallen zusammen. Nicht-positive Schrittweiten fallen auf
/// 1° zurück.
pub fn circle_outline_points(
    center: &GeographicCoordinate,
    edge: &GeographicCoordinate,
    step_deg: f64,
) -> Vec<GeographicCoordinate> {
    let step = if step_deg > 0.0 {
        step_deg
    } else {
        DEFAULT_CIRCLE_STEP_DEG
    };
    let count = (360.0 / step).floor() as usize;
    let radius_m = haversine_km(center, edge) * 1000.0;

    let mut points = Vec::with_capacity(count + 1);
    for i in 0..=count {
        points.push(destination(center, i as f64 * step, radius_m));
    }
    points
}

/// Regelmäßiges Vieleck mit `num` Ecken um `center` durch `edge`.
///
/// Tastet die Kreis-Außenlinie mit Schrittweite ⌊Punktzahl / num⌋ ab und
/// schließt mit einem Duplikat der ersten Ecke. `num < 3` ⇒ `None`.
pub fn regular_polygon_points(
    center: &GeographicCoordinate,
    edge: &GeographicCoordinate,
    num: usize,
) -> Option<Vec<GeographicCoordinate>> {
    if num < 3 {
        return None;
    }

    let circle = circle_outline_points(center, edge, DEFAULT_CIRCLE_STEP_DEG);
    let stride = circle.len() / num;
    let mut vertices: Vec<GeographicCoordinate> =
        (0..num).map(|i| circle[i * stride]).collect();
    vertices.push(vertices[0]);
    Some(vertices)
}
