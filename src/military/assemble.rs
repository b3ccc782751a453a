//! Sammelraum-Symbol (Kollektionspunkt): glatter geschlossener Blob
//! aus zwei Ankerpunkten.

use glam::DVec2;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, PI};

use crate::core::GeographicCoordinate;
use crate::spline::{calculate_points_fbz3, create_close_cardinal};

use super::plot_math::calculate_vector;

/// Die sechs Stützpunkte des Sammelraums aus zwei Ankern.
///
/// Zwei Seitenpunkte entstehen über 60°-/120°-Drehungen des
/// Ankervektors (Abstand √3/12 der Anker-Distanz), der Scheitel über
/// eine 90°-Drehung am Mittelpunkt (halbe Anker-Distanz).
fn assemble_anchor_points(origin: DVec2, last: DVec2) -> [DVec2; 6] {
    let v = last - origin;
    let d = v.length();
    let side_distance = 3f64.sqrt() / 12.0 * d;

    let side = calculate_vector(v, FRAC_PI_3, side_distance)[1];
    let p1 = origin + side;
    let p2 = (origin + last) / 2.0;
    let side_far = calculate_vector(v, 2.0 * PI / 3.0, side_distance)[1];
    let p3 = last + side_far;
    let apex = calculate_vector(v, FRAC_PI_2, d / 2.0)[0];
    let p5 = apex + p2;

    [origin, p1, p2, p3, last, p5]
}

/// Sammelraum-Polygon aus zwei Ankerpunkten.
///
/// Weniger als 2 Anker ⇒ Eingabe unverändert. Die sechs Stützpunkte laufen
/// durch die geschlossene Cardinal-Spline und die Bézier-Unterteilung
/// (part = 100); der Ring schließt auf seinen ersten Punkt.
pub fn assemble_points(anchors: &[GeographicCoordinate]) -> Vec<GeographicCoordinate> {
    if anchors.len() < 2 {
        return anchors.to_vec();
    }

    let support_points = assemble_anchor_points(anchors[0].planar(), anchors[1].planar());
    let cardinal = create_close_cardinal(&support_points);
    let blob = calculate_points_fbz3(&cardinal, 100);

    let mut result: Vec<GeographicCoordinate> = blob
        .into_iter()
        .map(|p| GeographicCoordinate::from_planar(p, 0.0))
        .collect();
    if let Some(&first) = result.first() {
        result.push(first);
    }
    result
}
