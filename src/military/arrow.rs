//! Angriffspfeil mit Schwalbenschwanz.
//!
//! Konstruiert aus ≥ 3 Kontrollpunkten einen geschlossenen Polygon-Ring:
//! Pfeilspitze mit Widerhaken und Hals, konisch zulaufende Körperkanten
//! (per quadratischem B-Spline geglättet) und Schwalbenschwanz-Kerbe.

use glam::DVec2;
use std::f64::consts::FRAC_PI_2;

use crate::core::GeographicCoordinate;
use crate::spline::quadratic_bspline;

use super::plot_math::{
    angle_of_three_points, base_length, distance, is_clockwise, mid_point, third_point,
    whole_distance,
};

/// Formfaktoren des Angriffspfeils.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackArrowFactors {
    /// Kopfhöhe relativ zur Basislänge
    pub head_height: f64,
    /// Kopfbreite relativ zur Kopfhöhe
    pub head_width: f64,
    /// Halshöhe relativ zur Kopfhöhe
    pub neck_height: f64,
    /// Halsbreite relativ zur Kopfhöhe
    pub neck_width: f64,
    /// Schwanzbreite relativ zur Basislänge
    pub tail_width: f64,
    /// Obergrenze der Kopfhöhe relativ zur Schwanz-Spannweite
    pub head_tail: f64,
    /// Länge der Schwalbenschwanz-Kerbe relativ zur Schwanzbreite
    pub swallow_tail: f64,
}

impl Default for AttackArrowFactors {
    fn default() -> Self {
        Self {
            head_height: 0.18,
            head_width: 0.3,
            neck_height: 0.85,
            neck_width: 0.15,
            tail_width: 0.1,
            head_tail: 0.8,
            swallow_tail: 1.0,
        }
    }
}

/// Entfernt aufeinanderfolgende Duplikate aus der Kontrollpunktfolge.
fn dereplicate(points: &[DVec2]) -> Vec<DVec2> {
    let mut result: Vec<DVec2> = Vec::with_capacity(points.len());
    for &p in points {
        if result.last() != Some(&p) {
            result.push(p);
        }
    }
    result
}

/// Kopfpunkte des Pfeils: [Hals links, Kopf links, Spitze, Kopf rechts, Hals rechts].
///
/// `body` ist die Achse (Schwanz-Mitte + restliche Kontrollpunkte); die
/// Kopfhöhe wird auf `head_tail` × Schwanz-Spannweite und auf die Länge
/// des letzten Achsen-Segments geklemmt.
fn attack_arrow_head_points(
    body: &[DVec2],
    tail_left: DVec2,
    tail_right: DVec2,
    factors: &AttackArrowFactors,
) -> [DVec2; 5] {
    let mut head_height = base_length(body) * factors.head_height;
    let tip = body[body.len() - 1];
    let last_segment = distance(tip, body[body.len() - 2]);
    let tail_span = distance(tail_left, tail_right);

    if head_height > tail_span * factors.head_tail {
        head_height = tail_span * factors.head_tail;
    }
    // Breiten vor der Klemmung auf das letzte Segment bestimmen
    let head_width = head_height * factors.head_width;
    let neck_width = head_height * factors.neck_width;
    head_height = head_height.min(last_segment);
    let neck_height = head_height * factors.neck_height;

    let head_base = third_point(body[body.len() - 2], tip, 0.0, head_height, true);
    let neck_base = third_point(body[body.len() - 2], tip, 0.0, neck_height, true);
    let head_left = third_point(tip, head_base, FRAC_PI_2, head_width, false);
    let head_right = third_point(tip, head_base, FRAC_PI_2, head_width, true);
    let neck_left = third_point(tip, neck_base, FRAC_PI_2, neck_width, false);
    let neck_right = third_point(tip, neck_base, FRAC_PI_2, neck_width, true);

    [neck_left, head_left, tip, head_right, neck_right]
}

/// Körperkanten-Punkte: linke Kette gefolgt von rechter Kette.
///
/// Jeder innere Achsenpunkt wird senkrecht zu seiner lokalen
/// Winkelhalbierenden versetzt; die Breite verjüngt sich linear vom
/// Schwanz zum Hals.
fn attack_arrow_body_points(
    body: &[DVec2],
    neck_left: DVec2,
    neck_right: DVec2,
    tail_width_factor: f64,
) -> Vec<DVec2> {
    let total = whole_distance(body);
    let tail_width = base_length(body) * tail_width_factor;
    let neck_span = distance(neck_left, neck_right);
    let taper = (tail_width - neck_span) / 2.0;

    let mut travelled = 0.0;
    let mut left = Vec::with_capacity(body.len() - 2);
    let mut right = Vec::with_capacity(body.len() - 2);
    for i in 1..body.len() - 1 {
        let half_angle = angle_of_three_points(body[i - 1], body[i], body[i + 1]) / 2.0;
        travelled += distance(body[i - 1], body[i]);
        let offset = (tail_width / 2.0 - travelled / total * taper) / half_angle.sin();
        left.push(third_point(
            body[i - 1],
            body[i],
            std::f64::consts::PI - half_angle,
            offset,
            true,
        ));
        right.push(third_point(body[i - 1], body[i], half_angle, offset, false));
    }

    left.extend(right);
    left
}

/// Konstruiert den geschlossenen Angriffspfeil-Ring aus planaren Kontrollpunkten.
///
/// Nach Duplikat-Entfernung sind mindestens 3 Punkte nötig, sonst ist das
/// Ergebnis leer. Nicht-finite Zwischenergebnisse (degenerierte Geometrie)
/// führen ebenfalls zu einem leeren Ring — nie zu einem Panic.
pub fn tailed_attack_arrow(input: &[DVec2]) -> Vec<DVec2> {
    tailed_attack_arrow_with(input, &AttackArrowFactors::default())
}

/// Wie [`tailed_attack_arrow`], mit expliziten Formfaktoren.
pub fn tailed_attack_arrow_with(input: &[DVec2], factors: &AttackArrowFactors) -> Vec<DVec2> {
    let points = dereplicate(input);
    if points.len() <= 2 {
        return Vec::new();
    }

    // Konsistente Windung: Schwanzpunkte bei Uhrzeigersinn tauschen
    let (tail_left, tail_right) = if is_clockwise(points[0], points[1], points[2]) {
        (points[1], points[0])
    } else {
        (points[0], points[1])
    };

    // Achse: Schwanz-Mitte + restliche Kontrollpunkte
    let mut body = Vec::with_capacity(points.len() - 1);
    body.push(mid_point(tail_left, tail_right));
    body.extend_from_slice(&points[2..]);

    let head = attack_arrow_head_points(&body, tail_left, tail_right, factors);
    let neck_left = head[0];
    let neck_right = head[4];

    let tail_span = distance(tail_left, tail_right);
    let base = base_length(&body);
    let notch_length = base * factors.tail_width * factors.swallow_tail;
    let swallow_tail_point = third_point(body[1], body[0], 0.0, notch_length, true);

    let body_points = attack_arrow_body_points(&body, neck_left, neck_right, tail_span / base);
    let half = body_points.len() / 2;

    let mut left_chain = Vec::with_capacity(half + 2);
    left_chain.push(tail_left);
    left_chain.extend_from_slice(&body_points[..half]);
    left_chain.push(neck_left);

    let mut right_chain = Vec::with_capacity(half + 2);
    right_chain.push(tail_right);
    right_chain.extend_from_slice(&body_points[half..]);
    right_chain.push(neck_right);

    let left_chain = quadratic_bspline(&left_chain);
    let mut right_chain = quadratic_bspline(&right_chain);
    right_chain.reverse();

    let mut ring = left_chain;
    ring.extend_from_slice(&head);
    ring.extend(right_chain);
    ring.push(swallow_tail_point);
    ring.push(ring[0]);

    if ring.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return Vec::new();
    }
    ring
}

/// Geographischer Wrapper: Kontrollpunkte → geschlossener Pfeil-Ring.
pub fn attack_arrow_ring(positions: &[GeographicCoordinate]) -> Vec<GeographicCoordinate> {
    let planar: Vec<DVec2> = positions.iter().map(|c| c.planar()).collect();
    tailed_attack_arrow(&planar)
        .into_iter()
        .map(|p| GeographicCoordinate::from_planar(p, 0.0))
        .collect()
}
