//! Geschlossene Cardinal-Spline-Konstruktion und kubische
//! Bézier-Unterteilung.
//!
//! `create_close_cardinal` erzeugt aus einer Punktfolge das flache
//! Kontrollpunkt-Array `[P0, P0r, P1l, P1, P1r, …, P0l, P0]`, das
//! anschließend in 4er-Gruppen (Start, Griff, Griff, Ende) von
//! `calculate_points_fbz3` abgetastet wird.

use glam::DVec2;

/// Fester Spannungs-Koeffizient der Cardinal-Konstruktion (0 < t < 0.5).
const CARDINAL_TENSION: f64 = 0.4;
/// Kollinearitäts-Toleranz: |1 − cos| unter diesem Wert gilt als kollinear.
const COLLINEAR_EPSILON: f64 = 0.005;
/// Standard-Unterteilung pro Bézier-Gruppe.
const DEFAULT_BEZIER_PART: usize = 20;

/// Erzeugt die geschlossene Cardinal-Kontrollpunktfolge.
///
/// Weniger als 3 Punkte werden unverändert zurückgegeben. Der erste Punkt
/// wird als synthetischer Schlusspunkt angehängt; für jeden Knoten entsteht
/// ein Links-/Rechts-Griffpaar entlang der Winkelhalbierenden der ein- und
/// ausgehenden Kantenrichtungen, mit Kollinear-Fallback. Das Umlauf-Segment
/// (letzter → erster Punkt) wird über den Array-Anfang und das Array-Ende
/// verteilt abgelegt.
pub fn create_close_cardinal(points: &[DVec2]) -> Vec<DVec2> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut c_points = points.to_vec();
    c_points.push(c_points[0]);

    let n = c_points.len() - 1;
    let mut cardinal = vec![DVec2::ZERO; (n - 1) * 3 + 4];

    for k in 0..n {
        // Am Umlauf-Segment liefert der letzte Durchlauf die Griffe des Startpunkts
        let (p0, p1, p2) = if k == n - 1 {
            (c_points[n - 1], c_points[0], c_points[1])
        } else {
            (c_points[k], c_points[k + 1], c_points[k + 2])
        };

        let v01 = p1 - p0;
        let v12 = p2 - p1;
        let d01 = v01.length();
        let d12 = v12.length();
        let u01 = v01 / d01;
        let u12 = v12 / d12;

        // Winkelhalbierende der beiden Kantenrichtungen
        let bisector = u01 + u12;
        let bisector_unit = bisector / bisector.length();
        let cos_angle = u01.dot(u12);

        let (left, right) = if (1.0 - cos_angle).abs() < COLLINEAR_EPSILON {
            (
                p1 - u12 * d01 * CARDINAL_TENSION,
                p1 + u01 * d12 * CARDINAL_TENSION,
            )
        } else {
            (
                p1 - bisector_unit * d01 * CARDINAL_TENSION,
                p1 + bisector_unit * d12 * CARDINAL_TENSION,
            )
        };

        if k == n - 1 {
            cardinal[0] = p1;
            cardinal[1] = right;
            cardinal[(n - 2) * 3 + 5] = left;
            cardinal[(n - 2) * 3 + 6] = c_points[n];
        } else {
            cardinal[k * 3 + 2] = left;
            cardinal[k * 3 + 3] = p1;
            cardinal[k * 3 + 4] = right;
        }
    }

    cardinal
}

/// Kubische Bézier-Unterteilung der Cardinal-Kontrollpunktfolge.
///
/// Läuft in 4er-Gruppen (Schrittweite 3) über das Array und emittiert je
/// Gruppe den Startpunkt plus `part` Samples bei t = k/part, k in 0..part.
/// `part == 0` fällt auf 20 zurück.
pub fn calculate_points_fbz3(points: &[DVec2], part: usize) -> Vec<DVec2> {
    let part = if part == 0 { DEFAULT_BEZIER_PART } else { part };
    let scale = 1.0 / part as f64;

    let group_count = points.len().saturating_sub(1) / 3;
    let mut bezier = Vec::with_capacity(group_count * (part + 1));

    let mut i = 0;
    while i + 3 < points.len() {
        let start = points[i];
        let control1 = points[i + 1];
        let control2 = points[i + 2];
        let end = points[i + 3];

        bezier.push(start);
        for k in 0..part {
            let t = k as f64 * scale;
            let v = 1.0 - t;
            let point = start * (v * v * v)
                + control1 * (3.0 * t * v * v)
                + control2 * (3.0 * t * t * v)
                + end * (t * t * t);
            bezier.push(point);
        }

        i += 3;
    }

    bezier
}

/// Berechnet die geschlossene glatte Kurve durch die Ankerpunkte.
///
/// Cardinal-Konstruktion → nicht-finite Kontrolleinträge verwerfen →
/// Bézier-Unterteilung mit part = 100 → Ring-Schluss auf den ersten
/// Ausgabepunkt.
pub fn create_close_curve(anchors: &[DVec2]) -> Vec<DVec2> {
    let cardinal: Vec<DVec2> = create_close_cardinal(anchors)
        .into_iter()
        .filter(|p| p.x.is_finite() && p.y.is_finite())
        .collect();

    let mut result = calculate_points_fbz3(&cardinal, 100);
    if let Some(&first) = result.first() {
        result.push(first);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<DVec2> {
        vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn test_cardinal_too_few_points_unchanged() {
        let two = vec![DVec2::ZERO, DVec2::ONE];
        assert_eq!(create_close_cardinal(&two), two);
    }

    #[test]
    fn test_cardinal_layout() {
        let cardinal = create_close_cardinal(&square());
        // 4 Eingabepunkte + Schlusspunkt → n = 4 → 3n + 1 Kontrolleinträge
        assert_eq!(cardinal.len(), 13);
        // Startpunkt am Anfang, Schlusspunkt (== Startpunkt) am Ende
        assert_eq!(cardinal[0], DVec2::new(0.0, 0.0));
        assert_eq!(cardinal[12], DVec2::new(0.0, 0.0));
        // Knoten an den Indizes 3, 6, 9
        assert_eq!(cardinal[3], DVec2::new(1.0, 0.0));
        assert_eq!(cardinal[6], DVec2::new(1.0, 1.0));
        assert_eq!(cardinal[9], DVec2::new(0.0, 1.0));
    }

    #[test]
    fn test_cardinal_handles_stay_near_their_knot() {
        let cardinal = create_close_cardinal(&square());
        // Griffe liegen höchstens tension · Kantenlänge vom Knoten entfernt
        for knot_index in [3, 6, 9] {
            let knot = cardinal[knot_index];
            assert!(cardinal[knot_index - 1].distance(knot) <= 0.4 + 1e-12);
            assert!(cardinal[knot_index + 1].distance(knot) <= 0.4 + 1e-12);
        }
    }

    #[test]
    fn test_fbz3_sample_count() {
        let cardinal = create_close_cardinal(&square());
        let result = calculate_points_fbz3(&cardinal, 100);
        // 4 Bézier-Gruppen à (Startpunkt + 100 Samples)
        assert_eq!(result.len(), 4 * 101);
    }

    #[test]
    fn test_fbz3_zero_part_falls_back() {
        let cardinal = create_close_cardinal(&square());
        let result = calculate_points_fbz3(&cardinal, 0);
        assert_eq!(result.len(), 4 * 21);
    }

    #[test]
    fn test_close_curve_ring_closure_and_density() {
        let anchors = square();
        let result = create_close_curve(&anchors);
        assert!(result.len() > anchors.len());
        assert_eq!(result.first(), result.last());
        assert!(result.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn test_close_curve_interpolates_anchor_knots() {
        let anchors = square();
        let result = create_close_curve(&anchors);
        // Jeder Ankerpunkt taucht als Gruppen-Startpunkt in der Ausgabe auf
        for anchor in &anchors {
            assert!(result
                .iter()
                .any(|p| p.distance(*anchor) < 1e-12));
        }
    }

    #[test]
    fn test_close_curve_survives_duplicate_anchor() {
        // Doppelter Ankerpunkt erzeugt nicht-finite Griffe, die verworfen werden
        let mut anchors = square();
        anchors.push(anchors[3]);
        let result = create_close_curve(&anchors);
        assert!(result.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn test_collinear_fallback_produces_finite_handles() {
        let line_with_corner = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(2.0, 0.0),
            DVec2::new(2.0, 2.0),
        ];
        let cardinal = create_close_cardinal(&line_with_corner);
        assert!(cardinal.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }
}
