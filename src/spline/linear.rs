//! Lineare Spline-Interpolation mit uniformen Knoten.
//!
//! Die Ausgabe enthält die Original-Kontrollpunkte exakt an den
//! vorhersagbaren Indizes `i * (resolution + 1)`; dazwischen liegen
//! `resolution` interpolierte Zwischenpunkte pro Segment. Die Höhe wird
//! unabhängig von der planaren Position linear interpoliert.

use glam::DVec2;

use crate::core::GeographicCoordinate;

/// Standard-Anzahl Zwischenpunkte pro Segment.
pub const DEFAULT_LINEAR_RESOLUTION: usize = 10;

/// Wertet eine lineare Spline mit uniformen Knoten 0..n-1 an der Stelle `t` aus.
pub(crate) fn eval_linear(points: &[DVec2], t: f64) -> DVec2 {
    let last = points.len() - 1;
    let i = (t.floor().max(0.0) as usize).min(last - 1);
    let u = t - i as f64;
    points[i].lerp(points[i + 1], u)
}

/// Skalar-Variante von [`eval_linear`] (Höhen-Interpolation).
pub(crate) fn eval_linear_scalar(values: &[f64], t: f64) -> f64 {
    let last = values.len() - 1;
    let i = (t.floor().max(0.0) as usize).min(last - 1);
    let u = t - i as f64;
    values[i] + (values[i + 1] - values[i]) * u
}

/// Stückweise-lineare Verdichtung einer Kontrollpunkt-Folge.
///
/// Weniger als 2 Punkte werden unverändert zurückgegeben. Ausgabelänge:
/// `(n - 1) * resolution + n`; Kontrollpunkt `i` liegt exakt bei Index
/// `i * (resolution + 1)`.
pub fn linear_spline_curve(
    coords: &[GeographicCoordinate],
    resolution: usize,
) -> Vec<GeographicCoordinate> {
    let n = coords.len();
    if n < 2 || resolution == 0 {
        return coords.to_vec();
    }

    let points: Vec<DVec2> = coords.iter().map(|c| c.planar()).collect();
    let heights: Vec<f64> = coords.iter().map(|c| c.height).collect();

    let segments = n - 1;
    let total = segments * resolution + n;
    let mut result = vec![GeographicCoordinate::default(); total];

    // Original-Kontrollpunkte unverändert an ihre Knoten-Indizes
    for (i, coord) in coords.iter().enumerate() {
        result[i * resolution + i] = *coord;
    }

    // Zwischenpunkte je Segment
    for i in 0..segments {
        let start_j = i * resolution + i + 1;
        for j in start_j..start_j + resolution {
            let t = (j * segments) as f64 / total as f64;
            let p = eval_linear(&points, t);
            let h = eval_linear_scalar(&heights, t);
            result[j] = GeographicCoordinate::new(p.x, p.y, h);
        }
    }

    result
}
