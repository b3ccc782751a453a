//! Quadratisches B-Spline-Resampling (Glättung der Angriffspfeil-Körperkanten).

use glam::DVec2;

/// Abtastschritt innerhalb eines Knoten-Spans.
const SAMPLE_STEP: f64 = 0.05;

/// Quadratische B-Spline-Basisfunktion für Kontrollpunkt-Index 0..2.
fn quadratic_bspline_factor(index: usize, t: f64) -> f64 {
    match index {
        0 => (t - 1.0) * (t - 1.0) / 2.0,
        1 => (-2.0 * t * t + 2.0 * t + 1.0) / 2.0,
        2 => t * t / 2.0,
        _ => 0.0,
    }
}

/// Glättet eine Punktfolge über die quadratische B-Spline-Basis.
///
/// Eingaben mit höchstens 2 Punkten werden unverändert zurückgegeben.
/// Pro Knoten-Span (3 aufeinanderfolgende Punkte) entstehen 20 Samples bei
/// t = 0, 0.05, …, 0.95; der erste und letzte Eingabepunkt werden
/// unverändert vorn bzw. hinten angefügt.
pub fn quadratic_bspline(points: &[DVec2]) -> Vec<DVec2> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let order = 2;
    let spans = points.len() - order - 1;
    let samples_per_span = (1.0 / SAMPLE_STEP) as usize;

    let mut result = Vec::with_capacity((spans + 1) * samples_per_span + 2);
    result.push(points[0]);
    for span in 0..=spans {
        for step in 0..samples_per_span {
            let t = step as f64 * SAMPLE_STEP;
            let mut point = DVec2::ZERO;
            for s in 0..=order {
                point += points[span + s] * quadratic_bspline_factor(s, t);
            }
            result.push(point);
        }
    }
    result.push(points[points.len() - 1]);
    result
}
