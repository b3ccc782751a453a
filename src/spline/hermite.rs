//! Hermite-Splines: globale natürliche kubische Spline und
//! Corner-Variante mit per-Knoten-Tangenten.

use glam::DVec2;

use crate::core::GeographicCoordinate;

use super::linear::eval_linear_scalar;

/// Standard-Abtastanzahl der natürlichen kubischen Spline.
pub const DEFAULT_HERMITE_SAMPLES: usize = 300;
/// Standard-Zwischenpunktzahl der Corner-Hermite-Spline.
pub const DEFAULT_CORNER_RESOLUTION: usize = 10;
/// Standard-Schärfe (Tangenten-Skalierung) der Corner-Hermite-Spline.
pub const DEFAULT_CORNER_SHARPNESS: f64 = 0.1;

// ── Natürliche kubische Spline ──────────────────────────────────────

/// Löst das Tridiagonal-System der natürlichen kubischen Spline
/// (zweite Ableitungen, Randbedingung M₀ = Mₙ = 0) für uniforme Knoten.
fn natural_second_derivatives(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    let mut m = vec![0.0; n];
    if n < 3 {
        return m;
    }

    // Thomas-Algorithmus für M[i-1] + 4·M[i] + M[i+1] = 6·(v[i-1] - 2v[i] + v[i+1])
    let interior = n - 2;
    let mut diag = vec![4.0; interior];
    let mut rhs: Vec<f64> = (1..n - 1)
        .map(|i| 6.0 * (values[i - 1] - 2.0 * values[i] + values[i + 1]))
        .collect();

    for i in 1..interior {
        let factor = 1.0 / diag[i - 1];
        diag[i] -= factor;
        rhs[i] -= factor * rhs[i - 1];
    }
    m[n - 2] = rhs[interior - 1] / diag[interior - 1];
    for i in (0..interior - 1).rev() {
        m[i + 1] = (rhs[i] - m[i + 2]) / diag[i];
    }
    m
}

/// Wertet die natürliche kubische Spline an der Stelle `t` aus
/// (uniforme Knoten 0..n-1, `m` = zweite Ableitungen).
fn eval_natural(values: &[f64], m: &[f64], t: f64) -> f64 {
    let last = values.len() - 1;
    let i = (t.floor().max(0.0) as usize).min(last - 1);
    let u = t - i as f64;
    let v = 1.0 - u;
    m[i] * v * v * v / 6.0
        + m[i + 1] * u * u * u / 6.0
        + (values[i] - m[i] / 6.0) * v
        + (values[i + 1] - m[i + 1] / 6.0) * u
}

/// Globale natürliche kubische Spline durch alle Kontrollpunkte.
///
/// Weniger als 3 Punkte oder `itp_num <= n` geben die Eingabe unverändert
/// zurück. Abtastung uniform nach Anzahl: `itp_num + 1` Punkte bei
/// t = (i / itp_num) · (n - 1). Die Höhe der Ausgabe ist 0.
pub fn hermite_spline_curve(
    coords: &[GeographicCoordinate],
    itp_num: usize,
) -> Vec<GeographicCoordinate> {
    let n = coords.len();
    if n < 3 || itp_num <= n {
        return coords.to_vec();
    }

    let lons: Vec<f64> = coords.iter().map(|c| c.longitude).collect();
    let lats: Vec<f64> = coords.iter().map(|c| c.latitude).collect();
    let m_lon = natural_second_derivatives(&lons);
    let m_lat = natural_second_derivatives(&lats);

    let span = (n - 1) as f64;
    let mut result = Vec::with_capacity(itp_num + 1);
    for i in 0..=itp_num {
        let t = i as f64 / itp_num as f64 * span;
        result.push(GeographicCoordinate::new(
            eval_natural(&lons, &m_lon, t),
            eval_natural(&lats, &m_lat, t),
            0.0,
        ));
    }
    result
}

// ── Corner-Hermite-Spline ───────────────────────────────────────────

/// Kubische Hermite-Basis für Segment-Auswertung (uniforme Knoten).
fn hermite_segment(p0: DVec2, out_tangent: DVec2, p1: DVec2, in_tangent: DVec2, u: f64) -> DVec2 {
    let u2 = u * u;
    let u3 = u2 * u;
    let h00 = 2.0 * u3 - 3.0 * u2 + 1.0;
    let h10 = u3 - 2.0 * u2 + u;
    let h01 = -2.0 * u3 + 3.0 * u2;
    let h11 = u3 - u2;
    p0 * h00 + out_tangent * h10 + p1 * h01 + in_tangent * h11
}

/// Corner-Hermite-Spline mit per-Knoten-Tangenten-Blending.
///
/// Tangente jedes inneren Kontrollpunkts: `(next - prev) / 2 * sharpness`
/// (Catmull-Rom-artig); am Startpunkt die einseitige Differenz mal
/// `sharpness`, die Eingangs-Tangente des letzten Segments ist 0.
/// Weniger als 3 Punkte geben die Eingabe unverändert zurück. Layout und
/// Knoten-Index-Garantie wie bei der linearen Spline; die Höhe wird über
/// eine separate lineare Spline auf derselben Parametrisierung interpoliert.
pub fn hermite_spline_corner_curve(
    coords: &[GeographicCoordinate],
    resolution: usize,
    sharpness: f64,
) -> Vec<GeographicCoordinate> {
    let n = coords.len();
    if n < 3 || resolution == 0 {
        return coords.to_vec();
    }

    let points: Vec<DVec2> = coords.iter().map(|c| c.planar()).collect();
    let heights: Vec<f64> = coords.iter().map(|c| c.height).collect();

    let segments = n - 1;
    // Tangenten: out_tangents[i] verlässt Punkt i, in_tangents[i] erreicht Punkt i+1
    let mut out_tangents = vec![DVec2::ZERO; segments];
    let mut in_tangents = vec![DVec2::ZERO; segments];
    for i in 1..segments {
        let tangent = (points[i + 1] - points[i - 1]) * 0.5 * sharpness;
        out_tangents[i] = tangent;
        in_tangents[i - 1] = tangent;
    }
    out_tangents[0] = (points[1] - points[0]) * sharpness;
    in_tangents[segments - 1] = DVec2::ZERO;

    let total = segments * resolution + n;
    let mut result = vec![GeographicCoordinate::default(); total];

    for (i, coord) in coords.iter().enumerate() {
        result[i * resolution + i] = *coord;
    }

    for i in 0..segments {
        let start_j = i * resolution + i + 1;
        for j in start_j..start_j + resolution {
            let t = (j * segments) as f64 / total as f64;
            let seg = (t.floor().max(0.0) as usize).min(segments - 1);
            let u = t - seg as f64;
            let p = hermite_segment(
                points[seg],
                out_tangents[seg],
                points[seg + 1],
                in_tangents[seg],
                u,
            );
            let h = eval_linear_scalar(&heights, t);
            result[j] = GeographicCoordinate::new(p.x, p.y, h);
        }
    }

    result
}
