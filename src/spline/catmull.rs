//! Catmull-Rom-Spline über kartesische Punkte mit nicht-uniformen Zeiten.
//!
//! Wird für die Zeit-Parametrisierung der Patrouillenlinie genutzt:
//! die Knoten-Zeiten entsprechen der kumulierten Fahrzeit entlang des
//! Pfads, nicht dem Punkt-Index.

use glam::DVec3;

/// Interpolierende Spline durch `points` mit streng wachsenden `times`.
#[derive(Debug, Clone)]
pub struct TimedCatmullRom {
    times: Vec<f64>,
    points: Vec<DVec3>,
    /// Tangenten (finite Differenzen, an den Rändern einseitig)
    tangents: Vec<DVec3>,
}

impl TimedCatmullRom {
    /// Erstellt die Spline; `None` bei weniger als 2 Punkten oder
    /// ungleich langen Eingaben.
    pub fn new(times: Vec<f64>, points: Vec<DVec3>) -> Option<Self> {
        if points.len() < 2 || times.len() != points.len() {
            return None;
        }

        let n = points.len();
        let mut tangents = Vec::with_capacity(n);
        tangents.push((points[1] - points[0]) / (times[1] - times[0]));
        for i in 1..n - 1 {
            tangents.push((points[i + 1] - points[i - 1]) / (times[i + 1] - times[i - 1]));
        }
        tangents.push((points[n - 1] - points[n - 2]) / (times[n - 1] - times[n - 2]));

        Some(Self {
            times,
            points,
            tangents,
        })
    }

    /// Start der Parametrisierung.
    pub fn start_time(&self) -> f64 {
        self.times[0]
    }

    /// Ende der Parametrisierung.
    pub fn end_time(&self) -> f64 {
        self.times[self.times.len() - 1]
    }

    /// Wertet die Spline an der Stelle `t` aus; `t` wird auf den
    /// Zeitbereich geklemmt.
    pub fn evaluate(&self, t: f64) -> DVec3 {
        let t = t.clamp(self.start_time(), self.end_time());

        // Span-Suche: Knotenzahl ist klein, lineare Suche reicht
        let mut i = 0;
        while i + 2 < self.times.len() && t >= self.times[i + 1] {
            i += 1;
        }

        let dt = self.times[i + 1] - self.times[i];
        let u = (t - self.times[i]) / dt;
        let u2 = u * u;
        let u3 = u2 * u;

        let h00 = 2.0 * u3 - 3.0 * u2 + 1.0;
        let h10 = u3 - 2.0 * u2 + u;
        let h01 = -2.0 * u3 + 3.0 * u2;
        let h11 = u3 - u2;

        self.points[i] * h00
            + self.tangents[i] * (h10 * dt)
            + self.points[i + 1] * h01
            + self.tangents[i + 1] * (h11 * dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn spline() -> TimedCatmullRom {
        TimedCatmullRom::new(
            vec![0.0, 0.25, 0.75, 1.0],
            vec![
                DVec3::new(0.0, 0.0, 0.0),
                DVec3::new(1.0, 1.0, 0.0),
                DVec3::new(3.0, 1.0, 0.0),
                DVec3::new(4.0, 0.0, 0.0),
            ],
        )
        .expect("gültige Spline")
    }

    #[test]
    fn test_rejects_invalid_input() {
        assert!(TimedCatmullRom::new(vec![0.0], vec![DVec3::ZERO]).is_none());
        assert!(TimedCatmullRom::new(vec![0.0, 1.0], vec![DVec3::ZERO]).is_none());
    }

    #[test]
    fn test_interpolates_knots() {
        let s = spline();
        for (t, expected) in [
            (0.0, DVec3::new(0.0, 0.0, 0.0)),
            (0.25, DVec3::new(1.0, 1.0, 0.0)),
            (0.75, DVec3::new(3.0, 1.0, 0.0)),
            (1.0, DVec3::new(4.0, 0.0, 0.0)),
        ] {
            let p = s.evaluate(t);
            assert_relative_eq!(p.x, expected.x, epsilon = 1e-12);
            assert_relative_eq!(p.y, expected.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_evaluate_clamps_to_range() {
        let s = spline();
        assert_eq!(s.evaluate(-1.0), s.evaluate(0.0));
        assert_eq!(s.evaluate(2.0), s.evaluate(1.0));
    }

    #[test]
    fn test_continuous_between_spans() {
        let s = spline();
        let before = s.evaluate(0.25 - 1e-9);
        let after = s.evaluate(0.25 + 1e-9);
        assert!(before.distance(after) < 1e-6);
    }
}
