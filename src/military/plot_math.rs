//! Planare Plot-Hilfsfunktionen der Militär-Symbolik.
//!
//! Arbeitet auf `DVec2` in Grad (x = Längengrad, y = Breitengrad). Die
//! Azimut-Konvention stammt aus der Plot-Bibliothek der Vorlage und
//! unterscheidet sich bewusst vom geodätischen Vorwärts-Azimut in
//! `core::geometry` — beide Welten dürfen nicht vermischt werden.

use glam::DVec2;
use std::f64::consts::PI;

/// Euklidische Distanz zweier planarer Punkte.
pub fn distance(a: DVec2, b: DVec2) -> f64 {
    a.distance(b)
}

/// Gesamtlänge einer planaren Punktfolge.
pub fn whole_distance(points: &[DVec2]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Basislänge für Formfaktoren: Gesamtlänge^0.99.
pub fn base_length(points: &[DVec2]) -> f64 {
    whole_distance(points).powf(0.99)
}

/// Mittelpunkt zweier Punkte.
pub fn mid_point(a: DVec2, b: DVec2) -> DVec2 {
    (a + b) / 2.0
}

/// Plot-Azimut von `t` nach `o` (Quadranten-Fallunterscheidung der Vorlage).
pub fn azimuth(t: DVec2, o: DVec2) -> f64 {
    let r = ((o.y - t.y).abs() / t.distance(o)).asin();
    if o.y >= t.y && o.x >= t.x {
        r + PI
    } else if o.y >= t.y && o.x < t.x {
        2.0 * PI - r
    } else if o.y < t.y && o.x < t.x {
        r
    } else if o.y < t.y && o.x >= t.x {
        PI - r
    } else {
        0.0
    }
}

/// Punkt im Abstand `dist` von `o`, um `angle` gegenüber der Richtung
/// t→o gedreht (`clockwise` wählt die Drehrichtung).
pub fn third_point(t: DVec2, o: DVec2, angle: f64, dist: f64, clockwise: bool) -> DVec2 {
    let base = azimuth(t, o);
    let direction = if clockwise { base + angle } else { base - angle };
    o + DVec2::new(dist * direction.cos(), dist * direction.sin())
}

/// Innenwinkel am Punkt `o` zwischen den Strahlen o→t und o→e, in [0, 2π).
pub fn angle_of_three_points(t: DVec2, o: DVec2, e: DVec2) -> f64 {
    let angle = azimuth(o, t) - azimuth(o, e);
    if angle < 0.0 {
        angle + 2.0 * PI
    } else {
        angle
    }
}

/// Liegt das Dreieck (a, b, c) im Uhrzeigersinn?
pub fn is_clockwise(a: DVec2, b: DVec2, c: DVec2) -> bool {
    (c.y - a.y) * (b.x - a.x) > (b.y - a.y) * (c.x - a.x)
}

/// Löst die beiden Vektoren der Länge `d`, die mit dem Basisvektor `v`
/// den Winkel `theta` einschließen (quadratische Gleichung).
///
/// Rückgabe `[links, rechts]`, ausgewählt über das Vorzeichen der
/// y-Komponente von `v`; der Fall `v.y == 0` wird gesondert gelöst.
pub fn calculate_vector(v: DVec2, theta: f64, d: f64) -> [DVec2; 2] {
    let v_len = v.length();

    if v.y == 0.0 {
        let x = v_len * d * theta.cos() / v.x;
        let y = (d * d - x * x).sqrt();
        return if v.x > 0.0 {
            [DVec2::new(x, y), DVec2::new(x, -y)]
        } else {
            [DVec2::new(x, -y), DVec2::new(x, y)]
        };
    }

    let n = -v.x / v.y;
    let m = d * v_len * theta.cos() / v.y;
    let a = 1.0 + n * n;
    let b = 2.0 * n * m;
    let c = m * m - d * d;
    let root = (b * b - 4.0 * a * c).sqrt();
    let x1 = (-b - root) / (2.0 * a);
    let x2 = (-b + root) / (2.0 * a);
    let p1 = DVec2::new(x1, n * x1 + m);
    let p2 = DVec2::new(x2, n * x2 + m);

    if v.y >= 0.0 {
        [p1, p2]
    } else {
        [p2, p1]
    }
}
