//! Patrouillenlinie und Formations-Markierung.
//!
//! Beide Symbole parametrisieren den gezeichneten Pfad über die kumulierte
//! Fahrzeit bei fester Nenngeschwindigkeit (50 Knoten) statt über den
//! Punkt-Index — der sichtbare Abstand dekorativer Elemente bleibt damit
//! proportional zur realen Distanz.

use glam::{DVec2, DVec3};

use crate::core::{
    bearing, east_north_up, haversine_km, to_cartesian, to_geographic, Ellipsoid,
    GeographicCoordinate,
};
use crate::spline::TimedCatmullRom;

/// Nenngeschwindigkeit in Knoten.
const PATROL_SPEED_KNOTS: f64 = 50.0;
/// Halbe Breite des Unterbrechungs-Fensters (Zeiteinheiten der Parametrisierung).
const BREAK_HALF_WINDOW: f64 = 2000.0;
/// Sample-Anzahl je Teillinie.
const LINE_SAMPLES: usize = 300;
/// Obergrenze der Zeichenkachel-Breite in Metern.
const MAX_FONT_WIDTH_M: f64 = 25_000.0;
/// Linker Innenabstand der Text-Platzierung auf der Kurve.
const TEXT_PADDING_LEFT: f64 = 0.1;
/// Skalierungsbasis dekorativer Icon-Linien in Metern.
const ICON_SCALE_M: f64 = 100_000.0;

/// Kumulierte Fahrzeiten entlang des Pfads, normalisiert auf [0, 1].
///
/// Rückgabe: (normalisierte Zeiten, Gesamtfahrzeit in Sekunden).
pub fn travel_times(coords: &[GeographicCoordinate]) -> (Vec<f64>, f64) {
    let speed_ms = PATROL_SPEED_KNOTS * 1852.0 / 3600.0;

    let mut times = Vec::with_capacity(coords.len());
    let mut total = 0.0;
    for (i, coord) in coords.iter().enumerate() {
        if i == 0 {
            times.push(0.0);
        } else {
            let segment_m = haversine_km(&coords[i - 1], coord) * 1000.0;
            total += segment_m / speed_ms;
            times.push(total);
        }
    }
    if total > 0.0 {
        for t in &mut times {
            *t /= total;
        }
    }
    (times, total)
}

/// Zeit-parametrisierte Spline über den kartesischen Pfad.
fn simulate_curve(coords: &[GeographicCoordinate]) -> Option<(TimedCatmullRom, f64)> {
    let (times, count_time) = travel_times(coords);
    let cartesian: Vec<DVec3> = coords
        .iter()
        .map(|c| to_cartesian(c, &Ellipsoid::WGS84, 1.0))
        .collect();
    let spline = TimedCatmullRom::new(times, cartesian)?;
    Some((spline, count_time))
}

/// 300 Samples der Spline zwischen `start` und `end`.
fn sample_line(spline: &TimedCatmullRom, start: f64, end: f64) -> Vec<DVec3> {
    let step = (end - start) / LINE_SAMPLES as f64;
    (0..LINE_SAMPLES)
        .map(|i| spline.evaluate(start + i as f64 * step))
        .collect()
}

/// Kurs zwischen zwei kartesischen Punkten in Grad [0, 360).
fn heading_between(a: DVec3, b: DVec3) -> f64 {
    let geo_a = to_geographic(a, &Ellipsoid::WGS84, 1.0);
    let geo_b = to_geographic(b, &Ellipsoid::WGS84, 1.0);
    bearing(&geo_a, &geo_b)
}

/// Ergebnis der Unterbrechungs-Berechnung einer Patrouillenlinie.
#[derive(Debug, Clone)]
pub struct PatrolBreak {
    /// Teillinie vor der Unterbrechung
    pub line1: Vec<DVec3>,
    /// Teillinie nach der Unterbrechung
    pub line2: Vec<DVec3>,
    /// Mittelpunkt der Unterbrechung (nur wenn sichtbar)
    pub center: Option<DVec3>,
    /// Kurs über die Unterbrechung in Grad (nur wenn sichtbar)
    pub theta_x: Option<f64>,
    /// Kurs am Linienanfang in Grad
    pub theta_start: f64,
    /// Beginn des Unterbrechungs-Markers
    pub break_start: Option<DVec3>,
    /// Ende des Unterbrechungs-Markers
    pub break_end: Option<DVec3>,
}

/// Berechnet die Unterbrechung (Break) der Patrouillenlinie.
///
/// Das Fenster liegt bei `(Gesamtzeit · percent ± 2000) / Gesamtzeit`;
/// rutscht es ohne expliziten `custom_percent` aus [0.2, 1.2] heraus,
/// bleibt die Unterbrechung verborgen und nur die beiden Teillinien plus
/// Start-Kurs werden geliefert. Weniger als 2 Punkte ⇒ `None`.
pub fn break_position(
    coords: &[GeographicCoordinate],
    custom_percent: Option<f64>,
) -> Option<PatrolBreak> {
    let (spline, count_time) = simulate_curve(coords)?;
    let percent = custom_percent.unwrap_or(0.5);

    let mut break_start = (count_time * percent - BREAK_HALF_WINDOW) / count_time;
    let mut break_end = (count_time * percent + BREAK_HALF_WINDOW) / count_time;

    let theta_start = heading_between(spline.evaluate(0.0), spline.evaluate(0.01));

    if custom_percent.is_none() && (break_start < 0.2 || break_end > 1.2) {
        // Kurze Linie: Unterbrechung am Ende verbergen
        return Some(PatrolBreak {
            line1: sample_line(&spline, 0.0, percent),
            line2: sample_line(&spline, percent, 1.0),
            center: None,
            theta_x: None,
            theta_start,
            break_start: None,
            break_end: None,
        });
    }

    break_start = break_start.max(0.0);
    break_end = break_end.min(1.0);

    let line1 = sample_line(&spline, 0.0, break_start);
    let line2 = sample_line(&spline, break_end, 1.0);

    let window = break_end - break_start;
    let marker_start = spline.evaluate(break_start + window / 3.0);
    let marker_center = spline.evaluate(break_start + window / 2.0);
    let marker_end = spline.evaluate(break_start + 2.0 * window / 3.0);

    Some(PatrolBreak {
        line1,
        line2,
        center: Some(marker_center),
        theta_x: Some(heading_between(marker_start, marker_end)),
        theta_start,
        break_start: Some(marker_start),
        break_end: Some(marker_end),
    })
}

// ── Formations-Markierung ───────────────────────────────────────────

/// Rechteckige Zeichenkachel auf der Kurve.
#[derive(Debug, Clone)]
pub struct CharTile {
    /// Eckpunkte der Kachel (gegen den Uhrzeigersinn, nicht geschlossen)
    pub corners: [DVec3; 4],
    /// Lokaler Kurs der Kurve an der Kachel in Grad
    pub heading_deg: f64,
}

/// Rechteck-Ecken um `origin` im lokalen East-North-Up-Rahmen, gedreht
/// auf den Kurs `heading_deg`.
fn tile_corners(origin: DVec3, heading_deg: f64, half_width_m: f64) -> [DVec3; 4] {
    let (east, north, _) = east_north_up(origin, &Ellipsoid::WGS84);
    let rotation = (90.0 - heading_deg).to_radians();
    let local = [
        DVec2::new(half_width_m, 0.0),
        DVec2::new(half_width_m, 2.0 * half_width_m),
        DVec2::new(-half_width_m, 2.0 * half_width_m),
        DVec2::new(-half_width_m, 0.0),
    ];
    local.map(|p| {
        let rotated = DVec2::new(
            p.x * rotation.cos() - p.y * rotation.sin(),
            p.x * rotation.sin() + p.y * rotation.cos(),
        );
        origin + east * rotated.x + north * rotated.y
    })
}

/// Abbildung [0, 1] → [TEXT_PADDING_LEFT, 1].
fn padded(fraction: f64) -> f64 {
    (1.0 - TEXT_PADDING_LEFT) * fraction + TEXT_PADDING_LEFT
}

/// Platziert `char_count` Zeichenkacheln entlang des Pfads.
///
/// Jede Kachel sitzt bei einer gepolsterten Kurven-Position; Kacheln
/// hinter dem Kurvenende werden entlang des End-Kurses fortgesetzt.
/// Leerer Pfad oder `char_count == 0` ⇒ leere Liste.
pub fn formation_mark_layout(
    coords: &[GeographicCoordinate],
    char_count: usize,
) -> Vec<CharTile> {
    if char_count == 0 {
        return Vec::new();
    }
    let Some((spline, count_time)) = simulate_curve(coords) else {
        return Vec::new();
    };

    let step = 1.0 / char_count as f64;
    let relative_length = count_time * step * 4.0;
    let font_width = MAX_FONT_WIDTH_M.min(relative_length);

    let end = spline.evaluate(1.0);
    let pre_end = spline.evaluate(1.0 - 0.01);
    let end_heading = heading_between(pre_end, end);

    let mut tiles = Vec::with_capacity(char_count);
    for i in 0..char_count {
        let target = padded(step * i as f64);
        if target > 1.0 {
            // Hinter dem Kurvenende: entlang des End-Kurses fortsetzen
            let out_step = (target - 1.0) / step;
            let (east, north, _) = east_north_up(end, &Ellipsoid::WGS84);
            let rotation = (90.0 - end_heading).to_radians();
            let forward = out_step * font_width * 4.0;
            let offset = east * (forward * rotation.cos()) + north * (forward * rotation.sin());
            tiles.push(CharTile {
                corners: tile_corners(end + offset, end_heading, font_width),
                heading_deg: end_heading,
            });
        } else {
            let origin = spline.evaluate(target);
            let before = spline.evaluate((target - 0.005).max(0.0));
            let after = spline.evaluate((target + 0.005).min(1.0));
            let heading = heading_between(before, after);
            tiles.push(CharTile {
                corners: tile_corners(origin, heading, font_width),
                heading_deg: heading,
            });
        }
    }
    tiles
}

/// Platziert dekorative Polyline-Striche um einen Mittelpunkt im lokalen
/// East-North-Up-Rahmen (skaliert und auf den Kurs gedreht).
pub fn icon_line_positions(
    center: DVec3,
    rotate_deg: f64,
    scale: f64,
    strokes: &[Vec<DVec2>],
) -> Vec<Vec<DVec3>> {
    let (east, north, _) = east_north_up(center, &Ellipsoid::WGS84);
    let rotation = rotate_deg.to_radians();

    strokes
        .iter()
        .map(|stroke| {
            stroke
                .iter()
                .map(|p| {
                    let x = p.x * ICON_SCALE_M * scale;
                    let y = p.y * ICON_SCALE_M * scale;
                    let rotated = DVec2::new(
                        x * rotation.cos() - y * rotation.sin(),
                        x * rotation.sin() + y * rotation.cos(),
                    );
                    center + east * rotated.x + north * rotated.y
                })
                .collect()
        })
        .collect()
}
