//! Zentrale Geometrie-Ableitung je Shape-Art.
//!
//! Eine Dispatch-Stelle statt je Form duplizierter Logik: Zeichnen,
//! Preview und Edit laufen alle durch dieselbe Funktion, damit ein
//! Kontrollpunkt-Satz überall identische Geometrie liefert.

use crate::core::{rectangle_from_two_points, GeographicCoordinate, ShapeKind};
use crate::military::{
    arc_points, arch_points, assemble_points, attack_arrow_ring, circle_outline_points,
    regular_polygon_points, sector_points,
};
use crate::shared::PlotOptions;
use crate::spline::{create_close_curve, hermite_spline_corner_curve};

/// Caller-seitige Interpolations-Parameter — reine Funktion derselben
/// Kontrollpunkte, kein versteckter Zustand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorOptions {
    /// Zwischenpunkte pro Spline-Segment
    pub resolution: usize,
    /// Tangenten-Skalierung der Corner-Hermite-Spline
    pub sharpness: f64,
    /// Winkelschritt der Kreis-Tessellation in Grad
    pub granularity: f64,
    /// Eckenzahl des regelmäßigen Vielecks
    pub regular_polygon_sides: usize,
}

impl GeneratorOptions {
    /// Übernimmt die Generator-Parameter aus den Laufzeit-Optionen.
    pub fn from_options(options: &PlotOptions) -> Self {
        Self {
            resolution: options.curve_resolution,
            sharpness: options.curve_sharpness,
            granularity: options.circle_granularity_deg,
            regular_polygon_sides: options.regular_polygon_sides,
        }
    }
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self::from_options(&PlotOptions::default())
    }
}

/// Leitet die renderfertige Punktfolge aus den Kontrollpunkten ab.
///
/// `None` bedeutet: für diesen Punktestand existiert (noch) keine
/// Geometrie — der Aufrufer lässt die Anzeige unverändert.
pub fn recompute(
    kind: ShapeKind,
    control_points: &[GeographicCoordinate],
    options: &GeneratorOptions,
) -> Option<Vec<GeographicCoordinate>> {
    match kind {
        ShapeKind::Point | ShapeKind::Label | ShapeKind::Billboard => {
            control_points.first().map(|p| vec![*p])
        }
        ShapeKind::Segment | ShapeKind::Polyline => {
            (control_points.len() >= 2).then(|| control_points.to_vec())
        }
        ShapeKind::Curve => (control_points.len() >= 2).then(|| {
            hermite_spline_corner_curve(control_points, options.resolution, options.sharpness)
        }),
        ShapeKind::Polygon => (control_points.len() >= 3).then(|| {
            let mut ring = control_points.to_vec();
            if ring.first() != ring.last() {
                ring.push(ring[0]);
            }
            ring
        }),
        ShapeKind::Rectangle => (control_points.len() >= 2).then(|| {
            rectangle_from_two_points(&control_points[0], control_points.last().unwrap()).to_vec()
        }),
        ShapeKind::Circle => (control_points.len() >= 2).then(|| {
            circle_outline_points(&control_points[0], &control_points[1], options.granularity)
        }),
        ShapeKind::ClosedCurve => {
            // Der Generator schließt selbst — einen bereits angehängten
            // Schlusspunkt vorher wieder entfernen
            let mut anchors = control_points.to_vec();
            if anchors.len() > 1 && anchors.first() == anchors.last() {
                anchors.pop();
            }
            match anchors.len() {
                0 => None,
                // Mit bis zu 2 Punkten einen Sammelraum-Blob als Vorstufe zeigen
                1 | 2 => Some(assemble_points(&anchors)),
                _ => {
                    let planar: Vec<glam::DVec2> = anchors.iter().map(|c| c.planar()).collect();
                    Some(
                        create_close_curve(&planar)
                            .into_iter()
                            .map(|p| GeographicCoordinate::from_planar(p, 0.0))
                            .collect(),
                    )
                }
            }
        }
        ShapeKind::AttackArrow => {
            let ring = attack_arrow_ring(control_points);
            (!ring.is_empty()).then_some(ring)
        }
        ShapeKind::Sector => sector_points(control_points),
        ShapeKind::Arc => arc_points(control_points),
        ShapeKind::Arch => arch_points(control_points),
        ShapeKind::RegularPolygon => {
            if control_points.len() < 2 {
                return None;
            }
            regular_polygon_points(
                &control_points[0],
                &control_points[1],
                options.regular_polygon_sides,
            )
        }
    }
}
