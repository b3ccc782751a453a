//! Edit-Session: exklusiver Drag-Kontext für genau ein Shape.
//!
//! Die Session besitzt den geteilten Helper-Marker-Pool und — für die
//! Dauer eines Drags — exklusiv das Kontrollpunkt-Array des bearbeiteten
//! Shapes. Der Wechsel auf ein anderes Shape schließt die laufende
//! Session zwingend vorher ab (nur ein Shape ist gleichzeitig im
//! Edit-Modus).

use glam::DVec3;

use crate::core::{
    rectangle_opposite_index, to_cartesian, to_geographic, Ellipsoid, GeographicCoordinate,
    ShapeKind,
};
use crate::military::update_sector_vertices;

use super::registry::{RegisteredShape, ShapeRegistry, UpdateEffect};

/// Draggbarer Kontrollpunkt-Marker des gerade bearbeiteten Shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelperMarker {
    /// Index des Kontrollpunkts (bzw. der Rechteck-Ecke) im Shape
    pub index: usize,
    /// Kartesische Position für das Rendering
    pub position: DVec3,
    /// Hervorhebung während des Drags
    pub highlighted: bool,
}

/// Exklusive Edit-Session über dem Marker-Pool.
#[derive(Default)]
pub struct EditSession {
    shape_id: Option<u64>,
    markers: Vec<HelperMarker>,
    dragging: Option<usize>,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Das aktuell bearbeitete Shape, falls vorhanden.
    pub fn active_shape(&self) -> Option<u64> {
        self.shape_id
    }

    /// Der geteilte Helper-Marker-Pool.
    pub fn markers(&self) -> &[HelperMarker] {
        &self.markers
    }

    /// Startet den Edit-Modus für ein Shape.
    ///
    /// Eine laufende Session auf einem anderen Shape wird vorher
    /// zwangsweise abgeschlossen (Marker verworfen). `false`, wenn die
    /// Shape-ID unbekannt ist.
    pub fn begin(&mut self, registry: &ShapeRegistry, id: u64) -> bool {
        if let Some(current) = self.shape_id {
            if current != id {
                log::debug!("Edit-Session auf Shape {} zwangsweise beendet", current);
            }
            self.finish();
        }

        let Some(shape) = registry.get(id) else {
            return false;
        };

        self.shape_id = Some(id);
        self.rebuild_markers(shape);
        true
    }

    /// Baut die Marker aus dem Shape neu auf.
    fn rebuild_markers(&mut self, shape: &RegisteredShape) {
        let dragging = self.dragging;
        let source = marker_coordinates(shape);
        self.markers.clear();
        self.markers
            .extend(source.iter().enumerate().map(|(index, coord)| HelperMarker {
                index,
                position: to_cartesian(coord, &Ellipsoid::WGS84, 1.0),
                highlighted: dragging == Some(index),
            }));
    }

    /// Greift den Marker mit dem gegebenen Index.
    pub fn begin_drag(&mut self, marker_index: usize) -> bool {
        if self.shape_id.is_none() || marker_index >= self.markers.len() {
            return false;
        }
        self.dragging = Some(marker_index);
        self.markers[marker_index].highlighted = true;
        true
    }

    /// Zieht den gegriffenen Kontrollpunkt auf eine neue Koordinate.
    ///
    /// Mutiert das Kontrollpunkt-Array in place, berechnet abhängige
    /// Punkte nach der Form-Regel des Shapes neu und stößt die
    /// Re-Generierung der abgeleiteten Geometrie an.
    pub fn drag_to(
        &mut self,
        registry: &mut ShapeRegistry,
        coordinate: GeographicCoordinate,
    ) -> Option<UpdateEffect> {
        let id = self.shape_id?;
        let focused = self.dragging?;
        let shape = registry.get(id)?;
        let kind = shape.descriptor.kind;

        let effect = match kind {
            // Gezogene Ecke frei, diagonal gegenüberliegende verankert —
            // der neue Kontrollpunkt-Satz ist genau dieses Diagonalpaar
            ShapeKind::Rectangle => {
                let ring = &shape.points;
                if ring.len() < 5 || focused >= 4 {
                    return None;
                }
                let anchor = ring[rectangle_opposite_index(focused)];
                registry.update_positions(id, vec![coordinate, anchor])?
            }
            _ => {
                let mut control_points = shape.descriptor.control_points.clone();
                if focused >= control_points.len() {
                    return None;
                }
                control_points[focused] = coordinate;
                apply_coupled_update(kind, &mut control_points, focused);
                registry.update_positions(id, control_points)?
            }
        };

        let shape = registry.get(id)?;
        self.rebuild_markers(shape);
        Some(effect)
    }

    /// Beendet den laufenden Drag; die Marker bleiben sichtbar.
    pub fn end_drag(&mut self) {
        if let Some(index) = self.dragging.take() {
            if let Some(marker) = self.markers.get_mut(index) {
                marker.highlighted = false;
            }
        }
    }

    /// Schließt die Session ab und verwirft alle Marker bedingungslos.
    pub fn finish(&mut self) {
        self.shape_id = None;
        self.dragging = None;
        self.markers.clear();
    }
}

/// Marker-Quelle eines Shapes: beim Rechteck die vier abgeleiteten Ecken,
/// sonst die Kontrollpunkte.
fn marker_coordinates(shape: &RegisteredShape) -> Vec<GeographicCoordinate> {
    if shape.descriptor.kind == ShapeKind::Rectangle && shape.points.len() >= 5 {
        shape.points[..4].to_vec()
    } else {
        shape.descriptor.control_points.clone()
    }
}

/// Form-spezifische Kopplung beim Drag eines einzelnen Kontrollpunkts.
///
/// Sektor-Familie: der Scheitel-Drag projiziert den Endwinkel-Punkt auf
/// den Radius der neuen Lage; der Drag eines Winkel-Punkts überträgt den
/// neuen Radius auf den jeweils anderen Winkel-Punkt.
fn apply_coupled_update(
    kind: ShapeKind,
    control_points: &mut [GeographicCoordinate],
    focused: usize,
) {
    match kind {
        ShapeKind::Sector | ShapeKind::Arc | ShapeKind::Arch => {
            if control_points.len() < 3 || focused > 2 {
                return;
            }
            let ellipsoid = Ellipsoid::WGS84;
            let cartesian: Vec<DVec3> = control_points
                .iter()
                .map(|c| to_cartesian(c, &ellipsoid, 1.0))
                .collect();

            let (dependent, moved) = if focused == 0 {
                (
                    2,
                    update_sector_vertices(cartesian[0], cartesian[1], cartesian[2]),
                )
            } else {
                let dependent = 3 - focused;
                (
                    dependent,
                    update_sector_vertices(cartesian[0], cartesian[focused], cartesian[dependent]),
                )
            };
            control_points[dependent] = to_geographic(moved, &ellipsoid, 1.0);
        }
        // Alle übrigen Formen: Kontrollpunkte sind unabhängig
        _ => {}
    }
}
