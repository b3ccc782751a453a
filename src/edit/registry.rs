//! Shape-Registry: Besitz der fertigen Shapes und ihrer abgeleiteten
//! Geometrie.
//!
//! Stil-Updates, die die Geometrie nicht berühren (Farbe), sind billige
//! In-Place-Material-Updates; Breite/Bogen-Typ und jede
//! Kontrollpunkt-Änderung erzwingen die vollständige Neu-Generierung —
//! alte Geometrie raus, neue rein, nie in place mutiert.

use indexmap::IndexMap;

use crate::core::{ArcKind, GeographicCoordinate, ShapeDescriptor, ShapeKind, ShapeStyle};
use crate::tools::{recompute, DrawResult, GeneratorOptions};

/// Wirkung einer Update-Operation auf das Rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateEffect {
    /// Nur das Material wurde angepasst — Geometrie unverändert
    Material,
    /// Geometrie wurde neu generiert — Primitive austauschen
    Regenerate,
}

/// Registriertes Shape: Descriptor plus abgeleitete Punktfolge.
#[derive(Debug, Clone)]
pub struct RegisteredShape {
    /// Beschreibung (Kontrollpunkte, Stil, Pick-Flag)
    pub descriptor: ShapeDescriptor,
    /// Abgeleitete, renderfertige Punktfolge
    pub points: Vec<GeographicCoordinate>,
    /// Generator-Parameter der Erstellung (für identische Re-Generierung)
    pub generator: GeneratorOptions,
}

/// Id→Shape-Tabelle mit deterministischer Einfüge-Reihenfolge.
#[derive(Default)]
pub struct ShapeRegistry {
    shapes: IndexMap<u64, RegisteredShape>,
}

impl ShapeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Übernimmt ein Zeichen-Ergebnis in die Registry.
    pub fn insert_result(
        &mut self,
        result: DrawResult,
        style: ShapeStyle,
        allow_picking: bool,
        generator: GeneratorOptions,
    ) -> u64 {
        let id = result.id;
        let shape = RegisteredShape {
            descriptor: ShapeDescriptor {
                id,
                kind: result.kind,
                control_points: result.control_points,
                style,
                allow_picking,
            },
            points: result.points,
            generator,
        };
        self.shapes.insert(id, shape);
        log::debug!("Shape {} registriert ({} gesamt)", id, self.shapes.len());
        id
    }

    /// Entfernt ein Shape; gibt es zurück, falls vorhanden.
    pub fn remove(&mut self, id: u64) -> Option<RegisteredShape> {
        let removed = self.shapes.shift_remove(&id);
        if removed.is_some() {
            log::debug!("Shape {} entfernt", id);
        }
        removed
    }

    pub fn get(&self, id: u64) -> Option<&RegisteredShape> {
        self.shapes.get(&id)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Iteration in Einfüge-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredShape> {
        self.shapes.values()
    }

    /// Art eines registrierten Shapes.
    pub fn kind_of(&self, id: u64) -> Option<ShapeKind> {
        self.shapes.get(&id).map(|s| s.descriptor.kind)
    }

    // ── Update-Operationen ──────────────────────────────────────

    /// Farb-Update: Geometrie unberührt, nur Material.
    pub fn update_color(&mut self, id: u64, color: &str) -> Option<UpdateEffect> {
        let shape = self.shapes.get_mut(&id)?;
        shape.descriptor.style.color = color.to_string();
        Some(UpdateEffect::Material)
    }

    /// Breiten-Update: beeinflusst die Tessellation — volle Neu-Generierung.
    pub fn update_width(&mut self, id: u64, width: f64) -> Option<UpdateEffect> {
        let shape = self.shapes.get_mut(&id)?;
        shape.descriptor.style.width = width;
        Self::regenerate(shape);
        Some(UpdateEffect::Regenerate)
    }

    /// Bogen-Typ-Update: beeinflusst die Tessellation — volle Neu-Generierung.
    pub fn update_arc_type(&mut self, id: u64, arc_type: ArcKind) -> Option<UpdateEffect> {
        let shape = self.shapes.get_mut(&id)?;
        shape.descriptor.style.arc_type = arc_type;
        Self::regenerate(shape);
        Some(UpdateEffect::Regenerate)
    }

    /// Kontrollpunkt-Update: derselbe Generator wie bei der Erstellung
    /// erzeugt die Ersatz-Geometrie.
    pub fn update_positions(
        &mut self,
        id: u64,
        control_points: Vec<GeographicCoordinate>,
    ) -> Option<UpdateEffect> {
        let shape = self.shapes.get_mut(&id)?;
        shape.descriptor.control_points = control_points;
        Self::regenerate(shape);
        Some(UpdateEffect::Regenerate)
    }

    /// Generiert die abgeleitete Punktfolge eines Shapes neu.
    fn regenerate(shape: &mut RegisteredShape) {
        shape.points = recompute(
            shape.descriptor.kind,
            &shape.descriptor.control_points,
            &shape.generator,
        )
        .unwrap_or_else(|| shape.descriptor.control_points.clone());
    }
}
