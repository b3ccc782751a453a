//! Shape-Domänentypen: Art, Stil und Beschreibung gezeichneter Objekte.

use serde::{Deserialize, Serialize};

use super::coordinate::GeographicCoordinate;

/// Art eines zeichenbaren Objekts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Einzelner Punkt
    Point,
    /// Text-Label
    Label,
    /// Billboard (Symbol-Bild)
    Billboard,
    /// Strecke aus genau zwei Punkten
    Segment,
    /// Offene Polyline
    Polyline,
    /// Geglättete offene Kurve (Corner-Hermite)
    Curve,
    /// Geschlossenes Polygon
    Polygon,
    /// Achsen-paralleles Rechteck
    Rectangle,
    /// Kreis (Mittelpunkt + Radiuspunkt)
    Circle,
    /// Geschlossene glatte Kurve (Cardinal + Bézier)
    ClosedCurve,
    /// Angriffspfeil mit Schwalbenschwanz
    AttackArrow,
    /// Kreissektor (geschlossenes Tortenstück)
    Sector,
    /// Offener Kreisbogen
    Arc,
    /// Bogen mit Sehne (geschlossen, ohne Scheitel)
    Arch,
    /// Regelmäßiges Vieleck
    RegularPolygon,
}

impl ShapeKind {
    /// Shapes, deren Kontrollpunkt-Folge beim Abschluss auf den ersten
    /// Punkt zurückgeführt wird.
    pub fn closes_control_points(&self) -> bool {
        matches!(self, ShapeKind::Polygon | ShapeKind::ClosedCurve)
    }
}

/// Bogen-Typ einer Linie auf dem Globus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArcKind {
    /// Großkreis-Bogen
    #[default]
    Geodesic,
    /// Loxodrome (konstanter Kurs)
    Rhumb,
    /// Gerade Verbindung im kartesischen Raum
    Straight,
}

/// Darstellungs-Stil eines Shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Linienstärke in Pixeln
    pub width: f64,
    /// CSS-Farbstring, z.B. `#ffffff`
    pub color: String,
    /// Bogen-Typ der Tessellation
    pub arc_type: ArcKind,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            width: 2.0,
            color: "#ffffff".to_string(),
            arc_type: ArcKind::Geodesic,
        }
    }
}

/// Beschreibung eines fertig gezeichneten Shapes.
///
/// Wird beim Zeichen-Abschluss erzeugt, durch Edit-Operationen mutiert
/// und bei explizitem Entfernen zerstört. Die Kontrollpunkte gehören
/// exklusiv diesem Descriptor (bzw. der gerade aktiven Edit-Session).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeDescriptor {
    /// Eindeutige ID
    pub id: u64,
    /// Art des Shapes
    pub kind: ShapeKind,
    /// Kontrollpunkte (Reihenfolge definiert die Topologie)
    pub control_points: Vec<GeographicCoordinate>,
    /// Darstellungs-Stil
    pub style: ShapeStyle,
    /// Darf das Shape per Klick selektiert werden?
    pub allow_picking: bool,
}
