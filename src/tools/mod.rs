//! Interaktive Zeichen-Werkzeuge: ein generischer Zustandsautomat pro
//! Shape-Art statt duplizierter Klassen je Form.
//!
//! Der Automat konsumiert bereits aufgelöste geographische Koordinaten
//! (`None` = Klick neben den Globus) und erzeugt reine Daten — Preview-
//! Punktfolgen und ein `DrawResult` beim Abschluss. Mutation der Szene
//! erfolgt außerhalb.

mod machine;
mod recompute;

pub use machine::{DrawPhase, ShapeArity, ShapeDraw};
pub use recompute::{recompute, GeneratorOptions};

use std::fmt;

use crate::core::{GeographicCoordinate, ShapeKind};
use crate::shared::PlotOptions;

// ── Typen ───────────────────────────────────────────────────────────

/// Rückgabe der Event-Methoden — steuert den Zeichen-Flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawAction {
    /// Event verworfen (Debounce, kein Treffer, Duplikat, falsche Phase)
    Ignored,
    /// Punkt registriert, weitere Eingabe nötig
    Continue,
    /// Zeichnung abgeschlossen — Ergebnis über `take_result` abholen
    Finalized,
    /// Zeichnung abgebrochen, transiente Ressourcen freigegeben
    Cancelled,
    /// Abschluss abgelehnt — Automat bleibt in der Eingabe-Phase
    Rejected(DrawError),
}

/// Vom Automaten sichtbar gemeldete Benutzer-Fehler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawError {
    /// Abschluss unterhalb der Mindest-Punktzahl
    TooFewPoints { required: usize, actual: usize },
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawError::TooFewPoints { required, actual } => write!(
                f,
                "Mindestens {} Kontrollpunkte erforderlich ({} gesetzt)",
                required, actual
            ),
        }
    }
}

impl std::error::Error for DrawError {}

/// Preview-Geometrie für das Rendering (halbtransparent im Viewport).
///
/// Rein abgeleitet aus den festgeschriebenen Kontrollpunkten plus der
/// transienten Cursor-Position — akkumuliert nie Zustand über Moves.
#[derive(Debug, Clone, Default)]
pub struct DrawPreview {
    /// Verdichtete Preview-Punktfolge
    pub points: Vec<GeographicCoordinate>,
}

/// Ergebnis eines abgeschlossenen Zeichenvorgangs — reine Daten.
#[derive(Debug, Clone)]
pub struct DrawResult {
    /// Eindeutige Shape-ID
    pub id: u64,
    /// Art des gezeichneten Shapes
    pub kind: ShapeKind,
    /// Finale Kontrollpunkte (bei geschlossenen Formen auf den ersten
    /// Punkt zurückgeführt)
    pub control_points: Vec<GeographicCoordinate>,
    /// Abgeleitete, renderfertige Punktfolge
    pub points: Vec<GeographicCoordinate>,
}

// ── DrawManager ─────────────────────────────────────────────────────

/// Verwaltet den jeweils einzigen aktiven Zeichen-Automaten.
///
/// Der Start einer neuen Zeichnung bricht eine laufende zuerst ab —
/// es ist immer höchstens ein Automat aktiv (Ein-Besitzer-Regel).
pub struct DrawManager {
    options: PlotOptions,
    active: Option<ShapeDraw>,
    next_id: u64,
}

impl DrawManager {
    /// Erstellt einen Manager mit den gegebenen Optionen.
    pub fn new(options: PlotOptions) -> Self {
        Self {
            options,
            active: None,
            next_id: 1,
        }
    }

    /// Startet eine neue Zeichnung der gegebenen Art.
    ///
    /// Eine laufende Zeichnung wird vorher abgebrochen.
    pub fn start(&mut self, kind: ShapeKind) -> &mut ShapeDraw {
        if let Some(previous) = self.active.take() {
            log::debug!(
                "Zeichnung {:?} (id {}) durch neuen Start verworfen",
                previous.kind(),
                previous.id()
            );
        }
        let id = self.next_id;
        self.next_id += 1;
        self.active.insert(ShapeDraw::new(id, kind, &self.options))
    }

    /// Der aktive Automat, falls vorhanden.
    pub fn active(&self) -> Option<&ShapeDraw> {
        self.active.as_ref()
    }

    /// Mutable Referenz auf den aktiven Automaten.
    pub fn active_mut(&mut self) -> Option<&mut ShapeDraw> {
        self.active.as_mut()
    }

    /// Bricht die laufende Zeichnung ab (falls vorhanden).
    pub fn cancel_active(&mut self) {
        if let Some(mut machine) = self.active.take() {
            machine.on_right_click();
        }
    }

    /// Holt das Ergebnis eines abgeschlossenen Automaten ab und
    /// deaktiviert ihn.
    pub fn take_finished(&mut self) -> Option<DrawResult> {
        let finished = self
            .active
            .as_ref()
            .is_some_and(|m| m.phase() == DrawPhase::Finalized);
        if !finished {
            return None;
        }
        self.active.take().and_then(|mut m| m.take_result())
    }

    /// Aktuelle Optionen (für Tests und Host-Anbindung).
    pub fn options(&self) -> &PlotOptions {
        &self.options
    }
}

#[cfg(test)]
mod tests;
