//! Generischer Zeichen-Zustandsautomat.
//!
//! Phasen: Eingabe (`Accumulating`) → `Finalized` | `Cancelled`.
//! Previews sind reine Ableitungen aus festgeschriebenen Punkten plus
//! Cursor; der Automat hält dafür keinen Zustand über Pointer-Moves.

use crate::core::{is_same_coordinate_with, GeographicCoordinate, ShapeKind};
use crate::shared::PlotOptions;

use super::recompute::{recompute, GeneratorOptions};
use super::{DrawAction, DrawError, DrawPreview, DrawResult};

/// Punkt-Arität einer Shape-Art.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeArity {
    /// Genau `n` Punkte; der letzte Klick schließt automatisch ab
    Fixed(usize),
    /// Beliebig viele Punkte ab `min`; Doppelklick schließt ab
    Variable { min: usize },
}

impl ShapeArity {
    /// Arität der gegebenen Shape-Art.
    pub fn of(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Point | ShapeKind::Label | ShapeKind::Billboard => ShapeArity::Fixed(1),
            ShapeKind::Segment
            | ShapeKind::Rectangle
            | ShapeKind::Circle
            | ShapeKind::RegularPolygon => ShapeArity::Fixed(2),
            ShapeKind::Sector | ShapeKind::Arc | ShapeKind::Arch => ShapeArity::Fixed(3),
            ShapeKind::Polyline | ShapeKind::Curve | ShapeKind::ClosedCurve => {
                ShapeArity::Variable { min: 2 }
            }
            ShapeKind::Polygon | ShapeKind::AttackArrow => ShapeArity::Variable { min: 3 },
        }
    }
}

/// Lebensphase des Automaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawPhase {
    /// Kontrollpunkte werden gesammelt
    Accumulating,
    /// Erfolgreich abgeschlossen (terminal)
    Finalized,
    /// Abgebrochen (terminal)
    Cancelled,
}

/// Zeichen-Automat für eine Shape-Art.
pub struct ShapeDraw {
    id: u64,
    kind: ShapeKind,
    arity: ShapeArity,
    phase: DrawPhase,
    control_points: Vec<GeographicCoordinate>,
    generator: GeneratorOptions,
    /// Zeitstempel des letzten Klicks (ms, vom Host geliefert)
    last_click_ms: f64,
    double_click_interval_ms: f64,
    tolerance: f64,
    /// Abgeleitete Punktfolge, beim Abschluss berechnet
    result_points: Vec<GeographicCoordinate>,
}

impl ShapeDraw {
    /// Erstellt einen Automaten; Debounce-Intervall und Toleranz kommen
    /// aus den injizierten Optionen, nicht aus globalem Zustand.
    pub fn new(id: u64, kind: ShapeKind, options: &PlotOptions) -> Self {
        Self {
            id,
            kind,
            arity: ShapeArity::of(kind),
            phase: DrawPhase::Accumulating,
            control_points: Vec::new(),
            generator: GeneratorOptions::from_options(options),
            last_click_ms: f64::MIN,
            double_click_interval_ms: options.double_click_interval_ms,
            tolerance: options.coordinate_tolerance,
            result_points: Vec::new(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn phase(&self) -> DrawPhase {
        self.phase
    }

    /// Bisher festgeschriebene Kontrollpunkte.
    pub fn control_points(&self) -> &[GeographicCoordinate] {
        &self.control_points
    }

    /// Verarbeitet einen Linksklick.
    ///
    /// Verworfen werden Klicks ohne Globus-Treffer (`None`), Klicks
    /// innerhalb des Doppelklick-Intervalls (zweiter Klick eines
    /// physischen Doppelklicks) und Duplikate des zuletzt gesetzten
    /// Punkts (Toleranz-Gleichheit).
    pub fn on_click(
        &mut self,
        coordinate: Option<GeographicCoordinate>,
        time_ms: f64,
    ) -> DrawAction {
        if self.phase != DrawPhase::Accumulating {
            return DrawAction::Ignored;
        }

        let interval = time_ms - self.last_click_ms;
        self.last_click_ms = time_ms;
        if interval <= self.double_click_interval_ms {
            return DrawAction::Ignored;
        }

        let Some(coordinate) = coordinate else {
            return DrawAction::Ignored;
        };

        if let Some(last) = self.control_points.last() {
            if is_same_coordinate_with(last, &coordinate, self.tolerance) {
                return DrawAction::Ignored;
            }
        }

        self.control_points.push(coordinate);

        if let ShapeArity::Fixed(n) = self.arity {
            if self.control_points.len() >= n {
                self.finalize();
                return DrawAction::Finalized;
            }
        }
        DrawAction::Continue
    }

    /// Berechnet die Live-Preview zur aktuellen Cursor-Position.
    ///
    /// Heißer Pfad: wird pro gerendertem Frame aufgerufen, ist idempotent
    /// und schreibt keinen Automaten-Zustand.
    pub fn on_pointer_move(&self, cursor: Option<GeographicCoordinate>) -> Option<DrawPreview> {
        if self.phase != DrawPhase::Accumulating || self.control_points.is_empty() {
            return None;
        }
        let cursor = cursor?;

        let mut preview_points = Vec::with_capacity(self.control_points.len() + 1);
        preview_points.extend_from_slice(&self.control_points);
        preview_points.push(cursor);

        let points = recompute(self.kind, &preview_points, &self.generator)?;
        Some(DrawPreview { points })
    }

    /// Verarbeitet einen Doppelklick (Abschluss variabler Formen).
    pub fn on_double_click(&mut self) -> DrawAction {
        if self.phase != DrawPhase::Accumulating {
            return DrawAction::Ignored;
        }
        let ShapeArity::Variable { min } = self.arity else {
            return DrawAction::Ignored;
        };

        if self.control_points.len() < min {
            let error = DrawError::TooFewPoints {
                required: min,
                actual: self.control_points.len(),
            };
            log::warn!("Abschluss abgelehnt: {}", error);
            return DrawAction::Rejected(error);
        }

        self.finalize();
        DrawAction::Finalized
    }

    /// Verarbeitet einen Rechtsklick (Abbruch aus jeder lebenden Phase).
    pub fn on_right_click(&mut self) -> DrawAction {
        if self.phase != DrawPhase::Accumulating {
            return DrawAction::Ignored;
        }
        self.phase = DrawPhase::Cancelled;
        // Transiente Ressourcen synchron freigeben — ein nachlaufendes
        // Event darf keine veraltete Preview mehr erzeugen
        self.control_points.clear();
        self.result_points.clear();
        log::debug!("Zeichnung {:?} (id {}) abgebrochen", self.kind, self.id);
        DrawAction::Cancelled
    }

    /// Schließt die Zeichnung ab: Ring-Schluss für geschlossene Formen,
    /// Ableitung der renderfertigen Punktfolge.
    fn finalize(&mut self) {
        if self.kind.closes_control_points() {
            if let Some(&first) = self.control_points.first() {
                self.control_points.push(first);
            }
        }
        self.result_points = recompute(self.kind, &self.control_points, &self.generator)
            .unwrap_or_else(|| self.control_points.clone());
        self.phase = DrawPhase::Finalized;
        log::info!(
            "Zeichnung {:?} (id {}) abgeschlossen: {} Kontrollpunkte, {} abgeleitete Punkte",
            self.kind,
            self.id,
            self.control_points.len(),
            self.result_points.len()
        );
    }

    /// Holt das Abschluss-Ergebnis ab (nur in der Phase `Finalized`).
    pub fn take_result(&mut self) -> Option<DrawResult> {
        if self.phase != DrawPhase::Finalized {
            return None;
        }
        Some(DrawResult {
            id: self.id,
            kind: self.kind,
            control_points: std::mem::take(&mut self.control_points),
            points: std::mem::take(&mut self.result_points),
        })
    }
}
