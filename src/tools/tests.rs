use super::machine::{DrawPhase, ShapeArity, ShapeDraw};
use super::recompute::{recompute, GeneratorOptions};
use super::{DrawAction, DrawError, DrawManager};
use crate::core::{GeographicCoordinate, ShapeKind};
use crate::shared::PlotOptions;

fn geo(lon: f64, lat: f64) -> GeographicCoordinate {
    GeographicCoordinate::new(lon, lat, 0.0)
}

fn machine(kind: ShapeKind) -> ShapeDraw {
    ShapeDraw::new(1, kind, &PlotOptions::default())
}

// ── Klick-Verarbeitung ──────────────────────────────────────────────

#[test]
fn test_no_hit_click_is_ignored() {
    let mut draw = machine(ShapeKind::Polyline);
    assert_eq!(draw.on_click(None, 1000.0), DrawAction::Ignored);
    assert!(draw.control_points().is_empty());
}

#[test]
fn test_click_accumulates_points() {
    let mut draw = machine(ShapeKind::Polyline);
    assert_eq!(draw.on_click(Some(geo(0.0, 0.0)), 1000.0), DrawAction::Continue);
    assert_eq!(draw.on_click(Some(geo(1.0, 0.0)), 2000.0), DrawAction::Continue);
    assert_eq!(draw.control_points().len(), 2);
}

#[test]
fn test_duplicate_of_previous_point_is_ignored() {
    let mut draw = machine(ShapeKind::Polyline);
    draw.on_click(Some(geo(0.0, 0.0)), 1000.0);
    // Innerhalb der Toleranz vom letzten Punkt → kein neuer Vertex
    let action = draw.on_click(Some(geo(0.0 + 5e-7, 0.0)), 2000.0);
    assert_eq!(action, DrawAction::Ignored);
    assert_eq!(draw.control_points().len(), 1);
}

#[test]
fn test_double_click_debounce_commits_single_vertex() {
    let mut draw = machine(ShapeKind::Polygon);
    draw.on_click(Some(geo(0.0, 0.0)), 1000.0);
    draw.on_click(Some(geo(1.0, 0.0)), 2000.0);
    // Zwei Klicks binnen 200 ms: der zweite ist der Doppelklick-Partner
    assert_eq!(draw.on_click(Some(geo(2.0, 0.0)), 3000.0), DrawAction::Continue);
    assert_eq!(draw.on_click(Some(geo(2.5, 0.0)), 3150.0), DrawAction::Ignored);
    assert_eq!(draw.control_points().len(), 3);
}

// ── Arität und Abschluss ────────────────────────────────────────────

#[test]
fn test_arity_table() {
    assert_eq!(ShapeArity::of(ShapeKind::Point), ShapeArity::Fixed(1));
    assert_eq!(ShapeArity::of(ShapeKind::Segment), ShapeArity::Fixed(2));
    assert_eq!(ShapeArity::of(ShapeKind::Circle), ShapeArity::Fixed(2));
    assert_eq!(ShapeArity::of(ShapeKind::Sector), ShapeArity::Fixed(3));
    assert_eq!(
        ShapeArity::of(ShapeKind::Polygon),
        ShapeArity::Variable { min: 3 }
    );
    assert_eq!(
        ShapeArity::of(ShapeKind::Curve),
        ShapeArity::Variable { min: 2 }
    );
}

#[test]
fn test_fixed_arity_auto_finalizes() {
    let mut draw = machine(ShapeKind::Segment);
    assert_eq!(draw.on_click(Some(geo(0.0, 0.0)), 1000.0), DrawAction::Continue);
    assert_eq!(draw.on_click(Some(geo(1.0, 1.0)), 2000.0), DrawAction::Finalized);
    assert_eq!(draw.phase(), DrawPhase::Finalized);

    let result = draw.take_result().expect("Ergebnis erwartet");
    assert_eq!(result.kind, ShapeKind::Segment);
    assert_eq!(result.control_points.len(), 2);
    assert_eq!(result.points.len(), 2);
}

#[test]
fn test_sector_finalizes_after_three_points() {
    let mut draw = machine(ShapeKind::Sector);
    draw.on_click(Some(geo(0.0, 0.0)), 1000.0);
    draw.on_click(Some(geo(0.0, 1.0)), 2000.0);
    assert_eq!(draw.on_click(Some(geo(1.0, 0.0)), 3000.0), DrawAction::Finalized);

    let result = draw.take_result().unwrap();
    assert_eq!(result.control_points.len(), 3);
    // Tortenstück: schließt auf den Scheitel
    assert_eq!(result.points.first(), result.points.last());
}

#[test]
fn test_variable_arity_below_minimum_is_rejected() {
    let mut draw = machine(ShapeKind::Polygon);
    draw.on_click(Some(geo(0.0, 0.0)), 1000.0);
    draw.on_click(Some(geo(1.0, 0.0)), 2000.0);

    let action = draw.on_double_click();
    assert_eq!(
        action,
        DrawAction::Rejected(DrawError::TooFewPoints {
            required: 3,
            actual: 2
        })
    );
    // Automat bleibt in der Eingabe-Phase
    assert_eq!(draw.phase(), DrawPhase::Accumulating);
    assert_eq!(draw.on_click(Some(geo(1.0, 1.0)), 3000.0), DrawAction::Continue);
}

#[test]
fn test_polygon_finalize_closes_control_ring() {
    let mut draw = machine(ShapeKind::Polygon);
    draw.on_click(Some(geo(0.0, 0.0)), 1000.0);
    draw.on_click(Some(geo(1.0, 0.0)), 2000.0);
    draw.on_click(Some(geo(1.0, 1.0)), 3000.0);
    assert_eq!(draw.on_double_click(), DrawAction::Finalized);

    let result = draw.take_result().unwrap();
    assert_eq!(result.control_points.len(), 4);
    assert_eq!(result.control_points.first(), result.control_points.last());
}

#[test]
fn test_closed_curve_end_to_end() {
    let mut draw = machine(ShapeKind::ClosedCurve);
    let anchors = [geo(0.0, 0.0), geo(1.0, 0.0), geo(1.0, 1.0), geo(0.0, 1.0)];
    for (i, anchor) in anchors.iter().enumerate() {
        draw.on_click(Some(*anchor), 1000.0 + i as f64 * 1000.0);
    }
    assert_eq!(draw.on_double_click(), DrawAction::Finalized);

    let result = draw.take_result().unwrap();
    // Interpoliert: deutlich länger als die Eingabe, Ring geschlossen
    assert!(result.points.len() > anchors.len());
    assert_eq!(result.points.first(), result.points.last());
}

#[test]
fn test_double_click_on_fixed_arity_is_ignored() {
    let mut draw = machine(ShapeKind::Circle);
    draw.on_click(Some(geo(0.0, 0.0)), 1000.0);
    assert_eq!(draw.on_double_click(), DrawAction::Ignored);
}

// ── Preview ─────────────────────────────────────────────────────────

#[test]
fn test_preview_requires_committed_point_and_hit() {
    let draw = machine(ShapeKind::Polyline);
    assert!(draw.on_pointer_move(Some(geo(1.0, 1.0))).is_none());

    let mut draw = machine(ShapeKind::Polyline);
    draw.on_click(Some(geo(0.0, 0.0)), 1000.0);
    assert!(draw.on_pointer_move(None).is_none());
    assert!(draw.on_pointer_move(Some(geo(1.0, 1.0))).is_some());
}

#[test]
fn test_preview_is_pure_and_does_not_commit_cursor() {
    let mut draw = machine(ShapeKind::Curve);
    draw.on_click(Some(geo(0.0, 0.0)), 1000.0);
    draw.on_click(Some(geo(1.0, 0.0)), 2000.0);

    let first = draw.on_pointer_move(Some(geo(2.0, 1.0))).unwrap();
    let second = draw.on_pointer_move(Some(geo(2.0, 1.0))).unwrap();
    assert_eq!(first.points.len(), second.points.len());
    // Cursor wurde nicht als Kontrollpunkt übernommen
    assert_eq!(draw.control_points().len(), 2);
}

#[test]
fn test_preview_uses_cursor_as_transient_point() {
    let mut draw = machine(ShapeKind::Rectangle);
    draw.on_click(Some(geo(0.0, 0.0)), 1000.0);
    let preview = draw.on_pointer_move(Some(geo(2.0, 1.0))).unwrap();
    // Rechteck-Preview: 5 Ecken aus Ankerpunkt + Cursor
    assert_eq!(preview.points.len(), 5);
}

// ── Abbruch ─────────────────────────────────────────────────────────

#[test]
fn test_right_click_cancels_and_releases_state() {
    let mut draw = machine(ShapeKind::Polygon);
    draw.on_click(Some(geo(0.0, 0.0)), 1000.0);
    draw.on_click(Some(geo(1.0, 0.0)), 2000.0);

    assert_eq!(draw.on_right_click(), DrawAction::Cancelled);
    assert_eq!(draw.phase(), DrawPhase::Cancelled);
    assert!(draw.control_points().is_empty());

    // Nachlaufende Events erzeugen keine veraltete Preview mehr
    assert!(draw.on_pointer_move(Some(geo(2.0, 2.0))).is_none());
    assert_eq!(draw.on_click(Some(geo(3.0, 3.0)), 9000.0), DrawAction::Ignored);
    assert!(draw.take_result().is_none());
}

// ── DrawManager ─────────────────────────────────────────────────────

#[test]
fn test_manager_single_active_machine() {
    let mut manager = DrawManager::new(PlotOptions::default());
    manager.start(ShapeKind::Polygon);
    manager
        .active_mut()
        .unwrap()
        .on_click(Some(geo(0.0, 0.0)), 1000.0);

    // Neuer Start verwirft die laufende Zeichnung
    let second = manager.start(ShapeKind::Segment);
    assert_eq!(second.kind(), ShapeKind::Segment);
    assert!(second.control_points().is_empty());
}

#[test]
fn test_manager_ids_are_unique() {
    let mut manager = DrawManager::new(PlotOptions::default());
    let first_id = manager.start(ShapeKind::Point).id();
    let second_id = manager.start(ShapeKind::Point).id();
    assert_ne!(first_id, second_id);
}

#[test]
fn test_manager_take_finished() {
    let mut manager = DrawManager::new(PlotOptions::default());
    manager.start(ShapeKind::Segment);
    assert!(manager.take_finished().is_none());

    let draw = manager.active_mut().unwrap();
    draw.on_click(Some(geo(0.0, 0.0)), 1000.0);
    draw.on_click(Some(geo(1.0, 0.0)), 2000.0);

    let result = manager.take_finished().expect("Ergebnis erwartet");
    assert_eq!(result.kind, ShapeKind::Segment);
    assert!(manager.active().is_none());
}

#[test]
fn test_manager_cancel_active() {
    let mut manager = DrawManager::new(PlotOptions::default());
    manager.start(ShapeKind::Polyline);
    manager.cancel_active();
    assert!(manager.active().is_none());
}

// ── Recompute-Dispatch ──────────────────────────────────────────────

#[test]
fn test_recompute_insufficient_points_is_none() {
    let opts = GeneratorOptions::default();
    assert!(recompute(ShapeKind::Sector, &[geo(0.0, 0.0)], &opts).is_none());
    assert!(recompute(ShapeKind::Polygon, &[geo(0.0, 0.0), geo(1.0, 0.0)], &opts).is_none());
    assert!(recompute(ShapeKind::Segment, &[geo(0.0, 0.0)], &opts).is_none());
}

#[test]
fn test_recompute_curve_preserves_knots() {
    let opts = GeneratorOptions::default();
    let knots = [geo(0.0, 0.0), geo(1.0, 0.5), geo(2.0, 0.0)];
    let curve = recompute(ShapeKind::Curve, &knots, &opts).unwrap();
    for (i, knot) in knots.iter().enumerate() {
        assert_eq!(curve[i * (opts.resolution + 1)], *knot);
    }
}

#[test]
fn test_recompute_attack_arrow_empty_for_collinear_duplicate_input() {
    let opts = GeneratorOptions::default();
    // Nach Duplikat-Entfernung bleiben nur 2 Punkte → keine Geometrie
    let degenerate = [geo(0.0, 0.0), geo(1.0, 0.0), geo(1.0, 0.0)];
    assert!(recompute(ShapeKind::AttackArrow, &degenerate, &opts).is_none());
}
