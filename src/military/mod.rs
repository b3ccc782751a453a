//! Militär-Symbol-Generatoren: reine Transformationen
//! Kontrollpunkte → Punktfolge, ohne Zustand.
//!
//! Fehler-Politik: unzureichende oder degenerierte Eingaben liefern
//! `None`, eine leere Liste oder die unveränderte Eingabe — nie einen
//! Panic, damit interaktive Aufrufer bei jedem Pointer-Move gefahrlos
//! nachfragen können.

pub mod arrow;
pub mod assemble;
pub mod patrol;
pub mod plot_math;
pub mod sector;
pub mod shapes;

pub use arrow::{attack_arrow_ring, tailed_attack_arrow, AttackArrowFactors};
pub use assemble::assemble_points;
pub use patrol::{
    break_position, formation_mark_layout, icon_line_positions, travel_times, CharTile,
    PatrolBreak,
};
pub use plot_math::calculate_vector;
pub use sector::{arc_points, arch_points, sector_points, update_sector_vertices};
pub use shapes::{circle_outline_points, regular_polygon_points, rounded_rectangle_points};
