//! Längen- und Flächeneinheiten-Umrechnung sowie Grad-Formatierung.
//!
//! Unbekannte Einheiten-Schlüssel sind Programmierfehler und werden als
//! `UnitError` propagiert — nie stillschweigend auf einen Default gesetzt.

use std::fmt;

/// Unbekannter Einheiten-Schlüssel bei einer Umrechnung.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitError {
    /// Der nicht erkannte Einheiten-Schlüssel
    pub unit: String,
}

impl fmt::Display for UnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ungültige Einheit für Umrechnung: {:?}", self.unit)
    }
}

impl std::error::Error for UnitError {}

/// Faktor einer Längeneinheit in Metern.
fn length_unit_factor(unit: &str) -> Option<f64> {
    match unit {
        // Meter
        "m" => Some(1.0),
        // Li (chinesische Meile)
        "li" => Some(500.0),
        // Kilometer
        "km" => Some(1000.0),
        // Englische Meile
        "mile" => Some(1609.34),
        // Seemeile
        "nmi" => Some(1852.0),
        _ => None,
    }
}

/// Faktor einer Flächeneinheit in Quadratmetern.
fn area_unit_factor(unit: &str) -> Option<f64> {
    match unit {
        // Quadratmeter
        "m²" => Some(1.0),
        // Quadratkilometer
        "km²" => Some(1e6),
        // Hektar
        "ha" => Some(1e4),
        // Mu (chinesisches Flächenmaß)
        "mu" => Some(666.67),
        // Quadratmeile
        "mile²" => Some(2.58999e6),
        // Quadratseemeile
        "nmi²" => Some(3.429904e6),
        _ => None,
    }
}

/// Rechnet eine Länge von `from_unit` nach `to_unit` um.
pub fn convert_length(length: f64, from_unit: &str, to_unit: &str) -> Result<f64, UnitError> {
    if from_unit == to_unit {
        return Ok(length);
    }
    let from = length_unit_factor(from_unit).ok_or_else(|| UnitError {
        unit: from_unit.to_string(),
    })?;
    let to = length_unit_factor(to_unit).ok_or_else(|| UnitError {
        unit: to_unit.to_string(),
    })?;
    Ok(length * from / to)
}

/// Rechnet eine Fläche von `from_unit` nach `to_unit` um.
pub fn convert_area(area: f64, from_unit: &str, to_unit: &str) -> Result<f64, UnitError> {
    if from_unit == to_unit {
        return Ok(area);
    }
    let from = area_unit_factor(from_unit).ok_or_else(|| UnitError {
        unit: from_unit.to_string(),
    })?;
    let to = area_unit_factor(to_unit).ok_or_else(|| UnitError {
        unit: to_unit.to_string(),
    })?;
    Ok(area * from / to)
}

// ── Grad-Formatierung ───────────────────────────────────────────────

/// Ziel-Format der Grad-Anzeige.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegreeFormat {
    /// Grad + Dezimalminuten
    DegreesMinutes,
    /// Grad + Minuten + Sekunden
    DegreesMinutesSeconds,
}

/// Formatierter Gradwert inklusive Anzeige-String.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedDegree {
    pub degrees: i64,
    pub minutes: f64,
    /// Nur beim DMS-Format gesetzt
    pub seconds: Option<f64>,
    /// Anzeige-String, z.B. `121°30′36″`
    pub show_type: String,
}

/// Formatiert einen Dezimalgradwert als Grad/Minute bzw. Grad/Minute/Sekunde.
pub fn format_degree(degree: f64, format: DegreeFormat) -> FormattedDegree {
    match format {
        DegreeFormat::DegreesMinutes => {
            let degrees = degree.floor();
            let minutes = ((degree - degrees) * 60.0 * 1000.0).round() / 1000.0;
            FormattedDegree {
                degrees: degrees as i64,
                minutes,
                seconds: None,
                show_type: format!("{}°{:.3}′", degrees as i64, minutes),
            }
        }
        DegreeFormat::DegreesMinutesSeconds => {
            let value = degree.abs();
            let degrees = value.floor();
            let minutes = ((value - degrees) * 60.0).floor();
            let seconds = ((value - degrees) % (1.0 / 60.0) * 3600.0).round();
            FormattedDegree {
                degrees: degrees as i64,
                minutes,
                seconds: Some(seconds),
                show_type: format!(
                    "{}°{:02}′{:02}″",
                    degrees as i64, minutes as i64, seconds as i64
                ),
            }
        }
    }
}
