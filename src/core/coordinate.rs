//! Geographische Koordinaten und Umrechnung zwischen geodätischen und
//! kartesischen (ECEF-)Koordinaten.
//!
//! Alle Längen-/Breitengrade sind öffentlich in Grad, Höhen in Metern.
//! Die Umrechnung behandelt die Terrain-Überhöhung asymmetrisch:
//! Höhen ≥ 0 werden unverändert projiziert, negative Höhen vor der
//! Projektion mit dem Überhöhungsfaktor multipliziert (Rückrichtung
//! dividiert). Diese Asymmetrie ist Teil des Vertrags.

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Standard-Toleranz für Koordinaten-Gleichheit (Grad).
pub const COORDINATE_TOLERANCE: f64 = 1e-6;

/// Geographische Koordinate: Längengrad/Breitengrad in Grad, Höhe in Metern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeographicCoordinate {
    /// Längengrad in Grad
    pub longitude: f64,
    /// Breitengrad in Grad
    pub latitude: f64,
    /// Höhe über dem Ellipsoid in Metern
    pub height: f64,
}

impl GeographicCoordinate {
    /// Erstellt eine neue Koordinate.
    pub const fn new(longitude: f64, latitude: f64, height: f64) -> Self {
        Self {
            longitude,
            latitude,
            height,
        }
    }

    /// Planarer Anteil (x = Längengrad, y = Breitengrad).
    pub fn planar(&self) -> DVec2 {
        DVec2::new(self.longitude, self.latitude)
    }

    /// Erstellt eine Koordinate aus planarem Anteil und Höhe.
    pub fn from_planar(p: DVec2, height: f64) -> Self {
        Self::new(p.x, p.y, height)
    }
}

/// Prüft mit der Standard-Toleranz, ob zwei Koordinaten denselben Punkt bezeichnen.
pub fn is_same_coordinate(a: &GeographicCoordinate, b: &GeographicCoordinate) -> bool {
    is_same_coordinate_with(a, b, COORDINATE_TOLERANCE)
}

/// Prüft mit gegebener Toleranz (Grad), ob zwei Koordinaten denselben Punkt bezeichnen.
///
/// Höhe wird nicht verglichen — zwei Klicks auf denselben Bodenpunkt sollen
/// auch bei unterschiedlicher Terrain-Höhe als Duplikat erkannt werden.
pub fn is_same_coordinate_with(
    a: &GeographicCoordinate,
    b: &GeographicCoordinate,
    tolerance: f64,
) -> bool {
    (a.longitude - b.longitude).abs() <= tolerance && (a.latitude - b.latitude).abs() <= tolerance
}

// ── Ellipsoid ───────────────────────────────────────────────────────

/// Rotationsellipsoid, beschrieben durch seine drei Halbachsen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    /// Halbachsen in Metern (x, y äquatorial, z polar)
    pub radii: DVec3,
}

impl Ellipsoid {
    /// WGS84-Ellipsoid.
    pub const WGS84: Self = Self {
        radii: DVec3::new(6_378_137.0, 6_378_137.0, 6_356_752.314_245_179),
    };

    /// Quadrat der ersten Exzentrizität.
    fn e_sq(&self) -> f64 {
        let a = self.radii.x;
        let b = self.radii.z;
        1.0 - (b * b) / (a * a)
    }
}

/// Geographische Koordinate → ECEF-Kartesisch.
///
/// Höhen ≥ 0 gehen unverändert in die Projektion ein; negative Höhen werden
/// mit `exaggeration` multipliziert, damit Unterwasser-/Untergrund-Offsets
/// sichtbar bleiben, während Höhen über Grund exakt bleiben.
pub fn to_cartesian(
    coord: &GeographicCoordinate,
    ellipsoid: &Ellipsoid,
    exaggeration: f64,
) -> DVec3 {
    let height = if coord.height >= 0.0 {
        coord.height
    } else {
        coord.height * exaggeration
    };

    let lon = coord.longitude.to_radians();
    let lat = coord.latitude.to_radians();
    let a = ellipsoid.radii.x;
    let e_sq = ellipsoid.e_sq();

    let sin_lat = lat.sin();
    let n = a / (1.0 - e_sq * sin_lat * sin_lat).sqrt();

    DVec3::new(
        (n + height) * lat.cos() * lon.cos(),
        (n + height) * lat.cos() * lon.sin(),
        (n * (1.0 - e_sq) + height) * sin_lat,
    )
}

/// ECEF-Kartesisch → geographische Koordinate (Bowring-Näherung).
///
/// Die zurückgegebene Höhe ist durch `exaggeration` dividiert
/// (Umkehrung der Projektion); `exaggeration == 0` liefert Höhe 0.
pub fn to_geographic(
    point: DVec3,
    ellipsoid: &Ellipsoid,
    exaggeration: f64,
) -> GeographicCoordinate {
    let a = ellipsoid.radii.x;
    let b = ellipsoid.radii.z;
    let e_sq = ellipsoid.e_sq();
    let ep_sq = (a * a - b * b) / (b * b);

    let p = (point.x * point.x + point.y * point.y).sqrt();
    let theta = (point.z * a).atan2(p * b);
    let lat = (point.z + ep_sq * b * theta.sin().powi(3))
        .atan2(p - e_sq * a * theta.cos().powi(3));
    let lon = point.y.atan2(point.x);

    let sin_lat = lat.sin();
    let n = a / (1.0 - e_sq * sin_lat * sin_lat).sqrt();
    // An den Polen wird p/cos(lat) instabil — dort über die z-Komponente rechnen
    let height = if p > 1.0 {
        p / lat.cos() - n
    } else {
        point.z.abs() - b
    };

    GeographicCoordinate {
        longitude: lon.to_degrees(),
        latitude: lat.to_degrees(),
        height: if exaggeration == 0.0 {
            0.0
        } else {
            height / exaggeration
        },
    }
}

/// Koordinaten-Array → ECEF-Kartesisch.
pub fn to_cartesian_array(
    coords: &[GeographicCoordinate],
    ellipsoid: &Ellipsoid,
    exaggeration: f64,
) -> Vec<DVec3> {
    coords
        .iter()
        .map(|c| to_cartesian(c, ellipsoid, exaggeration))
        .collect()
}

/// ECEF-Array → geographische Koordinaten.
pub fn to_geographic_array(
    points: &[DVec3],
    ellipsoid: &Ellipsoid,
    exaggeration: f64,
) -> Vec<GeographicCoordinate> {
    points
        .iter()
        .map(|p| to_geographic(*p, ellipsoid, exaggeration))
        .collect()
}

/// Lokales East-North-Up-Dreibein am gegebenen ECEF-Punkt.
///
/// `up` ist die geodätische Flächennormale, `east` zeigt entlang des
/// Breitenkreises, `north` vervollständigt das Rechtssystem. Wird für die
/// Platzierung dekorativer Elemente (Formations-Kacheln, Icon-Linien) genutzt.
pub fn east_north_up(origin: DVec3, ellipsoid: &Ellipsoid) -> (DVec3, DVec3, DVec3) {
    let geo = to_geographic(origin, ellipsoid, 1.0);
    let lon = geo.longitude.to_radians();
    let lat = geo.latitude.to_radians();

    let up = DVec3::new(
        lat.cos() * lon.cos(),
        lat.cos() * lon.sin(),
        lat.sin(),
    );
    let east = DVec3::new(-lon.sin(), lon.cos(), 0.0);
    let north = up.cross(east);
    (east, north, up)
}

// ── Grad ↔ Grad/Minute/Sekunde ──────────────────────────────────────

/// Dezimalgrad → (Grad, Minuten, Sekunden); Sekunden auf 2 Nachkommastellen gerundet.
pub fn degree_to_dms(degree: f64) -> (i32, u32, f64) {
    let deg = degree.trunc();
    let total_minutes = (degree - deg).abs() * 60.0;
    let minutes = total_minutes.trunc();
    let seconds = ((total_minutes - minutes) * 60.0 * 100.0).round() / 100.0;
    (deg as i32, minutes as u32, seconds)
}

/// (Grad, Minuten, Sekunden) → Dezimalgrad.
pub fn dms_to_degree(degrees: i32, minutes: u32, seconds: f64) -> f64 {
    f64::from(degrees) + f64::from(minutes) / 60.0 + seconds / 3600.0
}
