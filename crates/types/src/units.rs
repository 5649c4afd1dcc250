//! Length conversions between plan units (meters) and print units (points).

pub const MM_PER_METER: f64 = 1000.0;

/// PostScript points in one millimeter (72 pt per inch, 25.4 mm per inch).
pub const POINTS_PER_MM: f64 = 72.0 / 25.4;

pub fn meters_to_mm(meters: f64) -> f64 {
    meters * MM_PER_METER
}

pub fn mm_to_points(mm: f64) -> f64 {
    mm * POINTS_PER_MM
}

/// Meters to points, going through millimeters.
pub fn meters_to_points(meters: f64) -> f64 {
    mm_to_points(meters_to_mm(meters))
}
