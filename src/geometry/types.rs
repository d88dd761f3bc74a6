// Grundlegende Datenstrukturen für die Geometrie
// Koordinaten sind dimensionslose f64-Werte in der Ebene

/// Punkt in 2D-Raum
/// Reiner Wert ohne Identität, unveränderlich nach der Konstruktion
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Dreieck mit 3 Ecken A, B, C
/// Abgeleitete Werte (Seitenlängen, Umfang, Fläche) werden bei Bedarf
/// berechnet und nie zwischengespeichert
#[derive(Clone, Copy, Debug)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

/// Schwellwert für die Kollinearitätsprüfung:
/// Flächen unterhalb davon gelten als Gleitkomma-Rauschen
pub const COLLINEAR_EPSILON: f64 = 1e-10;

impl Triangle {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self { a, b, c }
    }

    /// Die drei Seitenlängen [AB, BC, CA]
    pub fn side_lengths(&self) -> [f64; 3] {
        use crate::geometry::utils::distance;
        [
            distance(&self.a, &self.b),
            distance(&self.b, &self.c),
            distance(&self.c, &self.a),
        ]
    }
}
