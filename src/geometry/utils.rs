// Hilfsfunktionen für geometrische Berechnungen

use super::types::Point;

/// Berechnet die euklidische Distanz zwischen zwei Punkten
pub fn distance(p1: &Point, p2: &Point) -> f64 {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_of_identical_points_is_zero() {
        let p = Point::new(3.5, -7.25);
        assert_eq!(distance(&p, &p), 0.0);
    }

    #[test]
    fn distance_matches_pythagoras() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(3.0, 4.0);
        assert!((distance(&p1, &p2) - 5.0).abs() < 1e-12);
        assert!((distance(&p2, &p1) - 5.0).abs() < 1e-12);
    }
}
