// Berechnungs- und Prüflogik für das Dreieck

use super::types::{Triangle, COLLINEAR_EPSILON};

impl Triangle {
    /// Umfang: Summe der drei Seitenlängen, immer ≥ 0
    pub fn perimeter(&self) -> f64 {
        let [ab, bc, ca] = self.side_lengths();
        ab + bc + ca
    }

    /// Fläche nach der Heron-Formel
    ///
    /// Bei (fast) kollinearen Punkten ist der Radikand mathematisch 0,
    /// kann aber durch Rundung leicht negativ werden; er wird deshalb vor
    /// der Wurzel auf 0 begrenzt, damit kein NaN entsteht
    pub fn area(&self) -> f64 {
        let [ab, bc, ca] = self.side_lengths();
        let s = (ab + bc + ca) / 2.0;
        let radicand = s * (s - ab) * (s - bc) * (s - ca);
        radicand.max(0.0).sqrt()
    }

    /// Prüft, ob die drei Punkte ein Dreieck bilden (nicht auf einer
    /// Geraden liegen)
    /// Prüfung über die Fläche: ist sie ≈ 0, sind die Punkte kollinear.
    /// Anzeige und Prüfung teilen sich damit denselben Rechenweg
    pub fn is_triangle(&self) -> bool {
        self.area().abs() > COLLINEAR_EPSILON
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::types::{Point, Triangle};
    use proptest::prelude::*;

    fn tri(ax: f64, ay: f64, bx: f64, by: f64, cx: f64, cy: f64) -> Triangle {
        Triangle::new(Point::new(ax, ay), Point::new(bx, by), Point::new(cx, cy))
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
    }

    #[test]
    fn right_triangle_has_known_perimeter_and_area() {
        let t = tri(0.0, 0.0, 4.0, 0.0, 0.0, 3.0);
        assert!((t.perimeter() - 12.0).abs() < 1e-12);
        assert!((t.area() - 6.0).abs() < 1e-12);
        assert!(t.is_triangle());
    }

    #[test]
    fn near_equilateral_area() {
        let t = tri(0.0, 0.0, 2.0, 0.0, 1.0, 1.7320508);
        assert!((t.area() - 1.7320508).abs() < 1e-4);
    }

    #[test]
    fn collinear_points_have_zero_area_and_no_nan() {
        let t = tri(0.0, 0.0, 1.0, 1.0, 2.0, 2.0);
        let area = t.area();
        assert!(!area.is_nan());
        assert!(area.abs() < 1e-9);
        assert!(!t.is_triangle());
    }

    #[test]
    fn coincident_points_are_degenerate() {
        let t = tri(5.0, 5.0, 5.0, 5.0, 5.0, 5.0);
        assert_eq!(t.perimeter(), 0.0);
        assert_eq!(t.area(), 0.0);
        assert!(!t.is_triangle());
    }

    fn coord() -> impl Strategy<Value = f64> {
        -100.0f64..100.0
    }

    proptest! {
        #[test]
        fn perimeter_is_non_negative_and_label_invariant(
            ax in coord(), ay in coord(),
            bx in coord(), by in coord(),
            cx in coord(), cy in coord(),
        ) {
            let t = tri(ax, ay, bx, by, cx, cy);
            let p = t.perimeter();
            prop_assert!(p >= 0.0);
            // Rotation der Bezeichner und Umkehrung der Reihenfolge
            let rotated = tri(bx, by, cx, cy, ax, ay);
            let reversed = tri(cx, cy, bx, by, ax, ay);
            prop_assert!(approx_eq(p, rotated.perimeter()));
            prop_assert!(approx_eq(p, reversed.perimeter()));
        }

        #[test]
        fn area_is_non_negative_and_permutation_invariant(
            ax in coord(), ay in coord(),
            bx in coord(), by in coord(),
            cx in coord(), cy in coord(),
        ) {
            let reference = tri(ax, ay, bx, by, cx, cy).area();
            prop_assert!(reference >= 0.0);
            prop_assert!(!reference.is_nan());
            let permutations = [
                tri(ax, ay, cx, cy, bx, by),
                tri(bx, by, ax, ay, cx, cy),
                tri(bx, by, cx, cy, ax, ay),
                tri(cx, cy, ax, ay, bx, by),
                tri(cx, cy, bx, by, ax, ay),
            ];
            for t in permutations {
                prop_assert!(approx_eq(reference, t.area()));
            }
        }

        #[test]
        fn collinear_triples_have_vanishing_area(
            ax in -1.0f64..1.0, ay in -1.0f64..1.0,
            dx in -1.0f64..1.0, dy in -1.0f64..1.0,
            s in 0.0f64..1.0,
        ) {
            // B und C liegen auf der Geraden durch A mit Richtung (dx, dy);
            // kleine Koordinaten halten den Rundungsfehler der Heron-Formel klein
            let t = tri(ax, ay, ax + dx, ay + dy, ax + s * dx, ay + s * dy);
            let area = t.area();
            prop_assert!(!area.is_nan());
            prop_assert!(area.abs() < 1e-6);
        }
    }
}
