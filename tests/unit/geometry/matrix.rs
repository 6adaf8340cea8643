use super::*;

use kurbo::Point;

fn gradient_param(m: &Matrix2x3, p: Point) -> f64 {
    let [xx, xy, x0] = m.elems[0];
    xx * p.x + xy * p.y + x0
}

fn sample_points() -> Vec<Point> {
    let mut pts = Vec::new();
    for x in [-32.0, -1.5, 0.0, 0.25, 1.0, 17.0, 64.0] {
        for y in [-32.0, -0.5, 0.0, 3.0, 48.0] {
            pts.push(Point::new(x, y));
        }
    }
    pts
}

#[test]
fn zero_bottom_row_is_repaired_without_moving_the_gradient_axis() {
    let coeffs = [-2.0, -0.125, 0.0, 0.0625, 1.0, 3.5];
    for &xx in &coeffs {
        for &xy in &coeffs {
            for x0 in [-1.0, 0.0, 0.5] {
                let m = Matrix2x3::new([[xx, xy, x0], [0.0, 0.0, 0.0]]);
                assert_eq!(m.determinant(), 0.0);

                let r = repair_linear_gradient_matrix(m);
                assert!(r.is_invertible(), "{m:?} -> {r:?}");

                for p in sample_points() {
                    let before = gradient_param(&m, p);
                    let after = gradient_param(&r, p);
                    assert!(
                        (before - after).abs() < 1e-8,
                        "{m:?} at {p:?}: {before} vs {after}"
                    );
                }
            }
        }
    }
}

#[test]
fn repair_picks_bottom_row_by_first_nonzero_coefficient() {
    let r = repair_linear_gradient_matrix(Matrix2x3::new([[2.0, 3.0, 4.0], [0.0, 0.0, 0.0]]));
    assert_eq!(r.elems, [[2.0, 3.0, 4.0], [0.0, 1.0, 0.0]]);

    let r = repair_linear_gradient_matrix(Matrix2x3::new([[0.0, 3.0, 4.0], [0.0, 0.0, 0.0]]));
    assert_eq!(r.elems, [[0.0, 3.0, 4.0], [1.0, 0.0, 0.0]]);

    let r = repair_linear_gradient_matrix(Matrix2x3::new([[0.0, 0.0, 4.0], [0.0, 0.0, 0.0]]));
    assert_eq!(r.elems, [[1e-10, 0.0, 4.0], [0.0, 1e-10, 0.0]]);
    assert!(r.determinant() > f64::from(f32::MIN_POSITIVE));
}

#[test]
fn repair_ignores_declared_bottom_row() {
    let m = Matrix2x3::new([[0.5, 0.0, 0.0], [9.0, 9.0, 9.0]]);
    let r = repair_linear_gradient_matrix(m);
    assert_eq!(r.elems[1], [0.0, 1.0, 0.0]);
}

#[test]
fn affine_conversion_preserves_mapping() {
    let m = Matrix2x3::new([[2.0, 0.5, 3.0], [-1.0, 4.0, 7.0]]);
    let a = m.to_affine();
    let p = Point::new(1.5, -2.0);
    let q = a * p;
    assert!((q.x - (2.0 * 1.5 + 0.5 * -2.0 + 3.0)).abs() < 1e-12);
    assert!((q.y - (-1.0 * 1.5 + 4.0 * -2.0 + 7.0)).abs() < 1e-12);
    assert_eq!(Matrix2x3::from_affine(a), m);
    assert!((m.determinant() - a.determinant()).abs() < 1e-12);
}

#[test]
fn nan_matrix_is_not_invertible() {
    let m = Matrix2x3::new([[f64::NAN, 0.0, 0.0], [0.0, 1.0, 0.0]]);
    assert!(!m.is_invertible());
}

#[test]
fn matrix_survives_a_json_round_trip() {
    let m = Matrix2x3::new([[0.125, 0.0, -1.0], [0.0, 0.25, 3.5]]);
    let json = serde_json::to_string(&m).unwrap();
    assert_eq!(serde_json::from_str::<Matrix2x3>(&json).unwrap(), m);
}
