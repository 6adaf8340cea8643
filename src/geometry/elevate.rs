use crate::foundation::core::{CubicBez, Point};

/// Re-express the quadratic Bézier `(p0, c, p2)` as a cubic with the same shape.
///
/// Degree elevation is exact: `P1 = (P0 + 2C) / 3` and `P2' = (P2 + 2C) / 3`, endpoints kept.
pub fn elevate_quad(p0: Point, c: Point, p2: Point) -> CubicBez {
    let twice_c = c.to_vec2() * 2.0;
    let p1 = (p0 + twice_c).to_vec2() / 3.0;
    let p2_ctrl = (p2 + twice_c).to_vec2() / 3.0;
    CubicBez::new(p0, p1.to_point(), p2_ctrl.to_point(), p2)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/elevate.rs"]
mod tests;
