use crate::foundation::core::Affine;

/// A 2×3 affine transformation matrix, `elems[row][col]`.
///
/// Row 0 is `[xx, xy, x0]` and row 1 is `[yx, yy, y0]`, mapping `(x, y)` to
/// `(xx*x + xy*y + x0, yx*x + yy*y + y0)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Matrix2x3 {
    pub elems: [[f64; 3]; 2],
}

impl Default for Matrix2x3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix2x3 {
    pub const IDENTITY: Self = Self {
        elems: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
    };

    pub const fn new(elems: [[f64; 3]; 2]) -> Self {
        Self { elems }
    }

    pub fn determinant(&self) -> f64 {
        let [[xx, xy, _], [yx, yy, _]] = self.elems;
        (xx * yy) - (xy * yx)
    }

    /// Finite, non-zero determinant.
    pub fn is_invertible(&self) -> bool {
        let det = self.determinant();
        det.is_finite() && det != 0.0
    }

    pub fn to_affine(self) -> Affine {
        let [[xx, xy, x0], [yx, yy, y0]] = self.elems;
        Affine::new([xx, yx, xy, yy, x0, y0])
    }

    pub fn from_affine(a: Affine) -> Self {
        let [xx, yx, xy, yy, x0, y0] = a.as_coeffs();
        Self::new([[xx, xy, x0], [yx, yy, y0]])
    }
}

/// Smallest diagonal substituted for a degenerate gradient direction. Its square is still above
/// `f32::MIN_POSITIVE`.
const DEGENERATE_DIAGONAL: f64 = 1e-10;

/// Give a linear gradient matrix a non-zero determinant without changing its top row.
///
/// Linear gradients run from x=0 to x=1 in gradient space, independent of y, so the bottom row is
/// meaningless and may legally be all zero. Backends that must invert the matrix get a synthetic
/// bottom row instead. When the top row has no direction at all, the x coefficient becomes a tiny
/// non-zero value so the determinant stays away from zero.
pub fn repair_linear_gradient_matrix(m: Matrix2x3) -> Matrix2x3 {
    let [xx, xy, x0] = m.elems[0];
    if xx != 0.0 {
        Matrix2x3::new([[xx, xy, x0], [0.0, 1.0, 0.0]])
    } else if xy != 0.0 {
        Matrix2x3::new([[xx, xy, x0], [1.0, 0.0, 0.0]])
    } else {
        Matrix2x3::new([
            [DEGENERATE_DIAGONAL, 0.0, x0],
            [0.0, DEGENERATE_DIAGONAL, 0.0],
        ])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/matrix.rs"]
mod tests;
