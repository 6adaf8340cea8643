use std::hash::{Hash, Hasher};

pub use kurbo::{Affine, CubicBez, Point};

/// An axis-aligned rectangle with `f32` co-ordinates.
///
/// A minimum co-ordinate greater than or equal to the matching maximum, or any NaN co-ordinate,
/// makes the rectangle empty. Empty rectangles have many representations; the canonical one has
/// every field at positive zero. Equality and hashing go through [`Rectangle::canonicalize`].
#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Rectangle {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Rectangle {
    /// The viewbox used when a graphic carries no explicit ViewBox metadata.
    pub const DEFAULT_VIEWBOX: Self = Self::new(-32.0, -32.0, 32.0, 32.0);

    pub const fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Return `true` for NaN bounds or a non-positive extent on either axis.
    pub fn is_empty(&self) -> bool {
        // Written so that NaN compares as empty.
        !(self.min_x < self.max_x && self.min_y < self.max_y)
    }

    pub fn width(&self) -> f32 {
        if self.is_empty() {
            0.0
        } else {
            self.max_x - self.min_x
        }
    }

    pub fn height(&self) -> f32 {
        if self.is_empty() {
            0.0
        } else {
            self.max_y - self.min_y
        }
    }

    /// Width computed in `f64`, for backends that take double-precision extents.
    pub fn width_f64(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            f64::from(self.max_x) - f64::from(self.min_x)
        }
    }

    pub fn height_f64(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            f64::from(self.max_y) - f64::from(self.min_y)
        }
    }

    /// Rewrite any empty rectangle to all-zero form; non-empty rectangles are returned as-is.
    pub fn canonicalize(self) -> Self {
        if self.is_empty() {
            Self::default()
        } else {
            self
        }
    }

    pub fn to_kurbo(self) -> kurbo::Rect {
        let r = self.canonicalize();
        kurbo::Rect::new(
            f64::from(r.min_x),
            f64::from(r.min_y),
            f64::from(r.max_x),
            f64::from(r.max_y),
        )
    }

    fn canonical_bits(&self) -> [u32; 4] {
        let r = self.canonicalize();
        // -0.0 and +0.0 bound the same region.
        let bits = |v: f32| if v == 0.0 { 0 } else { v.to_bits() };
        [bits(r.min_x), bits(r.min_y), bits(r.max_x), bits(r.max_y)]
    }
}

impl PartialEq for Rectangle {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_bits() == other.canonical_bits()
    }
}

impl Eq for Rectangle {}

impl Hash for Rectangle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_bits().hash(state);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
