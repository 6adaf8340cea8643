use crate::foundation::core::{Affine, Point, Rectangle};

/// Maps graphic (viewbox) co-ordinates onto a destination rectangle.
///
/// The two axes scale independently, so a viewbox whose aspect ratio differs from the destination
/// is stretched to fill it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewboxTransform {
    sx: f64,
    sy: f64,
    tx: f64,
    ty: f64,
}

impl ViewboxTransform {
    /// Return `None` when either rectangle is empty.
    pub fn new(viewbox: Rectangle, dst: Rectangle) -> Option<Self> {
        if viewbox.is_empty() || dst.is_empty() {
            return None;
        }
        let sx = dst.width_f64() / viewbox.width_f64();
        let sy = dst.height_f64() / viewbox.height_f64();
        Some(Self {
            sx,
            sy,
            tx: f64::from(dst.min_x) - f64::from(viewbox.min_x) * sx,
            ty: f64::from(dst.min_y) - f64::from(viewbox.min_y) * sy,
        })
    }

    pub fn is_identity(&self) -> bool {
        self.sx == 1.0 && self.sy == 1.0 && self.tx == 0.0 && self.ty == 0.0
    }

    pub fn map_point(&self, x: f32, y: f32) -> (f32, f32) {
        let p = self.map_point_f64(Point::new(f64::from(x), f64::from(y)));
        (p.x as f32, p.y as f32)
    }

    pub fn map_point_f64(&self, p: Point) -> Point {
        Point::new(p.x * self.sx + self.tx, p.y * self.sy + self.ty)
    }

    pub fn map_radii(&self, rx: f32, ry: f32) -> (f32, f32) {
        (
            (f64::from(rx) * self.sx) as f32,
            (f64::from(ry) * self.sy) as f32,
        )
    }

    pub fn viewbox_to_dst(&self) -> Affine {
        Affine::new([self.sx, 0.0, 0.0, self.sy, self.tx, self.ty])
    }

    pub fn dst_to_viewbox(&self) -> Affine {
        Affine::new([
            1.0 / self.sx,
            0.0,
            0.0,
            1.0 / self.sy,
            -self.tx / self.sx,
            -self.ty / self.sy,
        ])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/viewbox.rs"]
mod tests;
