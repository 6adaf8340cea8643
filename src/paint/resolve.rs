use std::cmp::Ordering;

use crate::foundation::color::{NonpremulColor, Palette};
use crate::foundation::core::Affine;
use crate::geometry::matrix::Matrix2x3;
use crate::paint::model::{GradientStop, PaintDesc, PaintType, SpreadMode};

/// Read-only view of the paint for one `end_drawing` call.
///
/// The view borrows decoder-owned state (the decoded paint and the palette in effect), so a
/// backend cannot keep it past the call that supplied it. Colors are resolved to
/// non-premultiplied form on demand; nothing else is converted.
#[derive(Clone, Copy, Debug)]
pub struct Paint<'a> {
    desc: &'a PaintDesc,
    palette: &'a Palette,
    dst_to_viewbox: Option<Affine>,
}

impl<'a> Paint<'a> {
    pub fn new(desc: &'a PaintDesc, palette: &'a Palette) -> Self {
        Self {
            desc,
            palette,
            dst_to_viewbox: None,
        }
    }

    /// Make [`Paint::gradient_transform`] accept destination-space points.
    pub(crate) fn with_dst_to_viewbox(mut self, dst_to_viewbox: Affine) -> Self {
        self.dst_to_viewbox = Some(dst_to_viewbox);
        self
    }

    pub fn paint_type(&self) -> PaintType {
        self.desc.paint_type()
    }

    /// The flat color, or transparent black when this is not a flat-color paint.
    pub fn flat_color(&self) -> NonpremulColor {
        match self.desc {
            PaintDesc::FlatColor(c) => c.resolve(self.palette),
            _ => NonpremulColor::default(),
        }
    }

    /// Zero for non-gradient paints.
    pub fn gradient_stop_count(&self) -> usize {
        self.stops().len()
    }

    /// # Panics
    ///
    /// Panics if `i >= self.gradient_stop_count()`.
    pub fn gradient_stop_offset(&self, i: usize) -> f32 {
        self.stops()[i].offset
    }

    /// # Panics
    ///
    /// Panics if `i >= self.gradient_stop_count()`.
    pub fn gradient_stop_color(&self, i: usize) -> NonpremulColor {
        self.stops()[i].color.resolve(self.palette)
    }

    /// # Panics
    ///
    /// Panics if `i >= self.gradient_stop_count()`.
    pub fn gradient_stop(&self, i: usize) -> (f32, NonpremulColor) {
        (self.gradient_stop_offset(i), self.gradient_stop_color(i))
    }

    /// [`SpreadMode::None`] for non-gradient paints.
    pub fn gradient_spread(&self) -> SpreadMode {
        self.desc
            .gradient()
            .map_or(SpreadMode::None, |g| g.spread)
    }

    /// Matrix from user (destination) space into gradient space. Identity for non-gradient
    /// paints.
    ///
    /// Linear gradient matrices may be singular; see
    /// [`crate::repair_linear_gradient_matrix`].
    pub fn gradient_transform(&self) -> Matrix2x3 {
        let Some(g) = self.desc.gradient() else {
            return Matrix2x3::IDENTITY;
        };
        match self.dst_to_viewbox {
            Some(dst_to_viewbox) => {
                Matrix2x3::from_affine(g.transform.to_affine() * dst_to_viewbox)
            }
            None => g.transform,
        }
    }

    /// Stops ordered for backends that need monotonic offsets.
    ///
    /// Non-finite offsets are dropped and the rest clamped to `[0, 1]`, then sorted stably, so
    /// stops sharing an offset keep their stream order and render as a hard edge.
    pub fn sorted_gradient_stops(&self) -> Vec<(f32, NonpremulColor)> {
        let mut stops: Vec<(f32, NonpremulColor)> = self
            .stops()
            .iter()
            .filter(|s| s.offset.is_finite())
            .map(|s| (s.offset.clamp(0.0, 1.0), s.color.resolve(self.palette)))
            .collect();
        stops.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
        stops
    }

    fn stops(&self) -> &'a [GradientStop] {
        match self.desc.gradient() {
            Some(g) => &g.stops,
            None => &[],
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paint/resolve.rs"]
mod tests;
