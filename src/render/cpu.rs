use std::sync::Arc;

use vello_cpu::kurbo::Shape;

use crate::canvas::contract::{ArcSegment, Canvas};
use crate::foundation::color::{NonpremulColor, Palette};
use crate::foundation::core::{Point, Rectangle};
use crate::foundation::error::{IconvgError, IconvgResult};
use crate::geometry::elevate::elevate_quad;
use crate::geometry::matrix::{Matrix2x3, repair_linear_gradient_matrix};
use crate::paint::model::{PaintType, SpreadMode};
use crate::paint::resolve::Paint;
use crate::render::backend::CpuCanvasOpts;
use crate::render::target::RenderTarget;

/// Reference backend drawing with `vello_cpu`.
///
/// Paths accumulate between `begin_drawing` and `end_drawing` and are filled once, non-zero
/// winding. Quadratic segments are elevated to cubics and arcs become straight lines to their
/// end point. Gradients are sampled per pixel into an image paint.
pub struct CpuCanvas<'a> {
    target: &'a mut RenderTarget,
    opts: CpuCanvasOpts,
    path: vello_cpu::kurbo::BezPath,
    current: Point,
    clip_pushed: bool,
    /// Target pixels drawing may touch: the destination rectangle within the target bounds.
    visible: vello_cpu::kurbo::Rect,
}

impl<'a> CpuCanvas<'a> {
    pub fn new(target: &'a mut RenderTarget, opts: CpuCanvasOpts) -> Self {
        let visible = rect_to_cpu(target.bounds());
        Self {
            target,
            opts,
            path: vello_cpu::kurbo::BezPath::new(),
            current: Point::ZERO,
            clip_pushed: false,
            visible,
        }
    }

    fn fill_color(&mut self, color: vello_cpu::peniko::Color) {
        self.target.ctx_mut().set_paint(color);
        self.fill_path();
    }

    /// Fill with an image whose top-left pixel sits at `origin`.
    fn fill_image(&mut self, image: vello_cpu::Image, origin: vello_cpu::kurbo::Point) {
        self.target.ctx_mut().set_paint(image);
        self.fill_path_with(vello_cpu::kurbo::Affine::translate(origin.to_vec2()));
    }

    fn fill_path(&mut self) {
        self.fill_path_with(vello_cpu::kurbo::Affine::IDENTITY);
    }

    /// Fill the accumulated path with the current paint and start a new one.
    fn fill_path_with(&mut self, paint_transform: vello_cpu::kurbo::Affine) {
        let path = std::mem::take(&mut self.path);
        if !has_area(self.visible) {
            return;
        }
        let ctx = self.target.ctx_mut();
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint_transform(paint_transform);
        ctx.fill_path(&path);
    }

    /// Whole target pixels covered by both the current path and the visible area.
    fn path_pixel_bounds(&self) -> Option<vello_cpu::kurbo::Rect> {
        let area = self.path.bounding_box().intersect(self.visible).expand();
        has_area(area).then_some(area)
    }

    fn fallback_color(&self) -> vello_cpu::peniko::Color {
        let [r, g, b, a] = self.opts.fallback_rgba;
        vello_cpu::peniko::Color::from_rgba8(r, g, b, a)
    }

    fn fill_gradient(&mut self, paint: &Paint<'_>) -> IconvgResult<()> {
        let transform = match paint.paint_type() {
            PaintType::LinearGradient => repair_linear_gradient_matrix(paint.gradient_transform()),
            _ => paint.gradient_transform(),
        };
        let stops = paint.sorted_gradient_stops();

        if !transform.is_invertible() || stops.is_empty() {
            tracing::warn!(
                paint_type = ?paint.paint_type(),
                stops = stops.len(),
                determinant = transform.determinant(),
                "gradient cannot be drawn, using fallback color"
            );
            let color = self.fallback_color();
            self.fill_color(color);
            return Ok(());
        }
        if let [(_, c)] = stops.as_slice() {
            self.fill_color(color_to_cpu(*c));
            return Ok(());
        }

        let ramp = GradientRamp {
            radial: paint.paint_type() == PaintType::RadialGradient,
            spread: paint.gradient_spread(),
            transform,
            stops: stops
                .iter()
                .map(|(offset, c)| (*offset, premul_f32(*c)))
                .collect(),
        };
        let Some(area) = self.path_pixel_bounds() else {
            self.path = vello_cpu::kurbo::BezPath::new();
            return Ok(());
        };
        let image = ramp.to_image(area)?;
        self.fill_image(image, area.origin());
        Ok(())
    }
}

impl Canvas for CpuCanvas<'_> {
    fn begin_decode(&mut self, dst_rect: Rectangle) -> IconvgResult<()> {
        let width = f64::from(self.target.width());
        let height = f64::from(self.target.height());
        let ctx = self.target.ctx_mut();
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        if let Some([r, g, b, a]) = self.opts.clear_rgba {
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, width, height));
        }
        let bounds = vello_cpu::kurbo::Rect::new(0.0, 0.0, width, height);
        if dst_rect.is_empty() {
            self.visible = vello_cpu::kurbo::Rect::ZERO;
        } else {
            let dst = rect_to_cpu(dst_rect);
            ctx.push_clip_layer(&dst.to_path(0.1));
            self.clip_pushed = true;
            self.visible = dst.intersect(bounds);
        }
        Ok(())
    }

    fn end_decode(&mut self, result: IconvgResult<()>) -> IconvgResult<()> {
        if self.clip_pushed {
            self.target.ctx_mut().pop_layer();
            self.clip_pushed = false;
        }
        self.visible = rect_to_cpu(self.target.bounds());
        self.path = vello_cpu::kurbo::BezPath::new();
        result
    }

    fn begin_drawing(&mut self) -> IconvgResult<()> {
        self.path = vello_cpu::kurbo::BezPath::new();
        Ok(())
    }

    fn end_drawing(&mut self, paint: &Paint<'_>) -> IconvgResult<()> {
        match paint.paint_type() {
            PaintType::FlatColor => {
                self.fill_color(color_to_cpu(paint.flat_color()));
                Ok(())
            }
            PaintType::LinearGradient | PaintType::RadialGradient => self.fill_gradient(paint),
            PaintType::Invalid => {
                self.path = vello_cpu::kurbo::BezPath::new();
                Err(IconvgError::InvalidPaintType)
            }
        }
    }

    fn begin_path(&mut self, x0: f32, y0: f32) -> IconvgResult<()> {
        self.current = point(x0, y0);
        self.path.move_to(point_to_cpu(self.current));
        Ok(())
    }

    fn end_path(&mut self) -> IconvgResult<()> {
        self.path.close_path();
        Ok(())
    }

    fn line_to(&mut self, x1: f32, y1: f32) -> IconvgResult<()> {
        self.current = point(x1, y1);
        self.path.line_to(point_to_cpu(self.current));
        Ok(())
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> IconvgResult<()> {
        let cubic = elevate_quad(self.current, point(x1, y1), point(x2, y2));
        self.path.curve_to(
            point_to_cpu(cubic.p1),
            point_to_cpu(cubic.p2),
            point_to_cpu(cubic.p3),
        );
        self.current = cubic.p3;
        Ok(())
    }

    fn cube_to(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        x3: f32,
        y3: f32,
    ) -> IconvgResult<()> {
        self.current = point(x3, y3);
        self.path.curve_to(
            point_to_cpu(point(x1, y1)),
            point_to_cpu(point(x2, y2)),
            point_to_cpu(self.current),
        );
        Ok(())
    }

    fn arc_to(&mut self, arc: ArcSegment) -> IconvgResult<()> {
        // TODO: convert elliptical arcs to cubic segments instead of a chord.
        self.line_to(arc.final_x, arc.final_y)
    }

    fn on_metadata_viewbox(&mut self, _viewbox: Rectangle) -> IconvgResult<()> {
        Ok(())
    }

    fn on_metadata_suggested_palette(&mut self, _palette: &Palette) -> IconvgResult<()> {
        Ok(())
    }
}

/// A gradient ready for per-pixel sampling. Stop colors are premultiplied, in `0..=255`.
pub(crate) struct GradientRamp {
    pub(crate) radial: bool,
    pub(crate) spread: SpreadMode,
    /// Destination space to gradient space.
    pub(crate) transform: Matrix2x3,
    pub(crate) stops: Vec<(f32, [f32; 4])>,
}

impl GradientRamp {
    /// Premultiplied color at destination point `p`.
    pub(crate) fn sample(&self, p: Point) -> [u8; 4] {
        let g = self.transform.to_affine() * p;
        let t = if self.radial { g.x.hypot(g.y) } else { g.x };
        match apply_spread(t, self.spread) {
            Some(t) => {
                let c = interpolate_stops(&self.stops, t as f32);
                c.map(|v| v.round().clamp(0.0, 255.0) as u8)
            }
            None => [0, 0, 0, 0],
        }
    }

    /// Sample the pixels of `area`, a rectangle on whole pixel boundaries.
    pub(crate) fn to_image(&self, area: vello_cpu::kurbo::Rect) -> IconvgResult<vello_cpu::Image> {
        let (width, height) = (area.width() as u32, area.height() as u32);
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        let mut may_have_opacities = false;
        for y in 0..height {
            for x in 0..width {
                let center = Point::new(
                    area.x0 + f64::from(x) + 0.5,
                    area.y0 + f64::from(y) + 0.5,
                );
                let [r, g, b, a] = self.sample(center);
                may_have_opacities |= a != 255;
                pixels.push(vello_cpu::peniko::color::PremulRgba8 { r, g, b, a });
            }
        }
        let w: u16 = width
            .try_into()
            .map_err(|_| IconvgError::backend(anyhow::anyhow!("gradient width exceeds u16")))?;
        let h: u16 = height
            .try_into()
            .map_err(|_| IconvgError::backend(anyhow::anyhow!("gradient height exceeds u16")))?;
        let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, may_have_opacities);
        Ok(vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        })
    }
}

/// Map a raw gradient parameter into `[0, 1]`, or `None` where the gradient is transparent.
pub(crate) fn apply_spread(t: f64, spread: SpreadMode) -> Option<f64> {
    if !t.is_finite() {
        return None;
    }
    match spread {
        SpreadMode::None => (0.0..=1.0).contains(&t).then_some(t),
        SpreadMode::Pad => Some(t.clamp(0.0, 1.0)),
        SpreadMode::Repeat => Some(t - t.floor()),
        SpreadMode::Reflect => {
            let u = t.rem_euclid(2.0);
            Some(if u > 1.0 { 2.0 - u } else { u })
        }
    }
}

/// Color at `t` for stops sorted by offset. Where offsets coincide the later stop wins.
pub(crate) fn interpolate_stops(stops: &[(f32, [f32; 4])], t: f32) -> [f32; 4] {
    let Some(&(first_offset, first)) = stops.first() else {
        return [0.0; 4];
    };
    if t < first_offset {
        return first;
    }
    let next = stops.partition_point(|(offset, _)| *offset <= t);
    if next == stops.len() {
        return stops[next - 1].1;
    }
    let (o0, c0) = stops[next - 1];
    let (o1, c1) = stops[next];
    let f = (t - o0) / (o1 - o0);
    std::array::from_fn(|i| c0[i] + (c1[i] - c0[i]) * f)
}

fn has_area(r: vello_cpu::kurbo::Rect) -> bool {
    r.area() > 0.0
}

fn premul_f32(c: NonpremulColor) -> [f32; 4] {
    let a = f32::from(c.a);
    let premul = |v: u8| f32::from(v) * a / 255.0;
    [premul(c.r), premul(c.g), premul(c.b), a]
}

fn color_to_cpu(c: NonpremulColor) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn point(x: f32, y: f32) -> Point {
    Point::new(f64::from(x), f64::from(y))
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn rect_to_cpu(r: Rectangle) -> vello_cpu::kurbo::Rect {
    let r = r.to_kurbo();
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
