use std::fmt;
use std::io::Write;

use crate::canvas::contract::{ArcSegment, Canvas, NullCanvas};
use crate::foundation::color::Palette;
use crate::foundation::core::Rectangle;
use crate::foundation::error::IconvgResult;
use crate::paint::model::PaintType;
use crate::paint::resolve::Paint;

enum Target<'a> {
    Wrapped(&'a mut dyn Canvas),
    Null(NullCanvas),
}

impl Target<'_> {
    fn canvas(&mut self) -> &mut dyn Canvas {
        match self {
            Target::Wrapped(c) => &mut **c,
            Target::Null(c) => c,
        }
    }

    fn contract_version(&self) -> u32 {
        match self {
            Target::Wrapped(c) => c.contract_version(),
            Target::Null(c) => c.contract_version(),
        }
    }
}

/// Logs every call, one line each, before forwarding it to a wrapped canvas.
///
/// Lines go to the optional writer (prefixed with the message prefix) and to `tracing` at trace
/// level. Without a wrapped canvas every call succeeds, except that `end_decode` returns its
/// argument; this exercises a dispatch sequence with no real backend.
///
/// The wrapped canvas and writer are borrowed for the decorator's lifetime.
pub struct DebugCanvas<'a> {
    out: Option<Box<dyn Write + 'a>>,
    prefix: String,
    target: Target<'a>,
}

impl<'a> DebugCanvas<'a> {
    pub fn new(wrapped: Option<&'a mut dyn Canvas>) -> Self {
        let target = match wrapped {
            Some(c) => Target::Wrapped(c),
            None => Target::Null(NullCanvas),
        };
        Self {
            out: None,
            prefix: String::new(),
            target,
        }
    }

    pub fn wrapping(wrapped: &'a mut dyn Canvas) -> Self {
        Self::new(Some(wrapped))
    }

    pub fn detached() -> Self {
        Self::new(None)
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_writer(mut self, out: impl Write + 'a) -> Self {
        self.out = Some(Box::new(out));
        self
    }

    fn log(&mut self, args: fmt::Arguments<'_>) {
        tracing::trace!(prefix = %self.prefix, "{args}");
        if let Some(out) = self.out.as_mut() {
            if let Err(err) = writeln!(out, "{}{}", self.prefix, args) {
                tracing::debug!(error = %err, "debug canvas writer failed");
            }
        }
    }
}

struct RectDisplay(Rectangle);

impl fmt::Display for RectDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;
        write!(f, "{{{}, {}, {}, {}}}", r.min_x, r.min_y, r.max_x, r.max_y)
    }
}

struct PaintDisplay<'p, 'a>(&'p Paint<'a>);

impl fmt::Display for PaintDisplay<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.0;
        match p.paint_type() {
            PaintType::FlatColor => {
                let [r, g, b, a] = p.flat_color().as_array();
                write!(f, "flat_color rgba({r}, {g}, {b}, {a})")
            }
            PaintType::LinearGradient | PaintType::RadialGradient => {
                let kind = if p.paint_type() == PaintType::LinearGradient {
                    "linear_gradient"
                } else {
                    "radial_gradient"
                };
                write!(
                    f,
                    "{kind} stops={} spread={:?}",
                    p.gradient_stop_count(),
                    p.gradient_spread()
                )
            }
            PaintType::Invalid => f.write_str("invalid_paint"),
        }
    }
}

impl Canvas for DebugCanvas<'_> {
    fn contract_version(&self) -> u32 {
        self.target.contract_version()
    }

    fn begin_decode(&mut self, dst_rect: Rectangle) -> IconvgResult<()> {
        self.log(format_args!("begin_decode({})", RectDisplay(dst_rect)));
        self.target.canvas().begin_decode(dst_rect)
    }

    fn end_decode(&mut self, result: IconvgResult<()>) -> IconvgResult<()> {
        match &result {
            Ok(()) => self.log(format_args!("end_decode(ok)")),
            Err(e) => self.log(format_args!("end_decode(err: {e})")),
        }
        self.target.canvas().end_decode(result)
    }

    fn begin_drawing(&mut self) -> IconvgResult<()> {
        self.log(format_args!("begin_drawing()"));
        self.target.canvas().begin_drawing()
    }

    fn end_drawing(&mut self, paint: &Paint<'_>) -> IconvgResult<()> {
        self.log(format_args!("end_drawing({})", PaintDisplay(paint)));
        self.target.canvas().end_drawing(paint)
    }

    fn begin_path(&mut self, x0: f32, y0: f32) -> IconvgResult<()> {
        self.log(format_args!("begin_path({x0}, {y0})"));
        self.target.canvas().begin_path(x0, y0)
    }

    fn end_path(&mut self) -> IconvgResult<()> {
        self.log(format_args!("end_path()"));
        self.target.canvas().end_path()
    }

    fn line_to(&mut self, x1: f32, y1: f32) -> IconvgResult<()> {
        self.log(format_args!("line_to({x1}, {y1})"));
        self.target.canvas().line_to(x1, y1)
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> IconvgResult<()> {
        self.log(format_args!("quad_to({x1}, {y1}, {x2}, {y2})"));
        self.target.canvas().quad_to(x1, y1, x2, y2)
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
        self.log(format_args!(
            "cube_to({x1}, {y1}, {x2}, {y2}, {x3}, {y3})"
        ));
        self.target.canvas().cube_to(x1, y1, x2, y2, x3, y3)
    }

    fn arc_to(&mut self, arc: ArcSegment) -> IconvgResult<()> {
        self.log(format_args!(
            "arc_to({}, {}, {}, {}, {}, {}, {})",
            arc.radius_x,
            arc.radius_y,
            arc.x_axis_rotation,
            arc.large_arc,
            arc.sweep,
            arc.final_x,
            arc.final_y
        ));
        self.target.canvas().arc_to(arc)
    }

    fn on_metadata_viewbox(&mut self, viewbox: Rectangle) -> IconvgResult<()> {
        self.log(format_args!(
            "on_metadata_viewbox({})",
            RectDisplay(viewbox)
        ));
        self.target.canvas().on_metadata_viewbox(viewbox)
    }

    fn on_metadata_suggested_palette(&mut self, palette: &Palette) -> IconvgResult<()> {
        let [r, g, b, a] = palette.colors[0].as_array();
        self.log(format_args!(
            "on_metadata_suggested_palette(first=rgba({r}, {g}, {b}, {a}))"
        ));
        self.target.canvas().on_metadata_suggested_palette(palette)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/debug.rs"]
mod tests;
