//! The capability set every rendering backend implements.
//!
//! # Call sequence
//!
//! A decode session drives one canvas synchronously:
//!
//! ```text
//! begin_decode
//!   (on_metadata_viewbox | on_metadata_suggested_palette)*
//!   ( begin_drawing
//!       ( begin_path (line_to | quad_to | cube_to | arc_to)* end_path )*
//!     end_drawing )*
//! end_decode
//! ```
//!
//! `begin_decode` and `end_decode` are each called exactly once. The first operation to return an
//! error stops the sequence; that error becomes the argument to `end_decode`, and whatever
//! `end_decode` returns is the result of the whole decode.
//!
//! Implementations must not keep references to arguments (notably the [`Paint`] view) beyond the
//! call that supplied them.

use crate::foundation::color::Palette;
use crate::foundation::core::Rectangle;
use crate::foundation::error::IconvgResult;
use crate::paint::resolve::Paint;

/// Version of the [`Canvas`] contract this crate dispatches against.
pub const CANVAS_CONTRACT_VERSION: u32 = 1;

/// Parameters of an elliptical arc path segment, SVG style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSegment {
    pub radius_x: f32,
    pub radius_y: f32,
    /// Rotation of the ellipse's x axis, in radians.
    pub x_axis_rotation: f32,
    pub large_arc: bool,
    pub sweep: bool,
    pub final_x: f32,
    pub final_y: f32,
}

/// Lifecycle of a decode session, from the canvas's point of view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DispatchState {
    #[default]
    Unstarted,
    Decoding,
    Finished,
}

/// A rendering backend.
///
/// All co-ordinates are in destination space: the decode entry point has already mapped them
/// from the graphic's viewbox.
pub trait Canvas {
    /// The contract version this implementation was written against.
    fn contract_version(&self) -> u32 {
        CANVAS_CONTRACT_VERSION
    }

    /// Start a decode session. Backends clip subsequent drawing to `dst_rect`.
    fn begin_decode(&mut self, dst_rect: Rectangle) -> IconvgResult<()>;

    /// Finish a decode session. `result` is the error that stopped the sequence, if any; the
    /// return value is the final decode result.
    fn end_decode(&mut self, result: IconvgResult<()>) -> IconvgResult<()>;

    fn begin_drawing(&mut self) -> IconvgResult<()>;

    /// Fill the paths accumulated since `begin_drawing` with `paint`.
    fn end_drawing(&mut self, paint: &Paint<'_>) -> IconvgResult<()>;

    fn begin_path(&mut self, x0: f32, y0: f32) -> IconvgResult<()>;

    fn end_path(&mut self) -> IconvgResult<()>;

    fn line_to(&mut self, x1: f32, y1: f32) -> IconvgResult<()>;

    /// Quadratic Bézier to `(x2, y2)` with control point `(x1, y1)`.
    fn quad_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> IconvgResult<()>;

    /// Cubic Bézier to `(x3, y3)` with control points `(x1, y1)` and `(x2, y2)`.
    fn cube_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32)
    -> IconvgResult<()>;

    fn arc_to(&mut self, arc: ArcSegment) -> IconvgResult<()>;

    fn on_metadata_viewbox(&mut self, viewbox: Rectangle) -> IconvgResult<()>;

    fn on_metadata_suggested_palette(&mut self, palette: &Palette) -> IconvgResult<()>;
}

/// A canvas that draws nothing and accepts everything.
///
/// `end_decode` passes its argument through unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullCanvas;

impl Canvas for NullCanvas {
    fn begin_decode(&mut self, _dst_rect: Rectangle) -> IconvgResult<()> {
        Ok(())
    }

    fn end_decode(&mut self, result: IconvgResult<()>) -> IconvgResult<()> {
        result
    }

    fn begin_drawing(&mut self) -> IconvgResult<()> {
        Ok(())
    }

    fn end_drawing(&mut self, _paint: &Paint<'_>) -> IconvgResult<()> {
        Ok(())
    }

    fn begin_path(&mut self, _x0: f32, _y0: f32) -> IconvgResult<()> {
        Ok(())
    }

    fn end_path(&mut self) -> IconvgResult<()> {
        Ok(())
    }

    fn line_to(&mut self, _x1: f32, _y1: f32) -> IconvgResult<()> {
        Ok(())
    }

    fn quad_to(&mut self, _x1: f32, _y1: f32, _x2: f32, _y2: f32) -> IconvgResult<()> {
        Ok(())
    }

    fn cube_to(
        &mut self,
        _x1: f32,
        _y1: f32,
        _x2: f32,
        _y2: f32,
        _x3: f32,
        _y3: f32,
    ) -> IconvgResult<()> {
        Ok(())
    }

    fn arc_to(&mut self, _arc: ArcSegment) -> IconvgResult<()> {
        Ok(())
    }

    fn on_metadata_viewbox(&mut self, _viewbox: Rectangle) -> IconvgResult<()> {
        Ok(())
    }

    fn on_metadata_suggested_palette(&mut self, _palette: &Palette) -> IconvgResult<()> {
        Ok(())
    }
}
