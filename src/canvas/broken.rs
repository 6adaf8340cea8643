use crate::canvas::contract::{ArcSegment, Canvas};
use crate::foundation::color::Palette;
use crate::foundation::core::Rectangle;
use crate::foundation::error::{IconvgError, IconvgResult};
use crate::paint::resolve::Paint;

/// A canvas that fails every call with one fixed error.
///
/// Constructors return this instead of a `Result` when they cannot build a working canvas, so
/// the failure surfaces through the normal decode path. `end_decode` returns the stored error
/// whatever its argument.
#[derive(Clone, Debug)]
pub struct BrokenCanvas {
    err: IconvgError,
}

impl BrokenCanvas {
    pub fn new(err: IconvgError) -> Self {
        Self { err }
    }

    pub fn error(&self) -> &IconvgError {
        &self.err
    }

    fn fail(&self) -> IconvgResult<()> {
        Err(self.err.clone())
    }
}

impl Canvas for BrokenCanvas {
    fn begin_decode(&mut self, _dst_rect: Rectangle) -> IconvgResult<()> {
        self.fail()
    }

    fn end_decode(&mut self, _result: IconvgResult<()>) -> IconvgResult<()> {
        self.fail()
    }

    fn begin_drawing(&mut self) -> IconvgResult<()> {
        self.fail()
    }

    fn end_drawing(&mut self, _paint: &Paint<'_>) -> IconvgResult<()> {
        self.fail()
    }

    fn begin_path(&mut self, _x0: f32, _y0: f32) -> IconvgResult<()> {
        self.fail()
    }

    fn end_path(&mut self) -> IconvgResult<()> {
        self.fail()
    }

    fn line_to(&mut self, _x1: f32, _y1: f32) -> IconvgResult<()> {
        self.fail()
    }

    fn quad_to(&mut self, _x1: f32, _y1: f32, _x2: f32, _y2: f32) -> IconvgResult<()> {
        self.fail()
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
        self.fail()
    }

    fn arc_to(&mut self, _arc: ArcSegment) -> IconvgResult<()> {
        self.fail()
    }

    fn on_metadata_viewbox(&mut self, _viewbox: Rectangle) -> IconvgResult<()> {
        self.fail()
    }

    fn on_metadata_suggested_palette(&mut self, _palette: &Palette) -> IconvgResult<()> {
        self.fail()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/broken.rs"]
mod tests;
