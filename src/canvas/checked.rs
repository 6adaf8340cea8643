use crate::canvas::contract::{ArcSegment, Canvas, DispatchState};
use crate::foundation::color::Palette;
use crate::foundation::core::Rectangle;
use crate::foundation::error::{IconvgError, IconvgResult};
use crate::paint::resolve::Paint;

/// Enforces the call-ordering rules of [`Canvas`] in front of another canvas.
///
/// Out-of-order calls, and any call after an operation has failed, are rejected with
/// [`IconvgError::InvalidCallSequence`] and never reach the wrapped canvas. `end_decode` is
/// forwarded exactly once, while decoding.
pub struct CheckedCanvas<'a> {
    inner: &'a mut dyn Canvas,
    state: DispatchState,
    in_drawing: bool,
    in_path: bool,
    failed: bool,
}

impl<'a> CheckedCanvas<'a> {
    pub fn new(inner: &'a mut dyn Canvas) -> Self {
        Self {
            inner,
            state: DispatchState::Unstarted,
            in_drawing: false,
            in_path: false,
            failed: false,
        }
    }

    pub fn state(&self) -> DispatchState {
        self.state
    }

    /// Whether a drawing or path bracket is open.
    pub fn is_mid_drawing(&self) -> bool {
        self.in_drawing || self.in_path
    }

    fn require(&self, ok: bool) -> IconvgResult<()> {
        if ok && !self.failed && self.state == DispatchState::Decoding {
            Ok(())
        } else {
            Err(IconvgError::InvalidCallSequence)
        }
    }

    fn track(&mut self, result: IconvgResult<()>) -> IconvgResult<()> {
        if result.is_err() {
            self.failed = true;
        }
        result
    }
}

impl Canvas for CheckedCanvas<'_> {
    fn contract_version(&self) -> u32 {
        self.inner.contract_version()
    }

    fn begin_decode(&mut self, dst_rect: Rectangle) -> IconvgResult<()> {
        if self.state != DispatchState::Unstarted {
            return Err(IconvgError::InvalidCallSequence);
        }
        self.state = DispatchState::Decoding;
        let result = self.inner.begin_decode(dst_rect);
        self.track(result)
    }

    fn end_decode(&mut self, result: IconvgResult<()>) -> IconvgResult<()> {
        if self.state != DispatchState::Decoding {
            return Err(IconvgError::InvalidCallSequence);
        }
        self.state = DispatchState::Finished;
        let result = match result {
            Ok(()) if self.is_mid_drawing() => Err(IconvgError::InvalidCallSequence),
            other => other,
        };
        self.inner.end_decode(result)
    }

    fn begin_drawing(&mut self) -> IconvgResult<()> {
        self.require(!self.in_drawing)?;
        self.in_drawing = true;
        let result = self.inner.begin_drawing();
        self.track(result)
    }

    fn end_drawing(&mut self, paint: &Paint<'_>) -> IconvgResult<()> {
        self.require(self.in_drawing && !self.in_path)?;
        self.in_drawing = false;
        let result = self.inner.end_drawing(paint);
        self.track(result)
    }

    fn begin_path(&mut self, x0: f32, y0: f32) -> IconvgResult<()> {
        self.require(self.in_drawing && !self.in_path)?;
        self.in_path = true;
        let result = self.inner.begin_path(x0, y0);
        self.track(result)
    }

    fn end_path(&mut self) -> IconvgResult<()> {
        self.require(self.in_path)?;
        self.in_path = false;
        let result = self.inner.end_path();
        self.track(result)
    }

    fn line_to(&mut self, x1: f32, y1: f32) -> IconvgResult<()> {
        self.require(self.in_path)?;
        let result = self.inner.line_to(x1, y1);
        self.track(result)
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> IconvgResult<()> {
        self.require(self.in_path)?;
        let result = self.inner.quad_to(x1, y1, x2, y2);
        self.track(result)
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
        self.require(self.in_path)?;
        let result = self.inner.cube_to(x1, y1, x2, y2, x3, y3);
        self.track(result)
    }

    fn arc_to(&mut self, arc: ArcSegment) -> IconvgResult<()> {
        self.require(self.in_path)?;
        let result = self.inner.arc_to(arc);
        self.track(result)
    }

    fn on_metadata_viewbox(&mut self, viewbox: Rectangle) -> IconvgResult<()> {
        self.require(!self.in_drawing)?;
        let result = self.inner.on_metadata_viewbox(viewbox);
        self.track(result)
    }

    fn on_metadata_suggested_palette(&mut self, palette: &Palette) -> IconvgResult<()> {
        self.require(!self.in_drawing)?;
        let result = self.inner.on_metadata_suggested_palette(palette);
        self.track(result)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/checked.rs"]
mod tests;
