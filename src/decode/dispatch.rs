use std::iter::Peekable;

use crate::canvas::checked::CheckedCanvas;
use crate::canvas::contract::{ArcSegment, CANVAS_CONTRACT_VERSION, Canvas};
use crate::decode::event::DrawingEvent;
use crate::foundation::color::Palette;
use crate::foundation::core::Rectangle;
use crate::foundation::error::{IconvgError, IconvgResult};
use crate::geometry::viewbox::ViewboxTransform;
use crate::paint::resolve::Paint;

/// Caller-supplied knobs for [`decode`].
#[derive(Clone, Debug, Default)]
pub struct DecodeOptions {
    /// Where to draw, in canvas co-ordinates. Defaults to the graphic's viewbox.
    pub dst_rect: Option<Rectangle>,
    /// Overrides both the suggested palette and the default palette.
    pub palette: Option<Palette>,
}

impl DecodeOptions {
    pub fn with_dst_rect(mut self, dst_rect: Rectangle) -> Self {
        self.dst_rect = Some(dst_rect);
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }
}

#[derive(Debug, Default)]
struct Header {
    viewbox: Option<Rectangle>,
    suggested_palette: Option<Box<Palette>>,
}

impl Header {
    fn viewbox(&self) -> Rectangle {
        self.viewbox.unwrap_or(Rectangle::DEFAULT_VIEWBOX)
    }
}

/// Drive `canvas` through one decode session fed by `events`.
///
/// `begin_decode` and `end_decode` are each called exactly once (unless the canvas reports an
/// unsupported contract version, in which case nothing is called). The first error, from the
/// stream or from the canvas, stops dispatch and is handed to `end_decode`; its return value is
/// returned here.
#[tracing::instrument(skip_all)]
pub fn decode<I>(canvas: &mut dyn Canvas, events: I, opts: &DecodeOptions) -> IconvgResult<()>
where
    I: IntoIterator<Item = IconvgResult<DrawingEvent>>,
{
    let version = canvas.contract_version();
    if version != CANVAS_CONTRACT_VERSION {
        tracing::debug!(version, "refusing canvas with unsupported contract version");
        return Err(IconvgError::UnsupportedVtable);
    }

    let mut checked = CheckedCanvas::new(canvas);
    let result = dispatch(&mut checked, events.into_iter().peekable(), opts);
    if let Err(err) = &result {
        tracing::debug!(error = %err, "decode stopped early");
    }
    checked.end_decode(result)
}

/// Read only the leading metadata of `events` and return the graphic's viewbox.
///
/// Without a viewbox entry this is `{-32, -32, +32, +32}`. Drawing events are not consumed.
pub fn decode_viewbox<I>(events: I) -> IconvgResult<Rectangle>
where
    I: IntoIterator<Item = IconvgResult<DrawingEvent>>,
{
    read_header(&mut events.into_iter().peekable()).map(|h| h.viewbox())
}

fn dispatch<I>(
    canvas: &mut CheckedCanvas<'_>,
    mut events: Peekable<I>,
    opts: &DecodeOptions,
) -> IconvgResult<()>
where
    I: Iterator<Item = IconvgResult<DrawingEvent>>,
{
    let header = read_header(&mut events);

    // A broken header still gets a begin_decode, so end_decode always has a matching start.
    let dst = match (&header, opts.dst_rect) {
        (_, Some(dst)) => dst,
        (Ok(h), None) => h.viewbox(),
        (Err(_), None) => Rectangle::default(),
    }
    .canonicalize();
    canvas.begin_decode(dst)?;
    let header = header?;

    if let Some(viewbox) = header.viewbox {
        canvas.on_metadata_viewbox(viewbox)?;
    }
    if let Some(palette) = &header.suggested_palette {
        canvas.on_metadata_suggested_palette(palette)?;
    }

    let Some(xf) = ViewboxTransform::new(header.viewbox(), dst) else {
        tracing::debug!("empty destination rectangle, skipping drawing events");
        return Ok(());
    };
    let palette = match (&opts.palette, &header.suggested_palette) {
        (Some(p), _) => p.clone(),
        (None, Some(p)) => (**p).clone(),
        (None, None) => Palette::default(),
    };
    let dst_to_viewbox = xf.dst_to_viewbox();

    for item in events {
        match item? {
            DrawingEvent::MetadataViewbox(_) | DrawingEvent::MetadataSuggestedPalette(_) => {
                return Err(IconvgError::BadMetadata);
            }
            DrawingEvent::BeginDrawing => canvas.begin_drawing()?,
            DrawingEvent::EndDrawing(desc) => {
                let paint = Paint::new(&desc, &palette).with_dst_to_viewbox(dst_to_viewbox);
                canvas.end_drawing(&paint)?;
            }
            DrawingEvent::BeginPath { x0, y0 } => {
                let (x0, y0) = xf.map_point(x0, y0);
                canvas.begin_path(x0, y0)?;
            }
            DrawingEvent::EndPath => canvas.end_path()?,
            DrawingEvent::LineTo { x1, y1 } => {
                let (x1, y1) = xf.map_point(x1, y1);
                canvas.line_to(x1, y1)?;
            }
            DrawingEvent::QuadTo { x1, y1, x2, y2 } => {
                let (x1, y1) = xf.map_point(x1, y1);
                let (x2, y2) = xf.map_point(x2, y2);
                canvas.quad_to(x1, y1, x2, y2)?;
            }
            DrawingEvent::CubeTo {
                x1,
                y1,
                x2,
                y2,
                x3,
                y3,
            } => {
                let (x1, y1) = xf.map_point(x1, y1);
                let (x2, y2) = xf.map_point(x2, y2);
                let (x3, y3) = xf.map_point(x3, y3);
                canvas.cube_to(x1, y1, x2, y2, x3, y3)?;
            }
            DrawingEvent::ArcTo(arc) => {
                let (radius_x, radius_y) = xf.map_radii(arc.radius_x, arc.radius_y);
                let (final_x, final_y) = xf.map_point(arc.final_x, arc.final_y);
                canvas.arc_to(ArcSegment {
                    radius_x,
                    radius_y,
                    final_x,
                    final_y,
                    ..arc
                })?;
            }
        }
    }
    Ok(())
}

/// Consume the leading metadata events.
///
/// Metadata ids must strictly increase, so a repeated or out-of-order entry is `BadMetadata`.
fn read_header<I>(events: &mut Peekable<I>) -> IconvgResult<Header>
where
    I: Iterator<Item = IconvgResult<DrawingEvent>>,
{
    let mut header = Header::default();
    let mut last_id = 0;
    while let Some(item) =
        events.next_if(|item| item.as_ref().map_or(true, DrawingEvent::is_metadata))
    {
        let event = item?;
        let id = event.metadata_id().unwrap_or(0);
        if id <= last_id {
            return Err(IconvgError::BadMetadata);
        }
        last_id = id;
        match event {
            DrawingEvent::MetadataViewbox(viewbox) => {
                if !is_valid_viewbox(&viewbox) {
                    return Err(IconvgError::BadMetadataViewbox);
                }
                header.viewbox = Some(viewbox);
            }
            DrawingEvent::MetadataSuggestedPalette(palette) => {
                header.suggested_palette = Some(palette);
            }
            _ => {}
        }
    }
    Ok(header)
}

fn is_valid_viewbox(r: &Rectangle) -> bool {
    !r.is_empty()
        && [r.min_x, r.min_y, r.max_x, r.max_y]
            .iter()
            .all(|v| v.is_finite())
}

#[cfg(test)]
#[path = "../../tests/unit/decode/dispatch.rs"]
mod tests;
