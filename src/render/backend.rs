use crate::canvas::broken::BrokenCanvas;
use crate::canvas::contract::Canvas;
use crate::foundation::error::IconvgError;
use crate::render::target::RenderTarget;

#[cfg(feature = "cpu")]
use crate::decode::dispatch::{DecodeOptions, decode};
#[cfg(feature = "cpu")]
use crate::decode::event::DrawingEvent;
#[cfg(feature = "cpu")]
use crate::foundation::error::IconvgResult;

/// Straight-alpha color used for gradients a backend cannot express: a 50% transparent
/// grayish purple.
pub const DEFAULT_FALLBACK_RGBA: [u8; 4] = [191, 64, 191, 128];

/// Available backend kinds.
///
/// - `Cpu` needs the `cpu` feature (on by default).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// CPU raster backend powered by `vello_cpu`.
    Cpu,
}

/// Backend options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CpuCanvasOpts {
    /// Fill color for gradients with no usable stops or a non-invertible matrix.
    pub fallback_rgba: [u8; 4],
    /// If set, `begin_decode` paints the whole target this straight-alpha color first.
    pub clear_rgba: Option<[u8; 4]>,
}

impl Default for CpuCanvasOpts {
    fn default() -> Self {
        Self {
            fallback_rgba: DEFAULT_FALLBACK_RGBA,
            clear_rgba: None,
        }
    }
}

impl CpuCanvasOpts {
    pub fn with_fallback_rgba(mut self, rgba: [u8; 4]) -> Self {
        self.fallback_rgba = rgba;
        self
    }

    pub fn with_clear_rgba(mut self, rgba: [u8; 4]) -> Self {
        self.clear_rgba = Some(rgba);
        self
    }
}

/// Create a canvas drawing into `target`.
///
/// Construction never fails outright: a backend that is compiled out yields a canvas that fails
/// every call with [`IconvgError::InvalidBackendNotEnabled`], and a missing target one that fails
/// with [`IconvgError::InvalidConstructorArgument`].
pub fn create_canvas<'a>(
    kind: BackendKind,
    target: Option<&'a mut RenderTarget>,
    opts: &CpuCanvasOpts,
) -> Box<dyn Canvas + 'a> {
    match kind {
        BackendKind::Cpu => cpu_canvas(target, opts),
    }
}

#[cfg(feature = "cpu")]
fn cpu_canvas<'a>(target: Option<&'a mut RenderTarget>, opts: &CpuCanvasOpts) -> Box<dyn Canvas + 'a> {
    match target {
        Some(target) => Box::new(crate::render::cpu::CpuCanvas::new(target, opts.clone())),
        None => Box::new(BrokenCanvas::new(IconvgError::InvalidConstructorArgument)),
    }
}

#[cfg(not(feature = "cpu"))]
fn cpu_canvas<'a>(_target: Option<&'a mut RenderTarget>, _opts: &CpuCanvasOpts) -> Box<dyn Canvas + 'a> {
    tracing::warn!("cpu backend requested but the `cpu` feature is disabled");
    Box::new(BrokenCanvas::new(IconvgError::InvalidBackendNotEnabled))
}

/// Decode `events` onto a fresh `width` x `height` CPU target and read it back.
///
/// Unless `opts` names a destination rectangle the graphic fills the whole image.
#[cfg(feature = "cpu")]
pub fn render_to_image<I>(
    events: I,
    width: u32,
    height: u32,
    opts: &DecodeOptions,
    canvas_opts: &CpuCanvasOpts,
) -> IconvgResult<image::RgbaImage>
where
    I: IntoIterator<Item = IconvgResult<DrawingEvent>>,
{
    let mut target = RenderTarget::new(width, height)?;
    let opts = match opts.dst_rect {
        Some(_) => opts.clone(),
        None => opts.clone().with_dst_rect(target.bounds()),
    };
    {
        let mut canvas = create_canvas(BackendKind::Cpu, Some(&mut target), canvas_opts);
        decode(canvas.as_mut(), events, &opts)?;
    }
    target.to_rgba_image()
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
