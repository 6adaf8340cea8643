//! IconVG canvas dispatch core.
//!
//! A decoded IconVG drawing stream is replayed onto a [`Canvas`], the capability set every
//! rendering backend implements:
//!
//! - Feed [`DrawingEvent`]s to [`decode`], which maps them from the graphic's viewbox onto a
//!   destination rectangle and enforces the call sequence
//! - Backends read paints through the transient [`Paint`] view
//! - [`elevate_quad`] and [`repair_linear_gradient_matrix`] adapt curves and gradients for 2D
//!   libraries that lack quadratic Béziers or need invertible matrices
//! - The `cpu` feature provides a `vello_cpu` reference backend; see [`create_canvas`]
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod canvas;
pub(crate) mod decode;
pub(crate) mod geometry;
pub(crate) mod paint;
pub(crate) mod render;

pub use crate::foundation::color::{
    BlendOperand, NonpremulColor, PALETTE_LEN, PaintColor, Palette, PremulColor,
};
pub use crate::foundation::core::{Affine, CubicBez, Point, Rectangle};
pub use crate::foundation::error::{IconvgError, IconvgResult};

pub use crate::canvas::broken::BrokenCanvas;
pub use crate::canvas::checked::CheckedCanvas;
pub use crate::canvas::contract::{
    ArcSegment, CANVAS_CONTRACT_VERSION, Canvas, DispatchState, NullCanvas,
};
pub use crate::canvas::debug::DebugCanvas;
pub use crate::decode::dispatch::{DecodeOptions, decode, decode_viewbox};
pub use crate::decode::event::DrawingEvent;
pub use crate::geometry::elevate::elevate_quad;
pub use crate::geometry::matrix::{Matrix2x3, repair_linear_gradient_matrix};
pub use crate::geometry::viewbox::ViewboxTransform;
pub use crate::paint::model::{GradientDesc, GradientStop, PaintDesc, PaintType, SpreadMode};
pub use crate::paint::resolve::Paint;
pub use crate::render::backend::{BackendKind, CpuCanvasOpts, DEFAULT_FALLBACK_RGBA, create_canvas};
#[cfg(feature = "cpu")]
pub use crate::render::backend::render_to_image;
#[cfg(feature = "cpu")]
pub use crate::render::cpu::CpuCanvas;
pub use crate::render::target::RenderTarget;
