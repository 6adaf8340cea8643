use crate::foundation::color::PaintColor;
use crate::geometry::matrix::Matrix2x3;

/// What kind of fill a paint describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaintType {
    Invalid,
    FlatColor,
    LinearGradient,
    RadialGradient,
}

/// How a gradient extends beyond its `[0, 1]` offset range.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum SpreadMode {
    /// Transparent outside the range.
    None,
    /// Clamp to the nearest end stop.
    #[default]
    Pad,
    Reflect,
    Repeat,
}

impl SpreadMode {
    /// Decode the two-bit spread field used by the file format.
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => Self::None,
            1 => Self::Pad,
            2 => Self::Reflect,
            _ => Self::Repeat,
        }
    }
}

/// One gradient color stop. Offsets need not increase; a repeated offset is a hard transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: PaintColor,
}

impl GradientStop {
    pub fn new(offset: f32, color: impl Into<PaintColor>) -> Self {
        Self {
            offset,
            color: color.into(),
        }
    }
}

/// Gradient parameters shared by the linear and radial variants.
///
/// `transform` maps user space into gradient space: the `x ∈ [0, 1]` segment for linear
/// gradients, the unit circle at the origin for radial ones.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientDesc {
    pub stops: Vec<GradientStop>,
    pub spread: SpreadMode,
    pub transform: Matrix2x3,
}

impl GradientDesc {
    pub fn new(stops: Vec<GradientStop>, spread: SpreadMode, transform: Matrix2x3) -> Self {
        Self {
            stops,
            spread,
            transform,
        }
    }
}

/// A decoded paint, owned by the dispatch engine for the span of one drawing.
///
/// Backends never see this type directly; they get a [`crate::Paint`] view over it.
#[derive(Clone, Debug, PartialEq)]
pub enum PaintDesc {
    FlatColor(PaintColor),
    LinearGradient(GradientDesc),
    RadialGradient(GradientDesc),
    /// A paint tag the decoder did not recognize.
    Unrecognized(u8),
}

impl PaintDesc {
    pub fn flat(color: impl Into<PaintColor>) -> Self {
        Self::FlatColor(color.into())
    }

    pub fn paint_type(&self) -> PaintType {
        match self {
            Self::FlatColor(_) => PaintType::FlatColor,
            Self::LinearGradient(_) => PaintType::LinearGradient,
            Self::RadialGradient(_) => PaintType::RadialGradient,
            Self::Unrecognized(_) => PaintType::Invalid,
        }
    }

    pub(crate) fn gradient(&self) -> Option<&GradientDesc> {
        match self {
            Self::LinearGradient(g) | Self::RadialGradient(g) => Some(g),
            Self::FlatColor(_) | Self::Unrecognized(_) => None,
        }
    }
}
