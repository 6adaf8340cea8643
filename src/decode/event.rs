use crate::canvas::contract::ArcSegment;
use crate::foundation::color::Palette;
use crate::foundation::core::Rectangle;
use crate::paint::model::PaintDesc;

/// One item of a decoded IconVG drawing stream.
///
/// Co-ordinates are in viewbox space, as stored in the file. Metadata events come first, in
/// increasing metadata-id order, followed by drawing events.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawingEvent {
    MetadataViewbox(Rectangle),
    MetadataSuggestedPalette(Box<Palette>),
    BeginDrawing,
    EndDrawing(PaintDesc),
    BeginPath {
        x0: f32,
        y0: f32,
    },
    EndPath,
    LineTo {
        x1: f32,
        y1: f32,
    },
    QuadTo {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
    },
    CubeTo {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        x3: f32,
        y3: f32,
    },
    ArcTo(ArcSegment),
}

impl DrawingEvent {
    /// The file-format metadata id for metadata events, `None` for drawing events.
    pub fn metadata_id(&self) -> Option<u32> {
        match self {
            Self::MetadataViewbox(_) => Some(8),
            Self::MetadataSuggestedPalette(_) => Some(16),
            _ => None,
        }
    }

    pub fn is_metadata(&self) -> bool {
        self.metadata_id().is_some()
    }
}
