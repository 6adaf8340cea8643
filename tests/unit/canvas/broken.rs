use super::*;

use crate::foundation::color::NonpremulColor;
use crate::paint::model::PaintDesc;

#[test]
fn every_operation_returns_the_stored_error() {
    let err = IconvgError::UnsupportedVtable;
    let mut c = BrokenCanvas::new(err.clone());
    let desc = PaintDesc::flat(NonpremulColor::new(1, 2, 3, 4));
    let palette = Palette::default();
    let arc = ArcSegment {
        radius_x: 1.0,
        radius_y: 1.0,
        x_axis_rotation: 0.0,
        large_arc: false,
        sweep: true,
        final_x: 2.0,
        final_y: 0.0,
    };

    assert_eq!(c.begin_decode(Rectangle::DEFAULT_VIEWBOX), Err(err.clone()));
    assert_eq!(c.on_metadata_viewbox(Rectangle::DEFAULT_VIEWBOX), Err(err.clone()));
    assert_eq!(c.on_metadata_suggested_palette(&palette), Err(err.clone()));
    assert_eq!(c.begin_drawing(), Err(err.clone()));
    assert_eq!(c.begin_path(0.0, 0.0), Err(err.clone()));
    assert_eq!(c.line_to(1.0, 0.0), Err(err.clone()));
    assert_eq!(c.quad_to(1.0, 0.0, 1.0, 1.0), Err(err.clone()));
    assert_eq!(c.cube_to(1.0, 0.0, 1.0, 1.0, 0.0, 1.0), Err(err.clone()));
    assert_eq!(c.arc_to(arc), Err(err.clone()));
    assert_eq!(c.end_path(), Err(err.clone()));
    assert_eq!(c.end_drawing(&Paint::new(&desc, &palette)), Err(err.clone()));
}

#[test]
fn end_decode_returns_the_stored_error_even_on_success() {
    let mut c = BrokenCanvas::new(IconvgError::InvalidBackendNotEnabled);
    assert_eq!(c.end_decode(Ok(())), Err(IconvgError::InvalidBackendNotEnabled));
    assert_eq!(
        c.end_decode(Err(IconvgError::BadMetadata)),
        Err(IconvgError::InvalidBackendNotEnabled)
    );
}

#[test]
fn backend_error_identity_is_preserved() {
    let err = IconvgError::backend(anyhow::anyhow!("no surface"));
    let mut c = BrokenCanvas::new(err.clone());
    assert_eq!(c.begin_drawing(), Err(err.clone()));
    assert_eq!(c.error(), &err);
    assert_ne!(
        c.begin_drawing(),
        Err(IconvgError::backend(anyhow::anyhow!("no surface")))
    );
}
