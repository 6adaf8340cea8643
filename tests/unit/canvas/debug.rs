use super::*;

use crate::canvas::broken::BrokenCanvas;
use crate::foundation::color::NonpremulColor;
use crate::foundation::error::IconvgError;
use crate::geometry::matrix::Matrix2x3;
use crate::paint::model::{GradientDesc, GradientStop, PaintDesc, SpreadMode};

fn lines(buf: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(buf)
        .lines()
        .map(str::to_owned)
        .collect()
}

#[test]
fn detached_canvas_succeeds_and_logs_with_prefix() {
    let mut buf = Vec::new();
    let flat = PaintDesc::flat(NonpremulColor::new(255, 0, 0, 128));
    let radial = PaintDesc::RadialGradient(GradientDesc::new(
        vec![
            GradientStop::new(0.0, NonpremulColor::new(255, 0, 0, 255)),
            GradientStop::new(1.0, NonpremulColor::new(0, 0, 255, 255)),
        ],
        SpreadMode::Pad,
        Matrix2x3::IDENTITY,
    ));
    let palette = Palette::default();
    {
        let mut c = DebugCanvas::detached()
            .with_prefix("dbg: ")
            .with_writer(&mut buf);
        c.begin_decode(Rectangle::new(0.0, 0.0, 48.0, 48.0)).unwrap();
        c.on_metadata_viewbox(Rectangle::DEFAULT_VIEWBOX).unwrap();
        c.on_metadata_suggested_palette(&palette).unwrap();
        c.begin_drawing().unwrap();
        c.begin_path(1.5, 2.0).unwrap();
        c.line_to(3.0, 4.0).unwrap();
        c.quad_to(1.0, 2.0, 3.0, 4.0).unwrap();
        c.cube_to(1.0, 2.0, 3.0, 4.0, 5.0, 6.0).unwrap();
        c.arc_to(ArcSegment {
            radius_x: 2.0,
            radius_y: 3.0,
            x_axis_rotation: 0.5,
            large_arc: true,
            sweep: false,
            final_x: 7.0,
            final_y: 8.0,
        })
        .unwrap();
        c.end_path().unwrap();
        c.end_drawing(&Paint::new(&flat, &palette)).unwrap();
        c.begin_drawing().unwrap();
        c.end_drawing(&Paint::new(&radial, &palette)).unwrap();
        c.end_decode(Ok(())).unwrap();
    }

    assert_eq!(
        lines(&buf),
        vec![
            "dbg: begin_decode({0, 0, 48, 48})",
            "dbg: on_metadata_viewbox({-32, -32, 32, 32})",
            "dbg: on_metadata_suggested_palette(first=rgba(0, 0, 0, 255))",
            "dbg: begin_drawing()",
            "dbg: begin_path(1.5, 2)",
            "dbg: line_to(3, 4)",
            "dbg: quad_to(1, 2, 3, 4)",
            "dbg: cube_to(1, 2, 3, 4, 5, 6)",
            "dbg: arc_to(2, 3, 0.5, true, false, 7, 8)",
            "dbg: end_path()",
            "dbg: end_drawing(flat_color rgba(255, 0, 0, 128))",
            "dbg: begin_drawing()",
            "dbg: end_drawing(radial_gradient stops=2 spread=Pad)",
            "dbg: end_decode(ok)",
        ]
    );
}

#[test]
fn detached_end_decode_passes_error_through() {
    let mut c = DebugCanvas::detached();
    assert_eq!(
        c.end_decode(Err(IconvgError::BadMagicIdentifier)),
        Err(IconvgError::BadMagicIdentifier)
    );
}

#[test]
fn logs_error_argument_of_end_decode() {
    let mut buf = Vec::new();
    {
        let mut c = DebugCanvas::detached().with_writer(&mut buf);
        let _ = c.end_decode(Err(IconvgError::InvalidPaintType));
    }
    assert_eq!(
        lines(&buf),
        vec!["end_decode(err: iconvg: invalid paint type)"]
    );
}

#[test]
fn wrapped_canvas_results_are_forwarded() {
    let mut broken = BrokenCanvas::new(IconvgError::NullVtable);
    let mut buf = Vec::new();
    {
        let mut c = DebugCanvas::wrapping(&mut broken).with_writer(&mut buf);
        assert_eq!(c.begin_drawing(), Err(IconvgError::NullVtable));
        assert_eq!(c.end_decode(Ok(())), Err(IconvgError::NullVtable));
    }
    assert_eq!(lines(&buf), vec!["begin_drawing()", "end_decode(ok)"]);
}

#[test]
fn invalid_paint_is_logged_then_forwarded() {
    let desc = PaintDesc::Unrecognized(9);
    let palette = Palette::default();
    let mut buf = Vec::new();
    {
        let mut c = DebugCanvas::detached().with_writer(&mut buf);
        c.end_drawing(&Paint::new(&desc, &palette)).unwrap();
    }
    assert_eq!(lines(&buf), vec!["end_drawing(invalid_paint)"]);
}

#[test]
fn without_writer_nothing_is_written_and_calls_succeed() {
    let mut c = DebugCanvas::new(None).with_prefix("quiet");
    assert!(c.begin_decode(Rectangle::DEFAULT_VIEWBOX).is_ok());
    assert!(c.end_decode(Ok(())).is_ok());
}

struct Versioned(u32);

impl Canvas for Versioned {
    fn contract_version(&self) -> u32 {
        self.0
    }
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

#[test]
fn contract_version_is_the_wrapped_canvas_version() {
    let mut old = Versioned(7);
    assert_eq!(DebugCanvas::wrapping(&mut old).contract_version(), 7);
    assert_eq!(
        DebugCanvas::detached().contract_version(),
        crate::canvas::contract::CANVAS_CONTRACT_VERSION
    );
}

struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::other("disk full"))
    }
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn writer_failure_does_not_fail_the_call() {
    let mut c = DebugCanvas::detached().with_writer(FailingWriter);
    assert_eq!(c.begin_decode(Rectangle::DEFAULT_VIEWBOX), Ok(()));
    assert_eq!(c.end_decode(Ok(())), Ok(()));
}
