use super::*;

use crate::foundation::core::Rectangle;

#[test]
fn options_default_to_grayish_purple_fallback() {
    let opts = CpuCanvasOpts::default();
    assert_eq!(opts.fallback_rgba, [191, 64, 191, 128]);
    assert_eq!(opts.clear_rgba, None);

    let opts = opts
        .with_clear_rgba([1, 2, 3, 4])
        .with_fallback_rgba([0, 0, 0, 255]);
    assert_eq!(opts.clear_rgba, Some([1, 2, 3, 4]));
    assert_eq!(opts.fallback_rgba, [0, 0, 0, 255]);
}

#[cfg(feature = "cpu")]
#[test]
fn missing_target_yields_a_broken_canvas() {
    let mut canvas = create_canvas(BackendKind::Cpu, None, &CpuCanvasOpts::default());
    assert_eq!(
        canvas.begin_decode(Rectangle::DEFAULT_VIEWBOX),
        Err(IconvgError::InvalidConstructorArgument)
    );
    assert_eq!(
        canvas.end_decode(Ok(())),
        Err(IconvgError::InvalidConstructorArgument)
    );
}

#[cfg(feature = "cpu")]
#[test]
fn cpu_canvas_accepts_a_session() {
    let mut target = RenderTarget::new(8, 8).unwrap();
    let mut canvas = create_canvas(BackendKind::Cpu, Some(&mut target), &CpuCanvasOpts::default());
    assert_eq!(canvas.begin_decode(Rectangle::new(0.0, 0.0, 8.0, 8.0)), Ok(()));
    assert_eq!(canvas.end_decode(Ok(())), Ok(()));
}

#[cfg(not(feature = "cpu"))]
#[test]
fn disabled_backend_yields_a_broken_canvas() {
    let mut target = RenderTarget::new(8, 8).unwrap();
    let mut canvas = create_canvas(BackendKind::Cpu, Some(&mut target), &CpuCanvasOpts::default());
    assert_eq!(
        canvas.begin_decode(Rectangle::DEFAULT_VIEWBOX),
        Err(IconvgError::InvalidBackendNotEnabled)
    );
    assert_eq!(
        canvas.end_decode(Ok(())),
        Err(IconvgError::InvalidBackendNotEnabled)
    );
}
