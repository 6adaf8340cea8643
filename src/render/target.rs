use crate::foundation::core::Rectangle;
use crate::foundation::error::{IconvgError, IconvgResult};

/// A pixel surface that backend canvases draw into.
///
/// Without the `cpu` feature this only records its size; canvases created for it are broken.
pub struct RenderTarget {
    width: u16,
    height: u16,
    #[cfg(feature = "cpu")]
    ctx: vello_cpu::RenderContext,
}

impl RenderTarget {
    pub fn new(width: u32, height: u32) -> IconvgResult<Self> {
        let width: u16 = width
            .try_into()
            .map_err(|_| IconvgError::InvalidConstructorArgument)?;
        let height: u16 = height
            .try_into()
            .map_err(|_| IconvgError::InvalidConstructorArgument)?;
        if width == 0 || height == 0 {
            return Err(IconvgError::InvalidConstructorArgument);
        }
        Ok(Self {
            width,
            height,
            #[cfg(feature = "cpu")]
            ctx: vello_cpu::RenderContext::new(width, height),
        })
    }

    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    /// The whole surface as a destination rectangle.
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(0.0, 0.0, f32::from(self.width), f32::from(self.height))
    }
}

#[cfg(feature = "cpu")]
impl RenderTarget {
    pub(crate) fn ctx_mut(&mut self) -> &mut vello_cpu::RenderContext {
        &mut self.ctx
    }

    /// Rasterize everything drawn so far into tightly packed premultiplied RGBA8.
    pub fn to_premul_rgba8(&mut self) -> Vec<u8> {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        pixmap.data_as_u8_slice().to_vec()
    }

    /// Rasterize everything drawn so far into a straight-alpha image.
    pub fn to_rgba_image(&mut self) -> IconvgResult<image::RgbaImage> {
        let mut data = self.to_premul_rgba8();
        for px in data.chunks_exact_mut(4) {
            let c = crate::foundation::color::PremulColor::new(px[0], px[1], px[2], px[3]);
            px.copy_from_slice(&c.to_nonpremul().as_array());
        }
        image::RgbaImage::from_raw(self.width(), self.height(), data).ok_or_else(|| {
            IconvgError::backend(anyhow::anyhow!(
                "pixel buffer does not match {}x{} target",
                self.width,
                self.height
            ))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/target.rs"]
mod tests;
