/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PremulColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Straight-alpha RGBA8: the alpha channel is stored separately from the color channels.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct NonpremulColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl PremulColor {
    pub const OPAQUE_BLACK: Self = Self::new(0, 0, 0, 0xff);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// A premultiplied color is valid when no color channel exceeds alpha.
    pub fn is_valid(self) -> bool {
        self.r <= self.a && self.g <= self.a && self.b <= self.a
    }

    pub fn to_nonpremul(self) -> NonpremulColor {
        match self.a {
            0 => NonpremulColor::default(),
            0xff => NonpremulColor::new(self.r, self.g, self.b, 0xff),
            a => {
                let a = u32::from(a);
                let unpremul = |c: u8| -> u8 { ((u32::from(c) * 255 + a / 2) / a).min(255) as u8 };
                NonpremulColor::new(unpremul(self.r), unpremul(self.g), unpremul(self.b), self.a)
            }
        }
    }

    pub fn as_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl NonpremulColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_premul(self) -> PremulColor {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        PremulColor::new(
            premul(self.r, self.a),
            premul(self.g, self.a),
            premul(self.b, self.a),
            self.a,
        )
    }

    pub fn as_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Number of entries in the custom palette.
pub const PALETTE_LEN: usize = 64;

/// The 64-entry custom palette that palette-indexed colors refer to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub colors: [PremulColor; PALETTE_LEN],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: [PremulColor::OPAQUE_BLACK; PALETTE_LEN],
        }
    }
}

impl Palette {
    /// Build a palette from up to 64 leading entries; the rest stay opaque black.
    pub fn from_prefix(prefix: &[PremulColor]) -> Self {
        let mut palette = Self::default();
        for (dst, src) in palette.colors.iter_mut().zip(prefix) {
            *dst = *src;
        }
        palette
    }

    /// Look up an entry. Only the low six bits of `index` are significant.
    pub fn get(&self, index: u8) -> PremulColor {
        self.colors[usize::from(index & 0x3f)]
    }
}

/// A color as stored by the decoder, before resolution against a palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintColor {
    Premul(PremulColor),
    Nonpremul(NonpremulColor),
    PaletteIndex(u8),
    /// `(255 - t) * c0 + t * c1`, blended in premultiplied space.
    Blend {
        t: u8,
        c0: BlendOperand,
        c1: BlendOperand,
    },
}

/// One side of a [`PaintColor::Blend`]. Blends do not nest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendOperand {
    Premul(PremulColor),
    PaletteIndex(u8),
}

impl BlendOperand {
    fn resolve_premul(self, palette: &Palette) -> PremulColor {
        match self {
            Self::Premul(c) => c,
            Self::PaletteIndex(i) => palette.get(i),
        }
    }
}

impl PaintColor {
    pub fn resolve(self, palette: &Palette) -> NonpremulColor {
        match self {
            Self::Nonpremul(c) => c,
            other => other.resolve_premul(palette).to_nonpremul(),
        }
    }

    pub fn resolve_premul(self, palette: &Palette) -> PremulColor {
        match self {
            Self::Premul(c) => c,
            Self::Nonpremul(c) => c.to_premul(),
            Self::PaletteIndex(i) => palette.get(i),
            Self::Blend { t, c0, c1 } => {
                let c0 = c0.resolve_premul(palette).as_array();
                let c1 = c1.resolve_premul(palette).as_array();
                let (p, q) = (255 - u32::from(t), u32::from(t));
                let [r, g, b, a] = std::array::from_fn(|i| {
                    ((p * u32::from(c0[i]) + q * u32::from(c1[i]) + 128) / 255) as u8
                });
                PremulColor::new(r, g, b, a)
            }
        }
    }
}

impl From<NonpremulColor> for PaintColor {
    fn from(c: NonpremulColor) -> Self {
        Self::Nonpremul(c)
    }
}

impl From<PremulColor> for PaintColor {
    fn from(c: PremulColor) -> Self {
        Self::Premul(c)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
