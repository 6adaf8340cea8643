use std::sync::Arc;

pub type IconvgResult<T> = Result<T, IconvgError>;

/// Errors reported through the canvas dispatch contract.
///
/// `Bad*` variants are file format errors: the source is not well-formed IconVG. Everything else
/// is a programming error or a backend limitation.
///
/// Equality is identity: two errors are equal when they are the same stable variant, or when they
/// are clones of the same backend error.
#[derive(thiserror::Error, Debug, Clone)]
pub enum IconvgError {
    #[error("iconvg: bad magic identifier")]
    BadMagicIdentifier,

    #[error("iconvg: bad metadata")]
    BadMetadata,

    #[error("iconvg: bad metadata (viewbox)")]
    BadMetadataViewbox,

    #[error("iconvg: null argument")]
    NullArgument,

    #[error("iconvg: null vtable")]
    NullVtable,

    #[error("iconvg: unsupported vtable")]
    UnsupportedVtable,

    #[error("iconvg: invalid backend (not enabled)")]
    InvalidBackendNotEnabled,

    #[error("iconvg: invalid constructor argument")]
    InvalidConstructorArgument,

    #[error("iconvg: invalid paint type")]
    InvalidPaintType,

    #[error("iconvg: invalid call sequence")]
    InvalidCallSequence,

    #[error("iconvg: backend error: {0}")]
    Backend(Arc<anyhow::Error>),
}

impl IconvgError {
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(Arc::new(err.into()))
    }

    /// Whether the error means the source bytes are malformed, as opposed to misuse of the API.
    pub fn is_file_format_error(&self) -> bool {
        matches!(
            self,
            Self::BadMagicIdentifier | Self::BadMetadata | Self::BadMetadataViewbox
        )
    }
}

impl PartialEq for IconvgError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Backend(a), Self::Backend(b)) => Arc::ptr_eq(a, b),
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

impl Eq for IconvgError {}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
