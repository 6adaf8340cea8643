//! The canvas contract and the decorators that wrap it.

pub(crate) mod broken;
pub(crate) mod checked;
pub(crate) mod contract;
pub(crate) mod debug;
