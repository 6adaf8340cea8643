pub(crate) mod backend;
#[cfg(feature = "cpu")]
pub(crate) mod cpu;
pub(crate) mod target;
