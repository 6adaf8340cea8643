//! Pure functions that reshape curve and gradient descriptions into what a typical 2D library
//! can draw: cubic Béziers, invertible matrices, destination-space co-ordinates.

pub(crate) mod elevate;
pub(crate) mod matrix;
pub(crate) mod viewbox;
