//! Core processing building blocks: square padding, colour keying, checkerboard
//! compositing, resampling and the conversion pipeline. These are internal
//! primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
