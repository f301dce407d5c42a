//! Splash bitmap header generation
//!
//! Runs on the host at build time: packs a monochrome raster with
//! `glimt-bitmap` and renders it as a C++ header the firmware build can
//! `#include`. The only I/O in the toolchain happens here, and it is
//! atomic: the artifact is written to a sibling temporary file and
//! renamed into place, so a failed run never leaves a partial header.

pub mod emitter;
pub mod splash;

pub use emitter::{render, write_header, EmitError, HeaderSpec};
