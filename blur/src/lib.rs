//! Sparse-point rasterisation and 5x5 blur for a 160x120 VGA-style display.
//!
//! The pipeline is two steps: [`Raster::load`] expands a compiled-in list of
//! `(x, y)` pairs into an occupancy raster, then [`Engine::run`] convolves every
//! cell with [`Kernel::BLUR`] and streams one packed word per pixel into a
//! [`DisplaySink`], row by row.

#![no_std]

#[cfg(test)]
extern crate std;

#[macro_use]
mod fmt;

mod engine;
mod grid;
mod kernel;
mod pixels;
mod points;
mod raster;
mod sink;

pub use engine::{Engine, Phase, RowBuffer, render};
pub use grid::Grid;
pub use kernel::{Kernel, RADIUS};
pub use pixels::{ParseError, parse_pixels};
pub use points::{PointError, PointList};
pub use raster::{Raster, SET};
pub use sink::{DisplaySink, FrameSink, VGA_BASE, VgaRegister, pack, plot, unpack};

/// Display columns
pub const WIDTH: usize = 160;
/// Display rows
pub const HEIGHT: usize = 120;
/// Number of sink writes in one full frame
pub const PIXEL_COUNT: usize = WIDTH * HEIGHT;
