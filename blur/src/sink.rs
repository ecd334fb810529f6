use core::convert::Infallible;
use core::ptr::NonNull;

use embedded_graphics::{
    Pixel,
    pixelcolor::Gray8,
    prelude::{DrawTarget, Point},
};

/// Address of the VGA adapter's write-only plot register
pub const VGA_BASE: usize = 0x0000_4000;

/// Something that accepts packed plot words, see [`pack`]
pub trait DisplaySink {
    fn write(&mut self, word: u32);
}

impl<S: DisplaySink + ?Sized> DisplaySink for &mut S {
    fn write(&mut self, word: u32) {
        (**self).write(word);
    }
}

/// `y` in bits 31..24, `x` in bits 23..16, `colour` in bits 7..0, zero between
pub const fn pack(x: u8, y: u8, colour: u8) -> u32 {
    ((y as u32) << 24) | ((x as u32) << 16) | colour as u32
}

/// Splits a plot word back into `(x, y, colour)`
pub const fn unpack(word: u32) -> (u8, u8, u8) {
    ((word >> 16) as u8, (word >> 24) as u8, word as u8)
}

pub fn plot<S: DisplaySink + ?Sized>(sink: &mut S, x: u8, y: u8, colour: u8) {
    sink.write(pack(x, y, colour));
}

/// The memory-mapped plot register of the VGA adapter
#[derive(Debug)]
pub struct VgaRegister {
    register: NonNull<u32>,
}

impl VgaRegister {
    /// # Safety
    ///
    /// `register` must be non-null, aligned, and point at a 32-bit register
    /// (or memory) that stays valid for writes for the lifetime of the value
    /// and is not written through any other handle.
    pub unsafe fn new(register: *mut u32) -> Self {
        Self {
            register: unsafe { NonNull::new_unchecked(register) },
        }
    }
}

impl DisplaySink for VgaRegister {
    fn write(&mut self, word: u32) {
        // SAFETY: validity and exclusivity were promised in `new`
        unsafe { core::ptr::write_volatile(self.register.as_ptr(), word) };
    }
}

/// Decodes plot words onto an `embedded-graphics` target, for running the
/// pipeline off-hardware
#[derive(Debug)]
pub struct FrameSink<D> {
    target: D,
    writes: usize,
}

impl<D> FrameSink<D>
where
    D: DrawTarget<Color = Gray8, Error = Infallible>,
{
    pub fn new(target: D) -> Self {
        Self { target, writes: 0 }
    }

    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn into_inner(self) -> D {
        self.target
    }
}

impl<D> DisplaySink for FrameSink<D>
where
    D: DrawTarget<Color = Gray8, Error = Infallible>,
{
    fn write(&mut self, word: u32) {
        let (x, y, colour) = unpack(word);
        let pixel = Pixel(Point::new(x.into(), y.into()), Gray8::new(colour));
        self.target
            .draw_iter(core::iter::once(pixel))
            .unwrap_or_else(|never| match never {});
        self.writes += 1;
    }
}
