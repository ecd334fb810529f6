#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::info;
use static_cell::StaticCell;
use vga_blur::{Engine, PointList, Raster, VGA_BASE, VgaRegister};
use {defmt_rtt as _, panic_probe as _};

mod pixels {
    include!(concat!(env!("OUT_DIR"), "/pixels.rs"));
}

const PIXELS: PointList<'static> = PointList::new(pixels::PIXEL_LIST);

// The loader trusts the list, so bad data has to stop the build.
const _: () = assert!(
    PIXELS.check().is_ok(),
    "pixels.txt has an odd byte count or a point outside 160x120"
);

// 19200 bytes is too much for the stack
static RASTER: StaticCell<Raster> = StaticCell::new();

#[entry]
fn main() -> ! {
    info!("loading {} pixels", PIXELS.len());
    let raster: &'static mut Raster = RASTER.init_with(Raster::new);
    raster.load(PIXELS);

    // SAFETY: VGA_BASE is the adapter's plot register and nothing else writes it
    let mut vga = unsafe { VgaRegister::new(VGA_BASE as *mut u32) };
    Engine::new(raster).run(&mut vga);
    info!("blurred frame written");

    loop {
        cortex_m::asm::wfi();
    }
}
