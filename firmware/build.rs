//! Copies `memory.x` next to the linker and turns `pixels.txt` into a Rust
//! byte array at `$OUT_DIR/pixels.rs`.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

fn main() {
    let out = PathBuf::from(env::var_os("OUT_DIR").expect("cargo sets OUT_DIR"));

    fs::write(out.join("memory.x"), include_bytes!("memory.x")).expect("write memory.x");
    println!("cargo:rustc-link-search={}", out.display());
    println!("cargo:rerun-if-changed=memory.x");

    let text = fs::read_to_string("pixels.txt").expect("read pixels.txt");
    let mut bytes = Vec::new();
    if let Err(e) = vga_blur::parse_pixels(&text, &mut bytes) {
        panic!("pixels.txt {e}");
    }

    let mut source = format!("pub const PIXEL_LIST: &[u8; {}] = &[", bytes.len());
    for pair in bytes.chunks(2) {
        for b in pair {
            write!(source, "{b},").expect("format into String");
        }
        source.push('\n');
    }
    source.push_str("];\n");
    fs::write(out.join("pixels.rs"), source).expect("write pixels.rs");
    println!("cargo:rerun-if-changed=pixels.txt");
}
