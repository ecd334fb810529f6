use std::convert::Infallible;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use eframe::NativeOptions;
use egui::{CentralPanel, ColorImage, Image, TextureHandle, TextureOptions};
use embedded_graphics::{
    Pixel,
    pixelcolor::Gray8,
    prelude::{GrayColor, OriginDimensions, Size},
};
use log::{info, warn};
use vga_blur::{FrameSink, HEIGHT, PIXEL_COUNT, PointList, WIDTH, parse_pixels, render};

const DEFAULT_PIXELS: &str = include_str!("../../firmware/pixels.txt");

/// Runs the blur pipeline on the host and shows what the VGA adapter would
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Pixel list in `pixels.txt` format (defaults to the firmware's)
    #[arg(long)]
    pixels: Option<PathBuf>,

    /// Write a binary PGM here instead of opening a window
    #[arg(long)]
    pgm: Option<PathBuf>,

    /// Window zoom
    #[arg(long, default_value = "4")]
    scale: u32,
}

/// Greyscale frame the decoded plot words land in
struct GrayFrame {
    luma: Vec<u8>,
}

impl GrayFrame {
    fn new() -> Self {
        GrayFrame {
            luma: vec![0; PIXEL_COUNT],
        }
    }

    fn to_pgm(&self) -> Vec<u8> {
        let mut out = format!("P5\n{WIDTH} {HEIGHT}\n255\n").into_bytes();
        out.extend_from_slice(&self.luma);
        out
    }
}

impl OriginDimensions for GrayFrame {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl embedded_graphics::draw_target::DrawTarget for GrayFrame {
    type Color = Gray8;

    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels.into_iter() {
            if (0..WIDTH as i32).contains(&coord.x) && (0..HEIGHT as i32).contains(&coord.y) {
                self.luma[coord.y as usize * WIDTH + coord.x as usize] = color.luma();
            }
        }
        Ok(())
    }
}

struct App {
    texture: TextureHandle,
    scale: f32,
}

impl App {
    fn new(frame: &GrayFrame, scale: f32, cc: &eframe::CreationContext) -> Self {
        let texture = cc.egui_ctx.load_texture(
            "frame",
            ColorImage::from_gray([WIDTH, HEIGHT], &frame.luma),
            TextureOptions::NEAREST,
        );
        App { texture, scale }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        CentralPanel::default().show(ctx, |ui| {
            Image::new(&self.texture)
                .fit_to_original_size(self.scale)
                .paint_at(ui, ui.max_rect())
        });
    }
}

fn load_points(args: &Args) -> Result<Vec<u8>> {
    let text = match &args.pixels {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => DEFAULT_PIXELS.to_owned(),
    };
    let mut bytes = Vec::new();
    parse_pixels(&text, &mut bytes).map_err(|e| anyhow!("pixel list {e}"))?;
    // the firmware rejects this at build time; here it would panic mid-render
    if let Err(e) = PointList::new(&bytes).check() {
        bail!("pixel list: {e}");
    }
    Ok(bytes)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let bytes = load_points(&args)?;
    let points = PointList::new(&bytes);
    info!("rendering {} points", points.len());

    let mut sink = FrameSink::new(GrayFrame::new());
    render(points, &mut sink);
    if sink.writes() != PIXEL_COUNT {
        warn!("expected {PIXEL_COUNT} plot writes, saw {}", sink.writes());
    }
    let frame = sink.into_inner();

    if let Some(path) = &args.pgm {
        fs::write(path, frame.to_pgm()).with_context(|| format!("writing {}", path.display()))?;
        info!("wrote {}", path.display());
        return Ok(());
    }

    let scale = args.scale.max(1) as f32;
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WIDTH as f32 * scale, HEIGHT as f32 * scale]),
        ..Default::default()
    };
    eframe::run_native(
        "vga blur sim",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(&frame, scale, cc)))),
    )
    .map_err(|e| anyhow!("window: {e}"))
}
