//! Screenshot tool for the Umbra drop-shadow widget.
//!
//! Renders a demo card with a drop shadow into a software surface and saves
//! a PNG, for iterating on shadow styling without a windowing host.
//!
//! Usage:
//!   cargo run -p umbra-app [config.toml]
//!   UMBRA_CONFIG=style.toml cargo run -p umbra-app
//!
//! Output:
//!   screenshots/shadow.png

use std::fs;
use std::path::Path;

use umbra_backend_soft::SoftSurface;
use umbra_shadow::{ShadowView, Widget};
use umbra_types::color::Color;
use umbra_types::config::UmbraConfig;
use umbra_types::surface::Surface;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("UMBRA_CONFIG").ok());
    let config = match config_path {
        Some(path) => {
            log::info!("loading config from {path}");
            UmbraConfig::load(Path::new(&path))?
        }
        None => UmbraConfig::default(),
    };

    let (w, h) = (config.surface.width, config.surface.height);
    let mut surface = SoftSurface::new(w, h)?;
    surface.clear(config.surface.background)?;

    // A centered card, shadowed then filled.
    let card_w = w / 2;
    let card_h = h / 2;
    let card_x = ((w - card_w) / 2) as i32;
    let card_y = ((h - card_h) / 2) as i32;

    let mut view = ShadowView::with_style(config.shadow)?;
    view.set_bounds(card_w, card_h)?;
    view.draw(&mut surface, card_x, card_y, card_w, card_h)?;
    surface.fill_rounded_rect(card_x, card_y, card_w, card_h, 2, Color::rgb(236, 236, 240))?;

    let pixels = surface.read_pixels(0, 0, w, h)?;
    let out_dir = Path::new("screenshots");
    fs::create_dir_all(out_dir)?;
    let out_path = out_dir.join("shadow.png");
    save_png(&out_path, w, h, &pixels)?;

    log::info!("saved {}", out_path.display());
    Ok(())
}

/// Save RGBA pixel data as a PNG file.
fn save_png(path: &Path, width: u32, height: u32, rgba: &[u8]) -> anyhow::Result<()> {
    let file = fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);
    let mut encoder = png::Encoder::new(writer, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(rgba)?;
    Ok(())
}
