//! Software rendering of skinned windows to PNG.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};

use skins_core::Skin;
use skins_core::draw::{
    MAINWIN_TITLEBAR_HEIGHT, draw_mainwin_titlebar, draw_pixmap, draw_playlist_frame,
};
use skins_core::mask::{MaskId, Region};
use skins_core::pixmap::PixmapId;
use skins_core::surface::Surface;

/// Largest window edge a render will allocate for.
pub const MAX_RENDER_EDGE: i32 = 4096;

/// Surface for a `width` x `height` window, refusing sizes a skin or the
/// command line could use to exhaust memory.
fn window_surface(width: i32, height: i32) -> Result<Surface> {
    let edge = 1..=MAX_RENDER_EDGE;
    if !edge.contains(&width) || !edge.contains(&height) {
        bail!("window size {width}x{height} is outside 1..={MAX_RENDER_EDGE}");
    }
    Ok(Surface::new(width as u32, height as u32))
}

/// Main window with its focused titlebar, clipped to the window mask.
pub fn render_mainwin(skin: &Skin, shaded: bool) -> Result<Surface> {
    let props = skin.properties();
    let width = props.mainwin_width;
    let height = if shaded {
        MAINWIN_TITLEBAR_HEIGHT
    } else {
        props.mainwin_height
    };

    let mut out = window_surface(width, height).context("main window")?;
    if !shaded {
        draw_pixmap(&mut out, skin, PixmapId::Main, 0, 0, 0, 0, width, height);
    }
    draw_mainwin_titlebar(&mut out, skin, shaded, true);

    let mask = if shaded { MaskId::WindowShade } else { MaskId::Normal };
    apply_mask(&mut out, skin.mask(mask));
    Ok(out)
}

/// Playlist window frame at the given size.
pub fn render_playlist(skin: &Skin, width: i32, height: i32) -> Result<Surface> {
    let mut out = window_surface(width, height).context("playlist window")?;
    draw_playlist_frame(&mut out, skin, width, height, true);
    Ok(out)
}

/// Clear every pixel outside `mask`.
fn apply_mask(surface: &mut Surface, mask: &Region) {
    let (w, h) = (surface.width() as i32, surface.height() as i32);
    for (x, y) in (0..h).flat_map(|y| (0..w).map(move |x| (x, y))) {
        if !mask.contains(x, y) {
            surface.set_argb(x, y, 0);
        }
    }
}

/// Encode `surface` as 8-bit RGBA PNG into `out`.
pub fn write_png(surface: &Surface, out: impl Write) -> Result<()> {
    let mut encoder = png::Encoder::new(out, surface.width(), surface.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut image = encoder.write_header()?;
    image.write_image_data(&surface.to_rgba())?;
    image.finish()?;
    Ok(())
}

pub fn save_png(path: &Path, surface: &Surface) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_png(surface, BufWriter::new(file))
}
