//! Shared fixtures for skins-core tests.
//!
//! Provides on-disk skin builders and a [`MockCanvas`] that records blits for
//! assertion.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use image::{DynamicImage, RgbaImage};

use crate::color::Color;
use crate::draw::Canvas;
use crate::geometry::Rect;
use crate::pixmap::PixmapId;
use crate::surface::Surface;

/// An opaque surface filled with `color`.
pub fn solid(width: u32, height: u32, color: Color) -> Surface {
    let mut s = Surface::new(width, height);
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            s.set_pixel(x, y, color);
        }
    }
    s
}

/// Save `surface` to `path`, format chosen by extension. BMP is written
/// without alpha, as classic skins ship it.
pub fn write_image(path: &Path, surface: &Surface) {
    let img = RgbaImage::from_raw(surface.width(), surface.height(), surface.to_rgba()).unwrap();
    let is_bmp = path
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("bmp"));
    if is_bmp {
        DynamicImage::ImageRgba8(img).to_rgb8().save(path).unwrap();
    } else {
        img.save(path).unwrap();
    }
}

/// Write a zip archive with the given `(name, contents)` entries.
pub fn write_zip(path: &Path, entries: &[(&str, &[u8])]) {
    let mut zip = zip::ZipWriter::new(File::create(path).unwrap());
    let options = zip::write::SimpleFileOptions::default();
    for (name, data) in entries {
        zip.start_file(*name, options).unwrap();
        zip.write_all(data).unwrap();
    }
    zip.finish().unwrap();
}

/// Write a gzip-compressed tarball with the given `(name, contents)` entries.
pub fn write_tar_gz(path: &Path, entries: &[(&str, &[u8])]) {
    let gz = flate2::write::GzEncoder::new(File::create(path).unwrap(), flate2::Compression::default());
    let mut builder = tar::Builder::new(gz);
    for (name, data) in entries {
        let mut header = tar::Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        builder.append_data(&mut header, name, *data).unwrap();
    }
    builder.into_inner().unwrap().finish().unwrap();
}

/// Pixmap dimensions used by [`write_fixture_skin`]. Large enough for the
/// draw routines and post-processing to read real pixels.
pub fn fixture_size(id: PixmapId) -> (u32, u32) {
    match id {
        PixmapId::Main => (275, 116),
        PixmapId::Titlebar => (344, 87),
        PixmapId::Text => (155, 18),
        PixmapId::Numbers => (99, 13),
        PixmapId::PlayPause => (42, 9),
        PixmapId::EqMain => (275, 315),
        PixmapId::PlEdit => (280, 186),
        _ => (16, 16),
    }
}

/// Fill color for a fixture pixmap, distinct per slot.
pub fn fixture_color(id: PixmapId) -> Color {
    let i = id.index() as u8;
    Color::rgb(10 + i * 15, 200 - i * 10, i)
}

/// Write one fixture pixmap as `<base_name>.bmp`.
pub fn write_fixture_pixmap(dir: &Path, id: PixmapId) {
    let (w, h) = fixture_size(id);
    write_image(
        &dir.join(format!("{}.bmp", id.base_name())),
        &solid(w, h, fixture_color(id)),
    );
}

/// Populate `dir` with a complete skin: every pixmap slot plus hints,
/// region, playlist color, and visualization color files.
pub fn write_fixture_skin(dir: &Path) {
    for id in PixmapId::ALL {
        write_fixture_pixmap(dir, id);
    }
    fs::write(
        dir.join("skin.hints"),
        "[skin]\nmainwinwidth=300\nmainwinplayx=40\nmainwinvisvisible=0\n",
    )
    .unwrap();
    fs::write(
        dir.join("region.txt"),
        "[Normal]\nNumPoints=4\nPointList=0,0, 10,0, 10,10, 0,10\n",
    )
    .unwrap();
    fs::write(dir.join("pledit.txt"), "[Text]\nNormal=#00FF00\n").unwrap();
    fs::write(dir.join("viscolor.txt"), "1,2,3\n4,5,6\n").unwrap();
}

/// A recorded blit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlitCall {
    pub src_x: i32,
    pub src_y: i32,
    pub dst: Rect,
    /// Source surface dimensions, enough to tell pixmaps apart in tests.
    pub src_size: (u32, u32),
}

/// A canvas that records every blit instead of drawing.
#[derive(Debug, Default)]
pub struct MockCanvas {
    pub calls: Vec<BlitCall>,
}

impl MockCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Destination rectangles in call order.
    pub fn dst_rects(&self) -> Vec<Rect> {
        self.calls.iter().map(|c| c.dst).collect()
    }

    /// Source offsets in call order.
    pub fn src_offsets(&self) -> Vec<(i32, i32)> {
        self.calls.iter().map(|c| (c.src_x, c.src_y)).collect()
    }
}

impl Canvas for MockCanvas {
    fn blit(&mut self, src: &Surface, src_x: i32, src_y: i32, dst: Rect) {
        self.calls.push(BlitCall {
            src_x,
            src_y,
            dst,
            src_size: (src.width(), src.height()),
        });
    }
}
