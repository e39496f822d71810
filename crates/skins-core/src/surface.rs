//! In-memory pixel surfaces decoded from skin pixmaps.

use std::path::Path;

use image::ImageReader;

use crate::color::Color;
use crate::error::{Result, SkinError};
use crate::geometry::Rect;

/// A 32-bit ARGB image (`0xAARRGGBB` per pixel, row-major).
#[derive(Clone, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl Surface {
    /// A fully transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    /// Build a surface from tightly packed RGBA bytes.
    ///
    /// Returns `None` when `rgba` does not hold exactly `width * height`
    /// pixels.
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Option<Self> {
        if rgba.len() != width as usize * height as usize * 4 {
            return None;
        }
        let pixels = rgba
            .chunks_exact(4)
            .map(|p| u32::from_be_bytes([p[3], p[0], p[1], p[2]]))
            .collect();
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Decode an image file. The format is sniffed from the content, so
    /// mislabelled extensions (common in old skins) still load.
    pub fn from_file(path: &Path) -> Result<Self> {
        let decode_err = |e: &dyn std::fmt::Display| {
            SkinError::Decode(format!("{}: {e}", path.display()))
        };
        let img = ImageReader::open(path)?
            .with_guessed_format()?
            .decode()
            .map_err(|e| decode_err(&e))?
            .to_rgba8();
        let (w, h) = img.dimensions();
        Self::from_rgba(w, h, img.as_raw()).ok_or_else(|| decode_err(&"pixel buffer size mismatch"))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width as i32, self.height as i32)
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        (x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    /// Raw ARGB value at `(x, y)`, or `None` outside the surface.
    pub fn argb(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// RGB color at `(x, y)`, ignoring alpha. Reads outside the surface
    /// return black.
    pub fn pixel(&self, x: i32, y: i32) -> Color {
        self.argb(x, y).map_or(Color::BLACK, Color::from_u32)
    }

    /// Write a raw ARGB value. Writes outside the surface are dropped.
    pub fn set_argb(&mut self, x: i32, y: i32, argb: u32) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = argb;
        }
    }

    /// Write an opaque color.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.set_argb(x, y, 0xff00_0000 | color.to_u32());
    }

    /// Copy a `w`x`h` block from `self` at `(sx, sy)` into `dst` at
    /// `(dx, dy)`, replacing destination pixels. Both ends are clipped.
    #[allow(clippy::too_many_arguments)]
    pub fn copy_rect(&self, sx: i32, sy: i32, w: i32, h: i32, dst: &mut Surface, dx: i32, dy: i32) {
        for row in 0..h {
            for col in 0..w {
                if let Some(p) = self.argb(sx + col, sy + row) {
                    dst.set_argb(dx + col, dy + row, p);
                }
            }
        }
    }

    /// Composite `src` over `self` inside `clip`, with `src`'s origin placed
    /// at `(origin_x, origin_y)` in destination coordinates.
    pub fn composite(&mut self, src: &Surface, origin_x: i32, origin_y: i32, clip: Rect) {
        let Some(area) = clip.intersect(&self.bounds()) else {
            return;
        };
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                let Some(s) = src.argb(x - origin_x, y - origin_y) else {
                    continue;
                };
                let alpha = s >> 24;
                if alpha == 0 {
                    continue;
                }
                let out = if alpha == 0xff {
                    s
                } else {
                    let d = self.argb(x, y).unwrap_or(0);
                    blend_over(s, d)
                };
                self.set_argb(x, y, out);
            }
        }
    }

    /// Export as tightly packed RGBA bytes.
    pub fn to_rgba(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|p| {
                let [a, r, g, b] = p.to_be_bytes();
                [r, g, b, a]
            })
            .collect()
    }
}

/// Porter-Duff OVER on straight-alpha ARGB pixels.
fn blend_over(src: u32, dst: u32) -> u32 {
    let [sa, sr, sg, sb] = src.to_be_bytes().map(u32::from);
    let [da, dr, dg, db] = dst.to_be_bytes().map(u32::from);
    let out_a = sa + da * (255 - sa) / 255;
    if out_a == 0 {
        return 0;
    }
    let mix = |s: u32, d: u32| ((s * sa + d * da * (255 - sa) / 255) / out_a) as u8;
    u32::from_be_bytes([out_a as u8, mix(sr, dr), mix(sg, dg), mix(sb, db)])
}
