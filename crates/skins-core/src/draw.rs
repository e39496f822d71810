//! Frame composition from skin pixmaps.
//!
//! Window chrome is assembled from fixed sub-rectangles of `pledit` and
//! `titlebar`. The routines here only decide which pieces go where; the
//! actual pixel work happens in a [`Canvas`].

use crate::geometry::Rect;
use crate::pixmap::PixmapId;
use crate::skin::Skin;
use crate::surface::Surface;

/// Height of the main window titlebar strip.
pub const MAINWIN_TITLEBAR_HEIGHT: i32 = 14;

/// Something pixmap regions can be drawn onto.
pub trait Canvas {
    /// Paint `dst` with pixels from `src`, such that `src`'s `(src_x, src_y)`
    /// lands on `dst`'s top-left corner.
    fn blit(&mut self, src: &Surface, src_x: i32, src_y: i32, dst: Rect);
}

impl Canvas for Surface {
    fn blit(&mut self, src: &Surface, src_x: i32, src_y: i32, dst: Rect) {
        self.composite(src, dst.x - src_x, dst.y - src_y, dst);
    }
}

/// Parameters for drawing part of a pixmap.
#[derive(Debug, Clone, Copy)]
pub struct Blit<'a> {
    pub surface: &'a Surface,
    pub src_x: i32,
    pub src_y: i32,
    pub dst: Rect,
}

impl Blit<'_> {
    pub fn draw(&self, canvas: &mut impl Canvas) {
        canvas.blit(self.surface, self.src_x, self.src_y, self.dst);
    }
}

/// Draw a `w`x`h` piece of pixmap `id` from `(xsrc, ysrc)` to `(xdest, ydest)`.
/// Does nothing when the skin lacks the pixmap.
#[allow(clippy::too_many_arguments)]
pub fn draw_pixmap(
    canvas: &mut impl Canvas,
    skin: &Skin,
    id: PixmapId,
    xsrc: i32,
    ysrc: i32,
    xdest: i32,
    ydest: i32,
    w: i32,
    h: i32,
) {
    if let Some(blit) = skin.blit(id, xsrc, ysrc, xdest, ydest, w, h) {
        blit.draw(canvas);
    }
}

/// Playlist window title strip: corners, centred title, and filler tiles.
///
/// Focused pieces sit on row 0 of `pledit`, unfocused ones on row 21. With
/// an odd filler count the spare tile is split 12/13 either side of the
/// title.
pub fn draw_playlist_frame_top(canvas: &mut impl Canvas, skin: &Skin, width: i32, focus: bool) {
    let y = if focus { 0 } else { 21 };
    let pl = PixmapId::PlEdit;

    draw_pixmap(canvas, skin, pl, 0, y, 0, 0, 25, 20);
    draw_pixmap(canvas, skin, pl, 26, y, (width - 100) / 2, 0, 100, 20);
    draw_pixmap(canvas, skin, pl, 153, y, width - 25, 0, 25, 20);

    let c = (width - (100 + 25 + 25)) / 25;
    for i in 0..c / 2 {
        draw_pixmap(canvas, skin, pl, 127, y, 25 + i * 25, 0, 25, 20);
        draw_pixmap(canvas, skin, pl, 127, y, (width + 100) / 2 + i * 25, 0, 25, 20);
    }

    if c & 1 == 1 {
        draw_pixmap(canvas, skin, pl, 127, y, (c / 2) * 25 + 25, 0, 12, 20);
        draw_pixmap(canvas, skin, pl, 127, y, width / 2 + (c / 2) * 25 + 50, 0, 13, 20);
    }
}

/// Playlist window bottom strip. The visualization window is drawn only
/// when at least three filler tiles would otherwise be needed.
pub fn draw_playlist_frame_bottom(canvas: &mut impl Canvas, skin: &Skin, width: i32, height: i32) {
    let pl = PixmapId::PlEdit;
    let bottom = height - 38;

    draw_pixmap(canvas, skin, pl, 0, 72, 0, bottom, 125, 38);

    let mut c = (width - 275) / 25;
    if c >= 3 {
        c -= 3;
        draw_pixmap(canvas, skin, pl, 205, 0, width - (150 + 75), bottom, 75, 38);
    }

    draw_pixmap(canvas, skin, pl, 126, 72, width - 150, bottom, 150, 38);

    for i in 0..c {
        draw_pixmap(canvas, skin, pl, 179, 0, 125 + i * 25, bottom, 25, 38);
    }
}

/// Playlist window left and right edges, tiled between top and bottom.
pub fn draw_playlist_frame_sides(canvas: &mut impl Canvas, skin: &Skin, width: i32, height: i32) {
    let pl = PixmapId::PlEdit;
    for i in 0..(height - (20 + 38)) / 29 {
        draw_pixmap(canvas, skin, pl, 0, 42, 0, 20 + i * 29, 12, 29);
        draw_pixmap(canvas, skin, pl, 32, 42, width - 19, 20 + i * 29, 19, 29);
    }
}

/// Full playlist window frame.
pub fn draw_playlist_frame(
    canvas: &mut impl Canvas,
    skin: &Skin,
    width: i32,
    height: i32,
    focus: bool,
) {
    draw_playlist_frame_top(canvas, skin, width, focus);
    draw_playlist_frame_bottom(canvas, skin, width, height);
    draw_playlist_frame_sides(canvas, skin, width, height);
}

/// Playlist window in shaded mode: a single 14px bar.
pub fn draw_playlist_shaded(canvas: &mut impl Canvas, skin: &Skin, width: i32, focus: bool) {
    let pl = PixmapId::PlEdit;
    draw_pixmap(canvas, skin, pl, 72, 42, 0, 0, 25, 14);
    for i in 0..(width - 75) / 25 {
        draw_pixmap(canvas, skin, pl, 72, 57, i * 25 + 25, 0, 25, 14);
    }
    let right_y = if focus { 42 } else { 57 };
    draw_pixmap(canvas, skin, pl, 99, right_y, width - 50, 0, 50, 14);
}

/// Main window titlebar across the hinted window width.
pub fn draw_mainwin_titlebar(canvas: &mut impl Canvas, skin: &Skin, shaded: bool, focus: bool) {
    let y_offset = match (shaded, focus) {
        (false, true) => 0,
        (false, false) => 15,
        (true, true) => 29,
        (true, false) => 42,
    };
    draw_pixmap(
        canvas,
        skin,
        PixmapId::Titlebar,
        27,
        y_offset,
        0,
        0,
        skin.properties().mainwin_width,
        MAINWIN_TITLEBAR_HEIGHT,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::test_utils::{MockCanvas, fixture_color, fixture_size, write_fixture_skin};

    fn fixture() -> (tempfile::TempDir, Skin) {
        let dir = tempfile::tempdir().unwrap();
        write_fixture_skin(dir.path());
        let skin = Skin::load(dir.path()).unwrap();
        (dir, skin)
    }

    #[test]
    fn frame_top_odd_tile_split() {
        let (_dir, skin) = fixture();
        let mut canvas = MockCanvas::new();
        draw_playlist_frame_top(&mut canvas, &skin, 275, true);
        assert_eq!(
            canvas.dst_rects(),
            [
                Rect::new(0, 0, 25, 20),
                Rect::new(87, 0, 100, 20),
                Rect::new(250, 0, 25, 20),
                Rect::new(25, 0, 25, 20),
                Rect::new(187, 0, 25, 20),
                Rect::new(50, 0, 25, 20),
                Rect::new(212, 0, 25, 20),
                Rect::new(75, 0, 12, 20),
                Rect::new(237, 0, 13, 20),
            ]
        );
        assert!(canvas.calls.iter().all(|c| c.src_size == fixture_size(PixmapId::PlEdit)));
    }

    #[test]
    fn frame_top_unfocused_row() {
        let (_dir, skin) = fixture();
        let mut canvas = MockCanvas::new();
        draw_playlist_frame_top(&mut canvas, &skin, 300, false);
        assert!(canvas.src_offsets().iter().all(|&(_, y)| y == 21));
        // Even filler count: no split tiles.
        assert_eq!(canvas.calls.len(), 3 + 6);
    }

    #[test]
    fn frame_bottom_visualization_only_when_wide() {
        let (_dir, skin) = fixture();
        let mut canvas = MockCanvas::new();
        draw_playlist_frame_bottom(&mut canvas, &skin, 275, 232);
        assert_eq!(
            canvas.dst_rects(),
            [Rect::new(0, 194, 125, 38), Rect::new(125, 194, 150, 38)]
        );

        let mut canvas = MockCanvas::new();
        draw_playlist_frame_bottom(&mut canvas, &skin, 375, 232);
        assert_eq!(
            canvas.src_offsets(),
            [(0, 72), (205, 0), (126, 72), (179, 0)]
        );
        assert_eq!(canvas.dst_rects()[1], Rect::new(150, 194, 75, 38));
        assert_eq!(canvas.dst_rects()[3], Rect::new(125, 194, 25, 38));
    }

    #[test]
    fn frame_sides_tile_vertically() {
        let (_dir, skin) = fixture();
        let mut canvas = MockCanvas::new();
        draw_playlist_frame_sides(&mut canvas, &skin, 275, 232);
        assert_eq!(canvas.calls.len(), 12);
        assert_eq!(canvas.dst_rects()[0], Rect::new(0, 20, 12, 29));
        assert_eq!(canvas.dst_rects()[1], Rect::new(256, 20, 19, 29));
        assert_eq!(canvas.dst_rects()[11], Rect::new(256, 165, 19, 29));
    }

    #[test]
    fn full_frame_is_top_bottom_sides() {
        let (_dir, skin) = fixture();
        let mut canvas = MockCanvas::new();
        draw_playlist_frame(&mut canvas, &skin, 275, 232, true);
        assert_eq!(canvas.calls.len(), 9 + 2 + 12);
    }

    #[test]
    fn shaded_bar() {
        let (_dir, skin) = fixture();
        let mut canvas = MockCanvas::new();
        draw_playlist_shaded(&mut canvas, &skin, 275, false);
        assert_eq!(canvas.calls.len(), 1 + 8 + 1);
        assert_eq!(canvas.calls[9].dst, Rect::new(225, 0, 50, 14));
        assert_eq!(canvas.src_offsets()[9], (99, 57));
    }

    #[test]
    fn titlebar_offsets_and_width() {
        let (_dir, skin) = fixture();
        for (shaded, focus, y) in [(false, true, 0), (false, false, 15), (true, true, 29), (true, false, 42)] {
            let mut canvas = MockCanvas::new();
            draw_mainwin_titlebar(&mut canvas, &skin, shaded, focus);
            assert_eq!(canvas.src_offsets(), [(27, y)]);
            // Fixture hints widen the main window to 300.
            assert_eq!(canvas.dst_rects(), [Rect::new(0, 0, 300, MAINWIN_TITLEBAR_HEIGHT)]);
        }
    }

    #[test]
    fn unloaded_skin_draws_nothing() {
        let skin = Skin::default();
        let mut canvas = MockCanvas::new();
        draw_playlist_frame(&mut canvas, &skin, 275, 232, true);
        draw_mainwin_titlebar(&mut canvas, &skin, false, true);
        assert!(canvas.calls.is_empty());
    }

    #[test]
    fn surface_canvas_composites_pixels() {
        let (_dir, skin) = fixture();
        let mut out = Surface::new(300, 20);
        draw_mainwin_titlebar(&mut out, &skin, false, true);
        assert_eq!(out.pixel(0, 0), fixture_color(PixmapId::Titlebar));
        // The 344px titlebar covers all 300 columns from x=27.
        assert_eq!(out.pixel(299, 13), fixture_color(PixmapId::Titlebar));
        // Below the strip stays transparent.
        assert_eq!(out.argb(0, 14), Some(0));
        assert_ne!(out.pixel(0, 0), Color::BLACK);
    }
}
