//! Skin color tables: playlist text colors, visualization palette, and the
//! text colors sampled from the font pixmap.

use std::path::Path;

use serde::Serialize;

use crate::color::Color;
use crate::ini::IniFile;
use crate::parse::{hex_channel, int_list};
use crate::resolver::find_file_case;

/// Number of visualization palette entries.
pub const VIS_COLOR_COUNT: usize = 24;

/// Named colors resolved while loading a skin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkinColorId {
    /// Background of the bitmap font (sampled from `text`).
    TextBg,
    /// Foreground of the bitmap font (sampled from `text`).
    TextFg,
    PlaylistNormal,
    PlaylistCurrent,
    PlaylistNormalBg,
    PlaylistSelectedBg,
}

impl SkinColorId {
    pub const COUNT: usize = 6;

    pub const ALL: [SkinColorId; Self::COUNT] = [
        SkinColorId::TextBg,
        SkinColorId::TextFg,
        SkinColorId::PlaylistNormal,
        SkinColorId::PlaylistCurrent,
        SkinColorId::PlaylistNormalBg,
        SkinColorId::PlaylistSelectedBg,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Playlist text colors from `pledit.txt`: `(key, default)` in
/// [`SkinColorId`] order starting at `PlaylistNormal`.
const PLAYLIST_COLORS: [(&str, &str); 4] = [
    ("normal", "#2499ff"),
    ("current", "#ffeeff"),
    ("normalbg", "#0a120a"),
    ("selectedbg", "#0a124a"),
];

/// Built-in visualization gradient used when `viscolor.txt` is missing or
/// short.
pub const DEFAULT_VIS_COLORS: [Color; VIS_COLOR_COUNT] = [
    Color::rgb(9, 34, 53),
    Color::rgb(10, 18, 26),
    Color::rgb(0, 54, 108),
    Color::rgb(0, 58, 116),
    Color::rgb(0, 62, 124),
    Color::rgb(0, 66, 132),
    Color::rgb(0, 70, 140),
    Color::rgb(0, 74, 148),
    Color::rgb(0, 78, 156),
    Color::rgb(0, 82, 164),
    Color::rgb(0, 86, 172),
    Color::rgb(0, 92, 184),
    Color::rgb(0, 98, 196),
    Color::rgb(0, 104, 208),
    Color::rgb(0, 110, 220),
    Color::rgb(0, 116, 232),
    Color::rgb(0, 122, 244),
    Color::rgb(0, 128, 255),
    Color::rgb(0, 128, 255),
    Color::rgb(0, 104, 208),
    Color::rgb(0, 80, 160),
    Color::rgb(0, 56, 112),
    Color::rgb(0, 32, 64),
    Color::rgb(200, 200, 200),
];

/// All colors a skin provides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorTable {
    named: [Color; SkinColorId::COUNT],
    vis: [Color; VIS_COLOR_COUNT],
}

impl Default for ColorTable {
    fn default() -> Self {
        let mut named = [Color::BLACK; SkinColorId::COUNT];
        for (i, (_, hex)) in PLAYLIST_COLORS.iter().enumerate() {
            named[SkinColorId::PlaylistNormal.index() + i] = parse_legacy_hex(hex);
        }
        Self {
            named,
            vis: DEFAULT_VIS_COLORS,
        }
    }
}

impl ColorTable {
    pub fn get(&self, id: SkinColorId) -> Color {
        self.named[id.index()]
    }

    pub fn set(&mut self, id: SkinColorId, color: Color) {
        self.named[id.index()] = color;
    }

    pub fn vis_colors(&self) -> &[Color; VIS_COLOR_COUNT] {
        &self.vis
    }

    /// Fill playlist colors from `pledit.txt` and the visualization palette
    /// from `viscolor.txt` in `dir`. Text colors are left untouched.
    pub fn load(&mut self, dir: &Path) {
        let pledit = IniFile::open(dir, "pledit.txt");
        for (i, color) in load_playlist_colors(pledit.as_ref()).into_iter().enumerate() {
            self.named[SkinColorId::PlaylistNormal.index() + i] = color;
        }
        self.vis = load_vis_colors(dir);
    }
}

/// Parse a hex color the way legacy theme files expect.
///
/// A leading `#` is skipped. Channels are then filled from the left only as
/// far as the remaining length allows: six or more characters give red,
/// green and blue; four or five give the first two channels; two or three
/// give only the first. Missing channels stay zero. `"24"` is therefore
/// pure red `0x24`, not blue.
pub fn parse_legacy_hex(s: &str) -> Color {
    let digits = s.strip_prefix('#').unwrap_or(s).as_bytes();
    let len = digits.len();
    let mut channels = [0u8; 3];
    let mut pos = 0;

    for (ch, needed) in [2, 4, 6].into_iter().enumerate() {
        if len >= needed {
            channels[ch] = hex_channel(&digits[pos..pos + 2]);
            pos += 2;
        }
    }

    Color::rgb(channels[0], channels[1], channels[2])
}

/// Resolve the four playlist colors from the `[text]` section, substituting
/// the built-in default for each missing key.
pub fn load_playlist_colors(ini: Option<&IniFile>) -> [Color; 4] {
    PLAYLIST_COLORS.map(|(key, default)| {
        let value = ini.and_then(|f| f.lookup("text", key)).unwrap_or(default);
        parse_legacy_hex(value)
    })
}

/// Read `viscolor.txt` from `dir`, or the default palette if absent.
pub fn load_vis_colors(dir: &Path) -> [Color; VIS_COLOR_COUNT] {
    let Some(path) = find_file_case(dir, "viscolor.txt") else {
        return DEFAULT_VIS_COLORS;
    };
    match std::fs::read(&path) {
        Ok(bytes) => parse_vis_colors(&String::from_utf8_lossy(&bytes)),
        Err(e) => {
            log::warn!("Cannot read {}: {e}", path.display());
            DEFAULT_VIS_COLORS
        },
    }
}

/// Parse visualization colors, one `R G B` triple per line.
///
/// Only the first 24 lines are considered. A line with fewer than three
/// numbers leaves its slot at the default; extra fields (Winamp files
/// often carry a trailing comment) are ignored.
pub fn parse_vis_colors(text: &str) -> [Color; VIS_COLOR_COUNT] {
    let mut colors = DEFAULT_VIS_COLORS;
    for (slot, line) in colors.iter_mut().zip(text.split('\n')) {
        if let [r, g, b, ..] = int_list(line)[..] {
            *slot = Color::from_channels(r, g, b);
        }
    }
    colors
}
