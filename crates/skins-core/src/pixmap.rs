//! Pixmap slots, file lookup, and decoding.

use std::path::{Path, PathBuf};

use crate::color::Color;
use crate::error::{Result, SkinError};
use crate::resolver::find_first;
use crate::surface::Surface;

/// Image extensions tried for every slot, in priority order.
pub const EXTENSIONS: [&str; 7] = ["bmp", "xpm", "png", "svg", "gif", "jpg", "jpeg"];

/// Width of a digit strip that already includes the dash glyph.
pub const NUMBERS_WITH_DASH_WIDTH: u32 = 108;

/// Narrowest digit strip the dash can be synthesised from.
const NUMBERS_MIN_WIDTH: u32 = 99;

/// The images every classic skin must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixmapId {
    Main,
    CButtons,
    ShufRep,
    Text,
    Titlebar,
    Volume,
    Balance,
    MonoStereo,
    PlayPause,
    Numbers,
    PosBar,
    EqMain,
    PlEdit,
    EqEx,
}

impl PixmapId {
    pub const COUNT: usize = 14;

    pub const ALL: [PixmapId; Self::COUNT] = [
        PixmapId::Main,
        PixmapId::CButtons,
        PixmapId::ShufRep,
        PixmapId::Text,
        PixmapId::Titlebar,
        PixmapId::Volume,
        PixmapId::Balance,
        PixmapId::MonoStereo,
        PixmapId::PlayPause,
        PixmapId::Numbers,
        PixmapId::PosBar,
        PixmapId::EqMain,
        PixmapId::PlEdit,
        PixmapId::EqEx,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Canonical file stem.
    pub const fn base_name(self) -> &'static str {
        match self {
            PixmapId::Main => "main",
            PixmapId::CButtons => "cbuttons",
            PixmapId::ShufRep => "shufrep",
            PixmapId::Text => "text",
            PixmapId::Titlebar => "titlebar",
            PixmapId::Volume => "volume",
            PixmapId::Balance => "balance",
            PixmapId::MonoStereo => "monoster",
            PixmapId::PlayPause => "playpaus",
            PixmapId::Numbers => "nums_ex",
            PixmapId::PosBar => "posbar",
            PixmapId::EqMain => "eqmain",
            PixmapId::PlEdit => "pledit",
            PixmapId::EqEx => "eq_ex",
        }
    }

    /// Stem used when the canonical file is missing.
    pub const fn alt_name(self) -> Option<&'static str> {
        match self {
            PixmapId::Balance => Some("volume"),
            PixmapId::Numbers => Some("numbers"),
            _ => None,
        }
    }

    /// File names to try, in order: for each extension the canonical stem,
    /// then the alternate.
    pub fn candidate_names(self) -> Vec<String> {
        let mut names = Vec::with_capacity(EXTENSIONS.len() * 2);
        for ext in EXTENSIONS {
            names.push(format!("{}.{ext}", self.base_name()));
            if let Some(alt) = self.alt_name() {
                names.push(format!("{alt}.{ext}"));
            }
        }
        names
    }
}

impl std::fmt::Display for PixmapId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.base_name())
    }
}

/// Find the file backing `id` in `dir`.
pub fn locate(dir: &Path, id: PixmapId) -> Option<PathBuf> {
    let found = find_first(dir, &id.candidate_names());
    if found.is_none() {
        log::warn!("Pixmap {id} not found in {}", dir.display());
    }
    found
}

/// Decoded surfaces, one per slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixmapSet {
    slots: [Option<Surface>; PixmapId::COUNT],
}

impl Default for PixmapSet {
    fn default() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }
}

impl PixmapSet {
    pub fn get(&self, id: PixmapId) -> Option<&Surface> {
        self.slots[id.index()].as_ref()
    }

    pub fn set(&mut self, id: PixmapId, surface: Surface) {
        self.slots[id.index()] = Some(surface);
    }

    /// Number of populated slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Locate and decode every slot in `dir`.
///
/// A slot with no matching file fails with [`SkinError::Incomplete`]; a file
/// that cannot be decoded fails with [`SkinError::Decode`]. The digit strip
/// gains a dash glyph if it lacks one.
pub fn load_pixmaps(dir: &Path) -> Result<PixmapSet> {
    let mut set = PixmapSet::default();
    for id in PixmapId::ALL {
        let path = locate(dir, id)
            .ok_or_else(|| SkinError::Incomplete(format!("{id} missing in {}", dir.display())))?;
        log::debug!("Loading pixmap {id} from {}", path.display());
        let mut surface = Surface::from_file(&path)?;
        if id == PixmapId::Numbers {
            surface = with_numbers_dash(surface);
        }
        set.set(id, surface);
    }
    Ok(set)
}

/// Check that every slot in `dir` has a file, without decoding.
pub fn check_pixmaps(dir: &Path) -> Result<()> {
    let missing: Vec<&str> = PixmapId::ALL
        .into_iter()
        .filter(|id| locate(dir, *id).is_none())
        .map(PixmapId::base_name)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(SkinError::Incomplete(format!(
            "{}: missing {}",
            dir.display(),
            missing.join(", ")
        )))
    }
}

/// Background and foreground colors of the bitmap font.
///
/// The background comes from the middle of the space glyph. The foreground
/// is the pixel in the glyph band that differs most from it; ties keep the
/// first one found scanning row by row.
pub fn text_colors(font: &Surface) -> (Color, Color) {
    let bg = font.pixel(152, 3);
    let mut fg = bg;
    let mut best = None;
    for y in 0..6 {
        for x in 1..150 {
            let c = font.pixel(x, y);
            let d = bg.distance(c);
            if best.is_none_or(|b| d > b) {
                fg = c;
                best = Some(d);
            }
        }
    }
    (bg, fg)
}

/// Append a dash glyph to a digit strip that has only 0-9 and a blank.
///
/// Strips of width 99..108 get a new 108-wide surface: the existing digits,
/// the blank cell repeated after them, and a 5x1 stroke lifted from the
/// middle of the "2" glyph as the dash. Other widths are returned as is.
pub fn with_numbers_dash(numbers: Surface) -> Surface {
    let (w, h) = (numbers.width(), numbers.height());
    if !(NUMBERS_MIN_WIDTH..NUMBERS_WITH_DASH_WIDTH).contains(&w) {
        return numbers;
    }
    let h = h as i32;
    let mut out = Surface::new(NUMBERS_WITH_DASH_WIDTH, h as u32);
    numbers.copy_rect(0, 0, 99, h, &mut out, 0, 0);
    numbers.copy_rect(90, 0, 9, h, &mut out, 99, 0);
    numbers.copy_rect(20, 6, 5, 1, &mut out, 101, 6);
    out
}
