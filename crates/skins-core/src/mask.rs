//! Window shape masks from `region.txt`.
//!
//! Each polygon in a region section is reduced to its bounding rectangle.
//! Skins in circulation were drawn against that approximation, so it is kept
//! as is rather than rasterising the polygon.

use std::path::Path;

use serde::Serialize;

use crate::geometry::Rect;
use crate::hints::SkinProperties;
use crate::ini::IniFile;

/// File holding the point lists.
pub const REGION_FILE: &str = "region.txt";

/// The windows a skin can shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskId {
    Normal,
    WindowShade,
    Equalizer,
    EqualizerWs,
}

impl MaskId {
    pub const COUNT: usize = 4;

    pub const ALL: [MaskId; Self::COUNT] = [
        MaskId::Normal,
        MaskId::WindowShade,
        MaskId::Equalizer,
        MaskId::EqualizerWs,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Section name in `region.txt`.
    pub const fn section(self) -> &'static str {
        match self {
            MaskId::Normal => "Normal",
            MaskId::WindowShade => "WindowShade",
            MaskId::Equalizer => "Equalizer",
            MaskId::EqualizerWs => "EqualizerWS",
        }
    }

    /// Default window size, before hints are applied.
    pub const fn default_size(self) -> (i32, i32) {
        match self {
            MaskId::Normal | MaskId::Equalizer => (275, 116),
            MaskId::WindowShade | MaskId::EqualizerWs => (275, 16),
        }
    }
}

/// Expected size and section of one mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskInfo {
    pub id: MaskId,
    pub width: i32,
    pub height: i32,
}

impl MaskInfo {
    /// Mask geometry for `props`. Only the main window follows the hinted
    /// size; the others are fixed.
    pub fn for_skin(id: MaskId, props: &SkinProperties) -> Self {
        let (width, height) = match id {
            MaskId::Normal => (props.mainwin_width, props.mainwin_height),
            other => other.default_size(),
        };
        Self { id, width, height }
    }

    pub fn full_rect(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }
}

/// A clip region as a union of rectangles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Region {
    rects: Vec<Rect>,
}

impl Region {
    pub fn from_rect(rect: Rect) -> Self {
        let mut region = Self::default();
        region.union_rect(rect);
        region
    }

    /// Add `rect` to the region. Empty rectangles are ignored.
    pub fn union_rect(&mut self, rect: Rect) {
        if !rect.is_empty() {
            self.rects.push(rect);
        }
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Bounding rectangle of the whole region.
    pub fn extents(&self) -> Rect {
        self.rects
            .iter()
            .fold(Rect::default(), |acc, r| acc.union(r))
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.rects.iter().any(|r| r.contains(x, y))
    }
}

/// Build the mask for `info` from a parsed region file.
///
/// Missing file, section, or keys give the full window rectangle. Polygons
/// are consumed in order until a non-positive count or a count that runs
/// past the point list. If no polygon is consumed the full rectangle is used;
/// a consumed polygon whose bounding box is degenerate, or wider than an
/// `i32` can span, adds nothing.
pub fn build_mask(ini: Option<&IniFile>, info: &MaskInfo) -> Region {
    let section = info.id.section();
    let Some(ini) = ini.filter(|ini| ini.has_section(section)) else {
        return Region::from_rect(info.full_rect());
    };
    let lists = ini
        .lookup_ints(section, "numpoints")
        .zip(ini.lookup_ints(section, "pointlist"));
    let Some((counts, points)) = lists else {
        log::debug!("[{section}] lacks NumPoints or PointList, using full window");
        return Region::from_rect(info.full_rect());
    };

    let mut region = Region::default();
    let mut created = false;
    let mut j = 0usize;

    for &count in &counts {
        if count <= 0 {
            break;
        }
        let n = count as usize;
        if j + 2 * n > points.len() {
            break;
        }

        let (mut xmin, mut ymin, mut xmax, mut ymax) = (info.width, info.height, 0, 0);
        for pair in points[j..j + 2 * n].chunks_exact(2) {
            xmin = xmin.min(pair[0]);
            ymin = ymin.min(pair[1]);
            xmax = xmax.max(pair[0]);
            ymax = ymax.max(pair[1]);
        }
        if xmax > xmin && ymax > ymin {
            match Rect::checked_from_corners(xmin, ymin, xmax, ymax) {
                Some(rect) => region.union_rect(rect),
                None => log::debug!("Polygon in [{section}] is too large, skipped"),
            }
        }

        created = true;
        j += 2 * n;
    }

    if !created {
        log::debug!("No usable polygons in [{section}], using full window");
        region.union_rect(info.full_rect());
    }
    region
}

/// Build all four masks for a skin rooted at `dir`.
pub fn load_masks(dir: &Path, props: &SkinProperties) -> [Region; MaskId::COUNT] {
    let ini = IniFile::open(dir, REGION_FILE);
    MaskId::ALL.map(|id| build_mask(ini.as_ref(), &MaskInfo::for_skin(id, props)))
}
