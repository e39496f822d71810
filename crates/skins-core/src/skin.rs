//! The loaded skin aggregate.

use std::path::{Path, PathBuf};

use crate::color::Color;
use crate::colors::{ColorTable, SkinColorId, VIS_COLOR_COUNT};
use crate::draw::Blit;
use crate::error::Result;
use crate::geometry::Rect;
use crate::hints::SkinProperties;
use crate::mask::{MaskId, MaskInfo, Region, load_masks};
use crate::pixmap::{PixmapId, PixmapSet, load_pixmaps, text_colors};
use crate::resolver::SkinSource;
use crate::surface::Surface;

/// Number of equalizer spline colors sampled from `eqmain`.
pub const EQ_SPLINE_COLOR_COUNT: usize = 19;

/// Width of one digit glyph in the numbers pixmap.
pub const NUMBER_GLYPH_WIDTH: u32 = 9;

/// Width of the play/pause indicator.
pub const PLAYSTATUS_WIDTH: u32 = 11;

/// Everything needed to draw the classic UI with one skin.
///
/// A `Skin` is either empty (the [`Default`]) or fully loaded: every pixmap
/// decoded, masks built, colors resolved. There is no partial state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skin {
    path: Option<PathBuf>,
    pixmaps: PixmapSet,
    masks: [Region; MaskId::COUNT],
    properties: SkinProperties,
    colors: ColorTable,
}

impl Default for Skin {
    fn default() -> Self {
        let properties = SkinProperties::default();
        let masks = MaskId::ALL.map(|id| Region::from_rect(MaskInfo::for_skin(id, &properties).full_rect()));
        Self {
            path: None,
            pixmaps: PixmapSet::default(),
            masks,
            properties,
            colors: ColorTable::default(),
        }
    }
}

impl Skin {
    /// Resolve `path` and load everything from it.
    pub fn load(path: &Path) -> Result<Self> {
        let source = SkinSource::open(path)?;
        Self::load_from(&source)
    }

    /// Load from an already resolved source.
    ///
    /// Hints are read first since the main window mask depends on them.
    pub fn load_from(source: &SkinSource) -> Result<Self> {
        let root = source.root();
        if source.is_extracted() {
            log::debug!("Loading skin {} extracted to {}", source.origin().display(), root.display());
        } else {
            log::debug!("Loading skin {}", root.display());
        }

        let properties = SkinProperties::from_dir(root);
        let pixmaps = load_pixmaps(root)?;

        let mut colors = ColorTable::default();
        if let Some(font) = pixmaps.get(PixmapId::Text) {
            let (bg, fg) = text_colors(font);
            colors.set(SkinColorId::TextBg, bg);
            colors.set(SkinColorId::TextFg, fg);
        }
        colors.load(root);

        let masks = load_masks(root, &properties);

        Ok(Self {
            path: Some(source.origin().to_path_buf()),
            pixmaps,
            masks,
            properties,
            colors,
        })
    }

    /// The path this skin was loaded from (the archive, not its extraction
    /// directory).
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.path.is_some()
    }

    pub fn pixmap(&self, id: PixmapId) -> Option<&Surface> {
        self.pixmaps.get(id)
    }

    pub fn mask(&self, id: MaskId) -> &Region {
        &self.masks[id.index()]
    }

    pub fn properties(&self) -> &SkinProperties {
        &self.properties
    }

    pub fn colors(&self) -> &ColorTable {
        &self.colors
    }

    pub fn color(&self, id: SkinColorId) -> Color {
        self.colors.get(id)
    }

    pub fn vis_colors(&self) -> &[Color; VIS_COLOR_COUNT] {
        self.colors.vis_colors()
    }

    /// Equalizer graph colors: a vertical strip of `eqmain` at x=115 from
    /// y=294. All black when the pixmap is missing.
    pub fn eq_spline_colors(&self) -> [Color; EQ_SPLINE_COLOR_COUNT] {
        let Some(eq) = self.pixmap(PixmapId::EqMain) else {
            return [Color::BLACK; EQ_SPLINE_COLOR_COUNT];
        };
        std::array::from_fn(|i| eq.pixel(115, 294 + i as i32))
    }

    /// Blit parameters for drawing a `w`x`h` region of pixmap `id` taken
    /// from `(xsrc, ysrc)` at `(xdest, ydest)`.
    #[allow(clippy::too_many_arguments)]
    pub fn blit(
        &self,
        id: PixmapId,
        xsrc: i32,
        ysrc: i32,
        xdest: i32,
        ydest: i32,
        w: i32,
        h: i32,
    ) -> Option<Blit<'_>> {
        self.pixmap(id).map(|surface| Blit {
            surface,
            src_x: xsrc,
            src_y: ysrc,
            dst: Rect::new(xdest, ydest, w, h),
        })
    }

    /// Size of one digit of the time display.
    pub fn number_glyph_size(&self) -> Option<(u32, u32)> {
        self.pixmap(PixmapId::Numbers)
            .map(|s| (NUMBER_GLYPH_WIDTH, s.height()))
    }

    /// Size of the play/pause/stop indicator.
    pub fn playstatus_size(&self) -> Option<(u32, u32)> {
        self.pixmap(PixmapId::PlayPause)
            .map(|s| (PLAYSTATUS_WIDTH, s.height()))
    }
}
