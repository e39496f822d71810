//! Layout properties and the `skin.hints` parser.
//!
//! Every classic skin shares the same main-window geometry unless it ships a
//! `skin.hints` file. The defaults below reproduce the stock layout; a hints
//! file overrides individual fields in its `[skin]` section.

use std::path::Path;

use serde::Serialize;

use crate::ini::IniFile;
use crate::parse::atoi;

/// Name of the hints file looked up in the skin root.
pub const HINTS_FILE: &str = "skin.hints";

/// INI section holding hint keys.
pub const HINTS_SECTION: &str = "skin";

macro_rules! skin_properties {
    ($($(#[$doc:meta])* $field:ident = $key:literal, $default:expr;)*) => {
        /// Layout coordinates, sizes, and visibility flags for the classic UI.
        ///
        /// Flags are kept as integers (0 = off, anything else = on) because
        /// that is how hints files express them.
        #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
        pub struct SkinProperties {
            $($(#[$doc])* pub $field: i32,)*
        }

        impl Default for SkinProperties {
            fn default() -> Self {
                Self {
                    $($field: $default,)*
                }
            }
        }

        /// Every recognised hints key, in file-documentation order.
        pub const HINT_KEYS: &[&str] = &[$($key,)*];

        impl SkinProperties {
            /// Mutable access to the field a hints key controls.
            ///
            /// `key` must already be lowercase.
            fn field_mut(&mut self, key: &str) -> Option<&mut i32> {
                match key {
                    $($key => Some(&mut self.$field),)*
                    _ => None,
                }
            }

            /// Current value for a hints key (case-insensitive).
            pub fn get(&self, key: &str) -> Option<i32> {
                match key.to_ascii_lowercase().as_str() {
                    $($key => Some(self.$field),)*
                    _ => None,
                }
            }
        }
    };
}

skin_properties! {
    mainwin_vis_x = "mainwinvisx", 24;
    mainwin_vis_y = "mainwinvisy", 43;
    mainwin_text_x = "mainwintextx", 112;
    mainwin_text_y = "mainwintexty", 27;
    mainwin_text_width = "mainwintextwidth", 153;
    mainwin_infobar_x = "mainwininfobarx", 112;
    mainwin_infobar_y = "mainwininfobary", 43;
    mainwin_number_0_x = "mainwinnumber0x", 36;
    mainwin_number_0_y = "mainwinnumber0y", 26;
    mainwin_number_1_x = "mainwinnumber1x", 48;
    mainwin_number_1_y = "mainwinnumber1y", 26;
    mainwin_number_2_x = "mainwinnumber2x", 60;
    mainwin_number_2_y = "mainwinnumber2y", 26;
    mainwin_number_3_x = "mainwinnumber3x", 78;
    mainwin_number_3_y = "mainwinnumber3y", 26;
    mainwin_number_4_x = "mainwinnumber4x", 90;
    mainwin_number_4_y = "mainwinnumber4y", 26;
    mainwin_playstatus_x = "mainwinplaystatusx", 24;
    mainwin_playstatus_y = "mainwinplaystatusy", 28;
    /// Show the menu row (flag).
    mainwin_menurow_visible = "mainwinmenurowvisible", 1;
    /// Show bitrate/samplerate/channel info (flag).
    mainwin_streaminfo_visible = "mainwinstreaminfovisible", 1;
    mainwin_volume_x = "mainwinvolumex", 107;
    mainwin_volume_y = "mainwinvolumey", 57;
    mainwin_balance_x = "mainwinbalancex", 177;
    mainwin_balance_y = "mainwinbalancey", 57;
    mainwin_position_x = "mainwinpositionx", 16;
    mainwin_position_y = "mainwinpositiony", 72;
    /// The secondary text box shows status rather than stream info (flag).
    mainwin_othertext_is_status = "mainwinothertextisstatus", 0;
    /// Show the secondary text box (flag).
    mainwin_othertext_visible = "mainwinothertextvisible", 0;
    /// Show the scrolling title (flag).
    mainwin_text_visible = "mainwintextvisible", 1;
    /// Show the visualization (flag).
    mainwin_vis_visible = "mainwinvisvisible", 1;
    mainwin_previous_x = "mainwinpreviousx", 16;
    mainwin_previous_y = "mainwinpreviousy", 88;
    mainwin_play_x = "mainwinplayx", 39;
    mainwin_play_y = "mainwinplayy", 88;
    mainwin_pause_x = "mainwinpausex", 62;
    mainwin_pause_y = "mainwinpausey", 88;
    mainwin_stop_x = "mainwinstopx", 85;
    mainwin_stop_y = "mainwinstopy", 88;
    mainwin_next_x = "mainwinnextx", 108;
    mainwin_next_y = "mainwinnexty", 88;
    mainwin_eject_x = "mainwinejectx", 136;
    mainwin_eject_y = "mainwinejecty", 89;
    /// Main window width; also sizes the `Normal` mask.
    mainwin_width = "mainwinwidth", 275;
    /// Main window height; also sizes the `Normal` mask.
    mainwin_height = "mainwinheight", 116;
    mainwin_about_x = "mainwinaboutx", 247;
    mainwin_about_y = "mainwinabouty", 83;
    mainwin_shuffle_x = "mainwinshufflex", 164;
    mainwin_shuffle_y = "mainwinshuffley", 89;
    mainwin_repeat_x = "mainwinrepeatx", 210;
    mainwin_repeat_y = "mainwinrepeaty", 89;
    mainwin_eqbutton_x = "mainwineqbuttonx", 219;
    mainwin_eqbutton_y = "mainwineqbuttony", 58;
    mainwin_plbutton_x = "mainwinplbuttonx", 242;
    mainwin_plbutton_y = "mainwinplbuttony", 58;
    textbox_bitmap_font_width = "textboxbitmapfontwidth", 5;
    textbox_bitmap_font_height = "textboxbitmapfontheight", 6;
    mainwin_minimize_x = "mainwinminimizex", 244;
    mainwin_minimize_y = "mainwinminimizey", 3;
    mainwin_shade_x = "mainwinshadex", 254;
    mainwin_shade_y = "mainwinshadey", 3;
    mainwin_close_x = "mainwinclosex", 264;
    mainwin_close_y = "mainwinclosey", 3;
}

impl SkinProperties {
    /// Defaults overridden by `skin.hints` in `dir`, if present.
    pub fn from_dir(dir: &Path) -> Self {
        let mut props = Self::default();
        if let Some(ini) = IniFile::open(dir, HINTS_FILE) {
            log::debug!("Applying {HINTS_FILE} from {}", dir.display());
            props.apply_hints(&ini);
        }
        props
    }

    /// Override every field whose key is present in the `[skin]` section.
    ///
    /// Values are read with `atoi` semantics, so garbage becomes 0 rather
    /// than failing the load. Unknown keys are ignored.
    pub fn apply_hints(&mut self, ini: &IniFile) {
        for key in HINT_KEYS {
            if let Some(raw) = ini.lookup(HINTS_SECTION, key)
                && let Some(field) = self.field_mut(key)
            {
                *field = atoi(raw);
            }
        }
    }

    pub fn menurow_visible(&self) -> bool {
        self.mainwin_menurow_visible != 0
    }

    pub fn streaminfo_visible(&self) -> bool {
        self.mainwin_streaminfo_visible != 0
    }

    pub fn othertext_is_status(&self) -> bool {
        self.mainwin_othertext_is_status != 0
    }

    pub fn othertext_visible(&self) -> bool {
        self.mainwin_othertext_visible != 0
    }

    pub fn text_visible(&self) -> bool {
        self.mainwin_text_visible != 0
    }

    pub fn vis_visible(&self) -> bool {
        self.mainwin_vis_visible != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_layout() {
        let p = SkinProperties::default();
        assert_eq!(p.mainwin_width, 275);
        assert_eq!(p.mainwin_height, 116);
        assert_eq!((p.mainwin_vis_x, p.mainwin_vis_y), (24, 43));
        assert_eq!((p.mainwin_eject_x, p.mainwin_eject_y), (136, 89));
        assert_eq!((p.mainwin_close_x, p.mainwin_close_y), (264, 3));
        assert_eq!(p.textbox_bitmap_font_width, 5);
        assert!(p.menurow_visible());
        assert!(p.streaminfo_visible());
        assert!(!p.othertext_visible());
        assert!(!p.othertext_is_status());
        assert!(p.text_visible());
        assert!(p.vis_visible());
    }

    #[test]
    fn key_table_is_complete() {
        assert_eq!(HINT_KEYS.len(), 63);
        let p = SkinProperties::default();
        for key in HINT_KEYS {
            assert!(p.get(key).is_some(), "{key} has no field");
        }
        assert_eq!(p.get("MainWinWidth"), Some(275));
        assert_eq!(p.get("unknown"), None);
    }

    #[test]
    fn overrides_present_keys_only() {
        let ini = IniFile::parse(
            "[Skin]\nMainWinWidth=300\nmainwinheight = 140\nmainwinvisvisible=0\nbogus=5\n",
        );
        let mut p = SkinProperties::default();
        p.apply_hints(&ini);
        assert_eq!(p.mainwin_width, 300);
        assert_eq!(p.mainwin_height, 140);
        assert!(!p.vis_visible());
        // Untouched.
        assert_eq!(p.mainwin_play_x, 39);
    }

    #[test]
    fn non_numeric_values_become_zero() {
        let ini = IniFile::parse("[skin]\nmainwinplayx=left\nmainwinplayy= 12abc\n");
        let mut p = SkinProperties::default();
        p.apply_hints(&ini);
        assert_eq!(p.mainwin_play_x, 0);
        assert_eq!(p.mainwin_play_y, 12);
    }

    #[test]
    fn other_sections_ignored() {
        let ini = IniFile::parse("[layout]\nmainwinwidth=999\n");
        let mut p = SkinProperties::default();
        p.apply_hints(&ini);
        assert_eq!(p.mainwin_width, 275);
    }

    #[test]
    fn from_dir_without_hints_is_default() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(SkinProperties::from_dir(dir.path()), SkinProperties::default());
    }

    #[test]
    fn from_dir_reads_hints_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Skin.Hints"), "[skin]\nmainwinstopx=90\n").unwrap();
        let p = SkinProperties::from_dir(dir.path());
        assert_eq!(p.mainwin_stop_x, 90);
        assert_eq!(p.mainwin_next_x, 108);
    }
}
