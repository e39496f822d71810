//! Classic skin subsystem.
//!
//! Loads Winamp-style skins (a directory, a `.wsz`/`.zip` archive or a
//! tarball) into decoded pixmaps, window masks, layout properties and color
//! tables, and keeps a single active skin that is replaced only by a complete load.

// Re-exports from skins-types (foundation types).
pub use skins_types::color;
pub use skins_types::error;
pub use skins_types::geometry;

pub mod colors;
pub mod config;
pub mod draw;
pub mod hints;
pub mod ini;
pub mod mask;
pub mod parse;
pub mod pixmap;
pub mod registry;
pub mod resolver;
pub mod skin;
pub mod surface;

#[cfg(test)]
mod test_utils;

pub use config::SkinsConfig;
pub use error::{Result, SkinError};
pub use registry::{RegistryState, SkinEvent, SkinRegistry};
pub use skin::Skin;
