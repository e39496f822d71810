//! `skinctl`: inspect, validate, install, and render classic skins.
//!
//! Usage:
//!   skinctl validate PATH
//!   skinctl inspect [PATH]
//!   skinctl use PATH
//!   skinctl install PATH
//!   skinctl render [PATH] OUT.png [--shaded | --playlist WxH]
//!
//! Settings come from `$SKINS_CONFIG`, else `<config dir>/audacious/skins.toml`.
//! Without a PATH the configured skin is used, falling back to the bundled
//! default.

mod render;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Serialize;

use skins_core::colors::ColorTable;
use skins_core::hints::SkinProperties;
use skins_core::mask::{MaskId, Region};
use skins_core::{SkinRegistry, SkinsConfig};

const USAGE: &str = "Usage: skinctl <validate PATH | inspect [PATH] | use PATH | install PATH | render [PATH] OUT.png [--shaded | --playlist WxH]>";

#[derive(Debug, PartialEq, Eq)]
enum RenderView {
    Main { shaded: bool },
    Playlist { width: i32, height: i32 },
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Validate(PathBuf),
    Inspect(Option<PathBuf>),
    Use(PathBuf),
    Install(PathBuf),
    Render {
        skin: Option<PathBuf>,
        out: PathBuf,
        view: RenderView,
    },
}

fn parse_args(args: &[String]) -> Result<Command> {
    let Some((cmd, rest)) = args.split_first() else {
        bail!("{USAGE}");
    };

    let command = match (cmd.as_str(), rest) {
        ("validate", [path]) => Command::Validate(path.into()),
        ("inspect", []) => Command::Inspect(None),
        ("inspect", [path]) => Command::Inspect(Some(path.into())),
        ("use", [path]) => Command::Use(path.into()),
        ("install", [path]) => Command::Install(path.into()),
        ("render", args) => parse_render(args)?,
        _ => bail!("{USAGE}"),
    };
    Ok(command)
}

fn parse_render(args: &[String]) -> Result<Command> {
    let mut positional = Vec::new();
    let mut view = RenderView::Main { shaded: false };
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--shaded" => view = RenderView::Main { shaded: true },
            "--playlist" => {
                let size = iter.next().context("--playlist needs WxH")?;
                let (w, h) = size.split_once('x').context("--playlist needs WxH")?;
                view = RenderView::Playlist {
                    width: w.parse().context("bad playlist width")?,
                    height: h.parse().context("bad playlist height")?,
                };
            },
            other => positional.push(PathBuf::from(other)),
        }
    }

    let (skin, out) = match positional.len() {
        1 => (None, positional.remove(0)),
        2 => {
            let out = positional.remove(1);
            (Some(positional.remove(0)), out)
        },
        _ => bail!("{USAGE}"),
    };
    Ok(Command::Render { skin, out, view })
}

fn config_path() -> Option<PathBuf> {
    std::env::var_os("SKINS_CONFIG")
        .map(PathBuf::from)
        .or_else(SkinsConfig::default_path)
}

/// Registry with `path` (or the configured skin) active.
fn open_registry(config: SkinsConfig, path: Option<&Path>) -> Result<SkinRegistry> {
    let configured = config.skin.clone();
    let mut registry = SkinRegistry::new(config);
    match path {
        Some(p) => registry
            .load(p)
            .with_context(|| format!("loading {}", p.display()))?,
        None => registry
            .init(configured.as_deref())
            .context("no usable skin")?,
    }
    Ok(registry)
}

#[derive(Serialize)]
struct Report<'a> {
    path: String,
    eq_spline_colors: Vec<String>,
    properties: &'a SkinProperties,
    colors: &'a ColorTable,
    masks: BTreeMap<&'static str, &'a Region>,
}

fn inspect(registry: &SkinRegistry) -> Result<String> {
    let skin = registry.active();
    let report = Report {
        path: skin
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_default(),
        eq_spline_colors: skin.eq_spline_colors().iter().map(|c| c.to_hex()).collect(),
        properties: skin.properties(),
        colors: skin.colors(),
        masks: MaskId::ALL
            .into_iter()
            .map(|id| (id.section(), skin.mask(id)))
            .collect(),
    };
    Ok(toml::to_string_pretty(&report)?)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = parse_args(&args)?;
    let cfg_path = config_path();
    let config = match &cfg_path {
        Some(p) => SkinsConfig::load(p)?,
        None => SkinsConfig::default(),
    };

    match command {
        Command::Validate(path) => {
            SkinRegistry::validate(&path)?;
            println!("{}: ok", path.display());
        },
        Command::Inspect(path) => {
            let registry = open_registry(config, path.as_deref())?;
            print!("{}", inspect(&registry)?);
        },
        Command::Use(path) => {
            let registry = open_registry(config, Some(&path))?;
            let cfg_path = cfg_path.context("no config directory available")?;
            registry.config().save(&cfg_path)?;
            log::info!("Saved {}", cfg_path.display());
        },
        Command::Install(path) => {
            let registry = SkinRegistry::new(config);
            let target = registry.install(&path)?;
            println!("{}", target.display());
        },
        Command::Render { skin, out, view } => {
            let registry = open_registry(config, skin.as_deref())?;
            let surface = match view {
                RenderView::Main { shaded } => render::render_mainwin(registry.active(), shaded)?,
                RenderView::Playlist { width, height } => {
                    render::render_playlist(registry.active(), width, height)?
                },
            };
            render::save_png(&out, &surface)?;
            log::info!(
                "Rendered {}x{} to {}",
                surface.width(),
                surface.height(),
                out.display()
            );
        },
    }
    Ok(())
}
