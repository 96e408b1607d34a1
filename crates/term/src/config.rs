//! Front-end configuration.
//!
//! Read from an optional YAML file whose keys match the classic 2048 config
//! (`background_color`, `grid_color`, `text_color`, `light_text`,
//! `empty_tile`, `tile_colors`, `text_colors`) plus the two timing knobs.
//! Every key is optional. Files ending in `.json` are read as JSON with the
//! same keys. The engine never reads this, only the grid size given on the
//! command line matters for game rules.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::fb::Rgb;
use crate::palette::Palette;
use crate::types::{MOVE_DEBOUNCE_MS, SPAWN_ANIMATION_MS};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ConfigFile", into = "ConfigFile")]
pub struct UiConfig {
    pub palette: Palette,
    pub move_debounce_ms: u32,
    pub spawn_animation_ms: u32,
}

/// On-disk layout: palette keys sit at the top level.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct ConfigFile {
    background_color: Rgb,
    grid_color: Rgb,
    text_color: Rgb,
    light_text: Rgb,
    empty_tile: Rgb,
    tile_colors: BTreeMap<u64, Rgb>,
    text_colors: BTreeMap<u64, Rgb>,
    move_debounce_ms: u32,
    spawn_animation_ms: u32,
}

impl Default for ConfigFile {
    fn default() -> Self {
        UiConfig::default().into()
    }
}

impl From<ConfigFile> for UiConfig {
    fn from(f: ConfigFile) -> Self {
        Self {
            palette: Palette {
                background: f.background_color,
                grid: f.grid_color,
                text: f.text_color,
                light_text: f.light_text,
                empty_tile: f.empty_tile,
                tile_colors: f.tile_colors,
                text_colors: f.text_colors,
            },
            move_debounce_ms: f.move_debounce_ms,
            spawn_animation_ms: f.spawn_animation_ms,
        }
    }
}

impl From<UiConfig> for ConfigFile {
    fn from(c: UiConfig) -> Self {
        let p = c.palette;
        Self {
            background_color: p.background,
            grid_color: p.grid,
            text_color: p.text,
            light_text: p.light_text,
            empty_tile: p.empty_tile,
            tile_colors: p.tile_colors,
            text_colors: p.text_colors,
            move_debounce_ms: c.move_debounce_ms,
            spawn_animation_ms: c.spawn_animation_ms,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            move_debounce_ms: MOVE_DEBOUNCE_MS,
            spawn_animation_ms: SPAWN_ANIMATION_MS,
        }
    }
}

impl UiConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        // An empty YAML document is a null, not an empty mapping.
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(s).context("invalid UI config")
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).context("invalid UI config")
    }

    /// Load a config file: JSON for `.json` paths, YAML otherwise.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let parsed = if is_json {
            Self::from_json_str(&raw)
        } else {
            Self::from_yaml_str(&raw)
        };
        parsed.with_context(|| format!("in {}", path.display()))
    }
}
