use std::path::PathBuf;

use serde_json::json;
use tui_2048::term::{Rgb, UiConfig};

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("tui-2048-{}-{}", std::process::id(), name));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn classic_yaml_config_file_loads() {
    let path = temp_file(
        "classic.yaml",
        "background_color: [250, 248, 239]\n\
         grid_color: [10, 20, 30]\n\
         text_color: [119, 110, 101]\n\
         light_text: [249, 246, 242]\n\
         empty_tile: [205, 193, 180, 50]\n\
         tile_colors:\n\
         \x20 0: [205, 193, 180, 50]\n\
         \x20 2: [238, 228, 218]\n\
         \x20 2048: [237, 194, 46]\n\
         text_colors:\n\
         \x20 2: [119, 110, 101]\n",
    );

    let cfg = UiConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let p = &cfg.palette;
    assert_eq!(p.grid, Rgb::new(10, 20, 30));
    assert_eq!(p.empty_tile, Rgb::new(205, 193, 180));
    assert_eq!(p.tile(2), Rgb::new(238, 228, 218));
    // Only the configured colours exist, larger tiles reuse 2048.
    assert_eq!(p.tile(8), Rgb::new(237, 194, 46));
    assert_eq!(p.tile_text(4), p.light_text);
    assert_eq!(cfg.move_debounce_ms, UiConfig::default().move_debounce_ms);
}

#[test]
fn json_config_file_loads_by_extension() {
    let doc = json!({
        "move_debounce_ms": 80,
        "background_color": [0, 0, 0],
        "tile_colors": { "2": [1, 2, 3] }
    });
    let path = temp_file("ui.json", &doc.to_string());

    let cfg = UiConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(cfg.move_debounce_ms, 80);
    assert_eq!(cfg.palette.background, Rgb::new(0, 0, 0));
    assert_eq!(cfg.palette.tile(2), Rgb::new(1, 2, 3));
}

#[test]
fn default_config_serializes_with_classic_keys() {
    let value = serde_json::to_value(UiConfig::default()).unwrap();
    assert_eq!(value["grid_color"], json!([187, 173, 160]));
    assert_eq!(value["move_debounce_ms"], json!(150));
    assert!(value.get("palette").is_none());
}
