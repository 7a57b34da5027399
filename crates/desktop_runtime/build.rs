use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const PANE_CATALOG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PaneGeometry {
    left: i32,
    top: i32,
    width: i32,
    height: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PaneManifest {
    id: String,
    title: String,
    #[serde(default)]
    icon_ref: Option<String>,
    #[serde(default)]
    desktop_label: Option<String>,
    #[serde(default)]
    show_on_desktop: bool,
    #[serde(default = "enabled")]
    resizable: bool,
    #[serde(default = "enabled")]
    minimizable: bool,
    #[serde(default = "enabled")]
    maximizable: bool,
    #[serde(default)]
    geometry: Option<PaneGeometry>,
}

#[derive(Debug, Clone, Deserialize)]
struct PaneCatalogFile {
    schema_version: u32,
    panes: Vec<PaneManifest>,
}

fn enabled() -> bool {
    true
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("desktop_panes.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let catalog: PaneCatalogFile = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if catalog.schema_version != PANE_CATALOG_SCHEMA_VERSION {
        panic!(
            "pane catalog schema mismatch in {}: expected {PANE_CATALOG_SCHEMA_VERSION} found {}",
            path.display(),
            catalog.schema_version
        );
    }

    let mut seen = HashSet::new();
    for pane in &catalog.panes {
        if !seen.insert(pane.id.clone()) {
            panic!("duplicate pane id `{}` in {}", pane.id, path.display());
        }
        if pane.show_on_desktop && pane.desktop_label.is_none() {
            panic!(
                "pane `{}` is shown on the desktop but has no desktop_label",
                pane.id
            );
        }
        if let Some(geometry) = &pane.geometry {
            if geometry.width <= 0 || geometry.height <= 0 {
                panic!("pane `{}` has a non-positive size", pane.id);
            }
        }
    }

    let json = serde_json::to_string_pretty(&catalog.panes).expect("serialize pane catalog");
    let generated = format!(
        "/// Build-time generated pane catalog JSON.\n\
pub const PANE_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("pane_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
