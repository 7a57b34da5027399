//! Built-in panes of the desktop, embedded from `desktop_panes.toml` at build time.

use coursedesk_app_contract::{ChromeOptions, PaneId, PaneRect};
use leptos::logging;
use serde::Deserialize;

use crate::{
    error::{CatalogError, WindowManagerError},
    model::WindowManagerState,
};

include!(concat!(env!("OUT_DIR"), "/pane_catalog_generated.rs"));

/// One catalog row: a static pane and, optionally, the desktop icon that opens it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogPane {
    pub id: PaneId,
    pub title: String,
    #[serde(default)]
    pub icon_ref: Option<String>,
    #[serde(default)]
    pub desktop_label: Option<String>,
    #[serde(default)]
    pub show_on_desktop: bool,
    pub resizable: bool,
    pub minimizable: bool,
    pub maximizable: bool,
    #[serde(default)]
    pub geometry: Option<PaneRect>,
}

impl CatalogPane {
    pub fn chrome(&self) -> ChromeOptions {
        ChromeOptions {
            title: self.title.clone(),
            icon_ref: self.icon_ref.clone(),
            initial_geometry: self.geometry,
            resizable: self.resizable,
            minimizable: self.minimizable,
            maximizable: self.maximizable,
            ..ChromeOptions::default()
        }
    }
}

/// Parses a catalog document, rejecting ids that are not usable as element ids.
///
/// # Errors
///
/// Returns [`CatalogError`] for malformed JSON or an invalid pane id.
pub fn parse_catalog(raw: &str) -> Result<Vec<CatalogPane>, CatalogError> {
    let panes: Vec<CatalogPane> = serde_json::from_str(raw)?;
    for pane in &panes {
        PaneId::new(pane.id.as_str()).map_err(CatalogError::InvalidId)?;
    }
    Ok(panes)
}

/// The embedded catalog.
///
/// # Errors
///
/// See [`parse_catalog`].
pub fn builtin_panes() -> Result<Vec<CatalogPane>, CatalogError> {
    parse_catalog(PANE_CATALOG_JSON)
}

/// Catalog panes that get a desktop icon, in catalog order.
pub fn desktop_icon_panes(panes: &[CatalogPane]) -> Vec<CatalogPane> {
    panes
        .iter()
        .filter(|pane| pane.show_on_desktop)
        .cloned()
        .collect()
}

/// Registers every catalog pane as a hidden pane. Already registered ids are skipped.
///
/// Returns how many panes were added.
pub fn register_catalog(state: &mut WindowManagerState, panes: &[CatalogPane]) -> usize {
    let mut added = 0;
    for pane in panes {
        match state.create_pane(pane.id.clone(), &pane.chrome()) {
            Ok(_) => added += 1,
            Err(WindowManagerError::DuplicateId(id)) => {
                logging::warn!("catalog pane `{id}` is already registered");
            }
            Err(err) => logging::warn!("catalog pane `{}` not registered: {err}", pane.id),
        }
    }
    added
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn embedded_catalog_parses_and_has_unique_ids() {
        let panes = builtin_panes().expect("embedded catalog");
        let mut ids: Vec<&str> = panes.iter().map(|pane| pane.id.as_str()).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), total);
        assert!(ids.contains(&"my-computer-window"));
        assert!(ids.contains(&"project2-select-menu"));
    }

    #[test]
    fn desktop_icons_all_carry_labels() {
        let panes = builtin_panes().expect("embedded catalog");
        let icons = desktop_icon_panes(&panes);

        assert!(icons.iter().all(|pane| pane.desktop_label.is_some()));
        let ids: Vec<&str> = icons.iter().map(|pane| pane.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["my-computer-window", "my-network-window", "minesweeper-window"]
        );
    }

    #[test]
    fn register_catalog_skips_existing_panes() {
        let panes = builtin_panes().expect("embedded catalog");
        let mut state = WindowManagerState::default();

        assert_eq!(register_catalog(&mut state, &panes), panes.len());
        assert_eq!(register_catalog(&mut state, &panes), 0);
        assert_eq!(state.registry.len(), panes.len());
        assert!(state.registry.iter().all(|pane| !pane.is_shown()));
    }

    #[test]
    fn invalid_ids_are_rejected() {
        let raw = r#"[{"id":"bad id","title":"Bad","resizable":true,"minimizable":true,"maximizable":true}]"#;
        assert!(matches!(
            parse_catalog(raw),
            Err(CatalogError::InvalidId(_))
        ));
    }

    #[test]
    fn dialog_rows_map_to_fixed_size_chrome() {
        let panes = builtin_panes().expect("embedded catalog");
        let dialog = panes
            .iter()
            .find(|pane| pane.id.as_str() == "properties-dialog-project2")
            .expect("project 2 properties dialog");

        let chrome = dialog.chrome();
        assert!(!chrome.resizable);
        assert!(!chrome.maximizable);
        assert_eq!(chrome.initial_geometry, Some(PaneRect::new(180, 90, 380, 440)));
    }
}
