//! Error types surfaced by window-manager transitions, configuration, and the pane catalog.

use thiserror::Error;

use crate::model::PaneId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Lifecycle errors reported to the immediate caller of a window-manager operation.
pub enum WindowManagerError {
    /// A pane with this id is already registered.
    #[error("window `{0}` is already registered")]
    DuplicateId(PaneId),
    /// No pane with this id is registered.
    #[error("window `{0}` not found")]
    NotFound(PaneId),
    /// The taskbar container is not mounted, so no entry could be created.
    #[error("taskbar container is not present")]
    MissingContainer,
}

#[derive(Debug, Error)]
/// Failures while parsing [`crate::model::WindowManagerConfig`] overrides.
pub enum ConfigError {
    #[error("invalid window manager config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid window manager config: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
/// Failures while loading the built-in pane catalog.
pub enum CatalogError {
    #[error("pane catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("pane catalog entry has an invalid id: {0}")]
    InvalidId(String),
}
