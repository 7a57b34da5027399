//! Window manager for a browser desktop: pane registry, stacking, taskbar, and pointer gestures,
//! plus the Leptos shell that renders them.

pub mod catalog;
pub mod components;
mod effect_executor;
pub mod error;
pub mod focus;
pub mod interaction;
pub mod model;
pub mod reducer;
pub mod registry;
mod runtime_context;
pub mod taskbar;
pub mod window_manager;

pub use catalog::{builtin_panes, desktop_icon_panes, register_catalog, CatalogPane};
pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use error::{CatalogError, ConfigError, WindowManagerError};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, RuntimeEffect};
pub use window_manager::{create_window_pane, CloseOutcome};
