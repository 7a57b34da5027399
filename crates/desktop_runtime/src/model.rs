use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub use coursedesk_app_contract::{CloseBehavior, PaneId, PaneRect};

use crate::{
    error::ConfigError, focus::FocusManager, registry::WindowRegistry,
    taskbar::TaskbarSynchronizer,
};

pub const DEFAULT_ICON_REF: &str = "Icons/computer.ico";
pub const Z_INDEX_BASELINE: u32 = 100;
pub const MIN_WINDOW_WIDTH: i32 = 300;
pub const MIN_WINDOW_HEIGHT: i32 = 250;
/// Horizontal space left free when a pane fills the desktop.
pub const MAXIMIZE_BORDER_INSET: i32 = 1;
/// Vertical space reserved for the taskbar when a pane fills the desktop.
pub const MAXIMIZE_TASKBAR_INSET: i32 = 32;
pub const DEFAULT_PANE_RECT: PaneRect = PaneRect::new(100, 50, 600, 400);

/// Arena index of a pane inside the [`WindowRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PaneSlot(pub(crate) usize);

/// Arena index of an entry inside the [`TaskbarSynchronizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntrySlot(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowFlags {
    pub resizable: bool,
    pub minimizable: bool,
    pub maximizable: bool,
}

impl Default for WindowFlags {
    fn default() -> Self {
        Self {
            resizable: true,
            minimizable: true,
            maximizable: true,
        }
    }
}

/// One on-screen frame.
///
/// `restore_geometry` is `Some` exactly while `maximized` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowPane {
    pub id: PaneId,
    pub title: String,
    pub icon_ref: String,
    pub geometry: PaneRect,
    pub restore_geometry: Option<PaneRect>,
    pub visibility: Visibility,
    pub maximized: bool,
    pub z_index: u32,
    pub flags: WindowFlags,
    pub close_behavior: CloseBehavior,
}

impl WindowPane {
    pub fn is_shown(&self) -> bool {
        self.visibility == Visibility::Shown
    }
}

/// Taskbar button backing one opened pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarEntry {
    pub window_id: PaneId,
    pub pane: PaneSlot,
    pub title: String,
    pub icon_ref: String,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The single pointer gesture in flight, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InteractionSession {
    #[default]
    Idle,
    Dragging {
        window_id: PaneId,
        /// Pointer position relative to the pane's top-left corner at pointer-down.
        offset: PointerPosition,
    },
    Resizing {
        window_id: PaneId,
        origin: PointerPosition,
        start_width: i32,
        start_height: i32,
    },
}

impl InteractionSession {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn target(&self) -> Option<&PaneId> {
        match self {
            Self::Idle => None,
            Self::Dragging { window_id, .. } | Self::Resizing { window_id, .. } => Some(window_id),
        }
    }
}

/// Size of the desktop surface the panes live on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
        }
    }
}

/// Tunables for the window manager. Every field has a default, so partial JSON overrides work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowManagerConfig {
    pub z_index_baseline: u32,
    pub min_width: i32,
    pub min_height: i32,
    pub maximize_border_inset: i32,
    pub maximize_taskbar_inset: i32,
    pub default_icon: String,
    pub default_geometry: PaneRect,
}

impl Default for WindowManagerConfig {
    fn default() -> Self {
        Self {
            z_index_baseline: Z_INDEX_BASELINE,
            min_width: MIN_WINDOW_WIDTH,
            min_height: MIN_WINDOW_HEIGHT,
            maximize_border_inset: MAXIMIZE_BORDER_INSET,
            maximize_taskbar_inset: MAXIMIZE_TASKBAR_INSET,
            default_icon: DEFAULT_ICON_REF.to_string(),
            default_geometry: DEFAULT_PANE_RECT,
        }
    }
}

impl WindowManagerConfig {
    /// Parses a JSON override document on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the document is malformed or the size floors are not positive.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        if config.min_width <= 0 || config.min_height <= 0 {
            return Err(ConfigError::Invalid(format!(
                "minimum pane size must be positive, got {}x{}",
                config.min_width, config.min_height
            )));
        }
        if config.default_icon.trim().is_empty() {
            return Err(ConfigError::Invalid("default_icon must not be empty".to_string()));
        }
        Ok(config)
    }
}

/// Everything the window manager knows, owned in one place so transitions stay testable without a
/// live document.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowManagerState {
    pub registry: WindowRegistry,
    pub taskbar: TaskbarSynchronizer,
    pub focus: FocusManager,
    pub interaction: InteractionSession,
    pub viewport: Viewport,
    pub config: WindowManagerConfig,
}

impl Default for WindowManagerState {
    fn default() -> Self {
        Self::with_config(WindowManagerConfig::default())
    }
}

impl WindowManagerState {
    pub fn with_config(config: WindowManagerConfig) -> Self {
        Self {
            registry: WindowRegistry::default(),
            taskbar: TaskbarSynchronizer::default(),
            focus: FocusManager::new(config.z_index_baseline),
            interaction: InteractionSession::Idle,
            viewport: Viewport::default(),
            config,
        }
    }

    /// Shown panes ordered back-to-front.
    pub fn stacking_order(&self) -> Vec<&WindowPane> {
        let mut panes: Vec<&WindowPane> = self.registry.iter().filter(|p| p.is_shown()).collect();
        panes.sort_by_key(|p| p.z_index);
        panes
    }

    /// Taskbar entries keyed by pane id, for quick membership checks.
    pub fn taskbar_index(&self) -> HashMap<&PaneId, &TaskbarEntry> {
        self.taskbar
            .entries()
            .map(|entry| (&entry.window_id, entry))
            .collect()
    }
}
