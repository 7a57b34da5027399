//! Shared contract types between the desktop window manager runtime and the dialog factories
//! that build panes for it.
//!
//! Collaborators (analysis dialogs, the Minesweeper window, properties panels) describe a pane
//! with [`ChromeOptions`] plus a [`PaneContent`] view factory and hand the resulting
//! [`PaneSpec`] to the runtime. They never touch window-manager state directly.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::rc::Rc;

use leptos::View;
use serde::{Deserialize, Serialize};

/// Stable identifier for a window pane.
///
/// Pane ids double as DOM ids for the rendered frame, so they are restricted to ASCII
/// alphanumerics, `-` and `_`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PaneId(String);

impl PaneId {
    /// Returns a pane identifier when `raw` is a non-empty DOM-safe token.
    pub fn new(raw: impl Into<String>) -> Result<Self, String> {
        let raw = raw.into();
        if is_valid_pane_id(&raw) {
            Ok(Self(raw))
        } else {
            Err(format!(
                "invalid pane id `{raw}`; expected ascii letters, digits, `-` or `_`"
            ))
        }
    }

    /// Creates an id without validation for trusted constants.
    pub fn trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PaneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn is_valid_pane_id(raw: &str) -> bool {
    !raw.is_empty()
        && raw.len() <= 96
        && raw
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// Pane geometry in CSS pixels, relative to the desktop's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaneRect {
    /// Distance from the desktop's left edge.
    pub left: i32,
    /// Distance from the desktop's top edge.
    pub top: i32,
    /// Outer frame width.
    pub width: i32,
    /// Outer frame height.
    pub height: i32,
}

impl PaneRect {
    /// Builds a rect from its four components.
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Returns the rect moved so its top-left corner sits at `(left, top)`.
    pub fn moved_to(self, left: i32, top: i32) -> Self {
        Self { left, top, ..self }
    }

    /// Returns the rect with width and height raised to the given floors.
    pub fn clamped_min(self, min_width: i32, min_height: i32) -> Self {
        Self {
            width: self.width.max(min_width),
            height: self.height.max(min_height),
            ..self
        }
    }
}

/// What closing a pane does beyond hiding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CloseBehavior {
    /// Hide the pane and drop its taskbar entry; the pane stays registered for reopening.
    #[default]
    Hide,
    /// Hide the pane, drop its taskbar entry, then unregister it and release its content.
    Dispose,
}

/// Standard title-bar controls every interactive pane exposes.
///
/// The runtime wires controls by role, never by their position in the title bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowControlRole {
    /// Hides the pane and keeps an inactive taskbar entry.
    Minimize,
    /// Toggles between the saved geometry and the full desktop content area.
    Maximize,
    /// Hides the pane and removes its taskbar entry.
    Close,
}

impl WindowControlRole {
    /// Title-bar order used by the default chrome.
    pub const ALL: [Self; 3] = [Self::Minimize, Self::Maximize, Self::Close];

    /// Accessible label used to tag the control button.
    pub const fn aria_label(self) -> &'static str {
        match self {
            Self::Minimize => "Minimize",
            Self::Maximize => "Maximize",
            Self::Close => "Close",
        }
    }
}

/// Frame options supplied by a dialog factory when it creates a pane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeOptions {
    /// Title shown in the title bar and the taskbar entry.
    pub title: String,
    /// Icon asset path; the runtime falls back to its default icon when absent.
    pub icon_ref: Option<String>,
    /// Starting geometry; the runtime default applies when absent.
    pub initial_geometry: Option<PaneRect>,
    /// Whether the pane shows a resize handle.
    pub resizable: bool,
    /// Whether the minimize control is enabled.
    pub minimizable: bool,
    /// Whether the maximize control is enabled.
    pub maximizable: bool,
    /// What the close control does beyond hiding the pane.
    pub close_behavior: CloseBehavior,
}

impl Default for ChromeOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            icon_ref: None,
            initial_geometry: None,
            resizable: true,
            minimizable: true,
            maximizable: true,
            close_behavior: CloseBehavior::Hide,
        }
    }
}

impl ChromeOptions {
    /// Creates default chrome with the given title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the icon asset path.
    pub fn with_icon(mut self, icon_ref: impl Into<String>) -> Self {
        self.icon_ref = Some(icon_ref.into());
        self
    }

    /// Sets the starting geometry.
    pub fn with_geometry(mut self, geometry: PaneRect) -> Self {
        self.initial_geometry = Some(geometry);
        self
    }

    /// Sets the close behavior.
    pub fn with_close_behavior(mut self, close_behavior: CloseBehavior) -> Self {
        self.close_behavior = close_behavior;
        self
    }

    /// Builds fixed-size dialog chrome: no resize handle and no maximize control.
    pub fn dialog(title: impl Into<String>) -> Self {
        Self {
            resizable: false,
            maximizable: false,
            ..Self::titled(title)
        }
    }
}

/// View factory for the content hosted inside a pane frame.
///
/// The factory is invoked every time the frame is (re)rendered, so it must be cheap to call.
#[derive(Clone)]
pub struct PaneContent(Rc<dyn Fn() -> View>);

impl PaneContent {
    /// Wraps a view factory.
    pub fn new(render: impl Fn() -> View + 'static) -> Self {
        Self(Rc::new(render))
    }

    /// Renders the hosted content.
    pub fn render(&self) -> View {
        (self.0)()
    }
}

impl std::fmt::Debug for PaneContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PaneContent(..)")
    }
}

/// Everything the runtime needs to create a pane on behalf of a collaborator.
#[derive(Debug, Clone)]
pub struct PaneSpec {
    /// Pane id; must be unique among registered panes.
    pub id: PaneId,
    /// Frame options.
    pub chrome: ChromeOptions,
    /// Hosted content.
    pub content: PaneContent,
}

/// Builds panes on demand for the window manager.
///
/// Implementors own any state their dialogs need (analysis results, game state); the runtime
/// only sees the resulting [`PaneSpec`].
pub trait DialogFactory {
    /// Produces the pane description for this dialog.
    fn build(&self) -> PaneSpec;
}
