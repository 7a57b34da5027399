//! Window lifecycle: pane creation, open/close/minimize, and maximize with geometry restore.

use coursedesk_app_contract::ChromeOptions;
use leptos::logging;

use crate::{
    error::WindowManagerError,
    model::{
        CloseBehavior, PaneId, PaneRect, PaneSlot, Viewport, Visibility, WindowFlags,
        WindowManagerConfig, WindowManagerState, WindowPane,
    },
};

/// Result of [`WindowManagerState::close`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// The pane is hidden and stays registered.
    Hidden,
    /// The pane was hidden and then unregistered.
    Disposed,
}

/// Builds a hidden, unraised pane from dialog-factory chrome.
pub fn create_window_pane(
    config: &WindowManagerConfig,
    id: PaneId,
    chrome: &ChromeOptions,
) -> WindowPane {
    let icon_ref = chrome
        .icon_ref
        .clone()
        .filter(|icon| !icon.trim().is_empty())
        .unwrap_or_else(|| config.default_icon.clone());

    WindowPane {
        id,
        title: chrome.title.clone(),
        icon_ref,
        geometry: chrome.initial_geometry.unwrap_or(config.default_geometry),
        restore_geometry: None,
        visibility: Visibility::Hidden,
        maximized: false,
        z_index: 0,
        flags: WindowFlags {
            resizable: chrome.resizable,
            minimizable: chrome.minimizable,
            maximizable: chrome.maximizable,
        },
        close_behavior: chrome.close_behavior,
    }
}

impl WindowManagerState {
    /// Makes a pane built by [`create_window_pane`] interactive.
    ///
    /// # Errors
    ///
    /// [`WindowManagerError::DuplicateId`] when the id is taken; the registered pane is untouched,
    /// so handlers never stack up on one frame.
    pub fn register_pane(&mut self, pane: WindowPane) -> Result<PaneSlot, WindowManagerError> {
        self.registry.register(pane)
    }

    /// Creates and registers a pane in one step.
    pub fn create_pane(
        &mut self,
        id: PaneId,
        chrome: &ChromeOptions,
    ) -> Result<PaneSlot, WindowManagerError> {
        let pane = create_window_pane(&self.config, id, chrome);
        self.register_pane(pane)
    }

    /// Drops a pane along with its taskbar entry, any gesture targeting it, and its focus.
    pub fn unregister_pane(&mut self, id: &PaneId) -> Result<WindowPane, WindowManagerError> {
        let slot = self.registry.slot_of(id)?;
        self.taskbar.remove(slot);
        self.clear_interaction_for(id);
        self.focus.forget(id);
        self.registry.unregister(id)
    }

    pub fn show(&mut self, id: &PaneId) -> Result<(), WindowManagerError> {
        self.registry.show(id)
    }

    /// Hides a pane and ends any gesture targeting it.
    pub fn hide(&mut self, id: &PaneId) -> Result<(), WindowManagerError> {
        self.registry.hide(id)?;
        self.clear_interaction_for(id);
        Ok(())
    }

    /// Shows, raises, and lists a pane on the taskbar.
    ///
    /// A detached taskbar is logged and otherwise ignored so the pane stays usable.
    pub fn open(&mut self, id: &PaneId) -> Result<(), WindowManagerError> {
        self.show(id)?;
        self.raise(id)?;
        match self.taskbar_add_or_activate(id) {
            Err(WindowManagerError::MissingContainer) => {
                logging::warn!("taskbar container missing; `{id}` opened without a taskbar entry");
                Ok(())
            }
            other => other,
        }
    }

    /// Hides a pane and removes its taskbar entry. Closing a closed pane is a no-op.
    pub fn close(&mut self, id: &PaneId) -> Result<CloseOutcome, WindowManagerError> {
        self.hide(id)?;
        self.taskbar_remove(id)?;
        let close_behavior = self.registry.get(id)?.close_behavior;
        match close_behavior {
            CloseBehavior::Hide => Ok(CloseOutcome::Hidden),
            CloseBehavior::Dispose => {
                self.unregister_pane(id)?;
                Ok(CloseOutcome::Disposed)
            }
        }
    }

    /// Renames a pane and its taskbar entry.
    pub fn set_title(
        &mut self,
        id: &PaneId,
        title: impl Into<String>,
    ) -> Result<(), WindowManagerError> {
        let slot = self.registry.slot_of(id)?;
        let title = title.into();
        self.taskbar.retitle(slot, &title);
        self.registry.get_mut(id)?.title = title;
        Ok(())
    }

    /// Hides a pane but keeps its taskbar entry, inactive, so it can be restored from there.
    pub fn minimize(&mut self, id: &PaneId) -> Result<(), WindowManagerError> {
        let slot = self.registry.slot_of(id)?;
        self.hide(id)?;
        self.taskbar.deactivate(slot);
        Ok(())
    }

    /// Content area a maximized pane fills: the whole desktop minus the frame border and the
    /// taskbar strip.
    pub fn maximized_geometry(&self) -> PaneRect {
        PaneRect::new(
            0,
            0,
            self.viewport.width - self.config.maximize_border_inset,
            self.viewport.height - self.config.maximize_taskbar_inset,
        )
    }

    /// Resizes the desktop surface. Maximized panes are refit to the new content area; their saved
    /// restore geometry is kept.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let maximized_geometry = self.maximized_geometry();
        for pane in self.registry.iter_mut().filter(|pane| pane.maximized) {
            pane.geometry = maximized_geometry;
        }
    }

    /// Maximizes a pane, or restores the geometry saved when it was maximized. Either way the pane
    /// ends on top. Panes without a maximize control are left alone.
    pub fn toggle_maximize(&mut self, id: &PaneId) -> Result<(), WindowManagerError> {
        let maximized_geometry = self.maximized_geometry();
        let pane = self.registry.get_mut(id)?;

        if pane.maximized {
            if let Some(restore) = pane.restore_geometry.take() {
                pane.geometry = restore;
            }
            pane.maximized = false;
        } else if pane.flags.maximizable {
            pane.restore_geometry = Some(pane.geometry);
            pane.geometry = maximized_geometry;
            pane.maximized = true;
        } else {
            return Ok(());
        }

        self.raise(id)?;
        Ok(())
    }
}
