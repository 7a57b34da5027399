//! Drag and resize gestures.
//!
//! `Idle -> Dragging -> Idle` and `Idle -> Resizing -> Idle`. A gesture starts on pointer-down over
//! a title bar or resize handle, is applied to the target pane on every pointer-move, and ends on
//! the next pointer-up wherever it happens.

use crate::{
    error::WindowManagerError,
    model::{InteractionSession, PaneId, PointerPosition, WindowManagerState},
};

impl WindowManagerState {
    /// Title-bar pointer-down. Maximized panes ignore it.
    ///
    /// Returns whether a drag session started.
    pub fn begin_drag(
        &mut self,
        id: &PaneId,
        pointer: PointerPosition,
    ) -> Result<bool, WindowManagerError> {
        let pane = self.registry.get(id)?;
        if pane.maximized {
            return Ok(false);
        }

        let offset = PointerPosition {
            x: pointer.x - pane.geometry.left,
            y: pointer.y - pane.geometry.top,
        };
        self.interaction = InteractionSession::Dragging {
            window_id: id.clone(),
            offset,
        };
        self.raise(id)?;
        Ok(true)
    }

    /// Resize-handle pointer-down. Maximized and fixed-size panes ignore it.
    ///
    /// Returns whether a resize session started.
    pub fn begin_resize(
        &mut self,
        id: &PaneId,
        pointer: PointerPosition,
    ) -> Result<bool, WindowManagerError> {
        let pane = self.registry.get(id)?;
        if pane.maximized || !pane.flags.resizable {
            return Ok(false);
        }

        self.interaction = InteractionSession::Resizing {
            window_id: id.clone(),
            origin: pointer,
            start_width: pane.geometry.width,
            start_height: pane.geometry.height,
        };
        self.raise(id)?;
        Ok(true)
    }

    /// Applies a pointer-move to the session target. Returns whether geometry changed.
    ///
    /// A session whose target has been unregistered in the meantime is dropped.
    pub fn pointer_move(&mut self, pointer: PointerPosition) -> bool {
        let min_width = self.config.min_width;
        let min_height = self.config.min_height;
        let Some(target) = self.interaction.target().cloned() else {
            return false;
        };
        let Ok(pane) = self.registry.get_mut(&target) else {
            self.interaction = InteractionSession::Idle;
            return false;
        };

        let before = pane.geometry;
        match &self.interaction {
            InteractionSession::Idle => {}
            InteractionSession::Dragging { offset, .. } => {
                pane.geometry = pane
                    .geometry
                    .moved_to(pointer.x - offset.x, pointer.y - offset.y);
            }
            InteractionSession::Resizing {
                origin,
                start_width,
                start_height,
                ..
            } => {
                pane.geometry.width = start_width + (pointer.x - origin.x);
                pane.geometry.height = start_height + (pointer.y - origin.y);
                pane.geometry = pane.geometry.clamped_min(min_width, min_height);
            }
        }
        pane.geometry != before
    }

    /// Global pointer-up. Always ends the gesture; returns whether one was in flight.
    pub fn pointer_up(&mut self) -> bool {
        let was_active = !self.interaction.is_idle();
        self.interaction = InteractionSession::Idle;
        was_active
    }

    pub(crate) fn clear_interaction_for(&mut self, id: &PaneId) {
        if self.interaction.target() == Some(id) {
            self.interaction = InteractionSession::Idle;
        }
    }
}
