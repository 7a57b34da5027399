//! Z-order and focus: a process-wide stacking counter that only ever grows.

use crate::{
    error::WindowManagerError,
    model::{PaneId, WindowManagerState},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusManager {
    counter: u32,
    focused: Option<PaneId>,
}

impl FocusManager {
    pub fn new(baseline: u32) -> Self {
        Self {
            counter: baseline,
            focused: None,
        }
    }

    /// Highest z-index handed out so far (the baseline before the first raise).
    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn focused_id(&self) -> Option<&PaneId> {
        self.focused.as_ref()
    }

    fn next_z_index(&mut self) -> u32 {
        self.counter = self.counter.saturating_add(1);
        self.counter
    }

    pub(crate) fn forget(&mut self, id: &PaneId) {
        if self.focused.as_ref() == Some(id) {
            self.focused = None;
        }
    }
}

impl WindowManagerState {
    /// Puts `id` on top of every previously raised pane and makes its taskbar entry the only
    /// active one. Returns the new z-index.
    pub fn raise(&mut self, id: &PaneId) -> Result<u32, WindowManagerError> {
        let slot = self.registry.slot_of(id)?;
        let pane = self.registry.get_mut(id)?;
        let z_index = self.focus.next_z_index();
        pane.z_index = z_index;
        self.taskbar.activate_only(Some(slot));
        self.focus.focused = Some(id.clone());
        Ok(z_index)
    }

    /// Pane most recently raised, if it is still registered.
    pub fn focused_id(&self) -> Option<&PaneId> {
        self.focus.focused_id()
    }
}
