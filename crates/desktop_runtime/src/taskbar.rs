//! Taskbar synchronization: one entry per opened pane, at most one of them active.

use std::collections::HashMap;

use leptos::logging;

use crate::{
    error::WindowManagerError,
    model::{EntrySlot, PaneId, PaneSlot, TaskbarEntry, WindowManagerState, WindowPane},
};

/// Owns the taskbar entries and the direct pane-slot to entry-slot mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarSynchronizer {
    attached: bool,
    slots: Vec<Option<TaskbarEntry>>,
    free: Vec<EntrySlot>,
    order: Vec<EntrySlot>,
    by_pane: HashMap<PaneSlot, EntrySlot>,
}

impl Default for TaskbarSynchronizer {
    fn default() -> Self {
        Self {
            attached: true,
            slots: Vec::new(),
            free: Vec::new(),
            order: Vec::new(),
            by_pane: HashMap::new(),
        }
    }
}

impl TaskbarSynchronizer {
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Marks the taskbar container as present. Existing entries are kept.
    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Marks the taskbar container as absent; later insertions fail with
    /// [`WindowManagerError::MissingContainer`].
    pub fn detach(&mut self) {
        self.attached = false;
    }

    /// Activates the entry for `slot`, creating it from `pane` when missing.
    ///
    /// Nothing changes while the container is detached.
    pub fn add_or_activate(
        &mut self,
        slot: PaneSlot,
        pane: &WindowPane,
    ) -> Result<EntrySlot, WindowManagerError> {
        if !self.attached {
            return Err(WindowManagerError::MissingContainer);
        }
        if let Some(existing) = self.by_pane.get(&slot).copied() {
            self.activate_only(Some(slot));
            return Ok(existing);
        }

        let entry = TaskbarEntry {
            window_id: pane.id.clone(),
            pane: slot,
            title: pane.title.clone(),
            icon_ref: pane.icon_ref.clone(),
            active: false,
        };
        let entry_slot = match self.free.pop() {
            Some(entry_slot) => {
                self.slots[entry_slot.0] = Some(entry);
                entry_slot
            }
            None => {
                self.slots.push(Some(entry));
                EntrySlot(self.slots.len() - 1)
            }
        };
        self.order.push(entry_slot);
        self.by_pane.insert(slot, entry_slot);
        self.activate_only(Some(slot));
        logging::log!("taskbar entry added for `{}`", pane.id);
        Ok(entry_slot)
    }

    /// Deletes the entry for `slot` if there is one.
    pub fn remove(&mut self, slot: PaneSlot) -> Option<TaskbarEntry> {
        let entry_slot = self.by_pane.remove(&slot)?;
        self.order.retain(|s| *s != entry_slot);
        self.free.push(entry_slot);
        let entry = self.slots[entry_slot.0].take();
        if let Some(entry) = entry.as_ref() {
            logging::log!("taskbar entry removed for `{}`", entry.window_id);
        }
        entry
    }

    /// Marks the entry for `slot` active and every other entry inactive.
    ///
    /// With `None`, or a slot without an entry, all entries end up inactive.
    pub fn activate_only(&mut self, slot: Option<PaneSlot>) {
        let target = slot.and_then(|slot| self.by_pane.get(&slot).copied());
        for (index, entry) in self.slots.iter_mut().enumerate() {
            if let Some(entry) = entry {
                entry.active = target == Some(EntrySlot(index));
            }
        }
    }

    /// Clears the active mark of the entry for `slot`, leaving the others alone.
    pub fn deactivate(&mut self, slot: PaneSlot) {
        if let Some(entry) = self.entry_mut(slot) {
            entry.active = false;
        }
    }

    /// Replaces the label of the entry for `slot`, if there is one.
    pub fn retitle(&mut self, slot: PaneSlot, title: &str) {
        if let Some(entry) = self.entry_mut(slot) {
            entry.title = title.to_string();
        }
    }

    pub fn entry(&self, slot: PaneSlot) -> Option<&TaskbarEntry> {
        let entry_slot = self.by_pane.get(&slot)?;
        self.slots.get(entry_slot.0).and_then(Option::as_ref)
    }

    fn entry_mut(&mut self, slot: PaneSlot) -> Option<&mut TaskbarEntry> {
        let entry_slot = self.by_pane.get(&slot)?;
        self.slots.get_mut(entry_slot.0).and_then(Option::as_mut)
    }

    /// Entries in the order they were added.
    pub fn entries(&self) -> impl Iterator<Item = &TaskbarEntry> + '_ {
        self.order
            .iter()
            .filter_map(|slot| self.slots.get(slot.0).and_then(Option::as_ref))
    }

    pub fn active_entry(&self) -> Option<&TaskbarEntry> {
        self.entries().find(|entry| entry.active)
    }

    pub fn len(&self) -> usize {
        self.by_pane.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_pane.is_empty()
    }
}

impl WindowManagerState {
    /// Creates or re-activates the taskbar entry for `id`.
    ///
    /// # Errors
    ///
    /// [`WindowManagerError::NotFound`] for unknown panes, and
    /// [`WindowManagerError::MissingContainer`] when the taskbar is detached; in the latter case
    /// nothing changes.
    pub fn taskbar_add_or_activate(&mut self, id: &PaneId) -> Result<(), WindowManagerError> {
        let slot = self.registry.slot_of(id)?;
        let pane = self.registry.get(id)?;
        self.taskbar.add_or_activate(slot, pane)?;
        Ok(())
    }

    /// Removes the taskbar entry for `id`. Removing a missing entry is not an error.
    pub fn taskbar_remove(&mut self, id: &PaneId) -> Result<(), WindowManagerError> {
        let slot = self.registry.slot_of(id)?;
        self.taskbar.remove(slot);
        Ok(())
    }

    /// Taskbar button click.
    ///
    /// The focused pane is hidden and its entry deactivated. A hidden pane is shown and raised. A
    /// pane that is shown behind another one is only raised.
    pub fn taskbar_click(&mut self, id: &PaneId) -> Result<(), WindowManagerError> {
        let slot = self.registry.slot_of(id)?;
        let shown = self.registry.get(id)?.is_shown();
        let active = self.taskbar.entry(slot).is_some_and(|entry| entry.active);
        if shown && active {
            self.hide(id)?;
            self.taskbar.deactivate(slot);
        } else {
            if !shown {
                self.show(id)?;
            }
            self.raise(id)?;
        }
        Ok(())
    }

    pub fn taskbar_entry(&self, id: &PaneId) -> Option<&TaskbarEntry> {
        let slot = self.registry.slot_of(id).ok()?;
        self.taskbar.entry(slot)
    }
}
