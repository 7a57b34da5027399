//! Pane registry: an arena of [`WindowPane`] records addressed by id or by [`PaneSlot`].

use std::collections::HashMap;

use crate::{
    error::WindowManagerError,
    model::{PaneId, PaneSlot, Visibility, WindowPane},
};

/// Exclusive owner of every registered pane.
///
/// Slots freed by [`WindowRegistry::unregister`] are recycled; an id is only bound to a slot while
/// its pane is registered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WindowRegistry {
    slots: Vec<Option<WindowPane>>,
    free: Vec<PaneSlot>,
    by_id: HashMap<PaneId, PaneSlot>,
    order: Vec<PaneSlot>,
}

impl WindowRegistry {
    /// Adds a pane.
    ///
    /// # Errors
    ///
    /// Returns [`WindowManagerError::DuplicateId`] when a pane with the same id is registered.
    pub fn register(&mut self, pane: WindowPane) -> Result<PaneSlot, WindowManagerError> {
        if self.by_id.contains_key(&pane.id) {
            return Err(WindowManagerError::DuplicateId(pane.id));
        }

        let id = pane.id.clone();
        let slot = match self.free.pop() {
            Some(slot) => {
                self.slots[slot.0] = Some(pane);
                slot
            }
            None => {
                self.slots.push(Some(pane));
                PaneSlot(self.slots.len() - 1)
            }
        };
        self.by_id.insert(id, slot);
        self.order.push(slot);
        Ok(slot)
    }

    /// Removes a pane and frees its slot.
    ///
    /// Only `WindowManagerState::unregister_pane` calls this, so the taskbar entry keyed by the
    /// slot is dropped before the slot is recycled.
    pub(crate) fn unregister(&mut self, id: &PaneId) -> Result<WindowPane, WindowManagerError> {
        let slot = self
            .by_id
            .remove(id)
            .ok_or_else(|| WindowManagerError::NotFound(id.clone()))?;
        self.order.retain(|s| *s != slot);
        self.free.push(slot);
        self.slots[slot.0]
            .take()
            .ok_or_else(|| WindowManagerError::NotFound(id.clone()))
    }

    pub fn slot_of(&self, id: &PaneId) -> Result<PaneSlot, WindowManagerError> {
        self.by_id
            .get(id)
            .copied()
            .ok_or_else(|| WindowManagerError::NotFound(id.clone()))
    }

    pub fn contains(&self, id: &PaneId) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn get(&self, id: &PaneId) -> Result<&WindowPane, WindowManagerError> {
        let slot = self.slot_of(id)?;
        self.by_slot(slot)
            .ok_or_else(|| WindowManagerError::NotFound(id.clone()))
    }

    pub fn get_mut(&mut self, id: &PaneId) -> Result<&mut WindowPane, WindowManagerError> {
        let slot = self.slot_of(id)?;
        self.slots
            .get_mut(slot.0)
            .and_then(Option::as_mut)
            .ok_or_else(|| WindowManagerError::NotFound(id.clone()))
    }

    pub fn by_slot(&self, slot: PaneSlot) -> Option<&WindowPane> {
        self.slots.get(slot.0).and_then(Option::as_ref)
    }

    pub fn show(&mut self, id: &PaneId) -> Result<(), WindowManagerError> {
        self.get_mut(id)?.visibility = Visibility::Shown;
        Ok(())
    }

    pub fn hide(&mut self, id: &PaneId) -> Result<(), WindowManagerError> {
        self.get_mut(id)?.visibility = Visibility::Hidden;
        Ok(())
    }

    /// Registered panes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &WindowPane> + '_ {
        self.order.iter().filter_map(|slot| self.by_slot(*slot))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut WindowPane> + '_ {
        self.slots.iter_mut().filter_map(Option::as_mut)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{model::WindowManagerConfig, window_manager::create_window_pane};
    use coursedesk_app_contract::ChromeOptions;

    fn pane(id: &str) -> WindowPane {
        create_window_pane(
            &WindowManagerConfig::default(),
            PaneId::trusted(id),
            &ChromeOptions::titled(id),
        )
    }

    #[test]
    fn register_rejects_duplicate_ids() {
        let mut registry = WindowRegistry::default();
        registry.register(pane("calc")).expect("first register");

        let err = registry.register(pane("calc")).unwrap_err();
        assert_eq!(err, WindowManagerError::DuplicateId(PaneId::trusted("calc")));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn lookups_on_unknown_ids_report_not_found() {
        let mut registry = WindowRegistry::default();
        let missing = PaneId::trusted("ghost");

        assert_eq!(
            registry.get(&missing).unwrap_err(),
            WindowManagerError::NotFound(missing.clone())
        );
        assert_eq!(
            registry.show(&missing).unwrap_err(),
            WindowManagerError::NotFound(missing.clone())
        );
        assert_eq!(
            registry.unregister(&missing).unwrap_err(),
            WindowManagerError::NotFound(missing)
        );
    }

    #[test]
    fn unregister_recycles_slots_and_keeps_registration_order() {
        let mut registry = WindowRegistry::default();
        let first = registry.register(pane("calc")).unwrap();
        registry.register(pane("notes")).unwrap();

        registry.unregister(&PaneId::trusted("calc")).unwrap();
        let reused = registry.register(pane("paint")).unwrap();

        assert_eq!(reused, first);
        let ids: Vec<&str> = registry.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["notes", "paint"]);
        assert!(!registry.contains(&PaneId::trusted("calc")));
    }

    #[test]
    fn show_and_hide_toggle_visibility() {
        let mut registry = WindowRegistry::default();
        registry.register(pane("calc")).unwrap();
        let id = PaneId::trusted("calc");

        registry.show(&id).unwrap();
        assert!(registry.get(&id).unwrap().is_shown());
        registry.hide(&id).unwrap();
        assert_eq!(registry.get(&id).unwrap().visibility, Visibility::Hidden);
    }
}
