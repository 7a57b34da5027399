//! Reducer actions, side-effect intents, and transition logic for the window manager.

use coursedesk_app_contract::ChromeOptions;

use crate::{
    error::WindowManagerError,
    model::{PaneId, PointerPosition, Viewport, WindowManagerState},
    window_manager::CloseOutcome,
};

/// Pane whose opening updates the explorer address bar.
pub const MY_COMPUTER_PANE_ID: &str = "my-computer-window";
const MY_COMPUTER_ADDRESS: &str = "My Computer";

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`WindowManagerState`].
pub enum DesktopAction {
    /// Create and register a hidden pane.
    CreatePane {
        /// Id for the new pane.
        window_id: PaneId,
        /// Frame options supplied by the dialog factory.
        chrome: ChromeOptions,
    },
    /// Remove a pane whose owner is tearing it down.
    UnregisterPane {
        /// Pane to remove.
        window_id: PaneId,
    },
    /// Show, raise, and list a pane on the taskbar.
    OpenWindow {
        /// Pane to open.
        window_id: PaneId,
    },
    /// Show a pane without raising it or touching the taskbar.
    ShowWindow {
        /// Pane to show.
        window_id: PaneId,
    },
    /// Rename a pane and its taskbar entry.
    SetTitle {
        /// Pane to rename.
        window_id: PaneId,
        /// New title-bar text.
        title: String,
    },
    /// Hide a pane and remove its taskbar entry.
    CloseWindow {
        /// Pane to close.
        window_id: PaneId,
    },
    /// Hide a pane and deactivate its taskbar entry.
    MinimizeWindow {
        /// Pane to minimize.
        window_id: PaneId,
    },
    /// Maximize a pane, or restore it if it is already maximized.
    ToggleMaximize {
        /// Pane to toggle.
        window_id: PaneId,
    },
    /// Raise a pane above all others.
    FocusWindow {
        /// Pane to raise.
        window_id: PaneId,
    },
    /// Create or activate a taskbar entry without going through [`DesktopAction::OpenWindow`].
    TaskbarAddOrActivate {
        /// Pane the entry belongs to.
        window_id: PaneId,
    },
    /// Drop a taskbar entry without closing its pane.
    TaskbarRemove {
        /// Pane the entry belongs to.
        window_id: PaneId,
    },
    /// Taskbar entry clicked.
    TaskbarClick {
        /// Pane the entry belongs to.
        window_id: PaneId,
    },
    /// The taskbar container mounted.
    AttachTaskbar,
    /// The taskbar container unmounted.
    DetachTaskbar,
    /// Title-bar pointer-down.
    BeginMove {
        /// Pane being dragged.
        window_id: PaneId,
        /// Pointer position at pointer-down.
        pointer: PointerPosition,
    },
    /// Resize-handle pointer-down.
    BeginResize {
        /// Pane being resized.
        window_id: PaneId,
        /// Pointer position at pointer-down.
        pointer: PointerPosition,
    },
    /// Pointer moved anywhere in the document.
    PointerMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Pointer released anywhere in the document.
    PointerUp,
    /// Desktop surface resized; maximized panes follow it.
    SetViewport {
        /// New desktop size.
        viewport: Viewport,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Replace the explorer address-bar text.
    UpdateAddressBar(String),
    /// Release the hosted content of a pane that has been unregistered.
    DisposePaneContent(PaneId),
}

/// Applies a [`DesktopAction`] to the window-manager state and collects resulting side effects.
///
/// # Errors
///
/// Returns [`WindowManagerError`] when the action references an unknown pane, registers a
/// duplicate id, or needs a taskbar entry while the taskbar is detached. `state` may be partially
/// updated on error; the runtime dispatch works on a copy and drops it in that case.
pub fn reduce_desktop(
    state: &mut WindowManagerState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, WindowManagerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::CreatePane { window_id, chrome } => {
            state.create_pane(window_id, &chrome)?;
        }
        DesktopAction::UnregisterPane { window_id } => {
            state.unregister_pane(&window_id)?;
            effects.push(RuntimeEffect::DisposePaneContent(window_id));
        }
        DesktopAction::OpenWindow { window_id } => {
            state.open(&window_id)?;
            if window_id.as_str() == MY_COMPUTER_PANE_ID {
                effects.push(RuntimeEffect::UpdateAddressBar(
                    MY_COMPUTER_ADDRESS.to_string(),
                ));
            }
        }
        DesktopAction::ShowWindow { window_id } => {
            state.show(&window_id)?;
        }
        DesktopAction::SetTitle { window_id, title } => {
            state.set_title(&window_id, title)?;
        }
        DesktopAction::CloseWindow { window_id } => {
            if state.close(&window_id)? == CloseOutcome::Disposed {
                effects.push(RuntimeEffect::DisposePaneContent(window_id));
            }
        }
        DesktopAction::MinimizeWindow { window_id } => {
            state.minimize(&window_id)?;
        }
        DesktopAction::ToggleMaximize { window_id } => {
            state.toggle_maximize(&window_id)?;
        }
        DesktopAction::FocusWindow { window_id } => {
            state.raise(&window_id)?;
        }
        DesktopAction::TaskbarAddOrActivate { window_id } => {
            state.taskbar_add_or_activate(&window_id)?;
        }
        DesktopAction::TaskbarRemove { window_id } => {
            state.taskbar_remove(&window_id)?;
        }
        DesktopAction::TaskbarClick { window_id } => {
            state.taskbar_click(&window_id)?;
        }
        DesktopAction::AttachTaskbar => state.taskbar.attach(),
        DesktopAction::DetachTaskbar => state.taskbar.detach(),
        DesktopAction::BeginMove { window_id, pointer } => {
            state.begin_drag(&window_id, pointer)?;
        }
        DesktopAction::BeginResize { window_id, pointer } => {
            state.begin_resize(&window_id, pointer)?;
        }
        DesktopAction::PointerMove { pointer } => {
            state.pointer_move(pointer);
        }
        DesktopAction::PointerUp => {
            state.pointer_up();
        }
        DesktopAction::SetViewport { viewport } => {
            state.set_viewport(viewport);
        }
    }

    Ok(effects)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use coursedesk_app_contract::CloseBehavior;

    fn create(state: &mut WindowManagerState, id: &str, chrome: ChromeOptions) -> PaneId {
        let window_id = PaneId::trusted(id);
        reduce_desktop(
            state,
            DesktopAction::CreatePane {
                window_id: window_id.clone(),
                chrome,
            },
        )
        .expect("create pane");
        window_id
    }

    #[test]
    fn opening_my_computer_updates_the_address_bar() {
        let mut state = WindowManagerState::default();
        let window_id = create(
            &mut state,
            MY_COMPUTER_PANE_ID,
            ChromeOptions::titled("My Computer"),
        );

        let effects =
            reduce_desktop(&mut state, DesktopAction::OpenWindow { window_id }).unwrap();

        assert_eq!(
            effects,
            vec![RuntimeEffect::UpdateAddressBar("My Computer".to_string())]
        );
    }

    #[test]
    fn other_panes_open_without_effects() {
        let mut state = WindowManagerState::default();
        let window_id = create(&mut state, "notes", ChromeOptions::titled("Notes"));

        let effects =
            reduce_desktop(&mut state, DesktopAction::OpenWindow { window_id }).unwrap();

        assert!(effects.is_empty());
    }

    #[test]
    fn duplicate_create_is_reported() {
        let mut state = WindowManagerState::default();
        create(&mut state, "calc", ChromeOptions::titled("Calc"));

        let err = reduce_desktop(
            &mut state,
            DesktopAction::CreatePane {
                window_id: PaneId::trusted("calc"),
                chrome: ChromeOptions::titled("Calc again"),
            },
        )
        .unwrap_err();

        assert_eq!(err, WindowManagerError::DuplicateId(PaneId::trusted("calc")));
        assert_eq!(
            state.registry.get(&PaneId::trusted("calc")).unwrap().title,
            "Calc"
        );
    }

    #[test]
    fn disposing_close_releases_content() {
        let mut state = WindowManagerState::default();
        let window_id = create(
            &mut state,
            "result-window-part1",
            ChromeOptions::titled("Project 2 Part 1 Results")
                .with_close_behavior(CloseBehavior::Dispose),
        );
        reduce_desktop(
            &mut state,
            DesktopAction::OpenWindow {
                window_id: window_id.clone(),
            },
        )
        .unwrap();

        let effects = reduce_desktop(
            &mut state,
            DesktopAction::CloseWindow {
                window_id: window_id.clone(),
            },
        )
        .unwrap();

        assert_eq!(effects, vec![RuntimeEffect::DisposePaneContent(window_id)]);
    }

    #[test]
    fn unknown_pane_is_not_found() {
        let mut state = WindowManagerState::default();
        let window_id = PaneId::trusted("ghost");

        let err = reduce_desktop(
            &mut state,
            DesktopAction::MinimizeWindow {
                window_id: window_id.clone(),
            },
        )
        .unwrap_err();

        assert_eq!(err, WindowManagerError::NotFound(window_id));
    }

    #[test]
    fn pointer_gesture_flows_through_actions() {
        let mut state = WindowManagerState::default();
        let window_id = create(&mut state, "calc", ChromeOptions::titled("Calc"));
        reduce_desktop(
            &mut state,
            DesktopAction::OpenWindow {
                window_id: window_id.clone(),
            },
        )
        .unwrap();

        reduce_desktop(
            &mut state,
            DesktopAction::BeginMove {
                window_id: window_id.clone(),
                pointer: PointerPosition::new(110, 60),
            },
        )
        .unwrap();
        reduce_desktop(
            &mut state,
            DesktopAction::PointerMove {
                pointer: PointerPosition::new(210, 160),
            },
        )
        .unwrap();
        reduce_desktop(&mut state, DesktopAction::PointerUp).unwrap();

        let pane = state.registry.get(&window_id).unwrap();
        assert_eq!((pane.geometry.left, pane.geometry.top), (200, 150));
        assert!(state.interaction.is_idle());
    }

    #[test]
    fn show_then_direct_taskbar_add_and_focus_lists_the_pane() {
        let mut state = WindowManagerState::default();
        let window_id = create(
            &mut state,
            "properties-dialog-project2",
            ChromeOptions::dialog("Project 2 Properties"),
        );

        for action in [
            DesktopAction::ShowWindow {
                window_id: window_id.clone(),
            },
            DesktopAction::TaskbarAddOrActivate {
                window_id: window_id.clone(),
            },
            DesktopAction::FocusWindow {
                window_id: window_id.clone(),
            },
        ] {
            reduce_desktop(&mut state, action).unwrap();
        }

        assert!(state.registry.get(&window_id).unwrap().is_shown());
        assert_eq!(state.focused_id(), Some(&window_id));
        let entry = state.taskbar_entry(&window_id).expect("entry");
        assert_eq!(entry.title, "Project 2 Properties");
        assert!(entry.active);
    }

    #[test]
    fn detached_taskbar_surfaces_missing_container_for_direct_adds() {
        let mut state = WindowManagerState::default();
        let window_id = create(&mut state, "calc", ChromeOptions::titled("Calc"));
        reduce_desktop(&mut state, DesktopAction::DetachTaskbar).unwrap();
        assert!(!state.taskbar.is_attached());

        let err = reduce_desktop(
            &mut state,
            DesktopAction::TaskbarAddOrActivate {
                window_id: window_id.clone(),
            },
        )
        .unwrap_err();
        assert_eq!(err, WindowManagerError::MissingContainer);

        reduce_desktop(&mut state, DesktopAction::AttachTaskbar).unwrap();
        reduce_desktop(
            &mut state,
            DesktopAction::TaskbarAddOrActivate {
                window_id: window_id.clone(),
            },
        )
        .unwrap();
        assert_eq!(
            state.taskbar.active_entry().map(|entry| &entry.window_id),
            Some(&window_id)
        );
    }
}
