use coursedesk_app_contract::ChromeOptions;
use coursedesk_runtime::{
    reduce_desktop, DesktopAction, PaneId, PaneRect, PointerPosition, RuntimeEffect, Viewport,
    WindowManagerState,
};
use pretty_assertions::assert_eq;

fn apply(state: &mut WindowManagerState, action: DesktopAction) -> Vec<RuntimeEffect> {
    reduce_desktop(state, action).expect("action applies")
}

fn create(state: &mut WindowManagerState, id: &str, chrome: ChromeOptions) -> PaneId {
    let window_id = PaneId::trusted(id);
    apply(
        state,
        DesktopAction::CreatePane {
            window_id: window_id.clone(),
            chrome,
        },
    );
    window_id
}

fn open(state: &mut WindowManagerState, window_id: &PaneId) {
    apply(
        state,
        DesktopAction::OpenWindow {
            window_id: window_id.clone(),
        },
    );
}

fn click(state: &mut WindowManagerState, window_id: &PaneId) {
    apply(
        state,
        DesktopAction::TaskbarClick {
            window_id: window_id.clone(),
        },
    );
}

fn z_index(state: &WindowManagerState, window_id: &PaneId) -> u32 {
    state.registry.get(window_id).expect("pane").z_index
}

fn entry_active(state: &WindowManagerState, window_id: &PaneId) -> bool {
    state.taskbar_entry(window_id).expect("entry").active
}

#[test]
fn taskbar_toggles_between_two_panes() {
    let mut state = WindowManagerState::default();
    let calc = create(&mut state, "calc", ChromeOptions::titled("Calculator"));
    let notes = create(&mut state, "notes", ChromeOptions::titled("Notes"));

    open(&mut state, &calc);
    open(&mut state, &notes);
    assert_eq!(state.taskbar.len(), 2);
    assert!(entry_active(&state, &notes));
    assert!(!entry_active(&state, &calc));
    assert!(z_index(&state, &notes) > z_index(&state, &calc));

    click(&mut state, &calc);
    assert!(state.registry.get(&calc).unwrap().is_shown());
    assert!(z_index(&state, &calc) > z_index(&state, &notes));
    assert!(entry_active(&state, &calc));

    click(&mut state, &calc);
    assert!(!state.registry.get(&calc).unwrap().is_shown());
    assert!(!entry_active(&state, &calc));
    assert!(!entry_active(&state, &notes));
    assert!(state.registry.get(&notes).unwrap().is_shown());
}

#[test]
fn maximize_and_restore_round_trip() {
    let original = PaneRect::new(100, 50, 600, 400);
    let mut state = WindowManagerState::default();
    apply(
        &mut state,
        DesktopAction::SetViewport {
            viewport: Viewport {
                width: 1440,
                height: 900,
            },
        },
    );
    let calc = create(
        &mut state,
        "calc",
        ChromeOptions::titled("Calculator").with_geometry(original),
    );
    open(&mut state, &calc);

    apply(
        &mut state,
        DesktopAction::ToggleMaximize {
            window_id: calc.clone(),
        },
    );
    let pane = state.registry.get(&calc).unwrap();
    assert!(pane.maximized);
    assert_eq!(pane.restore_geometry, Some(original));
    assert_eq!(pane.geometry, PaneRect::new(0, 0, 1439, 868));

    apply(
        &mut state,
        DesktopAction::ToggleMaximize {
            window_id: calc.clone(),
        },
    );
    let pane = state.registry.get(&calc).unwrap();
    assert!(!pane.maximized);
    assert_eq!(pane.geometry, original);
    assert_eq!(pane.restore_geometry, None);
}

#[test]
fn maximized_pane_follows_browser_resize() {
    let original = PaneRect::new(100, 50, 600, 400);
    let mut state = WindowManagerState::default();
    let calc = create(
        &mut state,
        "calc",
        ChromeOptions::titled("Calculator").with_geometry(original),
    );
    open(&mut state, &calc);
    apply(
        &mut state,
        DesktopAction::ToggleMaximize {
            window_id: calc.clone(),
        },
    );

    apply(
        &mut state,
        DesktopAction::SetViewport {
            viewport: Viewport {
                width: 1440,
                height: 900,
            },
        },
    );

    let pane = state.registry.get(&calc).unwrap();
    assert_eq!(pane.geometry, PaneRect::new(0, 0, 1439, 868));
    assert_eq!(pane.restore_geometry, Some(original));
}

#[test]
fn repeated_opens_keep_one_entry_per_pane() {
    let mut state = WindowManagerState::default();
    let ids: Vec<PaneId> = ["calc", "notes", "paint", "explorer"]
        .into_iter()
        .map(|id| create(&mut state, id, ChromeOptions::titled(id)))
        .collect();

    for index in [0, 1, 0, 2, 1, 3, 3, 0] {
        open(&mut state, &ids[index]);
    }

    assert_eq!(state.taskbar.len(), ids.len());
    assert_eq!(state.taskbar_index().len(), ids.len());
    let active: Vec<&str> = state
        .taskbar
        .entries()
        .filter(|entry| entry.active)
        .map(|entry| entry.window_id.as_str())
        .collect();
    assert_eq!(active, vec!["calc"]);
}

#[test]
fn raise_sequence_stacks_in_call_order() {
    let mut state = WindowManagerState::default();
    let ids: Vec<PaneId> = ["a", "b", "c", "d"]
        .into_iter()
        .map(|id| create(&mut state, id, ChromeOptions::titled(id)))
        .collect();
    for id in &ids {
        open(&mut state, id);
    }

    for id in ids.iter().rev() {
        apply(
            &mut state,
            DesktopAction::FocusWindow {
                window_id: id.clone(),
            },
        );
    }

    let stacking: Vec<&str> = state
        .stacking_order()
        .into_iter()
        .map(|pane| pane.id.as_str())
        .collect();
    assert_eq!(stacking, vec!["d", "c", "b", "a"]);
    assert!(entry_active(&state, &ids[0]));
    assert_eq!(
        state.taskbar.entries().filter(|entry| entry.active).count(),
        1
    );
}

#[test]
fn close_twice_matches_close_once() {
    let mut state = WindowManagerState::default();
    let calc = create(&mut state, "calc", ChromeOptions::titled("Calculator"));
    open(&mut state, &calc);

    apply(
        &mut state,
        DesktopAction::CloseWindow {
            window_id: calc.clone(),
        },
    );
    let once = state.clone();
    apply(
        &mut state,
        DesktopAction::CloseWindow {
            window_id: calc.clone(),
        },
    );

    assert_eq!(state, once);
    assert_eq!(state.taskbar_entry(&calc), None);
}

#[test]
fn drag_then_resize_with_release_outside_any_pane() {
    let mut state = WindowManagerState::default();
    let calc = create(
        &mut state,
        "calc",
        ChromeOptions::titled("Calculator").with_geometry(PaneRect::new(100, 50, 600, 400)),
    );
    open(&mut state, &calc);

    apply(
        &mut state,
        DesktopAction::BeginMove {
            window_id: calc.clone(),
            pointer: PointerPosition::new(300, 60),
        },
    );
    apply(
        &mut state,
        DesktopAction::PointerMove {
            pointer: PointerPosition::new(280, 95),
        },
    );
    apply(&mut state, DesktopAction::PointerUp);

    apply(
        &mut state,
        DesktopAction::BeginResize {
            window_id: calc.clone(),
            pointer: PointerPosition::new(680, 485),
        },
    );
    apply(
        &mut state,
        DesktopAction::PointerMove {
            pointer: PointerPosition::new(100, 100),
        },
    );
    apply(&mut state, DesktopAction::PointerUp);

    assert_eq!(
        state.registry.get(&calc).unwrap().geometry,
        PaneRect::new(80, 85, 300, 250)
    );
    assert!(state.interaction.is_idle());
}

#[test]
fn minimized_pane_comes_back_from_its_entry() {
    let mut state = WindowManagerState::default();
    let calc = create(&mut state, "calc", ChromeOptions::titled("Calculator"));
    open(&mut state, &calc);

    apply(
        &mut state,
        DesktopAction::MinimizeWindow {
            window_id: calc.clone(),
        },
    );
    assert!(!entry_active(&state, &calc));

    click(&mut state, &calc);
    assert!(state.registry.get(&calc).unwrap().is_shown());
    assert!(entry_active(&state, &calc));
}
