use super::*;
use crate::model::TaskbarEntry;

/// Accessible name for a taskbar button.
fn taskbar_entry_aria_label(entry: &TaskbarEntry, shown: bool) -> String {
    if shown {
        format!("{} (open)", entry.title)
    } else {
        format!("{} (minimized)", entry.title)
    }
}

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    // Entries can only be created while this container is mounted.
    runtime.dispatch_action(DesktopAction::AttachTaskbar);
    on_cleanup(move || runtime.dispatch_action(DesktopAction::DetachTaskbar));

    let entry_ids = move || {
        state.with(|state| {
            state
                .taskbar
                .entries()
                .map(|entry| entry.window_id.clone())
                .collect::<Vec<_>>()
        })
    };

    view! {
        <footer id="taskbar" class="taskbar" role="toolbar" aria-label="Taskbar">
            <div class="taskbar-items">
                <For each=entry_ids key=|window_id| window_id.clone() let:window_id>
                    <TaskbarButton window_id />
                </For>
            </div>
        </footer>
    }
}

#[component]
fn TaskbarButton(window_id: PaneId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let dom_id = taskbar_window_button_dom_id(&window_id);
    let id = store_value(window_id);

    let entry = create_memo(move |_| {
        state.with(|state| id.with_value(|id| state.taskbar_entry(id).cloned()))
    });
    let shown = move || {
        state.with(|state| {
            id.with_value(|id| {
                state
                    .registry
                    .get(id)
                    .map(|pane| pane.is_shown())
                    .unwrap_or(false)
            })
        })
    };
    let active = move || entry.with(|entry| entry.as_ref().map(|e| e.active).unwrap_or(false));

    view! {
        <button
            id=dom_id
            class=move || if active() { "taskbar-item active" } else { "taskbar-item" }
            aria-pressed=move || active().to_string()
            aria-label=move || {
                entry.with(|entry| {
                    entry.as_ref().map(|entry| taskbar_entry_aria_label(entry, shown()))
                })
            }
            on:click=move |ev| {
                stop_mouse_event(&ev);
                runtime.dispatch_action(DesktopAction::TaskbarClick {
                    window_id: id.get_value(),
                });
            }
        >
            <img
                src=move || entry.with(|entry| entry.as_ref().map(|e| e.icon_ref.clone()))
                alt=""
            />
            <span>{move || entry.with(|entry| entry.as_ref().map(|e| e.title.clone()))}</span>
        </button>
    }
}
