use super::*;
use coursedesk_app_contract::WindowControlRole;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

/// Reducer action a title-bar control triggers.
fn control_action(role: WindowControlRole, window_id: PaneId) -> DesktopAction {
    match role {
        WindowControlRole::Minimize => DesktopAction::MinimizeWindow { window_id },
        WindowControlRole::Maximize => DesktopAction::ToggleMaximize { window_id },
        WindowControlRole::Close => DesktopAction::CloseWindow { window_id },
    }
}

fn control_enabled(role: WindowControlRole, pane: &WindowPane) -> bool {
    match role {
        WindowControlRole::Minimize => pane.flags.minimizable,
        WindowControlRole::Maximize => pane.flags.maximizable,
        WindowControlRole::Close => true,
    }
}

#[component]
pub(super) fn DesktopWindow(window_id: PaneId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let id = store_value(window_id);

    let pane = create_memo(move |_| {
        state.with(|state| id.with_value(|id| state.registry.get(id).ok().cloned()))
    });
    let is_focused =
        move || state.with(|state| id.with_value(|id| state.focused_id() == Some(id)));
    let resizable = move || {
        pane.with(|pane| {
            pane.as_ref()
                .map(|pane| pane.flags.resizable && !pane.maximized)
                .unwrap_or(false)
        })
    };

    let focus = move |_| {
        if !is_focused() {
            runtime.dispatch_action(DesktopAction::FocusWindow {
                window_id: id.get_value(),
            });
        }
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginMove {
            window_id: id.get_value(),
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let titlebar_double_click = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::ToggleMaximize {
            window_id: id.get_value(),
        });
    };
    let content = runtime
        .pane_content(&id.get_value())
        .map(|content| content.render());

    view! {
        <section
            id=id.get_value().to_string()
            class=move || {
                pane.with(|pane| pane.as_ref().map(|pane| window_class(pane, is_focused())))
                    .unwrap_or_default()
            }
            style=move || pane.with(|pane| pane.as_ref().map(window_style)).unwrap_or_default()
            on:pointerdown=focus
            role="dialog"
            aria-label=move || pane.with(|pane| pane.as_ref().map(|pane| pane.title.clone()))
        >
            <header
                class="title-bar"
                on:pointerdown=begin_move
                on:dblclick=titlebar_double_click
            >
                <img
                    class="title-bar-icon"
                    src=move || pane.with(|pane| pane.as_ref().map(|pane| pane.icon_ref.clone()))
                    alt=""
                />
                <div class="title-bar-text">
                    {move || pane.with(|pane| pane.as_ref().map(|pane| pane.title.clone()))}
                </div>
                <div class="title-bar-controls">
                    {WindowControlRole::ALL
                        .into_iter()
                        .map(|role| view! { <WindowControlButton window_id=id role pane /> })
                        .collect_view()}
                </div>
            </header>
            <div class="window-body">{content}</div>
            <Show when=resizable fallback=|| ()>
                <WindowResizeHandle window_id=id />
            </Show>
        </section>
    }
}

#[component]
fn WindowControlButton(
    window_id: StoredValue<PaneId>,
    role: WindowControlRole,
    pane: Memo<Option<WindowPane>>,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let enabled = move || {
        pane.with(|pane| {
            pane.as_ref()
                .map(|pane| control_enabled(role, pane))
                .unwrap_or(false)
        })
    };

    view! {
        <button
            aria-label=role.aria_label()
            disabled=move || !enabled()
            on:pointerdown=move |ev: web_sys::PointerEvent| {
                ev.prevent_default();
                ev.stop_propagation();
            }
            on:mousedown=move |ev| stop_mouse_event(&ev)
            on:click=move |ev| {
                stop_mouse_event(&ev);
                runtime.dispatch_action(control_action(role, window_id.get_value()));
            }
        />
    }
}

#[component]
fn WindowResizeHandle(window_id: StoredValue<PaneId>) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize {
            window_id: window_id.get_value(),
            pointer: pointer_from_pointer_event(&ev),
        });
    };

    view! { <div class="resize-handle" aria-hidden="true" on:pointerdown=on_pointerdown /> }
}
