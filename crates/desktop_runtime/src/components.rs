//! Desktop shell UI composition and interaction surfaces.

mod taskbar;
mod window;

use leptos::*;

use self::{taskbar::Taskbar, window::DesktopWindow};

use crate::{
    catalog::{self, CatalogPane},
    model::{PaneId, PointerPosition, Viewport, WindowPane},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

fn taskbar_window_button_dom_id(window_id: &PaneId) -> String {
    format!("taskbar-window-button-{window_id}")
}

fn desktop_icon_dom_id(window_id: &PaneId) -> String {
    format!("desktop-icon-{window_id}")
}

/// Inline style for a pane frame. Hidden panes stay in the document with `display:none`.
fn window_style(pane: &WindowPane) -> String {
    let display = if pane.is_shown() { "" } else { "display:none;" };
    format!(
        "{display}left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
        pane.geometry.left,
        pane.geometry.top,
        pane.geometry.width,
        pane.geometry.height,
        pane.z_index
    )
}

fn window_class(pane: &WindowPane, focused: bool) -> String {
    let focused_class = if focused { " focused" } else { "" };
    let maximized_class = if pane.maximized { " maximized" } else { "" };
    format!("window desktop-window{focused_class}{maximized_class}")
}

#[cfg(target_arch = "wasm32")]
fn desktop_viewport() -> Option<Viewport> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Viewport {
        width: width as i32,
        height: height as i32,
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn desktop_viewport() -> Option<Viewport> {
    None
}

fn sync_viewport(runtime: DesktopRuntimeContext) {
    if let Some(viewport) = desktop_viewport() {
        runtime.dispatch_action(DesktopAction::SetViewport { viewport });
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

/// Only the primary button of a mouse, or the primary touch/pen contact, starts a gesture.
fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

fn gesture_in_flight(runtime: DesktopRuntimeContext) -> bool {
    runtime
        .state
        .with_untracked(|state| !state.interaction.is_idle())
}

fn end_active_pointer_interaction(runtime: DesktopRuntimeContext) {
    if gesture_in_flight(runtime) {
        runtime.dispatch_action(DesktopAction::PointerUp);
    }
}

#[component]
/// Renders the desktop: icons, every registered pane, and the taskbar.
pub fn DesktopShell(
    /// Extra content rendered on the desktop surface behind the panes.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let selected_icon = create_rw_signal(None::<PaneId>);

    sync_viewport(runtime);
    let resize_listener = window_event_listener(ev::resize, move |_| sync_viewport(runtime));
    on_cleanup(move || resize_listener.remove());

    // Gestures are tracked on the window so a release outside every pane still ends them.
    let move_listener = window_event_listener(ev::pointermove, move |ev| {
        if gesture_in_flight(runtime) {
            runtime.dispatch_action(DesktopAction::PointerMove {
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    });
    on_cleanup(move || move_listener.remove());
    let up_listener =
        window_event_listener(ev::pointerup, move |_| end_active_pointer_interaction(runtime));
    on_cleanup(move || up_listener.remove());
    let cancel_listener = window_event_listener(ev::pointercancel, move |_| {
        end_active_pointer_interaction(runtime)
    });
    on_cleanup(move || cancel_listener.remove());

    let pane_ids = move || {
        state.with(|state| {
            state
                .registry
                .iter()
                .map(|pane| pane.id.clone())
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            on:click=move |_| selected_icon.set(None)
        >
            <div class="desktop-icons">
                <For
                    each=move || runtime.catalog.with_value(|panes| catalog::desktop_icon_panes(panes))
                    key=|pane| pane.id.clone()
                    let:pane
                >
                    <DesktopIcon pane selected_icon />
                </For>
            </div>

            {children.map(|children| children())}

            <div class="desktop-window-layer">
                <For each=pane_ids key=|window_id| window_id.clone() let:window_id>
                    <DesktopWindow window_id />
                </For>
            </div>

            <Taskbar />
        </div>
    }
}

#[component]
fn DesktopIcon(pane: CatalogPane, selected_icon: RwSignal<Option<PaneId>>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let icon_id = store_value(pane.id.clone());
    let label = pane.desktop_label.clone().unwrap_or_else(|| pane.title.clone());
    let icon_ref = pane
        .icon_ref
        .clone()
        .unwrap_or_else(|| runtime.state.with_untracked(|state| state.config.default_icon.clone()));
    let is_selected =
        move || selected_icon.with(|selected| selected.as_ref() == Some(&icon_id.get_value()));

    view! {
        <div
            id=desktop_icon_dom_id(&pane.id)
            class=move || if is_selected() { "desktop-icon selected" } else { "desktop-icon" }
            on:click=move |ev: web_sys::MouseEvent| {
                ev.stop_propagation();
                selected_icon.set(Some(icon_id.get_value()));
            }
            on:dblclick=move |ev: web_sys::MouseEvent| {
                stop_mouse_event(&ev);
                runtime.open_pane(icon_id.get_value());
            }
        >
            <img src=icon_ref alt="" />
            <span>{label}</span>
        </div>
    }
}
