use coursedesk_app_contract::PaneId;
use coursedesk_runtime::{use_desktop_runtime, DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::panes::register_builtin_content;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Course Desktop" />
        <Meta name="description" content="A retro desktop shell for course project results." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider>
            <BuiltinPaneContent />
            <DesktopShell />
            <OpenFromQuery />
        </DesktopProvider>
    }
}

/// Hosts content in the catalog panes. Must render before the shell so every frame finds its body.
#[component]
fn BuiltinPaneContent() -> impl IntoView {
    register_builtin_content(use_desktop_runtime());
}

/// Opens the pane named by `?open=<pane-id>` once the taskbar is mounted.
#[component]
fn OpenFromQuery() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let query = use_query_map();
    let requested = query.with_untracked(|map| map.get("open").cloned());

    if let Some(raw) = requested {
        match PaneId::new(raw) {
            Ok(id) if runtime.is_registered(&id) => runtime.open_pane(id),
            Ok(id) => logging::warn!("`?open={id}` names no desktop pane"),
            Err(err) => logging::warn!("ignoring `?open`: {err}"),
        }
    }
}
