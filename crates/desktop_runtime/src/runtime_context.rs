//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived window-manager state container, the runtime effect queue, and
//! the hosted pane contents. UI composition stays in [`crate::components`].

use std::collections::HashMap;

use coursedesk_app_contract::{DialogFactory, PaneContent, PaneSpec};
use leptos::*;

use crate::{
    catalog::{self, CatalogPane},
    effect_executor,
    error::WindowManagerError,
    model::{PaneId, WindowManagerConfig, WindowManagerState},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading window-manager state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Reactive window-manager state signal.
    pub state: RwSignal<WindowManagerState>,
    /// Queue of runtime effects emitted by the reducer and processed by the shell.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Hosted content for every registered pane that has any.
    pub contents: StoredValue<HashMap<PaneId, PaneContent>>,
    /// Built-in panes loaded at boot.
    pub catalog: StoredValue<Vec<CatalogPane>>,
    /// Explorer address-bar text.
    pub address_bar: RwSignal<String>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction, Result<(), WindowManagerError>>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action and logs a failure instead of returning it.
    pub fn dispatch_action(&self, action: DesktopAction) {
        if let Err(err) = self.try_dispatch(action) {
            report_dispatch_error(&err);
        }
    }

    /// Dispatches a reducer action and hands the outcome back to the caller.
    ///
    /// # Errors
    ///
    /// Whatever [`reduce_desktop`] reports; state is left untouched in that case.
    pub fn try_dispatch(&self, action: DesktopAction) -> Result<(), WindowManagerError> {
        self.dispatch.call(action)
    }

    /// Registers a hidden pane for `spec` and keeps its content for rendering.
    ///
    /// # Errors
    ///
    /// [`WindowManagerError::DuplicateId`] when the id is already registered; the stored content
    /// of the existing pane is kept.
    pub fn create_window_pane(&self, spec: PaneSpec) -> Result<(), WindowManagerError> {
        let PaneSpec {
            id,
            chrome,
            content,
        } = spec;
        if self.is_registered(&id) {
            return Err(WindowManagerError::DuplicateId(id));
        }

        // The frame renders as soon as the pane is registered, so its content must already be here.
        self.set_pane_content(id.clone(), content);
        let created = self.try_dispatch(DesktopAction::CreatePane {
            window_id: id.clone(),
            chrome,
        });
        if created.is_err() {
            self.contents.update_value(|contents| {
                contents.remove(&id);
            });
        }
        created
    }

    /// Attaches content to a pane that was registered without any, such as a catalog pane.
    pub fn set_pane_content(&self, id: PaneId, content: PaneContent) {
        self.contents.update_value(|contents| {
            contents.insert(id, content);
        });
    }

    pub fn pane_content(&self, id: &PaneId) -> Option<PaneContent> {
        self.contents.with_value(|contents| contents.get(id).cloned())
    }

    pub fn is_registered(&self, id: &PaneId) -> bool {
        self.state.with_untracked(|state| state.registry.contains(id))
    }

    pub fn open_pane(&self, id: PaneId) {
        self.dispatch_action(DesktopAction::OpenWindow { window_id: id });
    }

    pub fn close_pane(&self, id: PaneId) {
        self.dispatch_action(DesktopAction::CloseWindow { window_id: id });
    }

    /// Opens the pane described by `spec`, creating it first when it is not registered yet.
    ///
    /// A spec for an existing id only re-opens that pane; its content is not replaced.
    pub fn open_spec(&self, spec: PaneSpec) {
        let id = spec.id.clone();
        if !self.is_registered(&id) {
            if let Err(err) = self.create_window_pane(spec) {
                report_dispatch_error(&err);
                return;
            }
        }
        self.open_pane(id);
    }

    /// Builds a pane through `factory` and opens it.
    pub fn open_dialog(&self, factory: &impl DialogFactory) {
        self.open_spec(factory.build());
    }

    /// Shows a pane, lists it on the taskbar, and raises it as three separate steps.
    ///
    /// Unlike [`Self::open_pane`], a missing taskbar container stops the sequence before the
    /// raise.
    pub fn present_pane(&self, id: PaneId) {
        let steps = [
            DesktopAction::ShowWindow {
                window_id: id.clone(),
            },
            DesktopAction::TaskbarAddOrActivate {
                window_id: id.clone(),
            },
            DesktopAction::FocusWindow { window_id: id },
        ];
        for action in steps {
            if let Err(err) = self.try_dispatch(action) {
                report_dispatch_error(&err);
                return;
            }
        }
    }

    pub fn set_pane_title(&self, id: PaneId, title: impl Into<String>) {
        self.dispatch_action(DesktopAction::SetTitle {
            window_id: id,
            title: title.into(),
        });
    }

    /// Adds or re-activates the taskbar entry of a pane whose visibility is managed elsewhere.
    pub fn taskbar_add_or_activate(&self, id: PaneId) {
        self.dispatch_action(DesktopAction::TaskbarAddOrActivate { window_id: id });
    }

    pub fn taskbar_remove(&self, id: PaneId) {
        self.dispatch_action(DesktopAction::TaskbarRemove { window_id: id });
    }

    pub fn unregister_pane(&self, id: PaneId) {
        self.dispatch_action(DesktopAction::UnregisterPane { window_id: id });
    }
}

fn report_dispatch_error(err: &WindowManagerError) {
    match err {
        WindowManagerError::DuplicateId(_) => {
            logging::error!("desktop reducer error: {err}");
            debug_assert!(false, "{err}");
        }
        WindowManagerError::NotFound(_) | WindowManagerError::MissingContainer => {
            logging::warn!("desktop reducer error: {err}");
        }
    }
}

fn load_catalog() -> Vec<CatalogPane> {
    match catalog::builtin_panes() {
        Ok(panes) => panes,
        Err(err) => {
            logging::error!("built-in pane catalog unavailable: {err}");
            Vec::new()
        }
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and registers the built-in panes.
pub fn DesktopProvider(
    /// Window-manager tunables; defaults apply when omitted.
    #[prop(optional)]
    config: Option<WindowManagerConfig>,
    children: Children,
) -> impl IntoView {
    let panes = load_catalog();
    let mut initial = WindowManagerState::with_config(config.unwrap_or_default());
    catalog::register_catalog(&mut initial, &panes);

    let state = create_rw_signal(initial);
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let contents = store_value(HashMap::<PaneId, PaneContent>::new());
    let catalog = store_value(panes);
    let address_bar = create_rw_signal(String::new());

    let dispatch = Callback::new(move |action: DesktopAction| -> Result<(), WindowManagerError> {
        // Late cleanups can dispatch after the provider's signals are gone.
        let Some(mut desktop) = state.try_get_untracked() else {
            return Ok(());
        };
        let previous = desktop.clone();

        let new_effects = reduce_desktop(&mut desktop, action)?;
        if desktop != previous {
            state.set(desktop);
        }
        if !new_effects.is_empty() {
            let mut queue = effects.get_untracked();
            queue.extend(new_effects);
            effects.set(queue);
        }
        Ok(())
    });

    let runtime = DesktopRuntimeContext {
        state,
        effects,
        contents,
        catalog,
        address_bar,
        dispatch,
    };

    provide_context(runtime);
    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
