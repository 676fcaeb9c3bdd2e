//! Runtime provider and context wiring for the desktop.
//!
//! This module owns the reducer container, the runtime effect queue, and the pending trash timer.
//! UI composition stays in [`crate::components`].

use leptos::{leptos_dom::helpers::TimeoutHandle, *};
use platform_host::HostServices;

use crate::{
    config::DesktopConfig,
    effect_executor,
    host::DesktopHostContext,
    model::DesktopState,
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Queue of runtime effects emitted by the reducer.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Timer driving the next trash step, if one is pending.
    pub trash_timer: StoredValue<Option<TimeoutHandle>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Removes the pending trash timer handle, leaving the slot empty.
    pub(crate) fn take_trash_timer(&self) -> Option<TimeoutHandle> {
        let handle = self.trash_timer.get_value();
        self.trash_timer.set_value(None);
        handle
    }
}

fn install_runtime_orchestration(runtime: DesktopRuntimeContext) {
    runtime
        .host
        .get_value()
        .install_boot_hydration(runtime.dispatch);
    effect_executor::install(runtime);

    on_cleanup(move || {
        if let Some(handle) = runtime.take_trash_timer() {
            handle.clear();
        }
    });
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and hydrates stored preferences.
pub fn DesktopProvider(
    /// Injected host bundle assembled by the entry layer.
    host_services: HostServices,
    /// Seed windows. Defaults to [`DesktopConfig::builtin`].
    #[prop(optional)]
    config: Option<DesktopConfig>,
    children: Children,
) -> impl IntoView {
    let host = DesktopHostContext::new(host_services);
    let config = config.unwrap_or_default();
    let initial = match config.initial_state(host.viewport()) {
        Ok(state) => state,
        Err(err) => {
            logging::warn!("desktop config rejected, booting empty desktop: {err}");
            DesktopState::default()
        }
    };

    let host = store_value(host);
    let state = create_rw_signal(initial);
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let trash_timer = store_value(None::<TimeoutHandle>);

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let previous = desktop.clone();

        match reduce_desktop(&mut desktop, action) {
            Ok(new_effects) => {
                if desktop != previous {
                    state.set(desktop);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        effects,
        trash_timer,
        dispatch,
    };

    provide_context(runtime);

    install_runtime_orchestration(runtime);

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
