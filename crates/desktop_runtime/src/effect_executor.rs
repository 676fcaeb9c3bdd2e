//! Drains reducer-emitted runtime effects in order.

use leptos::*;

use crate::runtime_context::DesktopRuntimeContext;

/// Installs the effect executor for `runtime`.
pub fn install(runtime: DesktopRuntimeContext) {
    // Effects dispatched while draining land in a fresh queue.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            runtime.host.get_value().run_runtime_effect(runtime, effect);
        }
    });
}
