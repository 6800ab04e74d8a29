//! The hook layer scenes depend on.
//!
//! Scenes read two contexts: the current-actions accessor (which actions are
//! permitted, and the emit callback) and the interaction accessor (which
//! rendered elements currently accept input). Both are supplied by whatever
//! controller sits above the scene; scenes never construct them.

use crate::state::EnabledIds;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

/// "Current buttons" accessor: permitted action slugs plus the fire-and-forget
/// emit callback.
#[derive(Clone, PartialEq)]
pub struct CurrentActions {
    pub available: Vec<String>,
    pub emit: Callback<String>,
}

/// "Thing interaction" accessor: which element identifiers accept input.
/// Optional; an absent provider means everything rendered is enabled.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Interaction {
    pub enabled: EnabledIds,
}

#[hook]
pub fn use_current_actions() -> CurrentActions {
    use_context::<CurrentActions>().expect("no CurrentActions provider above this scene")
}

#[hook]
pub fn use_interaction() -> Interaction {
    use_context::<Interaction>().unwrap_or_default()
}

const POLL_MS: i32 = 100;

/// Forced re-render at a fixed short interval, for values held outside Yew's
/// reactivity (the match clock). Returns a counter so callers re-render per
/// tick; pass `active = false` to stand down.
#[hook]
pub fn use_poll_tick(active: bool) -> u32 {
    let tick = use_state(|| 0u32);
    let counter = use_mut_ref(|| 0u32);
    {
        let tick = tick.clone();
        use_effect_with(active, move |&active| {
            let mut cleanup: Box<dyn FnOnce()> = Box::new(|| ());
            if active {
                let window = web_sys::window().expect("no global `window` exists");
                let cb = Closure::wrap(Box::new(move || {
                    let mut n = counter.borrow_mut();
                    *n += 1;
                    tick.set(*n);
                }) as Box<dyn FnMut()>);
                let id = window
                    .set_interval_with_callback_and_timeout_and_arguments_0(
                        cb.as_ref().unchecked_ref(),
                        POLL_MS,
                    )
                    .expect("set_interval failed");
                let window = window.clone();
                cleanup = Box::new(move || {
                    window.clear_interval_with_handle(id);
                    drop(cb);
                });
            }
            cleanup
        });
    }
    *tick
}
