use super::{
    battle_view::BattleView,
    event_log_panel::EventLogPanel,
    help_overlay::HelpOverlay,
    loading::{FaultScreen, LoadingScreen},
    main_menu::MainMenu,
    match_view::MatchView,
    result_overlay::ResultOverlay,
    settings_modal::SettingsModal,
};
use crate::hooks::{CurrentActions, Interaction};
use crate::model::{
    ControllerAction, ControllerState, GameData, SETTINGS_KEY, Scene, ViewSettings,
    sample_battle_payload, sample_match_payload,
};
use crate::util::clog;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[function_component]
pub fn App() -> Html {
    let controller = use_reducer(ControllerState::boot);
    let settings = use_state(ViewSettings::default);

    // Load persisted settings, then hand the controller its payload. The
    // payload source is external to the views; `#match` selects the paddle
    // demo, everything else the creature battler.
    {
        let controller = controller.clone();
        let settings = settings.clone();
        use_effect_with((), move |_| {
            let mut hash = String::new();
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    if let Ok(Some(raw)) = store.get_item(SETTINGS_KEY) {
                        if let Ok(s) = serde_json::from_str(&raw) {
                            settings.set(s);
                        }
                    }
                }
                hash = win.location().hash().unwrap_or_default();
            }
            let payload = if hash == "#match" {
                sample_match_payload()
            } else {
                sample_battle_payload()
            };
            controller.dispatch(ControllerAction::Loaded(payload));
            || ()
        });
    }
    // Persist settings changes.
    {
        let settings = settings.clone();
        use_effect_with((*settings).clone(), move |current| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    if let Ok(raw) = serde_json::to_string(current) {
                        let _ = store.set_item(SETTINGS_KEY, &raw);
                    }
                }
            }
            || ()
        });
    }
    // Esc closes whichever overlay is open.
    {
        let controller = controller.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let key_cb = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                if e.code() == "Escape" {
                    controller.dispatch(ControllerAction::CloseOverlays);
                }
            }) as Box<dyn FnMut(_)>);
            window
                .add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref())
                .expect("keydown listener");
            move || {
                let _ = window
                    .remove_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref());
                drop(key_cb);
            }
        });
    }

    // The emit side of the view contract: fire-and-forget into the reducer.
    let emit = {
        let controller = controller.clone();
        Callback::from(move |slug: String| {
            clog(&format!("emit: {}", slug));
            controller.dispatch(ControllerAction::Emit(slug));
        })
    };
    let current_actions = CurrentActions {
        available: controller.available.clone(),
        emit,
    };
    let interaction = Interaction {
        enabled: controller.enabled.clone(),
    };

    let close_overlays = {
        let controller = controller.clone();
        Callback::from(move |_| controller.dispatch(ControllerAction::CloseOverlays))
    };
    let dismiss_result = {
        let controller = controller.clone();
        Callback::from(move |_| controller.dispatch(ControllerAction::DismissResult))
    };
    let on_settings_change = {
        let settings = settings.clone();
        Callback::from(move |s: ViewSettings| settings.set(s))
    };

    let content = match (&controller.fault, &controller.payload) {
        (Some(e), _) => html! { <FaultScreen error={e.clone()} /> },
        (None, None) => html! { <LoadingScreen /> },
        (None, Some(payload)) => match controller.scene {
            Scene::Menu => html! {
                <MainMenu payload={payload.clone()} show_hints={settings.show_hints} />
            },
            Scene::Battle => match &payload.game {
                GameData::CreatureBattle(b) => html! {
                    <BattleView data={b.clone()} show_hints={settings.show_hints} />
                },
                _ => html! {},
            },
            Scene::Match => match &payload.game {
                GameData::PaddleMatch(m) => html! {
                    <MatchView
                        data={m.clone()}
                        paused={controller.match_paused}
                        reduced_motion={settings.reduced_motion}
                    />
                },
                _ => html! {},
            },
        },
    };

    html! {
        <div id="root" style="position:relative; width:100vw; height:100vh; background:#0d1117; color:#c9d1d9; overflow:hidden;">
            <ContextProvider<CurrentActions> context={current_actions}>
                <ContextProvider<Interaction> context={interaction}>
                    { content }
                </ContextProvider<Interaction>>
            </ContextProvider<CurrentActions>>
            <SettingsModal
                show={controller.show_settings}
                settings={(*settings).clone()}
                on_close={close_overlays.clone()}
                on_change={on_settings_change}
            />
            <HelpOverlay show={controller.show_help} on_close={close_overlays} />
            <ResultOverlay
                show={controller.result.is_some()}
                message={controller.result.clone().unwrap_or_default()}
                actions_taken={controller.emitted.len()}
                on_dismiss={dismiss_result}
            />
            <EventLogPanel entries={controller.emitted.clone()} show={settings.show_event_log} />
        </div>
    }
}
