use crate::model::ViewSettings;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub settings: ViewSettings,
    pub on_close: Callback<()>,
    pub on_change: Callback<ViewSettings>,
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    if !props.show {
        return html! {};
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_hints_cb = {
        let cb = props.on_change.clone();
        let settings = props.settings.clone();
        Callback::from(move |_| {
            cb.emit(ViewSettings {
                show_hints: !settings.show_hints,
                ..settings.clone()
            })
        })
    };
    let toggle_log_cb = {
        let cb = props.on_change.clone();
        let settings = props.settings.clone();
        Callback::from(move |_| {
            cb.emit(ViewSettings {
                show_event_log: !settings.show_event_log,
                ..settings.clone()
            })
        })
    };
    let toggle_motion_cb = {
        let cb = props.on_change.clone();
        let settings = props.settings.clone();
        Callback::from(move |_| {
            cb.emit(ViewSettings {
                reduced_motion: !settings.reduced_motion,
                ..settings.clone()
            })
        })
    };
    let defaults_cb = {
        let cb = props.on_change.clone();
        Callback::from(move |_| cb.emit(ViewSettings::default()))
    };

    html! {<div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:340px; max-width:480px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Settings"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div style="display:flex; flex-direction:column; gap:10px;">
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={props.settings.show_hints} onclick={toggle_hints_cb} />
                    <span>{"Show Hints"}</span>
                </label>
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={props.settings.show_event_log} onclick={toggle_log_cb} />
                    <span>{"Show Event Log"}</span>
                </label>
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={props.settings.reduced_motion} onclick={toggle_motion_cb} />
                    <span>{"Reduced Motion"}</span>
                </label>
            </div>
            <div style="display:flex; gap:8px;">
                <button onclick={defaults_cb} style="flex:1;">{"Restore Defaults"}</button>
                <button onclick={close_cb} style="flex:0 0 auto;">{"Done"}</button>
            </div>
            <div style="font-size:11px; line-height:1.4; opacity:0.7;">{"Preferences are stored in this browser only. Reduced Motion also stops the match clock's refresh timer."}</div>
        </div>
    </div>}
}
