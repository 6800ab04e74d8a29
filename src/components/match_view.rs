use super::action_button::ActionButton;
use crate::hooks::{use_current_actions, use_interaction, use_poll_tick};
use crate::model::{MATCH_ACTIONS, MatchData};
use crate::state::control_row;
use crate::util::format_time;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MatchViewProps {
    pub data: MatchData,
    #[prop_or(false)]
    pub paused: bool,
    #[prop_or(false)]
    pub reduced_motion: bool,
}

#[function_component]
pub fn MatchView(props: &MatchViewProps) -> Html {
    let actions = use_current_actions();
    let interaction = use_interaction();
    let controls = control_row(
        "match",
        MATCH_ACTIONS,
        &actions.available,
        &interaction.enabled,
    );

    // The match clock lives outside Yew's reactivity; the poll tick forces a
    // re-read every 100ms while the match is running.
    let started_at_ms = use_mut_ref(js_sys::Date::now);
    let _tick = use_poll_tick(!props.paused && !props.reduced_motion);
    let elapsed_secs = ((js_sys::Date::now() - *started_at_ms.borrow()) / 1000.0).max(0.0) as u64;

    let score_style = "font-size:42px; font-weight:700; font-variant-numeric:tabular-nums;";
    let name_style = "font-size:13px; opacity:0.75; text-align:center;";

    html! {
        <div style="position:absolute; inset:0;">
            <div style="position:absolute; top:12px; left:50%; transform:translateX(-50%); font-size:20px; font-weight:600;">
                { format_time(elapsed_secs) }
                { if props.paused { html!{ <span style="font-size:12px; opacity:0.7; margin-left:8px;">{"paused"}</span> } } else { html!{} } }
            </div>
            <div style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); display:flex; gap:48px; align-items:center; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:12px; padding:24px 40px;">
                <div style="display:flex; flex-direction:column; gap:4px;">
                    <span style={score_style}>{ props.data.left.score }</span>
                    <span style={name_style}>{ props.data.left.display_name() }</span>
                </div>
                <div style="font-size:18px; opacity:0.5;">{ format!("first to {}", props.data.target_score) }</div>
                <div style="display:flex; flex-direction:column; gap:4px;">
                    <span style={score_style}>{ props.data.right.score }</span>
                    <span style={name_style}>{ props.data.right.display_name() }</span>
                </div>
            </div>
            <div style="position:absolute; left:50%; bottom:24px; transform:translateX(-50%); display:flex; gap:8px;">
                { for controls.iter().map(|control| {
                    let on_activate = {
                        let emit = actions.emit.clone();
                        let slug = control.slug.clone();
                        Callback::from(move |_| emit.emit(slug.clone()))
                    };
                    let label = if control.slug == "pause" && props.paused {
                        "Resume".to_string()
                    } else {
                        control.label.clone()
                    };
                    html!{ <ActionButton
                        hook_id={control.element_id.clone()}
                        label={label}
                        icon={control.icon.clone()}
                        enabled={control.enabled}
                        on_activate={on_activate}
                    /> }
                }) }
            </div>
        </div>
    }
}
