use super::{action_button::ActionButton, hover_info::HoverInfo, stats_panel::StatsPanel};
use crate::hooks::{use_current_actions, use_interaction};
use crate::model::{BATTLE_ACTIONS, BattleData};
use crate::state::{control_row, skill_row};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BattleViewProps {
    pub data: BattleData,
    #[prop_or(false)]
    pub show_hints: bool,
}

#[function_component]
pub fn BattleView(props: &BattleViewProps) -> Html {
    let actions = use_current_actions();
    let interaction = use_interaction();
    let controls = control_row(
        "battle",
        BATTLE_ACTIONS,
        &actions.available,
        &interaction.enabled,
    );

    let lead = props.data.player.lead();
    let skills = lead.map(|c| c.skills.as_slice()).unwrap_or(&[]);
    let skill_controls = skill_row("battle", skills, &interaction.enabled);

    let player_panel = match lead {
        Some(creature) => html! {
            <StatsPanel creature={creature.clone()} side_label={props.data.player.display_name().to_string()} />
        },
        None => html! {
            <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; font-size:13px; opacity:0.7;">
                {"No creatures left."}
            </div>
        },
    };
    let opponent_panel = match props.data.opponent.lead() {
        Some(creature) => html! {
            <StatsPanel creature={creature.clone()} side_label={props.data.opponent.display_name().to_string()} dim={true} />
        },
        None => html! {},
    };

    // Skill buttons, each wrapped in its hover card.
    let skill_buttons = skill_controls.iter().zip(skills.iter()).map(|(control, skill)| {
        let on_activate = {
            let emit = actions.emit.clone();
            let slug = control.slug.clone();
            Callback::from(move |_| emit.emit(slug.clone()))
        };
        let mut lines: Vec<(String, String)> = skill
            .stats
            .iter()
            .map(|(key, value)| (key.clone(), value.to_string()))
            .collect();
        if let Some(element) = skill.meta.get("element").and_then(|v| v.as_str()) {
            lines.push(("element".to_string(), element.to_string()));
        }
        let detail = if skill.description.is_empty() {
            None
        } else {
            Some(skill.description.clone())
        };
        html! {
            <HoverInfo title={skill.display_name().to_string()} detail={detail} lines={lines}>
                <ActionButton
                    hook_id={control.element_id.clone()}
                    label={control.label.clone()}
                    icon={control.icon.clone()}
                    enabled={control.enabled}
                    on_activate={on_activate}
                />
            </HoverInfo>
        }
    });

    html! {
        <div style="position:absolute; inset:0;">
            <div style="position:absolute; top:12px; left:12px;">{ player_panel }</div>
            <div style="position:absolute; top:12px; right:12px;">{ opponent_panel }</div>
            <div style="position:absolute; left:50%; bottom:24px; transform:translateX(-50%); display:flex; flex-direction:column; gap:10px; align-items:center;">
                { if !skill_controls.is_empty() { html!{
                    <div style="display:flex; gap:8px;">{ for skill_buttons }</div>
                } } else { html!{} } }
                <div style="display:flex; gap:8px;">
                    { for controls.iter().map(|control| {
                        let on_activate = {
                            let emit = actions.emit.clone();
                            let slug = control.slug.clone();
                            Callback::from(move |_| emit.emit(slug.clone()))
                        };
                        html!{ <ActionButton
                            hook_id={control.element_id.clone()}
                            label={control.label.clone()}
                            icon={control.icon.clone()}
                            enabled={control.enabled}
                            on_activate={on_activate}
                        /> }
                    }) }
                </div>
                { if props.show_hints { html!{
                    <div style="font-size:11px; opacity:0.6;">{"Hover a skill for details. Swap needs a benched creature."}</div>
                } } else { html!{} } }
            </div>
        </div>
    }
}
