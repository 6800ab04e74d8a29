use super::{action_button::ActionButton, scene_card::SceneCard};
use crate::hooks::{use_current_actions, use_interaction};
use crate::model::{GameData, MENU_ACTIONS, ScenePayload};
use crate::state::control_row;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MainMenuProps {
    pub payload: ScenePayload,
    #[prop_or(false)]
    pub show_hints: bool,
}

#[function_component]
pub fn MainMenu(props: &MainMenuProps) -> Html {
    let actions = use_current_actions();
    let interaction = use_interaction();
    let controls = control_row("menu", MENU_ACTIONS, &actions.available, &interaction.enabled);

    let summary = match &props.payload.game {
        GameData::CreatureBattle(b) => format!(
            "{} fields {} creatures against {}.",
            b.player.display_name(),
            b.player.creatures.len(),
            b.opponent.display_name(),
        ),
        GameData::PaddleMatch(m) => format!(
            "{} vs {}, first to {}.",
            m.left.display_name(),
            m.right.display_name(),
            m.target_score,
        ),
    };

    html! {
        <div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center;">
            <SceneCard hook_id="menu" title={props.payload.title().to_string()} subtitle={summary}>
                <div style="display:flex; flex-direction:column; gap:8px; margin-top:6px;">
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
                    <div style="font-size:11px; opacity:0.6; text-align:center;">{"Esc closes any open overlay."}</div>
                } } else { html!{} } }
            </SceneCard>
        </div>
    }
}
