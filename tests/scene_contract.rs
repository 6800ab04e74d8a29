// End-to-end checks of the view/controller contract, without a DOM: the
// control rows a scene would render are assembled from the same inputs the
// components use.

use std::rc::Rc;
use yew::Reducible;
use yew_arcade_scenes::automation::element_id;
use yew_arcade_scenes::model::{
    BATTLE_ACTIONS, BattleData, ControllerAction, ControllerState, GameData, MENU_ACTIONS,
    ScenePayload, Trainer, sample_battle_payload,
};
use yew_arcade_scenes::state::{EnabledIds, control_row, skill_row};

fn reduce(state: ControllerState, action: ControllerAction) -> ControllerState {
    (*Rc::new(state).reduce(action)).clone()
}

fn minimal_payload() -> ScenePayload {
    ScenePayload {
        title: String::new(),
        game: GameData::CreatureBattle(BattleData {
            player: Trainer {
                id: "player".to_string(),
                name: "Ada".to_string(),
                creatures: Vec::new(),
            },
            opponent: Trainer {
                id: "rival".to_string(),
                name: String::new(),
                creatures: Vec::new(),
            },
        }),
    }
}

#[test]
fn bare_menu_renders_fallback_title_and_only_play() {
    let payload = minimal_payload();
    assert_eq!(payload.validate(), Ok(()));
    assert_eq!(payload.title(), "Game Title");

    let available = vec!["play".to_string()];
    let row = control_row("menu", MENU_ACTIONS, &available, &EnabledIds::all());
    assert_eq!(row.len(), 1);
    assert_eq!(row[0].slug, "play");
    assert_eq!(row[0].label, "Play");
    assert_eq!(row[0].element_id, "menu:play");
    assert!(row[0].enabled);
    assert!(!row.iter().any(|c| c.slug == "quit"));
}

#[test]
fn activation_reaches_the_controller_exactly_once() {
    let state = reduce(
        ControllerState::boot(),
        ControllerAction::Loaded(minimal_payload()),
    );
    let state = reduce(state, ControllerAction::Emit("play".to_string()));
    assert_eq!(state.emitted, vec!["play".to_string()]);
}

#[test]
fn excluded_element_ids_disable_without_hiding() {
    let gate = EnabledIds::only([element_id("menu", "play")]);
    let available = vec!["play".to_string(), "quit".to_string()];
    let row = control_row("menu", MENU_ACTIONS, &available, &gate);
    assert_eq!(row.len(), 2);
    let quit = row.iter().find(|c| c.slug == "quit").expect("quit rendered");
    assert!(!quit.enabled);
    let play = row.iter().find(|c| c.slug == "play").expect("play rendered");
    assert!(play.enabled);
}

#[test]
fn same_inputs_render_the_same_controls() {
    let state = reduce(
        ControllerState::boot(),
        ControllerAction::Loaded(sample_battle_payload()),
    );
    let state = reduce(state, ControllerAction::Emit("play".to_string()));
    let first = control_row("battle", BATTLE_ACTIONS, &state.available, &state.enabled);
    let second = control_row("battle", BATTLE_ACTIONS, &state.available, &state.enabled);
    assert_eq!(first, second);
}

#[test]
fn battle_controls_follow_the_controller_sets() {
    let state = reduce(
        ControllerState::boot(),
        ControllerAction::Loaded(sample_battle_payload()),
    );
    let state = reduce(state, ControllerAction::Emit("play".to_string()));

    let row = control_row("battle", BATTLE_ACTIONS, &state.available, &state.enabled);
    let slugs: Vec<&str> = row.iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(slugs, vec!["attack", "guard", "swap", "flee"]);
    assert!(row.iter().all(|c| c.enabled));

    let Some(ScenePayload {
        game: GameData::CreatureBattle(b),
        ..
    }) = &state.payload
    else {
        panic!("battle payload expected");
    };
    let lead = b.player.lead().expect("sample roster is non-empty");
    let skills = skill_row("battle", &lead.skills, &state.enabled);
    assert_eq!(skills.len(), lead.skills.len());
    assert!(skills.iter().all(|c| c.enabled));
    assert!(skills.iter().all(|c| c.slug.starts_with("skill:")));
}
