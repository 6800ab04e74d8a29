//! Data contract between the scene views and their controller.
//!
//! Payloads are explicit per-game schemas behind one tagged enum rather than a
//! loosely-typed bag; required identifiers are validated once at the boundary
//! and optional display fields are defaulted at read time.

use crate::automation::element_id;
use crate::state::EnabledIds;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;
use yew::Reducible;

/// Title rendered when the payload supplies none.
pub const DEFAULT_TITLE: &str = "Game Title";
/// Display name rendered when an entity supplies none.
pub const DEFAULT_NAME: &str = "Unnamed";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Numeric stats, keys arbitrary per game ("power", "accuracy", ...).
    #[serde(default)]
    pub stats: BTreeMap<String, i64>,
    /// Free-form metadata consumed only for display ("element", ...).
    #[serde(default)]
    pub meta: BTreeMap<String, serde_json::Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub stats: BTreeMap<String, i64>,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trainer {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Ordered roster; the first entry is the lead creature.
    #[serde(default)]
    pub creatures: Vec<Creature>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleData {
    pub player: Trainer,
    pub opponent: Trainer,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Paddler {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub score: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchData {
    pub left: Paddler,
    pub right: Paddler,
    pub target_score: u32,
}

/// One schema variant per game, tagged on the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "game", content = "data", rename_all = "snake_case")]
pub enum GameData {
    CreatureBattle(BattleData),
    PaddleMatch(MatchData),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenePayload {
    #[serde(default)]
    pub title: String,
    pub game: GameData,
}

impl Skill {
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() { DEFAULT_NAME } else { &self.name }
    }
}

impl Creature {
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() { DEFAULT_NAME } else { &self.name }
    }
}

impl Trainer {
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() { DEFAULT_NAME } else { &self.name }
    }

    pub fn lead(&self) -> Option<&Creature> {
        self.creatures.first()
    }
}

impl Paddler {
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() { DEFAULT_NAME } else { &self.name }
    }
}

impl ScenePayload {
    pub fn title(&self) -> &str {
        if self.title.is_empty() { DEFAULT_TITLE } else { &self.title }
    }

    /// Boundary validation: every identifier non-empty and unique within the
    /// payload. Views may assume this has passed.
    pub fn validate(&self) -> Result<(), PayloadError> {
        fn take<'p>(
            seen: &mut BTreeSet<&'p str>,
            kind: &'static str,
            id: &'p str,
        ) -> Result<(), PayloadError> {
            if id.is_empty() {
                return Err(PayloadError::EmptyId { kind });
            }
            if !seen.insert(id) {
                return Err(PayloadError::DuplicateId { id: id.to_string() });
            }
            Ok(())
        }
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        match &self.game {
            GameData::CreatureBattle(b) => {
                for trainer in [&b.player, &b.opponent] {
                    take(&mut seen, "trainer", &trainer.id)?;
                    for c in &trainer.creatures {
                        take(&mut seen, "creature", &c.id)?;
                        for s in &c.skills {
                            take(&mut seen, "skill", &s.id)?;
                        }
                    }
                }
            }
            GameData::PaddleMatch(m) => {
                take(&mut seen, "paddler", &m.left.id)?;
                take(&mut seen, "paddler", &m.right.id)?;
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PayloadError {
    #[error("{kind} is missing an identifier")]
    EmptyId { kind: &'static str },
    #[error("duplicate identifier `{id}`")]
    DuplicateId { id: String },
}

// ---------------- Action catalogue -----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionSlug {
    Play,
    Settings,
    Help,
    Quit,
    Attack,
    Guard,
    Swap,
    Flee,
    Serve,
    Pause,
    Forfeit,
}

impl ActionSlug {
    /// Wire identifier, the value handed to the emit callback.
    pub fn key(self) -> &'static str {
        match self {
            ActionSlug::Play => "play",
            ActionSlug::Settings => "settings",
            ActionSlug::Help => "help",
            ActionSlug::Quit => "quit",
            ActionSlug::Attack => "attack",
            ActionSlug::Guard => "guard",
            ActionSlug::Swap => "swap",
            ActionSlug::Flee => "flee",
            ActionSlug::Serve => "serve",
            ActionSlug::Pause => "pause",
            ActionSlug::Forfeit => "forfeit",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActionSlug::Play => "Play",
            ActionSlug::Settings => "Settings",
            ActionSlug::Help => "Help",
            ActionSlug::Quit => "Quit",
            ActionSlug::Attack => "Attack",
            ActionSlug::Guard => "Guard",
            ActionSlug::Swap => "Swap",
            ActionSlug::Flee => "Flee",
            ActionSlug::Serve => "Serve",
            ActionSlug::Pause => "Pause",
            ActionSlug::Forfeit => "Forfeit",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ActionSlug::Play => "▶",
            ActionSlug::Settings => "⚙",
            ActionSlug::Help => "❔",
            ActionSlug::Quit => "✕",
            ActionSlug::Attack => "⚔",
            ActionSlug::Guard => "🛡",
            ActionSlug::Swap => "⇄",
            ActionSlug::Flee => "🏃",
            ActionSlug::Serve => "🏓",
            ActionSlug::Pause => "⏸",
            ActionSlug::Forfeit => "🏳",
        }
    }
}

/// Fixed per-scene catalogues; a scene renders the intersection of its
/// catalogue with the controller's available set, in catalogue order.
pub const MENU_ACTIONS: &[ActionSlug] = &[
    ActionSlug::Play,
    ActionSlug::Settings,
    ActionSlug::Help,
    ActionSlug::Quit,
];
pub const BATTLE_ACTIONS: &[ActionSlug] = &[
    ActionSlug::Attack,
    ActionSlug::Guard,
    ActionSlug::Swap,
    ActionSlug::Flee,
];
pub const MATCH_ACTIONS: &[ActionSlug] =
    &[ActionSlug::Serve, ActionSlug::Pause, ActionSlug::Forfeit];

// ---------------- Demo controller (reducer & actions) -----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scene {
    Menu,
    Battle,
    Match,
}

impl Scene {
    /// Prefix for element identifiers minted under this scene.
    pub fn hook_prefix(self) -> &'static str {
        match self {
            Scene::Menu => "menu",
            Scene::Battle => "battle",
            Scene::Match => "match",
        }
    }

    pub fn catalogue(self) -> &'static [ActionSlug] {
        match self {
            Scene::Menu => MENU_ACTIONS,
            Scene::Battle => BATTLE_ACTIONS,
            Scene::Match => MATCH_ACTIONS,
        }
    }
}

/// State owned by the demo controller: the payload plus both identifier sets,
/// regenerated after every reduction. Views never mutate any of it.
#[derive(Clone, Debug, PartialEq)]
pub struct ControllerState {
    pub scene: Scene,
    pub payload: Option<ScenePayload>,
    pub fault: Option<PayloadError>,
    pub available: Vec<String>,
    pub enabled: EnabledIds,
    pub show_settings: bool,
    pub show_help: bool,
    pub result: Option<String>,
    pub match_paused: bool,
    /// Every slug emitted so far, oldest first.
    pub emitted: Vec<String>,
}

impl ControllerState {
    pub fn boot() -> Self {
        Self {
            scene: Scene::Menu,
            payload: None,
            fault: None,
            available: Vec::new(),
            enabled: EnabledIds::all(),
            show_settings: false,
            show_help: false,
            result: None,
            match_paused: false,
            emitted: Vec::new(),
        }
    }

    /// Regenerate the available-action and enabled-identifier sets from the
    /// current scene and payload.
    fn refresh(&mut self) {
        if self.payload.is_none() {
            self.available = Vec::new();
            self.enabled = EnabledIds::all();
            return;
        }
        self.available = self
            .scene
            .catalogue()
            .iter()
            .map(|a| a.key().to_string())
            .collect();
        let prefix = self.scene.hook_prefix();
        self.enabled = match self.scene {
            Scene::Menu => EnabledIds::all(),
            Scene::Battle => {
                let mut ids: BTreeSet<String> = BATTLE_ACTIONS
                    .iter()
                    .map(|a| element_id(prefix, a.key()))
                    .collect();
                if let Some(ScenePayload {
                    game: GameData::CreatureBattle(b),
                    ..
                }) = &self.payload
                {
                    // Swapping needs a benched creature.
                    if b.player.creatures.len() < 2 {
                        ids.remove(&element_id(prefix, ActionSlug::Swap.key()));
                    }
                    if let Some(lead) = b.player.lead() {
                        for s in &lead.skills {
                            ids.insert(element_id(prefix, &format!("skill:{}", s.id)));
                        }
                    }
                }
                EnabledIds::only(ids)
            }
            Scene::Match => {
                let mut ids: BTreeSet<String> = MATCH_ACTIONS
                    .iter()
                    .map(|a| element_id(prefix, a.key()))
                    .collect();
                if self.match_paused {
                    ids.remove(&element_id(prefix, ActionSlug::Serve.key()));
                }
                EnabledIds::only(ids)
            }
        };
    }
}

#[derive(Clone, Debug)]
pub enum ControllerAction {
    /// Payload arrived from outside; validated here, at the boundary.
    Loaded(ScenePayload),
    /// A view reported user activation of the given slug.
    Emit(String),
    CloseOverlays,
    DismissResult,
}

impl Reducible for ControllerState {
    type Action = ControllerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            ControllerAction::Loaded(payload) => match payload.validate() {
                Ok(()) => {
                    new.payload = Some(payload);
                    new.fault = None;
                    new.scene = Scene::Menu;
                }
                Err(e) => {
                    new.payload = None;
                    new.fault = Some(e);
                }
            },
            ControllerAction::Emit(slug) => {
                new.emitted.push(slug.clone());
                match (new.scene, slug.as_str()) {
                    (Scene::Menu, "play") => {
                        new.scene = match new.payload.as_ref().map(|p| &p.game) {
                            Some(GameData::PaddleMatch(_)) => Scene::Match,
                            _ => Scene::Battle,
                        };
                        new.result = None;
                        new.match_paused = false;
                    }
                    (Scene::Menu, "settings") => new.show_settings = true,
                    (Scene::Menu, "help") => new.show_help = true,
                    (Scene::Menu, "quit") => {
                        new.result = None;
                        new.emitted = Vec::new();
                    }
                    (Scene::Battle, "swap") => {
                        if let Some(ScenePayload {
                            game: GameData::CreatureBattle(b),
                            ..
                        }) = new.payload.as_mut()
                        {
                            if b.player.creatures.len() >= 2 {
                                b.player.creatures.rotate_left(1);
                            }
                        }
                    }
                    (Scene::Battle, "flee") => {
                        new.scene = Scene::Menu;
                        new.result = Some("You fled the battle.".to_string());
                    }
                    (Scene::Match, "pause") => new.match_paused = !new.match_paused,
                    (Scene::Match, "forfeit") => {
                        new.scene = Scene::Menu;
                        new.result = Some("Match forfeited.".to_string());
                        new.match_paused = false;
                    }
                    // Everything else (attack, guard, skill:*, serve, or a
                    // slug outside the catalogue) is log-only.
                    _ => {}
                }
            }
            ControllerAction::CloseOverlays => {
                new.show_settings = false;
                new.show_help = false;
            }
            ControllerAction::DismissResult => new.result = None,
        }
        new.refresh();
        Rc::new(new)
    }
}

// ---------------- View settings -----------------

/// Cosmetic view preferences, persisted to local storage. Not game state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewSettings {
    pub show_hints: bool,
    pub show_event_log: bool,
    pub reduced_motion: bool,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            show_hints: true,
            show_event_log: false,
            reduced_motion: false,
        }
    }
}

pub const SETTINGS_KEY: &str = "as_view_settings";

// ---------------- Sample payloads -----------------

fn stats(pairs: &[(&str, i64)]) -> BTreeMap<String, i64> {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

pub fn sample_battle_payload() -> ScenePayload {
    let singe = Skill {
        id: "skill-singe".to_string(),
        name: "Singe".to_string(),
        description: "A lick of flame; may leave a burn.".to_string(),
        stats: stats(&[("power", 40), ("accuracy", 95)]),
        meta: [("element".to_string(), serde_json::json!("fire"))]
            .into_iter()
            .collect(),
    };
    let tail_lash = Skill {
        id: "skill-tail-lash".to_string(),
        name: "Tail Lash".to_string(),
        description: "Sweeps the opponent's legs.".to_string(),
        stats: stats(&[("power", 25), ("accuracy", 100)]),
        meta: BTreeMap::new(),
    };
    let shell_bash = Skill {
        id: "skill-shell-bash".to_string(),
        name: "Shell Bash".to_string(),
        description: "Leads with the shell rim.".to_string(),
        stats: stats(&[("power", 35), ("accuracy", 90)]),
        meta: BTreeMap::new(),
    };
    ScenePayload {
        title: "Creature Arena".to_string(),
        game: GameData::CreatureBattle(BattleData {
            player: Trainer {
                id: "player".to_string(),
                name: "Ada".to_string(),
                creatures: vec![
                    Creature {
                        id: "ember-fox".to_string(),
                        name: "Ember Fox".to_string(),
                        description: "Quick, smoulders when excited.".to_string(),
                        stats: stats(&[("hp", 34), ("attack", 12), ("speed", 15)]),
                        skills: vec![singe, tail_lash],
                    },
                    Creature {
                        id: "moss-turtle".to_string(),
                        name: "Moss Turtle".to_string(),
                        description: "Slow. Extremely patient.".to_string(),
                        stats: stats(&[("hp", 48), ("attack", 8), ("speed", 4)]),
                        skills: vec![shell_bash],
                    },
                ],
            },
            opponent: Trainer {
                id: "rival".to_string(),
                name: "Riva".to_string(),
                creatures: vec![Creature {
                    id: "gale-wren".to_string(),
                    name: "Gale Wren".to_string(),
                    description: "Never lands.".to_string(),
                    stats: stats(&[("hp", 30), ("attack", 14), ("speed", 18)]),
                    skills: Vec::new(),
                }],
            },
        }),
    }
}

pub fn sample_match_payload() -> ScenePayload {
    ScenePayload {
        title: "Paddle Duel".to_string(),
        game: GameData::PaddleMatch(MatchData {
            left: Paddler {
                id: "left-paddle".to_string(),
                name: "Ada".to_string(),
                score: 0,
            },
            right: Paddler {
                id: "right-paddle".to_string(),
                name: "Wall-Bot".to_string(),
                score: 0,
            },
            target_score: 11,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: ControllerState, action: ControllerAction) -> ControllerState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn loaded_battle() -> ControllerState {
        reduce(
            ControllerState::boot(),
            ControllerAction::Loaded(sample_battle_payload()),
        )
    }

    #[test]
    fn title_falls_back_when_empty() {
        let mut p = sample_battle_payload();
        p.title = String::new();
        assert_eq!(p.title(), DEFAULT_TITLE);
        p.title = "Creature Arena".to_string();
        assert_eq!(p.title(), "Creature Arena");
    }

    #[test]
    fn display_name_falls_back_when_empty() {
        let c = Creature {
            id: "x".to_string(),
            name: String::new(),
            description: String::new(),
            stats: BTreeMap::new(),
            skills: Vec::new(),
        };
        assert_eq!(c.display_name(), DEFAULT_NAME);
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let mut p = sample_battle_payload();
        if let GameData::CreatureBattle(b) = &mut p.game {
            b.opponent.creatures[0].id = "ember-fox".to_string();
        }
        assert_eq!(
            p.validate(),
            Err(PayloadError::DuplicateId {
                id: "ember-fox".to_string()
            })
        );
    }

    #[test]
    fn validate_rejects_empty_ids() {
        let mut p = sample_battle_payload();
        if let GameData::CreatureBattle(b) = &mut p.game {
            b.player.creatures[0].skills[0].id = String::new();
        }
        assert_eq!(p.validate(), Err(PayloadError::EmptyId { kind: "skill" }));
    }

    #[test]
    fn sample_payloads_validate() {
        assert_eq!(sample_battle_payload().validate(), Ok(()));
        assert_eq!(sample_match_payload().validate(), Ok(()));
    }

    #[test]
    fn invalid_payload_faults_at_the_boundary() {
        let mut p = sample_battle_payload();
        if let GameData::CreatureBattle(b) = &mut p.game {
            b.player.id = String::new();
        }
        let state = reduce(ControllerState::boot(), ControllerAction::Loaded(p));
        assert!(state.payload.is_none());
        assert_eq!(state.fault, Some(PayloadError::EmptyId { kind: "trainer" }));
        assert!(state.available.is_empty());
    }

    #[test]
    fn emit_appends_exactly_one_entry() {
        let state = loaded_battle();
        let state = reduce(state, ControllerAction::Emit("play".to_string()));
        assert_eq!(state.emitted, vec!["play".to_string()]);
        let state = reduce(state, ControllerAction::Emit("attack".to_string()));
        assert_eq!(state.emitted, vec!["play".to_string(), "attack".to_string()]);
    }

    #[test]
    fn play_enters_the_scene_matching_the_payload() {
        let state = reduce(loaded_battle(), ControllerAction::Emit("play".to_string()));
        assert_eq!(state.scene, Scene::Battle);
        assert_eq!(state.available, vec!["attack", "guard", "swap", "flee"]);

        let state = reduce(
            ControllerState::boot(),
            ControllerAction::Loaded(sample_match_payload()),
        );
        let state = reduce(state, ControllerAction::Emit("play".to_string()));
        assert_eq!(state.scene, Scene::Match);
        assert_eq!(state.available, vec!["serve", "pause", "forfeit"]);
    }

    #[test]
    fn unknown_slug_is_log_only() {
        let before = loaded_battle();
        let after = reduce(before.clone(), ControllerAction::Emit("cheat".to_string()));
        assert_eq!(after.scene, before.scene);
        assert_eq!(after.available, before.available);
        assert_eq!(after.emitted, vec!["cheat".to_string()]);
    }

    #[test]
    fn swap_needs_a_benched_creature() {
        let state = reduce(loaded_battle(), ControllerAction::Emit("play".to_string()));
        assert!(state.enabled.allows(&element_id("battle", "swap")));

        let mut solo = sample_battle_payload();
        if let GameData::CreatureBattle(b) = &mut solo.game {
            b.player.creatures.truncate(1);
        }
        let state = reduce(ControllerState::boot(), ControllerAction::Loaded(solo));
        let state = reduce(state, ControllerAction::Emit("play".to_string()));
        assert!(!state.enabled.allows(&element_id("battle", "swap")));
        // Still visible: swap stays in the available set either way.
        assert!(state.available.iter().any(|s| s == "swap"));
    }

    #[test]
    fn swap_rotates_the_roster() {
        let state = reduce(loaded_battle(), ControllerAction::Emit("play".to_string()));
        let state = reduce(state, ControllerAction::Emit("swap".to_string()));
        let Some(ScenePayload {
            game: GameData::CreatureBattle(b),
            ..
        }) = &state.payload
        else {
            panic!("battle payload expected");
        };
        assert_eq!(b.player.lead().map(|c| c.id.as_str()), Some("moss-turtle"));
        // Enabled skill ids follow the new lead.
        assert!(
            state
                .enabled
                .allows(&element_id("battle", "skill:skill-shell-bash"))
        );
        assert!(
            !state
                .enabled
                .allows(&element_id("battle", "skill:skill-singe"))
        );
    }

    #[test]
    fn pause_disables_serve_but_keeps_it_visible() {
        let state = reduce(
            ControllerState::boot(),
            ControllerAction::Loaded(sample_match_payload()),
        );
        let state = reduce(state, ControllerAction::Emit("play".to_string()));
        assert!(state.enabled.allows(&element_id("match", "serve")));
        let state = reduce(state, ControllerAction::Emit("pause".to_string()));
        assert!(state.match_paused);
        assert!(!state.enabled.allows(&element_id("match", "serve")));
        assert!(state.available.iter().any(|s| s == "serve"));
        let state = reduce(state, ControllerAction::Emit("pause".to_string()));
        assert!(state.enabled.allows(&element_id("match", "serve")));
    }

    #[test]
    fn flee_returns_to_menu_with_a_result() {
        let state = reduce(loaded_battle(), ControllerAction::Emit("play".to_string()));
        let state = reduce(state, ControllerAction::Emit("flee".to_string()));
        assert_eq!(state.scene, Scene::Menu);
        assert_eq!(state.result.as_deref(), Some("You fled the battle."));
        let state = reduce(state, ControllerAction::DismissResult);
        assert_eq!(state.result, None);
    }

    #[test]
    fn payload_round_trips_through_json() {
        let p = sample_battle_payload();
        let raw = serde_json::to_string(&p).expect("serialize");
        let back: ScenePayload = serde_json::from_str(&raw).expect("deserialize");
        assert_eq!(back, p);
    }
}
