// Pure control-row assembly shared by every scene.
//
// A scene never decides visibility itself: it intersects its fixed catalogue
// with the controller's available set (catalogue order wins) and consults the
// enabled gate per element. Unknown slugs in the available set are skipped.

use crate::automation::element_id;
use crate::model::{ActionSlug, Skill};
use crate::state::EnabledIds;

/// Everything a scene needs to render one interactive control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlSpec {
    /// Automation identifier, attached to the DOM and matched against the
    /// enabled gate.
    pub element_id: String,
    /// Value handed to the emit callback on activation.
    pub slug: String,
    pub label: String,
    pub icon: String,
    pub enabled: bool,
}

pub fn control_row(
    scene: &str,
    catalogue: &[ActionSlug],
    available: &[String],
    gate: &EnabledIds,
) -> Vec<ControlSpec> {
    catalogue
        .iter()
        .filter(|action| available.iter().any(|slug| slug == action.key()))
        .map(|action| {
            let id = element_id(scene, action.key());
            ControlSpec {
                enabled: gate.allows(&id),
                element_id: id,
                slug: action.key().to_string(),
                label: action.label().to_string(),
                icon: action.icon().to_string(),
            }
        })
        .collect()
}

/// Skill buttons are payload-driven rather than catalogue-driven: one control
/// per skill of the lead creature, emitting `skill:<id>`.
pub fn skill_row(scene: &str, skills: &[Skill], gate: &EnabledIds) -> Vec<ControlSpec> {
    skills
        .iter()
        .map(|skill| {
            let slug = format!("skill:{}", skill.id);
            let id = element_id(scene, &slug);
            ControlSpec {
                enabled: gate.allows(&id),
                element_id: id,
                slug,
                label: skill.display_name().to_string(),
                icon: "✦".to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BATTLE_ACTIONS, MENU_ACTIONS};

    fn avail(slugs: &[&str]) -> Vec<String> {
        slugs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn renders_exactly_the_intersection_in_catalogue_order() {
        let row = control_row(
            "menu",
            MENU_ACTIONS,
            &avail(&["quit", "play"]),
            &EnabledIds::all(),
        );
        let slugs: Vec<&str> = row.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, vec!["play", "quit"]);
    }

    #[test]
    fn unknown_available_slugs_are_skipped() {
        let row = control_row(
            "menu",
            MENU_ACTIONS,
            &avail(&["play", "teleport"]),
            &EnabledIds::all(),
        );
        assert_eq!(row.len(), 1);
        assert_eq!(row[0].slug, "play");
    }

    #[test]
    fn duplicate_available_slugs_yield_one_control() {
        let row = control_row(
            "menu",
            MENU_ACTIONS,
            &avail(&["play", "play"]),
            &EnabledIds::all(),
        );
        assert_eq!(row.len(), 1);
    }

    #[test]
    fn empty_available_set_renders_nothing() {
        let row = control_row("menu", MENU_ACTIONS, &[], &EnabledIds::all());
        assert!(row.is_empty());
    }

    #[test]
    fn gate_disables_without_hiding() {
        let gate = EnabledIds::only(["battle:attack"]);
        let row = control_row(
            "battle",
            BATTLE_ACTIONS,
            &avail(&["attack", "guard"]),
            &gate,
        );
        assert_eq!(row.len(), 2);
        assert!(row[0].enabled);
        assert!(!row[1].enabled);
    }

    #[test]
    fn element_ids_are_scene_scoped() {
        let row = control_row("menu", MENU_ACTIONS, &avail(&["play"]), &EnabledIds::all());
        assert_eq!(row[0].element_id, "menu:play");
    }

    #[test]
    fn same_inputs_build_the_same_row() {
        let available = avail(&["attack", "swap"]);
        let gate = EnabledIds::only(["battle:attack"]);
        let first = control_row("battle", BATTLE_ACTIONS, &available, &gate);
        let second = control_row("battle", BATTLE_ACTIONS, &available, &gate);
        assert_eq!(first, second);
    }

    #[test]
    fn skill_row_emits_namespaced_slugs() {
        use crate::model::{GameData, sample_battle_payload};
        let payload = sample_battle_payload();
        let GameData::CreatureBattle(b) = &payload.game else {
            panic!("battle payload expected");
        };
        let lead = b.player.lead().expect("sample roster is non-empty");
        let row = skill_row("battle", &lead.skills, &EnabledIds::all());
        assert_eq!(row.len(), 2);
        assert_eq!(row[0].slug, "skill:skill-singe");
        assert_eq!(row[0].element_id, "battle:skill:skill-singe");
        assert_eq!(row[0].label, "Singe");
    }
}
