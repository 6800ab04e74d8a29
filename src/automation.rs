//! Automation identifiers.
//!
//! Every interactive primitive attaches its opaque identifier to the DOM as a
//! `data-hook` attribute so an external driver can address it. Identifier
//! minting lives here, once, instead of being re-derived per component.

/// Build the element identifier for a control: `<scene>:<slug>`.
pub fn element_id(scene: &str, slug: &str) -> String {
    format!("{scene}:{slug}")
}

#[cfg(test)]
mod tests {
    use super::element_id;

    #[test]
    fn element_ids_join_scene_and_slug() {
        assert_eq!(element_id("menu", "play"), "menu:play");
        assert_eq!(
            element_id("battle", "skill:skill-singe"),
            "battle:skill:skill-singe"
        );
    }
}
