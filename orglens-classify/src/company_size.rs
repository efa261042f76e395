//! Company-size heuristic.

use orglens_common::{Entity, EntityKind};

use crate::keywords::{SIZE_MARKERS, SIZE_PHRASES};

/// Guess a company-size label.
///
/// Strict precedence: whole-text phrases first (Small → Medium → Large,
/// first matching class wins), then organization entities in recognition
/// order with the markers "small"/"medium"/"large" checked in that order
/// inside each entity.
pub fn classify(text: &str, entities: &[Entity]) -> Option<&'static str> {
    let text = text.to_lowercase();
    for &(label, phrases) in SIZE_PHRASES {
        if phrases.iter().any(|p| text.contains(p)) {
            return Some(label);
        }
    }

    for entity in entities {
        if entity.kind != EntityKind::Organization {
            continue;
        }
        let entity_text = entity.text.to_lowercase();
        for &(label, marker) in SIZE_MARKERS {
            if entity_text.contains(marker) {
                return Some(label);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn org(text: &str) -> Entity {
        Entity::new(text, EntityKind::Organization)
    }

    #[test]
    fn startup_means_small() {
        assert_eq!(classify("we are a fast-growing startup", &[]), Some("Small"));
    }

    #[test]
    fn small_class_outranks_large_when_both_phrases_appear() {
        // "startup" and "large company" both present; the Small class is
        // checked first, so Small wins.
        assert_eq!(
            classify("a startup that sells to every large company", &[]),
            Some("Small")
        );
    }

    #[test]
    fn enterprise_means_large() {
        assert_eq!(classify("trusted enterprise solutions", &[]), Some("Large"));
    }

    #[test]
    fn mid_size_means_medium() {
        assert_eq!(classify("a mid-size firm", &[]), Some("Medium"));
    }

    #[test]
    fn entity_markers_apply_when_no_phrase_matches() {
        let entities = vec![org("medium widgets llc")];
        assert_eq!(classify("nothing about size here", &entities), Some("Medium"));
    }

    #[test]
    fn first_entity_with_any_marker_wins() {
        let entities = vec![org("large holdings"), org("small ventures")];
        assert_eq!(classify("", &entities), Some("Large"));
    }

    #[test]
    fn phrase_match_outranks_entity_markers() {
        let entities = vec![org("large holdings")];
        assert_eq!(classify("proudly a small company", &entities), Some("Small"));
    }

    #[test]
    fn non_org_entities_never_match() {
        let entities = vec![Entity::new("smallville", EntityKind::GeoPolitical)];
        assert_eq!(classify("no sizes mentioned", &entities), None);
    }

    #[test]
    fn absent_when_nothing_matches() {
        assert_eq!(classify("a company of some size", &[]), None);
    }
}
