//! Industry heuristic.

use orglens_common::{Entity, EntityKind};

use crate::keywords::INDUSTRY_KEYWORDS;

/// Guess an industry label from organization entities, falling back to a
/// whole-text scan.
///
/// Stage 1 walks entities in recognition order; within one entity the
/// industries are checked in declared order, so the declared order breaks
/// ties and the first matching entity wins. Stage 2 scans the full
/// normalized text with no entity context; it is known to fire on
/// incidental prose (e.g. "training" anywhere triggers Education) and that
/// behavior is kept deliberately.
pub fn classify(text: &str, entities: &[Entity]) -> Option<&'static str> {
    for entity in entities {
        if entity.kind != EntityKind::Organization {
            continue;
        }
        let entity_text = entity.text.to_lowercase();
        for &(industry, triggers) in INDUSTRY_KEYWORDS {
            if triggers.iter().any(|t| entity_text.contains(t)) {
                return Some(industry);
            }
        }
    }

    let text = text.to_lowercase();
    for &(industry, triggers) in INDUSTRY_KEYWORDS {
        if triggers.iter().any(|t| text.contains(t)) {
            return Some(industry);
        }
    }

    None
}
