//! Location heuristic: first geopolitical entity in document order.

use orglens_common::{Entity, EntityKind};

/// Return the text of the first geopolitical entity, verbatim.
///
/// No disambiguation and no normalization to a canonical place name.
pub fn classify(entities: &[Entity]) -> Option<String> {
    entities
        .iter()
        .find(|e| e.kind == EntityKind::GeoPolitical)
        .map(|e| e.text.clone())
}
