//! Category grouping of a flat blueprint catalog.

use std::collections::HashMap;

use tracing::{debug, instrument};

use bpdocs_shared::BlueprintRecord;

/// Blueprints sharing the same identifier prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    /// Identifier prefix before the first `.`.
    pub name: String,
    /// Members, sorted by identifier.
    pub blueprints: Vec<BlueprintRecord>,
}

/// Group blueprints by category.
///
/// Identifiers are sorted first (stably, so duplicates keep provider order).
/// Categories then appear in the order their first identifier is met during
/// that sorted scan, which is not always alphabetical category order:
/// `a-b.x` sorts before `a.y`, so `a-b` precedes `a`.
#[instrument(skip_all, fields(blueprints = blueprints.len()))]
pub fn group_by_category(mut blueprints: Vec<BlueprintRecord>) -> Vec<CategoryGroup> {
    blueprints.sort_by(|a, b| a.id.cmp(&b.id));

    let mut groups: Vec<CategoryGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for bp in blueprints {
        let name = bp.category().to_string();
        match index.get(&name) {
            Some(&i) => groups[i].blueprints.push(bp),
            None => {
                index.insert(name.clone(), groups.len());
                groups.push(CategoryGroup {
                    name,
                    blueprints: vec![bp],
                });
            }
        }
    }

    debug!(categories = groups.len(), "catalog grouped");
    groups
}
