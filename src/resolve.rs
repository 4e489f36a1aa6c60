//! Dependency ordering for one asset group.
//!
//! Worklist passes over an immutable snapshot of the group: entries whose
//! dependency lists drain move to the output, unknown dependencies drop
//! silently, self-references and mutual references fail hard. A pass that
//! neither emits nor drops anything proves a longer cycle, which is also
//! surfaced as a hard error instead of spinning forever.

use indexmap::IndexMap;

use crate::container::AssetEntry;
use crate::AssetError;

/// Order a group's names so every asset appears after the dependencies it
/// declares on registered, non-self names.
///
/// Ties among entries with no remaining mutual dependency resolve in
/// registration order, so the output is deterministic for a given
/// registry snapshot.
pub fn arrange(assets: &IndexMap<String, AssetEntry>) -> Result<Vec<String>, AssetError> {
    let mut pending: IndexMap<String, Vec<String>> = assets
        .iter()
        .map(|(name, entry)| (name.clone(), entry.dependencies.clone()))
        .collect();
    let mut sorted: Vec<String> = Vec::with_capacity(pending.len());

    while !pending.is_empty() {
        let mut progressed = false;
        let names: Vec<String> = pending.keys().cloned().collect();

        for name in names {
            let deps = match pending.get(&name) {
                Some(deps) => deps.clone(),
                None => continue,
            };

            if deps.is_empty() {
                sorted.push(name.clone());
                pending.shift_remove(&name);
                progressed = true;
                continue;
            }

            let mut remaining = Vec::with_capacity(deps.len());
            for dep in deps {
                // Soft dependency: never registered in this group.
                if !assets.contains_key(&dep) {
                    continue;
                }
                if dep == name {
                    return Err(AssetError::SelfDependency { name });
                }
                // Direct mutual reference.
                if pending
                    .get(&dep)
                    .is_some_and(|dep_deps| dep_deps.contains(&name))
                {
                    return Err(AssetError::CircularDependency {
                        name,
                        dependency: dep,
                    });
                }
                // Already emitted: satisfied.
                if sorted.contains(&dep) {
                    continue;
                }
                remaining.push(dep);
            }

            if let Some(slot) = pending.get_mut(&name) {
                if remaining.len() != slot.len() {
                    progressed = true;
                }
                *slot = remaining;
            }
        }

        if !progressed {
            // Every remaining entry waits on another remaining entry:
            // a transitive cycle of length three or more.
            let (name, deps) = pending
                .first()
                .map(|(n, d)| (n.clone(), d.clone()))
                .unwrap_or_default();
            let dependency = deps.first().cloned().unwrap_or_default();
            return Err(AssetError::CircularDependency { name, dependency });
        }
    }

    Ok(sorted)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
