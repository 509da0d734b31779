use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use pointr_types::{
    generate_id, is_unassigned, Building, ChildEntity, Entity, Level, Site, StoreCounts,
};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::traits::EntityStore;

#[derive(Debug, Default)]
struct StoreState {
    sites: HashMap<String, Site>,
    buildings: HashMap<String, Building>,
    levels: HashMap<String, Level>,
}

/// In-memory, HashMap-based entity store.
///
/// All three entity maps sit behind a single `RwLock`. Mutations hold the
/// write lock for their whole duration and reads share the read lock, so a
/// reader never sees a half-applied batch. Entities are cloned on read and
/// write.
pub struct InMemoryStore {
    state: RwLock<StoreState>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState::default()),
        }
    }

    // State is only mutated after every check has passed, so a guard
    // recovered from a poisoned lock still holds consistent maps.
    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Check that `child` names a parent and that the parent is in `parents`.
fn check_parent<C: ChildEntity, P>(child: &C, parents: &HashMap<String, P>) -> StoreResult<()> {
    let parent_id = child.parent_id();
    if parent_id.is_empty() {
        return Err(StoreError::MissingParent {
            field: C::PARENT_FIELD,
        });
    }
    if !parents.contains_key(parent_id) {
        return Err(StoreError::ParentNotFound {
            kind: C::PARENT_KIND,
            id: parent_id.to_string(),
        });
    }
    Ok(())
}

/// Assign an identifier if needed and insert, replacing any entity stored
/// under the same identifier.
fn insert<E: Entity>(map: &mut HashMap<String, E>, mut entity: E) -> E {
    if is_unassigned(entity.id()) {
        *entity.id_mut() = generate_id();
    }
    let replaced = map.insert(entity.id().to_string(), entity.clone()).is_some();
    debug!(kind = %E::KIND, id = entity.id(), replaced, "entity stored");
    entity
}

fn remove<E: Entity>(map: &mut HashMap<String, E>, id: &str) -> bool {
    let removed = map.remove(id).is_some();
    if removed {
        debug!(kind = %E::KIND, id, "entity deleted");
    }
    removed
}

fn list_children<C: ChildEntity>(map: &HashMap<String, C>, parent_id: &str) -> Vec<C> {
    map.values()
        .filter(|child| parent_id.is_empty() || child.parent_id() == parent_id)
        .cloned()
        .collect()
}

impl EntityStore for InMemoryStore {
    fn create_site(&self, site: Site) -> Site {
        let mut state = self.write();
        insert(&mut state.sites, site)
    }

    fn get_site(&self, id: &str) -> Option<Site> {
        self.read().sites.get(id).cloned()
    }

    fn delete_site(&self, id: &str) -> bool {
        remove(&mut self.write().sites, id)
    }

    fn list_sites(&self) -> Vec<Site> {
        self.read().sites.values().cloned().collect()
    }

    fn create_building(&self, building: Building) -> StoreResult<Building> {
        let mut state = self.write();
        check_parent(&building, &state.sites)?;
        Ok(insert(&mut state.buildings, building))
    }

    fn get_building(&self, id: &str) -> Option<Building> {
        self.read().buildings.get(id).cloned()
    }

    fn delete_building(&self, id: &str) -> bool {
        remove(&mut self.write().buildings, id)
    }

    fn list_buildings(&self, site_id: &str) -> Vec<Building> {
        list_children(&self.read().buildings, site_id)
    }

    fn create_level(&self, level: Level) -> StoreResult<Level> {
        let mut state = self.write();
        check_parent(&level, &state.buildings)?;
        Ok(insert(&mut state.levels, level))
    }

    fn create_levels(&self, levels: Vec<Level>) -> StoreResult<Vec<Level>> {
        let mut state = self.write();
        for level in &levels {
            check_parent(level, &state.buildings)?;
        }
        let state = &mut *state;
        let created: Vec<Level> = levels
            .into_iter()
            .map(|level| insert(&mut state.levels, level))
            .collect();
        debug!(count = created.len(), "level batch stored");
        Ok(created)
    }

    fn get_level(&self, id: &str) -> Option<Level> {
        self.read().levels.get(id).cloned()
    }

    fn delete_level(&self, id: &str) -> bool {
        remove(&mut self.write().levels, id)
    }

    fn list_levels(&self, building_id: &str) -> Vec<Level> {
        list_children(&self.read().levels, building_id)
    }

    fn counts(&self) -> StoreCounts {
        let state = self.read();
        StoreCounts {
            sites: state.sites.len(),
            buildings: state.buildings.len(),
            levels: state.levels.len(),
        }
    }
}

impl std::fmt::Debug for InMemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts = self.counts();
        f.debug_struct("InMemoryStore")
            .field("sites", &counts.sites)
            .field("buildings", &counts.buildings)
            .field("levels", &counts.levels)
            .finish()
    }
}
