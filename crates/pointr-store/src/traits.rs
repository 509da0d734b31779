use pointr_types::{Building, Level, Site, StoreCounts};

use crate::error::StoreResult;

/// Entity store for sites, buildings, and levels.
///
/// All implementations must satisfy these invariants:
/// - A building or level is only stored if its parent identifier is non-empty
///   and resolves to a stored parent at the moment of the call.
/// - `create_levels` is atomic: either every level is stored or none is, and
///   no reader observes a partially applied batch.
/// - Blank identifiers are replaced with freshly generated unique ones; the
///   returned entities carry the identifiers they were stored under.
/// - Deletes never touch children.
/// - List results have no ordering guarantee.
pub trait EntityStore: Send + Sync {
    // -- sites --

    /// Store a site. Cannot fail: sites have no parent.
    fn create_site(&self, site: Site) -> Site;

    fn get_site(&self, id: &str) -> Option<Site>;

    /// Remove a site. Returns `true` if it was present.
    fn delete_site(&self, id: &str) -> bool;

    fn list_sites(&self) -> Vec<Site>;

    // -- buildings --

    /// Store a building under an existing site.
    fn create_building(&self, building: Building) -> StoreResult<Building>;

    fn get_building(&self, id: &str) -> Option<Building>;

    /// Remove a building. Returns `true` if it was present.
    fn delete_building(&self, id: &str) -> bool;

    /// All buildings, or only those on `site_id` when it is non-empty.
    fn list_buildings(&self, site_id: &str) -> Vec<Building>;

    // -- levels --

    /// Store a single level under an existing building.
    fn create_level(&self, level: Level) -> StoreResult<Level>;

    /// Store a batch of levels, all or nothing.
    ///
    /// Every level is validated before any is inserted. The returned levels
    /// are in input order.
    fn create_levels(&self, levels: Vec<Level>) -> StoreResult<Vec<Level>>;

    fn get_level(&self, id: &str) -> Option<Level>;

    /// Remove a level. Returns `true` if it was present.
    fn delete_level(&self, id: &str) -> bool;

    /// All levels, or only those in `building_id` when it is non-empty.
    fn list_levels(&self, building_id: &str) -> Vec<Level>;

    // -- summary --

    /// Entity counts, taken from one consistent view of the store.
    fn counts(&self) -> StoreCounts;
}
