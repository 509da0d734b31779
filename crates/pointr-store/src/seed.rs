//! Demo fixtures loaded at startup.
//!
//! Fixtures go through the ordinary [`EntityStore`] create operations, so the
//! seeded state is exactly what a client could have built through the API.

use pointr_types::{Building, Level, Site};
use tracing::info;

use crate::error::StoreResult;
use crate::traits::EntityStore;

pub const SITE_HOSPITAL: &str = "site-hospital-1";
pub const BUILDING_MAIN: &str = "bldg-main-1";
pub const BUILDING_OUTPATIENT: &str = "bldg-outpatient-1";

/// Load the hospital campus fixtures: one site, two buildings, four levels.
pub fn load(store: &dyn EntityStore) -> StoreResult<()> {
    store.create_site(Site::new("General Hospital Campus").with_id(SITE_HOSPITAL));
    store.create_building(Building::new(SITE_HOSPITAL, "Main Hospital").with_id(BUILDING_MAIN))?;
    store.create_building(
        Building::new(SITE_HOSPITAL, "Outpatient Center").with_id(BUILDING_OUTPATIENT),
    )?;
    store.create_levels(vec![
        Level::new(BUILDING_MAIN, "Basement B1", -1).with_id("lvl-b1"),
        Level::new(BUILDING_MAIN, "Ground", 0).with_id("lvl-g"),
        Level::new(BUILDING_MAIN, "L1", 1).with_id("lvl-l1"),
        Level::new(BUILDING_OUTPATIENT, "Ground", 0).with_id("lvl-g2"),
    ])?;

    let counts = store.counts();
    info!(
        sites = counts.sites,
        buildings = counts.buildings,
        levels = counts.levels,
        "seed fixtures loaded"
    );
    Ok(())
}
