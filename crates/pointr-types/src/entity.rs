use std::fmt;

use serde::{Deserialize, Serialize};

/// The three kinds of entity held by the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Site,
    Building,
    Level,
}

impl EntityKind {
    /// Lowercase name used in messages and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Site => "site",
            Self::Building => "building",
            Self::Level => "level",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common surface of every stored entity.
pub trait Entity: Clone {
    /// Which kind of entity this is.
    const KIND: EntityKind;

    /// The identifier, empty until one is assigned.
    fn id(&self) -> &str;

    /// Mutable access to the identifier, used when assigning one.
    fn id_mut(&mut self) -> &mut String;
}

/// An entity that declares a parent by identifier.
pub trait ChildEntity: Entity {
    /// The kind of entity the parent identifier refers to.
    const PARENT_KIND: EntityKind;

    /// JSON field carrying the parent identifier.
    const PARENT_FIELD: &'static str;

    fn parent_id(&self) -> &str;
}

/// A campus or location. Root of the hierarchy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Site {
    /// A site with no identifier yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            location: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl Entity for Site {
    const KIND: EntityKind = EntityKind::Site;

    fn id(&self) -> &str {
        &self.id
    }

    fn id_mut(&mut self) -> &mut String {
        &mut self.id
    }
}

/// A building on a site.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub site_id: String,
    #[serde(default)]
    pub name: String,
}

impl Building {
    /// A building with no identifier yet.
    pub fn new(site_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            site_id: site_id.into(),
            name: name.into(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

impl Entity for Building {
    const KIND: EntityKind = EntityKind::Building;

    fn id(&self) -> &str {
        &self.id
    }

    fn id_mut(&mut self) -> &mut String {
        &mut self.id
    }
}

impl ChildEntity for Building {
    const PARENT_KIND: EntityKind = EntityKind::Site;
    const PARENT_FIELD: &'static str = "site_id";

    fn parent_id(&self) -> &str {
        &self.site_id
    }
}

/// A floor of a building.
///
/// `index` orders levels vertically: negative for basements, `0` for the
/// ground floor, positive above it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub building_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub index: i64,
}

impl Level {
    /// A level with no identifier yet.
    pub fn new(building_id: impl Into<String>, name: impl Into<String>, index: i64) -> Self {
        Self {
            id: String::new(),
            building_id: building_id.into(),
            name: name.into(),
            index,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

impl Entity for Level {
    const KIND: EntityKind = EntityKind::Level;

    fn id(&self) -> &str {
        &self.id
    }

    fn id_mut(&mut self) -> &mut String {
        &mut self.id
    }
}

impl ChildEntity for Level {
    const PARENT_KIND: EntityKind = EntityKind::Building;
    const PARENT_FIELD: &'static str = "building_id";

    fn parent_id(&self) -> &str {
        &self.building_id
    }
}

/// Number of entities of each kind, as reported by the API summary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StoreCounts {
    pub sites: usize,
    pub buildings: usize,
    pub levels: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_display() {
        assert_eq!(EntityKind::Site.to_string(), "site");
        assert_eq!(EntityKind::Building.to_string(), "building");
        assert_eq!(EntityKind::Level.to_string(), "level");
    }

    #[test]
    fn parent_metadata() {
        assert_eq!(Building::PARENT_KIND, EntityKind::Site);
        assert_eq!(Building::PARENT_FIELD, "site_id");
        assert_eq!(Level::PARENT_KIND, EntityKind::Building);
        assert_eq!(Level::PARENT_FIELD, "building_id");
    }

    #[test]
    fn missing_fields_decode_as_defaults() {
        let level: Level = serde_json::from_str(r#"{"name":"L2"}"#).unwrap();
        assert_eq!(level.id, "");
        assert_eq!(level.building_id, "");
        assert_eq!(level.index, 0);

        let site: Site = serde_json::from_str("{}").unwrap();
        assert_eq!(site, Site::default());
        assert!(site.location.is_none());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let level: Level = serde_json::from_str(r#"{"items":[],"index":-1}"#).unwrap();
        assert_eq!(level.index, -1);
        assert!(level.name.is_empty());
    }

    #[test]
    fn absent_location_is_omitted() {
        let json = serde_json::to_value(Site::new("Campus").with_id("s1")).unwrap();
        assert_eq!(json, serde_json::json!({"id": "s1", "name": "Campus"}));

        let json = serde_json::to_value(Site::new("Campus").with_id("s1").with_location("Berlin")).unwrap();
        assert_eq!(json["location"], "Berlin");
    }

    #[test]
    fn level_json_shape() {
        let level = Level::new("bldg-main-1", "L2", 2).with_id("lvl-2");
        let json = serde_json::to_value(&level).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "lvl-2", "building_id": "bldg-main-1", "name": "L2", "index": 2})
        );
    }

    #[test]
    fn index_wider_than_32_bits() {
        let level: Level =
            serde_json::from_str(r#"{"building_id":"b1","name":"Big","index":3000000000}"#).unwrap();
        assert_eq!(level.index, 3_000_000_000);
        assert!(level.index > i64::from(i32::MAX));

        let json = serde_json::to_value(&level).unwrap();
        assert_eq!(json["index"], 3_000_000_000i64);

        let deep: Level = serde_json::from_str(r#"{"index":-3000000000}"#).unwrap();
        assert_eq!(deep.index, -3_000_000_000);
    }

    #[test]
    fn wrong_index_type_is_rejected() {
        let result: Result<Level, _> = serde_json::from_str(r#"{"name":"L1","index":"one"}"#);
        assert!(result.is_err());
    }
}
