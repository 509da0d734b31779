//! Domain types for the Pointr mock API.
//!
//! The mock models a three-level physical hierarchy:
//!
//! - [`Site`] -- a campus or location, the root of the hierarchy
//! - [`Building`] -- belongs to exactly one site via `site_id`
//! - [`Level`] -- belongs to exactly one building via `building_id`, ordered
//!   vertically by `index` (basements negative, ground floor `0`)
//!
//! Parent references are plain identifiers. They are only checked when a
//! child is created; nothing here keeps them valid afterwards.

pub mod entity;
pub mod id;

pub use entity::{Building, ChildEntity, Entity, EntityKind, Level, Site, StoreCounts};
pub use id::{generate_id, is_unassigned};
