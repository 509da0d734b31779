//! In-memory entity store for the Pointr mock API.
//!
//! Holds sites, buildings, and levels and enforces the one rule that relates
//! them: a child can only be created under a parent that exists at that
//! moment.
//!
//! # Rules
//!
//! 1. Parent references are checked on create only. Reads, lists, and deletes
//!    never re-verify them.
//! 2. Deletes never cascade. Removing a site leaves its buildings in place
//!    with a dangling `site_id`.
//! 3. Batch level creation is all-or-nothing: every level is validated before
//!    any is inserted, under a single write lock.
//! 4. A create with a caller-supplied identifier that already exists replaces
//!    the stored entity. Blank identifiers are replaced by random UUIDs.
//! 5. Misses are not errors. `get_*` returns `Option`, `delete_*` returns
//!    `bool`.
//!
//! # Backends
//!
//! - [`InMemoryStore`] -- `HashMap`s behind one `RwLock`
//!
//! The [`seed`] module loads the fixed demo fixtures through the public
//! [`EntityStore`] operations.

pub mod error;
pub mod memory;
pub mod seed;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryStore;
pub use traits::EntityStore;
