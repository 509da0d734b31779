use pointr_types::EntityKind;

/// Errors from store operations.
///
/// Only creates can fail. Lookups and deletes report a miss through their
/// return value instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The parent identifier field was empty.
    #[error("{field} is required")]
    MissingParent { field: &'static str },

    /// The parent identifier did not resolve to a stored entity.
    #[error("{kind} not found")]
    ParentNotFound { kind: EntityKind, id: String },
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let missing = StoreError::MissingParent { field: "site_id" };
        assert_eq!(missing.to_string(), "site_id is required");

        let not_found = StoreError::ParentNotFound {
            kind: EntityKind::Building,
            id: "bldg-x".into(),
        };
        assert_eq!(not_found.to_string(), "building not found");
    }
}
