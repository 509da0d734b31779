use uuid::Uuid;

/// Generate a fresh entity identifier.
///
/// Identifiers are random UUID v4 values (122 random bits) rendered in the
/// hyphenated lowercase form, e.g. `67e55044-10b1-426f-9247-bb680e5fe0c8`.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Returns `true` if `id` is blank and should be replaced by a generated one.
pub fn is_unassigned(id: &str) -> bool {
    id.is_empty()
}
