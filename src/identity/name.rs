//! Name splitting and user-id derivation
//!
//! The rules here are deliberately mechanical so that resolution is
//! deterministic across runs: the same display name always derives the same
//! first/last split and the same user id.

/// A display name split into its first/last components
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitName {
    pub first: String,
    pub last: String,
}

/// Splits a display name into first and last components
///
/// The trimmed name is split on whitespace: the first token becomes the
/// first name, the remaining tokens joined by single spaces become the last
/// name. A single-token name yields an empty last name, and an empty or
/// whitespace-only input yields empty components (the configuration layer
/// rejects empty names before they reach this point).
pub fn split_full_name(full_name: &str) -> SplitName {
    let mut tokens = full_name.split_whitespace();
    let first = tokens.next().unwrap_or_default().to_string();
    let last = tokens.collect::<Vec<_>>().join(" ");
    SplitName { first, last }
}

/// Derives the stable user id from a split name
///
/// Format: `lowercase(first) + "_" + lowercase(last)`, with internal spaces
/// in the last name replaced by underscores. A single-token name therefore
/// produces a trailing underscore ("Plato" -> "plato_"); that shape is part
/// of the persisted id format and is preserved as-is.
pub fn derive_user_id(name: &SplitName) -> String {
    format!(
        "{}_{}",
        name.first.to_lowercase(),
        name.last.to_lowercase().replace(' ', "_")
    )
}
