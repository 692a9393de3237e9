//! Get-or-create identity resolution
//!
//! Resolution is a linear scan of the identity table followed by at most one
//! append. The read happens-before the append within a call, but the pair is
//! not atomic: the store assumes a single exclusive writer per run, so two
//! processes resolving the same name concurrently could both append. That
//! single-writer assumption is a hard precondition of the design.

use crate::identity::name::{derive_user_id, split_full_name};
use crate::store::{RecordStore, StorageError, StorageResult};

/// Name of the identity table in the record store
pub const IDENTITY_TABLE: &str = "identities";

/// Header row of the identity table
pub const IDENTITY_HEADER: &[&str] = &["user_id", "first_name", "last_name", "full_name"];

/// A deduplicated user record keyed by normalized full name
///
/// Identities are immutable once persisted: created on the first resolution
/// of an unseen name, then only ever read back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Derived slug, e.g. "ada_lovelace"
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    /// The original display name exactly as the caller supplied it
    pub full_name: String,
}

/// Resolves a display name to an existing or newly created identity
///
/// Matching is case-insensitive on the trimmed full name, so "ada lovelace"
/// and " Ada Lovelace " resolve to the same row. On a match the stored
/// identity is returned unchanged and nothing is written; otherwise one row
/// is appended and the new identity returned.
///
/// # Errors
///
/// Only storage failures are errors. An unmatched name is the normal
/// creation path, not an error.
pub fn resolve<S: RecordStore>(store: &mut S, full_name: &str) -> StorageResult<Identity> {
    store.ensure_initialized(IDENTITY_TABLE, IDENTITY_HEADER)?;

    let normalized = full_name.trim().to_lowercase();
    for row in store.read_all(IDENTITY_TABLE)? {
        if row.len() != IDENTITY_HEADER.len() {
            return Err(StorageError::MalformedRow {
                table: IDENTITY_TABLE.to_string(),
                expected: IDENTITY_HEADER.len(),
                actual: row.len(),
            });
        }
        if row[3].trim().to_lowercase() == normalized {
            tracing::debug!("Resolved '{}' to existing identity {}", full_name, row[0]);
            let mut row = row.into_iter();
            return Ok(Identity {
                user_id: row.next().unwrap_or_default(),
                first_name: row.next().unwrap_or_default(),
                last_name: row.next().unwrap_or_default(),
                full_name: row.next().unwrap_or_default(),
            });
        }
    }

    let split = split_full_name(full_name);
    let user_id = derive_user_id(&split);
    store.append(
        IDENTITY_TABLE,
        &[
            user_id.as_str(),
            split.first.as_str(),
            split.last.as_str(),
            full_name,
        ],
    )?;
    tracing::info!("Created identity {} for '{}'", user_id, full_name);

    Ok(Identity {
        user_id,
        first_name: split.first,
        last_name: split.last,
        full_name: full_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::CsvStore;
    use tempfile::TempDir;

    fn test_store(dir: &TempDir) -> CsvStore {
        let mut store = CsvStore::new();
        store.register(IDENTITY_TABLE, dir.path().join("users.csv"));
        store
    }

    #[test]
    fn test_creates_identity_on_first_resolution() {
        let dir = TempDir::new().unwrap();
        let mut store = test_store(&dir);

        let identity = resolve(&mut store, "Ada Lovelace").unwrap();

        assert_eq!(identity.user_id, "ada_lovelace");
        assert_eq!(identity.first_name, "Ada");
        assert_eq!(identity.last_name, "Lovelace");
        assert_eq!(identity.full_name, "Ada Lovelace");
        assert_eq!(store.read_all(IDENTITY_TABLE).unwrap().len(), 1);
    }

    #[test]
    fn test_repeated_resolution_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let mut store = test_store(&dir);

        let first = resolve(&mut store, "Ada Lovelace").unwrap();
        let second = resolve(&mut store, "Ada Lovelace").unwrap();

        assert_eq!(first, second);
        assert_eq!(store.read_all(IDENTITY_TABLE).unwrap().len(), 1);
    }

    #[test]
    fn test_matching_ignores_case_and_whitespace() {
        let dir = TempDir::new().unwrap();
        let mut store = test_store(&dir);

        let first = resolve(&mut store, "Ada Lovelace").unwrap();
        let second = resolve(&mut store, "  ada LOVELACE ").unwrap();

        // The stored identity comes back unchanged, original casing included
        assert_eq!(second.user_id, first.user_id);
        assert_eq!(second.full_name, "Ada Lovelace");
        assert_eq!(store.read_all(IDENTITY_TABLE).unwrap().len(), 1);
    }

    #[test]
    fn test_distinct_names_get_distinct_rows() {
        let dir = TempDir::new().unwrap();
        let mut store = test_store(&dir);

        resolve(&mut store, "Ada Lovelace").unwrap();
        resolve(&mut store, "Alan Turing").unwrap();

        let rows = store.read_all(IDENTITY_TABLE).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], "ada_lovelace");
        assert_eq!(rows[1][0], "alan_turing");
    }

    #[test]
    fn test_single_token_name_trailing_underscore() {
        let dir = TempDir::new().unwrap();
        let mut store = test_store(&dir);

        let identity = resolve(&mut store, "Plato").unwrap();

        assert_eq!(identity.user_id, "plato_");
        assert_eq!(identity.first_name, "Plato");
        assert_eq!(identity.last_name, "");
    }

    #[test]
    fn test_full_name_persisted_unnormalized() {
        let dir = TempDir::new().unwrap();
        let mut store = test_store(&dir);

        resolve(&mut store, "ADA LOVELACE").unwrap();

        let rows = store.read_all(IDENTITY_TABLE).unwrap();
        assert_eq!(rows[0][3], "ADA LOVELACE");
    }
}
