//! Identity resolution module
//!
//! This module turns a caller-supplied display name into a stable,
//! deduplicated identity record:
//! - Deterministic name splitting and user-id derivation
//! - Get-or-create resolution against the identity table

mod name;
mod resolver;

pub use name::{derive_user_id, split_full_name, SplitName};
pub use resolver::{resolve, Identity, IDENTITY_HEADER, IDENTITY_TABLE};
