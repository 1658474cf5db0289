//! In-memory entity persistence.
//!
//! # Responsibility
//! - Own each entity collection and serialize its mutations.
//! - Simulate remote-API latency before every operation.
//! - Return semantic errors (`NotFound`) instead of inventing records.
//!
//! # Invariants
//! - Callers only ever see clones; the collection itself is never exposed.
//! - Failed operations leave the collection unchanged.

use crate::model::entity::EntityKind;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod entity_store;

pub use entity_store::EntityStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store operation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// `update`/`delete` targeted an id that is not in the collection.
    NotFound { kind: EntityKind, id: String },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { kind, id } => write!(f, "{kind} not found: {id}"),
        }
    }
}

impl Error for StoreError {}
