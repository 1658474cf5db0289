//! Contract between entity records and the generic store.

use chrono::{DateTime, Utc};
use std::fmt::{Display, Formatter};

/// The four collections served by the data layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Trip,
    Itinerary,
    Activity,
    Place,
}

/// Where `create` places a new record in its collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    Front,
    Back,
}

impl EntityKind {
    /// Lowercase name used in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trip => "trip",
            Self::Itinerary => "itinerary",
            Self::Activity => "activity",
            Self::Place => "place",
        }
    }

    /// Trips are listed newest first; everything else keeps append order.
    pub fn insert_position(self) -> InsertPosition {
        match self {
            Self::Trip => InsertPosition::Front,
            Self::Itinerary | Self::Activity | Self::Place => InsertPosition::Back,
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Trip => "Trip",
            Self::Itinerary => "Itinerary",
            Self::Activity => "Activity",
            Self::Place => "Place",
        };
        f.write_str(label)
    }
}

/// A record type that can live in an [`EntityStore`](crate::store::EntityStore).
///
/// `Clone` is the copy mechanism behind read/write isolation: the store
/// hands out clones and keeps its own values private.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Create input: every field except the store-assigned ones.
    type Draft: Send;
    /// Update input: `Some` fields overwrite, `None` fields are preserved.
    type Patch: Send;

    const KIND: EntityKind;

    fn id(&self) -> &str;

    /// Builds the stored record from a draft and the assigned identity.
    fn from_draft(id: String, draft: Self::Draft, created_at: DateTime<Utc>) -> Self;

    /// Shallow merge of `patch` over `self`.
    fn apply_patch(&mut self, patch: Self::Patch);
}

pub(crate) fn merge_field<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}
