//! Trip use-case service.
//!
//! # Responsibility
//! - Provide CRUD entry points for trips.
//! - Serve the trip list view (fetch, then filter and sort).
//!
//! # Invariants
//! - New trips appear first in `get_all`.
//! - Deleting a trip never touches its itineraries.

use crate::clock::{Clock, SystemClock};
use crate::model::trip::{Trip, TripDraft, TripPatch};
use crate::query::trip_query::TripQuery;
use crate::store::{EntityStore, StoreResult};

/// Use-case service for trips.
pub struct TripService<C: Clock = SystemClock> {
    store: EntityStore<Trip, C>,
}

impl<C: Clock> TripService<C> {
    pub fn new(store: EntityStore<Trip, C>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &EntityStore<Trip, C> {
        &self.store
    }

    /// All trips, newest insertions first.
    pub async fn get_all(&self) -> Vec<Trip> {
        self.store.get_all().await
    }

    pub async fn get_by_id(&self, id: &str) -> Option<Trip> {
        self.store.get_by_id(id).await
    }

    /// Stores the draft as-is and stamps `id` and `created_at`.
    ///
    /// Required-field checks belong to the caller (`TripDraft::validate`).
    pub async fn create(&self, draft: TripDraft) -> Trip {
        self.store.create(draft).await
    }

    pub async fn update(&self, id: &str, patch: TripPatch) -> StoreResult<Trip> {
        self.store.update(id, patch).await
    }

    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        self.store.delete(id).await
    }

    /// Fetches every trip and runs it through `query`.
    pub async fn list(&self, query: &TripQuery) -> Vec<Trip> {
        let trips = self.store.get_all().await;
        query.apply(&trips)
    }
}
