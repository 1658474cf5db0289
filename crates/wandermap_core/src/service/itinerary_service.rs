//! Itinerary use-case service.
//!
//! # Invariants
//! - `get_by_trip_id` is an exact match on the weak reference.

use crate::clock::{Clock, SystemClock};
use crate::config::OperationKind;
use crate::model::itinerary::{Itinerary, ItineraryDraft, ItineraryPatch};
use crate::store::{EntityStore, StoreResult};

/// Use-case service for itineraries.
pub struct ItineraryService<C: Clock = SystemClock> {
    store: EntityStore<Itinerary, C>,
}

impl<C: Clock> ItineraryService<C> {
    pub fn new(store: EntityStore<Itinerary, C>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &EntityStore<Itinerary, C> {
        &self.store
    }

    pub async fn get_all(&self) -> Vec<Itinerary> {
        self.store.get_all().await
    }

    pub async fn get_by_id(&self, id: &str) -> Option<Itinerary> {
        self.store.get_by_id(id).await
    }

    /// Itineraries whose `trip_id` equals `trip_id`.
    ///
    /// The trip itself is not looked up; orphans are returned like any other.
    pub async fn get_by_trip_id(&self, trip_id: &str) -> Vec<Itinerary> {
        self.store
            .find_where(OperationKind::Lookup, |itinerary| itinerary.trip_id == trip_id)
            .await
    }

    pub async fn create(&self, draft: ItineraryDraft) -> Itinerary {
        self.store.create(draft).await
    }

    pub async fn update(&self, id: &str, patch: ItineraryPatch) -> StoreResult<Itinerary> {
        self.store.update(id, patch).await
    }

    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        self.store.delete(id).await
    }
}
