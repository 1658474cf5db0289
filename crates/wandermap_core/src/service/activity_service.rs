//! Activity use-case service.
//!
//! # Invariants
//! - `get_by_itinerary_id` is an exact match on the weak reference.

use crate::clock::{Clock, SystemClock};
use crate::config::OperationKind;
use crate::model::activity::{Activity, ActivityDraft, ActivityPatch};
use crate::store::{EntityStore, StoreResult};

/// Use-case service for activities.
pub struct ActivityService<C: Clock = SystemClock> {
    store: EntityStore<Activity, C>,
}

impl<C: Clock> ActivityService<C> {
    pub fn new(store: EntityStore<Activity, C>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &EntityStore<Activity, C> {
        &self.store
    }

    pub async fn get_all(&self) -> Vec<Activity> {
        self.store.get_all().await
    }

    pub async fn get_by_id(&self, id: &str) -> Option<Activity> {
        self.store.get_by_id(id).await
    }

    pub async fn get_by_itinerary_id(&self, itinerary_id: &str) -> Vec<Activity> {
        self.store
            .find_where(OperationKind::Lookup, |activity| {
                activity.itinerary_id == itinerary_id
            })
            .await
    }

    pub async fn create(&self, draft: ActivityDraft) -> Activity {
        self.store.create(draft).await
    }

    pub async fn update(&self, id: &str, patch: ActivityPatch) -> StoreResult<Activity> {
        self.store.update(id, patch).await
    }

    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        self.store.delete(id).await
    }
}
