//! Place use-case service.
//!
//! # Responsibility
//! - Provide CRUD entry points for saved places.
//! - Filter places by exact category and by free text.
//!
//! # Invariants
//! - `get_by_category` is an exact, case-sensitive match.
//! - `search_by_name` matches `name` or `address`, ignoring case.

use crate::clock::{Clock, SystemClock};
use crate::config::OperationKind;
use crate::model::place::{Place, PlaceDraft, PlacePatch};
use crate::query::text_match::TextMatcher;
use crate::store::{EntityStore, StoreResult};

/// Use-case service for saved places.
pub struct PlaceService<C: Clock = SystemClock> {
    store: EntityStore<Place, C>,
}

impl<C: Clock> PlaceService<C> {
    pub fn new(store: EntityStore<Place, C>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &EntityStore<Place, C> {
        &self.store
    }

    pub async fn get_all(&self) -> Vec<Place> {
        self.store.get_all().await
    }

    pub async fn get_by_id(&self, id: &str) -> Option<Place> {
        self.store.get_by_id(id).await
    }

    pub async fn get_by_category(&self, category: &str) -> Vec<Place> {
        self.store
            .find_where(OperationKind::Lookup, |place| place.category == category)
            .await
    }

    /// Places whose name or address contains `query`; an empty query
    /// returns every place.
    pub async fn search_by_name(&self, query: &str) -> Vec<Place> {
        let matcher = TextMatcher::new(query);
        self.store
            .find_where(OperationKind::Search, move |place| {
                matcher.matches_any(&[place.name.as_str(), place.address.as_str()])
            })
            .await
    }

    pub async fn create(&self, draft: PlaceDraft) -> Place {
        self.store.create(draft).await
    }

    pub async fn update(&self, id: &str, patch: PlacePatch) -> StoreResult<Place> {
        self.store.update(id, patch).await
    }

    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        self.store.delete(id).await
    }
}
