//! Generic latency-simulating entity store.
//!
//! # Invariants
//! - Latency is awaited before the lock is taken, so a sleeping operation
//!   never blocks others and each mutation runs to completion once started.
//! - Only the write lock mutates `records`; readers clone under the read lock.
//! - Ids are unique within the collection and never reassigned.

use crate::clock::{Clock, IdSequence, SystemClock};
use crate::config::{LatencyProfile, OperationKind};
use crate::model::entity::{Entity, EntityKind, InsertPosition};
use crate::store::{StoreError, StoreResult};
use log::{debug, info, warn};
use std::sync::Arc;
use tokio::sync::RwLock;

struct Collection<E> {
    records: Vec<E>,
    ids: IdSequence,
}

/// In-memory collection for one entity type.
///
/// Cloning the store clones the handle: both handles see the same records.
pub struct EntityStore<E: Entity, C: Clock = SystemClock> {
    collection: Arc<RwLock<Collection<E>>>,
    latency: LatencyProfile,
    clock: Arc<C>,
}

impl<E: Entity, C: Clock> Clone for EntityStore<E, C> {
    fn clone(&self) -> Self {
        Self {
            collection: Arc::clone(&self.collection),
            latency: self.latency,
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<E: Entity, C: Clock> EntityStore<E, C> {
    /// Creates a store holding `seed` in the given order.
    pub fn new(seed: Vec<E>, latency: LatencyProfile, clock: Arc<C>) -> Self {
        debug!(
            "event=store_seeded module=store kind={} count={}",
            E::KIND.as_str(),
            seed.len()
        );
        Self {
            collection: Arc::new(RwLock::new(Collection {
                records: seed,
                ids: IdSequence::default(),
            })),
            latency,
            clock,
        }
    }

    pub fn kind(&self) -> EntityKind {
        E::KIND
    }

    pub fn latency(&self) -> LatencyProfile {
        self.latency
    }

    /// All records in collection order.
    pub async fn get_all(&self) -> Vec<E> {
        self.simulate_latency(OperationKind::GetAll).await;
        let records = self.collection.read().await.records.clone();
        debug!(
            "event=entity_list module=store kind={} count={} status=ok",
            E::KIND.as_str(),
            records.len()
        );
        records
    }

    /// The record with `id`, or `None` when absent.
    pub async fn get_by_id(&self, id: &str) -> Option<E> {
        self.simulate_latency(OperationKind::GetById).await;
        let collection = self.collection.read().await;
        let found = collection.records.iter().find(|record| record.id() == id).cloned();
        debug!(
            "event=entity_get module=store kind={} id={} found={}",
            E::KIND.as_str(),
            id,
            found.is_some()
        );
        found
    }

    /// Records matching `predicate`, in collection order.
    ///
    /// `operation` selects the latency window (`Lookup` or `Search`).
    pub async fn find_where<P>(&self, operation: OperationKind, predicate: P) -> Vec<E>
    where
        P: Fn(&E) -> bool + Send,
    {
        self.simulate_latency(operation).await;
        let collection = self.collection.read().await;
        let matches: Vec<E> = collection
            .records
            .iter()
            .filter(|record| predicate(*record))
            .cloned()
            .collect();
        debug!(
            "event=entity_scan module=store kind={} op={} count={}",
            E::KIND.as_str(),
            operation.as_str(),
            matches.len()
        );
        matches
    }

    /// Assigns a fresh id, inserts the record and returns a copy of it.
    ///
    /// Trips go to the front of the collection, other kinds are appended.
    /// Fields are stored as given; no validation happens here.
    pub async fn create(&self, draft: E::Draft) -> E {
        self.simulate_latency(OperationKind::Create).await;
        let mut collection = self.collection.write().await;
        let created_at = self.clock.now();

        let Collection { records, ids } = &mut *collection;
        let id = ids.next(created_at.timestamp_millis(), |candidate| {
            records.iter().any(|record| record.id() == candidate)
        });
        let entity = E::from_draft(id, draft, created_at);
        match E::KIND.insert_position() {
            InsertPosition::Front => records.insert(0, entity.clone()),
            InsertPosition::Back => records.push(entity.clone()),
        }

        info!(
            "event=entity_create module=store kind={} id={} count={} status=ok",
            E::KIND.as_str(),
            entity.id(),
            records.len()
        );
        entity
    }

    /// Merges `patch` over the record with `id` and returns the result.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when no record has `id`; nothing is created.
    pub async fn update(&self, id: &str, patch: E::Patch) -> StoreResult<E> {
        self.simulate_latency(OperationKind::Update).await;
        let mut collection = self.collection.write().await;

        let Some(record) = collection
            .records
            .iter_mut()
            .find(|record| record.id() == id)
        else {
            return Err(self.not_found("entity_update", id));
        };
        record.apply_patch(patch);
        let updated = record.clone();

        info!(
            "event=entity_update module=store kind={} id={} status=ok",
            E::KIND.as_str(),
            id
        );
        Ok(updated)
    }

    /// Removes the record with `id`.
    ///
    /// Related records in other stores are left untouched.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when no record has `id`.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        self.simulate_latency(OperationKind::Delete).await;
        let mut collection = self.collection.write().await;

        let Some(position) = collection
            .records
            .iter()
            .position(|record| record.id() == id)
        else {
            return Err(self.not_found("entity_delete", id));
        };
        collection.records.remove(position);

        info!(
            "event=entity_delete module=store kind={} id={} count={} status=ok",
            E::KIND.as_str(),
            id,
            collection.records.len()
        );
        Ok(())
    }

    /// Number of stored records. Not latency-simulated.
    pub async fn len(&self) -> usize {
        self.collection.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    async fn simulate_latency(&self, operation: OperationKind) {
        let delay = self.latency.delay_for(operation);
        if !delay.is_zero() {
            self.clock.sleep(delay).await;
        }
    }

    fn not_found(&self, event: &str, id: &str) -> StoreError {
        warn!(
            "event={} module=store kind={} id={} status=error reason=not_found",
            event,
            E::KIND.as_str(),
            id
        );
        StoreError::NotFound {
            kind: E::KIND,
            id: id.to_string(),
        }
    }
}
