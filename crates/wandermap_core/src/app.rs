//! Composition root.
//!
//! # Responsibility
//! - Build one store and service per entity type from explicit inputs.
//! - Share one clock and latency profile across all stores.
//!
//! # Invariants
//! - No store is created implicitly; callers own the returned services.
//! - Stores are independent: no cross-store references are enforced.

use crate::clock::{Clock, SystemClock};
use crate::config::{CoreConfig, LatencyProfile};
use crate::seed::{SeedData, SeedError};
use crate::service::activity_service::ActivityService;
use crate::service::itinerary_service::ItineraryService;
use crate::service::place_service::PlaceService;
use crate::service::trip_service::TripService;
use crate::store::EntityStore;
use log::info;
use std::sync::Arc;

/// The data services consumed by the presentation layer.
pub struct TravelServices<C: Clock = SystemClock> {
    pub trips: TripService<C>,
    pub itineraries: ItineraryService<C>,
    pub activities: ActivityService<C>,
    pub places: PlaceService<C>,
}

impl TravelServices<SystemClock> {
    /// Production wiring: bundled fixtures, system clock, configured latency.
    pub fn bootstrap(config: &CoreConfig) -> Result<Self, SeedError> {
        let seed = SeedData::bundled()?;
        Ok(Self::from_seed(seed, config.latency, Arc::new(SystemClock)))
    }
}

impl<C: Clock> TravelServices<C> {
    pub fn from_seed(seed: SeedData, latency: LatencyProfile, clock: Arc<C>) -> Self {
        info!(
            "event=services_ready module=app trips={} itineraries={} activities={} places={}",
            seed.trips.len(),
            seed.itineraries.len(),
            seed.activities.len(),
            seed.places.len()
        );
        Self {
            trips: TripService::new(EntityStore::new(seed.trips, latency, Arc::clone(&clock))),
            itineraries: ItineraryService::new(EntityStore::new(
                seed.itineraries,
                latency,
                Arc::clone(&clock),
            )),
            activities: ActivityService::new(EntityStore::new(
                seed.activities,
                latency,
                Arc::clone(&clock),
            )),
            places: PlaceService::new(EntityStore::new(seed.places, latency, clock)),
        }
    }
}
