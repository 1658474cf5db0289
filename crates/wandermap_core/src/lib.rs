//! Data service layer for the WanderMap trip planner.
//! In-memory entity stores with simulated latency, plus the trip list query
//! pipeline consumed by the UI.

pub mod app;
pub mod clock;
pub mod config;
pub mod logging;
pub mod model;
pub mod query;
pub mod seed;
pub mod service;
pub mod store;

pub use app::TravelServices;
pub use clock::{Clock, SystemClock};
pub use config::{ConfigError, CoreConfig, LatencyProfile, OperationKind};
pub use logging::{
    default_log_level, init_logging, init_logging_from, logging_status, LogTarget, LoggingError,
};
pub use model::activity::{Activity, ActivityDraft, ActivityPatch};
pub use model::entity::{Entity, EntityKind, InsertPosition};
pub use model::itinerary::{Itinerary, ItineraryActivity, ItineraryDraft, ItineraryPatch};
pub use model::place::{Place, PlaceDraft, PlacePatch};
pub use model::trip::{
    cover_image_for, Trip, TripCountdown, TripDraft, TripPatch, TripValidationError,
};
pub use query::trip_query::{filter_trips, sort_trips, TripQuery, TripSort, UnknownSortKey};
pub use seed::{SeedData, SeedError};
pub use service::activity_service::ActivityService;
pub use service::itinerary_service::ItineraryService;
pub use service::place_service::PlaceService;
pub use service::trip_service::TripService;
pub use store::{EntityStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
