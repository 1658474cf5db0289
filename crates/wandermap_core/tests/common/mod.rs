#![allow(dead_code)]

use chrono::{DateTime, Utc};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use wandermap_core::{Clock, EntityStore, LatencyProfile, Place, Trip};

/// Clock frozen at one instant whose sleeps resolve immediately.
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn at(rfc3339: &str) -> Arc<Self> {
        let now = DateTime::parse_from_rfc3339(rfc3339)
            .unwrap()
            .with_timezone(&Utc);
        Arc::new(Self { now })
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn sleep(&self, _duration: Duration) -> impl Future<Output = ()> + Send {
        std::future::ready(())
    }
}

pub const FROZEN_AT: &str = "2024-05-01T00:00:00Z";
/// `FROZEN_AT` in epoch milliseconds.
pub const FROZEN_AT_MS: i64 = 1_714_521_600_000;

pub fn trip(id: &str, name: &str, destination: &str) -> Trip {
    Trip {
        id: id.to_string(),
        name: name.to_string(),
        destination: destination.to_string(),
        ..Trip::default()
    }
}

pub fn place(id: &str, name: &str, address: &str, category: &str) -> Place {
    Place {
        id: id.to_string(),
        name: name.to_string(),
        address: address.to_string(),
        category: category.to_string(),
        ..Place::default()
    }
}

pub fn trip_store(seed: Vec<Trip>) -> EntityStore<Trip, FixedClock> {
    EntityStore::new(seed, LatencyProfile::instant(), FixedClock::at(FROZEN_AT))
}

pub fn trip_ids(trips: &[Trip]) -> Vec<&str> {
    trips.iter().map(|trip| trip.id.as_str()).collect()
}

pub fn place_ids(places: &[Place]) -> Vec<&str> {
    places.iter().map(|place| place.id.as_str()).collect()
}
