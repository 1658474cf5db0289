//! Static seed data for the in-memory stores.
//!
//! # Responsibility
//! - Parse one JSON fixture array per entity type.
//! - Ship the bundled fixtures inside the library binary.
//!
//! # Invariants
//! - Fixture order is collection order.
//! - A malformed fixture is reported, never partially loaded.

use crate::model::activity::Activity;
use crate::model::itinerary::Itinerary;
use crate::model::place::Place;
use crate::model::trip::Trip;
use serde::de::DeserializeOwned;
use std::error::Error;
use std::fmt::{Display, Formatter};

const TRIP_FIXTURE: &str = include_str!("../../fixtures/trip.json");
const ITINERARY_FIXTURE: &str = include_str!("../../fixtures/itinerary.json");
const ACTIVITY_FIXTURE: &str = include_str!("../../fixtures/activity.json");
const PLACE_FIXTURE: &str = include_str!("../../fixtures/place.json");

#[derive(Debug)]
pub struct SeedError {
    pub fixture: &'static str,
    pub source: serde_json::Error,
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid `{}` seed fixture: {}", self.fixture, self.source)
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// Initial contents of every store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedData {
    pub trips: Vec<Trip>,
    pub itineraries: Vec<Itinerary>,
    pub activities: Vec<Activity>,
    pub places: Vec<Place>,
}

impl SeedData {
    /// Fixtures compiled into the crate.
    pub fn bundled() -> Result<Self, SeedError> {
        Self::from_json(
            TRIP_FIXTURE,
            ITINERARY_FIXTURE,
            ACTIVITY_FIXTURE,
            PLACE_FIXTURE,
        )
    }

    /// Parses caller-supplied fixture arrays.
    pub fn from_json(
        trips: &str,
        itineraries: &str,
        activities: &str,
        places: &str,
    ) -> Result<Self, SeedError> {
        Ok(Self {
            trips: parse_fixture("trip", trips)?,
            itineraries: parse_fixture("itinerary", itineraries)?,
            activities: parse_fixture("activity", activities)?,
            places: parse_fixture("place", places)?,
        })
    }
}

/// Parses one fixture array.
pub fn parse_fixture<E: DeserializeOwned>(
    fixture: &'static str,
    json: &str,
) -> Result<Vec<E>, SeedError> {
    serde_json::from_str(json).map_err(|source| SeedError { fixture, source })
}
