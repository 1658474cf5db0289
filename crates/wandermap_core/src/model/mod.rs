//! Domain records for the trip-planning data layer.
//!
//! # Responsibility
//! - Define the four stored entity shapes and their create/update inputs.
//! - Keep JSON field naming compatible with the bundled fixtures.
//!
//! # Invariants
//! - `id` is assigned by the store and never carried by drafts or patches.
//! - Foreign keys (`trip_id`, `itinerary_id`) are informational only.

pub mod activity;
pub mod entity;
pub mod itinerary;
pub mod place;
pub mod trip;
