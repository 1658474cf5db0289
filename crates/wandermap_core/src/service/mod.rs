//! Entity use-case services.
//!
//! # Responsibility
//! - Wrap one `EntityStore` per entity type behind a typed API.
//! - Add entity-specific lookups (foreign key, category, text search).
//!
//! # Invariants
//! - Services never bypass the store's latency or copy contracts.
//! - Lookups preserve collection order.

pub mod activity_service;
pub mod itinerary_service;
pub mod place_service;
pub mod trip_service;
