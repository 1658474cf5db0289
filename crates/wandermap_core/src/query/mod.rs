//! Client-side query pipeline for list views.
//!
//! # Responsibility
//! - Filter trip lists by free text and sort them by a selectable key.
//! - Share the case-insensitive matcher with place search.
//!
//! # Invariants
//! - Stages never mutate their input; they return new vectors.
//! - Sorting is stable: equal keys keep their incoming order.

pub mod collation;
pub mod date_value;
pub mod text_match;
pub mod trip_query;
