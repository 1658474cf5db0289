//! Trip record and trip-card projections.
//!
//! # Responsibility
//! - Define the stored trip shape plus its draft/patch inputs.
//! - Derive schedule projections (duration, countdown) from ISO dates.
//! - Provide the create-form helpers (required fields, default cover image).
//!
//! # Invariants
//! - `created_at` is stamped once by `create` and never patched.
//! - Date helpers return `None` instead of guessing when a date is malformed.

use crate::model::entity::{merge_field, Entity, EntityKind};
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

const COVER_IMAGE_BASE_URL: &str = "https://images.unsplash.com/1600x900/?travel,";

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Trip {
    pub id: String,
    pub name: String,
    pub destination: String,
    /// ISO date (`YYYY-MM-DD`).
    pub start_date: String,
    /// ISO date (`YYYY-MM-DD`).
    pub end_date: String,
    pub description: String,
    pub cover_image: String,
    /// RFC 3339 UTC timestamp with millisecond precision.
    pub created_at: String,
}

/// Fields supplied when creating a trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TripDraft {
    pub name: String,
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub cover_image: String,
}

/// Partial trip update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TripPatch {
    pub name: Option<String>,
    pub destination: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
    pub cover_image: Option<String>,
}

impl Entity for Trip {
    type Draft = TripDraft;
    type Patch = TripPatch;

    const KIND: EntityKind = EntityKind::Trip;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: TripDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            destination: draft.destination,
            start_date: draft.start_date,
            end_date: draft.end_date,
            description: draft.description,
            cover_image: draft.cover_image,
            created_at: created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    fn apply_patch(&mut self, patch: TripPatch) {
        merge_field(&mut self.name, patch.name);
        merge_field(&mut self.destination, patch.destination);
        merge_field(&mut self.start_date, patch.start_date);
        merge_field(&mut self.end_date, patch.end_date);
        merge_field(&mut self.description, patch.description);
        merge_field(&mut self.cover_image, patch.cover_image);
    }
}

/// How far away a trip's start date is, as shown on a trip card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripCountdown {
    Past,
    Today,
    Tomorrow,
    DaysToGo(i64),
}

impl Display for TripCountdown {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Past => write!(f, "Past trip"),
            Self::Today => write!(f, "Today!"),
            Self::Tomorrow => write!(f, "Tomorrow"),
            Self::DaysToGo(days) => write!(f, "{days} days to go"),
        }
    }
}

impl Trip {
    /// Inclusive number of calendar days between start and end.
    pub fn duration_days(&self) -> Option<i64> {
        let start = parse_calendar_date(&self.start_date)?;
        let end = parse_calendar_date(&self.end_date)?;
        Some((end - start).num_days() + 1)
    }

    /// Countdown relative to `today`.
    pub fn countdown(&self, today: NaiveDate) -> Option<TripCountdown> {
        let start = parse_calendar_date(&self.start_date)?;
        let countdown = match (start - today).num_days() {
            days if days < 0 => TripCountdown::Past,
            0 => TripCountdown::Today,
            1 => TripCountdown::Tomorrow,
            days => TripCountdown::DaysToGo(days),
        };
        Some(countdown)
    }
}

/// Create-form rejection: a required trip field was left empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripValidationError {
    MissingField(&'static str),
}

impl Display for TripValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "missing required trip field `{field}`"),
        }
    }
}

impl Error for TripValidationError {}

impl TripDraft {
    /// Checks the fields the create form requires.
    ///
    /// The store never calls this; callers run it before `create`.
    pub fn validate(&self) -> Result<(), TripValidationError> {
        let required = [
            ("name", &self.name),
            ("destination", &self.destination),
            ("startDate", &self.start_date),
            ("endDate", &self.end_date),
        ];
        match required.iter().find(|(_, value)| value.is_empty()) {
            Some((field, _)) => Err(TripValidationError::MissingField(*field)),
            None => Ok(()),
        }
    }

    /// Fills an empty `cover_image` from the destination.
    pub fn with_default_cover_image(mut self) -> Self {
        if self.cover_image.is_empty() {
            self.cover_image = cover_image_for(&self.destination);
        }
        self
    }
}

/// Stock travel photo URL keyed by destination words.
pub fn cover_image_for(destination: &str) -> String {
    let lowered = destination.to_lowercase();
    let keywords = WHITESPACE_RE.replace_all(&lowered, ",");
    format!("{COVER_IMAGE_BASE_URL}{keywords}")
}

fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.date_naive());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|timestamp| timestamp.date())
}
