//! Activity record.
//!
//! Activities point at their itinerary through `itinerary_id`; the itinerary
//! may also embed a copy of the activity in its own list.

use crate::model::entity::{merge_field, Entity, EntityKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One scheduled thing to do inside an itinerary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Activity {
    pub id: String,
    /// Weak reference to `Itinerary::id`; never validated.
    pub itinerary_id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityDraft {
    pub itinerary_id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityPatch {
    pub itinerary_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

impl Entity for Activity {
    type Draft = ActivityDraft;
    type Patch = ActivityPatch;

    const KIND: EntityKind = EntityKind::Activity;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: ActivityDraft, _created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            itinerary_id: draft.itinerary_id,
            title: draft.title,
            description: draft.description,
            location: draft.location,
            date: draft.date,
            start_time: draft.start_time,
            end_time: draft.end_time,
        }
    }

    fn apply_patch(&mut self, patch: ActivityPatch) {
        merge_field(&mut self.itinerary_id, patch.itinerary_id);
        merge_field(&mut self.title, patch.title);
        merge_field(&mut self.description, patch.description);
        merge_field(&mut self.location, patch.location);
        merge_field(&mut self.date, patch.date);
        merge_field(&mut self.start_time, patch.start_time);
        merge_field(&mut self.end_time, patch.end_time);
    }
}
