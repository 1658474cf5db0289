//! Itinerary record.
//!
//! An itinerary groups activities for one trip. Its activity list may hold
//! bare activity ids, embedded activity objects, or a mix of both; the list
//! order is the display order.

use crate::model::activity::Activity;
use crate::model::entity::{merge_field, Entity, EntityKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of `Itinerary::activities`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItineraryActivity {
    Ref(String),
    Embedded(Activity),
}

impl ItineraryActivity {
    /// Id of the referenced or embedded activity.
    pub fn activity_id(&self) -> &str {
        match self {
            Self::Ref(id) => id,
            Self::Embedded(activity) => &activity.id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Itinerary {
    pub id: String,
    /// Weak reference to `Trip::id`; never validated or cascaded.
    pub trip_id: String,
    pub title: String,
    pub date: String,
    pub activities: Vec<ItineraryActivity>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItineraryDraft {
    pub trip_id: String,
    pub title: String,
    pub date: String,
    /// Empty when the caller supplies none.
    pub activities: Vec<ItineraryActivity>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItineraryPatch {
    pub trip_id: Option<String>,
    pub title: Option<String>,
    pub date: Option<String>,
    /// Replaces the whole list; entries are not merged.
    pub activities: Option<Vec<ItineraryActivity>>,
}

impl Entity for Itinerary {
    type Draft = ItineraryDraft;
    type Patch = ItineraryPatch;

    const KIND: EntityKind = EntityKind::Itinerary;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: ItineraryDraft, _created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            trip_id: draft.trip_id,
            title: draft.title,
            date: draft.date,
            activities: draft.activities,
        }
    }

    fn apply_patch(&mut self, patch: ItineraryPatch) {
        merge_field(&mut self.trip_id, patch.trip_id);
        merge_field(&mut self.title, patch.title);
        merge_field(&mut self.date, patch.date);
        merge_field(&mut self.activities, patch.activities);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activities_accept_ids_and_embedded_objects() {
        let itinerary: Itinerary = serde_json::from_str(
            r#"{
                "id": "2001",
                "tripId": "1001",
                "activities": ["3001", {"id": "3002", "itineraryId": "2001", "title": "Louvre"}]
            }"#,
        )
        .unwrap();

        assert_eq!(itinerary.trip_id, "1001");
        assert_eq!(itinerary.activities.len(), 2);
        assert_eq!(
            itinerary.activities[0],
            ItineraryActivity::Ref("3001".to_string())
        );
        assert_eq!(itinerary.activities[1].activity_id(), "3002");
        assert!(matches!(
            &itinerary.activities[1],
            ItineraryActivity::Embedded(activity) if activity.title == "Louvre"
        ));
    }

    #[test]
    fn missing_activities_default_to_empty() {
        let draft: ItineraryDraft = serde_json::from_str(r#"{"tripId": "1001"}"#).unwrap();
        assert!(draft.activities.is_empty());
    }
}
