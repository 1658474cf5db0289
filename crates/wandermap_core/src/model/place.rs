//! Place record.
//!
//! Places stand alone: no other entity references them.

use crate::model::entity::{merge_field, Entity, EntityKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A saved point of interest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub address: String,
    /// Free-form label matched exactly by `get_by_category`.
    pub category: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlaceDraft {
    pub name: String,
    pub address: String,
    pub category: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlacePatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl Entity for Place {
    type Draft = PlaceDraft;
    type Patch = PlacePatch;

    const KIND: EntityKind = EntityKind::Place;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: PlaceDraft, _created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            address: draft.address,
            category: draft.category,
            description: draft.description,
        }
    }

    fn apply_patch(&mut self, patch: PlacePatch) {
        merge_field(&mut self.name, patch.name);
        merge_field(&mut self.address, patch.address);
        merge_field(&mut self.category, patch.category);
        merge_field(&mut self.description, patch.description);
    }
}
