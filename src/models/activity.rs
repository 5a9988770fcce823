//! Activity model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::database::Entity;
use crate::models::status::{ActivityStatus, DisplayStatus};
use crate::models::user::ParticipantDetail;
use crate::utils::helpers::deserialize_activity_time;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub location: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub max_participants: u32,
    pub participants: Vec<String>,
    pub image: Option<String>,
    pub publisher_id: String,
    pub publisher_name: String,
    pub status: ActivityStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Activity {
    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }

    pub fn has_participant(&self, user_id: &str) -> bool {
        self.participants.iter().any(|id| id == user_id)
    }

    /// Case-insensitive keyword match over name, location and description
    pub fn matches_keyword(&self, keyword_lower: &str) -> bool {
        self.name.to_lowercase().contains(keyword_lower)
            || self.location.to_lowercase().contains(keyword_lower)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(keyword_lower))
    }
}

impl Entity for Activity {
    const KIND: &'static str = "activity";

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateActivityRequest {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub location: String,
    /// RFC 3339, or a `datetime-local` value read as server local time
    #[serde(deserialize_with = "deserialize_activity_time")]
    pub start_time: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_activity_time")]
    pub end_time: DateTime<Utc>,
    pub max_participants: i64,
    pub image: Option<String>,
}

/// Read-time projection of an activity handed to clients
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityView {
    #[serde(flatten)]
    pub activity: Activity,
    pub current_participants: usize,
    pub participant_details: Vec<ParticipantDetail>,
    pub dynamic_status: DisplayStatus,
}

/// Everything a user has published
#[derive(Debug, Clone, Serialize)]
pub struct Publications {
    pub activities: Vec<ActivityView>,
    pub venues: Vec<crate::models::venue::VenueView>,
}
