//! Activity service implementation
//! 
//! Owns activity records, membership changes and lifecycle transitions.

use chrono::{DateTime, Utc};
use tracing::debug;
use crate::database::{newest_first, SharedRepository};
use crate::models::{Activity, ActivityStatus, ActivityView, CreateActivityRequest};
use crate::services::auth::AuthContext;
use crate::services::status::activity_status;
use crate::services::user::UserService;
use crate::utils::errors::{SportsHubError, Result};
use crate::utils::helpers::generate_prefixed_id;
use crate::utils::logging::log_activity_action;

#[derive(Clone)]
pub struct ActivityService {
    activities: SharedRepository<Activity>,
    users: UserService,
}

impl ActivityService {
    pub fn new(activities: SharedRepository<Activity>, users: UserService) -> Self {
        Self { activities, users }
    }

    /// Publish a new activity with the caller as publisher
    pub async fn create(&self, auth: &AuthContext, request: CreateActivityRequest) -> Result<Activity> {
        if request.name.trim().is_empty() || request.location.trim().is_empty() {
            return Err(SportsHubError::InvalidInput("Activity name and location are required".to_string()));
        }
        if request.max_participants < 1 || request.max_participants > u32::MAX as i64 {
            return Err(SportsHubError::InvalidInput("Maximum participants must be at least 1".to_string()));
        }
        if request.end_time <= request.start_time {
            return Err(SportsHubError::InvalidInput("End time must be after start time".to_string()));
        }

        let now = Utc::now();
        let activity = Activity {
            id: generate_prefixed_id("activity"),
            name: request.name,
            description: request.description,
            location: request.location,
            start_time: request.start_time,
            end_time: request.end_time,
            max_participants: request.max_participants as u32,
            participants: Vec::new(),
            image: request.image,
            publisher_id: auth.user_id.clone(),
            publisher_name: auth.username.clone(),
            status: ActivityStatus::Recruiting,
            created_at: now,
            updated_at: now,
        };

        self.activities.write().await.save(activity.clone())?;
        log_activity_action(&activity.id, "create", &auth.user_id, Some(&activity.name));
        Ok(activity)
    }

    /// Add a participant. Fails without touching state when the activity is full.
    pub async fn join(&self, activity_id: &str, user_id: &str) -> Result<Activity> {
        let mut activities = self.activities.write().await;
        let mut activity = activities
            .get(activity_id)?
            .ok_or_else(|| SportsHubError::ActivityNotFound { activity_id: activity_id.to_string() })?;

        if activity.status.is_terminal() {
            return Err(SportsHubError::InvalidInput("activity is not open for registration".to_string()));
        }
        if activity.has_participant(user_id) {
            return Err(SportsHubError::AlreadyJoined);
        }
        if activity.is_full() {
            return Err(SportsHubError::ActivityFull);
        }

        activity.participants.push(user_id.to_string());
        if activity.is_full() {
            activity.status = ActivityStatus::Full;
        }
        activity.updated_at = Utc::now();
        activities.save(activity.clone())?;
        drop(activities);

        log_activity_action(activity_id, "join", user_id, None);
        Ok(activity)
    }

    /// Remove a participant; a full activity goes back to recruiting
    pub async fn leave(&self, activity_id: &str, user_id: &str) -> Result<Activity> {
        let mut activities = self.activities.write().await;
        let mut activity = activities
            .get(activity_id)?
            .ok_or_else(|| SportsHubError::ActivityNotFound { activity_id: activity_id.to_string() })?;

        let Some(pos) = activity.participants.iter().position(|id| id == user_id) else {
            return Err(SportsHubError::NotJoined);
        };

        activity.participants.remove(pos);
        if activity.status == ActivityStatus::Full {
            activity.status = ActivityStatus::Recruiting;
        }
        activity.updated_at = Utc::now();
        activities.save(activity.clone())?;
        drop(activities);

        log_activity_action(activity_id, "leave", user_id, None);
        Ok(activity)
    }

    pub async fn cancel(&self, activity_id: &str, user_id: &str) -> Result<()> {
        self.set_status_as_publisher(activity_id, user_id, ActivityStatus::Cancelled, "Only the publisher can cancel this activity")
            .await?;
        log_activity_action(activity_id, "cancel", user_id, None);
        Ok(())
    }

    /// Soft delete; the record stays reachable by id
    pub async fn delete(&self, activity_id: &str, user_id: &str) -> Result<()> {
        self.set_status_as_publisher(activity_id, user_id, ActivityStatus::Deleted, "Only the publisher can delete this activity")
            .await?;
        log_activity_action(activity_id, "delete", user_id, None);
        Ok(())
    }

    async fn set_status_as_publisher(
        &self,
        activity_id: &str,
        user_id: &str,
        status: ActivityStatus,
        denied: &str,
    ) -> Result<()> {
        let mut activities = self.activities.write().await;
        let mut activity = activities
            .get(activity_id)?
            .ok_or_else(|| SportsHubError::ActivityNotFound { activity_id: activity_id.to_string() })?;

        if activity.publisher_id != user_id {
            return Err(SportsHubError::NotOwner(denied.to_string()));
        }

        activity.status = status;
        activity.updated_at = Utc::now();
        activities.save(activity)
    }

    /// All non-deleted activities, newest first
    pub async fn list(&self) -> Result<Vec<ActivityView>> {
        let activities: Vec<Activity> = self
            .activities
            .read()
            .await
            .list()?
            .into_iter()
            .filter(|a| a.status != ActivityStatus::Deleted)
            .collect();
        self.views(newest_first(activities)).await
    }

    /// Lookup by id, deleted records included
    pub async fn get_by_id(&self, activity_id: &str) -> Result<Option<ActivityView>> {
        let activity = self.activities.read().await.get(activity_id)?;
        match activity {
            Some(activity) => Ok(Some(self.view(activity).await?)),
            None => Ok(None),
        }
    }

    pub async fn search(&self, keyword: &str) -> Result<Vec<ActivityView>> {
        let all = self.list().await?;
        if keyword.is_empty() {
            return Ok(all);
        }
        let keyword = keyword.to_lowercase();
        debug!(keyword = %keyword, "Searching activities");
        Ok(all.into_iter().filter(|v| v.activity.matches_keyword(&keyword)).collect())
    }

    /// Activities the user joined or published, newest first
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<ActivityView>> {
        let activities: Vec<Activity> = self
            .activities
            .read()
            .await
            .list()?
            .into_iter()
            .filter(|a| a.publisher_id == user_id || a.has_participant(user_id))
            .collect();
        self.views(newest_first(activities)).await
    }

    pub async fn list_published_by(&self, user_id: &str) -> Result<Vec<ActivityView>> {
        let activities: Vec<Activity> = self
            .activities
            .read()
            .await
            .list()?
            .into_iter()
            .filter(|a| a.publisher_id == user_id)
            .collect();
        self.views(newest_first(activities)).await
    }

    /// Enrich an activity with participant names and its display status
    pub async fn view(&self, activity: Activity) -> Result<ActivityView> {
        self.view_at(activity, Utc::now()).await
    }

    async fn view_at(&self, activity: Activity, now: DateTime<Utc>) -> Result<ActivityView> {
        let participant_details = self.users.participant_details(&activity.participants).await?;
        Ok(ActivityView {
            current_participants: activity.participants.len(),
            participant_details,
            dynamic_status: activity_status(&activity, now),
            activity,
        })
    }

    async fn views(&self, activities: Vec<Activity>) -> Result<Vec<ActivityView>> {
        let now = Utc::now();
        let mut views = Vec::with_capacity(activities.len());
        for activity in activities {
            views.push(self.view_at(activity, now).await?);
        }
        Ok(views)
    }
}
