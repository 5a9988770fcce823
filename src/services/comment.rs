//! Comment service implementation

use chrono::Utc;
use tracing::info;
use crate::database::{newest_first, SharedRepository};
use crate::models::{Comment, CreateCommentRequest, TargetType};
use crate::services::auth::AuthContext;
use crate::utils::errors::{SportsHubError, Result};
use crate::utils::helpers::{generate_prefixed_id, truncate_text};

#[derive(Clone)]
pub struct CommentService {
    comments: SharedRepository<Comment>,
}

impl CommentService {
    pub fn new(comments: SharedRepository<Comment>) -> Self {
        Self { comments }
    }

    pub async fn create(&self, auth: &AuthContext, request: CreateCommentRequest) -> Result<Comment> {
        if request.content.trim().is_empty() {
            return Err(SportsHubError::InvalidInput("Comment content cannot be empty".to_string()));
        }
        if request.target_id.trim().is_empty() {
            return Err(SportsHubError::InvalidInput("Comment target is required".to_string()));
        }

        let now = Utc::now();
        let comment = Comment {
            id: generate_prefixed_id("comment"),
            target_id: request.target_id,
            target_type: request.target_type,
            user_id: auth.user_id.clone(),
            user_name: auth.username.clone(),
            content: request.content,
            created_at: now,
            updated_at: now,
        };

        self.comments.write().await.save(comment.clone())?;
        info!(
            comment_id = %comment.id,
            target_id = %comment.target_id,
            preview = %truncate_text(&comment.content, 32),
            "Comment posted"
        );
        Ok(comment)
    }

    /// Comments on one target, newest first
    pub async fn list_for(&self, target_id: &str, target_type: TargetType) -> Result<Vec<Comment>> {
        let comments: Vec<Comment> = self
            .comments
            .read()
            .await
            .list()?
            .into_iter()
            .filter(|c| c.target_id == target_id && c.target_type == target_type)
            .collect();
        Ok(newest_first(comments))
    }

    /// Physically remove one of the caller's comments
    pub async fn delete(&self, comment_id: &str, user_id: &str) -> Result<()> {
        let mut comments = self.comments.write().await;
        let comment = comments
            .get(comment_id)?
            .ok_or_else(|| SportsHubError::CommentNotFound { comment_id: comment_id.to_string() })?;
        if comment.user_id != user_id {
            return Err(SportsHubError::NotOwner("You can only delete your own comments".to_string()));
        }

        comments.delete(comment_id)?;
        info!(comment_id = %comment_id, user_id = %user_id, "Comment deleted");
        Ok(())
    }
}
