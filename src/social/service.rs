//! Follow graph service
//!
//! Directed follow edges between users. Pair uniqueness is a pre-insert
//! lookup rather than a database constraint, so concurrent requests for the
//! same pair can race and insert duplicates; callers accept that window.

use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Follow, User};

/// Social graph errors
#[derive(Error, Debug)]
pub enum SocialError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for SocialError {
    fn from(e: sqlx::Error) -> Self {
        SocialError::DatabaseError(e.to_string())
    }
}

/// Outcome of a follow request
#[derive(Debug)]
pub enum FollowOutcome {
    Followed(Follow),
    AlreadyFollowing,
}

/// Outcome of an unfollow request
#[derive(Debug, PartialEq, Eq)]
pub enum UnfollowOutcome {
    Unfollowed,
    NotFollowing,
}

/// Follow/unfollow writes and follower reads against the relational store
#[derive(Clone)]
pub struct FollowService {
    db_pool: PgPool,
}

impl FollowService {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }

    /// Record that `follower_id` follows `followed_id`
    pub async fn follow(
        &self,
        follower_id: Uuid,
        followed_id: Uuid,
    ) -> Result<FollowOutcome, SocialError> {
        let existing: Option<Follow> = sqlx::query_as(
            r#"
            SELECT id, follower_id, followed_id, created_at
            FROM follows
            WHERE follower_id = $1 AND followed_id = $2
            "#,
        )
        .bind(follower_id)
        .bind(followed_id)
        .fetch_optional(&self.db_pool)
        .await?;

        if existing.is_some() {
            return Ok(FollowOutcome::AlreadyFollowing);
        }

        let follow: Follow = sqlx::query_as(
            r#"
            INSERT INTO follows (id, follower_id, followed_id)
            VALUES ($1, $2, $3)
            RETURNING id, follower_id, followed_id, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(follower_id)
        .bind(followed_id)
        .fetch_one(&self.db_pool)
        .await?;

        tracing::info!(
            follower_id = %follower_id,
            followed_id = %followed_id,
            "follow edge created"
        );

        Ok(FollowOutcome::Followed(follow))
    }

    /// Remove the follow edge, if present
    pub async fn unfollow(
        &self,
        follower_id: Uuid,
        followed_id: Uuid,
    ) -> Result<UnfollowOutcome, SocialError> {
        let result = sqlx::query(
            r#"
            DELETE FROM follows
            WHERE follower_id = $1 AND followed_id = $2
            "#,
        )
        .bind(follower_id)
        .bind(followed_id)
        .execute(&self.db_pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(UnfollowOutcome::NotFollowing);
        }

        Ok(UnfollowOutcome::Unfollowed)
    }

    /// Whether a follow edge exists for the pair
    pub async fn is_following(
        &self,
        follower_id: Uuid,
        followed_id: Uuid,
    ) -> Result<bool, SocialError> {
        let existing: Option<(Uuid,)> = sqlx::query_as(
            r#"
            SELECT id FROM follows
            WHERE follower_id = $1 AND followed_id = $2
            "#,
        )
        .bind(follower_id)
        .bind(followed_id)
        .fetch_optional(&self.db_pool)
        .await?;

        Ok(existing.is_some())
    }

    /// Users who follow `user_id`
    pub async fn followers(&self, user_id: Uuid) -> Result<Vec<User>, SocialError> {
        let users: Vec<User> = sqlx::query_as(
            r#"
            SELECT u.id, u.username, u.email, u.password_hash, u.created_at, u.updated_at
            FROM users u
            JOIN follows f ON f.follower_id = u.id
            WHERE f.followed_id = $1
            ORDER BY f.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db_pool)
        .await?;

        Ok(users)
    }

    /// Users that `user_id` follows
    pub async fn following(&self, user_id: Uuid) -> Result<Vec<User>, SocialError> {
        let users: Vec<User> = sqlx::query_as(
            r#"
            SELECT u.id, u.username, u.email, u.password_hash, u.created_at, u.updated_at
            FROM users u
            JOIN follows f ON f.followed_id = u.id
            WHERE f.follower_id = $1
            ORDER BY f.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db_pool)
        .await?;

        Ok(users)
    }
}
