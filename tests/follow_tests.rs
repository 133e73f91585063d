//! Follow graph and account tests against a real database

#[cfg(test)]
mod tests {
    use sqlx::PgPool;
    use uuid::Uuid;

    use mingle_server::auth::{AuthError, AuthService};
    use mingle_server::models::User;
    use mingle_server::social::{FollowOutcome, FollowService, UnfollowOutcome};

    /// Helper to create a test database pool
    async fn setup_test_db() -> PgPool {
        let database_url = std::env::var("TEST_DATABASE_URL")
            .unwrap_or_else(|_| "postgresql://localhost/mingle_test".to_string());

        let pool = sqlx::postgres::PgPoolOptions::new()
            .max_connections(1)
            .connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        pool
    }

    /// Helper to create a user with a unique username/email
    async fn create_test_user(auth: &AuthService) -> User {
        let tag = Uuid::new_v4().simple().to_string();
        auth.register(
            &format!("user_{}", &tag[..12]),
            &format!("{}@example.com", &tag[..12]),
            "correct-horse-battery",
        )
        .await
        .expect("Failed to create test user")
    }

    async fn pair_count(pool: &PgPool, follower: Uuid, followed: Uuid) -> i64 {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM follows WHERE follower_id = $1 AND followed_id = $2",
        )
        .bind(follower)
        .bind(followed)
        .fetch_one(pool)
        .await
        .unwrap();
        count
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_follow_then_duplicate_follow() {
        let pool = setup_test_db().await;
        let auth = AuthService::new(pool.clone());
        let follows = FollowService::new(pool.clone());

        let alice = create_test_user(&auth).await;
        let bob = create_test_user(&auth).await;

        let first = follows.follow(alice.id, bob.id).await.unwrap();
        assert!(matches!(first, FollowOutcome::Followed(_)));
        assert_eq!(pair_count(&pool, alice.id, bob.id).await, 1);

        // Sequential duplicate is rejected by the pre-insert lookup
        let second = follows.follow(alice.id, bob.id).await.unwrap();
        assert!(matches!(second, FollowOutcome::AlreadyFollowing));
        assert_eq!(pair_count(&pool, alice.id, bob.id).await, 1);
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_follow_is_directed() {
        let pool = setup_test_db().await;
        let auth = AuthService::new(pool.clone());
        let follows = FollowService::new(pool.clone());

        let alice = create_test_user(&auth).await;
        let bob = create_test_user(&auth).await;

        follows.follow(alice.id, bob.id).await.unwrap();

        assert!(follows.is_following(alice.id, bob.id).await.unwrap());
        assert!(!follows.is_following(bob.id, alice.id).await.unwrap());
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_unfollow_removes_edge() {
        let pool = setup_test_db().await;
        let auth = AuthService::new(pool.clone());
        let follows = FollowService::new(pool.clone());

        let alice = create_test_user(&auth).await;
        let bob = create_test_user(&auth).await;

        follows.follow(alice.id, bob.id).await.unwrap();

        let outcome = follows.unfollow(alice.id, bob.id).await.unwrap();
        assert_eq!(outcome, UnfollowOutcome::Unfollowed);
        assert_eq!(pair_count(&pool, alice.id, bob.id).await, 0);

        // Unfollowing again reports there was nothing to remove
        let outcome = follows.unfollow(alice.id, bob.id).await.unwrap();
        assert_eq!(outcome, UnfollowOutcome::NotFollowing);
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_follower_listings() {
        let pool = setup_test_db().await;
        let auth = AuthService::new(pool.clone());
        let follows = FollowService::new(pool.clone());

        let alice = create_test_user(&auth).await;
        let bob = create_test_user(&auth).await;
        let carol = create_test_user(&auth).await;

        follows.follow(alice.id, carol.id).await.unwrap();
        follows.follow(bob.id, carol.id).await.unwrap();

        let followers = follows.followers(carol.id).await.unwrap();
        let follower_ids: Vec<Uuid> = followers.iter().map(|u| u.id).collect();
        assert!(follower_ids.contains(&alice.id));
        assert!(follower_ids.contains(&bob.id));

        let following = follows.following(alice.id).await.unwrap();
        assert_eq!(following.len(), 1);
        assert_eq!(following[0].id, carol.id);
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_register_rejects_duplicate_username() {
        let pool = setup_test_db().await;
        let auth = AuthService::new(pool.clone());

        let user = create_test_user(&auth).await;

        let result = auth
            .register(&user.username, "other@example.com", "correct-horse-battery")
            .await;

        assert!(matches!(result, Err(AuthError::AccountExists)));
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_verify_credentials() {
        let pool = setup_test_db().await;
        let auth = AuthService::new(pool.clone());

        let user = create_test_user(&auth).await;

        let found = auth
            .verify_credentials(&user.username, "correct-horse-battery")
            .await
            .unwrap();
        assert_eq!(found.id, user.id);

        let wrong_password = auth.verify_credentials(&user.username, "wrong").await;
        assert!(matches!(
            wrong_password,
            Err(AuthError::InvalidCredentials)
        ));

        let unknown_user = auth
            .verify_credentials("no-such-user", "correct-horse-battery")
            .await;
        assert!(matches!(unknown_user, Err(AuthError::InvalidCredentials)));
    }
}
