use crate::domain::error::DomainError;
use crate::domain::post::Post;
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, error, info};
use uuid::Uuid;

/// The moderation store: one collection of posts, queryable by approval
/// state. Moderation by an id that no stored post carries is a silent
/// no-op, never an error.
#[async_trait]
pub trait PostStore: Send + Sync {
    async fn insert(&self, post: Post) -> Result<Post, DomainError>;
    async fn list_all(&self) -> Result<Vec<Post>, DomainError>;
    async fn list_approved(&self) -> Result<Vec<Post>, DomainError>;
    async fn approve(&self, id: Uuid) -> Result<(), DomainError>;
    async fn delete(&self, id: Uuid) -> Result<(), DomainError>;
}

#[derive(Clone)]
pub struct PostgresPostStore {
    pool: PgPool,
}

impl PostgresPostStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostStore for PostgresPostStore {
    async fn insert(&self, post: Post) -> Result<Post, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO posts (id, content, author, approved, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(post.id)
        .bind(&post.content)
        .bind(&post.author)
        .bind(post.approved)
        .bind(post.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("failed to insert post: {}", e);
            DomainError::Storage(format!("database error: {}", e))
        })?;

        info!(post_id = %post.id, author = %post.author, "post stored pending approval");
        Ok(post)
    }

    async fn list_all(&self) -> Result<Vec<Post>, DomainError> {
        sqlx::query_as::<_, Post>(
            r#"
            SELECT id, content, author, approved, created_at
            FROM posts
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("failed to list posts: {}", e);
            DomainError::Storage(format!("database error: {}", e))
        })
    }

    async fn list_approved(&self) -> Result<Vec<Post>, DomainError> {
        sqlx::query_as::<_, Post>(
            r#"
            SELECT id, content, author, approved, created_at
            FROM posts
            WHERE approved = TRUE
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("failed to list approved posts: {}", e);
            DomainError::Storage(format!("database error: {}", e))
        })
    }

    async fn approve(&self, id: Uuid) -> Result<(), DomainError> {
        let updated = sqlx::query("UPDATE posts SET approved = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("failed to approve post {}: {}", id, e);
                DomainError::Storage(format!("database error: {}", e))
            })?;

        if updated.rows_affected() == 0 {
            debug!(post_id = %id, "approve skipped, no such post");
        } else {
            info!(post_id = %id, "post approved");
        }

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        let deleted = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("failed to delete post {}: {}", id, e);
                DomainError::Storage(format!("database error: {}", e))
            })?;

        if deleted.rows_affected() == 0 {
            debug!(post_id = %id, "delete skipped, no such post");
        } else {
            info!(post_id = %id, "post deleted");
        }

        Ok(())
    }
}
