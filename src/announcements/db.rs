/**
 * Announcement Model and Database Operations
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Announcement struct representing a row in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub content: String,
    pub published_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create a new announcement
pub async fn create_announcement(
    pool: &SqlitePool,
    title: &str,
    content: &str,
) -> Result<Announcement, sqlx::Error> {
    let id = uuid::Uuid::new_v4().to_string();
    let now = Utc::now();

    let announcement = sqlx::query_as::<_, Announcement>(
        r#"
        INSERT INTO announcements (id, title, content, published_at, updated_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, title, content, published_at, updated_at
        "#,
    )
    .bind(&id)
    .bind(title)
    .bind(content)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(announcement)
}

/// List all announcements, most recently published first
pub async fn list_announcements(pool: &SqlitePool) -> Result<Vec<Announcement>, sqlx::Error> {
    let announcements = sqlx::query_as::<_, Announcement>(
        r#"
        SELECT id, title, content, published_at, updated_at
        FROM announcements
        ORDER BY published_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(announcements)
}

/// Update an announcement's title and content, bumping `updated_at`
pub async fn update_announcement(
    pool: &SqlitePool,
    id: &str,
    title: &str,
    content: &str,
) -> Result<Announcement, sqlx::Error> {
    let now = Utc::now();

    let announcement = sqlx::query_as::<_, Announcement>(
        r#"
        UPDATE announcements
        SET title = $1, content = $2, updated_at = $3
        WHERE id = $4
        RETURNING id, title, content, published_at, updated_at
        "#,
    )
    .bind(title)
    .bind(content)
    .bind(now)
    .bind(id)
    .fetch_one(pool)
    .await?;

    Ok(announcement)
}

/// Delete an announcement
pub async fn delete_announcement(pool: &SqlitePool, id: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM announcements WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
