/**
 * Contact Message Model and Database Operations
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Contact message struct representing a row in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Whether an admin has marked the message as read
    pub read: bool,
    pub received_at: DateTime<Utc>,
}

/// Create a new contact message (unread)
pub async fn create_message(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    subject: &str,
    message: &str,
) -> Result<ContactMessage, sqlx::Error> {
    let id = uuid::Uuid::new_v4().to_string();
    let now = Utc::now();

    let row = sqlx::query_as::<_, ContactMessage>(
        r#"
        INSERT INTO contact_messages (id, name, email, subject, message, read, received_at)
        VALUES ($1, $2, $3, $4, $5, FALSE, $6)
        RETURNING id, name, email, subject, message, read, received_at
        "#,
    )
    .bind(&id)
    .bind(name)
    .bind(email)
    .bind(subject)
    .bind(message)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// List all contact messages, most recently received first
pub async fn list_messages(pool: &SqlitePool) -> Result<Vec<ContactMessage>, sqlx::Error> {
    let messages = sqlx::query_as::<_, ContactMessage>(
        r#"
        SELECT id, name, email, subject, message, read, received_at
        FROM contact_messages
        ORDER BY received_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(messages)
}

/// Set only the `read` flag on a contact message
pub async fn set_read(
    pool: &SqlitePool,
    id: &str,
    read: bool,
) -> Result<ContactMessage, sqlx::Error> {
    let row = sqlx::query_as::<_, ContactMessage>(
        r#"
        UPDATE contact_messages
        SET read = $1
        WHERE id = $2
        RETURNING id, name, email, subject, message, read, received_at
        "#,
    )
    .bind(read)
    .bind(id)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Delete a contact message
pub async fn delete_message(pool: &SqlitePool, id: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM contact_messages WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
