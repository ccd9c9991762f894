/**
 * Job Opening and Job Application Models and Database Operations
 *
 * Openings own their applications: deleting an opening cascades to its
 * applications through the schema's foreign key.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// The set of states a job application moves through.
///
/// Stored as its display string; anything outside this set is rejected at
/// the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationStatus {
    Pending,
    Reviewed,
    Interviewed,
    Hired,
    Rejected,
}

impl ApplicationStatus {
    /// The storage/display form of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Reviewed => "Reviewed",
            Self::Interviewed => "Interviewed",
            Self::Hired => "Hired",
            Self::Rejected => "Rejected",
        }
    }

    /// Parse a status submitted by a client.
    pub fn parse(value: &str) -> Option<ApplicationStatus> {
        match value {
            "Pending" => Some(Self::Pending),
            "Reviewed" => Some(Self::Reviewed),
            "Interviewed" => Some(Self::Interviewed),
            "Hired" => Some(Self::Hired),
            "Rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// Job opening struct representing a row in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct JobOpening {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub department: String,
    pub salary_range: Option<String>,
    pub posted_at: DateTime<Utc>,
}

/// Job application joined with its opening's title
///
/// The admin dashboard always needs the position name next to the
/// application, so list and update operations return this joined shape.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct JobApplication {
    pub id: String,
    pub job_opening_id: String,
    pub applicant_name: String,
    pub applicant_email: String,
    pub resume_url: String,
    pub cover_letter: Option<String>,
    pub status: String,
    pub applied_at: DateTime<Utc>,
    /// Title of the opening this application belongs to
    pub job_title: String,
}

/// Create a new job opening
pub async fn create_opening(
    pool: &SqlitePool,
    title: &str,
    description: &str,
    location: &str,
    department: &str,
    salary_range: Option<&str>,
) -> Result<JobOpening, sqlx::Error> {
    let id = uuid::Uuid::new_v4().to_string();
    let now = Utc::now();

    let opening = sqlx::query_as::<_, JobOpening>(
        r#"
        INSERT INTO job_openings (id, title, description, location, department, salary_range, posted_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, title, description, location, department, salary_range, posted_at
        "#,
    )
    .bind(&id)
    .bind(title)
    .bind(description)
    .bind(location)
    .bind(department)
    .bind(salary_range)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(opening)
}

/// List all job openings, most recently posted first
pub async fn list_openings(pool: &SqlitePool) -> Result<Vec<JobOpening>, sqlx::Error> {
    let openings = sqlx::query_as::<_, JobOpening>(
        r#"
        SELECT id, title, description, location, department, salary_range, posted_at
        FROM job_openings
        ORDER BY posted_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(openings)
}

/// Get a job opening by ID
pub async fn get_opening_by_id(
    pool: &SqlitePool,
    id: &str,
) -> Result<Option<JobOpening>, sqlx::Error> {
    let opening = sqlx::query_as::<_, JobOpening>(
        r#"
        SELECT id, title, description, location, department, salary_range, posted_at
        FROM job_openings
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(opening)
}

/// Update a job opening
pub async fn update_opening(
    pool: &SqlitePool,
    id: &str,
    title: &str,
    description: &str,
    location: &str,
    department: &str,
    salary_range: Option<&str>,
) -> Result<JobOpening, sqlx::Error> {
    let opening = sqlx::query_as::<_, JobOpening>(
        r#"
        UPDATE job_openings
        SET title = $1, description = $2, location = $3, department = $4, salary_range = $5
        WHERE id = $6
        RETURNING id, title, description, location, department, salary_range, posted_at
        "#,
    )
    .bind(title)
    .bind(description)
    .bind(location)
    .bind(department)
    .bind(salary_range)
    .bind(id)
    .fetch_one(pool)
    .await?;

    Ok(opening)
}

/// Delete a job opening (applications cascade)
pub async fn delete_opening(pool: &SqlitePool, id: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM job_openings WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Create a job application with the default `Pending` status
pub async fn create_application(
    pool: &SqlitePool,
    job_opening_id: &str,
    applicant_name: &str,
    applicant_email: &str,
    resume_url: &str,
    cover_letter: Option<&str>,
) -> Result<JobApplication, sqlx::Error> {
    let id = uuid::Uuid::new_v4().to_string();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO job_applications
            (id, job_opening_id, applicant_name, applicant_email, resume_url, cover_letter, status, applied_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#,
    )
    .bind(&id)
    .bind(job_opening_id)
    .bind(applicant_name)
    .bind(applicant_email)
    .bind(resume_url)
    .bind(cover_letter)
    .bind(ApplicationStatus::Pending.as_str())
    .bind(now)
    .execute(pool)
    .await?;

    let application = get_application_by_id(pool, &id)
        .await?
        .ok_or(sqlx::Error::RowNotFound)?;

    Ok(application)
}

/// Get a job application (joined with its opening title) by ID
pub async fn get_application_by_id(
    pool: &SqlitePool,
    id: &str,
) -> Result<Option<JobApplication>, sqlx::Error> {
    let application = sqlx::query_as::<_, JobApplication>(
        r#"
        SELECT a.id, a.job_opening_id, a.applicant_name, a.applicant_email,
               a.resume_url, a.cover_letter, a.status, a.applied_at,
               o.title AS job_title
        FROM job_applications a
        JOIN job_openings o ON o.id = a.job_opening_id
        WHERE a.id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(application)
}

/// List all job applications, most recent first, each with its opening title
pub async fn list_applications(pool: &SqlitePool) -> Result<Vec<JobApplication>, sqlx::Error> {
    let applications = sqlx::query_as::<_, JobApplication>(
        r#"
        SELECT a.id, a.job_opening_id, a.applicant_name, a.applicant_email,
               a.resume_url, a.cover_letter, a.status, a.applied_at,
               o.title AS job_title
        FROM job_applications a
        JOIN job_openings o ON o.id = a.job_opening_id
        ORDER BY a.applied_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(applications)
}

/// Set a job application's status
pub async fn update_application_status(
    pool: &SqlitePool,
    id: &str,
    status: ApplicationStatus,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE job_applications SET status = $1 WHERE id = $2")
        .bind(status.as_str())
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Delete a job application
pub async fn delete_application(pool: &SqlitePool, id: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM job_applications WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_roundtrip() {
        for status in [
            ApplicationStatus::Pending,
            ApplicationStatus::Reviewed,
            ApplicationStatus::Interviewed,
            ApplicationStatus::Hired,
            ApplicationStatus::Rejected,
        ] {
            assert_eq!(ApplicationStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn test_invalid_status_is_rejected() {
        assert_eq!(ApplicationStatus::parse("Archived"), None);
        assert_eq!(ApplicationStatus::parse("pending"), None);
        assert_eq!(ApplicationStatus::parse(""), None);
    }
}
