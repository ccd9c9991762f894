//! Admin API integration tests
//!
//! Tests for the admin route guard and the CRUD surfaces behind it.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::Value;

use common::{admin_cookie, test_server, user_cookie};

const ADMIN_PATHS: &[&str] = &[
    "/api/admin/users",
    "/api/admin/job-openings",
    "/api/admin/job-applications",
    "/api/admin/announcements",
    "/api/admin/contact-messages",
];

#[tokio::test]
async fn test_admin_routes_reject_missing_cookie() {
    let (server, _pool) = test_server().await;

    for path in ADMIN_PATHS {
        let response = server.get(path).await;
        assert_eq!(
            response.status_code(),
            StatusCode::UNAUTHORIZED,
            "expected 401 for {}",
            path
        );
        let body: Value = response.json();
        assert_eq!(body["message"], "Unauthorized");
    }
}

#[tokio::test]
async fn test_admin_routes_reject_non_admin_role() {
    let (server, pool) = test_server().await;
    let cookie = user_cookie(&pool).await;

    for path in ADMIN_PATHS {
        let response = server.get(path).add_header("cookie", cookie.clone()).await;
        assert_eq!(
            response.status_code(),
            StatusCode::UNAUTHORIZED,
            "expected 401 for {}",
            path
        );
    }
}

#[tokio::test]
async fn test_admin_mutations_reject_missing_cookie() {
    let (server, _pool) = test_server().await;

    // The guard runs before body extraction, so no payload is needed.
    let response = server.post("/api/admin/users").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let response = server.delete("/api/admin/announcements").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let response = server.post("/api/admin/email/send").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_user_management_crud() {
    let (server, pool) = test_server().await;
    let cookie = admin_cookie(&pool).await;

    // Create
    let created = server
        .post("/api/admin/users")
        .add_header("cookie", cookie.clone())
        .json(&serde_json::json!({
            "email": "staff@example.com",
            "password": "staffpass123",
            "name": "Staff Member",
            "role": "user"
        }))
        .await;
    assert_eq!(created.status_code(), StatusCode::CREATED);
    let created: Value = created.json();
    assert_eq!(created["email"], "staff@example.com");
    assert!(created.get("password_hash").is_none());
    let user_id = created["id"].as_str().unwrap().to_string();

    // Duplicate email conflicts
    let duplicate = server
        .post("/api/admin/users")
        .add_header("cookie", cookie.clone())
        .json(&serde_json::json!({
            "email": "staff@example.com",
            "password": "other",
            "role": "user"
        }))
        .await;
    assert_eq!(duplicate.status_code(), StatusCode::CONFLICT);

    // Unknown role is rejected
    let bad_role = server
        .post("/api/admin/users")
        .add_header("cookie", cookie.clone())
        .json(&serde_json::json!({
            "email": "other@example.com",
            "password": "pass",
            "role": "superuser"
        }))
        .await;
    assert_eq!(bad_role.status_code(), StatusCode::BAD_REQUEST);

    // List contains the admin fixture and the new user, newest first
    let list = server
        .get("/api/admin/users")
        .add_header("cookie", cookie.clone())
        .await;
    assert_eq!(list.status_code(), StatusCode::OK);
    let list: Value = list.json();
    assert_eq!(list.as_array().unwrap().len(), 2);
    assert_eq!(list[0]["email"], "staff@example.com");

    // Update: promote and rename without touching the password
    let updated = server
        .put("/api/admin/users")
        .add_header("cookie", cookie.clone())
        .json(&serde_json::json!({
            "id": &user_id,
            "email": "staff@example.com",
            "name": "Lead Staff",
            "role": "admin"
        }))
        .await;
    assert_eq!(updated.status_code(), StatusCode::OK);
    let updated: Value = updated.json();
    assert_eq!(updated["name"], "Lead Staff");
    assert_eq!(updated["role"], "admin");

    // The untouched password still works
    let login = server
        .post("/api/auth/login")
        .json(&serde_json::json!({
            "email": "staff@example.com",
            "password": "staffpass123"
        }))
        .await;
    assert_eq!(login.status_code(), StatusCode::OK);

    // Update with a new password re-hashes it
    let response = server
        .put("/api/admin/users")
        .add_header("cookie", cookie.clone())
        .json(&serde_json::json!({
            "id": &user_id,
            "email": "staff@example.com",
            "name": "Lead Staff",
            "role": "admin",
            "password": "rotated-pass"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let relogin = server
        .post("/api/auth/login")
        .json(&serde_json::json!({
            "email": "staff@example.com",
            "password": "rotated-pass"
        }))
        .await;
    assert_eq!(relogin.status_code(), StatusCode::OK);

    // Delete
    let deleted = server
        .delete("/api/admin/users")
        .add_header("cookie", cookie.clone())
        .json(&serde_json::json!({ "id": &user_id }))
        .await;
    assert_eq!(deleted.status_code(), StatusCode::OK);

    let list = server
        .get("/api/admin/users")
        .add_header("cookie", cookie.clone())
        .await;
    let list: Value = list.json();
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_job_opening_crud_and_cascade() {
    let (server, pool) = test_server().await;
    let cookie = admin_cookie(&pool).await;

    // Missing fields are named in the error
    let invalid = server
        .post("/api/admin/job-openings")
        .add_header("cookie", cookie.clone())
        .json(&serde_json::json!({
            "title": "Support Lead",
            "description": "",
            "location": "",
            "department": ""
        }))
        .await;
    assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);

    // Create
    let created = server
        .post("/api/admin/job-openings")
        .add_header("cookie", cookie.clone())
        .json(&serde_json::json!({
            "title": "Support Lead",
            "description": "Lead the support desk",
            "location": "Remote",
            "department": "Operations",
            "salary_range": "$50k-$70k"
        }))
        .await;
    assert_eq!(created.status_code(), StatusCode::CREATED);
    let opening: Value = created.json();
    let opening_id = opening["id"].as_str().unwrap().to_string();

    // Update
    let updated = server
        .put("/api/admin/job-openings")
        .add_header("cookie", cookie.clone())
        .json(&serde_json::json!({
            "id": &opening_id,
            "title": "Senior Support Lead",
            "description": "Lead the support desk",
            "location": "Remote",
            "department": "Operations"
        }))
        .await;
    assert_eq!(updated.status_code(), StatusCode::OK);
    let updated: Value = updated.json();
    assert_eq!(updated["title"], "Senior Support Lead");
    assert_eq!(updated["salary_range"], Value::Null);

    // Two applications against the opening
    for applicant in ["a@example.com", "b@example.com"] {
        let response = server
            .post("/api/jobs/apply")
            .json(&serde_json::json!({
                "job_opening_id": &opening_id,
                "applicant_name": "Applicant",
                "applicant_email": applicant,
                "resume_url": "https://example.com/resume.pdf"
            }))
            .await;
        assert_eq!(response.status_code(), StatusCode::CREATED);
    }

    let applications = server
        .get("/api/admin/job-applications")
        .add_header("cookie", cookie.clone())
        .await;
    let applications: Value = applications.json();
    assert_eq!(applications.as_array().unwrap().len(), 2);
    assert_eq!(applications[0]["job_title"], "Senior Support Lead");

    // Deleting the opening removes its applications too
    let deleted = server
        .delete("/api/admin/job-openings")
        .add_header("cookie", cookie.clone())
        .json(&serde_json::json!({ "id": &opening_id }))
        .await;
    assert_eq!(deleted.status_code(), StatusCode::OK);

    let applications = server
        .get("/api/admin/job-applications")
        .add_header("cookie", cookie.clone())
        .await;
    let applications: Value = applications.json();
    assert_eq!(applications.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_application_status_pipeline() {
    let (server, pool) = test_server().await;
    let cookie = admin_cookie(&pool).await;

    let opening = server
        .post("/api/admin/job-openings")
        .add_header("cookie", cookie.clone())
        .json(&serde_json::json!({
            "title": "Payroll Analyst",
            "description": "Run payroll",
            "location": "Manila",
            "department": "Finance"
        }))
        .await;
    let opening: Value = opening.json();
    let opening_id = opening["id"].as_str().unwrap();

    let applied = server
        .post("/api/jobs/apply")
        .json(&serde_json::json!({
            "job_opening_id": &opening_id,
            "applicant_name": "Dana",
            "applicant_email": "dana@example.com",
            "resume_url": "https://example.com/resume.pdf"
        }))
        .await;
    let applied: Value = applied.json();
    assert_eq!(applied["data"]["status"], "Pending");
    let application_id = applied["data"]["id"].as_str().unwrap().to_string();

    // Invalid status is rejected
    let invalid = server
        .put("/api/admin/job-applications")
        .add_header("cookie", cookie.clone())
        .json(&serde_json::json!({ "id": &application_id, "status": "Archived" }))
        .await;
    assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);

    // Unknown application is a 404
    let missing = server
        .put("/api/admin/job-applications")
        .add_header("cookie", cookie.clone())
        .json(&serde_json::json!({ "id": "no-such-id", "status": "Reviewed" }))
        .await;
    assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);

    // Valid transition
    let updated = server
        .put("/api/admin/job-applications")
        .add_header("cookie", cookie.clone())
        .json(&serde_json::json!({ "id": &application_id, "status": "Interviewed" }))
        .await;
    assert_eq!(updated.status_code(), StatusCode::OK);
    let updated: Value = updated.json();
    assert_eq!(updated["status"], "Interviewed");
    assert_eq!(updated["job_title"], "Payroll Analyst");

    // Delete
    let deleted = server
        .delete("/api/admin/job-applications")
        .add_header("cookie", cookie.clone())
        .json(&serde_json::json!({ "id": &application_id }))
        .await;
    assert_eq!(deleted.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_announcement_crud() {
    let (server, pool) = test_server().await;
    let cookie = admin_cookie(&pool).await;

    let invalid = server
        .post("/api/admin/announcements")
        .add_header("cookie", cookie.clone())
        .json(&serde_json::json!({ "title": "", "content": "" }))
        .await;
    assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);

    let created = server
        .post("/api/admin/announcements")
        .add_header("cookie", cookie.clone())
        .json(&serde_json::json!({
            "title": "Office Move",
            "content": "We are relocating next month."
        }))
        .await;
    assert_eq!(created.status_code(), StatusCode::CREATED);
    let created: Value = created.json();
    let id = created["id"].as_str().unwrap().to_string();

    let updated = server
        .put("/api/admin/announcements")
        .add_header("cookie", cookie.clone())
        .json(&serde_json::json!({
            "id": &id,
            "title": "Office Move",
            "content": "Relocation is complete."
        }))
        .await;
    assert_eq!(updated.status_code(), StatusCode::OK);
    let updated: Value = updated.json();
    assert_eq!(updated["content"], "Relocation is complete.");
    assert_eq!(updated["published_at"], created["published_at"]);

    let deleted = server
        .delete("/api/admin/announcements")
        .add_header("cookie", cookie.clone())
        .json(&serde_json::json!({ "id": &id }))
        .await;
    assert_eq!(deleted.status_code(), StatusCode::OK);

    let list = server
        .get("/api/admin/announcements")
        .add_header("cookie", cookie.clone())
        .await;
    let list: Value = list.json();
    assert_eq!(list.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_contact_message_read_toggle_and_delete() {
    let (server, pool) = test_server().await;
    let cookie = admin_cookie(&pool).await;

    let submitted = server
        .post("/api/contact")
        .json(&serde_json::json!({
            "name": "Visitor",
            "email": "visitor@example.com",
            "subject": "Pricing",
            "message": "What do you charge?"
        }))
        .await;
    assert_eq!(submitted.status_code(), StatusCode::CREATED);
    let submitted: Value = submitted.json();
    let id = submitted["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(submitted["data"]["read"], false);

    // Mark read: only the read flag may change
    let updated = server
        .put("/api/admin/contact-messages")
        .add_header("cookie", cookie.clone())
        .json(&serde_json::json!({ "id": &id, "read": true }))
        .await;
    assert_eq!(updated.status_code(), StatusCode::OK);
    let updated: Value = updated.json();
    assert_eq!(updated["read"], true);
    assert_eq!(updated["name"], submitted["data"]["name"]);
    assert_eq!(updated["email"], submitted["data"]["email"]);
    assert_eq!(updated["subject"], submitted["data"]["subject"]);
    assert_eq!(updated["message"], submitted["data"]["message"]);
    assert_eq!(updated["received_at"], submitted["data"]["received_at"]);

    // Delete removes it from subsequent lists
    let deleted = server
        .delete("/api/admin/contact-messages")
        .add_header("cookie", cookie.clone())
        .json(&serde_json::json!({ "id": &id }))
        .await;
    assert_eq!(deleted.status_code(), StatusCode::OK);

    let list = server
        .get("/api/admin/contact-messages")
        .add_header("cookie", cookie.clone())
        .await;
    let list: Value = list.json();
    assert_eq!(list.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_admin_email_relay_validates_payload() {
    let (server, pool) = test_server().await;
    let cookie = admin_cookie(&pool).await;

    let invalid = server
        .post("/api/admin/email/send")
        .add_header("cookie", cookie.clone())
        .json(&serde_json::json!({ "to": [], "subject": "Hi", "html": "<p>Hi</p>" }))
        .await;
    assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);

    // With the mailer unconfigured the relay is a logged no-op but still
    // reports success.
    let sent = server
        .post("/api/admin/email/send")
        .add_header("cookie", cookie.clone())
        .json(&serde_json::json!({
            "to": "someone@example.com",
            "subject": "Hi",
            "html": "<p>Hi</p>"
        }))
        .await;
    assert_eq!(sent.status_code(), StatusCode::OK);
}
