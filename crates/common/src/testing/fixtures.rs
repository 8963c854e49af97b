//! Sample API payloads for tests
//!
//! Values mirror what the backend returns so serde defaults get exercised
//! the same way they are in production.

use jobmatch_domain::{AuthResponse, Job, User};
use serde_json::{json, Value};

/// JSON for a user as returned by `/users/{id}` and the auth endpoints
pub fn user_json(id: &str) -> Value {
    json!({
        "id": id,
        "email": format!("{id}@example.com"),
        "first_name": "Ada",
        "last_name": "Lovelace",
        "skills": ["rust", "tokio"],
        "experience_years": 5,
        "location": "London",
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    })
}

/// Typed form of [`user_json`].
///
/// # Panics
/// Panics if the fixture no longer matches the `User` model.
#[allow(clippy::expect_used)]
pub fn sample_user(id: &str) -> User {
    serde_json::from_value(user_json(id)).expect("user fixture matches User")
}

/// JSON for a job listing
pub fn job_json(id: &str, title: &str, company: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "company": company,
        "location": "Remote",
        "url": format!("https://jobs.example.com/{id}"),
        "description": "Build things",
        "created_at": "2024-01-01T00:00:00Z",
        "salary": "$120,000"
    })
}

/// Typed form of [`job_json`].
///
/// # Panics
/// Panics if the fixture no longer matches the `Job` model.
#[allow(clippy::expect_used)]
pub fn sample_job(id: &str, title: &str, company: &str) -> Job {
    serde_json::from_value(job_json(id, title, company)).expect("job fixture matches Job")
}

/// Envelope-wrapped auth payload as sent by `/auth/login`
pub fn auth_envelope(user_id: &str, access_token: &str, refresh_token: &str) -> Value {
    json!({
        "success": true,
        "message": "Login successful",
        "data": {
            "access_token": access_token,
            "refresh_token": refresh_token,
            "expires_at": "2030-01-01T00:00:00Z",
            "refresh_expires_at": "2030-02-01T00:00:00Z",
            "user": user_json(user_id)
        }
    })
}

/// Typed auth payload.
///
/// # Panics
/// Panics if the fixture no longer matches the `AuthResponse` model.
#[allow(clippy::expect_used)]
pub fn sample_auth_response(user_id: &str, access_token: &str, refresh_token: &str) -> AuthResponse {
    let envelope = auth_envelope(user_id, access_token, refresh_token);
    serde_json::from_value(envelope["data"].clone()).expect("auth fixture matches AuthResponse")
}
