#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Authenticated user record as returned by the backend.
///
/// The `id` is opaque to the client; it is stored, persisted, and echoed
/// back but never interpreted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// A lesson product from the catalog.
///
/// Cart line items are verbatim clones of this struct taken at add time,
/// so a later catalog update never retroactively changes a cart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: u64,
    pub title: String,
    pub location: String,
    pub price: f64,
    pub spaces: u32,
}

/// Body for `POST /auth/login`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body for `POST /auth/register`.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Success body shared by both auth endpoints: `{ "user": {...} }`.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthSuccess {
    pub user: User,
}

/// Failure body shared by both auth endpoints: `{ "message": "..." }`.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}
