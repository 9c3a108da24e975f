//! REST API helpers for the storefront backend.
//!
//! Browser builds (`csr`): real HTTP calls via `gloo-net`, each with an
//! explicit deadline so a hung backend resolves to `AuthError::Timeout`
//! instead of leaving the caller pending forever.
//! Native builds: stubs that report `Connection`/empty results, which keeps
//! the state layer compilable and testable off-WASM.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt;

use super::types::{Lesson, User};
#[cfg(feature = "csr")]
use super::types::{LoginRequest, RegisterRequest};

/// Deadline applied to every auth request.
#[cfg(feature = "csr")]
const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Failure modes of an auth call, kept distinct so the UI can tell a
/// rejected credential apart from an unreachable or misbehaving backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// Backend-reported application error (invalid credentials, duplicate
    /// email, ...). Carries the backend's message verbatim.
    Server(String),
    /// The request could not be sent or the connection dropped.
    Connection,
    /// No response arrived within the deadline.
    Timeout,
    /// The response body did not match the expected shape.
    Decode,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Server(message) => f.write_str(message),
            Self::Connection => f.write_str("Connection error"),
            Self::Timeout => f.write_str("Request timed out"),
            Self::Decode => f.write_str("Unexpected response from the server"),
        }
    }
}

/// Authenticate against `POST /auth/login`.
///
/// # Errors
///
/// Returns an [`AuthError`] when the backend rejects the credentials or the
/// request fails in transit.
pub async fn login(email: &str, password: &str) -> Result<User, AuthError> {
    #[cfg(feature = "csr")]
    {
        let body = LoginRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        post_auth("/auth/login", &body).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (email, password);
        Err(AuthError::Connection)
    }
}

/// Create an account via `POST /auth/register`. A successful registration
/// also establishes the session — the backend returns the new user record
/// just like login does.
///
/// # Errors
///
/// Returns an [`AuthError`] when the backend rejects the registration or
/// the request fails in transit.
pub async fn register(name: &str, email: &str, password: &str) -> Result<User, AuthError> {
    #[cfg(feature = "csr")]
    {
        let body = RegisterRequest {
            name: name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        };
        post_auth("/auth/register", &body).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (name, email, password);
        Err(AuthError::Connection)
    }
}

/// Fetch the lesson catalog from `GET /lessons`.
///
/// Catalog failures degrade to an empty list; the lessons page renders an
/// empty state rather than surfacing an error.
pub async fn fetch_lessons() -> Vec<Lesson> {
    #[cfg(feature = "csr")]
    {
        let resp = match gloo_net::http::Request::get("/lessons").send().await {
            Ok(resp) => resp,
            Err(err) => {
                log::warn!("lesson catalog fetch failed: {err}");
                return Vec::new();
            }
        };
        if !resp.ok() {
            log::warn!("lesson catalog fetch returned {}", resp.status());
            return Vec::new();
        }
        resp.json::<Vec<Lesson>>().await.unwrap_or_else(|err| {
            log::warn!("lesson catalog decode failed: {err}");
            Vec::new()
        })
    }
    #[cfg(not(feature = "csr"))]
    {
        Vec::new()
    }
}

/// Shared POST-and-decode path for both auth endpoints.
#[cfg(feature = "csr")]
async fn post_auth<B: serde::Serialize>(url: &str, body: &B) -> Result<User, AuthError> {
    use futures::future::{Either, select};

    use super::types::{ApiErrorBody, AuthSuccess};

    let request = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|_| AuthError::Connection)?;

    let send = Box::pin(request.send());
    let deadline = Box::pin(gloo_timers::future::TimeoutFuture::new(REQUEST_TIMEOUT_MS));

    let resp = match select(send, deadline).await {
        Either::Left((result, _)) => result.map_err(|_| AuthError::Connection)?,
        Either::Right(((), _)) => return Err(AuthError::Timeout),
    };

    if resp.ok() {
        let success: AuthSuccess = resp.json().await.map_err(|_| AuthError::Decode)?;
        Ok(success.user)
    } else {
        let failure: ApiErrorBody = resp.json().await.map_err(|_| AuthError::Decode)?;
        Err(AuthError::Server(failure.message))
    }
}
