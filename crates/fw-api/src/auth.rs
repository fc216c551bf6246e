//! Basic authentication middleware and caller extraction.
//!
//! Credentials are verified against storage on every request. There is no
//! session or token state to invalidate.

use std::sync::Arc;

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use fw_auth::PasswordService;
use fw_model::{Parent, Principal};
use fw_storage::ParentProvider;

use crate::error::ApiError;

/// State for the authentication middleware.
pub struct AuthState<P> {
    /// Parent accounts, looked up by username.
    pub parents: Arc<P>,
    /// Verifies submitted passwords.
    pub passwords: Arc<PasswordService>,
}

// Manual Clone implementation to avoid requiring P: Clone.
impl<P> Clone for AuthState<P> {
    fn clone(&self) -> Self {
        Self {
            parents: Arc::clone(&self.parents),
            passwords: Arc::clone(&self.passwords),
        }
    }
}

impl<P> AuthState<P> {
    /// Creates authentication state over the given providers.
    pub fn new(parents: Arc<P>, passwords: Arc<PasswordService>) -> Self {
        Self { parents, passwords }
    }
}

/// The authenticated caller, extracted from request extensions.
///
/// The middleware inserts the principal after verifying credentials. A
/// route wired without the middleware rejects with 401 instead of
/// panicking.
#[derive(Debug, Clone)]
pub struct Caller(pub Principal);

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .cloned()
            .map(Self)
            .ok_or((StatusCode::UNAUTHORIZED, "Not authenticated"))
    }
}

/// Verifies Basic credentials and attaches the caller's principal to the
/// request.
pub async fn basic_auth_middleware<P>(
    State(state): State<AuthState<P>>,
    mut request: Request,
    next: Next,
) -> Response
where
    P: ParentProvider + 'static,
{
    let Some((username, password)) = basic_credentials(&request) else {
        return unauthorized();
    };

    let parent = match state.parents.get_by_username(&username).await {
        Ok(Some(parent)) => parent,
        Ok(None) => return unauthorized(),
        Err(err) => {
            tracing::error!(error = %err, "credential lookup failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Storage unavailable").into_response();
        }
    };

    if state.passwords.verify(&password, &parent.password_hash).is_err() {
        return unauthorized();
    }

    request.extensions_mut().insert(parent.principal());
    next.run(request).await
}

/// Parses the username and password out of a Basic Authorization header.
fn basic_credentials(request: &Request) -> Option<(String, String)> {
    let header = request.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let encoded = header.strip_prefix("Basic ")?;
    let decoded = STANDARD.decode(encoded).ok()?;
    let text = String::from_utf8(decoded).ok()?;
    let (username, password) = text.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, "Basic")],
        "Missing or invalid credentials",
    )
        .into_response()
}

/// Checks that the caller owns the target account or is an administrator.
///
/// ## Errors
///
/// Returns [`ApiError::Forbidden`] for any other caller.
pub fn require_owner_or_admin(principal: &Principal, target: &Parent) -> Result<(), ApiError> {
    if principal.is_admin() || principal.username == target.username {
        Ok(())
    } else {
        Err(ApiError::Forbidden(
            "Only the account owner or an administrator may do this".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use fw_model::Role;

    use super::*;

    fn request_with_auth(value: &str) -> Request {
        Request::builder()
            .uri("/api/children")
            .header(header::AUTHORIZATION, value)
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn parses_basic_credentials() {
        let encoded = STANDARD.encode("anna:hunter2");
        let request = request_with_auth(&format!("Basic {encoded}"));
        let (username, password) = basic_credentials(&request).unwrap();
        assert_eq!(username, "anna");
        assert_eq!(password, "hunter2");
    }

    #[test]
    fn password_may_contain_colons() {
        let encoded = STANDARD.encode("anna:pass:word");
        let request = request_with_auth(&format!("Basic {encoded}"));
        let (_, password) = basic_credentials(&request).unwrap();
        assert_eq!(password, "pass:word");
    }

    #[test]
    fn rejects_non_basic_schemes_and_garbage() {
        let bearer = request_with_auth("Bearer abc");
        assert!(basic_credentials(&bearer).is_none());

        let garbage = request_with_auth("Basic not-base64!!!");
        assert!(basic_credentials(&garbage).is_none());

        let missing = Request::builder().uri("/").body(Body::empty()).unwrap();
        assert!(basic_credentials(&missing).is_none());
    }

    #[test]
    fn owner_and_admin_pass_the_account_guard() {
        let anna = Parent::new("anna", "hash", "anna@example.com");
        let owner = anna.principal();
        let admin = Principal::new("root", vec![Role::Parent, Role::Admin]);
        let other = Principal::new("ben", vec![Role::Parent]);

        assert!(require_owner_or_admin(&owner, &anna).is_ok());
        assert!(require_owner_or_admin(&admin, &anna).is_ok());
        assert!(require_owner_or_admin(&other, &anna).is_err());
    }
}
