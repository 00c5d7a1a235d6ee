//! Stateless calls to the three remote auth operations.
//!
//! SYSTEM CONTEXT
//! ==============
//! `POST /auth/login` issues a bearer token, `GET /auth/me` resolves it to a
//! `User`, and `POST /auth/logout` revokes it. The client owns the token
//! side effects of those calls: store on login, clear on a 401 profile
//! fetch, always clear on logout.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become `AuthError::Http` carrying the server's message.
//! Logout never fails from the caller's point of view; remote errors are
//! logged and local sign-out proceeds.

#[cfg(test)]
#[path = "auth_client_test.rs"]
mod auth_client_test;

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::error::AuthError;
use crate::token_store::{Credential, TokenStore};
use crate::transport::{ApiRequest, ApiResponse, Transport, TransportError};
use crate::types::{Envelope, ErrorEnvelope, LoginData, LoginSession, User};

pub const LOGIN_PATH: &str = "/auth/login";
pub const PROFILE_PATH: &str = "/auth/me";
pub const LOGOUT_PATH: &str = "/auth/logout";

#[derive(Clone)]
pub struct AuthClient {
    transport: Arc<dyn Transport>,
    tokens: Arc<dyn TokenStore>,
}

impl AuthClient {
    pub fn new(transport: Arc<dyn Transport>, tokens: Arc<dyn TokenStore>) -> Self {
        Self { transport, tokens }
    }

    /// The token store this client writes to.
    #[must_use]
    pub fn tokens(&self) -> &dyn TokenStore {
        self.tokens.as_ref()
    }

    /// Exchange email and password for a session and persist its token.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] on transport failure, a non-2xx status, or
    /// an unparseable body. No token is stored on failure.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginSession, AuthError> {
        let request = ApiRequest::post(LOGIN_PATH).json(serde_json::json!({
            "email": email,
            "password": password,
        }));
        let response = self.exchange(request).await?;
        let session = parse_login_response(&response.body)?;
        self.tokens.set(&Credential::new(session.access_token.clone()));
        Ok(session)
    }

    /// Resolve the stored credential to the current `User`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingCredential`] with no stored token. A 401
    /// clears the stored token before the error is returned.
    pub async fn get_profile(&self) -> Result<User, AuthError> {
        let credential = self.tokens.get().ok_or(AuthError::MissingCredential)?;
        let result = self.exchange(ApiRequest::get(PROFILE_PATH).bearer(credential)).await;
        match result {
            Ok(response) => parse_profile_response(&response.body),
            Err(err) => {
                if err.is_unauthorized() {
                    tracing::debug!("profile fetch rejected credential; clearing token");
                    self.tokens.clear();
                }
                Err(err)
            }
        }
    }

    /// Best-effort remote logout followed unconditionally by a local clear.
    pub async fn logout(&self) {
        if let Some(credential) = self.tokens.get() {
            if let Err(e) = self.exchange(ApiRequest::post(LOGOUT_PATH).bearer(credential)).await {
                tracing::warn!(error = %e, "remote logout failed; clearing local session anyway");
            }
        }
        self.tokens.clear();
    }

    async fn exchange(&self, request: ApiRequest) -> Result<ApiResponse, AuthError> {
        let response = self.transport.send(request).await.map_err(transport_error)?;
        if !response.is_success() {
            return Err(http_error(response.status, &response.body));
        }
        Ok(response)
    }
}

// =============================================================================
// PARSING
// =============================================================================

fn transport_error(e: TransportError) -> AuthError {
    match e {
        TransportError::Network(message) => AuthError::Network(message),
        TransportError::Timeout => AuthError::Timeout,
    }
}

pub(crate) fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// Build the typed error for a non-2xx response from its error envelope.
pub(crate) fn http_error(status: u16, body: &str) -> AuthError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|env| env.display_message())
        .unwrap_or_else(|| request_failed_message(status));
    AuthError::Http { status, message }
}

fn parse_envelope<T: DeserializeOwned>(body: &str) -> Result<Envelope<T>, AuthError> {
    serde_json::from_str(body).map_err(|e| AuthError::Decode(e.to_string()))
}

pub(crate) fn parse_login_response(body: &str) -> Result<LoginSession, AuthError> {
    let envelope: Envelope<LoginData> = parse_envelope(body)?;
    if envelope.data.session.access_token.is_empty() {
        return Err(AuthError::Decode("empty access_token".to_owned()));
    }
    Ok(envelope.data.session)
}

pub(crate) fn parse_profile_response(body: &str) -> Result<User, AuthError> {
    let envelope: Envelope<User> = parse_envelope(body)?;
    let mut user = envelope.data;
    let dropped = user.retain_role_profile();
    if !dropped.is_empty() {
        tracing::warn!(user_id = %user.id, role = %user.role, ?dropped, "discarded profiles not matching role");
    }
    Ok(user)
}
