//! Wire DTOs for the remote auth API and the role model.
//!
//! DESIGN
//! ======
//! The remote API speaks camelCase JSON wrapped in a `{ data, status, message }`
//! envelope. Types here mirror that schema; anything the session layer does
//! not interpret (profile bodies, login `user` payload) stays as raw JSON so
//! unknown fields survive untouched.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// =============================================================================
// ROLE
// =============================================================================

/// Dashboard role. The set is closed; unknown strings fail to parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    MerchantCorporate,
    MerchantBranch,
    /// Barred from every dashboard surface at sign-in.
    Student,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::MerchantCorporate, Role::MerchantBranch, Role::Student];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::MerchantCorporate => "merchant_corporate",
            Self::MerchantBranch => "merchant_branch",
            Self::Student => "student",
        }
    }

    /// Human label for headers and badges.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::MerchantCorporate => "Corporate merchant",
            Self::MerchantBranch => "Branch merchant",
            Self::Student => "Student",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| format!("unknown role: {s}"))
    }
}

// =============================================================================
// USER
// =============================================================================

/// The signed-in account as returned by `GET /auth/me`.
///
/// Replaced wholesale on every successful profile fetch; never patched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: Role,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_profile: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_profile: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_profile: Option<serde_json::Value>,
}

fn default_active() -> bool {
    true
}

impl User {
    /// The profile body that belongs to this user's role, if any.
    #[must_use]
    pub fn profile(&self) -> Option<&serde_json::Value> {
        match self.role {
            Role::Student => self.student_profile.as_ref(),
            Role::MerchantCorporate => self.merchant_profile.as_ref(),
            Role::MerchantBranch => self.branch_profile.as_ref(),
            Role::Admin => None,
        }
    }

    /// Drop any profile field that does not belong to `role`.
    ///
    /// Returns the names of the fields that were discarded.
    pub fn retain_role_profile(&mut self) -> Vec<&'static str> {
        let mut dropped = Vec::new();
        if self.role != Role::Student && self.student_profile.take().is_some() {
            dropped.push("studentProfile");
        }
        if self.role != Role::MerchantCorporate && self.merchant_profile.take().is_some() {
            dropped.push("merchantProfile");
        }
        if self.role != Role::MerchantBranch && self.branch_profile.take().is_some() {
            dropped.push("branchProfile");
        }
        dropped
    }
}

// =============================================================================
// ENVELOPES
// =============================================================================

/// Success wrapper used by every remote operation.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(default)]
    pub message: Option<String>,
}

/// Payload of a successful `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginData {
    /// Identity echo from the auth provider; the canonical `User` comes from `/auth/me`.
    #[serde(default)]
    pub user: serde_json::Value,
    pub session: LoginSession,
}

/// Token material issued by a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginSession {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_at: Option<i64>,
}

/// Generic error body: `{ statusCode, message: string | string[], error }`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub message: Option<ErrorMessage>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

impl ErrorEnvelope {
    /// Display text: multi-message arrays are joined, then `error` is the fallback.
    #[must_use]
    pub fn display_message(&self) -> Option<String> {
        let joined = match &self.message {
            Some(ErrorMessage::One(text)) => text.trim().to_owned(),
            Some(ErrorMessage::Many(parts)) => parts
                .iter()
                .map(|p| p.trim())
                .filter(|p| !p.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
            None => String::new(),
        };
        if !joined.is_empty() {
            return Some(joined);
        }
        self.error.as_deref().map(str::trim).filter(|e| !e.is_empty()).map(str::to_owned)
    }
}
