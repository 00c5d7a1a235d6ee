//! Scripted transport and fixtures shared by unit tests.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::auth_client::AuthClient;
use crate::token_store::{Credential, MemoryTokenStore, TokenStore};
use crate::transport::{ApiRequest, ApiResponse, Transport, TransportError};
use crate::types::Role;

type Reply = Result<ApiResponse, TransportError>;

/// Replays queued replies per path and records every request.
///
/// Each `send` yields once before answering so that two transitions driven
/// by `tokio::join!` genuinely overlap; `slow` adds extra yields per path.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<HashMap<&'static str, VecDeque<Reply>>>,
    extra_yields: Mutex<HashMap<&'static str, usize>>,
    seen: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push(&self, path: &'static str, reply: Reply) -> &Self {
        self.replies.lock().unwrap().entry(path).or_default().push_back(reply);
        self
    }

    pub fn ok(&self, path: &'static str, body: serde_json::Value) -> &Self {
        self.push(path, Ok(ApiResponse::new(200, body.to_string())))
    }

    pub fn status(&self, path: &'static str, status: u16, body: serde_json::Value) -> &Self {
        self.push(path, Ok(ApiResponse::new(status, body.to_string())))
    }

    /// Make every `path` exchange yield `yields` more times before answering.
    pub fn slow(&self, path: &'static str, yields: usize) -> &Self {
        self.extra_yields.lock().unwrap().insert(path, yields);
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.seen.lock().unwrap().clone()
    }

    pub fn count(&self, path: &str) -> usize {
        self.seen.lock().unwrap().iter().filter(|r| r.path == path).count()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let path = request.path;
        self.seen.lock().unwrap().push(request);
        let extra = self.extra_yields.lock().unwrap().get(path).copied().unwrap_or(0);
        for _ in 0..=extra {
            tokio::task::yield_now().await;
        }
        self.replies
            .lock()
            .unwrap()
            .get_mut(path)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Err(TransportError::Network(format!("no scripted reply for {path}"))))
    }
}

pub fn user_json(id: &str, role: Role) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "email": format!("{id}@example.com"),
        "role": role.as_str(),
        "isActive": true
    })
}

pub fn login_body(token: &str) -> serde_json::Value {
    serde_json::json!({
        "data": {
            "user": { "id": "ignored" },
            "session": { "access_token": token, "refresh_token": "refresh", "expires_at": 1_900_000_000 }
        },
        "status": "success",
        "message": "Login successful"
    })
}

pub fn profile_body(id: &str, role: Role) -> serde_json::Value {
    serde_json::json!({ "data": user_json(id, role), "status": "success", "message": "ok" })
}

pub fn invalid_credentials_body() -> serde_json::Value {
    serde_json::json!({ "statusCode": 401, "message": "Invalid login credentials", "error": "Unauthorized" })
}

/// Script a full successful login for `role`: token issue plus profile fetch.
pub fn script_login(transport: &ScriptedTransport, token: &str, id: &str, role: Role) {
    transport.ok("/auth/login", login_body(token)).ok("/auth/me", profile_body(id, role));
}

pub fn client_with(
    transport: &Arc<ScriptedTransport>,
    stored: Option<&str>,
) -> (AuthClient, Arc<MemoryTokenStore>) {
    let tokens = Arc::new(match stored {
        Some(token) => MemoryTokenStore::with_credential(Credential::new(token)),
        None => MemoryTokenStore::new(),
    });
    let client = AuthClient::new(transport.clone(), tokens.clone() as Arc<dyn TokenStore>);
    (client, tokens)
}
