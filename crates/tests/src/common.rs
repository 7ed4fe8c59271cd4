use axum::extract::{Path, Query, State};
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use client::{ApiClient, ClientConfig, SessionStore, TokenVault};
use shared_types::{
    AppError, AuthUser, ChatEvent, ChatEventBatch, ChatMessage, ChatRoom, LoginRequest,
    LoginResponse, PlatformStatus, PostMessageRequest, RefreshRequest, School,
    SetPlatformModeRequest, TokenPair,
};

/// In-process stand-in for the ForumKit API.
///
/// Call counters and failure toggles let tests assert the client's exact
/// request sequence, most importantly the single refresh-and-retry.
pub struct MockApi {
    pub valid_access: Mutex<String>,
    pub valid_refresh: Mutex<String>,
    token_serial: AtomicUsize,

    pub login_calls: AtomicUsize,
    pub refresh_calls: AtomicUsize,
    pub schools_calls: AtomicUsize,

    /// Answer every authed request with 401 + JWT_EXPIRED, even for tokens
    /// this mock just issued. Exercises the no-infinite-loop guarantee.
    pub reject_all_access: AtomicBool,
    /// Make the refresh exchange itself fail.
    pub refresh_rejects: AtomicBool,
    /// Answer authed requests with a plain 401 (no expiry code).
    pub plain_unauthorized: AtomicBool,
    /// Answer the schools listing with 403.
    pub schools_forbidden: AtomicBool,

    /// Role granted to whoever logs in.
    pub login_role: Mutex<String>,

    message_serial: AtomicI64,
    pub messages: Mutex<Vec<ChatMessage>>,
    pub events: Mutex<Vec<ChatEvent>>,
    pub platform: Mutex<PlatformStatus>,
}

impl MockApi {
    fn new() -> Self {
        Self {
            valid_access: Mutex::new("access-1".to_string()),
            valid_refresh: Mutex::new("refresh-1".to_string()),
            token_serial: AtomicUsize::new(0),
            login_calls: AtomicUsize::new(0),
            refresh_calls: AtomicUsize::new(0),
            schools_calls: AtomicUsize::new(0),
            reject_all_access: AtomicBool::new(false),
            refresh_rejects: AtomicBool::new(false),
            plain_unauthorized: AtomicBool::new(false),
            schools_forbidden: AtomicBool::new(false),
            login_role: Mutex::new("campus_admin".to_string()),
            message_serial: AtomicI64::new(0),
            messages: Mutex::new(Vec::new()),
            events: Mutex::new(Vec::new()),
            platform: Mutex::new(PlatformStatus::default()),
        }
    }

    /// Invalidate the client's current access token without touching its
    /// refresh token — the "access token expired" situation.
    pub fn expire_access(&self) {
        *self.valid_access.lock().unwrap() = "expired-upstream".to_string();
    }

    fn issue_pair(&self) -> TokenPair {
        let n = self.token_serial.fetch_add(1, Ordering::SeqCst) + 1;
        let pair = TokenPair {
            access_token: format!("access-{n}"),
            refresh_token: format!("refresh-{n}"),
            token_type: "Bearer".to_string(),
            expires_in: 900,
        };
        *self.valid_access.lock().unwrap() = pair.access_token.clone();
        *self.valid_refresh.lock().unwrap() = pair.refresh_token.clone();
        pair
    }

    fn viewer(&self) -> AuthUser {
        AuthUser {
            id: 1,
            username: "mika".to_string(),
            display_name: "Mika".to_string(),
            role: self.login_role.lock().unwrap().clone(),
            school_id: Some(4),
            avatar_url: None,
        }
    }
}

/// Start the mock API on an ephemeral port. The serve task dies with the
/// test's runtime.
pub async fn spawn_mock() -> (String, Arc<MockApi>) {
    init_tracing();
    let state = Arc::new(MockApi::new());
    let router = mock_router(state.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock listener");
    let addr = listener.local_addr().expect("mock listener addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    (format!("http://{addr}"), state)
}

/// A client over a throwaway vault, pointed at the mock.
pub fn client_for(base: &str) -> ApiClient {
    client_with_vault(base, Arc::new(client::MemoryVault::new()))
}

/// A client over a caller-supplied vault, for simulated-reload tests.
pub fn client_with_vault(base: &str, vault: Arc<dyn TokenVault>) -> ApiClient {
    let config = ClientConfig::default().with_api_base(base);
    ApiClient::new(&config, SessionStore::new(vault))
}

/// RUST_LOG-controlled logging for debugging test runs.
fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

fn err_response(err: AppError) -> Response {
    let status =
        StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(err)).into_response()
}

fn authorize(state: &MockApi, headers: &HeaderMap) -> Result<(), Response> {
    if state.plain_unauthorized.load(Ordering::SeqCst) {
        return Err(err_response(AppError::unauthorized("Invalid token")));
    }
    if state.reject_all_access.load(Ordering::SeqCst) {
        return Err(err_response(AppError::token_expired()));
    }
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));
    let valid = state.valid_access.lock().unwrap().clone();
    match bearer {
        Some(token) if token == valid => Ok(()),
        _ => Err(err_response(AppError::token_expired())),
    }
}

fn mock_router(state: Arc<MockApi>) -> Router {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/refresh", post(refresh))
        .route("/api/auth/me", get(me))
        .route("/api/auth/logout", post(logout))
        .route("/api/schools", get(schools))
        .route("/api/chat/rooms", get(chat_rooms))
        .route("/api/chat/rooms/{id}/messages", get(chat_messages).post(post_message))
        .route("/api/chat/events", get(chat_events))
        .route("/api/platform/status", get(platform_status))
        .route("/api/platform/mode", put(set_platform_mode))
        .with_state(state)
}

async fn login(State(state): State<Arc<MockApi>>, Json(req): Json<LoginRequest>) -> Response {
    state.login_calls.fetch_add(1, Ordering::SeqCst);
    if req.password != "correct-horse-battery" {
        return err_response(AppError::unauthorized("Invalid credentials"));
    }
    let tokens = state.issue_pair();
    let mut user = state.viewer();
    user.username = req.username;
    Json(LoginResponse { tokens, user }).into_response()
}

async fn refresh(State(state): State<Arc<MockApi>>, Json(req): Json<RefreshRequest>) -> Response {
    state.refresh_calls.fetch_add(1, Ordering::SeqCst);
    if state.refresh_rejects.load(Ordering::SeqCst) {
        return err_response(AppError::unauthorized("Refresh token revoked"));
    }
    let valid = state.valid_refresh.lock().unwrap().clone();
    if req.refresh_token != valid {
        return err_response(AppError::unauthorized("Unknown refresh token"));
    }
    Json(state.issue_pair()).into_response()
}

async fn me(State(state): State<Arc<MockApi>>, headers: HeaderMap) -> Response {
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    Json(state.viewer()).into_response()
}

async fn logout(State(state): State<Arc<MockApi>>) -> Response {
    *state.valid_access.lock().unwrap() = "logged-out".to_string();
    *state.valid_refresh.lock().unwrap() = "logged-out".to_string();
    Json(serde_json::json!({"ok": true})).into_response()
}

async fn schools(State(state): State<Arc<MockApi>>, headers: HeaderMap) -> Response {
    state.schools_calls.fetch_add(1, Ordering::SeqCst);
    if state.schools_forbidden.load(Ordering::SeqCst) {
        return err_response(AppError::forbidden("Admins only"));
    }
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    Json(vec![
        School {
            id: 1,
            name: "Northfield College".to_string(),
            email_domain: "northfield.edu".to_string(),
            member_count: 1204,
        },
        School {
            id: 2,
            name: "Eastbrook University".to_string(),
            email_domain: "eastbrook.edu".to_string(),
            member_count: 3410,
        },
    ])
    .into_response()
}

async fn chat_rooms(State(state): State<Arc<MockApi>>, headers: HeaderMap) -> Response {
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    Json(vec![ChatRoom {
        id: 1,
        name: "general".to_string(),
        topic: "Anything goes".to_string(),
        school_id: None,
        member_count: 12,
        latest_message: None,
    }])
    .into_response()
}

async fn chat_messages(
    State(state): State<Arc<MockApi>>,
    headers: HeaderMap,
    Path(room_id): Path<i64>,
) -> Response {
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    let messages: Vec<ChatMessage> = state
        .messages
        .lock()
        .unwrap()
        .iter()
        .filter(|m| m.room_id == room_id)
        .cloned()
        .collect();
    Json(messages).into_response()
}

async fn post_message(
    State(state): State<Arc<MockApi>>,
    headers: HeaderMap,
    Path(room_id): Path<i64>,
    Json(req): Json<PostMessageRequest>,
) -> Response {
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    if req.body.trim().is_empty() {
        return err_response(AppError::bad_request("Message body is required"));
    }
    let id = state.message_serial.fetch_add(1, Ordering::SeqCst) + 1;
    let message = ChatMessage {
        id,
        room_id,
        author: "mika".to_string(),
        body: req.body,
        sent_at: chrono::Utc::now(),
        client_nonce: Some(req.client_nonce),
        pending: false,
    };
    state.messages.lock().unwrap().push(message.clone());
    state.events.lock().unwrap().push(ChatEvent::MessagePosted {
        message: message.clone(),
    });
    Json(message).into_response()
}

async fn chat_events(
    State(state): State<Arc<MockApi>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    let after: usize = params
        .get("after")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    let events = state.events.lock().unwrap();
    let batch = ChatEventBatch {
        events: events.iter().skip(after).cloned().collect(),
        cursor: events.len() as i64,
    };
    Json(batch).into_response()
}

async fn platform_status(State(state): State<Arc<MockApi>>) -> Response {
    Json(state.platform.lock().unwrap().clone()).into_response()
}

async fn set_platform_mode(
    State(state): State<Arc<MockApi>>,
    headers: HeaderMap,
    Json(req): Json<SetPlatformModeRequest>,
) -> Response {
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    let mut platform = state.platform.lock().unwrap();
    platform.mode = req.mode;
    platform.announcement = req.announcement;
    Json(platform.clone()).into_response()
}
