//! Typed callers for the ForumKit REST contract.
//!
//! The platform API is an external collaborator — this client only calls
//! it. Every method returns the transport's error taxonomy; callers decide
//! whether a failure is page-level or scoped to one control.

use shared_types::{
    AuthUser, CampusEvent, CastVoteRequest, ChatEventBatch, ChatMessage, ChatRoom, ChatVote,
    CommentRecord, CreateEventRequest, CreateRoomRequest, CreateSchoolRequest, InstagramAccount,
    LinkInstagramRequest, LoginRequest, LoginResponse, PlatformStatus, Post, PostMessageRequest,
    RegisterRequest, ReportRecord, School, ServerStatus, SetPlatformModeRequest, SupportTicket,
    UpdateTicketRequest,
};

use crate::error::ClientError;
use crate::transport::ApiClient;

impl ApiClient {
    // ── Auth ──

    /// Sign in and establish the session. `remember` controls whether the
    /// credentials survive a reload.
    pub async fn login(
        &self,
        username: String,
        password: String,
        remember: bool,
    ) -> Result<AuthUser, ClientError> {
        let req = LoginRequest { username, password };
        let resp: LoginResponse = self.post("/api/auth/login", &req).await?;
        self.session().login(resp.tokens, &resp.user, remember);
        Ok(resp.user)
    }

    pub async fn register(&self, req: &RegisterRequest) -> Result<AuthUser, ClientError> {
        let resp: LoginResponse = self.post("/api/auth/register", req).await?;
        self.session().login(resp.tokens, &resp.user, false);
        Ok(resp.user)
    }

    /// Re-fetch the viewer and sync the session's identity fields. Used
    /// after a vault restore, where only tokens survived the reload.
    pub async fn me(&self) -> Result<AuthUser, ClientError> {
        let user: AuthUser = self.get("/api/auth/me").await?;
        self.session().set_viewer(&user);
        Ok(user)
    }

    /// Best-effort server-side logout, then clear the local session. The
    /// local session is cleared even when the server call fails.
    pub async fn logout(&self) {
        let _ = self.post_unit("/api/auth/logout", &serde_json::json!({})).await;
        self.session().logout();
    }

    // ── Schools ──

    pub async fn schools(&self) -> Result<Vec<School>, ClientError> {
        self.get("/api/schools").await
    }

    pub async fn create_school(&self, req: &CreateSchoolRequest) -> Result<School, ClientError> {
        self.post("/api/schools", req).await
    }

    pub async fn delete_school(&self, id: i64) -> Result<(), ClientError> {
        self.delete(&format!("/api/schools/{id}")).await
    }

    // ── Posts & comments ──

    pub async fn post_detail(&self, id: i64) -> Result<Post, ClientError> {
        self.get(&format!("/api/posts/{id}")).await
    }

    pub async fn post_comments(&self, post_id: i64) -> Result<Vec<CommentRecord>, ClientError> {
        self.get(&format!("/api/posts/{post_id}/comments")).await
    }

    pub async fn recent_posts(&self, school_id: Option<i64>) -> Result<Vec<Post>, ClientError> {
        match school_id {
            Some(id) => self.get(&format!("/api/posts?school_id={id}")).await,
            None => self.get("/api/posts").await,
        }
    }

    // ── Moderation ──

    pub async fn reports(&self) -> Result<Vec<ReportRecord>, ClientError> {
        self.get("/api/admin/reports").await
    }

    pub async fn resolve_report(&self, id: i64) -> Result<ReportRecord, ClientError> {
        self.post(&format!("/api/admin/reports/{id}/resolve"), &serde_json::json!({}))
            .await
    }

    pub async fn flagged_comments(&self) -> Result<Vec<CommentRecord>, ClientError> {
        self.get("/api/admin/comments").await
    }

    pub async fn remove_comment(&self, id: i64) -> Result<CommentRecord, ClientError> {
        self.post(&format!("/api/admin/comments/{id}/remove"), &serde_json::json!({}))
            .await
    }

    pub async fn restore_comment(&self, id: i64) -> Result<CommentRecord, ClientError> {
        self.post(&format!("/api/admin/comments/{id}/restore"), &serde_json::json!({}))
            .await
    }

    // ── Support tickets ──

    pub async fn support_tickets(&self) -> Result<Vec<SupportTicket>, ClientError> {
        self.get("/api/admin/support").await
    }

    pub async fn update_ticket(
        &self,
        id: i64,
        req: &UpdateTicketRequest,
    ) -> Result<SupportTicket, ClientError> {
        self.put(&format!("/api/admin/support/{id}"), req).await
    }

    // ── Chat ──

    pub async fn chat_rooms(&self) -> Result<Vec<ChatRoom>, ClientError> {
        self.get("/api/chat/rooms").await
    }

    pub async fn create_room(&self, req: &CreateRoomRequest) -> Result<ChatRoom, ClientError> {
        self.post("/api/chat/rooms", req).await
    }

    pub async fn chat_messages(&self, room_id: i64) -> Result<Vec<ChatMessage>, ClientError> {
        self.get(&format!("/api/chat/rooms/{room_id}/messages")).await
    }

    pub async fn post_message(
        &self,
        req: &PostMessageRequest,
    ) -> Result<ChatMessage, ClientError> {
        self.post(&format!("/api/chat/rooms/{}/messages", req.room_id), req)
            .await
    }

    pub async fn chat_votes(&self, room_id: i64) -> Result<Vec<ChatVote>, ClientError> {
        self.get(&format!("/api/chat/rooms/{room_id}/votes")).await
    }

    pub async fn cast_vote(&self, req: &CastVoteRequest) -> Result<ChatVote, ClientError> {
        self.post(&format!("/api/chat/votes/{}/cast", req.vote_id), req)
            .await
    }

    /// Poll the realtime channel. Returns the events that arrived after
    /// `cursor`, plus the cursor to resume from; empty on timeout.
    pub async fn poll_chat_events(&self, cursor: i64) -> Result<ChatEventBatch, ClientError> {
        self.get(&format!("/api/chat/events?after={cursor}")).await
    }

    // ── Events ──

    pub async fn events(&self) -> Result<Vec<CampusEvent>, ClientError> {
        self.get("/api/events").await
    }

    pub async fn create_event(&self, req: &CreateEventRequest) -> Result<CampusEvent, ClientError> {
        self.post("/api/events", req).await
    }

    pub async fn delete_event(&self, id: i64) -> Result<(), ClientError> {
        self.delete(&format!("/api/events/{id}")).await
    }

    // ── Instagram ──

    pub async fn instagram_accounts(&self) -> Result<Vec<InstagramAccount>, ClientError> {
        self.get("/api/admin/instagram").await
    }

    pub async fn link_instagram(
        &self,
        req: &LinkInstagramRequest,
    ) -> Result<InstagramAccount, ClientError> {
        self.post("/api/admin/instagram", req).await
    }

    pub async fn unlink_instagram(&self, id: i64) -> Result<(), ClientError> {
        self.delete(&format!("/api/admin/instagram/{id}")).await
    }

    // ── Platform ──

    pub async fn platform_status(&self) -> Result<PlatformStatus, ClientError> {
        self.get("/api/platform/status").await
    }

    pub async fn set_platform_mode(
        &self,
        req: &SetPlatformModeRequest,
    ) -> Result<PlatformStatus, ClientError> {
        self.put("/api/platform/mode", req).await
    }

    pub async fn server_status(&self) -> Result<ServerStatus, ClientError> {
        self.get("/api/admin/server-status").await
    }
}
