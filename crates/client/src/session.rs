use shared_types::{AuthUser, Role, TokenPair};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

/// Keys used in the durable vault. All advisory caches — the platform may
/// clear them at any time and the client must cope.
pub mod vault_keys {
    pub const ACCESS_TOKEN: &str = "forumkit.access_token";
    pub const REFRESH_TOKEN: &str = "forumkit.refresh_token";
    pub const USERNAME: &str = "forumkit.username";
    pub const QUIET_TOASTS: &str = "forumkit.quiet_toasts";
    pub const SCHOOL_FILTER: &str = "forumkit.school_filter";
    pub const MY_POSTS: &str = "forumkit.my_posts";
}

/// Durable client-side key/value storage (browser local storage, or an
/// in-memory map in tests and fresh sessions).
pub trait TokenVault: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Vault that forgets everything when dropped. Used by tests and as the
/// fallback when no platform storage is available.
#[derive(Default)]
pub struct MemoryVault {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryVault {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenVault for MemoryVault {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// In-memory session state. Written only by `SessionStore` itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub username: String,
    pub role: Role,
    pub school_id: Option<i64>,
    /// Whether durable storage mirrors this session.
    pub remember: bool,
}

/// Single source of truth for the viewer's identity.
///
/// Cloneable handle; all clones share one state. The login/refresh/logout
/// flows are the only writers — every other component is a passive reader.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    state: RwLock<Option<Session>>,
    vault: Arc<dyn TokenVault>,
}

impl SessionStore {
    pub fn new(vault: Arc<dyn TokenVault>) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                state: RwLock::new(None),
                vault,
            }),
        }
    }

    /// Fresh store over a throwaway vault.
    pub fn ephemeral() -> Self {
        Self::new(Arc::new(MemoryVault::new()))
    }

    /// Rehydrate a remembered session from the vault, if one exists.
    ///
    /// Only credentials and the username survive a reload; the role is
    /// unknown until the viewer is re-fetched, so it starts as Guest.
    /// Returns true when a session was restored.
    pub fn restore(&self) -> bool {
        let vault = &self.inner.vault;
        let (access, refresh) = match (
            vault.get(vault_keys::ACCESS_TOKEN),
            vault.get(vault_keys::REFRESH_TOKEN),
        ) {
            (Some(a), Some(r)) => (a, r),
            _ => return false,
        };
        let username = vault.get(vault_keys::USERNAME).unwrap_or_default();

        let mut state = self.write_state();
        *state = Some(Session {
            access_token: access,
            refresh_token: refresh,
            username,
            role: Role::Guest,
            school_id: None,
            remember: true,
        });
        tracing::debug!("session restored from vault");
        true
    }

    /// Establish a session from a successful login.
    ///
    /// Tokens always land in memory; durable storage is written only when
    /// `remember` is set.
    pub fn login(&self, tokens: TokenPair, viewer: &AuthUser, remember: bool) {
        if remember {
            let vault = &self.inner.vault;
            vault.set(vault_keys::ACCESS_TOKEN, &tokens.access_token);
            vault.set(vault_keys::REFRESH_TOKEN, &tokens.refresh_token);
            vault.set(vault_keys::USERNAME, &viewer.username);
        }

        let mut state = self.write_state();
        *state = Some(Session {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            username: viewer.username.clone(),
            role: viewer.role(),
            school_id: viewer.school_id,
            remember,
        });
        tracing::debug!(username = %viewer.username, role = viewer.role().as_str(), "logged in");
    }

    /// Update identity fields after re-fetching the viewer (e.g. following
    /// a vault restore, where only tokens survived).
    pub fn set_viewer(&self, viewer: &AuthUser) {
        let mut state = self.write_state();
        if let Some(session) = state.as_mut() {
            session.username = viewer.username.clone();
            session.role = viewer.role();
            session.school_id = viewer.school_id;
        }
    }

    /// Swap in a refreshed token pair. Called only by the transport helper.
    pub fn apply_refresh(&self, tokens: TokenPair) {
        let mut state = self.write_state();
        if let Some(session) = state.as_mut() {
            session.access_token = tokens.access_token.clone();
            session.refresh_token = tokens.refresh_token.clone();
            if session.remember {
                let vault = &self.inner.vault;
                vault.set(vault_keys::ACCESS_TOKEN, &tokens.access_token);
                vault.set(vault_keys::REFRESH_TOKEN, &tokens.refresh_token);
            }
        }
    }

    /// Clear memory and durable storage. Terminal: there is no undo.
    pub fn logout(&self) {
        let vault = &self.inner.vault;
        vault.remove(vault_keys::ACCESS_TOKEN);
        vault.remove(vault_keys::REFRESH_TOKEN);
        vault.remove(vault_keys::USERNAME);

        let mut state = self.write_state();
        if state.take().is_some() {
            tracing::debug!("logged out");
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.read_state().is_some()
    }

    pub fn role(&self) -> Role {
        self.read_state().as_ref().map(|s| s.role).unwrap_or_default()
    }

    pub fn username(&self) -> Option<String> {
        self.read_state().as_ref().map(|s| s.username.clone())
    }

    pub fn school_id(&self) -> Option<i64> {
        self.read_state().as_ref().and_then(|s| s.school_id)
    }

    pub fn access_token(&self) -> Option<String> {
        self.read_state().as_ref().map(|s| s.access_token.clone())
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.read_state().as_ref().map(|s| s.refresh_token.clone())
    }

    pub fn snapshot(&self) -> Option<Session> {
        self.read_state().clone()
    }

    // ── Advisory preferences (always durable, independent of `remember`) ──

    pub fn quiet_toasts(&self) -> bool {
        self.inner
            .vault
            .get(vault_keys::QUIET_TOASTS)
            .map(|v| v == "true")
            .unwrap_or(false)
    }

    pub fn set_quiet_toasts(&self, quiet: bool) {
        self.inner
            .vault
            .set(vault_keys::QUIET_TOASTS, if quiet { "true" } else { "false" });
    }

    pub fn school_filter(&self) -> Option<i64> {
        self.inner
            .vault
            .get(vault_keys::SCHOOL_FILTER)
            .and_then(|v| v.parse().ok())
    }

    pub fn set_school_filter(&self, school_id: Option<i64>) {
        match school_id {
            Some(id) => self.inner.vault.set(vault_keys::SCHOOL_FILTER, &id.to_string()),
            None => self.inner.vault.remove(vault_keys::SCHOOL_FILTER),
        }
    }

    /// Ids of posts the viewer authored on this device.
    pub fn my_posts(&self) -> Vec<i64> {
        self.inner
            .vault
            .get(vault_keys::MY_POSTS)
            .map(|v| v.split(',').filter_map(|s| s.parse().ok()).collect())
            .unwrap_or_default()
    }

    pub fn remember_my_post(&self, post_id: i64) {
        let mut ids = self.my_posts();
        if !ids.contains(&post_id) {
            ids.push(post_id);
            let joined = ids
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(",");
            self.inner.vault.set(vault_keys::MY_POSTS, &joined);
        }
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, Option<Session>> {
        self.inner.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_state(&self) -> std::sync::RwLockWriteGuard<'_, Option<Session>> {
        self.inner.state.write().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewer(role: &str) -> AuthUser {
        AuthUser {
            id: 1,
            username: "mika".into(),
            display_name: "Mika".into(),
            role: role.into(),
            school_id: Some(4),
            avatar_url: None,
        }
    }

    fn tokens() -> TokenPair {
        TokenPair {
            access_token: "access-1".into(),
            refresh_token: "refresh-1".into(),
            token_type: "Bearer".into(),
            expires_in: 900,
        }
    }

    #[test]
    fn login_populates_memory_state() {
        let store = SessionStore::ephemeral();
        assert!(!store.is_logged_in());

        store.login(tokens(), &viewer("campus_admin"), false);
        assert!(store.is_logged_in());
        assert_eq!(store.role(), Role::CampusAdmin);
        assert_eq!(store.username().as_deref(), Some("mika"));
        assert_eq!(store.school_id(), Some(4));
    }

    #[test]
    fn remember_true_survives_simulated_reload() {
        let vault: Arc<dyn TokenVault> = Arc::new(MemoryVault::new());
        let store = SessionStore::new(vault.clone());
        store.login(tokens(), &viewer("user"), true);

        // Simulated reload: a brand-new store over the same vault.
        let reloaded = SessionStore::new(vault);
        assert!(reloaded.restore());
        assert!(reloaded.is_logged_in());
        assert_eq!(reloaded.username().as_deref(), Some("mika"));
        // Role is unknown until the viewer is re-fetched.
        assert_eq!(reloaded.role(), Role::Guest);
    }

    #[test]
    fn remember_false_does_not_survive_reload() {
        let vault: Arc<dyn TokenVault> = Arc::new(MemoryVault::new());
        let store = SessionStore::new(vault.clone());
        store.login(tokens(), &viewer("user"), false);
        assert!(store.is_logged_in());

        let reloaded = SessionStore::new(vault);
        assert!(!reloaded.restore());
        assert!(!reloaded.is_logged_in());
    }

    #[test]
    fn logout_clears_memory_and_vault() {
        let vault: Arc<dyn TokenVault> = Arc::new(MemoryVault::new());
        let store = SessionStore::new(vault.clone());
        store.login(tokens(), &viewer("admin"), true);
        store.logout();

        assert!(!store.is_logged_in());
        assert_eq!(store.role(), Role::Guest);
        let reloaded = SessionStore::new(vault);
        assert!(!reloaded.restore());
    }

    #[test]
    fn apply_refresh_rotates_tokens_and_vault_mirror() {
        let vault: Arc<dyn TokenVault> = Arc::new(MemoryVault::new());
        let store = SessionStore::new(vault.clone());
        store.login(tokens(), &viewer("user"), true);

        store.apply_refresh(TokenPair {
            access_token: "access-2".into(),
            refresh_token: "refresh-2".into(),
            token_type: "Bearer".into(),
            expires_in: 900,
        });
        assert_eq!(store.access_token().as_deref(), Some("access-2"));
        assert_eq!(
            vault.get(vault_keys::ACCESS_TOKEN).as_deref(),
            Some("access-2")
        );
    }

    #[test]
    fn set_viewer_fills_identity_after_restore() {
        let vault: Arc<dyn TokenVault> = Arc::new(MemoryVault::new());
        let store = SessionStore::new(vault.clone());
        store.login(tokens(), &viewer("cross_moderator"), true);

        let reloaded = SessionStore::new(vault);
        reloaded.restore();
        reloaded.set_viewer(&viewer("cross_moderator"));
        assert_eq!(reloaded.role(), Role::CrossModerator);
    }

    #[test]
    fn preferences_are_durable_regardless_of_remember() {
        let vault: Arc<dyn TokenVault> = Arc::new(MemoryVault::new());
        let store = SessionStore::new(vault.clone());
        store.login(tokens(), &viewer("user"), false);
        store.set_quiet_toasts(true);
        store.set_school_filter(Some(9));
        store.remember_my_post(41);
        store.remember_my_post(42);
        store.remember_my_post(41);

        let reloaded = SessionStore::new(vault);
        assert!(reloaded.quiet_toasts());
        assert_eq!(reloaded.school_filter(), Some(9));
        assert_eq!(reloaded.my_posts(), vec![41, 42]);
    }
}
