use client::{Access, AdminAction, ApiClient, EventHub};
use dioxus::prelude::*;
use shared_types::{AuthUser, Role};

/// Reactive mirror of the viewer's identity.
///
/// The `client::SessionStore` inside `ApiClient` is the engine (tokens,
/// vault, refresh); this signal exists so components re-render when the
/// viewer changes. The login/logout flows write both.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    pub current_user: Signal<Option<AuthUser>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn set_user(&mut self, user: AuthUser) {
        self.current_user.set(Some(user));
    }

    pub fn clear(&mut self) {
        self.current_user.set(None);
    }
}

/// Hook to access the reactive session state.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

/// The viewer's role, Guest when signed out.
pub fn use_role() -> Role {
    let session = use_session();
    let binding = session.current_user.read();
    binding.as_ref().map(|u| u.role()).unwrap_or_default()
}

/// Capability lookup for the current viewer.
pub fn use_access(action: AdminAction) -> Access {
    client::access(use_role(), action)
}

/// Hook to reach the shared API client.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Hook to reach the realtime event hub.
pub fn use_hub() -> EventHub {
    use_context::<EventHub>()
}
