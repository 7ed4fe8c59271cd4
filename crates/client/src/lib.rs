//! Headless client core for the ForumKit front-end.
//!
//! Everything here is UI-framework-free: the session store, the authed
//! transport with its single refresh-and-retry, the role capability table,
//! the admin menu registry, chat feed state, and the realtime event hub.
//! The `app` crate wires these into Dioxus components; the `tests` crate
//! exercises them against a mock HTTP API.

pub mod api;
pub mod chat;
pub mod config;
pub mod error;
pub mod menu;
pub mod policy;
pub mod session;
pub mod socket;
pub mod transport;

pub use chat::{upsert_by_id, ChatFeed, Keyed};
pub use config::ClientConfig;
pub use error::ClientError;
pub use menu::{visible_entries, AdminEntry, MenuIcon, ADMIN_ENTRIES};
pub use policy::{access, can, can_set_platform_mode, Access, AdminAction};
pub use session::{vault_keys, MemoryVault, SessionStore, TokenVault};
pub use socket::{EventHub, Subscription};
pub use transport::ApiClient;
