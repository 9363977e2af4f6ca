//! # sync-store
//!
//! Client-side state store for media playback synchronization.
//!
//! This crate tracks the connection lifecycle to a sync session, records a
//! bounded history of inbound/outbound sync events, persists user settings,
//! and relays global-hotkey registration to a native backend. It owns no
//! transport: the backend process owns the network link and pushes status
//! and event notifications into the store.
//!
//! ## Architecture
//!
//! ```text
//! UI layer → SyncStore → Backend (commands) → native process
//!                ↑
//!          notifications (connection-status, sync-event)
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use media_sync_store::{SyncStore, MemoryStore, MockBackend};
//!
//! let store = SyncStore::new(MockBackend::new(), MemoryStore::new());
//! store.init().await;
//!
//! store.connect().await;
//! store.set_hotkey("ctrl+alt+s").await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod log;
pub mod persist;
pub mod store;

pub use backend::{Backend, BackendError, EventHandler, MockBackend, MockCommand, StatusHandler};
pub use log::{EventLog, MAX_EVENTS};
pub use persist::{FileStore, MemoryStore, SettingsStore, SETTINGS_KEY};
pub use store::SyncStore;
