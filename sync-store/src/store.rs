//! SyncStore - the state manager for media playback synchronization.
//!
//! This module provides [`SyncStore`], the single long-lived state object
//! backing the sync feature: settings, connection status, and the bounded
//! event log, wired to a [`Backend`] collaborator.
//!
//! # Architecture
//!
//! ```text
//! UI actions → SyncStore → Backend commands → native process
//!                  ↑
//!       pushed notifications (connection-status, sync-event)
//! ```
//!
//! The store is a passive mirror of the backend's link state: connection
//! outcomes are never decided locally, only reflected when the backend
//! pushes a new [`ConnectionStatus`] snapshot.

use std::sync::{Arc, Mutex};

use media_sync_types::{ConnectionStatus, Direction, EventPayload, LinkState, Settings, SyncEvent};
use tracing::error;

use crate::backend::{Backend, BackendError};
use crate::log::EventLog;
use crate::persist::{load_settings, save_settings, SettingsStore};

/// Mutable state shared with the notification handlers.
struct StoreState {
    settings: Settings,
    status: ConnectionStatus,
    events: EventLog,
}

/// Client-side state store for the media-sync feature.
///
/// One instance lives for the whole application run; construct it once and
/// pass it by reference to all consumers. There is no teardown: handlers
/// registered by [`init`](SyncStore::init) stay live until the process ends.
///
/// Settings are loaded once at construction, falling back to generated
/// defaults if the persisted blob is absent or unusable.
pub struct SyncStore<B: Backend, S: SettingsStore> {
    backend: B,
    persistence: S,
    state: Arc<Mutex<StoreState>>,
}

impl<B: Backend, S: SettingsStore> SyncStore<B, S> {
    /// Create a new store, loading persisted settings.
    pub fn new(backend: B, persistence: S) -> Self {
        let settings = load_settings(&persistence);
        Self {
            backend,
            persistence,
            state: Arc::new(Mutex::new(StoreState {
                settings,
                status: ConnectionStatus::default(),
                events: EventLog::new(),
            })),
        }
    }

    // --- Settings ---

    /// Snapshot of the current settings.
    pub fn settings(&self) -> Settings {
        self.state.lock().unwrap().settings.clone()
    }

    /// Update the connection endpoint in memory.
    ///
    /// Not persisted until [`persist_settings`](SyncStore::persist_settings)
    /// or a persisting operation such as [`connect`](SyncStore::connect).
    pub fn set_server_url(&self, server_url: &str) {
        self.state.lock().unwrap().settings.server_url = server_url.to_string();
    }

    /// Update the room identifier in memory.
    pub fn set_room(&self, room: &str) {
        self.state.lock().unwrap().settings.room = room.to_string();
    }

    /// Update the auto-connect flag in memory.
    pub fn set_auto_connect(&self, auto_connect: bool) {
        self.state.lock().unwrap().settings.auto_connect = auto_connect;
    }

    /// Write the current settings to the persistence substrate.
    pub fn persist_settings(&self) {
        let settings = self.settings();
        save_settings(&self.persistence, &settings);
    }

    // --- Connection state ---

    /// The last backend-reported connection status.
    pub fn status(&self) -> ConnectionStatus {
        self.state.lock().unwrap().status.clone()
    }

    /// True iff the link state is exactly `Connected`.
    pub fn is_connected(&self) -> bool {
        self.state.lock().unwrap().status.status == LinkState::Connected
    }

    /// True iff the link state is `Connecting` or `Reconnecting`.
    pub fn is_connecting(&self) -> bool {
        matches!(
            self.state.lock().unwrap().status.status,
            LinkState::Connecting | LinkState::Reconnecting
        )
    }

    // --- Event log ---

    /// Snapshot of the retained events, oldest first.
    pub fn events(&self) -> Vec<SyncEvent> {
        self.state.lock().unwrap().events.to_vec()
    }

    /// Append an event to the log with the given direction.
    pub fn add_event(&self, payload: EventPayload, direction: Direction) {
        let event = SyncEvent {
            event_type: payload.event_type,
            timestamp: payload.timestamp,
            client_id: payload.client_id,
            position: payload.position,
            direction,
        };
        self.state.lock().unwrap().events.push(event);
    }

    // --- Backend commands ---

    /// Persist settings and ask the backend to connect.
    ///
    /// Failures are logged and swallowed; the status field is left alone
    /// and only changes when the backend pushes a new snapshot.
    pub async fn connect(&self) {
        self.persist_settings();
        let (server_url, room) = {
            let state = self.state.lock().unwrap();
            (
                state.settings.server_url.clone(),
                state.settings.room.clone(),
            )
        };
        if let Err(e) = self.backend.connect(&server_url, &room).await {
            error!("Failed to connect: {}", e);
        }
    }

    /// Ask the backend to disconnect. Failures are logged and swallowed.
    pub async fn disconnect(&self) {
        if let Err(e) = self.backend.disconnect().await {
            error!("Failed to disconnect: {}", e);
        }
    }

    /// Send a one-shot playback toggle. Failures are logged and swallowed.
    pub async fn send_toggle(&self) {
        if let Err(e) = self.backend.send_toggle().await {
            error!("Failed to send toggle: {}", e);
        }
    }

    /// Send a latency-probe ping. Failures are logged and swallowed.
    pub async fn send_ping(&self) {
        if let Err(e) = self.backend.send_ping().await {
            error!("Failed to send ping: {}", e);
        }
    }

    /// Register a global hotkey with the backend.
    ///
    /// On success the local hotkey value is updated and persisted. On
    /// failure the error is logged and returned so the caller can reject
    /// the attempted binding; the local value stays unchanged. This is the
    /// only command whose failure is surfaced.
    pub async fn set_hotkey(&self, shortcut: &str) -> Result<(), BackendError> {
        if let Err(e) = self.backend.set_hotkey(shortcut).await {
            error!("Failed to set hotkey: {}", e);
            return Err(e);
        }
        self.state.lock().unwrap().settings.hotkey = shortcut.to_string();
        self.persist_settings();
        Ok(())
    }

    // --- Bootstrap ---

    /// Wire backend notifications into local state and restore settings.
    ///
    /// Runs once at store activation:
    /// 1. Subscribe to connection-status pushes; each replaces the whole
    ///    status snapshot.
    /// 2. Subscribe to sync-event pushes; direction is derived from the
    ///    presence of a client id and the event appended to the log.
    /// 3. Re-register a restored non-empty hotkey (failure logged only).
    /// 4. Auto-connect if enabled.
    ///
    /// Subscriptions are established first so traffic triggered by the
    /// connect attempt is not missed. Subscription failures are logged and
    /// swallowed so bootstrap always completes.
    pub async fn init(&self) {
        let state = Arc::clone(&self.state);
        let subscribed = self
            .backend
            .on_status(Box::new(move |status| {
                state.lock().unwrap().status = status;
            }))
            .await;
        if let Err(e) = subscribed {
            error!("Failed to subscribe to connection status: {}", e);
        }

        let state = Arc::clone(&self.state);
        let subscribed = self
            .backend
            .on_sync_event(Box::new(move |payload| {
                state.lock().unwrap().events.push(SyncEvent::from_payload(payload));
            }))
            .await;
        if let Err(e) = subscribed {
            error!("Failed to subscribe to sync events: {}", e);
        }

        let hotkey = self.state.lock().unwrap().settings.hotkey.clone();
        if !hotkey.is_empty() {
            if let Err(e) = self.backend.set_hotkey(&hotkey).await {
                error!("Failed to restore hotkey: {}", e);
            }
        }

        let auto_connect = self.state.lock().unwrap().settings.auto_connect;
        if auto_connect {
            self.connect().await;
        }
    }

    /// Get a reference to the backend (for testing).
    pub fn backend(&self) -> &B {
        &self.backend
    }
}
