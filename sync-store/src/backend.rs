//! Backend abstraction for media-sync.
//!
//! The backend is the external process that owns the actual network
//! transport and OS-level hotkey capture. The store only issues commands to
//! it and registers callbacks for its pushed notifications.
//!
//! # Design
//!
//! The trait is async and command-oriented:
//! - `connect()` / `disconnect()` manage the session link
//! - `send_toggle()` / `send_ping()` are one-shot signals
//! - `set_hotkey()` registers a global shortcut (empty string clears it)
//! - `on_status()` / `on_sync_event()` register long-lived notification
//!   handlers; each channel delivers in arrival order, with no ordering
//!   guarantee between the two channels

mod mock;

pub use mock::{MockBackend, MockCommand};

use async_trait::async_trait;
use media_sync_types::{ConnectionStatus, EventPayload};
use thiserror::Error;

/// Callback invoked for each pushed connection-status snapshot.
pub type StatusHandler = Box<dyn Fn(ConnectionStatus) + Send + Sync>;

/// Callback invoked for each pushed sync event.
pub type EventHandler = Box<dyn Fn(EventPayload) + Send + Sync>;

/// Backend command errors.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The connect command failed.
    #[error("connect failed: {0}")]
    ConnectFailed(String),

    /// A fire-and-forget command failed.
    #[error("command failed: {0}")]
    CommandFailed(String),

    /// The hotkey was rejected (malformed or already bound).
    #[error("hotkey rejected: {0}")]
    HotkeyRejected(String),

    /// Registering a notification handler failed.
    #[error("subscribe failed: {0}")]
    SubscribeFailed(String),
}

/// Command and notification surface of the native backend.
///
/// Implementations bridge to the actual host (Tauri invoke/listen, an IPC
/// socket, or [`MockBackend`] for tests).
#[async_trait]
pub trait Backend: Send + Sync {
    /// Connect to the sync session at `server_url`, joining `room`.
    ///
    /// Resolution only covers command delivery; the connection outcome is
    /// reported asynchronously through the status channel.
    async fn connect(&self, server_url: &str, room: &str) -> Result<(), BackendError>;

    /// Tear down the current session link.
    async fn disconnect(&self) -> Result<(), BackendError>;

    /// Send a one-shot playback toggle to the session peers.
    async fn send_toggle(&self) -> Result<(), BackendError>;

    /// Send a latency-probe ping over the session link.
    async fn send_ping(&self) -> Result<(), BackendError>;

    /// Register the given global shortcut, replacing any previous binding.
    ///
    /// An empty shortcut clears the binding. Rejection of an invalid or
    /// already-bound shortcut surfaces as [`BackendError::HotkeyRejected`].
    async fn set_hotkey(&self, shortcut: &str) -> Result<(), BackendError>;

    /// Register a handler for pushed connection-status snapshots.
    async fn on_status(&self, handler: StatusHandler) -> Result<(), BackendError>;

    /// Register a handler for pushed sync events.
    async fn on_sync_event(&self, handler: EventHandler) -> Result<(), BackendError>;
}
