//! Mock backend for testing.
//!
//! Records issued commands and lets tests drive the notification channels
//! by emitting status snapshots and sync events.

use super::{Backend, BackendError, EventHandler, StatusHandler};
use async_trait::async_trait;
use media_sync_types::{ConnectionStatus, EventPayload};
use std::sync::{Arc, Mutex};

/// A backend command captured by [`MockBackend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCommand {
    /// `connect` with the given endpoint and room.
    Connect {
        /// Endpoint passed to the command.
        server_url: String,
        /// Room passed to the command.
        room: String,
    },
    /// `disconnect`.
    Disconnect,
    /// `send_toggle`.
    SendToggle,
    /// `send_ping`.
    SendPing,
    /// `set_hotkey` with the given shortcut.
    SetHotkey(String),
}

#[derive(Default)]
struct MockBackendInner {
    commands: Vec<MockCommand>,
    status_handlers: Vec<StatusHandler>,
    event_handlers: Vec<EventHandler>,
    fail_next_connect: Option<String>,
    fail_next_command: Option<String>,
    fail_next_hotkey: Option<String>,
}

/// Mock backend for testing.
///
/// Captures every issued command for verification and invokes registered
/// notification handlers synchronously from `emit_status` / `emit_event`.
#[derive(Default)]
pub struct MockBackend {
    inner: Arc<Mutex<MockBackendInner>>,
}

impl MockBackend {
    /// Create a new mock backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all commands issued so far, in order.
    pub fn commands(&self) -> Vec<MockCommand> {
        let inner = self.inner.lock().unwrap();
        inner.commands.clone()
    }

    /// Get the last issued command.
    pub fn last_command(&self) -> Option<MockCommand> {
        let inner = self.inner.lock().unwrap();
        inner.commands.last().cloned()
    }

    /// Cause the next `connect()` to fail with the given error.
    pub fn fail_next_connect(&self, error: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.fail_next_connect = Some(error.to_string());
    }

    /// Cause the next fire-and-forget command to fail with the given error.
    ///
    /// Applies to `disconnect`, `send_toggle` and `send_ping`.
    pub fn fail_next_command(&self, error: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.fail_next_command = Some(error.to_string());
    }

    /// Cause the next `set_hotkey()` to be rejected with the given error.
    pub fn fail_next_hotkey(&self, error: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.fail_next_hotkey = Some(error.to_string());
    }

    /// Push a connection-status snapshot to all registered handlers.
    pub fn emit_status(&self, status: ConnectionStatus) {
        let inner = self.inner.lock().unwrap();
        for handler in &inner.status_handlers {
            handler(status.clone());
        }
    }

    /// Push a sync event to all registered handlers.
    pub fn emit_event(&self, payload: EventPayload) {
        let inner = self.inner.lock().unwrap();
        for handler in &inner.event_handlers {
            handler(payload.clone());
        }
    }

    /// Number of registered status handlers.
    pub fn status_handler_count(&self) -> usize {
        let inner = self.inner.lock().unwrap();
        inner.status_handlers.len()
    }

    /// Number of registered event handlers.
    pub fn event_handler_count(&self) -> usize {
        let inner = self.inner.lock().unwrap();
        inner.event_handlers.len()
    }
}

impl Clone for MockBackend {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn connect(&self, server_url: &str, room: &str) -> Result<(), BackendError> {
        let mut inner = self.inner.lock().unwrap();

        if let Some(error) = inner.fail_next_connect.take() {
            return Err(BackendError::ConnectFailed(error));
        }

        inner.commands.push(MockCommand::Connect {
            server_url: server_url.to_string(),
            room: room.to_string(),
        });
        Ok(())
    }

    async fn disconnect(&self) -> Result<(), BackendError> {
        let mut inner = self.inner.lock().unwrap();

        if let Some(error) = inner.fail_next_command.take() {
            return Err(BackendError::CommandFailed(error));
        }

        inner.commands.push(MockCommand::Disconnect);
        Ok(())
    }

    async fn send_toggle(&self) -> Result<(), BackendError> {
        let mut inner = self.inner.lock().unwrap();

        if let Some(error) = inner.fail_next_command.take() {
            return Err(BackendError::CommandFailed(error));
        }

        inner.commands.push(MockCommand::SendToggle);
        Ok(())
    }

    async fn send_ping(&self) -> Result<(), BackendError> {
        let mut inner = self.inner.lock().unwrap();

        if let Some(error) = inner.fail_next_command.take() {
            return Err(BackendError::CommandFailed(error));
        }

        inner.commands.push(MockCommand::SendPing);
        Ok(())
    }

    async fn set_hotkey(&self, shortcut: &str) -> Result<(), BackendError> {
        let mut inner = self.inner.lock().unwrap();

        if let Some(error) = inner.fail_next_hotkey.take() {
            return Err(BackendError::HotkeyRejected(error));
        }

        inner
            .commands
            .push(MockCommand::SetHotkey(shortcut.to_string()));
        Ok(())
    }

    async fn on_status(&self, handler: StatusHandler) -> Result<(), BackendError> {
        let mut inner = self.inner.lock().unwrap();
        inner.status_handlers.push(handler);
        Ok(())
    }

    async fn on_sync_event(&self, handler: EventHandler) -> Result<(), BackendError> {
        let mut inner = self.inner.lock().unwrap();
        inner.event_handlers.push(handler);
        Ok(())
    }
}
