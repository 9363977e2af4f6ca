//! Connection status types for media-sync.
//!
//! The backend owns the actual link to the sync session and reports its
//! state through pushed [`ConnectionStatus`] values. The store is a passive
//! mirror: it never transitions the state locally except to its initial
//! default.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The link state reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LinkState {
    /// No session.
    #[default]
    Disconnected,
    /// Initial connection attempt in progress.
    Connecting,
    /// Session established.
    Connected,
    /// Connection lost, backend is retrying.
    Reconnecting,
}

impl fmt::Display for LinkState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkState::Disconnected => write!(f, "disconnected"),
            LinkState::Connecting => write!(f, "connecting"),
            LinkState::Connected => write!(f, "connected"),
            LinkState::Reconnecting => write!(f, "reconnecting"),
        }
    }
}

/// A backend-reported snapshot of the sync link.
///
/// Each pushed snapshot replaces the previous one wholesale; optional
/// fields absent on a later message are not carried over from earlier ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ConnectionStatus {
    /// Current link state.
    pub status: LinkState,
    /// Session/room identifier echoed by the backend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    /// Measured round-trip latency.
    #[serde(rename = "latencyMs", skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u32>,
    /// Reconnection attempt counter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempt: Option<u32>,
}

impl ConnectionStatus {
    /// A bare snapshot with the given state and no optional fields.
    pub fn new(status: LinkState) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    /// A connected snapshot for the given room.
    pub fn connected(room: &str) -> Self {
        Self {
            status: LinkState::Connected,
            room: Some(room.to_string()),
            ..Self::default()
        }
    }

    /// A reconnecting snapshot with the given attempt counter.
    pub fn reconnecting(attempt: u32) -> Self {
        Self {
            status: LinkState::Reconnecting,
            attempt: Some(attempt),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_disconnected_with_no_fields() {
        let status = ConnectionStatus::default();
        assert_eq!(status.status, LinkState::Disconnected);
        assert!(status.room.is_none());
        assert!(status.latency_ms.is_none());
        assert!(status.attempt.is_none());
    }

    #[test]
    fn state_serializes_lowercase() {
        let json = serde_json::to_value(ConnectionStatus::new(LinkState::Reconnecting)).unwrap();
        assert_eq!(json["status"], "reconnecting");
    }

    #[test]
    fn latency_uses_wire_name() {
        let status = ConnectionStatus {
            status: LinkState::Connected,
            room: Some("abc".into()),
            latency_ms: Some(23),
            attempt: None,
        };

        let json = serde_json::to_value(&status).unwrap();

        assert_eq!(json["latencyMs"], 23);
        assert_eq!(json["room"], "abc");
        assert!(json.get("attempt").is_none());
    }

    #[test]
    fn deserializes_minimal_snapshot() {
        let status: ConnectionStatus =
            serde_json::from_str(r#"{"status":"disconnected"}"#).unwrap();
        assert_eq!(status, ConnectionStatus::default());
    }

    #[test]
    fn reconnecting_constructor_carries_attempt() {
        let status = ConnectionStatus::reconnecting(3);
        assert_eq!(status.status, LinkState::Reconnecting);
        assert_eq!(status.attempt, Some(3));
        assert!(status.room.is_none());
    }

    #[test]
    fn connected_constructor_carries_room() {
        let status = ConnectionStatus::connected("movie-night");
        assert_eq!(status.status, LinkState::Connected);
        assert_eq!(status.room.as_deref(), Some("movie-night"));
    }
}
