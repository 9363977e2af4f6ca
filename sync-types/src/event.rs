//! Sync event types for media-sync.
//!
//! A sync event is a single playback-affecting action (play, pause, seek,
//! toggle) exchanged between peers. The backend pushes events as
//! [`EventPayload`] values; the store turns them into [`SyncEvent`] records
//! by deriving the direction from the presence of a client id.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a sync event originated locally or was received from a peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Received from a peer (payload carried a client id).
    In,
    /// Originated locally (no client id).
    Out,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::In => write!(f, "in"),
            Direction::Out => write!(f, "out"),
        }
    }
}

/// A sync event as pushed by the backend, before direction is derived.
///
/// The `type` tag is opaque to the store; it names the action
/// (e.g. `play`, `pause`, `seek`, `toggle`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPayload {
    /// Action tag. Opaque to the store.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Producer-supplied timestamp (epoch milliseconds).
    pub timestamp: i64,
    /// Originating peer, present only for inbound events.
    #[serde(rename = "clientId", skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// Playback position, if the action carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
}

impl EventPayload {
    /// A locally originated toggle action, stamped with the current time.
    pub fn toggle() -> Self {
        Self {
            event_type: "toggle".into(),
            timestamp: now_ms(),
            client_id: None,
            position: None,
        }
    }

    /// A locally originated ping, stamped with the current time.
    pub fn ping() -> Self {
        Self {
            event_type: "ping".into(),
            timestamp: now_ms(),
            client_id: None,
            position: None,
        }
    }
}

/// One observed synchronization action, with its derived direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncEvent {
    /// Action tag. Opaque to the store.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Producer-supplied timestamp (epoch milliseconds).
    pub timestamp: i64,
    /// Originating peer, present only for inbound events.
    #[serde(rename = "clientId", skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// Playback position, if the action carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    /// `In` iff the payload carried a client id.
    pub direction: Direction,
}

impl SyncEvent {
    /// Build a full event from a pushed payload, deriving the direction.
    ///
    /// Inbound events are exactly those carrying a `clientId`; outbound
    /// events never do.
    pub fn from_payload(payload: EventPayload) -> Self {
        let direction = if payload.client_id.is_some() {
            Direction::In
        } else {
            Direction::Out
        };
        Self {
            event_type: payload.event_type,
            timestamp: payload.timestamp,
            client_id: payload.client_id,
            position: payload.position,
            direction,
        }
    }
}

/// Current time as epoch milliseconds.
pub fn now_ms() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
