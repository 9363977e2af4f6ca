//! Durable user configuration for media-sync.

use serde::{Deserialize, Serialize};

/// Endpoint used when no settings have been persisted yet.
pub const DEFAULT_SERVER_URL: &str = "ws://localhost:8080";

/// User settings persisted across application runs.
///
/// Serialized as a single JSON blob under one storage key; the wire shape
/// uses the original camelCase field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Connection endpoint.
    #[serde(rename = "serverUrl")]
    pub server_url: String,
    /// Session identifier shared with peers.
    pub room: String,
    /// Connect automatically at startup.
    #[serde(rename = "autoConnect")]
    pub auto_connect: bool,
    /// Global hotkey descriptor; empty means none configured.
    pub hotkey: String,
}

impl Settings {
    /// Generate fresh default settings with a new random room.
    ///
    /// Used whenever no valid settings record exists: a random room can
    /// always be generated, so a corrupted blob degrades safely to
    /// "no room memorized yet".
    pub fn generate() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            room: uuid::Uuid::new_v4().to_string(),
            auto_connect: false,
            hotkey: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_settings_have_defaults() {
        let settings = Settings::generate();
        assert_eq!(settings.server_url, DEFAULT_SERVER_URL);
        assert!(!settings.room.is_empty());
        assert!(!settings.auto_connect);
        assert!(settings.hotkey.is_empty());
    }

    #[test]
    fn generated_rooms_are_unique() {
        let a = Settings::generate();
        let b = Settings::generate();
        assert_ne!(a.room, b.room);
    }

    #[test]
    fn settings_serialize_with_wire_names() {
        let settings = Settings {
            server_url: "ws://example.com".into(),
            room: "movie-night".into(),
            auto_connect: true,
            hotkey: "ctrl+alt+s".into(),
        };

        let json = serde_json::to_value(&settings).unwrap();

        assert_eq!(json["serverUrl"], "ws://example.com");
        assert_eq!(json["room"], "movie-night");
        assert_eq!(json["autoConnect"], true);
        assert_eq!(json["hotkey"], "ctrl+alt+s");
    }

    #[test]
    fn settings_roundtrip_through_json() {
        let original = Settings::generate();
        let json = serde_json::to_string(&original).unwrap();
        let restored: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }
}
