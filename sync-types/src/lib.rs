//! # sync-types
//!
//! Shared state and wire types for the media-sync client store.
//!
//! This crate provides the types exchanged between the store, the native
//! backend, and any embedding UI layer:
//! - [`SyncEvent`], [`EventPayload`], [`Direction`] - Observed playback actions
//! - [`ConnectionStatus`], [`LinkState`] - Backend-reported link state
//! - [`Settings`] - Durable user configuration
//!
//! All serde representations use the camelCase wire names of the original
//! protocol (`clientId`, `latencyMs`, `serverUrl`, `autoConnect`).

#![warn(missing_docs)]
#![warn(clippy::all)]

mod event;
mod settings;
mod status;

pub use event::{now_ms, Direction, EventPayload, SyncEvent};
pub use settings::{Settings, DEFAULT_SERVER_URL};
pub use status::{ConnectionStatus, LinkState};
