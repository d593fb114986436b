//! Host editor integration
//!
//! The editor exposes its scripting surface through a small JSON gateway.
//! The [`HostBridge`] trait is the seam: the export core only ever sees the
//! trait, so tests drive it with scripted doubles and never open a socket.

pub mod bridge;
pub mod client;
pub mod models;

pub use bridge::{HostBridge, SequenceInfo, SystemInfo};
pub use client::HostClient;
