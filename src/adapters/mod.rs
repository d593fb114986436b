//! External system integrations for Encoda.
//!
//! This module provides adapters for the systems the exporter talks to:
//!
//! - [`host`] - the editor's scripting gateway (trait + HTTP client)
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate external dependencies
//! and enable testing with mock implementations. The core export logic
//! depends on the [`host::HostBridge`] trait only, never on the HTTP
//! client directly.

pub mod host;
