//! Wire types for the Chrome DevTools Protocol.
//!
//! This crate contains the serde-serializable types exchanged with a browser
//! started with `--remote-debugging-port`. They cover the two surfaces the
//! watcher needs: the DevTools HTTP discovery endpoints (`/json/version`,
//! `/json/list`) and the JSON-RPC messages carried over the page WebSocket.
//!
//! # Design Philosophy
//!
//! Types in this crate are:
//! * Pure data: No behavior beyond serialization/deserialization
//! * 1:1 with protocol: Field names match the DevTools wire format
//! * Stable: Changes only when the wire protocol changes
//!
//! The connection and page abstractions are built on top of these types in
//! `nexus-runtime`.

pub mod message;
pub mod runtime;
pub mod target;

pub use message::*;
pub use runtime::*;
pub use target::*;
