//! DevTools runtime for nexus-watch.
//!
//! Attaches to a browser the operator already runs with
//! `--remote-debugging-port`, finds the scheduler tab, and evaluates
//! JavaScript in it over the page's WebSocket.

pub mod connection;
pub mod discovery;
pub mod error;
pub mod page;

pub use connection::{Connection, DEFAULT_REQUEST_TIMEOUT};
pub use discovery::{Endpoint, discover_page, fetch_version, list_targets};
pub use error::{Error, Result};
pub use page::Page;
