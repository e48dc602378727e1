//! Live browser backend over the Chrome DevTools Protocol
//!
//! This module is the only part of the crate that talks to Chrome. It
//! includes:
//! - LaunchOptions / ConnectionOptions: how to reach a browser
//! - PageSession: one watched tab, implementing SnapshotSource
//! - PageWatcher: the poll loop that turns page activity into signals

pub mod config;
pub mod session;
pub mod watcher;

pub use config::{ConnectionOptions, LaunchOptions};
pub use session::PageSession;
pub use watcher::PageWatcher;
