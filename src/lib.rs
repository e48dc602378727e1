//! # product-watch
//!
//! A Rust library that watches a web page over the Chrome DevTools Protocol
//! (CDP) and reports each product card the first time it scrolls into view.
//!
//! ## How it works
//!
//! A [`Reporter`] runs a check pass whenever the page loads, scrolls, or
//! resizes (bursts of signals coalesce into one pass): it takes a fresh
//! snapshot of the rendered tree, finds product cards with a structural
//! selector, keeps the ones at least half inside the viewport, extracts a
//! name and price through ordered fallback rules, and reports every card it
//! has not reported before. Dedup identity is derived from name, price, and
//! the card's document-order position, so it is stable across scrolling but
//! deliberately not across page mutations that reorder cards.
//!
//! ## Watching a live page
//!
//! ```rust,no_run
//! use product_watch::{LaunchOptions, PageSession, PageWatcher, Reporter, ReporterConfig};
//! use std::time::Duration;
//!
//! # fn main() -> product_watch::Result<()> {
//! let session = PageSession::launch(LaunchOptions::default())?;
//! session.navigate("https://shop.example.com")?;
//! session.wait_for_navigation()?;
//!
//! let reporter = Reporter::new(ReporterConfig::default());
//! let mut watcher = PageWatcher::new(session, reporter);
//!
//! // Report lines go through the `log` facade as the user scrolls
//! let reported = watcher.watch(Duration::from_secs(60))?;
//! println!("{} distinct products seen", reported);
//! # Ok(())
//! # }
//! ```
//!
//! ## Running the core against your own snapshots
//!
//! The check pass only needs a [`SnapshotSource`], so the whole pipeline runs
//! against in-memory trees too:
//!
//! ```rust
//! use product_watch::{
//!     MemorySink, PageNode, PageSnapshot, Reporter, ReporterConfig, Signal,
//! };
//! use std::time::{Duration, Instant};
//!
//! let card = PageNode::new("article")
//!     .with_attribute("class", "product-card")
//!     .with_bounding_box(0.0, 100.0, 300.0, 200.0)
//!     .with_children(vec![
//!         PageNode::new("h2").with_text("Trail Boot"),
//!         PageNode::new("span").with_attribute("class", "price").with_text("$120"),
//!     ]);
//! let mut page = PageSnapshot::new(PageNode::new("body").with_children(vec![card]), 800.0);
//!
//! let config = ReporterConfig { check_delay: Duration::ZERO, ..Default::default() };
//! let mut reporter = Reporter::with_sink(config, Box::new(MemorySink::new()));
//!
//! reporter.handle(Signal::PageReady);
//! let outcome = reporter.poll(&mut page, Instant::now()).unwrap().unwrap();
//! assert_eq!(outcome.reported, 1);
//! ```
//!
//! ## Module Overview
//!
//! - [`page`]: snapshot model of the rendered tree and the structural selector
//! - [`extract`]: ordered-fallback name/price extraction rules
//! - [`report`]: visibility predicate, dedup identity, and the check cycle
//! - [`browser`]: live CDP session and the watch loop
//! - [`error`]: error types and result alias

pub mod browser;
pub mod error;
pub mod extract;
pub mod page;
pub mod report;

pub use browser::{ConnectionOptions, LaunchOptions, PageSession, PageWatcher};
pub use error::{Result, WatchError};
pub use extract::{CardRecord, ExtractRule};
pub use page::{BoundingBox, PageNode, PageSnapshot, Selector, SnapshotSource};
pub use report::{
    CheckState, LogSink, MemorySink, PassOutcome, Reporter, ReporterConfig, ReportSink, SeenSet,
    Signal,
};
