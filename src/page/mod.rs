//! Snapshot model of a rendered page
//!
//! This module provides the read-only view of a page that the check pass
//! consumes. It includes:
//! - PageNode / BoundingBox: captured elements with viewport-relative geometry
//! - PageSnapshot: one capture, with document-order candidate enumeration
//! - Selector: the small structural selector used to find product cards
//! - SnapshotSource: the seam between the core and whatever produces captures

pub mod node;
pub mod selector;
pub mod snapshot;

pub use node::{BoundingBox, PageNode};
pub use selector::Selector;
pub use snapshot::{PageSnapshot, SnapshotSource};
