use crate::error::Result;
use crate::page::node::PageNode;
use crate::page::selector::Selector;
use serde::{Deserialize, Serialize};

/// One capture of a page's rendered tree
///
/// A snapshot is taken fresh for every check pass; no node references are
/// held across passes, so mutations to the live page between passes are
/// simply reflected in the next capture.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageSnapshot {
    /// Height of the viewport at capture time, in CSS pixels
    pub viewport_height: f64,

    /// Root of the captured tree (normally the body element)
    pub root: PageNode,
}

impl PageSnapshot {
    /// Create a snapshot from a root node and viewport height
    pub fn new(root: PageNode, viewport_height: f64) -> Self {
        Self {
            viewport_height,
            root,
        }
    }

    /// Decode a snapshot from the JSON the capture script emits
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// All nodes matching the selector, in document order
    ///
    /// The position of a node in the returned list is the positional index
    /// the dedup identity is built from.
    pub fn candidates(&self, selector: &Selector) -> Vec<&PageNode> {
        self.root.iter().filter(|n| selector.matches(n)).collect()
    }
}

/// Source of fresh page snapshots
///
/// Implemented by the live browser session; test fixtures implement it over
/// in-memory trees.
pub trait SnapshotSource {
    /// Capture the current state of the page
    fn snapshot(&mut self) -> Result<PageSnapshot>;
}

impl SnapshotSource for PageSnapshot {
    fn snapshot(&mut self) -> Result<PageSnapshot> {
        Ok(self.clone())
    }
}
