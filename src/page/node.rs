use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One element in a page snapshot
///
/// Nodes are produced by the snapshot script (or built by hand in tests) and
/// are read-only once captured; a fresh tree is taken for every check pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageNode {
    /// HTML tag name (e.g., "div", "article", "span")
    pub tag_name: String,

    /// Element attributes (id, class, data-*, etc.)
    #[serde(default)]
    pub attributes: HashMap<String, String>,

    /// Text belonging directly to this element (child text nodes, trimmed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Bounding box relative to the viewport, as getBoundingClientRect reports
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,

    /// Child elements in document order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<PageNode>,
}

/// Viewport-relative bounding box of an element
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PageNode {
    /// Create a new PageNode
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes: HashMap::new(),
            text: None,
            bounding_box: None,
            children: Vec::new(),
        }
    }

    /// Builder method: set direct text
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Builder method: set the bounding box
    pub fn with_bounding_box(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.bounding_box = Some(BoundingBox { x, y, width, height });
        self
    }

    /// Builder method: set children
    pub fn with_children(mut self, children: Vec<PageNode>) -> Self {
        self.children = children;
        self
    }

    /// Add a single attribute
    pub fn add_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Builder method: add a single attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_attribute(key, value);
        self
    }

    /// Add a child element
    pub fn add_child(&mut self, child: PageNode) {
        self.children.push(child);
    }

    /// Get attribute value by key
    pub fn get_attribute(&self, key: &str) -> Option<&String> {
        self.attributes.get(key)
    }

    /// Check if element has a specific class
    pub fn has_class(&self, class_name: &str) -> bool {
        self.attributes
            .get("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class_name))
    }

    /// Get element ID
    pub fn id(&self) -> Option<&String> {
        self.attributes.get("id")
    }

    /// Check if element is a specific tag
    pub fn is_tag(&self, tag: &str) -> bool {
        self.tag_name.eq_ignore_ascii_case(tag)
    }

    /// Full text content of this element and its descendants, in document
    /// order, whitespace-joined
    pub fn text_content(&self) -> String {
        let mut parts = Vec::new();
        self.collect_text(&mut parts);
        parts.join(" ")
    }

    fn collect_text<'a>(&'a self, parts: &mut Vec<&'a str>) {
        if let Some(text) = &self.text {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                parts.push(trimmed);
            }
        }
        for child in &self.children {
            child.collect_text(parts);
        }
    }

    /// Iterate this node and every descendant in document (pre-order) order
    pub fn iter(&self) -> impl Iterator<Item = &PageNode> {
        NodeIter { stack: vec![self] }
    }

    /// Iterate descendants only, in document order
    pub fn descendants(&self) -> impl Iterator<Item = &PageNode> {
        NodeIter {
            stack: self.children.iter().rev().collect(),
        }
    }
}

struct NodeIter<'a> {
    stack: Vec<&'a PageNode>,
}

impl<'a> Iterator for NodeIter<'a> {
    type Item = &'a PageNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Children pushed in reverse so the leftmost subtree pops first
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

impl BoundingBox {
    /// Create a new BoundingBox
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Top edge, relative to the viewport
    pub fn top(&self) -> f64 {
        self.y
    }

    /// Bottom edge, relative to the viewport
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}
