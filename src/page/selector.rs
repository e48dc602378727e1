use crate::error::{Result, WatchError};
use crate::page::node::PageNode;

/// A small structural selector for finding elements in a snapshot
///
/// Supports the subset the rule lists actually need: an optional tag name, an
/// optional `#id`, any number of `.class` terms, and an optional `[attr]`
/// presence term, in that order. Examples: `article.product-card`, `.price`,
/// `h2`, `[data-price]`, `li.item[data-sku]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attribute: Option<String>,
}

impl Selector {
    /// Parse a selector string
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(WatchError::InvalidSelector(input.to_string()));
        }

        let mut selector = Selector {
            tag: None,
            id: None,
            classes: Vec::new(),
            attribute: None,
        };

        let mut rest = input;
        if let Some(start) = rest.find('[') {
            let attr = rest[start..]
                .strip_prefix('[')
                .and_then(|s| s.strip_suffix(']'))
                .map(str::trim)
                .filter(|a| !a.is_empty())
                .ok_or_else(|| WatchError::InvalidSelector(input.to_string()))?;
            selector.attribute = Some(attr.to_string());
            rest = &rest[..start];
        }

        for (i, part) in rest.split('.').enumerate() {
            if i == 0 {
                // Leading part before any '.' is tag and/or #id
                let (tag, id) = match part.split_once('#') {
                    Some((tag, id)) => (tag, Some(id)),
                    None => (part, None),
                };
                if !tag.is_empty() {
                    selector.tag = Some(tag.to_ascii_lowercase());
                }
                match id {
                    Some("") => return Err(WatchError::InvalidSelector(input.to_string())),
                    Some(id) => selector.id = Some(id.to_string()),
                    None => {}
                }
            } else {
                if part.is_empty() {
                    return Err(WatchError::InvalidSelector(input.to_string()));
                }
                selector.classes.push(part.to_string());
            }
        }

        if selector.tag.is_none()
            && selector.id.is_none()
            && selector.classes.is_empty()
            && selector.attribute.is_none()
        {
            return Err(WatchError::InvalidSelector(input.to_string()));
        }

        Ok(selector)
    }

    /// Check whether a node satisfies every term of this selector
    pub fn matches(&self, node: &PageNode) -> bool {
        if let Some(tag) = &self.tag {
            if !node.is_tag(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if node.id() != Some(id) {
                return false;
            }
        }
        for class in &self.classes {
            if !node.has_class(class) {
                return false;
            }
        }
        if let Some(attr) = &self.attribute {
            if !node.attributes.contains_key(attr) {
                return false;
            }
        }
        true
    }
}
