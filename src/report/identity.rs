use indexmap::IndexSet;

/// Separator between identity parts; never appears in rendered page text
const DELIMITER: char = '\u{1f}';

/// Build the dedup identity for a card sighting
///
/// Pure and deterministic: lowercased name and price joined with the card's
/// positional index within the candidate list of the pass. The index makes
/// the identity fragile under document reordering — a card that shifts
/// position between passes is treated as a new, unseen product. That is the
/// documented behavior, not an accident; see the reorder test in
/// `tests/watch_integration.rs`.
pub fn identity(name: &str, price: &str, position: usize) -> String {
    format!(
        "{}{DELIMITER}{}{DELIMITER}{}",
        name.to_lowercase(),
        price.to_lowercase(),
        position
    )
}

/// Identities that have already been reported this session
///
/// Grows monotonically for the life of the session; there is no removal
/// path. Insertion order is preserved, which keeps `iter` useful for
/// debugging what was reported and when.
#[derive(Debug, Default)]
pub struct SeenSet {
    seen: IndexSet<String>,
}

impl SeenSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an identity; returns true if it was not seen before
    ///
    /// Idempotent — marking an already-seen identity changes nothing.
    pub fn mark(&mut self, key: String) -> bool {
        self.seen.insert(key)
    }

    /// Check whether an identity has been reported
    pub fn contains(&self, key: &str) -> bool {
        self.seen.contains(key)
    }

    /// Number of identities reported so far
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Check if nothing has been reported yet
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Iterate identities in the order they were first reported
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.seen.iter().map(String::as_str)
    }
}
