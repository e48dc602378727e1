use crate::page::{PageNode, Selector};

/// One lookup rule in an ordered fallback list
///
/// A rule matches the first descendant of a card that satisfies its selector.
/// If that descendant has non-empty trimmed text, the rule succeeds with that
/// text; otherwise the next rule in the list is tried. First success wins —
/// there is no merging or scoring across rules.
#[derive(Debug, Clone)]
pub struct ExtractRule {
    selector: Selector,
}

impl ExtractRule {
    /// Build a rule from a selector string, panicking on a malformed literal
    ///
    /// Rule lists are literal data; a bad selector string is a programming
    /// error, so the fallible path is only exposed via [`ExtractRule::new`].
    pub fn css(selector: &str) -> Self {
        Self::new(Selector::parse(selector).unwrap_or_else(|e| panic!("{e}")))
    }

    /// Build a rule from an already-parsed selector
    pub fn new(selector: Selector) -> Self {
        Self { selector }
    }

    /// Apply this rule to a card, returning trimmed text on success
    pub fn apply(&self, card: &PageNode) -> Option<String> {
        let found = card.descendants().find(|n| self.selector.matches(n))?;
        let text = found.text_content();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

/// A record extracted from one product card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRecord {
    pub name: String,
    pub price: String,
}

/// Try an ordered rule list against a card, first success wins
pub fn extract_field(card: &PageNode, rules: &[ExtractRule]) -> Option<String> {
    rules.iter().find_map(|rule| rule.apply(card))
}

/// Extract a full record from a card; both fields are required
///
/// Name and price extraction are independent — either may fail without
/// affecting the other, and a card missing either field yields no record.
pub fn extract_record(
    card: &PageNode,
    name_rules: &[ExtractRule],
    price_rules: &[ExtractRule],
) -> Option<CardRecord> {
    let name = extract_field(card, name_rules)?;
    let price = extract_field(card, price_rules)?;
    Some(CardRecord { name, price })
}

/// Default name lookup rules, highest priority first
pub fn default_name_rules() -> Vec<ExtractRule> {
    vec![
        ExtractRule::css(".product-name"),
        ExtractRule::css(".product-title"),
        ExtractRule::css("[data-name]"),
        ExtractRule::css("h2"),
        ExtractRule::css("h3"),
    ]
}

/// Default price lookup rules, highest priority first
pub fn default_price_rules() -> Vec<ExtractRule> {
    vec![
        ExtractRule::css(".product-price"),
        ExtractRule::css(".price"),
        ExtractRule::css("[data-price]"),
        ExtractRule::css(".amount"),
    ]
}
