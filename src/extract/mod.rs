//! Ordered-fallback extraction of name and price from product cards
//!
//! Rule lists are literal ordered data, evaluated in priority order with the
//! first success winning. Name and price extraction are independent; a card
//! missing either field yields no record at all.

pub mod rules;

pub use rules::{
    default_name_rules, default_price_rules, extract_field, extract_record, CardRecord,
    ExtractRule,
};
