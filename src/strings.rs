use crate::error::{Error, Result};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Splits "btc_usd" into ("btc", "usd"), None unless there are exactly two non-empty parts
pub fn pair_to_tuple(pair: &str) -> Option<(&str, &str)> {
    let mut parts = pair.split('_');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(base), Some(counter), None) if !base.is_empty() && !counter.is_empty() => {
            Some((base, counter))
        }
        _ => None,
    }
}

/// Inverse of pair_to_tuple, lowercased as the exchange expects in URLs
pub fn tuple_to_pair(base: &str, counter: &str) -> String {
    let mut n = base.to_lowercase();
    n.push('_');
    n.push_str(&counter.to_lowercase());
    n
}

/// Plain or scientific notation, e.g. "0.0012" or "1.2e-3"
pub fn parse_decimal(field: &str, text: &str) -> Result<Decimal> {
    let text = text.trim();
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|_| Error::parse(field, text))
}

/// Whole seconds since epoch
pub fn parse_epoch_seconds(field: &str, text: &str) -> Result<i64> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| Error::parse(field, text))
}
