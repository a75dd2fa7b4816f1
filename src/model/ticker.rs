use crate::model::currency::CurrencyPair;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ticker {
    pub currency_pair: CurrencyPair,
    pub last: Decimal,
    pub bid: Decimal,
    pub ask: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    // denominated in the counter currency
    pub volume: Decimal,
    pub timestamp: DateTime<Utc>,
}
