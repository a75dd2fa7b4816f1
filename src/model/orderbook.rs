use crate::model::order::LimitOrder;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Snapshot of both sides, levels kept in the order the exchange sent them
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrderBook {
    pub timestamp: Option<DateTime<Utc>>,
    pub asks: Vec<LimitOrder>,
    pub bids: Vec<LimitOrder>,
}

impl OrderBook {
    pub fn new(
        timestamp: Option<DateTime<Utc>>,
        asks: Vec<LimitOrder>,
        bids: Vec<LimitOrder>,
    ) -> Self {
        OrderBook {
            timestamp,
            asks,
            bids,
        }
    }
}
