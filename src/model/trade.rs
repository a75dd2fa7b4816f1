use crate::model::currency::{Currency, CurrencyPair};
use crate::model::order::OrderType;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// Public trade
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trade {
    pub order_type: OrderType,
    pub original_amount: Decimal,
    pub currency_pair: CurrencyPair,
    pub price: Decimal,
    pub timestamp: DateTime<Utc>,
    pub id: String,
}

/// Trade executed by the account
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserTrade {
    pub order_type: OrderType,
    pub original_amount: Decimal,
    pub currency_pair: CurrencyPair,
    pub price: Decimal,
    pub timestamp: DateTime<Utc>,
    pub id: String,
    pub order_id: String,
    pub fee_amount: Option<Decimal>,
    pub fee_currency: Option<Currency>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TradeSortType {
    SortByTimestamp,
    SortById,
}

/// Trades plus the cursor to resume fetching from.
/// last_id is the id of the last trade as received, None when there were no trades.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trades {
    pub trades: Vec<Trade>,
    pub last_id: Option<u64>,
    pub sort_type: TradeSortType,
}

impl Trades {
    pub fn new(trades: Vec<Trade>, last_id: Option<u64>, sort_type: TradeSortType) -> Self {
        Trades {
            trades,
            last_id,
            sort_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserTrades {
    pub trades: Vec<UserTrade>,
    pub sort_type: TradeSortType,
}
