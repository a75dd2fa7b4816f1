use crate::model::currency::CurrencyPair;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Side of an order or trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OrderType {
    Bid,
    Ask,
}

impl AsRef<str> for OrderType {
    fn as_ref(&self) -> &str {
        match self {
            OrderType::Bid => "bid",
            OrderType::Ask => "ask",
        }
    }
}

/// ```
/// use yobit_adapters::model::order::OrderType;
/// assert_eq!(OrderType::Ask.to_string(), "ask");
/// ```
impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OrderStatus {
    New,
    PartiallyFilled,
    Filled,
    Canceled,
    Stopped,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LimitOrder {
    pub order_type: OrderType,
    pub original_amount: Decimal,
    pub currency_pair: CurrencyPair,
    pub id: String,
    pub timestamp: Option<DateTime<Utc>>,
    pub limit_price: Decimal,
    pub average_price: Option<Decimal>,
    pub cumulative_amount: Option<Decimal>,
    pub status: Option<OrderStatus>,
}

impl LimitOrder {
    pub fn new(
        order_type: OrderType,
        original_amount: Decimal,
        currency_pair: CurrencyPair,
        id: String,
        timestamp: Option<DateTime<Utc>>,
        limit_price: Decimal,
    ) -> Self {
        LimitOrder {
            order_type,
            original_amount,
            currency_pair,
            id,
            timestamp,
            limit_price,
            average_price: None,
            cumulative_amount: None,
            status: None,
        }
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Account's resting orders
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OpenOrders {
    pub open_orders: Vec<LimitOrder>,
}
