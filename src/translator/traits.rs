use crate::error::Result;
use crate::model::currency::CurrencyPair;
use crate::model::order::LimitOrder;
use crate::model::orderbook::OrderBook;
use crate::model::ticker::Ticker;
use crate::model::trade::{Trades, UserTrade};

/// Wire responses keyed by pair leave the pair out of the body, so it is passed in
pub trait ToOrderBook {
    fn to_internal(&self, currency_pair: &CurrencyPair) -> OrderBook;
}

pub trait ToTicker {
    fn to_internal(&self, currency_pair: &CurrencyPair) -> Result<Ticker>;
}

pub trait ToTrades {
    fn to_internal(&self, currency_pair: &CurrencyPair) -> Result<Trades>;
}

/// Records keyed by order id carry no id of their own
pub trait ToLimitOrder {
    fn to_internal(&self, order_id: &str) -> Result<LimitOrder>;
}

pub trait ToUserTrade {
    fn to_internal(&self, trade_id: &str) -> Result<UserTrade>;
}
