/*
    Translates from the YoBit wire model to our internal model
*/

use crate::error::{Error, Result};
use crate::config::AdapterConfig;
use crate::model::currency::{Currency, CurrencyPair};
use crate::model::meta::{CurrencyMetaData, CurrencyPairMetaData, ExchangeMetaData};
use crate::model::order::{LimitOrder, OpenOrders, OrderStatus, OrderType};
use crate::model::orderbook::OrderBook;
use crate::model::ticker::Ticker;
use crate::model::trade::{Trade, TradeSortType, Trades, UserTrade, UserTrades};
use crate::strings;
use crate::translator::traits;
use crate::yobit::marketdata::{
    YoBitAsksBidsData, YoBitInfo, YoBitOrderBook, YoBitTicker, YoBitTrade,
};
use crate::yobit::trade::{RawRecord, RawRecords, YoBitOrder, YoBitUserTrade};
use chrono::{DateTime, TimeZone, Utc};

/// "btc_usd" in any case to BTC/USD
/// ```
/// use yobit_adapters::translator::yobit::adapt_currency_pair;
/// let pair = adapt_currency_pair("btc_usd").unwrap();
/// assert_eq!(pair.base.code(), "BTC");
/// assert_eq!(pair.counter.code(), "USD");
/// assert!(adapt_currency_pair("btcusd").is_err());
/// ```
pub fn adapt_currency_pair(pair: &str) -> Result<CurrencyPair> {
    let upper = pair.to_uppercase();
    let (base, counter) =
        strings::pair_to_tuple(&upper).ok_or_else(|| Error::Format(pair.to_string()))?;
    Ok(CurrencyPair::new(adapt_currency(base), adapt_currency(counter)))
}

pub fn adapt_currency(code: &str) -> Currency {
    Currency::new(code)
}

/// Exchange seconds to epoch milliseconds
pub fn adapt_timestamp(seconds: i64) -> Result<DateTime<Utc>> {
    seconds
        .checked_mul(1000)
        .and_then(|millis| Utc.timestamp_millis_opt(millis).single())
        .ok_or_else(|| Error::parse("timestamp", seconds))
}

/// The exchange sends no book timestamp and no level ids, levels get DEFAULT_ORDER_ID
pub fn adapt_order_book(book: &YoBitOrderBook, currency_pair: &CurrencyPair) -> OrderBook {
    adapt_order_book_with_config(book, currency_pair, &AdapterConfig::default())
}

pub fn adapt_order_book_with_config(
    book: &YoBitOrderBook,
    currency_pair: &CurrencyPair,
    config: &AdapterConfig,
) -> OrderBook {
    let asks = to_limit_orders(&book.asks, OrderType::Ask, currency_pair, config);
    let bids = to_limit_orders(&book.bids, OrderType::Bid, currency_pair, config);
    OrderBook::new(None, asks, bids)
}

fn to_limit_orders(
    levels: &[Option<YoBitAsksBidsData>],
    order_type: OrderType,
    currency_pair: &CurrencyPair,
    config: &AdapterConfig,
) -> Vec<LimitOrder> {
    levels
        .iter()
        .flatten()
        .map(|level| {
            LimitOrder::new(
                order_type,
                level.quantity,
                currency_pair.clone(),
                config.placeholder_order_id.clone(),
                None,
                level.rate,
            )
        })
        .collect()
}

/// Merges the instrument catalog into metadata the caller already holds.
/// Pair rules are overwritten, currencies are only added when unknown.
/// All catalog keys are parsed before anything is written.
/// New currencies get DEFAULT_CURRENCY_PRECISION.
pub fn merge_exchange_meta_data<'a>(
    meta: &'a mut ExchangeMetaData,
    info: &YoBitInfo,
) -> Result<&'a mut ExchangeMetaData> {
    merge_exchange_meta_data_with_config(meta, info, &AdapterConfig::default())
}

pub fn merge_exchange_meta_data_with_config<'a>(
    meta: &'a mut ExchangeMetaData,
    info: &YoBitInfo,
    config: &AdapterConfig,
) -> Result<&'a mut ExchangeMetaData> {
    let pairs = info
        .pairs
        .iter()
        .map(|(key, pair)| Ok((adapt_currency_pair(key)?, pair)))
        .collect::<Result<Vec<_>>>()?;

    let precision = config.currency_precision;
    for (currency_pair, pair) in pairs {
        meta.currencies
            .entry(currency_pair.base.clone())
            .or_insert(CurrencyMetaData::new(precision));
        meta.currencies
            .entry(currency_pair.counter.clone())
            .or_insert(CurrencyMetaData::new(precision));
        meta.currency_pairs.insert(
            currency_pair,
            CurrencyPairMetaData {
                trading_fee: pair.fee,
                minimum_amount: Some(pair.min_amount),
                maximum_amount: None,
                price_scale: Some(pair.decimal_places),
            },
        );
    }
    log::debug!(
        "metadata merged: {} pairs, {} currencies",
        meta.currency_pairs.len(),
        meta.currencies.len()
    );
    Ok(meta)
}

/// By-value form of merge_exchange_meta_data
pub fn adapt_to_exchange_meta_data(
    mut meta: ExchangeMetaData,
    info: &YoBitInfo,
) -> Result<ExchangeMetaData> {
    merge_exchange_meta_data(&mut meta, info)?;
    Ok(meta)
}

pub fn adapt_trade(trade: &YoBitTrade, currency_pair: &CurrencyPair) -> Result<Trade> {
    // case sensitive, anything but "bid" is an ask
    let order_type = if trade.trade_type == "bid" {
        OrderType::Bid
    } else {
        OrderType::Ask
    };
    Ok(Trade {
        order_type,
        original_amount: trade.amount,
        currency_pair: currency_pair.clone(),
        price: trade.price,
        timestamp: adapt_timestamp(trade.timestamp)?,
        id: trade.tid.to_string(),
    })
}

/// Cursor is the tid of the last record as received, the exchange sends them ascending
pub fn adapt_trades(trades: &[YoBitTrade], currency_pair: &CurrencyPair) -> Result<Trades> {
    let adapted = trades
        .iter()
        .map(|trade| adapt_trade(trade, currency_pair))
        .collect::<Result<Vec<_>>>()?;
    let last_id = trades.last().map(|trade| trade.tid);
    log::trace!("{} trades for {currency_pair}, cursor {last_id:?}", adapted.len());
    Ok(Trades::new(adapted, last_id, TradeSortType::SortById))
}

/// Volume is the counter currency volume
pub fn adapt_ticker(ticker: &YoBitTicker, currency_pair: &CurrencyPair) -> Result<Ticker> {
    Ok(Ticker {
        currency_pair: currency_pair.clone(),
        last: ticker.last,
        bid: ticker.buy,
        ask: ticker.sell,
        high: ticker.high,
        low: ticker.low,
        volume: ticker.vol_cur,
        timestamp: adapt_timestamp(ticker.updated)?,
    })
}

/// ```
/// use yobit_adapters::model::currency::{Currency, CurrencyPair};
/// use yobit_adapters::translator::yobit::adapt_ccy_pair_to_url_format;
/// let pair = CurrencyPair::new(Currency::new("LTC"), Currency::new("BTC"));
/// assert_eq!(adapt_ccy_pair_to_url_format(&pair), "ltc_btc");
/// ```
pub fn adapt_ccy_pair_to_url_format(currency_pair: &CurrencyPair) -> String {
    strings::tuple_to_pair(currency_pair.base.code(), currency_pair.counter.code())
}

/// Joined with "-" in the order given
pub fn adapt_ccy_pairs_to_url_format<'a, I>(currency_pairs: I) -> String
where
    I: IntoIterator<Item = &'a CurrencyPair>,
{
    currency_pairs
        .into_iter()
        .map(adapt_ccy_pair_to_url_format)
        .collect::<Vec<_>>()
        .join("-")
}

/// "sell" in any case is an ask, everything else a bid
pub fn adapt_type(order_type: &str) -> OrderType {
    if order_type.eq_ignore_ascii_case("sell") {
        OrderType::Ask
    } else {
        OrderType::Bid
    }
}

/// Unknown codes count as partially filled
pub fn adapt_order_status(status: &str) -> OrderStatus {
    match status {
        "0" => OrderStatus::New,
        "1" => OrderStatus::Filled,
        "2" => OrderStatus::Canceled,
        "3" => OrderStatus::Stopped,
        _ => OrderStatus::PartiallyFilled,
    }
}

pub fn adapt_order(order_id: &str, record: &RawRecord) -> Result<LimitOrder> {
    traits::ToLimitOrder::to_internal(&YoBitOrder::try_from(record)?, order_id)
}

pub fn adapt_user_trade(trade_id: &str, record: &RawRecord) -> Result<UserTrade> {
    traits::ToUserTrade::to_internal(&YoBitUserTrade::try_from(record)?, trade_id)
}

/// ActiveOrders response body, fails as a whole on the first bad record
pub fn adapt_open_orders(records: &RawRecords) -> Result<OpenOrders> {
    let open_orders = records
        .iter()
        .map(|(order_id, record)| adapt_order(order_id, record))
        .collect::<Result<Vec<_>>>()?;
    Ok(OpenOrders { open_orders })
}

/// TradeHistory response body, sorted by time
pub fn adapt_user_trades(records: &RawRecords) -> Result<UserTrades> {
    let mut trades = records
        .iter()
        .map(|(trade_id, record)| adapt_user_trade(trade_id, record))
        .collect::<Result<Vec<_>>>()?;
    trades.sort_by_key(|trade| trade.timestamp);
    Ok(UserTrades {
        trades,
        sort_type: TradeSortType::SortByTimestamp,
    })
}

impl traits::ToOrderBook for YoBitOrderBook {
    fn to_internal(&self, currency_pair: &CurrencyPair) -> OrderBook {
        adapt_order_book(self, currency_pair)
    }
}

impl traits::ToTicker for YoBitTicker {
    fn to_internal(&self, currency_pair: &CurrencyPair) -> Result<Ticker> {
        adapt_ticker(self, currency_pair)
    }
}

impl traits::ToTrades for [YoBitTrade] {
    fn to_internal(&self, currency_pair: &CurrencyPair) -> Result<Trades> {
        adapt_trades(self, currency_pair)
    }
}

impl traits::ToLimitOrder for YoBitOrder {
    fn to_internal(&self, order_id: &str) -> Result<LimitOrder> {
        let order = LimitOrder::new(
            adapt_type(&self.order_type),
            self.amount,
            adapt_currency_pair(&self.pair)?,
            order_id.to_string(),
            Some(adapt_timestamp(self.timestamp_created)?),
            self.rate,
        );
        Ok(order.with_status(adapt_order_status(&self.status)))
    }
}

impl traits::ToUserTrade for YoBitUserTrade {
    fn to_internal(&self, trade_id: &str) -> Result<UserTrade> {
        Ok(UserTrade {
            order_type: adapt_type(&self.trade_type),
            original_amount: self.amount,
            currency_pair: adapt_currency_pair(&self.pair)?,
            price: self.rate,
            timestamp: adapt_timestamp(self.timestamp)?,
            id: trade_id.to_string(),
            order_id: self.order_id.clone(),
            fee_amount: None,
            fee_currency: None,
        })
    }
}
