use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::BTreeMap;

/// depth response, pair as key
pub type YoBitOrderBooks = BTreeMap<String, YoBitOrderBook>;
/// ticker response, pair as key
pub type YoBitTickers = BTreeMap<String, YoBitTicker>;
/// trades response, pair as key
pub type YoBitTrades = BTreeMap<String, Vec<YoBitTrade>>;

/// A level arrives as [rate, quantity]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "(Decimal, Decimal)")]
pub struct YoBitAsksBidsData {
    pub rate: Decimal,
    pub quantity: Decimal,
}

impl From<(Decimal, Decimal)> for YoBitAsksBidsData {
    fn from((rate, quantity): (Decimal, Decimal)) -> Self {
        YoBitAsksBidsData { rate, quantity }
    }
}

/// Levels may be null, an empty side may be missing altogether
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct YoBitOrderBook {
    #[serde(default)]
    pub asks: Vec<Option<YoBitAsksBidsData>>,
    #[serde(default)]
    pub bids: Vec<Option<YoBitAsksBidsData>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct YoBitTicker {
    pub high: Decimal,
    pub low: Decimal,
    pub avg: Decimal,
    // volume in base currency
    pub vol: Decimal,
    // volume in counter currency
    pub vol_cur: Decimal,
    pub last: Decimal,
    pub buy: Decimal,
    pub sell: Decimal,
    // epoch seconds
    pub updated: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct YoBitTrade {
    // "bid" or "ask"
    #[serde(rename = "type")]
    pub trade_type: String,
    pub price: Decimal,
    pub amount: Decimal,
    pub tid: u64,
    // epoch seconds
    pub timestamp: i64,
}

/// Trading rules of a pair as listed by the info endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct YoBitPair {
    pub decimal_places: u32,
    #[serde(default)]
    pub min_price: Option<Decimal>,
    #[serde(default)]
    pub max_price: Option<Decimal>,
    pub min_amount: Decimal,
    #[serde(default)]
    pub min_total: Option<Decimal>,
    #[serde(default)]
    pub hidden: Option<u8>,
    pub fee: Decimal,
    #[serde(default)]
    pub fee_buyer: Option<Decimal>,
    #[serde(default)]
    pub fee_seller: Option<Decimal>,
}

/// info response, the instrument catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct YoBitInfo {
    #[serde(default)]
    pub server_time: Option<i64>,
    pub pairs: BTreeMap<String, YoBitPair>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_order_book_levels() {
        let raw = json!({
            "asks": [[101.5, 2], null, [102, 0.25]],
            "bids": [[100, 1]]
        });
        let book: YoBitOrderBook = serde_json::from_value(raw).unwrap();
        assert_eq!(book.asks.len(), 3);
        assert!(book.asks[1].is_none());
        let first = book.asks[0].unwrap();
        assert_eq!(first.rate, dec!(101.5));
        assert_eq!(first.quantity, dec!(2));
        assert_eq!(book.bids[0].unwrap().rate, dec!(100));
    }

    #[test]
    fn test_order_book_missing_side() {
        let book: YoBitOrderBook = serde_json::from_value(json!({"bids": []})).unwrap();
        assert!(book.asks.is_empty());
    }

    #[test]
    fn test_trades_response() {
        let raw = json!({
            "ltc_btc": [
                {"type": "ask", "price": 0.0104, "amount": 0.5, "tid": 41234, "timestamp": 1418654531},
                {"type": "bid", "price": 0.0105, "amount": 1, "tid": 41235, "timestamp": 1418654532}
            ]
        });
        let trades: YoBitTrades = serde_json::from_value(raw).unwrap();
        let trades = &trades["ltc_btc"];
        assert_eq!(trades[0].trade_type, "ask");
        assert_eq!(trades[1].tid, 41235);
        assert_eq!(trades[0].price, dec!(0.0104));
    }

    #[test]
    fn test_info_response() {
        let raw = json!({
            "server_time": 1418654531,
            "pairs": {
                "ltc_btc": {
                    "decimal_places": 8,
                    "min_price": 0.00000001,
                    "max_price": 10000,
                    "min_amount": 0.0001,
                    "hidden": 0,
                    "fee": 0.2
                }
            }
        });
        let info: YoBitInfo = serde_json::from_value(raw).unwrap();
        let pair = &info.pairs["ltc_btc"];
        assert_eq!(pair.decimal_places, 8);
        assert_eq!(pair.fee, dec!(0.2));
        assert_eq!(pair.min_amount, dec!(0.0001));
        assert!(pair.fee_buyer.is_none());
    }
}
