use crate::error::{Error, Result};
use crate::strings::{parse_decimal, parse_epoch_seconds};
use rust_decimal::Decimal;
use serde_json::Value;
use std::collections::BTreeMap;

/// Loosely typed record as found under "return" of the trade API
pub type RawRecord = serde_json::Map<String, Value>;
/// ActiveOrders / TradeHistory "return" object, id as key
pub type RawRecords = BTreeMap<String, RawRecord>;

fn field<'a>(record: &'a RawRecord, key: &str) -> Result<&'a Value> {
    record
        .get(key)
        .ok_or_else(|| Error::MissingField(key.to_string()))
}

/// Text form of a string or number field, numbers keep their exact wire digits
fn field_text(record: &RawRecord, key: &str) -> Result<String> {
    match field(record, key)? {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(Error::parse(key, other)),
    }
}

fn field_decimal(record: &RawRecord, key: &str) -> Result<Decimal> {
    parse_decimal(key, &field_text(record, key)?)
}

fn field_seconds(record: &RawRecord, key: &str) -> Result<i64> {
    parse_epoch_seconds(key, &field_text(record, key)?)
}

/// Active order, amount is what remains unfilled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YoBitOrder {
    pub pair: String,
    // "buy" or "sell"
    pub order_type: String,
    pub amount: Decimal,
    pub rate: Decimal,
    pub timestamp_created: i64,
    // 0 active, 1 filled, 2 cancelled, 3 cancelled after partial fill
    pub status: String,
}

impl TryFrom<&RawRecord> for YoBitOrder {
    type Error = Error;

    fn try_from(record: &RawRecord) -> Result<Self> {
        Ok(YoBitOrder {
            pair: field_text(record, "pair")?,
            order_type: field_text(record, "type")?,
            amount: field_decimal(record, "amount")?,
            rate: field_decimal(record, "rate")?,
            timestamp_created: field_seconds(record, "timestamp_created")?,
            status: field_text(record, "status")?,
        })
    }
}

/// Fill from the trade history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YoBitUserTrade {
    pub pair: String,
    // "buy" or "sell"
    pub trade_type: String,
    pub amount: Decimal,
    pub rate: Decimal,
    pub order_id: String,
    pub timestamp: i64,
}

impl TryFrom<&RawRecord> for YoBitUserTrade {
    type Error = Error;

    fn try_from(record: &RawRecord) -> Result<Self> {
        Ok(YoBitUserTrade {
            trade_type: field_text(record, "type")?,
            amount: field_decimal(record, "amount")?,
            rate: field_decimal(record, "rate")?,
            order_id: field_text(record, "order_id")?,
            pair: field_text(record, "pair")?,
            timestamp: field_seconds(record, "timestamp")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn record(value: Value) -> RawRecord {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_order_from_numbers() {
        let raw = record(json!({
            "pair": "ltc_btc",
            "type": "sell",
            "amount": 21.615,
            "rate": 0.258,
            "timestamp_created": 1418654530,
            "status": 0
        }));
        let order = YoBitOrder::try_from(&raw).unwrap();
        assert_eq!(order.pair, "ltc_btc");
        assert_eq!(order.amount, dec!(21.615));
        assert_eq!(order.rate, dec!(0.258));
        assert_eq!(order.timestamp_created, 1418654530);
        assert_eq!(order.status, "0");
    }

    #[test]
    fn test_order_from_strings() {
        let raw = record(json!({
            "pair": "ltc_btc",
            "type": "buy",
            "amount": "1.5",
            "rate": "0.01",
            "timestamp_created": "1418654530",
            "status": "1"
        }));
        let order = YoBitOrder::try_from(&raw).unwrap();
        assert_eq!(order.amount, dec!(1.5));
        assert_eq!(order.status, "1");
    }

    #[test]
    fn test_order_missing_rate() {
        let raw = record(json!({
            "pair": "ltc_btc",
            "type": "sell",
            "amount": 1,
            "timestamp_created": 1418654530,
            "status": 0
        }));
        assert!(matches!(
            YoBitOrder::try_from(&raw),
            Err(Error::MissingField(key)) if key == "rate"
        ));
    }

    #[test]
    fn test_order_bad_timestamp() {
        let raw = record(json!({
            "pair": "ltc_btc",
            "type": "sell",
            "amount": 1,
            "rate": 2,
            "timestamp_created": "yesterday",
            "status": 0
        }));
        assert!(matches!(
            YoBitOrder::try_from(&raw),
            Err(Error::Parse { field, .. }) if field == "timestamp_created"
        ));
    }

    #[test]
    fn test_null_is_parse_error() {
        let raw = record(json!({
            "pair": "ltc_btc",
            "type": "sell",
            "amount": null,
            "rate": 2,
            "timestamp_created": 1,
            "status": 0
        }));
        assert!(matches!(
            YoBitOrder::try_from(&raw),
            Err(Error::Parse { field, .. }) if field == "amount"
        ));
    }

    #[test]
    fn test_bool_is_parse_error() {
        let raw = record(json!({
            "pair": "ltc_btc",
            "type": "sell",
            "amount": 1,
            "rate": 2,
            "timestamp_created": 1,
            "status": true
        }));
        assert!(matches!(
            YoBitOrder::try_from(&raw),
            Err(Error::Parse { field, .. }) if field == "status"
        ));
        let raw = record(json!({
            "pair": "ltc_btc",
            "type": false,
            "amount": 1,
            "rate": 1,
            "order_id": 5,
            "timestamp": 1
        }));
        assert!(matches!(
            YoBitUserTrade::try_from(&raw),
            Err(Error::Parse { field, .. }) if field == "type"
        ));
    }

    #[test]
    fn test_amount_keeps_wire_digits() {
        let raw: RawRecord = serde_json::from_str(
            r#"{"pair": "shib_usd", "type": "sell", "amount": 9007199254.12345678,
                "rate": 1, "order_id": 5, "timestamp": 1}"#,
        )
        .unwrap();
        let trade = YoBitUserTrade::try_from(&raw).unwrap();
        assert_eq!(trade.amount, dec!(9007199254.12345678));
    }

    #[test]
    fn test_user_trade() {
        let raw = record(json!({
            "pair": "ltc_btc",
            "type": "sell",
            "amount": 1,
            "rate": 1,
            "order_id": 100025362,
            "is_your_order": 1,
            "timestamp": 1418654530
        }));
        let trade = YoBitUserTrade::try_from(&raw).unwrap();
        assert_eq!(trade.order_id, "100025362");
        assert_eq!(trade.timestamp, 1418654530);
    }

    #[test]
    fn test_user_trade_missing_order_id() {
        let raw = record(json!({
            "pair": "ltc_btc",
            "type": "sell",
            "amount": 1,
            "rate": 1,
            "timestamp": 1418654530
        }));
        assert!(matches!(
            YoBitUserTrade::try_from(&raw),
            Err(Error::MissingField(key)) if key == "order_id"
        ));
    }
}
