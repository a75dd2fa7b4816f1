use crate::model::currency::{Currency, CurrencyPair};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// Trading rules of a single pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrencyPairMetaData {
    pub trading_fee: Decimal,
    pub minimum_amount: Option<Decimal>,
    pub maximum_amount: Option<Decimal>,
    // decimal places accepted in the price
    pub price_scale: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrencyMetaData {
    pub scale: u32,
}

impl CurrencyMetaData {
    pub fn new(scale: u32) -> Self {
        CurrencyMetaData { scale }
    }
}

/// Everything known about the exchange's pairs and currencies
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExchangeMetaData {
    pub currency_pairs: BTreeMap<CurrencyPair, CurrencyPairMetaData>,
    pub currencies: BTreeMap<Currency, CurrencyMetaData>,
}
