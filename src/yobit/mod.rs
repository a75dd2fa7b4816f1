//! YoBit wire format, the shapes its API v3 and trade API return.
//! Public endpoints answer with one entry per requested pair, keyed by "base_counter".
/// Public market data: depth, ticker, trades, info
pub mod marketdata;
/// Private trade API records: active orders, order info, trade history
pub mod trade;
