//! Model
//! This provides Internal data structures for multi-exchange support.
//! This should come independent from the specific API (i.e. use internal data structure only).
pub mod currency;
pub mod meta;
pub mod order;
pub mod orderbook;
pub mod ticker;
pub mod trade;
