use serde::{Serialize, Serializer};
use std::fmt;

/// Currency code, always uppercase (e.g. BTC)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Currency(String);

impl Currency {
    pub fn new(code: &str) -> Self {
        Currency(code.to_uppercase())
    }

    pub fn code(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Currency {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered (base, counter) pair, ordering follows base first then counter
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CurrencyPair {
    // e.g. BTC
    pub base: Currency,
    // e.g. USD
    pub counter: Currency,
}

impl CurrencyPair {
    pub fn new(base: Currency, counter: Currency) -> Self {
        CurrencyPair { base, counter }
    }
}

/// ```
/// use yobit_adapters::model::currency::{Currency, CurrencyPair};
/// let pair = CurrencyPair::new(Currency::new("btc"), Currency::new("usd"));
/// assert_eq!(pair.to_string(), "BTC/USD");
/// ```
impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.counter)
    }
}

/// Serialized as "BASE/COUNTER" so it can key a JSON object
impl Serialize for CurrencyPair {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
