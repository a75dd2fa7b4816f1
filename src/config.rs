use crate::error::{Error, Result};
use ini::Ini;

/// Order id given to order book levels, the exchange does not identify them
pub const DEFAULT_ORDER_ID: &str = "0";
/// Display precision for currencies first seen in the instrument catalog
pub const DEFAULT_CURRENCY_PRECISION: u32 = 8;

const SECTION: &str = "Adapter";

/// Config parameters, direct representation of the [Adapter] section of config.ini
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterConfig {
    pub placeholder_order_id: String,
    pub currency_precision: u32,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        AdapterConfig {
            placeholder_order_id: DEFAULT_ORDER_ID.to_string(),
            currency_precision: DEFAULT_CURRENCY_PRECISION,
        }
    }
}

pub fn from_file(filename: &str) -> Result<AdapterConfig> {
    let ini = Ini::load_from_file(filename)?;
    from_ini(&ini)
}

/// Missing section or keys keep their defaults
pub fn from_ini(ini: &Ini) -> Result<AdapterConfig> {
    let mut config = AdapterConfig::default();
    let Some(section) = ini.section(Some(SECTION)) else {
        return Ok(config);
    };
    if let Some(id) = section.get("placeholder_order_id") {
        config.placeholder_order_id = id.to_string();
    }
    if let Some(precision) = section.get("currency_precision") {
        config.currency_precision =
            precision
                .trim()
                .parse::<u32>()
                .map_err(|_| Error::InvalidConfig {
                    key: "currency_precision".to_string(),
                    value: precision.to_string(),
                })?;
    }
    Ok(config)
}
