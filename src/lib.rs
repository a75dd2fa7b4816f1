/// Adapter config and its defaults
pub mod config;
/// Conversion errors
pub mod error;
/// Everything declared with lazy_statics!. Refrain from overusing lazy_statics, pass variables instead
pub mod global;
/// Logger intialization
pub mod logger;
/// API independent model struct for multi-exchange support
pub mod model;
/// String functions
pub mod strings;
/// Traits/impl to convert between API models and internal models
pub mod translator;
/// YoBit wire format
pub mod yobit;
