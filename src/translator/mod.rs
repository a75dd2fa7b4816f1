/// Trait implementation on YoBit API
pub mod yobit;
/// Traits to be implemented
pub mod traits;
