/// global
/// Everything declared with lazy_statics! should come here.
/// Only read-only state belongs here, the adapter itself keeps nothing between calls.
pub mod config;
