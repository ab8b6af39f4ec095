pub mod key_registry;
pub mod key_source;
