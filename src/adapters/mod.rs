pub mod key_sources;
pub mod registries;
