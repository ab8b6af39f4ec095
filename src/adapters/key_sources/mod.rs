pub mod command_key_source;
