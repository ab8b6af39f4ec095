pub mod public_key;
pub mod remote_key;
