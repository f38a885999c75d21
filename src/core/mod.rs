pub mod alphabet;
pub mod config;
pub mod encoded;
