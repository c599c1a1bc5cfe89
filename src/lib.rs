pub mod combinatorics;
pub mod constants;
pub mod dice_mechanics;
pub mod env_config;
pub mod input;
pub mod pages;
pub mod probability;
pub mod server;
pub mod session;
