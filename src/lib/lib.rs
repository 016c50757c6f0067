pub mod analysis;
pub mod config;
pub mod logger;
pub mod net;
