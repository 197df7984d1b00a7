pub mod cli;
pub mod config;
pub mod explorer_session;
pub mod ports;
