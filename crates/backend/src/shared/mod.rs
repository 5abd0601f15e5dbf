pub mod config;
pub mod generation;
pub mod request_log;
pub mod logging;
