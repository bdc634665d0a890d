pub mod checksum;
pub mod config;
pub mod fetcher;
pub mod logging;
pub mod retry;
