pub mod config;
pub mod connection;
pub mod hope;
pub mod report;
