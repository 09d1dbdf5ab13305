//! Outbound service clients

pub mod ipinfo;

pub use ipinfo::IpInfoClient;
