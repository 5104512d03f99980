//! Client-side facade over a remote Redis-compatible cache store
//!
//! Provides a small command surface with:
//! - Namespaced string get/set/delete forwarding
//! - An explicit connect step over a single multiplexed connection
//! - Cursor-based delete-by-pattern that never asks the store to list
//!   the whole keyspace in one call

mod client;
pub mod config;
mod connection;
mod error;
mod reply;
mod scan;

pub use client::Client;
pub use config::{ClientConfig, ScanScope};
pub use connection::{RedisConnection, StoreConnection};
pub use error::Error;
pub use reply::Reply;
