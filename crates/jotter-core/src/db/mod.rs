//! Database layer for the local cache

mod connection;
mod migrations;

pub use connection::Database;
