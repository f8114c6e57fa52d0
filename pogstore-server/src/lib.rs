//! pogstore-server: HTTP CRUD service for pogs
//!
//! Exposes a single `pogs` resource (named collectible items with a
//! ticker symbol, price, and color) over HTTP, backed by one PostgreSQL
//! table. Routes translate requests into parameterized SQL and map row
//! sets back to the fixed wire contract.

pub mod db;
pub mod http;

pub use db::create_pool;
pub use http::{run_server, ServerConfig};
