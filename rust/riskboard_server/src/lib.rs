//! HTTP front end for the risk scoring dashboard.
//!
//! The binary in `main.rs` loads the CSV once, builds the shared state and
//! serves the page plus its JSON API. Everything here is also usable from
//! tests, which drive the router directly without binding a socket.

pub mod cli;
pub mod error;
pub mod page;
pub mod server;
