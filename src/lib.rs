//! Copperati
//!
//! Matches a photographed hair color to a named copper shade over HTTP and
//! from the command line. The matching itself lives in the `shade-match`
//! crate; this library wires it to config, HTTP handlers and the server.
//! It is exposed for integration testing.

pub mod api;
pub mod assets;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
