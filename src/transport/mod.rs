//! User-facing surfaces: CLI output and HTTP API

pub mod cli;
pub mod http;
