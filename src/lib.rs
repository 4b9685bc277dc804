//! risk-tracker - a small, strict, in-memory risk tracking service
//!
//! Records live in memory only and are lost on restart.

pub mod cli;
pub mod config;
pub mod http_server;
pub mod observability;
pub mod risk;
