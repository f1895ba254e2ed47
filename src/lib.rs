//! MCP server exposing the Open-Meteo weather APIs as tools.
//!
//! All upstream requests share a single [`rate_limit::RateLimiter`], so no
//! two requests are dispatched less than the configured interval apart.

pub mod client;
pub mod config;
pub mod constants;
pub mod endpoints;
pub mod error;
pub mod formatters;
pub mod models;
pub mod rate_limit;
pub mod service;

pub use config::Config;
pub use service::OpenMeteo;
