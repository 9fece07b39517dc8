//! Daemon mode: persistent server holding the watchlist as a hot resource.

pub mod protocol;
pub mod server;
pub mod service;
