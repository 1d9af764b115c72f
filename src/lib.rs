//! finch — a small desktop chat front-end for a stateful bot endpoint.

pub mod bot;
pub mod storage;
pub mod theme;
pub mod types;
#[cfg(any(feature = "web", feature = "desktop", feature = "mobile"))]
pub mod ui;
pub mod views;
