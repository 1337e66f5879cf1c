//! ByeWind: a terminal admin dashboard over a fixed set of sample orders.

pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod error;
pub mod input;
pub mod logging;
pub mod modules;
pub mod store;
pub mod ui;
