//! cloudmgr: a simulated cloud infrastructure console for the terminal.
//!
//! All numbers are synthetic. The [`engine::Engine`] jitters gauges and dashboard
//! counters, the [`console::Console`] ties it to pages, notices and the VM wizard,
//! and [`app::App`] draws it with ratatui.

pub mod actions;
pub mod app;
pub mod catalog;
pub mod config;
pub mod console;
pub mod engine;
pub mod error;
pub mod history;
pub mod notify;
pub mod router;
pub mod schedule;
pub mod types;
pub mod ui;
pub mod wizard;
