//! UI module root: exposes drawing functions for individual panels.

pub mod configuration;
pub mod control;
pub mod dashboard;
pub mod header;
pub mod theme;
pub mod toast;
pub mod util;
