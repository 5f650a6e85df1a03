//! City Runner - an endless side-scrolling runner for the terminal.
//!
//! The simulation (`core`, `runner`) is independent of the terminal so it can
//! be driven by tests with a manual clock and scripted input.

pub mod config;
pub mod core;
pub mod input;
pub mod runner;
pub mod ui;
pub mod utils;
