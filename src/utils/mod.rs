//! Utility modules: build info, logging, high-score persistence.

pub mod build_info;
pub mod logging;
pub mod persistence;
