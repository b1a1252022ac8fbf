//! Extension - Utilities for Rust applications
//!
//! Centers on a process-wide, thread-safe cache that clears itself once after
//! a configurable TTL, plus small file, JSON and CSV helpers.

pub mod cache;
pub mod config;
pub mod error;
pub mod logging;
pub mod tasks;
pub mod util;

pub use cache::{ProcessCache, TtlCache};
pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
