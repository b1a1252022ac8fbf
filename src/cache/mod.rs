//! Cache Module
//!
//! Provides a thread-safe in-memory cache that clears itself once after a TTL,
//! and the process-wide instance built on it.

mod global;
mod store;


// Re-export public types
pub use global::ProcessCache;
pub use store::TtlCache;
