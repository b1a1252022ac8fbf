//! Background Tasks Module
//!
//! Contains background tasks that run alongside cache operation.
//!
//! # Tasks
//! - TTL Expiry: Clears the whole cache once, after the configured TTL

mod expiry;

pub use expiry::{spawn_expiry_task, ExpiryTimer};
