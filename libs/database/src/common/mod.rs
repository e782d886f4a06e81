//! Shared database utilities: connection retry helpers.

mod retry;

pub use retry::{retry, retry_with_backoff, RetryConfig};
