//! Redis cache client and memoization policy for the Reeldle backend.

pub mod client;
pub mod error;
pub mod memo;

pub use client::{CacheConfig, RedisCache};
pub use error::{CacheError, CacheResult};
pub use memo::MemoPolicy;
