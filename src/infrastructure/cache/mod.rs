pub mod cache_keys;
pub mod in_memory;

pub use in_memory::CollectionCache;

use std::time::Duration;

/// Default lifetime of a cached collection snapshot.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60);
