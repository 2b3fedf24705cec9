//! # Connection String Resolution
//!
//! Turns a broker or result backend connection string into a client:
//!
//! 1. [`Scheme::detect`] picks the transport family from the literal prefix
//! 2. a scheme-specific extractor pulls out the parameters the family needs
//!    ([`parse_redis_url`], [`parse_memcache_url`])
//! 3. the resolver hands them to a client factory and returns its result
//!
//! Resolution is synchronous and keeps no state between calls.
//!
//! ## Usage
//!
//! ```rust
//! use broker_resolver::config::Config;
//! use broker_resolver::resolver::{resolve_backend, resolve_broker};
//!
//! let cnf = Config::with_urls("redis://secret@localhost:6379/1", "memcache://a:11211,b:11211");
//!
//! let broker = resolve_broker(&cnf).unwrap();
//! let backend = resolve_backend(&cnf).unwrap();
//! assert_eq!(broker.provider_name(), "redis");
//! assert_eq!(backend.provider_name(), "memcache");
//! ```

pub mod backend;
pub mod broker;
pub mod memcache_url;
pub mod redis_url;
pub mod scheme;

pub use backend::{resolve_backend, BackendResolver};
pub use broker::{resolve_broker, BrokerResolver};
pub use memcache_url::{parse_memcache_url, MemcacheParameters};
pub use redis_url::{lenient_db_index, parse_redis_url, RedisParameters};
pub use scheme::{Role, Scheme};
