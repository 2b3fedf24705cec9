#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Broker Resolver
//!
//! Resolves task queue connection strings into broker and result backend clients.
//!
//! ## Overview
//!
//! A worker is configured with two opaque strings: where tasks travel (the
//! broker) and where their results are kept (the result backend). This crate
//! inspects each string's scheme prefix, extracts the parameters that transport
//! family needs, and constructs the matching client or returns an error naming
//! the string that could not be resolved.
//!
//! ## Supported Connection Strings
//!
//! | Prefix | Broker | Backend |
//! |---|---|---|
//! | `amqp://` | yes | yes |
//! | `redis://[password@]host[:port][/db]` | yes | yes |
//! | `memcache://host:port,host:port` | no | yes |
//! | `mongodb://` | no | yes |
//! | `eager` | yes | yes |
//!
//! ## Module Organization
//!
//! - [`resolver`] - scheme detection, parameter extraction and the two resolvers
//! - [`clients`] - provider enums and the client factory seam
//! - [`config`] - configuration object and loading
//! - [`error`] - structured error handling
//! - [`logging`] - structured logging setup and URL redaction
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use broker_resolver::{resolve_backend, resolve_broker, Config};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! broker_resolver::logging::init_structured_logging();
//!
//! let config = Config::from_env()?;
//! let broker = resolve_broker(&config)?;
//! let backend = resolve_backend(&config)?;
//!
//! println!("broker={} backend={}", broker.provider_name(), backend.provider_name());
//! # Ok(())
//! # }
//! ```

pub mod clients;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod resolver;

pub use clients::{BackendProvider, BrokerProvider, DefaultClientFactory};
pub use config::Config;
pub use error::{ClientError, ResolverError, ResolverResult};
pub use resolver::{
    parse_memcache_url, parse_redis_url, resolve_backend, resolve_broker, BackendResolver,
    BrokerResolver, MemcacheParameters, RedisParameters, Role, Scheme,
};
