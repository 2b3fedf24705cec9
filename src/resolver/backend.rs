//! Result backend resolution from `Config::result_backend`.

use tracing::debug;

use super::memcache_url::parse_memcache_url;
use super::redis_url::parse_redis_url;
use super::scheme::{Role, Scheme};
use crate::clients::{BackendFactory, BackendProvider, DefaultClientFactory};
use crate::config::Config;
use crate::error::{ResolverError, ResolverResult};
use crate::logging::redact_url;

/// Selects and constructs a result backend from its connection string
#[derive(Debug, Clone, Default)]
pub struct BackendResolver<F = DefaultClientFactory> {
    factory: F,
}

impl BackendResolver<DefaultClientFactory> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: BackendFactory> BackendResolver<F> {
    /// Use custom client constructors
    pub fn with_factory(factory: F) -> Self {
        Self { factory }
    }

    /// Resolve `cnf.result_backend` into a backend client
    ///
    /// The MongoDB constructor is the only fallible one; its error comes back
    /// wrapped in [`ResolverError::Constructor`] with the source untouched.
    pub fn resolve(&self, cnf: &Config) -> ResolverResult<F::Backend> {
        let url = cnf.result_backend.as_str();
        let scheme = Scheme::detect(url);
        debug!(url = %redact_url(url), scheme = %scheme, "Resolving result backend");

        if !scheme.supports(Role::Backend) {
            return Err(ResolverError::unsupported_backend(url));
        }

        match scheme {
            Scheme::Amqp => Ok(self.factory.amqp(cnf)),
            Scheme::Memcache => {
                let params = parse_memcache_url(url)?;
                debug!(servers = params.servers.len(), "Memcache servers resolved");
                Ok(self.factory.memcache(cnf, params))
            }
            Scheme::Redis => {
                let params = parse_redis_url(url)?;
                debug!(host = %params.host, db = params.db, "Redis backend parameters resolved");
                Ok(self.factory.redis(cnf, params))
            }
            Scheme::MongoDb => self
                .factory
                .mongodb(cnf)
                .map_err(|source| ResolverError::constructor(url, source)),
            Scheme::Eager => Ok(self.factory.eager()),
            Scheme::Unknown => Err(ResolverError::unsupported_backend(url)),
        }
    }
}

/// Resolve `cnf.result_backend` with the default client constructors
pub fn resolve_backend(cnf: &Config) -> ResolverResult<BackendProvider> {
    BackendResolver::new().resolve(cnf)
}
