//! # Resolution Error Types
//!
//! Structured errors for connection-string resolution using thiserror.
//! Every resolution error carries the offending connection string verbatim
//! so an operator can fix the configuration from the message alone.

use thiserror::Error;

/// Errors produced while turning a connection string into a client
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolverError {
    #[error("No redis scheme found in connection string: {url}")]
    InvalidScheme { url: String },

    #[error("Redis connection string has no host, expected redis://[password@]host[:port][/db], instead got {url}")]
    EmptyRedisHost { url: String },

    #[error("Redis broker connection string should be in format redis://host:port, instead got {url}")]
    MalformedRedisUrl { url: String },

    #[error("Memcache result backend connection string should be in format memcache://server1:port,server2:port, instead got {url}")]
    MalformedMemcacheUrl { url: String },

    #[error("Memcache result backend connection string lists no servers: {url}")]
    EmptyMemcacheServers { url: String },

    #[error("Factory failed with broker URL: {url}")]
    UnsupportedBroker { url: String },

    #[error("Factory failed with result backend: {url}")]
    UnsupportedBackend { url: String },

    #[error("Client construction failed for {url}: {source}")]
    Constructor {
        url: String,
        #[source]
        source: ClientError,
    },
}

impl ResolverError {
    pub fn invalid_scheme(url: impl Into<String>) -> Self {
        Self::InvalidScheme { url: url.into() }
    }

    pub fn empty_redis_host(url: impl Into<String>) -> Self {
        Self::EmptyRedisHost { url: url.into() }
    }

    pub fn malformed_redis_url(url: impl Into<String>) -> Self {
        Self::MalformedRedisUrl { url: url.into() }
    }

    pub fn malformed_memcache_url(url: impl Into<String>) -> Self {
        Self::MalformedMemcacheUrl { url: url.into() }
    }

    pub fn empty_memcache_servers(url: impl Into<String>) -> Self {
        Self::EmptyMemcacheServers { url: url.into() }
    }

    pub fn unsupported_broker(url: impl Into<String>) -> Self {
        Self::UnsupportedBroker { url: url.into() }
    }

    pub fn unsupported_backend(url: impl Into<String>) -> Self {
        Self::UnsupportedBackend { url: url.into() }
    }

    /// Wrap a constructor failure without altering it
    pub fn constructor(url: impl Into<String>, source: ClientError) -> Self {
        Self::Constructor {
            url: url.into(),
            source,
        }
    }

    /// The connection string that failed to resolve
    pub fn url(&self) -> &str {
        match self {
            Self::InvalidScheme { url }
            | Self::EmptyRedisHost { url }
            | Self::MalformedRedisUrl { url }
            | Self::MalformedMemcacheUrl { url }
            | Self::EmptyMemcacheServers { url }
            | Self::UnsupportedBroker { url }
            | Self::UnsupportedBackend { url }
            | Self::Constructor { url, .. } => url,
        }
    }

    /// Whether the input used a scheme no resolver recognizes
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedBroker { .. } | Self::UnsupportedBackend { .. }
        )
    }
}

/// Errors raised by fallible client constructors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("Invalid URI '{uri}': {reason}")]
    InvalidUri { uri: String, reason: String },

    #[error("No database name could be determined for '{uri}'")]
    MissingDatabase { uri: String },
}

impl ClientError {
    pub fn invalid_uri(uri: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUri {
            uri: uri.into(),
            reason: reason.into(),
        }
    }

    pub fn missing_database(uri: impl Into<String>) -> Self {
        Self::MissingDatabase { uri: uri.into() }
    }
}

/// Result type for resolution operations
pub type ResolverResult<T> = Result<T, ResolverError>;
