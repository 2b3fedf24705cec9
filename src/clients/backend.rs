//! # Result Backend Clients
//!
//! Enum dispatch over the result backend families. Memcache and MongoDB are
//! backend-only. `MongoDbBackend::new` is the one fallible constructor: it
//! rejects URIs that cannot name a server or a database.

use std::time::Duration;

use mongodb::options::{ConnectionString, HostInfo};

use crate::config::Config;
use crate::constants::defaults;
use crate::error::ClientError;
use crate::resolver::memcache_url::MemcacheParameters;
use crate::resolver::redis_url::RedisParameters;

/// Resolved result backend, one variant per supported family
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendProvider {
    Amqp(AmqpBackend),
    Memcache(MemcacheBackend),
    Redis(RedisBackend),
    MongoDb(MongoDbBackend),
    Eager(EagerBackend),
}

impl BackendProvider {
    /// Get the provider name for logging/metrics
    pub fn provider_name(&self) -> &'static str {
        match self {
            Self::Amqp(_) => "amqp",
            Self::Memcache(_) => "memcache",
            Self::Redis(_) => "redis",
            Self::MongoDb(_) => "mongodb",
            Self::Eager(_) => "eager",
        }
    }

    /// Whether stored results are visible to other processes
    pub fn is_distributed(&self) -> bool {
        !matches!(self, Self::Eager(_))
    }

    /// How long results live in the store; `None` for the eager backend
    pub fn results_expire_in(&self) -> Option<Duration> {
        match self {
            Self::Amqp(b) => Some(b.results_expire_in),
            Self::Memcache(b) => Some(b.results_expire_in),
            Self::Redis(b) => Some(b.results_expire_in),
            Self::MongoDb(b) => Some(b.results_expire_in),
            Self::Eager(_) => None,
        }
    }
}

/// AMQP result backend publishing results to a per-task queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmqpBackend {
    pub url: String,
    pub exchange: String,
    pub exchange_type: String,
    pub results_expire_in: Duration,
}

impl AmqpBackend {
    pub fn new(cnf: &Config) -> Self {
        Self {
            url: cnf.result_backend.clone(),
            exchange: cnf.amqp.exchange.clone(),
            exchange_type: cnf.amqp.exchange_type.clone(),
            results_expire_in: cnf.results_expire_in(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemcacheBackend {
    pub servers: Vec<String>,
    pub results_expire_in: Duration,
}

impl MemcacheBackend {
    pub fn new(cnf: &Config, params: MemcacheParameters) -> Self {
        Self {
            servers: params.servers,
            results_expire_in: cnf.results_expire_in(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedisBackend {
    pub params: RedisParameters,
    pub results_expire_in: Duration,
}

impl RedisBackend {
    pub fn new(cnf: &Config, params: RedisParameters) -> Self {
        Self {
            params,
            results_expire_in: cnf.results_expire_in(),
        }
    }
}

/// MongoDB result backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MongoDbBackend {
    pub uri: String,
    /// Seed list addresses as the driver renders them, in URI order
    pub hosts: Vec<String>,
    pub database: String,
    pub results_expire_in: Duration,
}

impl MongoDbBackend {
    /// Validate the result backend URI and pick the database
    ///
    /// The URI is parsed with the driver's connection-string grammar, so
    /// credentials, bracketed IPv6 hosts and options are all understood. The
    /// database comes from the URI path when present, then from
    /// `cnf.mongodb.database`, then the `machinery` default.
    pub fn new(cnf: &Config) -> Result<Self, ClientError> {
        let uri = cnf.result_backend.as_str();
        let parsed = ConnectionString::parse(uri)
            .map_err(|e| ClientError::invalid_uri(uri, e.to_string()))?;

        let hosts = match &parsed.host_info {
            HostInfo::HostIdentifiers(addresses) => {
                addresses.iter().map(ToString::to_string).collect::<Vec<_>>()
            }
            _ => Vec::new(),
        };
        if hosts.is_empty() {
            return Err(ClientError::invalid_uri(uri, "no hosts specified"));
        }

        let database = match parsed.default_database.filter(|db| !db.is_empty()) {
            Some(database) => database,
            None => cnf
                .mongodb
                .database
                .clone()
                .unwrap_or_else(|| defaults::MONGODB_DATABASE.to_string()),
        };
        if database.is_empty() {
            return Err(ClientError::missing_database(uri));
        }

        Ok(Self {
            uri: uri.to_string(),
            hosts,
            database,
            results_expire_in: cnf.results_expire_in(),
        })
    }
}

/// In-process result backend; results live only as long as the caller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EagerBackend;

impl EagerBackend {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mongo(uri: &str) -> Result<MongoDbBackend, ClientError> {
        MongoDbBackend::new(&Config::with_urls("eager", uri))
    }

    #[test]
    fn test_mongodb_database_from_path() {
        let backend = mongo("mongodb://user:pw@db1:27017,db2:27018/results?replicaSet=rs0").unwrap();

        assert_eq!(backend.hosts, vec!["db1:27017", "db2:27018"]);
        assert_eq!(backend.database, "results");
    }

    #[test]
    fn test_mongodb_database_falls_back_to_config_then_default() {
        assert_eq!(mongo("mongodb://localhost").unwrap().database, "machinery");

        let mut cnf = Config::with_urls("eager", "mongodb://localhost:27017/");
        cnf.mongodb.database = Some("tasks".to_string());
        assert_eq!(MongoDbBackend::new(&cnf).unwrap().database, "tasks");
    }

    #[test]
    fn test_mongodb_rejects_bad_seed_lists() {
        for uri in [
            "mongodb://",
            "mongodb:///results",
            "mongodb://localhost:port",
            "mongodb://localhost:99999",
        ] {
            assert!(
                matches!(mongo(uri), Err(ClientError::InvalidUri { .. })),
                "{uri} should be rejected"
            );
        }
    }

    #[test]
    fn test_mongodb_accepts_bracketed_ipv6_hosts() {
        let bare = mongo("mongodb://[::1]").unwrap();
        assert_eq!(bare.hosts.len(), 1);
        assert_eq!(bare.database, "machinery");

        let with_port = mongo("mongodb://[::1]:27017/results").unwrap();
        assert_eq!(with_port.hosts.len(), 1);
        assert_eq!(with_port.database, "results");
    }

    #[test]
    fn test_mongodb_rejects_empty_configured_database() {
        let mut cnf = Config::with_urls("eager", "mongodb://localhost");
        cnf.mongodb.database = Some(String::new());

        assert_eq!(
            MongoDbBackend::new(&cnf),
            Err(ClientError::missing_database("mongodb://localhost"))
        );
    }

    #[test]
    fn test_results_expiry_follows_config() {
        let mut cnf = Config::with_urls("eager", "memcache://a:11211");
        cnf.results_expire_in = 30;
        let params = MemcacheParameters {
            servers: vec!["a:11211".to_string()],
        };

        let backend = BackendProvider::Memcache(MemcacheBackend::new(&cnf, params));

        assert_eq!(backend.results_expire_in(), Some(Duration::from_secs(30)));
        assert_eq!(BackendProvider::Eager(EagerBackend::new()).results_expire_in(), None);
    }
}
