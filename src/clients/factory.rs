//! # Client Constructors
//!
//! The resolvers never build clients themselves: once parameters are known
//! they call a factory. `DefaultClientFactory` produces the provider enums in
//! this crate; embedding applications and tests can supply their own.

use crate::config::Config;
use crate::error::ClientError;
use crate::resolver::memcache_url::MemcacheParameters;
use crate::resolver::redis_url::RedisParameters;

use super::backend::{
    AmqpBackend, BackendProvider, EagerBackend, MemcacheBackend, MongoDbBackend, RedisBackend,
};
use super::broker::{AmqpBroker, BrokerProvider, EagerBroker, RedisBroker};

/// Constructors for every broker family
pub trait BrokerFactory {
    type Broker;

    fn amqp(&self, cnf: &Config) -> Self::Broker;

    fn redis(&self, cnf: &Config, params: RedisParameters) -> Self::Broker;

    fn eager(&self) -> Self::Broker;
}

/// Constructors for every result backend family
///
/// Only `mongodb` may fail; its error is surfaced to the caller unchanged.
pub trait BackendFactory {
    type Backend;

    fn amqp(&self, cnf: &Config) -> Self::Backend;

    fn memcache(&self, cnf: &Config, params: MemcacheParameters) -> Self::Backend;

    fn redis(&self, cnf: &Config, params: RedisParameters) -> Self::Backend;

    fn mongodb(&self, cnf: &Config) -> Result<Self::Backend, ClientError>;

    fn eager(&self) -> Self::Backend;
}

/// Builds the provider enums defined in [`crate::clients`]
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultClientFactory;

impl BrokerFactory for DefaultClientFactory {
    type Broker = BrokerProvider;

    fn amqp(&self, cnf: &Config) -> BrokerProvider {
        BrokerProvider::Amqp(AmqpBroker::new(cnf))
    }

    fn redis(&self, cnf: &Config, params: RedisParameters) -> BrokerProvider {
        BrokerProvider::Redis(RedisBroker::new(cnf, params))
    }

    fn eager(&self) -> BrokerProvider {
        BrokerProvider::Eager(EagerBroker::new())
    }
}

impl BackendFactory for DefaultClientFactory {
    type Backend = BackendProvider;

    fn amqp(&self, cnf: &Config) -> BackendProvider {
        BackendProvider::Amqp(AmqpBackend::new(cnf))
    }

    fn memcache(&self, cnf: &Config, params: MemcacheParameters) -> BackendProvider {
        BackendProvider::Memcache(MemcacheBackend::new(cnf, params))
    }

    fn redis(&self, cnf: &Config, params: RedisParameters) -> BackendProvider {
        BackendProvider::Redis(RedisBackend::new(cnf, params))
    }

    fn mongodb(&self, cnf: &Config) -> Result<BackendProvider, ClientError> {
        MongoDbBackend::new(cnf).map(BackendProvider::MongoDb)
    }

    fn eager(&self) -> BackendProvider {
        BackendProvider::Eager(EagerBackend::new())
    }
}
