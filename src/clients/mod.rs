//! # Broker and Backend Clients
//!
//! ```text
//! BrokerProvider (enum)           BackendProvider (enum)
//!   ├── Amqp(AmqpBroker)            ├── Amqp(AmqpBackend)
//!   ├── Redis(RedisBroker)          ├── Memcache(MemcacheBackend)
//!   └── Eager(EagerBroker)          ├── Redis(RedisBackend)
//!                                   ├── MongoDb(MongoDbBackend)
//!                                   └── Eager(EagerBackend)
//! ```
//!
//! The enums are what the resolvers hand back through [`DefaultClientFactory`];
//! ownership passes entirely to the caller.

pub mod backend;
pub mod broker;
pub mod factory;

pub use backend::{
    AmqpBackend, BackendProvider, EagerBackend, MemcacheBackend, MongoDbBackend, RedisBackend,
};
pub use broker::{AmqpBroker, BrokerProvider, EagerBroker, RedisBroker};
pub use factory::{BackendFactory, BrokerFactory, DefaultClientFactory};
