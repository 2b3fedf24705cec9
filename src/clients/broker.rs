//! # Broker Clients
//!
//! Enum dispatch over the broker families a connection string can select.
//! The handles own the parameters their family needs; opening connections
//! and consuming queues belongs to the transport layer that receives them.

use crate::config::Config;
use crate::resolver::redis_url::RedisParameters;

/// Resolved broker, one variant per supported family
///
/// # Variants
///
/// - `Amqp` - AMQP 0.9.1 exchange/queue broker
/// - `Redis` - Redis list-based broker
/// - `Eager` - in-process broker for synchronous execution and tests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrokerProvider {
    Amqp(AmqpBroker),
    Redis(RedisBroker),
    Eager(EagerBroker),
}

impl BrokerProvider {
    /// Get the provider name for logging/metrics
    pub fn provider_name(&self) -> &'static str {
        match self {
            Self::Amqp(b) => b.provider_name(),
            Self::Redis(b) => b.provider_name(),
            Self::Eager(b) => b.provider_name(),
        }
    }

    /// Whether the broker shares state across processes
    pub fn is_distributed(&self) -> bool {
        !matches!(self, Self::Eager(_))
    }

    /// Queue tasks are published to when the caller names none
    pub fn default_queue(&self) -> Option<&str> {
        match self {
            Self::Amqp(b) => Some(b.default_queue.as_str()),
            Self::Redis(b) => Some(b.default_queue.as_str()),
            Self::Eager(_) => None,
        }
    }
}

/// AMQP broker settings taken from the configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmqpBroker {
    pub url: String,
    pub exchange: String,
    pub exchange_type: String,
    pub binding_key: String,
    pub default_queue: String,
    pub prefetch_count: u16,
}

impl AmqpBroker {
    pub fn new(cnf: &Config) -> Self {
        Self {
            url: cnf.broker.clone(),
            exchange: cnf.amqp.exchange.clone(),
            exchange_type: cnf.amqp.exchange_type.clone(),
            binding_key: cnf.amqp.binding_key.clone(),
            default_queue: cnf.default_queue.clone(),
            prefetch_count: cnf.amqp.prefetch_count,
        }
    }

    pub fn provider_name(&self) -> &'static str {
        "amqp"
    }
}

/// Redis broker addressed by parsed connection parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedisBroker {
    pub params: RedisParameters,
    pub default_queue: String,
}

impl RedisBroker {
    pub fn new(cnf: &Config, params: RedisParameters) -> Self {
        Self {
            params,
            default_queue: cnf.default_queue.clone(),
        }
    }

    pub fn provider_name(&self) -> &'static str {
        "redis"
    }
}

/// In-process broker; ignores every connection setting
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EagerBroker;

impl EagerBroker {
    pub fn new() -> Self {
        Self
    }

    pub fn provider_name(&self) -> &'static str {
        "eager"
    }
}
