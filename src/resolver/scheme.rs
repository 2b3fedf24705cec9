//! Scheme detection by ordered literal prefix.

use std::fmt;

use crate::constants::schemes;

/// Transport family selected by a connection string's prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    Amqp,
    Redis,
    Memcache,
    MongoDb,
    Eager,
    Unknown,
}

/// Which resolver is asking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Broker,
    Backend,
}

/// Prefixes in dispatch order; the first match wins
const PREFIX_TABLE: &[(&str, Scheme)] = &[
    (schemes::AMQP, Scheme::Amqp),
    (schemes::MEMCACHE, Scheme::Memcache),
    (schemes::REDIS, Scheme::Redis),
    (schemes::MONGODB, Scheme::MongoDb),
    (schemes::EAGER, Scheme::Eager),
];

impl Scheme {
    /// Detect the scheme of a connection string by literal, case-sensitive prefix
    ///
    /// `eager` matches as a bare word, so `"eager"`, `"eager://"` and
    /// `"eagerly"` all select [`Scheme::Eager`].
    pub fn detect(url: &str) -> Self {
        PREFIX_TABLE
            .iter()
            .find(|(prefix, _)| url.starts_with(prefix))
            .map(|(_, scheme)| *scheme)
            .unwrap_or(Scheme::Unknown)
    }

    /// The literal prefix that selects this scheme
    pub fn prefix(&self) -> Option<&'static str> {
        PREFIX_TABLE
            .iter()
            .find(|(_, scheme)| scheme == self)
            .map(|(prefix, _)| *prefix)
    }

    /// Prefixes a resolver in `role` accepts, in dispatch order
    pub fn supported_prefixes(role: Role) -> Vec<&'static str> {
        PREFIX_TABLE
            .iter()
            .filter(|(_, scheme)| scheme.supports(role))
            .filter_map(|(_, scheme)| scheme.prefix())
            .collect()
    }

    /// Whether a resolver in `role` can construct a client for this scheme
    pub fn supports(&self, role: Role) -> bool {
        match (self, role) {
            (Scheme::Unknown, _) => false,
            (Scheme::Memcache | Scheme::MongoDb, Role::Broker) => false,
            _ => true,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Amqp => "amqp",
            Scheme::Redis => "redis",
            Scheme::Memcache => "memcache",
            Scheme::MongoDb => "mongodb",
            Scheme::Eager => "eager",
            Scheme::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
