//! # Redis Connection String Parser
//!
//! Extracts `(host, password, db)` from `redis://[password@]host[:port][/db]`.
//!
//! Splitting is on literal separators, not URI grammar:
//!
//! - more than one `@` means no password is recognized, and the host/db text is
//!   the first `@` segment
//! - more than one `/` keeps the first segment as host and reads only the second
//!   as db
//! - a db segment that is not a non-negative integer selects db 0 instead of
//!   failing (see [`lenient_db_index`])

use std::fmt;

use tracing::debug;

use crate::constants::{defaults, schemes, separators};
use crate::error::{ResolverError, ResolverResult};

/// Connection parameters for a Redis broker or backend
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RedisParameters {
    /// `host` or `host:port`, never empty
    pub host: String,
    /// Empty when the connection string has no `password@` part
    pub password: String,
    pub db: u32,
}

impl RedisParameters {
    pub fn has_password(&self) -> bool {
        !self.password.is_empty()
    }
}

impl fmt::Debug for RedisParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let password = if self.has_password() { "***" } else { "" };
        f.debug_struct("RedisParameters")
            .field("host", &self.host)
            .field("password", &password)
            .field("db", &self.db)
            .finish()
    }
}

/// Parse a `redis://` connection string
///
/// Fails with [`ResolverError::InvalidScheme`] when the string does not start
/// with `redis://` or contains it more than once, and with
/// [`ResolverError::EmptyRedisHost`] when no host remains after splitting.
pub fn parse_redis_url(url: &str) -> ResolverResult<RedisParameters> {
    let remainder = split_scheme(url)?;

    let at_parts: Vec<&str> = remainder.split(separators::PASSWORD).collect();
    let (password, host_and_db) = match at_parts.as_slice() {
        [password, host_and_db] => (*password, *host_and_db),
        [host_and_db, ..] => ("", *host_and_db),
        [] => ("", ""),
    };

    let mut slash_parts = host_and_db.split(separators::DATABASE);
    let host = slash_parts.next().unwrap_or_default();
    let db = match slash_parts.next() {
        Some(segment) => lenient_db_index(segment),
        None => defaults::REDIS_DB,
    };

    if host.is_empty() {
        return Err(ResolverError::empty_redis_host(url));
    }

    Ok(RedisParameters {
        host: host.to_string(),
        password: password.to_string(),
        db,
    })
}

/// Read a db index, falling back to db 0 for anything that is not a
/// non-negative integer
///
/// Never fails: trailing text after the db slash is ignored rather than rejected.
pub fn lenient_db_index(segment: &str) -> u32 {
    match segment.parse::<u32>() {
        Ok(db) => db,
        Err(error) => {
            debug!(
                segment = segment,
                error = %error,
                fallback = defaults::REDIS_DB,
                "Ignoring unparsable redis db segment"
            );
            defaults::REDIS_DB
        }
    }
}

/// Split off `redis://`, requiring it to appear exactly once and at the start
fn split_scheme(url: &str) -> ResolverResult<&str> {
    let mut parts = url.split(schemes::REDIS);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(""), Some(remainder), None) => Ok(remainder),
        _ => Err(ResolverError::invalid_scheme(url)),
    }
}
