//! Memcache server-list extraction for `memcache://host:port,host:port`.

use crate::constants::{schemes, separators};
use crate::error::{ResolverError, ResolverResult};

/// Ordered memcache server list, never empty
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemcacheParameters {
    pub servers: Vec<String>,
}

/// Parse a `memcache://` connection string into its server list
///
/// Entries are kept in order and passed through as written. Empty entries from
/// doubled or trailing commas are dropped, and a string that names no server
/// at all fails with [`ResolverError::EmptyMemcacheServers`].
pub fn parse_memcache_url(url: &str) -> ResolverResult<MemcacheParameters> {
    let parts: Vec<&str> = url.split(schemes::MEMCACHE).collect();
    let remainder = match parts.as_slice() {
        [_, remainder] => *remainder,
        _ => return Err(ResolverError::malformed_memcache_url(url)),
    };

    let servers: Vec<String> = remainder
        .split(separators::SERVER_LIST)
        .filter(|server| !server.is_empty())
        .map(str::to_string)
        .collect();

    if servers.is_empty() {
        return Err(ResolverError::empty_memcache_servers(url));
    }

    Ok(MemcacheParameters { servers })
}
