use broker_resolver::{
    parse_redis_url, resolve_backend, resolve_broker, Config, ResolverError, Scheme,
};
use proptest::prelude::*;

const KNOWN_PREFIXES: [&str; 5] = ["amqp://", "redis://", "memcache://", "mongodb://", "eager"];

/// Strings that start with none of the recognized prefixes
fn unknown_scheme_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9:/@.,_-]{0,40}".prop_filter("must not start with a known prefix", |s| {
        !KNOWN_PREFIXES.iter().any(|prefix| s.starts_with(prefix))
    })
}

fn host_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9.-]{0,20}(:[0-9]{1,5})?"
}

proptest! {
    /// Property: unrecognized strings are rejected by both resolvers, naming the input
    #[test]
    fn unknown_schemes_are_unsupported(url in unknown_scheme_strategy()) {
        prop_assert_eq!(Scheme::detect(&url), Scheme::Unknown);

        let cnf = Config::with_urls(url.clone(), url.clone());
        prop_assert_eq!(resolve_broker(&cnf), Err(ResolverError::unsupported_broker(url.clone())));
        prop_assert_eq!(resolve_backend(&cnf), Err(ResolverError::unsupported_backend(url)));
    }

    /// Property: any db text after the slash parses successfully
    #[test]
    fn db_segment_never_fails(host in host_strategy(), db in "[^/@]{0,12}") {
        let url = format!("redis://{host}/{db}");
        let parsed = parse_redis_url(&url);

        prop_assert!(parsed.is_ok(), "{} should parse: {:?}", url, parsed);
        let parsed = parsed.unwrap();
        prop_assert_eq!(parsed.host, host);
        prop_assert_eq!(parsed.db, db.parse::<u32>().unwrap_or(0));
    }

    /// Property: well-formed strings round out to their components
    #[test]
    fn well_formed_redis_urls_parse(
        password in "[a-zA-Z0-9]{1,16}",
        host in host_strategy(),
        db in 0u32..16,
    ) {
        let parsed = parse_redis_url(&format!("redis://{password}@{host}/{db}")).unwrap();

        prop_assert_eq!(parsed.password, password);
        prop_assert_eq!(parsed.host, host);
        prop_assert_eq!(parsed.db, db);
    }

    /// Property: resolution carries no state between calls
    #[test]
    fn parsing_is_idempotent(url in "redis://[a-z0-9@/:.]{0,24}") {
        prop_assert_eq!(parse_redis_url(&url), parse_redis_url(&url));
    }
}
