//! Logger setup shared by the sysprobe binaries.

/// Installs an `env_logger` writing to stderr.
///
/// stdout is reserved for the report itself. The default level is `warn`;
/// `RUST_LOG` overrides it.
pub fn init() {
    env_logger::Builder::new()
        .target(env_logger::Target::Stderr)
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
