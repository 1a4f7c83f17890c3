use log::LevelFilter;

/// `RUST_LOG` is honoured; `level` is the fallback filter. Output goes to stderr so
/// it never mixes with image data on stdout.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_millis()
        .init();
}
