use log::LevelFilter;

/// Installs the env_logger backend. `RUST_LOG` can still narrow individual modules.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp_millis()
        .init();
}
