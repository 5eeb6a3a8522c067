pub mod animated_logger;
pub mod console_notifier;
pub mod view_printer;

use log::LevelFilter;

/// `RUST_LOG` wins over the defaults; `verbose` lowers the default to debug.
pub fn init(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();
}
