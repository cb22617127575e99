//! Logger bootstrap for hosts embedding the AI core.
use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger.
///
/// `RUST_LOG` always wins when set. Otherwise the host sees `info` and above,
/// and `verbose` additionally opens this crate's targets at `debug` so path
/// replans and search failures become visible.
pub fn init(verbose: bool) {
    let env = Env::default().default_filter_or(default_filter(verbose));
    // A logger installed earlier (by the host or a previous call) stays.
    if Builder::from_env(env).try_init().is_err() {
        log::debug!("logger already installed; keeping it");
    }
}

fn default_filter(verbose: bool) -> String {
    let crate_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    format!("{},{}={crate_level}", LevelFilter::Info, env!("CARGO_CRATE_NAME"))
}
