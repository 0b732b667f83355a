//! Logger setup.
//!
//! Logs go to stderr through [`env_logger`]. Without `RUST_LOG`, this crate logs at
//! [`Info`](log::LevelFilter::Info) in debug builds and [`Warn`](log::LevelFilter::Warn) in
//! release builds. Override it like so:
//!
//! ```sh
//! $> RUST_LOG=bacon_numbers=debug cargo run -- --data-dir data
//! ```

use log::LevelFilter;

pub fn init() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    let env = env_logger::Env::default().default_filter_or(default_filter(level));
    env_logger::Builder::from_env(env).init();
}

fn default_filter(level: LevelFilter) -> String {
    format!("{}={}", env!("CARGO_CRATE_NAME"), level.as_str().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(LevelFilter::Warn), "bacon_numbers=warn");
        assert_eq!(default_filter(LevelFilter::Off), "bacon_numbers=off");
    }
}
