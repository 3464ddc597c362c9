use std::{env::VarError, error::Error};
use tracing_subscriber::EnvFilter;

/// Subscribes to tracing events that will output to the console.
///
/// By default, it enables:
///
/// * `warn` level (and higher) on all modules,
/// * `debug` level (and higher) on the `near_rpc_rs` module,
/// * all levels on the current module.
///
/// Set `RUST_LOG=near_rpc_rs=trace` to see every variant the codec tries:
///
/// ```sh
/// $ RUST_LOG=trace cargo run --example decode_fixture
/// ```
pub fn init_tracing() {
    _init_tracing(None)
}

pub fn init_tracing_with_level(level: &str) {
    _init_tracing(Some(level))
}

// Internal API //

fn _init_tracing(level: Option<&str>) {
    let default_env_filter = format!(
        "warn,near_rpc_rs=debug,{}{}",
        current_exe(),
        level.map(|lvl| format!("={lvl}")).unwrap_or_default()
    );

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|err| {
        match err.source().and_then(|source| source.downcast_ref::<VarError>()) {
            Some(VarError::NotPresent) => EnvFilter::new(default_env_filter),
            _ => panic!("{err:?}"),
        }
    });

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

fn current_exe() -> String {
    std::env::current_exe()
        .ok()
        .as_deref()
        .and_then(|path| path.file_stem())
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
        .unwrap_or_default()
}
