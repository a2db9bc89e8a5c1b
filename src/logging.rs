use env_logger::{Builder, Env};

/// Initializes the global logger.
///
/// Defaults to warnings only so nothing scribbles over the alternate
/// screen; `RUST_LOG` overrides as usual.
pub fn init() {
    let env = Env::default().default_filter_or("warn");

    // `try_init` only fails if a logger was already set. Ignore that case
    // so tests can call `init` multiple times without panicking.
    let _ = Builder::from_env(env).try_init();
}
