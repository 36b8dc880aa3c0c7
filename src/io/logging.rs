//! Logger setup for the command-line binary

use crate::io::configuration::DEFAULT_LOG_FILTER;
use env_logger::{Builder, Env};

/// Build the stderr logger, honouring `RUST_LOG` and falling back to `warn`
pub fn logger_builder() -> Builder {
    logger_builder_from(Env::default())
}

/// Build the stderr logger from an explicit environment, falling back to `warn`
pub fn logger_builder_from(env: Env<'_>) -> Builder {
    let mut builder = Builder::from_env(env.default_filter_or(DEFAULT_LOG_FILTER));
    builder.format_timestamp(None).format_target(false);
    builder
}

/// Install the logger; repeated calls are ignored
pub fn init() {
    // A second init (e.g. from tests) is harmless, the first logger wins
    let _ = logger_builder().try_init();
}
