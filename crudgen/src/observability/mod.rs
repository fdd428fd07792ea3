//! Structured logging
//!
//! Repositories and services emit `tracing` events; this module installs the
//! subscriber that prints them.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset
#[must_use]
pub const fn default_directives() -> &'static str {
    if cfg!(debug_assertions) {
        "debug,crudgen=trace,sqlx=warn"
    } else {
        "info"
    }
}

/// Initialize the global subscriber
///
/// Pretty output in debug builds, JSON lines in release builds. The filter is
/// read from `RUST_LOG`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
///
/// ```rust,no_run
/// # fn main() -> anyhow::Result<()> {
/// crudgen::observability::init()?;
/// tracing::info!("service started");
/// # Ok(())
/// # }
/// ```
pub fn init() -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives()));

    #[cfg(debug_assertions)]
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init()?;
    }

    #[cfg(not(debug_assertions))]
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()?;
    }

    Ok(())
}
