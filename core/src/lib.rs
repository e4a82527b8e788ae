//! Process bootstrap shared by the catalog binaries: argument parsing,
//! logging and the async runtime.

use clap::{CommandFactory, FromArgMatches};
use tracing_subscriber::EnvFilter;

pub use anyhow;
pub use chrono;
pub use clap;
pub use tokio;
pub use tracing;

pub mod prelude {
    pub use std::{sync::Arc, time::Duration};

    pub use anyhow::{anyhow, Context, Result};
    pub use chrono::{DateTime, Utc};
    pub use clap::Parser;
    pub use tracing::{debug, error, info, warn};
}

use prelude::*;

/// Static settings for a service started through [`run`].
#[derive(Debug, Clone, Copy)]
pub struct StartConfig {
    pub service_name: &'static str,
}

/// Resources handed to a service once the process is bootstrapped.
pub struct Common {
    pub rt: tokio::runtime::Runtime,
}

#[derive(Debug, clap::Parser)]
struct Opts<T: clap::Args> {
    /// Log filter used when `RUST_LOG` is not set
    #[arg(long, env, default_value = "info")]
    log_filter: String,

    #[command(flatten)]
    service: T,
}

/// Parse the service arguments, install the tracing subscriber, build the
/// tokio runtime and hand control to `f`.
///
/// The process exits with a non-zero status if `f` fails.
pub fn run<A: clap::Args>(config: StartConfig, f: impl FnOnce(Common, A) -> Result<()>) {
    let matches = Opts::<A>::command()
        .name(config.service_name)
        .get_matches();
    let opts = Opts::<A>::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&opts.log_filter)),
        )
        .init();

    let res = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build tokio runtime")
        .and_then(|rt| {
            info!(service = config.service_name, "starting");
            f(Common { rt }, opts.service)
        });

    if let Err(e) = res {
        error!("{e:?}");
        std::process::exit(1);
    }
}
