//! Tracing and error-report initialization for the binaries.

use crate::Environment;
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter, Layer, Registry};

/// Install color-eyre report hooks.
///
/// Must run before the first fallible operation in `main` so startup
/// errors get the full report treatment. Safe to call more than once.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Initialize the global tracing subscriber.
///
/// Production emits flattened JSON for log shippers; development gets
/// pretty human-readable output. An ErrorLayer is always attached so
/// eyre reports carry span traces. `RUST_LOG` overrides the default
/// filter. Re-initialization (common in tests) is a silent no-op.
pub fn init_tracing(environment: &Environment) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(environment));

    let fmt_layer: Box<dyn Layer<Registry> + Send + Sync> = if environment.is_production() {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(false)
            .flatten_event(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .pretty()
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
            .boxed()
    };

    let initialized = tracing_subscriber::registry()
        .with(fmt_layer)
        .with(tracing_error::ErrorLayer::default())
        .with(filter)
        .try_init()
        .is_ok();

    if initialized {
        info!("Tracing initialized. Environment: {:?}", environment);
    }
}

fn default_filter(environment: &Environment) -> EnvFilter {
    if environment.is_production() {
        EnvFilter::new("info,tower_http=info,sea_orm=warn")
    } else {
        EnvFilter::new("debug")
    }
}
