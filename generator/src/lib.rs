//! Library behind the `generate_icons` binary.
//!
//! Exposes `inner_main` so the workspace-level shim binary can call into the
//! generator, and the individual steps for reuse and testing.

extern crate core;

pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod manifest;

use std::sync::Once;

use eyre::{Result, WrapErr as _};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt::time::ChronoLocal};

use cli::{Cli, LogFormat};
pub use config::{IconConfig, TargetSize};
pub use error::GenerateError;
pub use generate::{GeneratedIcon, generate_icons};

static INIT_TRACING: Once = Once::new();

fn init_tracing(log_format: LogFormat) {
    INIT_TRACING.call_once(move || {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_timer(ChronoLocal::rfc_3339());

        match log_format {
            LogFormat::Compact => builder.compact().init(),
            LogFormat::Json => builder.json().init(),
            LogFormat::Pretty => builder.pretty().init(),
        }
    });
}

/// The generator's main function; can be called from a shim binary.
///
/// Generates the icon set described by [`IconConfig::default`].
///
/// # Errors
///
/// Returns an error if the source image cannot be decoded or an icon cannot be written.
pub fn inner_main(invocation: Cli) -> Result<()> {
    init_tracing(invocation.log_format);

    let config = IconConfig::default();
    let span = tracing::info_span!("icons.generate", version = env!("CARGO_PKG_VERSION"));
    let _enter = span.enter();

    let generated = generate_icons(&config).wrap_err_with(|| {
        format!(
            "Failed to generate icons from {} into {}",
            config.source.display(),
            config.output_dir.display()
        )
    })?;

    let entries = manifest::entries(&generated, manifest::PUBLIC_ICON_PREFIX);
    let json = manifest::to_json(&entries).wrap_err("rendering manifest icon entries")?;
    debug!("Manifest icons:\n{json}");

    Ok(())
}
