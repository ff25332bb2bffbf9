//! Shim binary that calls into the `pwa_icons_generator` library's `inner_main`.
use clap::Parser as _;
use eyre::Result;

use pwa_icons_generator::cli::Cli;

fn main() -> Result<()> {
    // Delegate to library entrypoint
    pwa_icons_generator::inner_main(Cli::parse())
}
