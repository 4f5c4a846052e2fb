//! Utils

use clap::Parser;

/// Arguments for the storefront demo
#[derive(Debug, Parser)]
pub struct DemoArgs {
    /// Directory backing the persistent store
    #[clap(short, long, default_value = "target/store")]
    pub store: String,

    /// Base path for the fixture files
    #[clap(short, long, default_value = "fixtures")]
    pub fixtures: String,

    /// DO number to look up on the tracking page
    #[clap(short, long)]
    pub track: Option<String>,
}
