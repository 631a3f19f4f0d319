use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Build and inspect the bundled CNN architectures.
#[derive(Parser, Debug)]
#[command(name = "ferrite-zoo", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build an architecture for explicit image dimensions
    Build(BuildArgs),

    /// Build an architecture sized for an existing image file
    Probe(ProbeArgs),

    /// Re-realize a saved architecture JSON and print its summary
    Inspect(InspectArgs),

    /// List the available architectures
    List,
}

/// Where the layout comes from and where the result goes.
#[derive(Args, Debug)]
pub struct LayoutArgs {
    /// Image data format: channels_last or channels_first.
    /// Overrides FERRITE_IMAGE_DATA_FORMAT and --config.
    #[arg(long)]
    pub layout: Option<String>,

    /// Backend configuration JSON ({"image_data_format": ...})
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the architecture as JSON to this path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// shallownet, lenet or minivggnet
    pub architecture: String,

    // Dimensions are taken as text so zero and negative values are reported
    // as invalid dimensions rather than clap parse failures.
    #[arg(long, allow_hyphen_values = true)]
    pub width: String,

    #[arg(long, allow_hyphen_values = true)]
    pub height: String,

    #[arg(long, allow_hyphen_values = true)]
    pub depth: String,

    #[arg(long, allow_hyphen_values = true)]
    pub classes: String,

    #[command(flatten)]
    pub layout: LayoutArgs,
}

#[derive(Args, Debug)]
pub struct ProbeArgs {
    /// Image whose width, height and channel count size the input
    pub image: PathBuf,

    /// shallownet, lenet or minivggnet
    pub architecture: String,

    #[arg(long, allow_hyphen_values = true)]
    pub classes: String,

    #[command(flatten)]
    pub layout: LayoutArgs,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Architecture JSON written by `build --output`
    pub spec: PathBuf,
}
