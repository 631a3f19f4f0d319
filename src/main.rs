//! `ferrite-zoo` command-line tool.
//!
//! ```text
//! ferrite-zoo build lenet --width 28 --height 28 --depth 1 --classes 10
//! ferrite-zoo probe sample.png minivggnet --classes 10 --layout channels_first
//! ferrite-zoo inspect lenet.json
//! ferrite-zoo list
//! ```
//!
//! Set `RUST_LOG=debug` to trace every layer as it is realized.

mod cli;

use clap::Parser;

use ferrite_zoo::config::{resolve_layout, IMAGE_DATA_FORMAT_ENV};
use ferrite_zoo::network::image_spec::parse_dimension;
use ferrite_zoo::{Architecture, ImageSpec, LayoutConvention, ModelGraph, NetworkSpec, Result};

use cli::{Cli, Commands, LayoutArgs};

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Build(args) => {
            let architecture: Architecture = args.architecture.parse()?;
            let image = ImageSpec::new(
                parse_dimension("width", &args.width)?,
                parse_dimension("height", &args.height)?,
                parse_dimension("depth", &args.depth)?,
            )?;
            let classes = parse_dimension("classes", &args.classes)?;
            let layout = layout_for(&args.layout)?;
            let model = architecture.build(image, classes, layout)?;
            emit(&model, &args.layout)
        }
        Commands::Probe(args) => {
            let architecture: Architecture = args.architecture.parse()?;
            let image = ImageSpec::from_image_file(&args.image)?;
            let classes = parse_dimension("classes", &args.classes)?;
            let layout = layout_for(&args.layout)?;
            let model = architecture.build(image, classes, layout)?;
            emit(&model, &args.layout)
        }
        Commands::Inspect(args) => {
            let model = NetworkSpec::load_json(&args.spec)?.realize()?;
            print!("{}", model.summary());
            Ok(())
        }
        Commands::List => {
            for arch in Architecture::ALL {
                println!("{}", arch);
            }
            Ok(())
        }
    }
}

fn layout_for(args: &LayoutArgs) -> Result<LayoutConvention> {
    resolve_layout(
        args.layout.as_deref(),
        std::env::var(IMAGE_DATA_FORMAT_ENV).ok(),
        args.config.as_deref(),
    )
}

fn emit(model: &ModelGraph, args: &LayoutArgs) -> Result<()> {
    print!("{}", model.summary());
    if let Some(path) = &args.output {
        model.to_spec().save_json(path)?;
        log::info!("wrote {} to {}", model.name(), path.display());
    }
    Ok(())
}
