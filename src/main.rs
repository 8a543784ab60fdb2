use std::error::Error;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use deep_fractal_explorer::{
    BlockHexPresenter, EventScript, ExplorerConfig, ReplayController, TextUniformPresenter,
    UniformSink,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One line of named uniforms per frame.
    Text,
    /// The packed uniform block as hex.
    Block,
}

#[derive(Debug, Parser)]
#[command(
    name = "deep_fractal_explorer",
    about = "Replays an input script through the deep-zoom view and prints the exported uniforms",
    version
)]
struct Args {
    /// Event script to replay.
    script: PathBuf,

    /// TOML config; `explorer.toml` is tried when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn replay<S>(config: &ExplorerConfig, script: &EventScript, sink: &mut S) -> Result<(), Box<dyn Error>>
where
    S: UniformSink<Error = io::Error>,
{
    let mut replay = ReplayController::new(config.build_controller());
    let summary = replay.run(script, sink)?;

    log::info!(
        "replayed {} frame(s){}",
        summary.frames_presented,
        if summary.closed { ", closed" } else { "" }
    );
    log::info!("final view:\n{}", replay.controller().view().readout());

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<ExplorerConfig, Box<dyn Error>> {
    match path {
        Some(path) => Ok(ExplorerConfig::load_from_file(path)?),
        None => Ok(ExplorerConfig::load_or_default(Path::new("explorer.toml"))),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    let text = std::fs::read_to_string(&args.script)?;
    let script = EventScript::parse(&text)?;
    log::info!(
        "loaded {} command(s) from {}",
        script.commands().len(),
        args.script.display()
    );

    let stdout = BufWriter::new(io::stdout().lock());
    match args.format {
        OutputFormat::Text => {
            let mut presenter = TextUniformPresenter::new(stdout);
            replay(&config, &script, &mut presenter)?;
            presenter.into_inner().flush()?;
        }
        OutputFormat::Block => {
            let mut presenter = BlockHexPresenter::new(stdout);
            replay(&config, &script, &mut presenter)?;
            presenter.into_inner().flush()?;
        }
    }

    Ok(())
}
