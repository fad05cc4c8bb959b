// clipforge-cli/src/main.rs
//
// Entry point of the clipforge binary: parses arguments, initialises
// logging, builds the MediaProcessor and dispatches to one command. Exit
// status is 0 when the printed record reports success and 1 otherwise.

use clap::Parser;
use clipforge_cli::commands::{check, convert, download, extract_audio, info};
use clipforge_cli::{Cli, Commands, logging, output, progress};
use clipforge_core::{MediaProcessor, ProcessorConfig, ProcessorConfigBuilder};
use std::process;

fn build_config(cli: &Cli) -> ProcessorConfig {
    let mut builder = ProcessorConfigBuilder::from_env();
    if let Some(dir) = &cli.artifact_dir {
        builder = builder.artifact_dir(dir);
    }
    if let Some(ytdlp) = &cli.ytdlp {
        builder = builder.ytdlp_path(ytdlp);
    }
    if let Some(ffmpeg) = &cli.ffmpeg {
        builder = builder.ffmpeg_path(ffmpeg);
    }
    builder.build()
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    let log_file = logging::init_logging(cli.verbose, cli.log_dir.as_deref())?;
    if let Some(path) = &log_file {
        log::info!("Logging to {}", path.display());
    }

    let config = build_config(cli);
    log::debug!("Configuration: {config:?}");

    if let Commands::Check = cli.command {
        return check::run_check(&config);
    }

    let processor = MediaProcessor::new(&config)
        .with_progress(progress::select_sink(log_file.is_some()));
    processor.store().ensure_exists()?;

    match &cli.command {
        Commands::Info(args) => info::run_info(&processor, args),
        Commands::Download(args) => download::run_download(&processor, args),
        Commands::Convert(args) => convert::run_convert(&processor, args),
        Commands::ExtractAudio(args) => extract_audio::run_extract_audio(&processor, args),
        Commands::Check => check::run_check(&config),
    }
}

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            output::print_error(&format!("{e:#}"));
            process::exit(1);
        }
    }
}
