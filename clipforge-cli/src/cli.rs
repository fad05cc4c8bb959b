// clipforge-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Args, Parser, Subcommand};
use clipforge_core::config::{ENV_ARTIFACT_DIR, ENV_FFMPEG, ENV_YTDLP};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Clipforge: fetch and transcode media with yt-dlp and ffmpeg",
    long_about = "Downloads remote media, converts local files and extracts audio \
                  tracks via the clipforge-core library. Every command prints a \
                  single JSON result record on stdout."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory every produced file is written to
    #[arg(long, global = true, value_name = "DIR", env = ENV_ARTIFACT_DIR)]
    pub artifact_dir: Option<PathBuf>,

    /// yt-dlp executable
    #[arg(long, global = true, value_name = "PATH", env = ENV_YTDLP)]
    pub ytdlp: Option<PathBuf>,

    /// ffmpeg executable
    #[arg(long, global = true, value_name = "PATH", env = ENV_FFMPEG)]
    pub ffmpeg: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write logs to a timestamped file in this directory
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print metadata and available formats for a URL without downloading
    Info(InfoArgs),
    /// Download a URL into the artifact directory
    Download(DownloadArgs),
    /// Re-encode a local file to H.264/AAC, optionally rescaled
    Convert(ConvertArgs),
    /// Extract the audio track of a local file
    ExtractAudio(ExtractAudioArgs),
    /// Check that yt-dlp and ffmpeg can be run
    Check,
}

#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Source URL
    pub url: String,
}

#[derive(Args, Debug)]
pub struct DownloadArgs {
    /// Source URL
    pub url: String,

    /// yt-dlp format selector, passed through unmodified
    #[arg(short, long, value_name = "SELECTOR")]
    pub format: Option<String>,

    /// Download the best audio stream and convert it to MP3
    #[arg(long)]
    pub audio_only: bool,
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input file: a path, or a file name inside the artifact directory
    pub file: PathBuf,

    /// Target container
    #[arg(short, long, default_value = "mp4")]
    pub format: String,

    /// Target resolution for the scale filter, e.g. 1280x720
    #[arg(short, long, value_name = "WxH")]
    pub resolution: Option<String>,
}

#[derive(Args, Debug)]
pub struct ExtractAudioArgs {
    /// Input file: a path, or a file name inside the artifact directory
    pub file: PathBuf,

    /// Target audio format; mp3 is re-encoded, anything else is stream-copied
    #[arg(short, long, default_value = "mp3")]
    pub format: String,
}
