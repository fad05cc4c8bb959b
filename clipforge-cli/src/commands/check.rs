use anyhow::Result;
use clipforge_core::ProcessorConfig;
use clipforge_core::check_dependency;
use clipforge_core::external::ffmpeg::ffmpeg_program;
use serde::Serialize;
use std::path::Path;

use crate::output::{print_error, print_info, print_record};

#[derive(Debug, Serialize)]
pub struct DependencyStatus {
    pub name: &'static str,
    pub program: String,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CheckRecord {
    pub success: bool,
    pub dependencies: Vec<DependencyStatus>,
}

fn check(name: &'static str, program: &Path, version_arg: &str) -> DependencyStatus {
    let result = check_dependency(program, version_arg);
    match &result {
        Ok(version) => print_info(name, version),
        Err(e) => print_error(&format!("{name} ({}): {e}", program.display())),
    }
    DependencyStatus {
        name,
        program: program.display().to_string(),
        available: result.is_ok(),
        version: result.as_ref().ok().cloned(),
        error: result.err().map(|e| e.to_string()),
    }
}

pub fn run_check(config: &ProcessorConfig) -> Result<bool> {
    let ffmpeg = ffmpeg_program(config.ffmpeg_path.as_deref());
    let dependencies = vec![
        check("yt-dlp", &config.ytdlp_path, "--version"),
        check("ffmpeg", &ffmpeg, "-version"),
    ];
    let record = CheckRecord {
        success: dependencies.iter().all(|d| d.available),
        dependencies,
    };
    print_record(&record)?;
    Ok(record.success)
}
