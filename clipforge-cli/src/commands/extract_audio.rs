use anyhow::Result;
use clipforge_core::{MediaProcessor, ResultRecord};

use super::resolve_input;
use crate::cli::ExtractAudioArgs;
use crate::output::{print_info, print_record};

pub fn run_extract_audio(processor: &MediaProcessor, args: &ExtractAudioArgs) -> Result<bool> {
    let input = resolve_input(&args.file, processor.store());
    let result = processor.transcoder().extract_audio(&input, &args.format);

    if let Ok(artifact) = &result {
        print_info("Wrote", artifact.output_path.display());
    }

    let record = ResultRecord::from_transcode(&result);
    print_record(&record)?;
    Ok(record.success)
}
