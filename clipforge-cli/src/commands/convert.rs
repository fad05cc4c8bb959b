use anyhow::Result;
use clipforge_core::{MediaProcessor, ResultRecord, format_bytes};
use clipforge_core::utils::file_size;

use super::resolve_input;
use crate::cli::ConvertArgs;
use crate::output::{print_info, print_record};

pub fn run_convert(processor: &MediaProcessor, args: &ConvertArgs) -> Result<bool> {
    let input = resolve_input(&args.file, processor.store());
    let result = processor
        .transcoder()
        .convert(&input, &args.format, args.resolution.as_deref());

    if let Ok(artifact) = &result {
        if let Ok(size) = file_size(&artifact.output_path) {
            print_info("Wrote", format!("{} ({})", artifact.output_path.display(), format_bytes(size)));
        }
    }

    let record = ResultRecord::from_transcode(&result);
    print_record(&record)?;
    Ok(record.success)
}
