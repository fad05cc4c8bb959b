use anyhow::Result;
use clipforge_core::{MediaProcessor, ResultRecord, SourceDescriptor, format_duration};

use crate::cli::DownloadArgs;
use crate::output::{print_info, print_record};

pub fn run_download(processor: &MediaProcessor, args: &DownloadArgs) -> Result<bool> {
    let mut source = SourceDescriptor::new(&args.url).audio_only(args.audio_only);
    if let Some(format) = &args.format {
        source = source.with_format(format);
    }

    let result = processor.downloader().fetch(&source);
    if let Ok(artifact) = &result {
        print_info("Saved", artifact.filepath.display());
        if let Some(title) = &artifact.title {
            let length = artifact.duration.map(format_duration).unwrap_or_default();
            print_info("Title", format!("{title} {length}").trim_end());
        }
    }

    let record = ResultRecord::from_download(&result);
    print_record(&record)?;
    Ok(record.success)
}
