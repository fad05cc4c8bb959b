use anyhow::Result;
use clipforge_core::{MediaProcessor, MetadataRecord};
use log::info;

use crate::cli::InfoArgs;
use crate::output::print_record;

pub fn run_info(processor: &MediaProcessor, args: &InfoArgs) -> Result<bool> {
    info!("Fetching metadata for {}", args.url);
    let result = processor.probe().probe(&args.url);
    if let Ok(metadata) = &result {
        info!(
            "{} ({} formats)",
            metadata.title.as_deref().unwrap_or("untitled"),
            metadata.formats.len()
        );
    }
    let record = MetadataRecord::from(&result);
    print_record(&record)?;
    Ok(record.success)
}
