// src/runner.rs
use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use crate::{
    config::AppOptions,
    core::{Extractor, HttpSource, PageSource},
    file,
    progress::Progress,
    scrape,
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    pub records: usize,
    pub failed: Vec<u32>,
}

/// One full scrape against the live site.
pub fn run(
    opts: &AppOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error + Send + Sync>> {
    let source = HttpSource::new(&opts.net)?;
    run_with(opts, Arc::new(source), progress)
}

/// Collect → sort → export, with any page source.
/// Only export (and setup) errors come back as `Err`; fetch failures are in the summary.
pub fn run_with(
    opts: &AppOptions,
    source: Arc<dyn PageSource>,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error + Send + Sync>> {
    let extractor = Arc::new(Extractor::new()?);

    logf!(
        "scraping ids {}..={} with {} workers",
        opts.scrape.first_id, opts.scrape.last_id, opts.scrape.workers
    );
    let collected = scrape::collect(
        &opts.scrape,
        source,
        extractor,
        progress.as_deref_mut().map(|p| p as &mut dyn Progress),
    );
    logf!(
        "collected {} records, {} failed",
        collected.records.len(), collected.failed.len()
    );

    let files_written = file::export_all(&opts.export, &collected.records)?;

    if let Some(p) = progress.as_deref_mut() {
        let names: Vec<String> = files_written
            .iter()
            .map(|p| format!("'{}'", p.display()))
            .collect();
        p.log(&format!(
            "Scraping complete. Files {} have been created.",
            names.join(" and ")
        ));
    }

    Ok(RunSummary {
        files_written,
        records: collected.records.len(),
        failed: collected.failed,
    })
}
