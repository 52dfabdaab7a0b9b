// src/config/options.rs
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::time::Duration;
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub net: NetOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub first_id: u32,
    pub last_id: u32,        // inclusive
    pub workers: usize,
    pub report_every: usize, // progress line every N completions (0 = final only)
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            first_id: FIRST_ID,
            last_id: LAST_ID,
            workers: WORKERS,
            report_every: REPORT_EVERY,
        }
    }
}

impl ScrapeOptions {
    pub fn ids(&self) -> RangeInclusive<u32> {
        self.first_id..=self.last_id
    }

    /// Number of ids in the range; zero when the range is reversed.
    pub fn total(&self) -> usize {
        if self.last_id < self.first_id { 0 } else { (self.last_id - self.first_id) as usize + 1 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetOptions {
    pub url_template: String, // "{id}" is replaced with the decimal id
    pub timeout: Duration,
}

impl Default for NetOptions {
    fn default() -> Self {
        Self {
            url_template: s!(BASE_URL),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

impl NetOptions {
    pub fn url_for(&self, id: u32) -> String {
        self.url_template.replace("{id}", &id.to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    pub full_file: String,
    pub narrowed_file: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            full_file: s!(FULL_EXPORT_FILE),
            narrowed_file: s!(NARROWED_EXPORT_FILE),
        }
    }
}

impl ExportOptions {
    pub fn full_path(&self) -> PathBuf {
        self.out_dir.join(&self.full_file)
    }

    pub fn narrowed_path(&self) -> PathBuf {
        self.out_dir.join(&self.narrowed_file)
    }
}
