// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://apps.itsc.cuhk.edu.hk/hanyu/Page/Search.aspx?id={id}";
pub const REQUEST_TIMEOUT_SECS: u64 = 2;

// Scrape
pub const FIRST_ID: u32 = 1;
pub const LAST_ID: u32 = 22232;
pub const REPORT_EVERY: usize = 100;

// Export
pub const DEFAULT_OUT_DIR: &str = ".";
pub const FULL_EXPORT_FILE: &str = "original.csv";
pub const NARROWED_EXPORT_FILE: &str = "corresponding.csv";

// Concurrency
pub const WORKERS: usize = 10;
