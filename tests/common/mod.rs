// tests/common/mod.rs
#![allow(dead_code)]

use std::collections::HashMap;

use hanyu_scrape::core::{FetchError, PageSource};
use hanyu_scrape::progress::Progress;
use reqwest::StatusCode;

/// Minimal entry page with only the fields given as (element id, text).
pub fn entry_page(fields: &[(&str, &str)]) -> String {
    let mut body = String::new();
    for (id, text) in fields {
        body.push_str(&format!("<span id=\"{id}\">{text}</span>\n"));
    }
    format!("<html><body><form>{body}</form></body></html>")
}

pub fn headword_page(headword: &str, tr1: &str) -> String {
    entry_page(&[
        ("MainContent_repeaterRecord_lbl粵語詞彙_0", headword),
        ("MainContent_repeaterRecord_repeaterTranslation_0_lblTranslation_0", tr1),
    ])
}

/// In-memory site: ids present in `pages` succeed, everything else is a 404.
pub struct FakeSite {
    pub pages: HashMap<u32, String>,
}

impl FakeSite {
    pub fn new(pages: impl IntoIterator<Item = (u32, String)>) -> Self {
        Self { pages: pages.into_iter().collect() }
    }
}

impl PageSource for FakeSite {
    fn fetch(&self, id: u32) -> Result<String, FetchError> {
        self.pages.get(&id).cloned().ok_or_else(|| FetchError::Status {
            status: StatusCode::NOT_FOUND,
            url: format!("fake://entry?id={id}"),
        })
    }
}

#[derive(Default)]
pub struct Recorder {
    pub total: Option<usize>,
    pub done: Vec<u32>,
    pub failed: Vec<(u32, String)>,
    pub ticks: Vec<(usize, usize)>,
    pub logs: Vec<String>,
    pub finished: usize,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.total = Some(total); }
    fn log(&mut self, msg: &str) { self.logs.push(msg.to_string()); }
    fn item_done(&mut self, id: u32) { self.done.push(id); }
    fn item_failed(&mut self, id: u32, err: &str) { self.failed.push((id, err.to_string())); }
    fn tick(&mut self, completed: usize, total: usize) { self.ticks.push((completed, total)); }
    fn finish(&mut self) { self.finished += 1; }
}

/// Strip the BOM and split into CRLF-terminated lines.
pub fn csv_lines(bytes: &[u8]) -> Vec<String> {
    assert!(bytes.starts_with(b"\xEF\xBB\xBF"), "missing BOM");
    let text = std::str::from_utf8(&bytes[3..]).unwrap();
    assert!(text.ends_with("\r\n"));
    text.trim_end_matches("\r\n").split("\r\n").map(str::to_string).collect()
}
