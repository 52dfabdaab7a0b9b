// src/core/html.rs
//! Entry page → `Record`.
//!
//! Every field is looked up by its element id from `record::FIELDS`. The selectors
//! are compiled once; `Extractor` is immutable afterwards and is shared by all
//! worker threads. The parsed `Html` tree never leaves the calling thread.

use scraper::{Html, Selector};
use thiserror::Error;

use crate::core::sanitize::join_stripped;
use crate::record::{FIELD_COUNT, FIELDS, Record};

#[derive(Debug, Error)]
#[error("bad selector for element id {element_id}: {reason}")]
pub struct ExtractError {
    pub element_id: &'static str,
    pub reason: String,
}

pub struct Extractor {
    selectors: [Selector; FIELD_COUNT],
}

impl Extractor {
    pub fn new() -> Result<Self, ExtractError> {
        let mut compiled = Vec::with_capacity(FIELD_COUNT);
        for spec in &FIELDS {
            let css = format!("[id=\"{}\"]", spec.element_id);
            let sel = Selector::parse(&css).map_err(|e| ExtractError {
                element_id: spec.element_id,
                reason: e.to_string(),
            })?;
            compiled.push(sel);
        }
        let selectors: [Selector; FIELD_COUNT] = compiled.try_into().map_err(|_| ExtractError {
            element_id: "",
            reason: s!("field table size mismatch"),
        })?;
        Ok(Self { selectors })
    }

    /// Never fails: an element that isn't on the page reads as "".
    pub fn extract(&self, id: u32, html: &str) -> Record {
        let doc = Html::parse_document(html);
        let values = self.selectors.each_ref().map(|sel| {
            doc.select(sel)
                .next()
                .map(|el| join_stripped(el.text()))
                .unwrap_or_default()
        });
        Record::new(id, values)
    }
}
