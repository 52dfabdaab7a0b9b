// src/record.rs
//! One lexicon entry and the table that says where each of its fields lives.
//!
//! The page for entry `id` renders every field in its own `<span>` with a fixed
//! ASP.NET control id. `FIELDS` is the single source of truth for that mapping and
//! for the CSV column names; the extractor and the exporters both walk it.

/// A named field of a lexicon entry.
/// Discriminants are positions in `FIELDS`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Headword = 0,
    Category = 1,
    Romanization = 2,
    Tone = 3,
    Translation1 = 4,
    Translation2 = 5,
    Remark = 6,
}

pub struct FieldSpec {
    pub field: Field,
    pub column: &'static str,
    pub element_id: &'static str,
}

pub const FIELD_COUNT: usize = 7;

/// Order here is the order of the full export's columns after `id`.
pub static FIELDS: [FieldSpec; FIELD_COUNT] = [
    FieldSpec { field: Field::Headword,     column: "粵語",     element_id: "MainContent_repeaterRecord_lbl粵語詞彙_0" },
    FieldSpec { field: Field::Category,     column: "詞彙類別", element_id: "MainContent_repeaterRecord_lbl詞彙類別_0" },
    FieldSpec { field: Field::Romanization, column: "粵語拼音", element_id: "MainContent_repeaterRecord_lbl粵語拼音_0" },
    FieldSpec { field: Field::Tone,         column: "聲調",     element_id: "MainContent_repeaterRecord_lbl聲調_0" },
    FieldSpec { field: Field::Translation1, column: "標準漢語1", element_id: "MainContent_repeaterRecord_repeaterTranslation_0_lblTranslation_0" },
    FieldSpec { field: Field::Translation2, column: "標準漢語2", element_id: "MainContent_repeaterRecord_repeaterTranslation_0_lblTranslation_1" },
    FieldSpec { field: Field::Remark,       column: "備註",     element_id: "MainContent_repeaterRecord_lblRemark_0" },
];

impl Field {
    fn index(self) -> usize {
        self as usize
    }

    pub fn spec(self) -> &'static FieldSpec {
        &FIELDS[self.index()]
    }

    pub fn column(self) -> &'static str {
        self.spec().column
    }

    pub fn element_id(self) -> &'static str {
        self.spec().element_id
    }
}

/// One scraped entry. Missing fields are empty strings, never absent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub id: u32,
    values: [String; FIELD_COUNT],
}

impl Record {
    /// Values are in `FIELDS` order.
    pub fn new(id: u32, values: [String; FIELD_COUNT]) -> Self {
        Self { id, values }
    }

    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    pub fn headword(&self) -> &str {
        self.get(Field::Headword)
    }

    /// Builder-style setter; handy for fixtures.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.values[field.index()] = value.into();
        self
    }

    pub fn empty(id: u32) -> Self {
        Self { id, values: Default::default() }
    }
}
