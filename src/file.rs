// src/file.rs

use std::{
    borrow::Cow,
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::ExportOptions;
use crate::csv::{write_row, UTF8_BOM};
use crate::record::{Field, Record};

/// One output column: the entry id or one of the scraped fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    Id,
    Field(Field),
}

impl Column {
    pub fn header(self) -> &'static str {
        match self {
            Column::Id => "id",
            Column::Field(f) => f.column(),
        }
    }

    pub fn value(self, record: &Record) -> Cow<'_, str> {
        match self {
            Column::Id => Cow::Owned(record.id.to_string()),
            Column::Field(f) => Cow::Borrowed(record.get(f)),
        }
    }
}

/// `original.csv`: every field, id first.
pub const FULL_COLUMNS: &[Column] = &[
    Column::Id,
    Column::Field(Field::Headword),
    Column::Field(Field::Category),
    Column::Field(Field::Romanization),
    Column::Field(Field::Tone),
    Column::Field(Field::Translation1),
    Column::Field(Field::Translation2),
    Column::Field(Field::Remark),
];

/// `corresponding.csv`: headword and its two translations.
pub const NARROWED_COLUMNS: &[Column] = &[
    Column::Field(Field::Headword),
    Column::Field(Field::Translation1),
    Column::Field(Field::Translation2),
];

/// BOM, header row, then one row per record in the given order.
pub fn write_table<W: Write>(mut w: W, columns: &[Column], records: &[Record]) -> io::Result<()> {
    w.write_all(UTF8_BOM)?;
    write_row(&mut w, columns.iter().map(|c| c.header()))?;
    for r in records {
        write_row(&mut w, columns.iter().map(|c| c.value(r)))?;
    }
    Ok(())
}

/// Create/truncate `path` and write the table. Parent dirs are created as needed.
pub fn write_export(path: &Path, columns: &[Column], records: &[Record]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let file = File::create(path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    write_table(&mut out, columns, records)?;
    out.flush()
}

/// Write both exports from the same (already sorted) records.
/// Returns the paths written, full export first.
pub fn export_all(
    export: &ExportOptions,
    records: &[Record],
) -> Result<Vec<PathBuf>, Box<dyn std::error::Error + Send + Sync>> {
    let full = export.full_path();
    write_export(&full, FULL_COLUMNS, records)?;
    logd!("wrote {} rows to {}", records.len(), full.display());

    let narrowed = export.narrowed_path();
    write_export(&narrowed, NARROWED_COLUMNS, records)?;
    logd!("wrote {} rows to {}", records.len(), narrowed.display());

    Ok(vec![full, narrowed])
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
