// src/csv.rs
use std::io::{self, Write};

pub const SEP: char = ',';
pub const LINE_END: &str = "\r\n";
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

fn needs_quotes(field: &str) -> bool {
    field.contains(SEP) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer. Minimal quoting, CRLF line ends.
pub fn write_row<W, I, S>(mut w: W, row: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", SEP)?; } else { first = false; }
        if needs_quotes(cell) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            w.write_all(cell.as_bytes())?;
        }
    }
    w.write_all(LINE_END.as_bytes())
}
