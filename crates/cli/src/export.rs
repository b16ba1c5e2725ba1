use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use speed_meeting_shared::plan::Round;

/// Write the schedule as CSV: one header row, then one row per
/// (round, table) pair in generation order. The destination is truncated
/// if it already exists. Records end in CRLF and fields containing commas,
/// quotes, or line breaks are double-quoted with embedded quotes doubled.
pub fn write_csv(path: &Path, rounds: &[Round]) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);

    write_record(&mut out, ["Tour", "Table", "Participants"])?;
    for (n, round) in rounds.iter().enumerate() {
        for (m, table) in round.tables.iter().enumerate() {
            write_record(
                &mut out,
                [
                    format!("Tour {}", n + 1).as_str(),
                    format!("Table {}", m + 1).as_str(),
                    table.member_list().as_str(),
                ],
            )?;
        }
    }
    out.flush()
}

fn write_record<W: Write>(out: &mut W, fields: [&str; 3]) -> std::io::Result<()> {
    let row: Vec<String> = fields.iter().map(|f| quote_field(f)).collect();
    write!(out, "{}\r\n", row.join(","))
}

fn quote_field(raw: &str) -> String {
    if raw.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}
