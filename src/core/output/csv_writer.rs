//! CSV output writer.

use std::fs;
use std::io;
use std::path::Path;

use crate::Message;
use crate::error::Result;

use super::ensure_parent_dir;

/// Header row written before any record.
pub const CSV_HEADER: [&str; 3] = ["Timestamp", "Name", "Text"];

/// Writes messages to a CSV file.
///
/// # Format
/// - Delimiter: `,`
/// - Columns: `Timestamp`, `Name`, `Text`
/// - Quoting: only when a field contains `,`, `"` or a line break
/// - Records end with `\r\n`; line breaks inside a quoted field are kept as-is
/// - Encoding: UTF-8
///
/// The destination is overwritten and missing parent directories are created.
pub fn write_csv(messages: &[Message], output_path: impl AsRef<Path>) -> Result<()> {
    let output_path = output_path.as_ref();
    let csv = to_csv(messages)?;
    ensure_parent_dir(output_path)?;
    fs::write(output_path, csv)?;
    tracing::info!(path = %output_path.display(), rows = messages.len(), "wrote CSV");
    Ok(())
}

/// Converts messages to a CSV string.
///
/// Same format as [`write_csv`], but returns the text instead of writing it.
///
/// ```rust
/// use chatconv::Message;
/// use chatconv::core::output::to_csv;
///
/// let csv = to_csv(&[Message::new("1/1/24, 10:00 AM", "Aditya", "Hello there")])?;
/// assert_eq!(csv, "Timestamp,Name,Text\r\n\"1/1/24, 10:00 AM\",Aditya,Hello there\r\n");
/// # Ok::<(), chatconv::ChatpackError>(())
/// ```
pub fn to_csv(messages: &[Message]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b',')
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for msg in messages {
        writer.write_record(msg.as_record())?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}
