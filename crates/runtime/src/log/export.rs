//! JSON and CSV renderings of the log.

use std::str::FromStr;

use game_core::text::format_timestamp;

use super::LogEntry;
use crate::error::{Result, RuntimeError};
use crate::repository::RepositoryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl FromStr for ExportFormat {
    type Err = RuntimeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(RuntimeError::UnsupportedExportFormat(s.to_string())),
        }
    }
}

const CSV_HEADERS: [&str; 4] = ["id", "timestamp", "type", "message"];

pub(super) fn render<'a>(
    format: ExportFormat,
    entries: impl Iterator<Item = &'a LogEntry>,
) -> Result<String> {
    match format {
        ExportFormat::Json => {
            let entries: Vec<&LogEntry> = entries.collect();
            serde_json::to_string_pretty(&entries)
                .map_err(|e| RuntimeError::from(RepositoryError::from(e)))
        }
        ExportFormat::Csv => {
            let mut rows = vec![CSV_HEADERS.join(",")];
            rows.extend(entries.map(|entry| {
                [
                    quote(&entry.id.to_string()),
                    format_timestamp(&entry.timestamp),
                    quote(entry.kind.as_ref()),
                    quote(&entry.message),
                ]
                .join(",")
            }));
            Ok(rows.join("\n"))
        }
    }
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_formats() {
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
    }

    #[test]
    fn unknown_format_is_rejected() {
        let err = "xml".parse::<ExportFormat>().unwrap_err();
        assert!(err.to_string().starts_with("Unsupported export format"));
    }

    #[test]
    fn csv_fields_escape_quotes() {
        assert_eq!(quote(r#"say "hi""#), r#""say ""hi""""#);
    }
}
