use clap::ValueEnum;
use csv::WriterBuilder;

use crate::error::{ConvertError, ConvertResult};
use crate::models::CardRecord;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Card Kingdom import CSV: name, set name, foil (0/1), quantity
    CardKingdom,
    /// `<qty> <name> | <set code> | <collector number>`
    Decklist,
}

impl OutputFormat {
    /// Default file name for this format when none is given
    pub fn default_file_name(&self) -> &'static str {
        match self {
            OutputFormat::CardKingdom => "output.csv",
            OutputFormat::Decklist => "output.txt",
        }
    }
}

/// Serialize `records` in the given format
pub fn format_records(format: OutputFormat, records: &[CardRecord]) -> ConvertResult<String> {
    match format {
        OutputFormat::CardKingdom => format_card_kingdom_csv(records),
        OutputFormat::Decklist => Ok(format_decklist(records)),
    }
}

/// Card Kingdom CSV rows, no header
pub fn format_card_kingdom_csv(records: &[CardRecord]) -> ConvertResult<String> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(vec![]);

    for record in records {
        let foil = if record.is_foil() { "1" } else { "0" };
        let quantity = record.quantity().to_string();
        wtr.write_record([record.name(), record.set_name(), foil, quantity.as_str()])?;
    }

    let data = wtr
        .into_inner()
        .map_err(|e| ConvertError::Io(e.into_error()))?;
    String::from_utf8(data).map_err(|e| ConvertError::Output(e.to_string()))
}

/// Pipe-separated decklist, one card per line, no trailing newline
pub fn format_decklist(records: &[CardRecord]) -> String {
    records
        .iter()
        .map(format_decklist_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_decklist_line(record: &CardRecord) -> String {
    let mut line = format!(
        "{} {} | {}",
        record.quantity(),
        record.name(),
        record.set_code()
    );
    if let Some(cn) = record.collector_number() {
        line.push_str(&format!(" | {cn}"));
    }
    line
}
