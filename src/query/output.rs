//! Rendering of lookup results to stdout.

use std::io::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use wardmap::{Coverage, Entry};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON array of `{key, name}` objects
    #[default]
    Json,
    /// CSV with a header row
    Csv,
    /// One tab-separated record per line
    Text,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub pretty: bool,
}

pub fn write_entries<W: Write>(
    mut writer: W,
    entries: &[Entry],
    options: OutputOptions,
) -> Result<()> {
    match options.format {
        OutputFormat::Json => write_json(writer, entries, options.pretty),
        OutputFormat::Csv => write_csv(writer, entries),
        OutputFormat::Text => {
            for entry in entries {
                writeln!(writer, "{}", entry)?;
            }
            Ok(())
        }
    }
}

pub fn write_coverage<W: Write>(
    mut writer: W,
    coverage: &Coverage,
    options: OutputOptions,
) -> Result<()> {
    match options.format {
        OutputFormat::Json => write_json(writer, coverage, options.pretty),
        OutputFormat::Csv => write_csv(writer, std::slice::from_ref(coverage)),
        OutputFormat::Text => {
            writeln!(writer, "states\t{}", coverage.states)?;
            writeln!(writer, "lgas\t{}", coverage.lgas)?;
            writeln!(writer, "wards\t{}", coverage.wards)?;
            writeln!(writer, "polling_units\t{}", coverage.polling_units)?;
            writeln!(writer, "unpopulated_lgas\t{}", coverage.unpopulated_lgas)?;
            writeln!(writer, "unpopulated_wards\t{}", coverage.unpopulated_wards)?;
            Ok(())
        }
    }
}

fn write_json<W, T>(mut writer: W, value: &T, pretty: bool) -> Result<()>
where
    W: Write,
    T: Serialize + ?Sized,
{
    let written = if pretty {
        serde_json::to_writer_pretty(&mut writer, value)
    } else {
        serde_json::to_writer(&mut writer, value)
    };
    written.context("Failed to write JSON output")?;
    writeln!(writer)?;
    Ok(())
}

fn write_csv<W: Write, T: Serialize>(writer: W, records: &[T]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer
            .serialize(record)
            .context("Failed to write CSV record")?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(entries: &[Entry], format: OutputFormat, pretty: bool) -> String {
        let mut buf = Vec::new();
        write_entries(&mut buf, entries, OutputOptions { format, pretty }).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn sample() -> Vec<Entry> {
        vec![
            Entry::new("pu-1", "PU 001 - Ikeja Central Market"),
            Entry::new("pu-2", "PU 002 - Obafemi Awolowo Way Junction"),
        ]
    }

    #[test]
    fn test_json_output() {
        let out = render(&sample()[..1], OutputFormat::Json, false);
        assert_eq!(
            out,
            "[{\"key\":\"pu-1\",\"name\":\"PU 001 - Ikeja Central Market\"}]\n"
        );
    }

    #[test]
    fn test_empty_json_is_empty_array() {
        assert_eq!(render(&[], OutputFormat::Json, false), "[]\n");
    }

    #[test]
    fn test_pretty_json_spans_lines() {
        let out = render(&sample(), OutputFormat::Json, true);
        assert!(out.lines().count() > 2);
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[1]["key"], "pu-2");
    }

    #[test]
    fn test_csv_output_has_header() {
        let out = render(&sample(), OutputFormat::Csv, false);
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("key,name"));
        assert_eq!(lines.next(), Some("pu-1,PU 001 - Ikeja Central Market"));
        assert_eq!(lines.count(), 1);
    }

    #[test]
    fn test_text_output() {
        let out = render(&sample(), OutputFormat::Text, false);
        assert_eq!(
            out,
            "pu-1\tPU 001 - Ikeja Central Market\npu-2\tPU 002 - Obafemi Awolowo Way Junction\n"
        );
    }

    #[test]
    fn test_coverage_csv_single_row() {
        let coverage = Coverage {
            states: 1,
            lgas: 2,
            wards: 3,
            polling_units: 4,
            unpopulated_lgas: 1,
            unpopulated_wards: 0,
        };
        let mut buf = Vec::new();
        write_coverage(
            &mut buf,
            &coverage,
            OutputOptions {
                format: OutputFormat::Csv,
                pretty: false,
            },
        )
        .unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert_eq!(
            out,
            "states,lgas,wards,polling_units,unpopulated_lgas,unpopulated_wards\n1,2,3,4,1,0\n"
        );
    }
}
